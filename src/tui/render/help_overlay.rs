use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::centered_rect;

const BINDINGS: &[(&str, &str)] = &[
    ("j/k", "move down / up"),
    ("g/G", "first / last item"),
    ("a", "add an item"),
    ("space", "tick / untick"),
    ("e", "edit the item"),
    ("d", "delete the item"),
    ("c", "untick everything"),
    ("Enter", "save edit / add"),
    ("Esc", "cancel / quit"),
    ("q", "quit"),
];

/// Key reference, drawn over everything
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let height = BINDINGS.len() as u16 + 2;
    let popup = centered_rect(36, height, area);
    frame.render_widget(Clear, popup);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);

    let lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!(" {:<7}", key), key_style),
                Span::styled(*desc, desc_style),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Keys ")
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
