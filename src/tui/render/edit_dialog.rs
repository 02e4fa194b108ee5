use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_segmentation::UnicodeSegmentation;

use crate::tui::app::App;
use crate::util::unicode::{display_width, fit_to_width};

use super::centered_rect;

const DIALOG_WIDTH: u16 = 48;
const DIALOG_HEIGHT: u16 = 4;

/// Split `text` around `cursor` so the cursor stays visible within `width`
/// cells (one cell is kept for the cursor block itself).
pub fn visible_window(text: &str, cursor: usize, width: usize) -> (String, String) {
    let cursor = cursor.min(text.len());
    let room = width.saturating_sub(1);
    let mut before = &text[..cursor];
    while display_width(before) > room {
        let Some(first) = before.graphemes(true).next() else {
            break;
        };
        before = &before[first.len()..];
    }
    let after = fit_to_width(&text[cursor..], room - display_width(before));
    (before.to_string(), after)
}

/// The edit popup over the item list
pub fn render_edit_dialog(frame: &mut Frame, app: &App, area: Rect) {
    let popup = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);
    frame.render_widget(Clear, popup);

    let bg = app.theme.background;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Edit item ")
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let (before, after) = visible_window(
        app.ctx.view.edit_form_value(),
        app.edit_cursor,
        inner.width as usize,
    );
    let text_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let input = Line::from(vec![
        Span::styled(before, text_style),
        Span::styled(
            "\u{258C}",
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::SLOW_BLINK),
        ),
        Span::styled(after, text_style),
    ]);
    let hint = Line::from(Span::styled(
        "Enter save  Esc cancel",
        Style::default().fg(app.theme.dim).bg(bg),
    ));

    frame.render_widget(Paragraph::new(vec![input, hint]), inner);
}
