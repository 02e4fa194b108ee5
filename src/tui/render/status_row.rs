use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode::display_width;

use super::edit_dialog::visible_window;

const NAVIGATE_HINTS: &str = "a add  space check  e edit  d delete  c clear  ? help  q quit";

/// Append `hint` right-aligned if it fits after the existing spans
fn push_right_hint<'a>(spans: &mut Vec<Span<'a>>, hint: &'a str, width: usize, style: Style) {
    let content_width: usize = spans.iter().map(|s| display_width(&s.content)).sum();
    let hint_width = display_width(hint);
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), style));
        spans.push(Span::styled(hint, style));
    }
}

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let dim = Style::default().fg(app.theme.dim).bg(bg);

    let line = match app.mode {
        Mode::Navigate => {
            if let Some(msg) = &app.status_message {
                Line::from(Span::styled(
                    msg.clone(),
                    Style::default().fg(app.theme.red).bg(bg),
                ))
            } else if app.ui.show_key_hints {
                Line::from(Span::styled(NAVIGATE_HINTS, dim))
            } else {
                Line::from("")
            }
        }
        Mode::Add => {
            // Prompt: add: text▌
            let prompt = "add: ";
            let (before, after) = visible_window(
                &app.add_buffer,
                app.add_cursor,
                width.saturating_sub(prompt.len()),
            );
            let text_style = Style::default().fg(app.theme.text_bright).bg(bg);
            let mut spans = vec![
                Span::styled(prompt, dim),
                Span::styled(before, text_style),
                Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)),
                Span::styled(after, text_style),
            ];
            push_right_hint(&mut spans, "Enter add  Esc cancel", width, dim);
            Line::from(spans)
        }
        Mode::Edit => Line::from(Span::styled("editing", dim)),
        Mode::Confirm => {
            let label = app
                .pending_delete
                .and_then(|id| app.ctx.view.row(id))
                .map(|r| r.label.as_str())
                .unwrap_or("");
            Line::from(vec![
                Span::styled(
                    format!("delete \"{}\"? ", label),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
                Span::styled("y/n", Style::default().fg(app.theme.highlight).bg(bg)),
            ])
        }
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
