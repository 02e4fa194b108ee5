use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode::{display_width, fit_to_width};

/// Width of the `[x] ` prefix
const CHECKBOX_WIDTH: usize = 4;

/// Render the rows the view holds. Dimmed while the working area is locked.
pub fn render_item_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let rows = app.ctx.view.rows();

    if rows.is_empty() {
        let empty = Paragraph::new("No items yet. Press a to add one.")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let visible_height = area.height as usize;
    let width = area.width as usize;
    let locked = app.ctx.view.is_working_area_locked();

    // Keep the cursor on screen
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if visible_height > 0 && app.cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = app.cursor + 1 - visible_height;
    }

    let mut lines: Vec<Line> = Vec::new();
    for (i, row) in app
        .ctx
        .view
        .rows()
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(visible_height)
    {
        let is_cursor = i == app.cursor;
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };

        let mut check_style = Style::default()
            .fg(app.theme.check_color(row.checked))
            .bg(row_bg);
        let mut label_style = if row.checked {
            Style::default().fg(app.theme.dim).bg(row_bg)
        } else {
            Style::default().fg(app.theme.text_bright).bg(row_bg)
        };
        if is_cursor {
            label_style = label_style.add_modifier(Modifier::BOLD);
        }
        if locked {
            check_style = check_style.fg(app.theme.dim).add_modifier(Modifier::DIM);
            label_style = label_style.fg(app.theme.dim).add_modifier(Modifier::DIM);
        }

        let checkbox = if row.checked { "[x] " } else { "[ ] " };
        let label = fit_to_width(&row.label, width.saturating_sub(CHECKBOX_WIDTH));
        let mut spans = vec![
            Span::styled(checkbox, check_style),
            Span::styled(label, label_style),
        ];

        if is_cursor {
            let content_width: usize = spans.iter().map(|s| display_width(&s.content)).sum();
            if content_width < width {
                spans.push(Span::styled(
                    " ".repeat(width - content_width),
                    Style::default().bg(row_bg),
                ));
            }
        }

        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;
    use insta::assert_snapshot;

    #[test]
    fn empty_list_hint() {
        let mut app = app_with_items(&[]);
        let output = render_to_string(TERM_W, 5, |frame, area| {
            render_item_list(frame, &mut app, area);
        });
        assert_eq!(output, "No items yet. Press a to add one.");
    }

    #[test]
    fn rows_with_checkboxes() {
        let mut app = app_with_items(&["Buy milk", "Walk the dog", "Write letter"]);
        let id = app.ctx.view.rows()[1].id;
        app.ctx.toggle_checked(id);

        let output = render_to_string(30, 5, |frame, area| {
            render_item_list(frame, &mut app, area);
        });
        assert_snapshot!(output, @r"
        [ ] Buy milk
        [x] Walk the dog
        [ ] Write letter
        ");
    }

    #[test]
    fn long_labels_truncated_twice() {
        let text = "Call the plumber about the leaking kitchen tap";
        let mut app = app_with_items(&[text]);
        assert_eq!(
            app.ctx.view.rows()[0].label,
            "Call the plumber about the lea..."
        );

        // plenty of room: the 30-character label plus ellipsis
        let wide = render_to_string(TERM_W, 1, |frame, area| {
            render_item_list(frame, &mut app, area);
        });
        assert_eq!(wide, "[ ] Call the plumber about the lea...");

        // narrow terminal: cut again to fit
        let narrow = render_to_string(20, 1, |frame, area| {
            render_item_list(frame, &mut app, area);
        });
        assert_eq!(narrow, "[ ] Call the plumbe\u{2026}");
    }

    #[test]
    fn scrolls_to_cursor() {
        let mut app = app_with_items(&["a", "b", "c", "d", "e"]);
        app.cursor = 4;
        let output = render_to_string(20, 2, |frame, area| {
            render_item_list(frame, &mut app, area);
        });
        assert_eq!(app.scroll_offset, 3);
        assert_eq!(output, "[ ] d\n[ ] e");
    }
}
