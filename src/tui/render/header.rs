use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode::fit_to_width;

/// Counter text as reflected in the view, e.g. `2 items  1 done  50%`
pub fn counts_text(total: usize, done: usize, percent: f64) -> String {
    let noun = if total == 1 { "item" } else { "items" };
    format!("{} {}  {} done  {:.0}%", total, noun, done, percent)
}

/// Number of filled cells for a bar `width` cells wide
pub fn bar_cells(percent: f64, width: usize) -> usize {
    let filled = (percent.clamp(0.0, 100.0) / 100.0 * width as f64).round() as usize;
    filled.min(width)
}

/// Title on the left, counters on the right
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let view = &app.ctx.view;

    let title = "Tally";
    let counts = counts_text(view.total_count(), view.done_count(), view.progress_percent());

    let title_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let counts_style = Style::default().fg(app.theme.text).bg(bg);

    let line = if title.len() + 1 + counts.len() <= width {
        let padding = width - title.len() - counts.len();
        Line::from(vec![
            Span::styled(title, title_style),
            Span::styled(" ".repeat(padding), Style::default().bg(bg)),
            Span::styled(counts, counts_style),
        ])
    } else {
        Line::from(Span::styled(fit_to_width(&counts, width), counts_style))
    };

    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}

/// Full-width progress bar
pub fn render_progress_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let filled = bar_cells(app.ctx.view.progress_percent(), width);

    let line = Line::from(vec![
        Span::styled(
            "\u{2588}".repeat(filled),
            Style::default().fg(app.theme.bar_filled).bg(bg),
        ),
        Span::styled(
            "\u{2591}".repeat(width - filled),
            Style::default().fg(app.theme.bar_empty).bg(bg),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;
    use insta::assert_snapshot;

    #[test]
    fn counts_wording() {
        assert_eq!(counts_text(0, 0, 0.0), "0 items  0 done  0%");
        assert_eq!(counts_text(1, 1, 100.0), "1 item  1 done  100%");
        assert_eq!(counts_text(3, 1, 100.0 / 3.0), "3 items  1 done  33%");
    }

    #[test]
    fn bar_fill() {
        assert_eq!(bar_cells(0.0, 20), 0);
        assert_eq!(bar_cells(50.0, 20), 10);
        assert_eq!(bar_cells(100.0, 20), 20);
        assert_eq!(bar_cells(100.0 / 3.0, 10), 3);
        assert_eq!(bar_cells(250.0, 10), 10);
    }

    #[test]
    fn header_half_done() {
        let mut app = app_with_items(&["Buy milk", "Walk the dog"]);
        let id = app.ctx.view.rows()[0].id;
        app.ctx.toggle_checked(id);

        let output = render_to_string(30, 2, |frame, area| {
            let rows = ratatui::layout::Layout::vertical([
                ratatui::layout::Constraint::Length(1),
                ratatui::layout::Constraint::Length(1),
            ])
            .split(area);
            render_header(frame, &app, rows[0]);
            render_progress_bar(frame, &app, rows[1]);
        });
        assert_snapshot!(output, @r"
        Tally     2 items  1 done  50%
        ███████████████░░░░░░░░░░░░░░░
        ");
    }

    #[test]
    fn header_narrow_drops_title() {
        let app = app_with_items(&["a"]);
        let output = render_to_string(12, 1, |frame, area| {
            render_header(frame, &app, area);
        });
        assert_eq!(output, "1 item  0 d\u{2026}");
    }
}
