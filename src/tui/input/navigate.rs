use crossterm::event::{KeyCode, KeyEvent};
use tracing::warn;

use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    if app.show_help {
        // any key closes help
        app.show_help = false;
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,

        KeyCode::Char('j') | KeyCode::Down => move_cursor(app, 1),
        KeyCode::Char('k') | KeyCode::Up => move_cursor(app, -1),
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.cursor = app.row_count().saturating_sub(1);
        }

        KeyCode::Char('a') => {
            app.add_buffer.clear();
            app.add_cursor = 0;
            app.mode = Mode::Add;
        }
        KeyCode::Char(' ') | KeyCode::Char('x') => {
            if let Some(id) = app.selected_id() {
                app.ctx.toggle_checked(id);
            }
        }
        KeyCode::Char('c') => app.ctx.clear_checked(),
        KeyCode::Char('e') | KeyCode::Enter => begin_edit(app),
        KeyCode::Char('d') | KeyCode::Delete => request_delete(app),
        _ => {}
    }
}

fn move_cursor(app: &mut App, delta: isize) {
    let count = app.row_count();
    if count == 0 {
        return;
    }
    app.cursor = app.cursor.saturating_add_signed(delta).min(count - 1);
}

fn begin_edit(app: &mut App) {
    let Some(id) = app.selected_id() else {
        return;
    };
    match app.ctx.begin_edit(id) {
        Ok(_) => {
            app.edit_cursor = app.ctx.view.edit_form_value().len();
            app.mode = Mode::Edit;
        }
        Err(e) => {
            warn!(error = %e, "could not start edit");
            app.status_message = Some(e.to_string());
        }
    }
}

fn request_delete(app: &mut App) {
    let Some(id) = app.selected_id() else {
        return;
    };
    if app.ui.confirm_delete {
        app.pending_delete = Some(id);
        app.mode = Mode::Confirm;
    } else {
        app.ctx.delete_item(id);
        app.clamp_cursor();
    }
}
