use crossterm::event::{KeyCode, KeyEvent};
use tracing::warn;

use crate::ops::EditError;
use crate::tui::app::{App, Mode};

use super::text::edit_line;

/// New-item input in the status row
pub(super) fn handle_add(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.add_buffer.clear();
            app.add_cursor = 0;
            app.mode = Mode::Navigate;
        }
        KeyCode::Enter => {
            let text = std::mem::take(&mut app.add_buffer);
            app.add_cursor = 0;
            let item = app.ctx.add_item(text);
            app.select(item.id());
            app.mode = Mode::Navigate;
        }
        _ => {
            edit_line(&mut app.add_buffer, &mut app.add_cursor, key);
        }
    }
}

/// Typing in the edit popup
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.ctx.cancel_edit();
            app.mode = Mode::Navigate;
        }
        KeyCode::Enter => {
            let text = app.ctx.view.edit_form_value().to_string();
            match app.ctx.commit_edit(text) {
                Ok(id) => app.select(id),
                Err(e) => {
                    warn!(error = %e, "edit not saved");
                    app.status_message = Some(match e {
                        EditError::StaleTarget(_) => "item was deleted, edit discarded".into(),
                        other => other.to_string(),
                    });
                }
            }
            app.clamp_cursor();
            app.mode = Mode::Navigate;
        }
        _ => {
            edit_line(app.ctx.view.edit_form_mut(), &mut app.edit_cursor, key);
        }
    }
}
