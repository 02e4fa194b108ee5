use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Confirm: y
        (KeyModifiers::NONE, KeyCode::Char('y')) => {
            if let Some(id) = app.pending_delete.take() {
                app.ctx.delete_item(id);
                app.clamp_cursor();
            }
            app.mode = Mode::Navigate;
        }
        // Cancel: n or Esc
        (KeyModifiers::NONE, KeyCode::Char('n')) | (_, KeyCode::Esc) => {
            app.pending_delete = None;
            app.mode = Mode::Navigate;
        }
        _ => {}
    }
}
