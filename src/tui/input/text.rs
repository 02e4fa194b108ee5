use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::util::unicode::{next_grapheme_boundary, prev_grapheme_boundary, word_start_before};

/// Apply a line-editing key to `buf` with byte cursor `cursor`.
/// Returns `false` if the key is not a line-editing key.
pub(super) fn edit_line(buf: &mut String, cursor: &mut usize, key: KeyEvent) -> bool {
    *cursor = (*cursor).min(buf.len());
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('w') if ctrl => {
            let start = word_start_before(buf, *cursor);
            buf.replace_range(start..*cursor, "");
            *cursor = start;
        }
        KeyCode::Char('u') if ctrl => {
            buf.replace_range(..*cursor, "");
            *cursor = 0;
        }
        KeyCode::Char('a') if ctrl => *cursor = 0,
        KeyCode::Char('e') if ctrl => *cursor = buf.len(),
        KeyCode::Char(c) if !ctrl => {
            buf.insert(*cursor, c);
            *cursor += c.len_utf8();
        }
        KeyCode::Backspace => {
            if let Some(prev) = prev_grapheme_boundary(buf, *cursor) {
                buf.replace_range(prev..*cursor, "");
                *cursor = prev;
            }
        }
        KeyCode::Delete => {
            if let Some(next) = next_grapheme_boundary(buf, *cursor) {
                buf.replace_range(*cursor..next, "");
            }
        }
        KeyCode::Left => {
            if let Some(prev) = prev_grapheme_boundary(buf, *cursor) {
                *cursor = prev;
            }
        }
        KeyCode::Right => {
            if let Some(next) = next_grapheme_boundary(buf, *cursor) {
                *cursor = next;
            }
        }
        KeyCode::Home => *cursor = 0,
        KeyCode::End => *cursor = buf.len(),
        _ => return false,
    }
    true
}
