//! The rendering capability the core drives.
//!
//! Everything the core needs from a presentation layer goes through
//! [`ViewBinding`]; the core never inspects rendered structure directly.
//! [`ListView`] is the in-memory implementation both hosts render from.

pub mod list_view;

pub use list_view::{ListView, Row};

use crate::model::{Item, ItemId};

pub trait ViewBinding {
    /// Append a rendered entry for a newly added item.
    fn render_item(&mut self, item: &Item);

    /// Drop the rendered entry for `id`, along with its checked flag.
    fn remove_item(&mut self, id: ItemId);

    /// Replace the displayed label of one entry without re-rendering the rest.
    fn update_item_label(&mut self, id: ItemId, label: &str);

    /// How many rendered entries the user has ticked.
    fn checked_count(&self) -> usize;

    /// Untick every entry. Items themselves are untouched.
    fn clear_checked(&mut self);

    fn set_progress_percent(&mut self, percent: f64);
    fn set_total_count(&mut self, total: usize);
    fn set_done_count(&mut self, done: usize);

    fn set_edit_form_value(&mut self, text: &str);
    fn show_edit_surface(&mut self);
    fn hide_edit_surface(&mut self);

    /// Advisory dimming of the list while an edit is open. Cosmetic only.
    fn engage_working_area_lock(&mut self);
    fn release_working_area_lock(&mut self);
}
