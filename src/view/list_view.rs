use crate::model::{Item, ItemId, ItemKey};
use crate::ops::label::display_label;

use super::ViewBinding;

/// One rendered entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: ItemId,
    /// Truncated display label
    pub label: String,
    /// Checkbox state. Owned here, not by the item.
    pub checked: bool,
}

/// In-memory view state: what a renderer draws and what the user ticks.
#[derive(Debug, Clone, Default)]
pub struct ListView {
    rows: Vec<Row>,
    total_count: usize,
    done_count: usize,
    progress_percent: f64,
    edit_form_value: String,
    edit_visible: bool,
    working_area_locked: bool,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, key: impl ItemKey) -> Option<&Row> {
        let id = key.item_id()?;
        self.rows.iter().find(|r| r.id == id)
    }

    fn row_mut(&mut self, key: impl ItemKey) -> Option<&mut Row> {
        let id = key.item_id()?;
        self.rows.iter_mut().find(|r| r.id == id)
    }

    /// User ticks or unticks a box. Returns the new state, or `None` if no
    /// row has that id.
    pub fn toggle_checked(&mut self, key: impl ItemKey) -> Option<bool> {
        let row = self.row_mut(key)?;
        row.checked = !row.checked;
        Some(row.checked)
    }

    /// Set a box to a given state. Returns `false` if no row has that id.
    pub fn set_checked(&mut self, key: impl ItemKey, checked: bool) -> bool {
        match self.row_mut(key) {
            Some(row) => {
                row.checked = checked;
                true
            }
            None => false,
        }
    }

    pub fn is_checked(&self, key: impl ItemKey) -> bool {
        self.row(key).is_some_and(|r| r.checked)
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn done_count(&self) -> usize {
        self.done_count
    }

    pub fn progress_percent(&self) -> f64 {
        self.progress_percent
    }

    pub fn edit_form_value(&self) -> &str {
        &self.edit_form_value
    }

    /// The edit form's text buffer, for hosts that let the user type into it.
    pub fn edit_form_mut(&mut self) -> &mut String {
        &mut self.edit_form_value
    }

    pub fn is_edit_visible(&self) -> bool {
        self.edit_visible
    }

    pub fn is_working_area_locked(&self) -> bool {
        self.working_area_locked
    }
}

impl ViewBinding for ListView {
    fn render_item(&mut self, item: &Item) {
        self.rows.push(Row {
            id: item.id(),
            label: display_label(item.text()),
            checked: false,
        });
    }

    fn remove_item(&mut self, id: ItemId) {
        self.rows.retain(|r| r.id != id);
    }

    fn update_item_label(&mut self, id: ItemId, label: &str) {
        if let Some(row) = self.row_mut(id) {
            row.label = label.to_string();
        }
    }

    fn checked_count(&self) -> usize {
        self.rows.iter().filter(|r| r.checked).count()
    }

    fn clear_checked(&mut self) {
        for row in &mut self.rows {
            row.checked = false;
        }
    }

    fn set_progress_percent(&mut self, percent: f64) {
        self.progress_percent = percent;
    }

    fn set_total_count(&mut self, total: usize) {
        self.total_count = total;
    }

    fn set_done_count(&mut self, done: usize) {
        self.done_count = done;
    }

    fn set_edit_form_value(&mut self, text: &str) {
        self.edit_form_value = text.to_string();
    }

    fn show_edit_surface(&mut self) {
        self.edit_visible = true;
    }

    fn hide_edit_surface(&mut self) {
        self.edit_visible = false;
    }

    fn engage_working_area_lock(&mut self) {
        self.working_area_locked = true;
    }

    fn release_working_area_lock(&mut self) {
        self.working_area_locked = false;
    }
}
