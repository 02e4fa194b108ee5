use tracing::debug;

use crate::model::{Item, ItemId, ItemKey};
use crate::ops::collection::{Collection, ItemError};
use crate::ops::edit_session::{EditError, EditSession};
use crate::ops::progress::ProgressState;
use crate::view::{ListView, ViewBinding};

/// The application: the item store, the edit session and the view they
/// drive. Built once by the host and borrowed mutably for each UI event.
///
/// Each handler finishes all of its model and view updates before returning.
#[derive(Debug, Clone, Default)]
pub struct AppContext<V: ViewBinding> {
    pub collection: Collection,
    pub edit: EditSession,
    pub view: V,
}

impl<V: ViewBinding> AppContext<V> {
    pub fn new(view: V) -> Self {
        AppContext {
            collection: Collection::new(),
            edit: EditSession::new(),
            view,
        }
    }

    /// "Add" pressed with the input's current text.
    pub fn add_item(&mut self, text: impl Into<String>) -> Item {
        let item = self.collection.add(text, &mut self.view);
        self.refresh_counters();
        item
    }

    /// "Delete" pressed on a row. Unknown ids are ignored.
    pub fn delete_item(&mut self, key: impl ItemKey) -> Option<Item> {
        let id = key.item_id()?;
        if self.edit.target() == Some(id) {
            // keep the session from pointing at a removed item
            self.edit.cancel(&mut self.view);
        }
        let removed = self.collection.remove(id, &mut self.view);
        if removed.is_some() {
            self.refresh_counters();
        }
        removed
    }

    /// A checkbox changed in the view.
    pub fn checked_changed(&mut self) {
        self.refresh_progress();
    }

    /// "Clear checked" pressed: untick every row. Items stay.
    pub fn clear_checked(&mut self) {
        self.view.clear_checked();
        debug!("checks cleared");
        self.refresh_progress();
    }

    /// "Edit" pressed on a row.
    pub fn begin_edit(&mut self, key: impl ItemKey) -> Result<ItemId, ItemError> {
        let item = self.collection.find_by_id(key)?;
        self.edit.begin(item, &mut self.view);
        Ok(item.id())
    }

    /// "Save" pressed in the edit surface.
    pub fn commit_edit(&mut self, new_text: impl Into<String>) -> Result<ItemId, EditError> {
        self.edit
            .commit(new_text, &mut self.collection, &mut self.view)
    }

    /// "Cancel" pressed in the edit surface.
    pub fn cancel_edit(&mut self) {
        self.edit.cancel(&mut self.view);
    }

    pub fn progress(&self) -> ProgressState {
        ProgressState::new(
            self.collection.size(),
            self.collection.count_checked(&self.view),
        )
    }

    /// Push total, done and percent to the view.
    pub fn refresh_counters(&mut self) {
        self.view.set_total_count(self.collection.size());
        self.refresh_progress();
    }

    fn refresh_progress(&mut self) {
        let progress = self.progress();
        self.view.set_done_count(progress.done);
        self.view.set_progress_percent(progress.percent);
    }
}

impl AppContext<ListView> {
    /// The user ticked or unticked the box on a row. Returns the new state.
    pub fn toggle_checked(&mut self, key: impl ItemKey) -> Option<bool> {
        let checked = self.view.toggle_checked(key)?;
        self.checked_changed();
        Some(checked)
    }

    /// Force a row's box to a state. Returns `false` for unknown ids.
    pub fn set_checked(&mut self, key: impl ItemKey, checked: bool) -> bool {
        let found = self.view.set_checked(key, checked);
        if found {
            self.checked_changed();
        }
        found
    }
}
