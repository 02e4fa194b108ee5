use tracing::{debug, warn};

use crate::model::{Item, ItemId};
use crate::ops::collection::{Collection, ItemError};
use crate::view::ViewBinding;

/// Error type for edit sessions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("no edit in progress")]
    NoActiveSession,
    #[error("item {0} was deleted while being edited")]
    StaleTarget(ItemId),
    #[error(transparent)]
    Item(#[from] ItemError),
}

/// Which item, if any, the edit surface is currently bound to.
///
/// One session exists for the life of the app and is reused. `begin` while
/// already editing re-points the target.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    target: Option<ItemId>,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(&self) -> Option<ItemId> {
        self.target
    }

    pub fn is_editing(&self) -> bool {
        self.target.is_some()
    }

    /// Open the edit surface on `item`, prefilled with its text.
    pub fn begin(&mut self, item: &Item, view: &mut impl ViewBinding) {
        self.target = Some(item.id());
        view.set_edit_form_value(item.text());
        view.show_edit_surface();
        view.engage_working_area_lock();
        debug!(id = %item.id(), "edit started");
    }

    /// Write `new_text` back to the target and close the session.
    ///
    /// A target deleted in the meantime closes the session without touching
    /// the collection and reports [`EditError::StaleTarget`].
    pub fn commit(
        &mut self,
        new_text: impl Into<String>,
        collection: &mut Collection,
        view: &mut impl ViewBinding,
    ) -> Result<ItemId, EditError> {
        let id = self.target.ok_or(EditError::NoActiveSession)?;
        if collection.find_by_id(id).is_err() {
            self.close(view);
            warn!(%id, "edit target vanished before commit");
            return Err(EditError::StaleTarget(id));
        }
        let result = collection.update_text(id, new_text, view);
        self.close(view);
        result?;
        debug!(%id, "edit committed");
        Ok(id)
    }

    /// Close the session and throw away whatever was typed.
    pub fn cancel(&mut self, view: &mut impl ViewBinding) {
        if let Some(id) = self.target {
            debug!(%id, "edit cancelled");
        }
        view.set_edit_form_value("");
        self.close(view);
    }

    fn close(&mut self, view: &mut impl ViewBinding) {
        self.target = None;
        view.hide_edit_surface();
        view.release_working_area_lock();
    }
}
