use indexmap::IndexMap;
use tracing::debug;

use crate::model::{IdGenerator, Item, ItemId, ItemKey};
use crate::ops::label::display_label;
use crate::view::ViewBinding;

/// Error type for collection operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItemError {
    #[error("item not found: {0}")]
    NotFound(String),
}

impl ItemError {
    /// Names the missing item by its normalized id.
    pub(crate) fn not_found(key: &impl ItemKey) -> Self {
        match key.item_id() {
            Some(id) => ItemError::NotFound(id.to_string()),
            None => ItemError::NotFound("<invalid id>".to_string()),
        }
    }
}

/// Ordered store of items. Insertion order is display order.
///
/// Every mutation that changes what is on screen takes the view and updates
/// it before returning, so the rendered rows always match the items.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    items: IndexMap<ItemId, Item>,
    ids: IdGenerator,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new item and render it. Empty text is allowed.
    pub fn add(&mut self, text: impl Into<String>, view: &mut impl ViewBinding) -> Item {
        let id = self.ids.next_id();
        let item = Item::new(id, text.into());
        view.render_item(&item);
        self.items.insert(id, item.clone());
        debug!(%id, "item added");
        item
    }

    pub fn find_by_id(&self, key: impl ItemKey) -> Result<&Item, ItemError> {
        key.item_id()
            .and_then(|id| self.items.get(&id))
            .ok_or_else(|| ItemError::not_found(&key))
    }

    /// Remove an item and its rendered row. Unknown ids are a no-op.
    pub fn remove(&mut self, key: impl ItemKey, view: &mut impl ViewBinding) -> Option<Item> {
        let id = key.item_id()?;
        let item = self.items.shift_remove(&id)?;
        view.remove_item(id);
        debug!(%id, "item removed");
        Some(item)
    }

    /// Replace an item's text and refresh only its label.
    pub fn update_text(
        &mut self,
        key: impl ItemKey,
        new_text: impl Into<String>,
        view: &mut impl ViewBinding,
    ) -> Result<(), ItemError> {
        let item = key
            .item_id()
            .and_then(|id| self.items.get_mut(&id))
            .ok_or_else(|| ItemError::not_found(&key))?;
        item.set_text(new_text.into());
        view.update_item_label(item.id(), &display_label(item.text()));
        debug!(id = %item.id(), "item text updated");
        Ok(())
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Done-ness is held by the view's checkboxes, so this asks the view.
    pub fn count_checked(&self, view: &impl ViewBinding) -> usize {
        view.checked_count()
    }

    /// Items in display order
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Display index of an item
    pub fn position(&self, key: impl ItemKey) -> Option<usize> {
        let id = key.item_id()?;
        self.items.get_index_of(&id)
    }

    /// Item at a display index
    pub fn get_index(&self, index: usize) -> Option<&Item> {
        self.items.get_index(index).map(|(_, item)| item)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::view::ListView;

    fn sample() -> (Collection, ListView) {
        let mut collection = Collection::new();
        let mut view = ListView::new();
        collection.add("Buy milk", &mut view);
        collection.add("Walk the dog", &mut view);
        collection.add("Write letter", &mut view);
        (collection, view)
    }

    #[test]
    fn add_renders_and_returns_item() {
        let mut collection = Collection::new();
        let mut view = ListView::new();
        let item = collection.add("Buy milk", &mut view);

        assert_eq!(collection.size(), 1);
        assert_eq!(view.rows().len(), 1);
        assert_eq!(view.rows()[0].id, item.id());
        assert_eq!(view.rows()[0].label, "Buy milk");

        let found = collection.find_by_id(item.id()).unwrap();
        assert_eq!(found.id(), item.id());
        assert_eq!(found.text(), "Buy milk");
    }

    #[test]
    fn add_accepts_empty_text() {
        let mut collection = Collection::new();
        let mut view = ListView::new();
        let item = collection.add("", &mut view);
        assert_eq!(collection.find_by_id(item.id()).unwrap().text(), "");
        assert_eq!(view.rows()[0].label, "");
    }

    #[test]
    fn ids_unique_and_never_reused() {
        let (mut collection, mut view) = sample();
        let last = collection.get_index(2).unwrap().id();
        collection.remove(last, &mut view);
        let fresh = collection.add("again", &mut view);
        assert!(fresh.id() > last);

        let ids: HashSet<ItemId> = collection.iter().map(|i| i.id()).collect();
        assert_eq!(ids.len(), collection.size());
    }

    #[test]
    fn find_by_string_key() {
        let (collection, _view) = sample();
        let id = collection.get_index(1).unwrap().id();
        let key = id.to_string();
        assert_eq!(collection.find_by_id(key.as_str()).unwrap().text(), "Walk the dog");
        assert_eq!(collection.find_by_id(format!("00{}", key)).unwrap().id(), id);
    }

    #[test]
    fn find_missing_is_not_found() {
        let (collection, _view) = sample();
        assert_eq!(
            collection.find_by_id(99u64),
            Err(ItemError::NotFound("99".into()))
        );
        assert!(matches!(
            collection.find_by_id("nope"),
            Err(ItemError::NotFound(_))
        ));
    }

    #[test]
    fn remove_keeps_order_and_view_in_step() {
        let (mut collection, mut view) = sample();
        let middle = collection.get_index(1).unwrap().id();

        let removed = collection.remove(middle, &mut view).unwrap();
        assert_eq!(removed.text(), "Walk the dog");
        assert_eq!(collection.size(), 2);
        assert_eq!(view.rows().len(), 2);

        let texts: Vec<&str> = collection.iter().map(|i| i.text()).collect();
        assert_eq!(texts, vec!["Buy milk", "Write letter"]);
        let labels: Vec<&str> = view.rows().iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, texts);
    }

    #[test]
    fn remove_missing_is_noop() {
        let (mut collection, mut view) = sample();
        assert!(collection.remove(42u64, &mut view).is_none());
        assert!(collection.remove("garbage", &mut view).is_none());
        assert_eq!(collection.size(), 3);
        assert_eq!(view.rows().len(), 3);
    }

    #[test]
    fn update_text_refreshes_label_only() {
        let (mut collection, mut view) = sample();
        let id = collection.get_index(0).unwrap().id();
        view.toggle_checked(id);

        let long = "x".repeat(35);
        collection.update_text(id, long.clone(), &mut view).unwrap();

        assert_eq!(collection.find_by_id(id).unwrap().text(), long);
        assert_eq!(view.rows()[0].label, format!("{}...", "x".repeat(30)));
        // row kept its place and its checkbox
        assert_eq!(view.rows()[0].id, id);
        assert!(view.rows()[0].checked);
        assert_eq!(view.rows()[1].label, "Walk the dog");
    }

    #[test]
    fn update_missing_leaves_everything() {
        let (mut collection, mut view) = sample();
        let before: Vec<Item> = collection.iter().cloned().collect();
        let rows_before = view.rows().to_vec();

        let err = collection.update_text(77u64, "x", &mut view).unwrap_err();
        assert_eq!(err, ItemError::NotFound("77".into()));

        let after: Vec<Item> = collection.iter().cloned().collect();
        assert_eq!(before, after);
        assert_eq!(rows_before, view.rows());
    }

    #[test]
    fn count_checked_asks_view() {
        let (collection, mut view) = sample();
        assert_eq!(collection.count_checked(&view), 0);
        let id = collection.get_index(2).unwrap().id();
        view.toggle_checked(id);
        assert_eq!(collection.count_checked(&view), 1);
    }

    #[test]
    fn position_and_index_agree() {
        let (collection, _view) = sample();
        for (i, item) in collection.iter().enumerate() {
            assert_eq!(collection.position(item.id()), Some(i));
            assert_eq!(collection.get_index(i), Some(item));
        }
        assert_eq!(collection.position(500u64), None);
    }
}
