use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Identity of a list item.
///
/// Rendered as its decimal string so the view layer can attach it to a row
/// and hand it back later; see [`ItemKey`] for the lookup side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid item id: {0:?}")]
pub struct ItemIdParseError(pub String);

impl FromStr for ItemId {
    type Err = ItemIdParseError;

    /// Whitespace around the id is ignored and the digits are compared
    /// numerically, so `"7"`, `" 7 "` and `"007"` are the same id. Only
    /// ASCII digits are accepted; a sign makes the key invalid.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ItemIdParseError(s.to_string()));
        }
        digits
            .parse::<u64>()
            .map(ItemId)
            .map_err(|_| ItemIdParseError(s.to_string()))
    }
}

/// Anything that can name an item: the id itself, its raw number, or the
/// string form a view attached to a rendered row.
pub trait ItemKey {
    /// The id this key refers to, or `None` if it cannot name any item.
    fn item_id(&self) -> Option<ItemId>;
}

impl ItemKey for ItemId {
    fn item_id(&self) -> Option<ItemId> {
        Some(*self)
    }
}

impl ItemKey for u64 {
    fn item_id(&self) -> Option<ItemId> {
        Some(ItemId(*self))
    }
}

impl ItemKey for str {
    fn item_id(&self) -> Option<ItemId> {
        self.parse().ok()
    }
}

impl ItemKey for String {
    fn item_id(&self) -> Option<ItemId> {
        self.as_str().item_id()
    }
}

impl<K: ItemKey + ?Sized> ItemKey for &K {
    fn item_id(&self) -> Option<ItemId> {
        (**self).item_id()
    }
}

/// Hands out fresh ids. Monotonic, never reuses a value.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        IdGenerator { next: 1 }
    }
}

impl IdGenerator {
    pub fn next_id(&mut self) -> ItemId {
        let id = ItemId(self.next);
        self.next += 1;
        id
    }
}

/// A single list entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    text: String,
}

impl Item {
    pub(crate) fn new(id: ItemId, text: String) -> Self {
        Item { id, text }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text changes go through the collection so the view label follows.
    pub(crate) fn set_text(&mut self, text: String) {
        self.text = text;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_monotonic() {
        let mut ids = IdGenerator::default();
        let a = ids.next_id();
        let b = ids.next_id();
        let c = ids.next_id();
        assert_eq!(a.get(), 1);
        assert!(a < b && b < c);
    }

    #[test]
    fn id_round_trips_through_string() {
        let mut ids = IdGenerator::default();
        ids.next_id();
        let id = ids.next_id();
        let s = id.to_string();
        assert_eq!(s, "2");
        assert_eq!(s.parse::<ItemId>(), Ok(id));
    }

    #[test]
    fn string_keys_are_normalized() {
        let id = ItemId(7);
        assert_eq!("7".item_id(), Some(id));
        assert_eq!(" 7\n".item_id(), Some(id));
        assert_eq!("007".item_id(), Some(id));
        assert_eq!(String::from("7").item_id(), Some(id));
        assert_eq!(7u64.item_id(), Some(id));
    }

    #[test]
    fn garbage_keys_name_nothing() {
        assert_eq!("".item_id(), None);
        assert_eq!("seven".item_id(), None);
        assert_eq!("-7".item_id(), None);
        assert_eq!("7.0".item_id(), None);
    }

    #[test]
    fn parse_error_keeps_input() {
        let err = "abc".parse::<ItemId>().unwrap_err();
        assert_eq!(err.to_string(), "invalid item id: \"abc\"");
    }

    #[test]
    fn id_serializes_as_number() {
        assert_eq!(serde_json::to_string(&ItemId(3)).unwrap(), "3");
    }

    #[test]
    fn signs_are_not_ids() {
        assert_eq!("+7".item_id(), None);
        assert_eq!(" +7 ".item_id(), None);
        assert!(matches!("+7".parse::<ItemId>(), Err(ItemIdParseError(_))));
    }
}
