/// Longest label shown for an item, in characters.
pub const LABEL_MAX_CHARS: usize = 30;

/// Appended to labels that were cut short.
pub const LABEL_ELLIPSIS: &str = "...";

/// Display label for an item: the text itself, or its first
/// [`LABEL_MAX_CHARS`] characters plus [`LABEL_ELLIPSIS`] when longer.
pub fn display_label(text: &str) -> String {
    match text.char_indices().nth(LABEL_MAX_CHARS) {
        Some((cut, _)) => format!("{}{}", &text[..cut], LABEL_ELLIPSIS),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_unchanged() {
        assert_eq!(display_label(""), "");
        assert_eq!(display_label("Buy milk"), "Buy milk");
    }

    #[test]
    fn exactly_thirty_unchanged() {
        let text = "a".repeat(30);
        assert_eq!(display_label(&text), text);
    }

    #[test]
    fn thirty_one_truncated() {
        let text = format!("{}b", "a".repeat(30));
        assert_eq!(display_label(&text), format!("{}...", "a".repeat(30)));
    }

    #[test]
    fn counts_characters_not_bytes() {
        // 31 two-byte characters
        let text = "é".repeat(31);
        assert_eq!(display_label(&text), format!("{}...", "é".repeat(30)));
        assert_eq!(display_label(&"é".repeat(30)), "é".repeat(30));
    }
}
