//! Body text and button list helpers.

/// Rewrite `<br/>` and the literal two-character `\n` escape into real
/// newlines. Callers have historically encoded line breaks either way.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("<br/>", "\n").replace("\\n", "\n")
}

/// Split a `;`-separated button list. Entries are trimmed and empty ones
/// dropped; order and duplicates are kept.
pub fn split_buttons(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_both_forms() {
        assert_eq!(normalize_newlines("a<br/>b\\nc"), "a\nb\nc");
    }

    #[test]
    fn test_normalize_all_occurrences() {
        assert_eq!(normalize_newlines("<br/><br/>x\\n\\ny"), "\n\nx\n\ny");
    }

    #[test]
    fn test_normalize_leaves_plain_text() {
        assert_eq!(normalize_newlines("already\nfine"), "already\nfine");
        assert_eq!(normalize_newlines(""), "");
    }

    #[test]
    fn test_normalize_is_stable_on_output() {
        let once = normalize_newlines("one<br/>two\\nthree");
        assert_eq!(normalize_newlines(&once), once);
    }

    #[test]
    fn test_split_in_order() {
        assert_eq!(split_buttons("A;B;C"), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_split_empty() {
        assert!(split_buttons("").is_empty());
        assert!(split_buttons(";;").is_empty());
    }

    #[test]
    fn test_split_trims_and_keeps_duplicates() {
        assert_eq!(split_buttons(" A ; ;B;A"), vec!["A", "B", "A"]);
    }
}
