//! Property tests for query normalization.

use proptest::prelude::*;
use wnlookup::normalize_lemma;

proptest! {
    #[test]
    fn prop_normalize_is_idempotent(s in "[ \\tA-Za-z\u{C0}-\u{FF}_-]{0,40}") {
        let once = normalize_lemma(&s);
        prop_assert_eq!(normalize_lemma(&once), once.clone());
    }

    #[test]
    fn prop_normalized_has_no_whitespace(s in "[ \\ta-zA-Z_-]{0,40}") {
        let normalized = normalize_lemma(&s);
        prop_assert!(!normalized.chars().any(char::is_whitespace));
        prop_assert!(!normalized.starts_with('_') || s.trim_start().starts_with('_'));
    }

    #[test]
    fn prop_ascii_lemmas_unchanged(s in "[a-z][a-z0-9_.'-]{0,20}") {
        prop_assert_eq!(normalize_lemma(&s), s);
    }
}
