//! Property tests for the adaptive binary search.
//!
//! Verifies that:
//! 1. Every key in a sorted file is found, whatever its position
//! 2. The returned line is the whole line for that key
//! 3. Keys not in the file are never found
//! 4. None of this depends on the header, the trailing newline, or how long
//!    the lines are relative to the probe window

use std::collections::BTreeMap;

use proptest::prelude::*;
use wnlookup::testing::{sorted_file, FIXTURE_HEADER};
use wnlookup::{NullLogger, SearchOptions, SortedFileSearcher};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Lemma-like keys: no whitespace, never starting with punctuation.
fn key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9][a-z0-9_.'-]{0,14}").unwrap()
}

/// Number of synset offsets on a line. Mostly short, sometimes far longer
/// than any probe window.
fn width_strategy() -> impl Strategy<Value = usize> {
    prop_oneof![
        6 => 1usize..4,
        3 => 4usize..30,
        1 => 30usize..200,
    ]
}

/// Unique keys (BTreeMap keeps them unique) with a line width each.
fn entries_strategy() -> impl Strategy<Value = BTreeMap<String, usize>> {
    prop::collection::btree_map(key_strategy(), width_strategy(), 1..120)
}

fn options_strategy() -> impl Strategy<Value = SearchOptions> {
    prop::sample::select(vec![16usize, 32, 127, 512]).prop_map(|probe_window| SearchOptions {
        probe_window,
        ..SearchOptions::default()
    })
}

fn index_line(key: &str, width: usize) -> String {
    let offsets: Vec<String> = (0..width).map(|i| format!("{:08}", 1740 + i * 97)).collect();
    format!("{} n {} 0 {} 0 {}", key, width, width, offsets.join(" "))
}

fn build(entries: &BTreeMap<String, usize>, header: bool, trailing_newline: bool) -> Vec<u8> {
    let lines: Vec<String> = entries.iter().map(|(k, w)| index_line(k, *w)).collect();
    let mut bytes = sorted_file(if header { FIXTURE_HEADER } else { "" }, &lines);
    if !trailing_newline {
        bytes.pop();
    }
    bytes
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_finds_every_key(
        entries in entries_strategy(),
        header in any::<bool>(),
        trailing_newline in any::<bool>(),
        options in options_strategy(),
    ) {
        let bytes = build(&entries, header, trailing_newline);
        let searcher = SortedFileSearcher::new(&bytes, options, &NullLogger);

        for (key, width) in &entries {
            let found = searcher.find(key).unwrap();
            prop_assert_eq!(found, Some(index_line(key, *width)), "key {:?}", key);
        }
    }

    #[test]
    fn prop_absent_keys_not_found(
        entries in entries_strategy(),
        probes in prop::collection::vec(key_strategy(), 1..20),
        header in any::<bool>(),
        options in options_strategy(),
    ) {
        let bytes = build(&entries, header, true);
        let searcher = SortedFileSearcher::new(&bytes, options, &NullLogger);

        for probe in probes.iter().filter(|p| !entries.contains_key(*p)) {
            prop_assert_eq!(searcher.find(probe).unwrap(), None, "probe {:?}", probe);
        }
    }

    #[test]
    fn prop_prefix_of_a_key_is_not_that_key(
        entries in entries_strategy(),
    ) {
        let bytes = build(&entries, true, true);
        let searcher = SortedFileSearcher::new(&bytes, SearchOptions::default(), &NullLogger);

        for key in entries.keys().filter(|k| k.len() > 1) {
            let prefix = &key[..key.len() - 1];
            let found = searcher.find(prefix).unwrap();
            if entries.contains_key(prefix) {
                prop_assert!(found.is_some());
            } else {
                prop_assert_eq!(found, None);
            }
        }
    }
}
