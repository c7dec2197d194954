//! Property tests for the line parsers.
//!
//! Verifies that:
//! 1. Well-formed index lines keep `synset_offsets.len() == synset_count`
//! 2. A count that disagrees with the offsets is rejected, never truncated
//! 3. Data line pointer count always equals p_cnt
//! 4. Neither parser panics on arbitrary input

use proptest::prelude::*;
use wnlookup::{parse_data_line, parse_index_line, WordNetError};

// ============================================================================
// STRATEGIES
// ============================================================================

fn lemma_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z_-]{0,12}").unwrap()
}

fn symbol_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["!", "@", "~", "+", ";c", "#m", "%p", "&", "$", "*"])
        .prop_map(str::to_string)
}

fn offsets_strategy() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(1u64..99_999_999, 1..12)
}

fn index_line(lemma: &str, pos: char, count: usize, symbols: &[String], offsets: &[u64]) -> String {
    let mut fields = vec![
        lemma.to_string(),
        pos.to_string(),
        count.to_string(),
        symbols.len().to_string(),
    ];
    fields.extend(symbols.iter().cloned());
    fields.push(count.to_string());
    fields.push("0".to_string());
    fields.extend(offsets.iter().map(|o| format!("{:08}", o)));
    fields.join(" ")
}

fn data_line(offset: u64, pointers: &[(String, u64)]) -> String {
    let groups: Vec<String> = pointers
        .iter()
        .map(|(symbol, target)| format!("{} {:08} n 0000", symbol, target))
        .collect();
    format!(
        "{:08} 03 n 01 thing 0 {:03} {} | a gloss",
        offset,
        pointers.len(),
        groups.join(" ")
    )
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn prop_index_offsets_match_count(
        lemma in lemma_strategy(),
        pos in prop::sample::select(vec!['n', 'v', 'a', 'r']),
        symbols in prop::collection::vec(symbol_strategy(), 0..6),
        offsets in offsets_strategy(),
    ) {
        let line = index_line(&lemma, pos, offsets.len(), &symbols, &offsets);
        let record = parse_index_line(&line).unwrap();
        prop_assert_eq!(record.synset_offsets.len(), record.synset_count);
        prop_assert_eq!(record.synset_offsets, offsets);
        prop_assert_eq!(record.pointer_symbols, symbols);
        prop_assert_eq!(record.word, lemma);
    }

    #[test]
    fn prop_index_count_mismatch_rejected(
        lemma in lemma_strategy(),
        offsets in offsets_strategy(),
        delta in 1usize..3,
    ) {
        let line = index_line(&lemma, 'n', offsets.len() + delta, &[], &offsets);
        let is_malformed = matches!(parse_index_line(&line), Err(WordNetError::MalformedRecord { .. }));
        prop_assert!(is_malformed);
    }

    #[test]
    fn prop_data_pointer_count_matches(
        offset in 1u64..99_999_999,
        pointers in prop::collection::vec((symbol_strategy(), 1u64..99_999_999), 0..40),
    ) {
        let record = parse_data_line(&data_line(offset, &pointers)).unwrap();
        prop_assert_eq!(record.synset_offset, offset);
        prop_assert_eq!(record.pointers.len(), pointers.len());
        prop_assert_eq!(record.gloss.as_str(), "a gloss");
        prop_assert!(record.frames.is_none());
    }

    #[test]
    fn prop_parsers_never_panic(line in "\\PC{0,200}") {
        let _ = parse_index_line(&line);
        let _ = parse_data_line(&line);
    }
}
