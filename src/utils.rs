// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query normalization.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Turn user input into the form lemmas are stored in.
///
/// - "Café" → "cafe"
/// - "  lead   On " → "lead_on"
/// - "naïve" → "naive"
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out combining marks
/// 3. Lowercase
/// 4. Join whitespace-separated parts with `_`
///
/// # Algorithm (without unicode-normalization)
///
/// Lowercase and join only. Accented input won't match.
#[cfg(feature = "unicode-normalization")]
pub fn normalize_lemma(value: &str) -> String {
    let folded: String = value.nfd().filter(|c| !is_combining_mark(*c)).collect();
    join_words(&folded.to_lowercase())
}

#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize_lemma(value: &str) -> String {
    join_words(&value.to_lowercase())
}

fn join_words(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Combining marks (category Mn) that NFD splits off Latin letters.
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}
