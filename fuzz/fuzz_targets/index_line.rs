// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for index line parsing.
//!
//! Index lines come straight off disk. A corrupt or truncated file must give
//! `MalformedRecord`, never a panic or a record that lies about its counts.

#![no_main]

use libfuzzer_sys::fuzz_target;
use wnlookup::parse_index_line;

fuzz_target!(|data: &[u8]| {
    let Ok(line) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(record) = parse_index_line(line) {
        // The one count the parser promises to check
        assert_eq!(record.synset_offsets.len(), record.synset_count);
        assert!(!record.word.is_empty());
        assert!(!record.word.contains(char::is_whitespace));
    }
});
