// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the adaptive binary search.
//!
//! The input bytes are the "file", sorted or not. Whatever they hold, the
//! search has to terminate, and a hit has to be a line whose key really is
//! the one asked for.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use wnlookup::{NullLogger, SearchOptions, SortedFileSearcher};

#[derive(Arbitrary, Debug)]
struct Input {
    key: String,
    file: Vec<u8>,
    probe_window: u8,
}

fuzz_target!(|input: Input| {
    let options = SearchOptions {
        probe_window: (input.probe_window as usize).max(SearchOptions::default().min_window),
        ..SearchOptions::default()
    };
    let searcher = SortedFileSearcher::new(&input.file, options, &NullLogger);

    if let Ok(Some(line)) = searcher.find(&input.key) {
        let key = line.split(|c: char| c.is_ascii_whitespace()).next().unwrap_or("");
        assert_eq!(key, input.key);
    }
});
