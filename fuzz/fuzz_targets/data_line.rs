// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for data line parsing.
//!
//! Data lines carry four different number encodings and a variable-length
//! word list whose end is found by sniffing for `p_cnt`. Lots of room for
//! off-by-one slicing; none of it may panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use wnlookup::{parse_data_line, parse_verb_frames};

fuzz_target!(|data: &[u8]| {
    let Ok(line) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(record) = parse_data_line(line) {
        assert!(!record.words.is_empty());
        assert_eq!(record.head_word, record.words[0].word);
        assert_eq!(record.lex_id, record.words[0].lex_id);
        assert!(!record.gloss.starts_with(char::is_whitespace));

        // Frame tails are free-form until parsed; parsing them may fail but
        // must not panic.
        if let Some(frames) = &record.frames {
            let _ = parse_verb_frames(frames);
        }
    }
});
