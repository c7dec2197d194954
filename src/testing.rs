// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.
//!
//! Synset offsets are byte offsets, so a fixture data file has to put each
//! line at exactly the offset it declares. [`WndbFixture`] does that by
//! padding the gaps with indented filler lines, the same shape as the
//! license header real wndb files start with.

#![doc(hidden)]

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use crate::types::PartOfSpeech;

/// Two-line header written at the top of every fixture file.
pub const FIXTURE_HEADER: &str =
    "  1 This software and database is being provided to you, the LICENSEE,\n  2 by Princeton University under the following license.\n";

/// Builder for a directory of `index.*` / `data.*` files.
#[derive(Debug, Default, Clone)]
pub struct WndbFixture {
    index: BTreeMap<PartOfSpeech, Vec<String>>,
    data: BTreeMap<PartOfSpeech, BTreeMap<u64, String>>,
}

impl WndbFixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an index line. Lines are sorted by lemma on write.
    pub fn index(mut self, pos: PartOfSpeech, line: &str) -> Self {
        self.index.entry(pos).or_default().push(line.to_string());
        self
    }

    /// Put a data line at byte `offset` of the `pos` data file.
    pub fn data(mut self, pos: PartOfSpeech, offset: u64, line: &str) -> Self {
        self.data
            .entry(pos)
            .or_default()
            .insert(offset, line.to_string());
        self
    }

    /// Write every file that has at least one line. Parts of speech with
    /// nothing added get no files at all.
    ///
    /// Panics if a data line would overlap the header or the previous line.
    pub fn write_to(&self, dir: &Path) -> io::Result<()> {
        for (pos, lines) in &self.index {
            let path = dir.join(format!("index.{}", pos.file_suffix()));
            fs::write(path, sorted_file(FIXTURE_HEADER, lines))?;
        }
        for (pos, lines) in &self.data {
            let path = dir.join(format!("data.{}", pos.file_suffix()));
            fs::write(path, offset_file(FIXTURE_HEADER, lines))?;
        }
        Ok(())
    }
}

/// `header` followed by `lines` in ordinal byte order of their first token.
pub fn sorted_file(header: &str, lines: &[String]) -> Vec<u8> {
    let mut sorted: Vec<&str> = lines.iter().map(String::as_str).collect();
    sorted.sort_by(|a, b| leading_token(a).as_bytes().cmp(leading_token(b).as_bytes()));

    let mut out = header.as_bytes().to_vec();
    for line in sorted {
        out.extend_from_slice(line.as_bytes());
        out.push(b'\n');
    }
    out
}

/// `header`, then each line placed at its offset with filler in between.
pub fn offset_file(header: &str, lines: &BTreeMap<u64, String>) -> Vec<u8> {
    let mut out = header.as_bytes().to_vec();
    for (&offset, line) in lines {
        let offset = usize::try_from(offset).expect("fixture offset fits in memory");
        assert!(
            offset >= out.len(),
            "line at {} overlaps previous content ending at {}",
            offset,
            out.len()
        );
        pad_to(&mut out, offset);
        out.extend_from_slice(line.as_bytes());
        out.push(b'\n');
    }
    out
}

/// Fill with indented lines of at most 80 bytes until `out.len() == target`.
fn pad_to(out: &mut Vec<u8>, target: usize) {
    while out.len() < target {
        let gap = target - out.len();
        let width = gap.min(80);
        out.extend(std::iter::repeat(b' ').take(width - 1));
        out.push(b'\n');
    }
}

fn leading_token(line: &str) -> &str {
    line.split_ascii_whitespace().next().unwrap_or("")
}
