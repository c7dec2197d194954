// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Adaptive binary search over a sorted, line-oriented file.
//!
//! The index files are sorted by lemma but their lines vary wildly in
//! length, so there's no way to jump to "line N". Instead we bisect on byte
//! offsets and re-discover a line boundary at every probe:
//!
//! ```text
//!   pos                                           total
//!    │                                              │
//!    ▼   window (W bytes)                           ▼
//!    ┌──────────────────────┐
//!    │…tail\nlemma v 3 …\n… │   first line that *starts* inside the
//!    └──────────────────────┘   window is the candidate
//! ```
//!
//! - Candidate equals the key: done.
//! - Key sorts before it: `total = pos`, `pos = pos / 2`. Note this halves
//!   the absolute offset instead of bisecting `[low, pos)`; no lower bound is
//!   tracked, which keeps the probe sequence tolerant of variable-length
//!   lines at the price of a few redundant reads.
//! - Key sorts after it: `pos += (total - pos) / 2`.
//!
//! Two adaptive rules keep probes honest. A window that doesn't contain a
//! whole candidate line grows (x1.5) and the probe is retried in place, so a
//! long line can't cause a false negative. Once the remaining span fits in
//! the window, the window shrinks (x0.8) on each step; dropping below the
//! floor means the key isn't there. A probe that doesn't move also ends the
//! search.
//!
//! Lines starting with whitespace are skipped: that's the license header at
//! the top of every wndb file.

use std::cmp::Ordering;

use crate::config::SearchOptions;
use crate::error::{Result, WordNetError};
use crate::logging::Logger;
use crate::source::ByteSource;

/// What a single probe window yielded.
#[derive(Debug, PartialEq, Eq)]
enum Probe<'a> {
    /// A complete line (without its newline) starting inside the window.
    Line(&'a [u8]),
    /// The window ends before a candidate line does; read more.
    Incomplete,
    /// End of file reached with no candidate line after `pos`.
    PastEnd,
}

/// Binary search over one sorted source.
pub struct SortedFileSearcher<'a, S: ByteSource + ?Sized> {
    source: &'a S,
    options: SearchOptions,
    logger: &'a dyn Logger,
}

impl<'a, S: ByteSource + ?Sized> SortedFileSearcher<'a, S> {
    pub fn new(source: &'a S, options: SearchOptions, logger: &'a dyn Logger) -> Self {
        Self {
            source,
            options,
            logger,
        }
    }

    /// Find the line whose leading key equals `key`.
    ///
    /// Keys are compared in ordinal byte order, which is how the wndb files
    /// are sorted. Returns `Ok(None)` when no line has that key.
    pub fn find(&self, key: &str) -> Result<Option<String>> {
        let len = self
            .source
            .len()
            .map_err(|e| WordNetError::io(self.source.path(), e))?;
        if len == 0 || key.is_empty() {
            return Ok(None);
        }

        let key = key.as_bytes();
        let mut total = len;
        let mut pos = len / 2;
        let mut window = self.options.probe_window as f64;
        let mut buf: Vec<u8> = Vec::new();

        loop {
            let size = window as usize;
            buf.clear();
            buf.resize(size, 0);
            let n = self
                .source
                .read_at(&mut buf, pos)
                .map_err(|e| WordNetError::io(self.source.path(), e))?;
            let at_eof = n < size || pos + n as u64 >= len;

            let ordering = match scan(&buf[..n], pos == 0, at_eof) {
                Probe::Incomplete => {
                    let grown = (window * self.options.growth_factor).max(window + 1.0);
                    self.logger.trace(format_args!(
                        "no complete line in {} bytes at {}, growing window to {}",
                        size, pos, grown as usize
                    ));
                    window = grown;
                    continue;
                }
                Probe::PastEnd => Ordering::Less,
                Probe::Line(line) => {
                    let candidate = leading_key(line);
                    self.logger.trace(format_args!(
                        "probe at {} of {}: candidate '{}'",
                        pos,
                        total,
                        String::from_utf8_lossy(candidate)
                    ));
                    match key.cmp(candidate) {
                        Ordering::Equal => {
                            let text = String::from_utf8_lossy(line);
                            return Ok(Some(text.trim_end().to_string()));
                        }
                        other => other,
                    }
                }
            };

            let previous = (pos, total);
            if ordering == Ordering::Less {
                total = pos;
                pos /= 2;
            } else {
                pos += (total - pos) / 2;
            }

            if (pos, total) == previous {
                self.logger.debug(format_args!(
                    "'{}' not found: search stalled at {}",
                    String::from_utf8_lossy(key),
                    pos
                ));
                return Ok(None);
            }

            let Some(span) = total.checked_sub(pos) else {
                self.logger.warn(format_args!(
                    "'{}' not found: position {} left range [0, {}]",
                    String::from_utf8_lossy(key),
                    pos,
                    total
                ));
                return Ok(None);
            };

            if span as f64 <= window {
                window *= self.options.shrink_factor;
                if window < self.options.min_window as f64 {
                    self.logger.debug(format_args!(
                        "'{}' not found: window shrank below {} bytes",
                        String::from_utf8_lossy(key),
                        self.options.min_window
                    ));
                    return Ok(None);
                }
            }
        }
    }
}

/// Locate the first complete, non-indented line starting inside `buf`.
///
/// `at_line_start` is true when `buf[0]` begins a line (offset 0 of the
/// file). Otherwise the bytes before the first newline belong to a line that
/// started before the window and are skipped. At end of file the last line
/// may end without a newline.
fn scan(buf: &[u8], at_line_start: bool, at_eof: bool) -> Probe<'_> {
    let exhausted = if at_eof {
        Probe::PastEnd
    } else {
        Probe::Incomplete
    };

    let mut start = if at_line_start {
        0
    } else {
        match buf.iter().position(|&b| b == b'\n') {
            Some(newline) => newline + 1,
            None => return exhausted,
        }
    };

    loop {
        let rest = match buf.get(start..) {
            Some(rest) if !rest.is_empty() => rest,
            _ => return exhausted,
        };
        let newline = rest.iter().position(|&b| b == b'\n');

        if rest[0].is_ascii_whitespace() {
            match newline {
                Some(end) => {
                    start += end + 1;
                    continue;
                }
                None => return exhausted,
            }
        }

        return match newline {
            Some(end) => Probe::Line(&rest[..end]),
            None if at_eof => Probe::Line(rest),
            None => Probe::Incomplete,
        };
    }
}

/// The key is everything before the first whitespace.
fn leading_key(line: &[u8]) -> &[u8] {
    let end = line
        .iter()
        .position(|b| b.is_ascii_whitespace())
        .unwrap_or(line.len());
    &line[..end]
}
