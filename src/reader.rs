// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Random-access line retrieval.
//!
//! A synset offset is the byte offset of its line in the data file, but the
//! line's length isn't stored anywhere. So we read a window, look for a
//! newline, and if there isn't one we read the next window and try again.
//! Most data lines fit in the default 1 KiB window; the long ones (nouns
//! with hundreds of hyponym pointers) take a few extra reads.

use crate::error::{Result, WordNetError};
use crate::logging::Logger;
use crate::source::ByteSource;

/// Return the line starting at `offset`, without the newline and with
/// trailing whitespace trimmed.
///
/// Offset 0 is always rejected: the first line of every wndb file is license
/// text, never a record. So is an offset at or past end of file.
pub fn read_line_at<S: ByteSource + ?Sized>(
    source: &S,
    offset: u64,
    window: usize,
    logger: &dyn Logger,
) -> Result<String> {
    if offset == 0 {
        return Err(WordNetError::InvalidOffset {
            offset,
            path: source.path().to_path_buf(),
        });
    }
    let window = window.max(1);

    let mut line: Vec<u8> = Vec::with_capacity(window);
    let mut chunk = vec![0u8; window];
    let mut read_from = offset;

    loop {
        let n = source
            .read_at(&mut chunk, read_from)
            .map_err(|e| WordNetError::io(source.path(), e))?;

        if n == 0 && line.is_empty() {
            return Err(WordNetError::InvalidOffset {
                offset,
                path: source.path().to_path_buf(),
            });
        }

        let scanned = line.len();
        line.extend_from_slice(&chunk[..n]);
        if let Some(newline) = line[scanned..].iter().position(|&b| b == b'\n') {
            line.truncate(scanned + newline);
            break;
        }
        if n < window {
            // End of file: the last line needn't be newline-terminated.
            break;
        }

        read_from += n as u64;
        logger.trace(format_args!(
            "no newline within {} bytes of offset {}, reading more at {}",
            line.len(),
            offset,
            read_from
        ));
    }

    let text = String::from_utf8_lossy(&line);
    Ok(text.trim_end().to_string())
}
