// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Positioned byte access.
//!
//! The lookup engine only ever asks two questions of a file: "give me N bytes
//! at offset X" and "how long are you". [`ByteSource`] is exactly that. Real
//! files go through [`FileHandle`] (positioned reads, no shared cursor), and
//! tests can hand in a byte slice instead.

mod registry;

pub use registry::{FileHandle, FileHandleRegistry};

use std::io;
use std::path::Path;

/// Random-access read-only byte source.
pub trait ByteSource {
    /// Read up to `buf.len()` bytes at `offset`. Returns the count read;
    /// fewer than requested only at end of source.
    fn read_at(&self, buf: &mut [u8], offset: u64) -> io::Result<usize>;

    /// Total length in bytes.
    fn len(&self) -> io::Result<u64>;

    fn is_empty(&self) -> io::Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Name for error messages.
    fn path(&self) -> &Path {
        Path::new("<memory>")
    }
}

impl ByteSource for [u8] {
    fn read_at(&self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        let start = usize::try_from(offset).unwrap_or(usize::MAX).min(self.len());
        let end = start.saturating_add(buf.len()).min(self.len());
        let n = end - start;
        buf[..n].copy_from_slice(&self[start..end]);
        Ok(n)
    }

    fn len(&self) -> io::Result<u64> {
        Ok(<[u8]>::len(self) as u64)
    }
}

impl ByteSource for Vec<u8> {
    fn read_at(&self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        self.as_slice().read_at(buf, offset)
    }

    fn len(&self) -> io::Result<u64> {
        Ok(Vec::len(self) as u64)
    }
}
