// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared cache of open file handles, keyed by path.
//!
//! Every lookup touches two files (an index and a data file), and pointer
//! resolution can bounce between all eight. Reopening them per query is pure
//! waste, so the registry opens each path once and hands out `Arc` clones.
//! It is an explicit object rather than a global: create one at startup,
//! share it between facades if you like, drop it at shutdown.
//!
//! Handles never move a cursor. Reads are positioned (`pread` on Unix,
//! `seek_read` on Windows), so any number of threads can read the same
//! handle at once.

use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use super::ByteSource;
use crate::error::{Result, WordNetError};

/// An open, read-only file plus its length and a read counter.
#[derive(Debug)]
pub struct FileHandle {
    path: PathBuf,
    file: File,
    len: u64,
    reads: AtomicU64,
}

impl FileHandle {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = File::open(&path).map_err(|e| WordNetError::io(&path, e))?;
        let len = file
            .metadata()
            .map_err(|e| WordNetError::io(&path, e))?
            .len();
        Ok(Self {
            path,
            file,
            len,
            reads: AtomicU64::new(0),
        })
    }

    /// Number of positioned reads issued through this handle.
    pub fn read_count(&self) -> u64 {
        self.reads.load(Ordering::Relaxed)
    }

    #[cfg(unix)]
    fn read_once(&self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        use std::os::unix::fs::FileExt;
        self.file.read_at(buf, offset)
    }

    #[cfg(windows)]
    fn read_once(&self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        use std::os::windows::fs::FileExt;
        self.file.seek_read(buf, offset)
    }
}

impl ByteSource for FileHandle {
    /// Fills `buf` unless end of file intervenes.
    fn read_at(&self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        self.reads.fetch_add(1, Ordering::Relaxed);
        let mut filled = 0;
        while filled < buf.len() {
            match self.read_once(&mut buf[filled..], offset + filled as u64) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(filled)
    }

    fn len(&self) -> io::Result<u64> {
        Ok(self.len)
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

/// Process-scoped map from path to open handle.
#[derive(Debug, Default)]
pub struct FileHandleRegistry {
    handles: RwLock<HashMap<PathBuf, Arc<FileHandle>>>,
}

impl FileHandleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached handle for `path`, opening it on first request.
    pub fn open(&self, path: &Path) -> Result<Arc<FileHandle>> {
        if let Some(handle) = self.handles.read().get(path) {
            return Ok(Arc::clone(handle));
        }

        let mut handles = self.handles.write();
        // Another thread may have opened it between the two locks.
        if let Some(handle) = handles.get(path) {
            return Ok(Arc::clone(handle));
        }
        let handle = Arc::new(FileHandle::open(path)?);
        handles.insert(path.to_path_buf(), Arc::clone(&handle));
        Ok(handle)
    }

    /// Number of distinct paths currently open.
    pub fn open_count(&self) -> usize {
        self.handles.read().len()
    }

    /// Sum of positioned reads across every cached handle.
    pub fn read_count(&self) -> u64 {
        self.handles.read().values().map(|h| h.read_count()).sum()
    }

    /// Drop every cached handle. Outstanding `Arc`s stay valid.
    pub fn clear(&self) {
        self.handles.write().clear();
    }
}
