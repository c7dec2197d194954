// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type for every fallible lookup operation.
//!
//! Not-found is deliberately absent from this list. A missing word is `None`,
//! a relation with no pointers is an empty slice. Errors are reserved for
//! things the caller can't paper over: a bad data directory, a corrupt line,
//! an offset that can't be a record, or the disk saying no.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::relation::Relation;
use crate::types::PartOfSpeech;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, WordNetError>;

/// Everything that can go wrong between a query and a parsed record.
#[derive(Debug, Error)]
pub enum WordNetError {
    /// Data directory missing/unreadable, or tuning options out of range.
    #[error("configuration error for {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },

    /// Byte offset that can never start a record (zero, or past end of file).
    #[error("invalid byte offset {offset} in {}", path.display())]
    InvalidOffset { offset: u64, path: PathBuf },

    /// Line that fails structural parsing.
    #[error("malformed record ({reason}): {line}")]
    MalformedRecord { reason: String, line: String },

    /// Relation that has no pointer symbol for the owner's part of speech.
    #[error("relation {relation} is not defined for {pos}")]
    UnsupportedRelation {
        relation: Relation,
        pos: PartOfSpeech,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WordNetError {
    pub(crate) fn malformed(reason: impl Into<String>, line: &str) -> Self {
        WordNetError::MalformedRecord {
            reason: reason.into(),
            line: line.to_string(),
        }
    }

    pub(crate) fn config(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        WordNetError::Config {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        WordNetError::Io {
            path: path.into(),
            source,
        }
    }
}
