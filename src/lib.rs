// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! On-disk WordNet lookup without loading the database.
//!
//! WordNet ships as plain text: a sorted `index.*` file per part of speech
//! and a `data.*` file whose synsets are addressed by byte offset. This crate
//! answers queries straight off those files with positioned reads. Nothing is
//! preloaded, and a lookup touches a few hundred bytes at most.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐   ┌──────────────┐   ┌──────────────┐
//! │ lexicon.rs  │──▶│ searcher.rs  │──▶│  parse.rs    │
//! │ (WordNet,   │   │ (adaptive    │   │ (index/data  │
//! │  IndexEntry,│   │  bisection)  │   │  line parse) │
//! │  Sense)     │   └──────────────┘   └──────────────┘
//! │             │   ┌──────────────┐          ▲
//! │             │──▶│  reader.rs   │──────────┘
//! └─────────────┘   │ (line at     │
//!        │          │  offset)     │
//!        │          └──────────────┘
//!        ▼                 │
//! ┌─────────────┐          ▼
//! │ relation.rs │   ┌──────────────────────────────┐
//! │ (pointer    │   │ source/ (ByteSource,         │
//! │  symbols)   │   │  FileHandleRegistry)         │
//! └─────────────┘   └──────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use wnlookup::{Relation, WordNet};
//!
//! let wordnet = WordNet::open("/usr/share/wordnet")?;
//! if let Some(fool) = wordnet.find_verb("fool")? {
//!     for sense in fool.senses()? {
//!         println!("{}: {}", sense, sense.gloss);
//!         for hypernym in sense.relation(Relation::Hypernym)? {
//!             println!("  => {}", hypernym);
//!         }
//!     }
//! }
//! # Ok::<(), wnlookup::WordNetError>(())
//! ```

// Module declarations
pub mod config;
mod error;
mod lexicon;
pub mod logging;
mod parse;
mod reader;
mod relation;
mod searcher;
pub mod source;
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use config::{LookupOptions, SearchOptions};
pub use error::{Result, WordNetError};
pub use lexicon::{default_data_dir, IndexEntry, Sense, WordNet, WordNetBuilder, SEARCH_DIR_ENV};
pub use logging::{Logger, NullLogger, SharedLogger, TracingLogger};
pub use parse::{parse_data_line, parse_index_line, parse_verb_frames};
pub use reader::read_line_at;
pub use relation::Relation;
pub use searcher::SortedFileSearcher;
pub use source::{ByteSource, FileHandle, FileHandleRegistry};
pub use types::{
    display_word, AdjectiveMarker, IndexRecord, Lemma, PartOfSpeech, Pointer, SynsetRecord,
    SynsetType, VerbFrame,
};
pub use utils::normalize_lemma;
