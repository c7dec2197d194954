// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The lookup facade.
//!
//! [`WordNet`] owns a data directory, the tuning options, a logger and a
//! (possibly shared) [`FileHandleRegistry`]. Lookups hand back borrowing
//! views that fetch more data only when asked:
//!
//! ```text
//! WordNet::find("import", Verb)
//!     │  searcher over index.verb
//!     ▼
//! IndexEntry ──senses()──► [Sense, Sense, Sense]      (data.verb, one read each)
//!     │                        │
//!     └─relation(Hypernym)     └─relation(Antonym) ──► [Sense]  (target pos data file)
//! ```
//!
//! Each view memoizes its own senses and its own relation results in
//! `once_cell::unsync` cells. Two entries for the same word never share a
//! cache, and the cells make the views `!Sync`.

use std::env;
use std::fmt;
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use once_cell::unsync::OnceCell;

use crate::config::LookupOptions;
use crate::error::{Result, WordNetError};
use crate::logging::{null_logger, Logger, SharedLogger};
use crate::parse::{parse_data_line, parse_index_line, parse_verb_frames};
use crate::reader::read_line_at;
use crate::relation::Relation;
use crate::searcher::SortedFileSearcher;
use crate::source::{FileHandle, FileHandleRegistry};
use crate::types::{display_word, IndexRecord, PartOfSpeech, Pointer, SynsetRecord, VerbFrame};
use crate::utils::normalize_lemma;

/// Environment variable naming the default data directory.
pub const SEARCH_DIR_ENV: &str = "WNSEARCHDIR";

// ============================================================================
// FACADE
// ============================================================================

/// Entry point for every lookup against one wndb directory.
pub struct WordNet {
    data_dir: PathBuf,
    options: LookupOptions,
    registry: Arc<FileHandleRegistry>,
    logger: SharedLogger,
}

impl fmt::Debug for WordNet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordNet")
            .field("data_dir", &self.data_dir)
            .field("options", &self.options)
            .field("open_files", &self.registry.open_count())
            .finish_non_exhaustive()
    }
}

impl WordNet {
    /// Open `dir` with default options, a private registry and no logging.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        Self::builder(dir).build()
    }

    pub fn builder(dir: impl Into<PathBuf>) -> WordNetBuilder {
        WordNetBuilder::new(dir)
    }

    /// Open the directory named by `$WNSEARCHDIR`.
    pub fn from_env() -> Result<Self> {
        Self::builder(default_data_dir()?).build()
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn options(&self) -> &LookupOptions {
        &self.options
    }

    pub fn registry(&self) -> &Arc<FileHandleRegistry> {
        &self.registry
    }

    pub fn index_path(&self, pos: PartOfSpeech) -> PathBuf {
        self.data_dir.join(format!("index.{}", pos.file_suffix()))
    }

    pub fn data_path(&self, pos: PartOfSpeech) -> PathBuf {
        self.data_dir.join(format!("data.{}", pos.file_suffix()))
    }

    // ------------------------------------------------------------------------
    // Index lookups
    // ------------------------------------------------------------------------

    /// Look `word` up in the `pos` index.
    ///
    /// The word is normalized first (case, diacritics, spaces to
    /// underscores), so `"Lead On"` finds `lead_on`.
    pub fn find(&self, word: &str, pos: PartOfSpeech) -> Result<Option<IndexEntry<'_>>> {
        let key = normalize_lemma(word);
        if key.is_empty() {
            return Ok(None);
        }

        let handle = self.handle(&self.index_path(pos))?;
        let searcher = SortedFileSearcher::new(&*handle, self.options.search, self.log());
        let Some(line) = searcher.find(&key)? else {
            self.logger
                .debug(format_args!("'{}' not in {} index", key, pos));
            return Ok(None);
        };

        let record = parse_index_line(&line)?;
        self.logger.debug(format_args!(
            "'{}' found in {} index with {} senses",
            key, pos, record.synset_count
        ));
        Ok(Some(IndexEntry::new(self, record)))
    }

    /// `find` across noun, verb, adjective and adverb, in that order.
    pub fn find_all(&self, word: &str) -> Result<Vec<IndexEntry<'_>>> {
        let mut entries = Vec::new();
        for pos in PartOfSpeech::ALL {
            if let Some(entry) = self.find(word, pos)? {
                entries.push(entry);
            }
        }
        Ok(entries)
    }

    pub fn find_noun(&self, word: &str) -> Result<Option<IndexEntry<'_>>> {
        self.find(word, PartOfSpeech::Noun)
    }

    pub fn find_verb(&self, word: &str) -> Result<Option<IndexEntry<'_>>> {
        self.find(word, PartOfSpeech::Verb)
    }

    pub fn find_adjective(&self, word: &str) -> Result<Option<IndexEntry<'_>>> {
        self.find(word, PartOfSpeech::Adjective)
    }

    pub fn find_adverb(&self, word: &str) -> Result<Option<IndexEntry<'_>>> {
        self.find(word, PartOfSpeech::Adverb)
    }

    // ------------------------------------------------------------------------
    // Direct synset access
    // ------------------------------------------------------------------------

    /// Raw text of the `pos` data line at `offset`.
    pub fn read_data_line(&self, pos: PartOfSpeech, offset: u64) -> Result<String> {
        let handle = self.handle(&self.data_path(pos))?;
        read_line_at(&*handle, offset, self.options.line_window, self.log())
    }

    /// Parsed synset at `offset` in the `pos` data file.
    pub fn sense_at(&self, pos: PartOfSpeech, offset: u64) -> Result<Sense<'_>> {
        Ok(Sense::new(self, self.load_synset(pos, offset)?))
    }

    /// Read and parse one data line, checking it really starts at `offset`.
    fn load_synset(&self, pos: PartOfSpeech, offset: u64) -> Result<SynsetRecord> {
        let line = self.read_data_line(pos, offset)?;
        let record = parse_data_line(&line)?;
        if record.synset_offset != offset {
            return Err(WordNetError::malformed(
                format!(
                    "line at offset {} declares offset {}",
                    offset, record.synset_offset
                ),
                &line,
            ));
        }
        Ok(record)
    }

    fn handle(&self, path: &Path) -> Result<Arc<FileHandle>> {
        self.registry.open(path)
    }

    fn log(&self) -> &dyn Logger {
        &*self.logger
    }
}

/// The directory named by `$WNSEARCHDIR`, or a `Config` error if it's unset.
pub fn default_data_dir() -> Result<PathBuf> {
    match env::var_os(SEARCH_DIR_ENV) {
        Some(dir) if !dir.is_empty() => Ok(PathBuf::from(dir)),
        _ => Err(WordNetError::config(
            PathBuf::new(),
            format!("{} is not set", SEARCH_DIR_ENV),
        )),
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Configures a [`WordNet`] before opening it.
///
/// ```no_run
/// use std::sync::Arc;
/// use wnlookup::{FileHandleRegistry, LookupOptions, TracingLogger, WordNet};
///
/// let registry = Arc::new(FileHandleRegistry::new());
/// let wordnet = WordNet::builder("/usr/share/wordnet")
///     .options(LookupOptions::default())
///     .logger(TracingLogger)
///     .registry(Arc::clone(&registry))
///     .build()?;
/// # Ok::<(), wnlookup::WordNetError>(())
/// ```
pub struct WordNetBuilder {
    data_dir: PathBuf,
    options: LookupOptions,
    registry: Option<Arc<FileHandleRegistry>>,
    logger: Option<SharedLogger>,
}

impl WordNetBuilder {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: dir.into(),
            options: LookupOptions::default(),
            registry: None,
            logger: None,
        }
    }

    pub fn options(mut self, options: LookupOptions) -> Self {
        self.options = options;
        self
    }

    pub fn logger(mut self, logger: impl Logger + 'static) -> Self {
        self.logger = Some(Arc::new(logger));
        self
    }

    pub fn shared_logger(mut self, logger: SharedLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Share open handles with other facades (or keep hold of the registry
    /// to inspect its counters).
    pub fn registry(mut self, registry: Arc<FileHandleRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Validate the directory and options. No file is opened yet.
    pub fn build(self) -> Result<WordNet> {
        let dir = &self.data_dir;
        let metadata = dir
            .metadata()
            .map_err(|e| WordNetError::config(dir, format!("cannot read data directory: {}", e)))?;
        if !metadata.is_dir() {
            return Err(WordNetError::config(dir, "not a directory"));
        }
        self.options.validate(dir)?;

        let logger = self.logger.unwrap_or_else(null_logger);
        logger.info(format_args!("opened wordnet at {}", dir.display()));

        Ok(WordNet {
            data_dir: self.data_dir,
            options: self.options,
            registry: self.registry.unwrap_or_default(),
            logger,
        })
    }
}

// ============================================================================
// RESOLUTION CACHE
// ============================================================================

/// One lazily filled slot per relation, owned by a single view.
struct RelationCache<'wn> {
    slots: [OnceCell<Vec<Sense<'wn>>>; Relation::COUNT],
}

impl<'wn> RelationCache<'wn> {
    fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| OnceCell::new()),
        }
    }

    fn get_or_try_init(
        &self,
        relation: Relation,
        resolve: impl FnOnce() -> Result<Vec<Sense<'wn>>>,
    ) -> Result<&[Sense<'wn>]> {
        self.slots[relation.ordinal()]
            .get_or_try_init(resolve)
            .map(Vec::as_slice)
    }

    fn resolved(&self) -> usize {
        self.slots.iter().filter(|slot| slot.get().is_some()).count()
    }
}

fn symbol_for(relation: Relation, pos: PartOfSpeech) -> Result<&'static str> {
    relation
        .symbol(pos)
        .ok_or(WordNetError::UnsupportedRelation { relation, pos })
}

/// Targets of `symbol` pointers on a single synset.
fn resolve_from_sense<'wn>(
    wordnet: &'wn WordNet,
    sense: &SynsetRecord,
    symbol: &str,
) -> Result<Vec<Sense<'wn>>> {
    load_targets(wordnet, sense.pointers_with(symbol))
}

/// Targets of `symbol` pointers across every sense of an index entry, in
/// sense order.
fn resolve_from_record<'wn>(
    wordnet: &'wn WordNet,
    senses: &[Sense<'wn>],
    symbol: &str,
) -> Result<Vec<Sense<'wn>>> {
    load_targets(
        wordnet,
        senses.iter().flat_map(|sense| sense.record.pointers_with(symbol)),
    )
}

fn load_targets<'a, 'wn>(
    wordnet: &'wn WordNet,
    pointers: impl Iterator<Item = &'a Pointer>,
) -> Result<Vec<Sense<'wn>>> {
    pointers
        .map(|pointer| wordnet.sense_at(pointer.target_pos, pointer.target_offset))
        .collect()
}

// ============================================================================
// INDEX ENTRY
// ============================================================================

/// An index record with lazy access to its senses and relations.
///
/// Derefs to [`IndexRecord`], so `entry.word`, `entry.synset_offsets` and
/// friends work directly.
pub struct IndexEntry<'wn> {
    wordnet: &'wn WordNet,
    record: IndexRecord,
    senses: OnceCell<Vec<Sense<'wn>>>,
    relations: RelationCache<'wn>,
}

impl<'wn> IndexEntry<'wn> {
    fn new(wordnet: &'wn WordNet, record: IndexRecord) -> Self {
        Self {
            wordnet,
            record,
            senses: OnceCell::new(),
            relations: RelationCache::new(),
        }
    }

    pub fn record(&self) -> &IndexRecord {
        &self.record
    }

    pub fn into_record(self) -> IndexRecord {
        self.record
    }

    /// One sense per synset offset, in the same order. Loaded on first call.
    pub fn senses(&self) -> Result<&[Sense<'wn>]> {
        self.senses
            .get_or_try_init(|| {
                self.wordnet.logger.trace(format_args!(
                    "loading {} senses of '{}'",
                    self.record.synset_offsets.len(),
                    self.record.word
                ));
                self.record
                    .synset_offsets
                    .iter()
                    .map(|&offset| self.wordnet.sense_at(self.record.pos, offset))
                    .collect()
            })
            .map(Vec::as_slice)
    }

    /// Every synset reached by `relation` from any sense of this entry.
    ///
    /// Empty when no sense carries the pointer. Errors with
    /// `UnsupportedRelation` when the relation doesn't exist for this
    /// part of speech.
    pub fn relation(&self, relation: Relation) -> Result<&[Sense<'wn>]> {
        let symbol = symbol_for(relation, self.record.pos)?;
        self.relations.get_or_try_init(relation, || {
            resolve_from_record(self.wordnet, self.senses()?, symbol)
        })
    }

    pub fn antonyms(&self) -> Result<&[Sense<'wn>]> {
        self.relation(Relation::Antonym)
    }

    pub fn hypernyms(&self) -> Result<&[Sense<'wn>]> {
        self.relation(Relation::Hypernym)
    }

    pub fn hyponyms(&self) -> Result<&[Sense<'wn>]> {
        self.relation(Relation::Hyponym)
    }

    /// How many relations have been resolved and cached so far.
    pub fn resolved_relations(&self) -> usize {
        self.relations.resolved()
    }
}

impl Deref for IndexEntry<'_> {
    type Target = IndexRecord;

    fn deref(&self) -> &IndexRecord {
        &self.record
    }
}

impl fmt::Debug for IndexEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexEntry")
            .field("record", &self.record)
            .field("senses_loaded", &self.senses.get().is_some())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for IndexEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&display_word(&self.record.word))
    }
}

// ============================================================================
// SENSE
// ============================================================================

/// A parsed synset with lazy relation access.
///
/// Derefs to [`SynsetRecord`].
pub struct Sense<'wn> {
    wordnet: &'wn WordNet,
    record: SynsetRecord,
    relations: RelationCache<'wn>,
}

impl<'wn> Sense<'wn> {
    fn new(wordnet: &'wn WordNet, record: SynsetRecord) -> Self {
        Self {
            wordnet,
            record,
            relations: RelationCache::new(),
        }
    }

    pub fn record(&self) -> &SynsetRecord {
        &self.record
    }

    pub fn into_record(self) -> SynsetRecord {
        self.record
    }

    /// Synsets this one points at through `relation`.
    pub fn relation(&self, relation: Relation) -> Result<&[Sense<'wn>]> {
        let symbol = symbol_for(relation, self.record.pos())?;
        self.relations.get_or_try_init(relation, || {
            resolve_from_sense(self.wordnet, &self.record, symbol)
        })
    }

    pub fn antonyms(&self) -> Result<&[Sense<'wn>]> {
        self.relation(Relation::Antonym)
    }

    pub fn hypernyms(&self) -> Result<&[Sense<'wn>]> {
        self.relation(Relation::Hypernym)
    }

    pub fn hyponyms(&self) -> Result<&[Sense<'wn>]> {
        self.relation(Relation::Hyponym)
    }

    /// Parsed verb frames; empty for non-verbs.
    pub fn verb_frames(&self) -> Result<Vec<VerbFrame>> {
        match &self.record.frames {
            Some(raw) => parse_verb_frames(raw),
            None => Ok(Vec::new()),
        }
    }

    pub fn resolved_relations(&self) -> usize {
        self.relations.resolved()
    }
}

impl Deref for Sense<'_> {
    type Target = SynsetRecord;

    fn deref(&self) -> &SynsetRecord {
        &self.record
    }
}

impl fmt::Debug for Sense<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sense")
            .field("record", &self.record)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Sense<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&display_word(&self.record.head_word))
    }
}

impl PartialEq for Sense<'_> {
    /// Same synset, regardless of which view loaded it.
    fn eq(&self, other: &Self) -> bool {
        self.record == other.record
    }
}
