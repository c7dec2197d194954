// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core record types parsed out of the wndb text files.
//!
//! Everything here is plain data. The lazy, I/O-backed views over these
//! records (`IndexEntry`, `Sense`) live in `lexicon`; the parsers that build
//! them live in `parse`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ============================================================================
// PART OF SPEECH
// ============================================================================

/// Part of speech. Selects the index/data file pair and the relation vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl PartOfSpeech {
    /// Canonical lookup order used by `find_all`.
    pub const ALL: [PartOfSpeech; 4] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
    ];

    /// Single-letter symbol as it appears in index and data lines.
    pub fn symbol(self) -> char {
        match self {
            PartOfSpeech::Noun => 'n',
            PartOfSpeech::Verb => 'v',
            PartOfSpeech::Adjective => 'a',
            PartOfSpeech::Adverb => 'r',
        }
    }

    /// Parse a pos symbol. `s` (adjective satellite) folds into `Adjective`.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "n" => Some(PartOfSpeech::Noun),
            "v" => Some(PartOfSpeech::Verb),
            "a" | "s" => Some(PartOfSpeech::Adjective),
            "r" => Some(PartOfSpeech::Adverb),
            _ => None,
        }
    }

    /// File-name suffix: `index.<suffix>`, `data.<suffix>`.
    pub fn file_suffix(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adj",
            PartOfSpeech::Adverb => "adv",
        }
    }

    /// Position in `ALL`, used to index per-pos tables.
    pub(crate) fn ordinal(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
        };
        f.write_str(name)
    }
}

impl FromStr for PartOfSpeech {
    type Err = String;

    /// Accepts the symbol (`n`), the file suffix (`adj`), or the full name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        if let Some(pos) = PartOfSpeech::from_symbol(&lower) {
            return Ok(pos);
        }
        match lower.as_str() {
            "noun" => Ok(PartOfSpeech::Noun),
            "verb" => Ok(PartOfSpeech::Verb),
            "adj" | "adjective" => Ok(PartOfSpeech::Adjective),
            "adv" | "adverb" => Ok(PartOfSpeech::Adverb),
            _ => Err(format!("unknown part of speech: {}", s)),
        }
    }
}

/// The `ss_type` field of a data line. Keeps the satellite distinction that
/// `PartOfSpeech` folds away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SynsetType {
    Noun,
    Verb,
    Adjective,
    AdjectiveSatellite,
    Adverb,
}

impl SynsetType {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "n" => Some(SynsetType::Noun),
            "v" => Some(SynsetType::Verb),
            "a" => Some(SynsetType::Adjective),
            "s" => Some(SynsetType::AdjectiveSatellite),
            "r" => Some(SynsetType::Adverb),
            _ => None,
        }
    }

    /// The part of speech whose files hold this synset.
    pub fn pos(self) -> PartOfSpeech {
        match self {
            SynsetType::Noun => PartOfSpeech::Noun,
            SynsetType::Verb => PartOfSpeech::Verb,
            SynsetType::Adjective | SynsetType::AdjectiveSatellite => PartOfSpeech::Adjective,
            SynsetType::Adverb => PartOfSpeech::Adverb,
        }
    }
}

// ============================================================================
// POINTER
// ============================================================================

/// One semantic or lexical cross-reference from a synset to another synset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pointer {
    /// Pointer symbol, e.g. `@` (hypernym) or `!` (antonym).
    pub symbol: String,
    /// Byte offset of the target synset in the target pos data file.
    pub target_offset: u64,
    pub target_pos: PartOfSpeech,
    /// Word number in the source synset (0 for semantic pointers).
    pub source: u8,
    /// Word number in the target synset (0 for semantic pointers).
    pub target: u8,
}

impl Pointer {
    /// `0000` source/target means the pointer relates whole synsets.
    pub fn is_semantic(&self) -> bool {
        self.source == 0 && self.target == 0
    }
}

// ============================================================================
// INDEX RECORD
// ============================================================================

/// One line of an `index.*` file.
///
/// `lemma pos synset_cnt p_cnt [ptr_symbol...] sense_cnt tagsense_cnt synset_offset [synset_offset...]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRecord {
    /// Lemma, underscores for multi-word phrases.
    pub word: String,
    pub pos: PartOfSpeech,
    pub synset_count: usize,
    /// Pointer symbols present in any synset containing the lemma.
    pub pointer_symbols: Vec<String>,
    /// Number of senses ranked by tagged frequency.
    pub tag_sense_count: usize,
    /// One per sense, in sense (frequency) order.
    pub synset_offsets: Vec<u64>,
}

impl fmt::Display for IndexRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&display_word(&self.word))
    }
}

// ============================================================================
// SYNSET RECORD
// ============================================================================

/// Adjective syntactic marker: `(a)`, `(p)`, `(ip)` suffixed to a word in
/// the adjective data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdjectiveMarker {
    /// `(p)`: predicate position.
    Predicative,
    /// `(a)`: prenominal (attributive) position.
    Attributive,
    /// `(ip)`: immediately postnominal position.
    Postnominal,
}

impl AdjectiveMarker {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "p" => Some(AdjectiveMarker::Predicative),
            "a" => Some(AdjectiveMarker::Attributive),
            "ip" => Some(AdjectiveMarker::Postnominal),
            _ => None,
        }
    }
}

/// A word within a synset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lemma {
    pub word: String,
    /// Distinguishes senses of the same word within one lexicographer file.
    pub lex_id: u8,
    pub marker: Option<AdjectiveMarker>,
}

/// A verb frame reference: frame `frame` applies to word `word` (0 = all words).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerbFrame {
    pub frame: u8,
    pub word: u8,
}

/// One line of a `data.*` file.
///
/// `synset_offset lex_filenum ss_type w_cnt word lex_id [word lex_id...] p_cnt [ptr...] [frames...] | gloss`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynsetRecord {
    /// Byte offset of this line in its data file; unique within the file.
    pub synset_offset: u64,
    pub lex_filenum: u8,
    pub ss_type: SynsetType,
    /// Declared word count (`w_cnt`).
    pub word_count: usize,
    /// First word of the synset.
    pub head_word: String,
    /// lex_id of the head word.
    pub lex_id: u8,
    /// All words of the synset, head word first.
    pub words: Vec<Lemma>,
    pub pointers: Vec<Pointer>,
    /// Raw verb frame tail, present only for verbs.
    pub frames: Option<String>,
    /// Definition plus optional quoted examples.
    pub gloss: String,
}

impl SynsetRecord {
    pub fn pos(&self) -> PartOfSpeech {
        self.ss_type.pos()
    }

    /// Pointers carrying `symbol`, in line order.
    pub fn pointers_with<'a>(&'a self, symbol: &'a str) -> impl Iterator<Item = &'a Pointer> + 'a {
        self.pointers.iter().filter(move |p| p.symbol == symbol)
    }
}

impl fmt::Display for SynsetRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&display_word(&self.head_word))
    }
}

/// Underscores in stored lemmas are spaces in human-facing output.
pub fn display_word(word: &str) -> String {
    word.replace('_', " ")
}
