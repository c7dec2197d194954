// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the wnlookup command-line interface.
//!
//! Three subcommands: `find` to show a word's senses, `relation` to follow
//! one pointer type from every sense, and `line` to dump a raw data line by
//! offset. The data directory comes from `--dict` or `$WNSEARCHDIR`.

pub mod display;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use wnlookup::{PartOfSpeech, Relation};

#[derive(Parser)]
#[command(
    name = "wnlookup",
    about = "Look words up in a WordNet database without loading it",
    version
)]
pub struct Cli {
    /// WordNet `dict` directory (defaults to $WNSEARCHDIR)
    #[arg(short, long, global = true)]
    pub dict: Option<PathBuf>,

    /// JSON file with lookup tuning options
    #[arg(long, global = true)]
    pub options: Option<PathBuf>,

    /// More log output on stderr (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show every sense of a word
    Find {
        /// Word or phrase; spaces and case don't matter
        word: String,

        /// Restrict to one part of speech (n, v, a, r)
        #[arg(short, long)]
        pos: Option<PartOfSpeech>,

        /// Print JSON instead of boxes
        #[arg(long)]
        json: bool,
    },

    /// Follow one relation from every sense of a word
    Relation {
        word: String,

        #[arg(short, long)]
        pos: PartOfSpeech,

        /// Relation name, e.g. hypernym, "also see", member_meronym
        #[arg(short, long)]
        relation: Relation,
    },

    /// Print the raw data line at a synset offset
    Line {
        offset: u64,

        #[arg(short, long)]
        pos: PartOfSpeech,
    },
}
