// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use serde_json::json;
use tracing_subscriber::EnvFilter;
use wnlookup::{
    default_data_dir, display_word, IndexEntry, LookupOptions, PartOfSpeech, Relation, Sense,
    TracingLogger, WordNet,
};

mod cli;
use cli::display::{
    dimmed, error_label, offset_label, plain, pos_badge, row, rows_wrapped, section_bot,
    section_top, themed, BOLD, CYAN,
};
use cli::{Cli, Commands};

type CliResult<T> = Result<T, Box<dyn Error>>;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", error_label(), e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr. RUST_LOG wins over `-v`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "warn,wnlookup=debug",
        _ => "warn,wnlookup=trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> CliResult<()> {
    let wordnet = open(cli)?;
    match &cli.command {
        Commands::Find { word, pos, json } => run_find(&wordnet, word, *pos, *json),
        Commands::Relation {
            word,
            pos,
            relation,
        } => run_relation(&wordnet, word, *pos, *relation),
        Commands::Line { offset, pos } => {
            println!("{}", wordnet.read_data_line(*pos, *offset)?);
            Ok(())
        }
    }
}

fn open(cli: &Cli) -> CliResult<WordNet> {
    let dir = match &cli.dict {
        Some(dir) => dir.clone(),
        None => default_data_dir()?,
    };
    let options = match &cli.options {
        Some(path) => LookupOptions::from_json_file(path)?,
        None => LookupOptions::default(),
    };
    tracing::debug!(dict = %dir.display(), "opening wordnet");
    Ok(WordNet::builder(dir)
        .options(options)
        .logger(TracingLogger)
        .build()?)
}

// ============================================================================
// FIND
// ============================================================================

fn run_find(wordnet: &WordNet, word: &str, pos: Option<PartOfSpeech>, as_json: bool) -> CliResult<()> {
    let entries = match pos {
        Some(pos) => wordnet.find(word, pos)?.into_iter().collect(),
        None => wordnet.find_all(word)?,
    };

    if as_json {
        let mut out = Vec::with_capacity(entries.len());
        for entry in &entries {
            let senses: Vec<_> = entry.senses()?.iter().map(|s| s.record()).collect();
            out.push(json!({ "entry": entry.record(), "senses": senses }));
        }
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("{}", dimmed(&format!("no entries for '{}'", word)));
        return Ok(());
    }
    for entry in &entries {
        print_entry(entry)?;
    }
    Ok(())
}

fn print_entry(entry: &IndexEntry<'_>) -> CliResult<()> {
    section_top(&format!("{} {}", entry, pos_badge(entry.pos)));
    for (number, sense) in entry.senses()?.iter().enumerate() {
        print_sense(number + 1, sense);
    }
    section_bot();
    Ok(())
}

fn print_sense(number: usize, sense: &Sense<'_>) {
    let synonyms: Vec<String> = sense.words.iter().map(|l| display_word(&l.word)).collect();
    row(&format!(
        " {}. {} {}",
        number,
        offset_label(sense.synset_offset),
        themed(CYAN, &[BOLD], &synonyms.join(", "))
    ));
    rows_wrapped(5, &sense.gloss, plain);
}

// ============================================================================
// RELATION
// ============================================================================

fn run_relation(wordnet: &WordNet, word: &str, pos: PartOfSpeech, relation: Relation) -> CliResult<()> {
    let Some(entry) = wordnet.find(word, pos)? else {
        println!("{}", dimmed(&format!("no {} entry for '{}'", pos, word)));
        return Ok(());
    };

    section_top(&format!("{} {} · {}", entry, pos_badge(pos), relation));
    for (number, sense) in entry.senses()?.iter().enumerate() {
        print_sense(number + 1, sense);
        let targets = sense.relation(relation)?;
        if targets.is_empty() {
            row(&format!("     {}", dimmed("(none)")));
        }
        for target in targets {
            row(&format!(
                "     => {} {}",
                offset_label(target.synset_offset),
                target
            ));
            rows_wrapped(8, &target.gloss, dimmed);
        }
    }
    section_bot();
    Ok(())
}
