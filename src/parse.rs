// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Line parsers for `index.*` and `data.*` files.
//!
//! Pure functions: one line of text in, one record out. No I/O and no
//! caching, so they're easy to fuzz and easy to test against literal lines
//! copied out of the database.
//!
//! Numbers in these files come in three flavours and mixing them up silently
//! desynchronises everything after the mistake:
//!
//! | Field             | Encoding              |
//! |-------------------|-----------------------|
//! | synset offsets    | 8-digit decimal       |
//! | `lex_filenum`     | 2-digit decimal       |
//! | `w_cnt`           | 2-digit hexadecimal   |
//! | `lex_id`          | 1-digit hexadecimal   |
//! | `p_cnt`           | 3-digit decimal       |
//! | source/target     | 4-digit hexadecimal   |
//! | `f_cnt`, `f_num`  | 2-digit decimal       |
//! | `w_num` (frames)  | 2-digit hexadecimal   |

use std::str::FromStr;

use crate::error::{Result, WordNetError};
use crate::types::{
    AdjectiveMarker, IndexRecord, Lemma, PartOfSpeech, Pointer, SynsetRecord, SynsetType,
    VerbFrame,
};

/// Tokens per pointer group: symbol, offset, pos, source/target.
const POINTER_FIELDS: usize = 4;

/// Counts come from the line itself; don't trust them for allocation.
const MAX_PREALLOC: usize = 64;

// ============================================================================
// INDEX LINES
// ============================================================================

/// Parse one line of an `index.*` file.
///
/// ```
/// use wnlookup::{parse_index_line, PartOfSpeech};
///
/// let record = parse_index_line("import v 3 5 ! @ ~ + ; 3 1 02346136 02232722 00932636").unwrap();
/// assert_eq!(record.pos, PartOfSpeech::Verb);
/// assert_eq!(record.synset_offsets, vec![2346136, 2232722, 932636]);
/// ```
pub fn parse_index_line(line: &str) -> Result<IndexRecord> {
    let mut fields = line.split_whitespace();

    let word = next_field(&mut fields, "lemma", line)?.to_string();
    let pos_field = next_field(&mut fields, "pos", line)?;
    let pos = PartOfSpeech::from_symbol(pos_field)
        .ok_or_else(|| WordNetError::malformed(format!("unknown pos '{}'", pos_field), line))?;
    let synset_count: usize = parse_decimal(next_field(&mut fields, "synset_cnt", line)?, "synset_cnt", line)?;
    let pointer_count: usize = parse_decimal(next_field(&mut fields, "p_cnt", line)?, "p_cnt", line)?;

    let mut pointer_symbols = Vec::with_capacity(pointer_count.min(MAX_PREALLOC));
    for _ in 0..pointer_count {
        pointer_symbols.push(next_field(&mut fields, "ptr_symbol", line)?.to_string());
    }

    // sense_cnt duplicates synset_cnt
    let _: usize = parse_decimal(next_field(&mut fields, "sense_cnt", line)?, "sense_cnt", line)?;
    let tag_sense_count: usize =
        parse_decimal(next_field(&mut fields, "tagsense_cnt", line)?, "tagsense_cnt", line)?;

    let synset_offsets = fields
        .map(|field| parse_decimal::<u64>(field, "synset_offset", line))
        .collect::<Result<Vec<_>>>()?;

    if synset_offsets.len() != synset_count {
        return Err(WordNetError::malformed(
            format!(
                "synset_cnt is {} but {} offsets follow",
                synset_count,
                synset_offsets.len()
            ),
            line,
        ));
    }

    Ok(IndexRecord {
        word,
        pos,
        synset_count,
        pointer_symbols,
        tag_sense_count,
        synset_offsets,
    })
}

// ============================================================================
// DATA LINES
// ============================================================================

/// Parse one line of a `data.*` file.
///
/// Only the structured half (left of the first `|`) is tokenised; the gloss
/// is kept verbatim apart from trimming.
pub fn parse_data_line(line: &str) -> Result<SynsetRecord> {
    let (structured, gloss) = match line.split_once('|') {
        Some((left, right)) => (left, right.trim().to_string()),
        None => (line, String::new()),
    };
    let mut fields = structured.split_whitespace().peekable();

    let synset_offset: u64 =
        parse_decimal(next_field(&mut fields, "synset_offset", line)?, "synset_offset", line)?;
    let lex_filenum: u8 =
        parse_decimal(next_field(&mut fields, "lex_filenum", line)?, "lex_filenum", line)?;
    let ss_field = next_field(&mut fields, "ss_type", line)?;
    let ss_type = SynsetType::from_symbol(ss_field)
        .ok_or_else(|| WordNetError::malformed(format!("unknown ss_type '{}'", ss_field), line))?;
    let word_count = parse_hex::<usize>(next_field(&mut fields, "w_cnt", line)?, "w_cnt", line)?;

    // Scan word/lex_id pairs until the next token looks like p_cnt. The first
    // pair is mandatory.
    let mut words = Vec::with_capacity(word_count.clamp(1, MAX_PREALLOC));
    loop {
        let word = next_field(&mut fields, "word", line)?;
        let lex_id = parse_hex::<u8>(next_field(&mut fields, "lex_id", line)?, "lex_id", line)?;
        words.push(lemma(word, lex_id));
        match fields.peek() {
            Some(token) if is_pointer_count(token) => break,
            Some(_) => continue,
            None => return Err(WordNetError::malformed("missing p_cnt", line)),
        }
    }

    let p_cnt_field = next_field(&mut fields, "p_cnt", line)?;
    let pointer_count: usize = parse_decimal(p_cnt_field, "p_cnt", line)?;

    let mut pointers = Vec::with_capacity(pointer_count.min(MAX_PREALLOC));
    for index in 0..pointer_count {
        let group: Vec<&str> = fields.by_ref().take(POINTER_FIELDS).collect();
        if group.len() < POINTER_FIELDS {
            return Err(WordNetError::malformed(
                format!("pointer {} of {} is truncated", index + 1, pointer_count),
                line,
            ));
        }
        pointers.push(parse_pointer(&group, line)?);
    }

    let rest: Vec<&str> = fields.collect();
    let frames = if rest.is_empty() {
        None
    } else {
        Some(rest.join(" "))
    };

    let head = &words[0];
    Ok(SynsetRecord {
        synset_offset,
        lex_filenum,
        ss_type,
        word_count,
        head_word: head.word.clone(),
        lex_id: head.lex_id,
        words,
        pointers,
        frames,
        gloss,
    })
}

/// Positional parse of a verb frame tail: `f_cnt + f_num w_num [+ f_num w_num...]`.
pub fn parse_verb_frames(raw: &str) -> Result<Vec<VerbFrame>> {
    let mut fields = raw.split_whitespace();
    let count: usize = parse_decimal(next_field(&mut fields, "f_cnt", raw)?, "f_cnt", raw)?;

    let mut frames = Vec::with_capacity(count.min(MAX_PREALLOC));
    for _ in 0..count {
        let plus = next_field(&mut fields, "'+'", raw)?;
        if plus != "+" {
            return Err(WordNetError::malformed(
                format!("expected '+' before frame, found '{}'", plus),
                raw,
            ));
        }
        let frame = parse_decimal(next_field(&mut fields, "f_num", raw)?, "f_num", raw)?;
        let word = parse_hex(next_field(&mut fields, "w_num", raw)?, "w_num", raw)?;
        frames.push(VerbFrame { frame, word });
    }

    if let Some(extra) = fields.next() {
        return Err(WordNetError::malformed(
            format!("unexpected token '{}' after {} frames", extra, count),
            raw,
        ));
    }
    Ok(frames)
}

fn parse_pointer(group: &[&str], line: &str) -> Result<Pointer> {
    let target_offset = parse_decimal(group[1], "pointer offset", line)?;
    let target_pos = PartOfSpeech::from_symbol(group[2])
        .ok_or_else(|| WordNetError::malformed(format!("unknown pointer pos '{}'", group[2]), line))?;
    let source_target = group[3];
    if source_target.len() != 4 || !source_target.is_ascii() {
        return Err(WordNetError::malformed(
            format!("source/target '{}' is not 4 hex digits", source_target),
            line,
        ));
    }
    let source = parse_hex(&source_target[..2], "pointer source", line)?;
    let target = parse_hex(&source_target[2..], "pointer target", line)?;

    Ok(Pointer {
        symbol: group[0].to_string(),
        target_offset,
        target_pos,
        source,
        target,
    })
}

/// Split an adjective marker off a word: `galore(ip)` -> (`galore`, Postnominal).
fn lemma(raw: &str, lex_id: u8) -> Lemma {
    if let Some(stripped) = raw.strip_suffix(')') {
        if let Some((word, tag)) = stripped.rsplit_once('(') {
            if let Some(marker) = AdjectiveMarker::from_tag(tag) {
                return Lemma {
                    word: word.to_string(),
                    lex_id,
                    marker: Some(marker),
                };
            }
        }
    }
    Lemma {
        word: raw.to_string(),
        lex_id,
        marker: None,
    }
}

/// `p_cnt` is always exactly three decimal digits.
fn is_pointer_count(token: &str) -> bool {
    token.len() == 3 && token.bytes().all(|b| b.is_ascii_digit())
}

// ============================================================================
// FIELD HELPERS
// ============================================================================

fn next_field<'a>(
    fields: &mut impl Iterator<Item = &'a str>,
    name: &str,
    line: &str,
) -> Result<&'a str> {
    fields
        .next()
        .ok_or_else(|| WordNetError::malformed(format!("missing {}", name), line))
}

fn parse_decimal<T: FromStr>(field: &str, name: &str, line: &str) -> Result<T> {
    field
        .parse::<T>()
        .map_err(|_| WordNetError::malformed(format!("{} '{}' is not a number", name, field), line))
}

fn parse_hex<T: TryFrom<u64>>(field: &str, name: &str, line: &str) -> Result<T> {
    u64::from_str_radix(field, 16)
        .ok()
        .and_then(|value| T::try_from(value).ok())
        .ok_or_else(|| WordNetError::malformed(format!("{} '{}' is not hexadecimal", name, field), line))
}
