//! Shared test utilities and fixtures.
//!
//! The fixture is a slice of WordNet 3.0 around "import", "export", "fool"
//! and "excuse", with every data line sitting at its real synset offset.
//! Most pointers resolve inside the fixture. Two lines keep pointers into
//! nouns that aren't here: `EXPORT_LINE` (verbatim, so its `;c` and most of
//! its `+` targets dangle) and `FOOL_MAKE_A_FOOL_OF`.

#![allow(dead_code)]

use std::sync::Arc;

use tempfile::TempDir;
use wnlookup::testing::WndbFixture;
use wnlookup::{FileHandleRegistry, PartOfSpeech, WordNet};

// ============================================================================
// OFFSETS
// ============================================================================

pub const IMPORT_SPELL: u64 = 932_636;
pub const IMPORT_DATA: u64 = 2_232_722;
pub const IMPORT_BRING_IN: u64 = 2_346_136;
pub const EXPORT: u64 = 2_346_409;
pub const RE_EXPORT: u64 = 2_345_856;
pub const TRADE: u64 = 2_260_362;
pub const TRANSFER: u64 = 2_231_590;

pub const DECEIVE: u64 = 2_575_082;
/// Carries a `+` pointer to noun 07162194, which is not in the fixture.
pub const FOOL_MAKE_A_FOOL_OF: u64 = 2_575_723;
pub const FOOL_HOAX: u64 = 2_576_223;
pub const FOOL_AROUND: u64 = 851_933;
pub const FRITTER: u64 = 2_418_686;

pub const EXCUSE_JUSTIFY: u64 = 898_019;
pub const EXCUSE_RELIEVE: u64 = 738_314;
pub const EXCUSE_DEFENSE: u64 = 7_226_545;
pub const EXCUSE_NOTE: u64 = 6_738_281;
pub const NOTE: u64 = 6_738_162;

pub const IMPORT_NOUN: u64 = 3_566_329;
pub const EXPORT_NOUN: u64 = 3_306_207;
pub const FOOL_NOUN: u64 = 10_112_591;

pub const GOOD: u64 = 1_123_148;
pub const BANG_UP: u64 = 1_123_879;
pub const BAD: u64 = 1_125_429;

pub const LOUDLY: u64 = 282_950;
pub const SOFTLY: u64 = 283_234;

/// The export line exactly as it appears in data.verb.
pub const EXPORT_LINE: &str = "02346409 40 v 01 export 0 009 @ 02260362 v 0000 ;c 01090446 n 0000 + 03306207 n 0102 + 01111952 n 0102 + 03306207 n 0101 + 10073634 n 0101 + 01111952 n 0101 ! 02346136 v 0101 ~ 02345856 v 0000 03 + 08 00 + 16 00 + 21 00 | sell or transfer abroad; \"we export less than we import and have a negative trade balance\"";

pub const EXPORT_GLOSS: &str =
    "sell or transfer abroad; \"we export less than we import and have a negative trade balance\"";

// ============================================================================
// FIXTURE
// ============================================================================

/// The full fixture as a builder, for tests that want to add to it.
pub fn fixture() -> WndbFixture {
    use PartOfSpeech::{Adjective, Adverb, Noun, Verb};

    WndbFixture::new()
        // --- verbs ---------------------------------------------------------
        .data(Verb, EXCUSE_RELIEVE, "00738314 32 v 02 excuse 0 relieve 0 000 01 + 09 00 | grant exemption or release to")
        .data(Verb, FOOL_AROUND, "00851933 29 v 02 fool 0 fool_around 0 000 01 + 02 00 | indulge in horseplay")
        .data(Verb, EXCUSE_JUSTIFY, "00898019 32 v 01 excuse 0 000 02 + 08 00 + 09 00 | serve as a reason or cause or justification of")
        .data(Verb, IMPORT_SPELL, "00932636 32 v 02 spell 0 import 2 000 01 + 08 00 | indicate or signify; \"I'm afraid this spells trouble!\"")
        .data(Verb, TRANSFER, "02231590 40 v 01 transfer 0 001 ~ 02232722 v 0000 01 + 08 00 | move from one place to another")
        .data(Verb, IMPORT_DATA, "02232722 40 v 01 import 0 001 @ 02231590 v 0000 02 + 08 00 + 21 00 | transfer (electronic data) into a database or document")
        .data(Verb, TRADE, "02260362 40 v 02 trade 0 merchandise 0 002 ~ 02346136 v 0000 ~ 02346409 v 0000 01 + 08 00 | engage in the trade of; \"he is merchandising his Christmas cards\"")
        .data(Verb, RE_EXPORT, "02345856 40 v 01 re-export 0 001 @ 02346409 v 0000 01 + 08 00 | export (something that has been imported)")
        .data(Verb, IMPORT_BRING_IN, "02346136 40 v 01 import 0 003 @ 02260362 v 0000 + 03566329 n 0101 ! 02346409 v 0101 01 + 08 00 | bring in from abroad")
        .data(Verb, EXPORT, EXPORT_LINE)
        .data(Verb, FRITTER, "02418686 40 v 04 fritter 0 frivol_away 0 dissipate 0 fool 2 000 01 + 08 00 | spend frivolously and unwisely")
        .data(Verb, DECEIVE, "02575082 31 v 03 deceive 0 lead_on 0 delude 0 001 ~ 02575723 v 0000 02 + 08 00 + 09 00 | be false to; be dishonest with")
        .data(Verb, FOOL_MAKE_A_FOOL_OF, "02575723 31 v 03 fool 0 gull 0 befool 0 004 @ 02575082 v 0000 + 10112591 n 0101 + 07162194 n 0101 ~ 02576223 v 0000 02 + 08 00 + 15 00 | make a fool or dupe of")
        .data(Verb, FOOL_HOAX, "02576223 31 v 01 fool 0 001 @ 02575723 v 0000 01 + 08 00 | fool or hoax; \"The immigrants were duped\"")
        .index(Verb, "deceive v 1 1 ~ 1 1 02575082")
        .index(Verb, "excuse v 2 0 2 1 00898019 00738314")
        .index(Verb, "export v 1 5 ! @ ~ + ; 1 1 02346409")
        .index(Verb, "fool v 4 2 @ ~ 4 1 02575723 02576223 00851933 02418686")
        .index(Verb, "fritter v 1 0 1 0 02418686")
        .index(Verb, "import v 3 5 ! @ ~ + ; 3 1 02346136 02232722 00932636")
        .index(Verb, "lead_on v 1 1 ~ 1 0 02575082")
        .index(Verb, "re-export v 1 1 @ 1 0 02345856")
        .index(Verb, "spell v 1 0 1 0 00932636")
        .index(Verb, "trade v 1 1 ~ 1 1 02260362")
        .index(Verb, "transfer v 1 1 ~ 1 1 02231590")
        // --- nouns ---------------------------------------------------------
        .data(Noun, EXPORT_NOUN, "03306207 06 n 02 export 0 exportation 0 002 + 02346409 v 0101 ! 03566329 n 0101 | commodities (goods or services) sold to a foreign country")
        .data(Noun, IMPORT_NOUN, "03566329 06 n 02 import 0 importation 0 002 + 02346136 v 0101 ! 03306207 n 0101 | commodities (goods or services) bought from a foreign country")
        .data(Noun, NOTE, "06738162 10 n 01 note 0 001 ~ 06738281 n 0000 | a brief written record")
        .data(Noun, EXCUSE_NOTE, "06738281 10 n 01 excuse 1 001 @ 06738162 n 0000 | a note explaining an absence")
        .data(Noun, EXCUSE_DEFENSE, "07226545 32 n 03 excuse 0 alibi 0 exculpation 0 000 | a defense of some offensive behavior or some failure to keep a promise etc.")
        .data(Noun, FOOL_NOUN, "10112591 18 n 04 fool 0 sap 0 saphead 0 muggins 0 001 + 02575723 v 0101 | a person who lacks good judgment")
        .index(Noun, "excuse n 2 1 @ 2 1 07226545 06738281")
        .index(Noun, "export n 1 2 ! + 1 0 03306207")
        .index(Noun, "fool n 1 1 + 1 0 10112591")
        .index(Noun, "import n 1 2 ! + 1 0 03566329")
        .index(Noun, "note n 1 1 ~ 1 0 06738162")
        // --- adjectives ----------------------------------------------------
        .data(Adjective, GOOD, "01123148 00 a 01 good 0 002 ! 01125429 a 0101 & 01123879 a 0000 | having desirable or positive qualities especially those suitable for a thing specified")
        .data(Adjective, BANG_UP, "01123879 00 s 02 bang-up 0 smashing(a) 0 001 & 01123148 a 0000 | very good")
        .data(Adjective, BAD, "01125429 00 a 01 bad 0 001 ! 01123148 a 0101 | having undesirable or negative qualities")
        .index(Adjective, "bad a 1 1 ! 1 1 01125429")
        .index(Adjective, "bang-up a 1 1 & 1 0 01123879")
        .index(Adjective, "good a 1 2 ! & 1 1 01123148")
        .index(Adjective, "smashing a 1 1 & 1 0 01123879")
        // --- adverbs -------------------------------------------------------
        .data(Adverb, LOUDLY, "00282950 02 r 02 loudly 0 aloud 0 001 ! 00283234 r 0101 | with relatively high volume")
        .data(Adverb, SOFTLY, "00283234 02 r 01 softly 0 001 ! 00282950 r 0101 | with low volume")
        .index(Adverb, "aloud r 1 0 1 0 00282950")
        .index(Adverb, "loudly r 1 1 ! 1 0 00282950")
        .index(Adverb, "softly r 1 1 ! 1 0 00283234")
}

/// Write the fixture into a fresh temp dir.
pub fn fixture_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    fixture().write_to(dir.path()).expect("write fixture");
    dir
}

/// Fixture dir plus a facade over it with its own registry, so read counts
/// are per test.
pub fn open_fixture() -> (TempDir, WordNet, Arc<FileHandleRegistry>) {
    let dir = fixture_dir();
    let registry = Arc::new(FileHandleRegistry::new());
    let wordnet = WordNet::builder(dir.path())
        .registry(Arc::clone(&registry))
        .build()
        .expect("open fixture");
    (dir, wordnet, registry)
}

/// Head words of a slice of senses, for compact assertions.
pub fn heads(senses: &[wnlookup::Sense<'_>]) -> Vec<String> {
    senses.iter().map(|s| s.head_word.clone()).collect()
}
