//! Index lookups: `find`, `find_all` and the per-pos helpers.

use super::common::{open_fixture, fixture_dir, IMPORT_BRING_IN, IMPORT_DATA, IMPORT_SPELL};
use wnlookup::{normalize_lemma, PartOfSpeech, WordNet, WordNetError, SEARCH_DIR_ENV};

#[test]
fn test_finds_verb_import() {
    let (_dir, wn, _) = open_fixture();
    let entry = wn.find_verb("import").unwrap().expect("import is a verb");

    assert_eq!(entry.word, "import");
    assert_eq!(entry.pos, PartOfSpeech::Verb);
    assert_eq!(entry.synset_count, 3);
    assert_eq!(entry.synset_offsets, vec![IMPORT_BRING_IN, IMPORT_DATA, IMPORT_SPELL]);
    assert_eq!(entry.pointer_symbols, vec!["!", "@", "~", "+", ";"]);
    assert_eq!(entry.tag_sense_count, 1);
}

#[test]
fn test_every_fixture_word_is_found() {
    let (_dir, wn, _) = open_fixture();
    let words: &[(PartOfSpeech, &[&str])] = &[
        (
            PartOfSpeech::Verb,
            &[
                "deceive", "excuse", "export", "fool", "fritter", "import", "lead_on", "re-export",
                "spell", "trade", "transfer",
            ],
        ),
        (PartOfSpeech::Noun, &["excuse", "export", "fool", "import", "note"]),
        (PartOfSpeech::Adjective, &["bad", "bang-up", "good", "smashing"]),
        (PartOfSpeech::Adverb, &["aloud", "loudly", "softly"]),
    ];

    for (pos, words) in words {
        for word in *words {
            let entry = wn
                .find(word, *pos)
                .unwrap()
                .unwrap_or_else(|| panic!("{} not found as {}", word, pos));
            assert_eq!(entry.word, normalize_lemma(word));
            assert_eq!(entry.pos, *pos);
        }
    }
}

#[test]
fn test_absent_words() {
    let (_dir, wn, _) = open_fixture();
    for word in ["aardvark", "impor", "imports", "lead", "zzz", "0"] {
        assert!(wn.find_verb(word).unwrap().is_none(), "{}", word);
    }
    // present, but not under this part of speech
    assert!(wn.find_noun("deceive").unwrap().is_none());
    assert!(wn.find_adverb("good").unwrap().is_none());
}

#[test]
fn test_find_all_in_pos_order() {
    let (_dir, wn, _) = open_fixture();

    let excuse = wn.find_all("excuse").unwrap();
    assert_eq!(excuse.len(), 2);
    assert_eq!(excuse[0].pos, PartOfSpeech::Noun);
    assert_eq!(excuse[1].pos, PartOfSpeech::Verb);
    assert!(excuse.iter().all(|e| e.word == "excuse"));

    let good = wn.find_all("good").unwrap();
    assert_eq!(good.len(), 1);
    assert_eq!(good[0].pos, PartOfSpeech::Adjective);

    assert!(wn.find_all("nothing-like-this").unwrap().is_empty());
}

#[test]
fn test_query_is_normalized() {
    let (_dir, wn, _) = open_fixture();
    let entry = wn.find_verb("  Lead   ON ").unwrap().expect("lead_on");
    assert_eq!(entry.word, "lead_on");
    assert_eq!(entry.to_string(), "lead on");

    assert!(wn.find_verb("IMPORT").unwrap().is_some());
    assert!(wn.find_verb("").unwrap().is_none());
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn test_diacritics_are_folded() {
    let (_dir, wn, _) = open_fixture();
    assert!(wn.find_verb("impört").unwrap().is_some());
}

#[test]
fn test_per_pos_helpers_agree_with_find() {
    let (_dir, wn, _) = open_fixture();
    assert_eq!(
        wn.find_adjective("bad").unwrap().map(|e| e.into_record()),
        wn.find("bad", PartOfSpeech::Adjective).unwrap().map(|e| e.into_record()),
    );
    assert_eq!(wn.find_adverb("softly").unwrap().unwrap().synset_offsets.len(), 1);
}

#[test]
fn test_open_errors() {
    assert!(matches!(
        WordNet::open("/no/such/dict"),
        Err(WordNetError::Config { .. })
    ));

    let dir = fixture_dir();
    assert!(matches!(
        WordNet::open(dir.path().join("index.noun")),
        Err(WordNetError::Config { .. })
    ));
}

#[test]
fn test_missing_index_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let wn = WordNet::open(dir.path()).unwrap();
    assert!(matches!(wn.find_noun("anything"), Err(WordNetError::Io { .. })));
}

#[test]
fn test_from_env() {
    let dir = fixture_dir();
    std::env::set_var(SEARCH_DIR_ENV, dir.path());
    let wn = WordNet::from_env().unwrap();
    assert_eq!(wn.data_dir(), dir.path());
    assert!(wn.find_noun("note").unwrap().is_some());
}
