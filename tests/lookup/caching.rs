//! Lazy loading, per-owner memoization and the shared handle registry.

use std::sync::Arc;
use std::thread;

use super::common::{fixture_dir, heads, open_fixture};
use wnlookup::{FileHandleRegistry, Relation, WordNet};

#[test]
fn test_senses_are_loaded_once() {
    let (_dir, wn, registry) = open_fixture();
    let import = wn.find_verb("import").unwrap().unwrap();

    let first = import.senses().unwrap();
    let reads = registry.read_count();
    let second = import.senses().unwrap();

    assert_eq!(registry.read_count(), reads);
    assert!(std::ptr::eq(first.as_ptr(), second.as_ptr()));
}

#[test]
fn test_relations_are_resolved_once() {
    let (_dir, wn, registry) = open_fixture();
    let fool = wn.find_verb("fool").unwrap().unwrap();

    let first = heads(fool.hypernyms().unwrap());
    let reads = registry.read_count();
    let second = heads(fool.hypernyms().unwrap());

    assert_eq!(first, second);
    assert_eq!(registry.read_count(), reads);
    assert_eq!(fool.resolved_relations(), 1);

    let sense = &fool.senses().unwrap()[0];
    sense.hypernyms().unwrap();
    let reads = registry.read_count();
    sense.hypernyms().unwrap();
    assert_eq!(registry.read_count(), reads);
}

#[test]
fn test_nothing_is_read_before_it_is_asked_for() {
    let (_dir, wn, registry) = open_fixture();
    let import = wn.find_verb("import").unwrap().unwrap();
    let after_find = registry.read_count();
    assert_eq!(registry.open_count(), 1, "only index.verb is open");

    import.senses().unwrap();
    assert!(registry.read_count() > after_find);
    assert_eq!(registry.open_count(), 2);
}

#[test]
fn test_caches_are_not_shared_between_owners() {
    let (_dir, wn, registry) = open_fixture();
    let a = wn.find_verb("export").unwrap().unwrap();
    let b = wn.find_verb("export").unwrap().unwrap();

    a.hyponyms().unwrap();
    assert_eq!(a.resolved_relations(), 1);
    assert_eq!(b.resolved_relations(), 0);

    let reads = registry.read_count();
    assert_eq!(heads(b.hyponyms().unwrap()), heads(a.hyponyms().unwrap()));
    assert!(registry.read_count() > reads, "b resolved on its own");
}

#[test]
fn test_failed_resolution_is_not_cached() {
    let (_dir, wn, _) = open_fixture();
    let fool = wn.find_verb("fool").unwrap().unwrap();
    let sense = &fool.senses().unwrap()[0];

    assert!(sense.relation(Relation::DerivationallyRelatedForm).is_err());
    assert!(sense.relation(Relation::DerivationallyRelatedForm).is_err());
    assert_eq!(sense.resolved_relations(), 0);
}

#[test]
fn test_registry_shared_between_facades() {
    let dir = fixture_dir();
    let registry = Arc::new(FileHandleRegistry::new());
    let one = WordNet::builder(dir.path())
        .registry(Arc::clone(&registry))
        .build()
        .unwrap();
    let two = WordNet::builder(dir.path())
        .registry(Arc::clone(&registry))
        .build()
        .unwrap();

    one.find_noun("note").unwrap().unwrap();
    two.find_noun("import").unwrap().unwrap();
    assert_eq!(registry.open_count(), 1);

    registry.clear();
    assert!(one.find_noun("note").unwrap().is_some());
    assert_eq!(registry.open_count(), 1);
}

#[test]
fn test_concurrent_lookups_share_one_facade() {
    let (_dir, wn, registry) = open_fixture();
    let words = ["import", "export", "fool", "excuse", "trade", "deceive"];

    thread::scope(|scope| {
        for word in words {
            let wn = &wn;
            scope.spawn(move || {
                for _ in 0..20 {
                    let entry = wn.find_verb(word).unwrap().unwrap();
                    assert_eq!(entry.senses().unwrap().len(), entry.synset_count);
                }
            });
        }
    });

    assert_eq!(registry.open_count(), 2);
}
