// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Relation names and the per-part-of-speech pointer symbol table.
//!
//! Each part of speech has its own relation vocabulary, and the same symbol
//! can mean different things in different files (`\` is "pertainym" for
//! adjectives but "derived from adjective" for adverbs). The table below is
//! the single place that knows which `(pos, relation)` pairs exist and what
//! symbol each one is written as.
//!
//! | Relation                     | n    | v   | a   | r   |
//! |------------------------------|------|-----|-----|-----|
//! | antonym                      | `!`  | `!` | `!` | `!` |
//! | hypernym / hyponym           | `@ ~`| `@ ~` |   |     |
//! | instance hypernym / hyponym  | `@i ~i` |  |     |     |
//! | holonyms / meronyms          | `#x %x` | |     |     |
//! | attribute                    | `=`  |     | `=` |     |
//! | derivationally related form  | `+`  | `+` |     |     |
//! | entailment / cause           |      | `* >` |   |     |
//! | also see                     |      | `^` | `^` |     |
//! | verb group                   |      | `$` |     |     |
//! | similar to                   |      |     | `&` |     |
//! | participle of verb           |      |     | `<` |     |
//! | pertainym                    |      |     | `\` |     |
//! | derived from adjective       |      |     |     | `\` |
//! | domain of synset             | `;c ;r ;u` | all | all | all |
//! | member of domain             | `-c -r -u` |  |   |     |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::PartOfSpeech;

/// Every relation name across all parts of speech.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    Antonym,
    Hypernym,
    InstanceHypernym,
    Hyponym,
    InstanceHyponym,
    MemberHolonym,
    SubstanceHolonym,
    PartHolonym,
    MemberMeronym,
    SubstanceMeronym,
    PartMeronym,
    Attribute,
    DerivationallyRelatedForm,
    Entailment,
    Cause,
    AlsoSee,
    VerbGroup,
    SimilarTo,
    ParticipleOfVerb,
    Pertainym,
    DerivedFromAdjective,
    DomainTopic,
    DomainRegion,
    DomainUsage,
    MemberOfDomainTopic,
    MemberOfDomainRegion,
    MemberOfDomainUsage,
}

impl Relation {
    /// Number of variants; sizes per-owner resolution caches.
    pub const COUNT: usize = 27;

    pub const ALL: [Relation; Relation::COUNT] = [
        Relation::Antonym,
        Relation::Hypernym,
        Relation::InstanceHypernym,
        Relation::Hyponym,
        Relation::InstanceHyponym,
        Relation::MemberHolonym,
        Relation::SubstanceHolonym,
        Relation::PartHolonym,
        Relation::MemberMeronym,
        Relation::SubstanceMeronym,
        Relation::PartMeronym,
        Relation::Attribute,
        Relation::DerivationallyRelatedForm,
        Relation::Entailment,
        Relation::Cause,
        Relation::AlsoSee,
        Relation::VerbGroup,
        Relation::SimilarTo,
        Relation::ParticipleOfVerb,
        Relation::Pertainym,
        Relation::DerivedFromAdjective,
        Relation::DomainTopic,
        Relation::DomainRegion,
        Relation::DomainUsage,
        Relation::MemberOfDomainTopic,
        Relation::MemberOfDomainRegion,
        Relation::MemberOfDomainUsage,
    ];

    /// Lowercase, space-separated name ("instance hypernym").
    pub fn name(self) -> &'static str {
        match self {
            Relation::Antonym => "antonym",
            Relation::Hypernym => "hypernym",
            Relation::InstanceHypernym => "instance hypernym",
            Relation::Hyponym => "hyponym",
            Relation::InstanceHyponym => "instance hyponym",
            Relation::MemberHolonym => "member holonym",
            Relation::SubstanceHolonym => "substance holonym",
            Relation::PartHolonym => "part holonym",
            Relation::MemberMeronym => "member meronym",
            Relation::SubstanceMeronym => "substance meronym",
            Relation::PartMeronym => "part meronym",
            Relation::Attribute => "attribute",
            Relation::DerivationallyRelatedForm => "derivationally related form",
            Relation::Entailment => "entailment",
            Relation::Cause => "cause",
            Relation::AlsoSee => "also see",
            Relation::VerbGroup => "verb group",
            Relation::SimilarTo => "similar to",
            Relation::ParticipleOfVerb => "participle of verb",
            Relation::Pertainym => "pertainym",
            Relation::DerivedFromAdjective => "derived from adjective",
            Relation::DomainTopic => "domain of synset topic",
            Relation::DomainRegion => "domain of synset region",
            Relation::DomainUsage => "domain of synset usage",
            Relation::MemberOfDomainTopic => "member of domain topic",
            Relation::MemberOfDomainRegion => "member of domain region",
            Relation::MemberOfDomainUsage => "member of domain usage",
        }
    }

    /// Pointer symbol for this relation in `pos` files, if the pair exists.
    pub fn symbol(self, pos: PartOfSpeech) -> Option<&'static str> {
        RELATION_TABLE[pos.ordinal()]
            .iter()
            .find(|(relation, _)| *relation == self)
            .map(|(_, symbol)| *symbol)
    }

    /// Relations valid for `pos`, in table order.
    pub fn for_pos(pos: PartOfSpeech) -> impl Iterator<Item = Relation> {
        RELATION_TABLE[pos.ordinal()].iter().map(|(relation, _)| *relation)
    }

    /// Reverse lookup: which relation does `symbol` denote in `pos` files?
    pub fn from_symbol(pos: PartOfSpeech, symbol: &str) -> Option<Relation> {
        RELATION_TABLE[pos.ordinal()]
            .iter()
            .find(|(_, s)| *s == symbol)
            .map(|(relation, _)| *relation)
    }

    pub(crate) fn ordinal(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Relation {
    type Err = String;

    /// Case-insensitive; spaces, underscores, hyphens and camelCase all work
    /// ("also see", "also_see", "alsoSee").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = squash(s);
        Relation::ALL
            .iter()
            .copied()
            .find(|relation| squash(relation.name()) == wanted)
            .or_else(|| match wanted.as_str() {
                "hypnym" => Some(Relation::Hyponym),
                "domaintopic" => Some(Relation::DomainTopic),
                "domainregion" => Some(Relation::DomainRegion),
                "domainusage" => Some(Relation::DomainUsage),
                _ => None,
            })
            .ok_or_else(|| format!("unknown relation: {}", s))
    }
}

fn squash(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

// ============================================================================
// SYMBOL TABLE (wninput(5WN), "Pointers")
// ============================================================================

const NOUN_RELATIONS: &[(Relation, &str)] = &[
    (Relation::Antonym, "!"),
    (Relation::Hypernym, "@"),
    (Relation::InstanceHypernym, "@i"),
    (Relation::Hyponym, "~"),
    (Relation::InstanceHyponym, "~i"),
    (Relation::MemberHolonym, "#m"),
    (Relation::SubstanceHolonym, "#s"),
    (Relation::PartHolonym, "#p"),
    (Relation::MemberMeronym, "%m"),
    (Relation::SubstanceMeronym, "%s"),
    (Relation::PartMeronym, "%p"),
    (Relation::Attribute, "="),
    (Relation::DerivationallyRelatedForm, "+"),
    (Relation::DomainTopic, ";c"),
    (Relation::MemberOfDomainTopic, "-c"),
    (Relation::DomainRegion, ";r"),
    (Relation::MemberOfDomainRegion, "-r"),
    (Relation::DomainUsage, ";u"),
    (Relation::MemberOfDomainUsage, "-u"),
];

const VERB_RELATIONS: &[(Relation, &str)] = &[
    (Relation::Antonym, "!"),
    (Relation::Hypernym, "@"),
    (Relation::Hyponym, "~"),
    (Relation::Entailment, "*"),
    (Relation::Cause, ">"),
    (Relation::AlsoSee, "^"),
    (Relation::VerbGroup, "$"),
    (Relation::DerivationallyRelatedForm, "+"),
    (Relation::DomainTopic, ";c"),
    (Relation::DomainRegion, ";r"),
    (Relation::DomainUsage, ";u"),
];

const ADJECTIVE_RELATIONS: &[(Relation, &str)] = &[
    (Relation::Antonym, "!"),
    (Relation::SimilarTo, "&"),
    (Relation::ParticipleOfVerb, "<"),
    (Relation::Pertainym, "\\"),
    (Relation::Attribute, "="),
    (Relation::AlsoSee, "^"),
    (Relation::DomainTopic, ";c"),
    (Relation::DomainRegion, ";r"),
    (Relation::DomainUsage, ";u"),
];

const ADVERB_RELATIONS: &[(Relation, &str)] = &[
    (Relation::Antonym, "!"),
    (Relation::DerivedFromAdjective, "\\"),
    (Relation::DomainTopic, ";c"),
    (Relation::DomainRegion, ";r"),
    (Relation::DomainUsage, ";u"),
];

/// Indexed by `PartOfSpeech::ordinal()`.
const RELATION_TABLE: [&[(Relation, &str)]; 4] = [
    NOUN_RELATIONS,
    VERB_RELATIONS,
    ADJECTIVE_RELATIONS,
    ADVERB_RELATIONS,
];
