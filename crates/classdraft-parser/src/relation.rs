//! Relation extraction over the full recognized text.
//!
//! Relation notations frequently straddle the blank lines that separate class
//! boxes, so relations are searched for in the whole normalized text rather
//! than block by block.
//!
//! # Notations
//!
//! | notation | kind |
//! |----------|------|
//! | `A --\|> B` | generalization |
//! | `A ..\|> B` | realization |
//! | `A o-- B` | aggregation |
//! | `A *-- B` | composition |
//! | `A ..> B` | dependency |
//! | `A -- B` | association |
//! | `A -- X -- B` | association from `A` to `B` via `X` |
//!
//! Either name of a binary notation may be followed by a cardinality,
//! bracketed (`A [1] -- B [0..*]`) or loose (`A 1 -- B *`).
//!
//! Each notation is searched for independently and every match is kept: a
//! stretch of text that fits two notations yields two relations. A match only
//! counts when every name it captures is a known entity name, which is what
//! keeps recognition noise out of the result.

use std::{collections::HashSet, sync::LazyLock};

use log::trace;
use regex::{Captures, Regex};

use classdraft_core::{Relation, RelationKind};

use crate::cardinality::normalize_cardinality;

/// An entity name inside a relation notation.
const NAME: &str = r"([A-Za-z_][A-Za-z0-9_]*)";

/// Optional cardinality after a name: `[...]` or up to six loose characters.
const CARD: &str = r"(?:\s*(?:\[\s*([0-9*nN.\s]+)\s*\]|([0-9*nN.\s]{1,6})))?";

/// A binary relation notation and the kind of relation it denotes.
struct Notation {
    kind: RelationKind,
    pattern: Regex,
}

impl Notation {
    fn new(kind: RelationKind, connector: &str) -> Self {
        let pattern = Regex::new(&format!(r"{NAME}{CARD}\s*{connector}\s*{NAME}{CARD}"))
            .expect("relation notation pattern is valid");
        Self { kind, pattern }
    }
}

/// Binary notations, in evaluation order.
static NOTATIONS: LazyLock<Vec<Notation>> = LazyLock::new(|| {
    vec![
        Notation::new(RelationKind::Generalization, r"(?:\.{2}|-){2}\|>"),
        Notation::new(RelationKind::Realization, r"\.{2}\|>"),
        Notation::new(RelationKind::Aggregation, r"o--"),
        Notation::new(RelationKind::Composition, r"\*--"),
        Notation::new(RelationKind::Dependency, r"\.{2}>"),
        Notation::new(RelationKind::Association, r"--"),
    ]
});

/// `A -- X -- B`: an association between `A` and `B` through class `X`.
static ASSOCIATION_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"{NAME}\s*--\s*{NAME}\s*--\s*{NAME}"))
        .expect("association class pattern is valid")
});

/// Extract relations from `text` between entities named in `known_names`.
///
/// `text` should already be normalized (see [`normalize`](crate::normalize)).
/// Name matching is exact. Relations are deduplicated on all of their fields,
/// so two matches differing only in cardinality are both kept.
pub fn extract_relations(text: &str, known_names: &HashSet<&str>) -> Vec<Relation> {
    let mut relations = Vec::new();

    for notation in NOTATIONS.iter() {
        for caps in notation.pattern.captures_iter(text) {
            let (from, to) = (&caps[1], &caps[4]);
            if !known_names.contains(from) || !known_names.contains(to) {
                trace!(from, to, kind = notation.kind.as_str(); "Skipping relation with unknown endpoint");
                continue;
            }

            let relation = Relation::new(from, to, notation.kind)
                .with_from_card(normalize_cardinality(card_token(&caps, 2, 3)))
                .with_to_card(normalize_cardinality(card_token(&caps, 5, 6)));
            push_unique(&mut relations, relation);
        }
    }

    for caps in ASSOCIATION_CLASS.captures_iter(text) {
        let (from, via, to) = (&caps[1], &caps[2], &caps[3]);
        if [from, via, to].iter().all(|name| known_names.contains(name)) {
            push_unique(
                &mut relations,
                Relation::new(from, to, RelationKind::Association).with_via(via),
            );
        }
    }

    relations
}

/// The cardinality text captured in either the bracketed or the loose group.
fn card_token<'t>(caps: &Captures<'t>, bracketed: usize, loose: usize) -> Option<&'t str> {
    caps.get(bracketed)
        .or_else(|| caps.get(loose))
        .map(|m| m.as_str())
}

fn push_unique(relations: &mut Vec<Relation>, relation: Relation) {
    if !relations.contains(&relation) {
        relations.push(relation);
    }
}
