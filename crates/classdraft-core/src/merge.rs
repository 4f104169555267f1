//! Union-deduplicating merge of two documents.
//!
//! [`merge`] folds a freshly extracted document into a previously stored one
//! without duplicating entities, attributes or relations. It is a total
//! function: every pair of documents merges.
//!
//! # Identity
//!
//! - Entities match by name, ignoring ASCII case.
//! - Attributes match by name within their entity, ignoring ASCII case.
//! - Relations match on `(from, to, kind)` only. Cardinalities and the
//!   association class are not part of the identity here, unlike the
//!   extractor's deduplication, so a re-imported edge whose multiplicity was
//!   recognized differently does not produce a second relation.
//!
//! Relation endpoints are copied verbatim and not re-validated. The result is
//! consistent only if both inputs are and every incoming endpoint is spelled
//! the way the matching entity is named; an incoming `customer` relation
//! against a base `Customer` entity leaves a dangling endpoint.

use log::debug;

use crate::document::{Document, Relation};

/// Merge `incoming` into `base`.
///
/// - Entities of `incoming` whose name matches a `base` entity are folded into
///   it in place (see [`Entity::absorb`](crate::Entity::absorb)); `base`
///   values are never overwritten.
/// - Unmatched entities are appended after all `base` entities, in `incoming`
///   order.
/// - Relations of `incoming` are appended unless an accumulated relation
///   already has the same `(from, to, kind)`.
/// - Constraints are carried over from `base` unchanged.
pub fn merge(base: Document, incoming: Document) -> Document {
    let (mut entities, mut relations, constraints) = base.into_parts();
    let (incoming_entities, incoming_relations, _) = incoming.into_parts();

    let mut appended_entities = 0;
    let mut absorbed_attrs = 0;
    for entity in incoming_entities {
        match entities
            .iter_mut()
            .find(|existing| existing.has_name(entity.name()))
        {
            Some(existing) => absorbed_attrs += existing.absorb(entity),
            None => {
                entities.push(entity);
                appended_entities += 1;
            }
        }
    }

    let mut appended_relations = 0;
    for relation in incoming_relations {
        if !contains_edge(&relations, &relation) {
            relations.push(relation);
            appended_relations += 1;
        }
    }

    debug!(
        appended_entities,
        absorbed_attrs,
        appended_relations;
        "Merged documents"
    );

    Document::new(entities, relations).with_constraints(constraints)
}

fn contains_edge(relations: &[Relation], relation: &Relation) -> bool {
    relations.iter().any(|existing| existing.same_edge(relation))
}
