//! Class-diagram document model.
//!
//! This module contains the structured representation of a class diagram as
//! produced by extraction and consumed by the merger.
//!
//! # Pipeline Position
//!
//! ```text
//! Recognized Text
//!     ↓ normalize + segment
//! Blocks
//!     ↓ entity parser / relation extractor
//! Document (these types)
//!     ↓ merge (optional, against a stored Document)
//! Document
//! ```
//!
//! # Organization
//!
//! - [`attribute`] - [`Attribute`] of an entity
//! - [`entity`] - [`Entity`] (class, interface, abstract class)
//! - [`relation`] - [`Relation`], [`RelationKind`], [`Cardinality`]
//!
//! # JSON Shape
//!
//! Field names follow the stored document format (`isInterface`, `fromCard`,
//! ...). Optional fields are omitted when absent, and collections missing from
//! older stored documents deserialize as empty.

pub mod attribute;
pub mod entity;
pub mod relation;

pub use attribute::Attribute;
pub use entity::Entity;
pub use relation::{Cardinality, Relation, RelationKind};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A class-diagram document: entities, relations and opaque constraints.
///
/// Entities keep insertion order, which for an extracted document is the
/// order in which they were discovered in the recognized text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    entities: Vec<Entity>,

    #[serde(default)]
    relations: Vec<Relation>,

    /// Constraints authored elsewhere; never produced by extraction.
    #[serde(default)]
    constraints: Vec<Value>,
}

impl Document {
    /// Create a document from entities and relations, with no constraints.
    pub fn new(entities: Vec<Entity>, relations: Vec<Relation>) -> Self {
        Self {
            entities,
            relations,
            constraints: Vec::new(),
        }
    }

    /// Replace the constraints carried by this document.
    pub fn with_constraints(mut self, constraints: Vec<Value>) -> Self {
        self.constraints = constraints;
        self
    }

    /// Borrow the entities in insertion order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Borrow the relations in insertion order.
    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    /// Borrow the opaque constraints.
    pub fn constraints(&self) -> &[Value] {
        &self.constraints
    }

    /// Find an entity by name, ignoring ASCII case.
    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.has_name(name))
    }

    /// Names of all entities, in insertion order.
    pub fn entity_names(&self) -> impl Iterator<Item = &str> {
        self.entities.iter().map(Entity::name)
    }

    /// Returns `true` if every relation endpoint (and `via`) names an entity
    /// of this document.
    pub fn is_consistent(&self) -> bool {
        let known = |name: &str| self.entities.iter().any(|entity| entity.name() == name);
        self.relations.iter().all(|relation| {
            known(relation.from())
                && known(relation.to())
                && relation.via().is_none_or(known)
        })
    }

    /// Decompose into entities, relations and constraints.
    pub fn into_parts(self) -> (Vec<Entity>, Vec<Relation>, Vec<Value>) {
        (self.entities, self.relations, self.constraints)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sample() -> Document {
        let mut customer = Entity::new("Customer");
        customer.add_attr(Attribute::new("id", "uuid").with_pk(true));
        customer.add_attr(Attribute::new("name", "string"));
        let order = Entity::new("Order");

        Document::new(
            vec![customer, order],
            vec![
                Relation::new("Customer", "Order", RelationKind::Association)
                    .with_to_card(Cardinality::many()),
            ],
        )
    }

    #[test]
    fn test_entity_lookup_ignores_case() {
        let doc = sample();
        assert_eq!(doc.entity("customer").map(Entity::name), Some("Customer"));
        assert!(doc.entity("Invoice").is_none());
    }

    #[test]
    fn test_entity_names_keep_order() {
        let doc = sample();
        assert_eq!(doc.entity_names().collect::<Vec<_>>(), ["Customer", "Order"]);
    }

    #[test]
    fn test_consistency() {
        assert!(sample().is_consistent());

        let dangling = Document::new(
            vec![Entity::new("A")],
            vec![Relation::new("A", "B", RelationKind::Dependency)],
        );
        assert!(!dangling.is_consistent());
    }

    #[test]
    fn test_json_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "entities": [
                    {
                        "name": "Customer",
                        "isInterface": false,
                        "isAbstract": false,
                        "attrs": [
                            {"name": "id", "type": "uuid", "pk": true, "unique": false, "nullable": false},
                            {"name": "name", "type": "string", "pk": false, "unique": false, "nullable": false}
                        ]
                    },
                    {"name": "Order", "isInterface": false, "isAbstract": false, "attrs": []}
                ],
                "relations": [
                    {"from": "Customer", "to": "Order", "kind": "association", "toCard": "N"}
                ],
                "constraints": []
            })
        );
    }

    #[test]
    fn test_deserialize_sparse_stored_document() {
        let doc: Document = serde_json::from_value(json!({
            "entities": [
                {"name": "User", "stereotype": "entity", "attrs": [{"name": "id", "type": "int"}]},
                {"name": "Role"}
            ],
            "constraints": [{"kind": "unique", "on": ["User.id"]}]
        }))
        .unwrap();

        assert_eq!(doc.entities().len(), 2);
        assert!(doc.relations().is_empty());
        assert_eq!(doc.constraints().len(), 1);

        let user = doc.entity("user").unwrap();
        assert_eq!(user.stereotype(), Some("entity"));
        assert!(!user.is_interface());
        assert!(!user.attrs()[0].is_pk());
        assert!(doc.entity("Role").unwrap().attrs().is_empty());
    }
}
