//! Classdraft Core Types and Definitions
//!
//! This crate provides the foundational types for Classdraft class-diagram
//! documents. It includes:
//!
//! - **Document model**: [`Document`], [`Entity`], [`Attribute`], [`Relation`],
//!   [`RelationKind`] and [`Cardinality`] ([`document`] module)
//! - **Merge**: Union-deduplicating merge of two documents ([`merge`] module)
//!
//! Every type serializes to the JSON shape shared with stored diagram
//! versions, so a document read back from storage can be merged with a
//! freshly extracted one.

pub mod document;
pub mod merge;

pub use document::{Attribute, Cardinality, Document, Entity, Relation, RelationKind};
pub use merge::merge;
