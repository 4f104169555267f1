//! # Classdraft Parser
//!
//! Extraction of class-diagram documents from the text a recognition engine
//! read off a diagram image.
//!
//! Recognized text is noisy: glyphs are substituted, boxes are flattened to
//! paragraphs, and stray characters appear anywhere. The pipeline is built
//! from tolerant heuristics that drop what they cannot make sense of rather
//! than fail. Every function here is total.
//!
//! ## Usage
//!
//! ```
//! use classdraft_parser::extract;
//!
//! let text = "Customer\nid: uuid {pk}\n\nOrder\nid: uuid\n\nCustomer -- Order";
//! let document = extract(text);
//!
//! assert_eq!(document.entities().len(), 2);
//! assert_eq!(document.relations().len(), 1);
//! ```

pub mod attribute;
pub mod cardinality;
pub mod entity;
mod normalize;
pub mod relation;
mod segment;

pub use attribute::parse_attribute_line;
pub use cardinality::normalize_cardinality;
pub use entity::{EntityParser, parse_block};
pub use normalize::normalize;
pub use relation::extract_relations;
pub use segment::segment;

use std::collections::HashSet;

use log::debug;

use classdraft_core::Document;

/// Extract a [`Document`] from raw recognized text.
///
/// The pipeline:
///
/// 1. **Normalize** - Canonicalize dashes, bullets, arrows and whitespace
/// 2. **Segment** - Split the text into candidate class blocks
/// 3. **Parse blocks** - Recognize entities and their attributes
/// 4. **Extract relations** - Match relation notations between known entities
///
/// The resulting document carries no constraints.
pub fn extract(text: &str) -> Document {
    // Step 1: Normalize
    let text = normalize(text);

    // Step 2: Segment
    let blocks = segment(&text);

    // Step 3: Parse blocks
    let mut parser = EntityParser::new();
    let rejected = blocks
        .iter()
        .filter(|block| !parser.push_block(block))
        .count();
    let entities = parser.finish();

    // Step 4: Extract relations
    let known_names: HashSet<&str> = entities.iter().map(|e| e.name()).collect();
    let relations = extract_relations(&text, &known_names);

    debug!(
        blocks = blocks.len(),
        rejected,
        entities = entities.len(),
        relations = relations.len();
        "Extracted document"
    );

    Document::new(entities, relations)
}
