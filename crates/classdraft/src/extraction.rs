//! Results of extracting a document from recognized text.

use serde::Serialize;

use classdraft_core::Document;

/// Counters describing one extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ExtractionStats {
    symbols: usize,
    lines: usize,
    entities: usize,
    relations: usize,
}

impl ExtractionStats {
    /// Computes the counters for `document` extracted from `text`.
    pub fn new(text: &str, document: &Document) -> Self {
        Self {
            symbols: text.chars().count(),
            lines: text.split('\n').count(),
            entities: document.entities().len(),
            relations: document.relations().len(),
        }
    }

    /// Number of characters in the recognized text.
    pub fn symbols(&self) -> usize {
        self.symbols
    }

    /// Number of lines in the recognized text. Empty text counts as one line.
    pub fn lines(&self) -> usize {
        self.lines
    }

    pub fn entities(&self) -> usize {
        self.entities
    }

    pub fn relations(&self) -> usize {
        self.relations
    }
}

/// A document extracted from recognized text, with the text it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    document: Document,
    text: String,
    stats: ExtractionStats,
}

impl Extraction {
    pub(crate) fn new(document: Document, text: String) -> Self {
        let stats = ExtractionStats::new(&text, &document);
        Self {
            document,
            text,
            stats,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The cleaned recognized text the document was extracted from.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn stats(&self) -> ExtractionStats {
        self.stats
    }

    pub fn into_document(self) -> Document {
        self.document
    }
}

#[cfg(test)]
mod tests {
    use classdraft_core::{Entity, Relation, RelationKind};

    use super::*;

    #[test]
    fn test_stats_count_characters_not_bytes() {
        let document = Document::new(
            vec![Entity::new("Año"), Entity::new("Mes")],
            vec![Relation::new("Año", "Mes", RelationKind::Composition)],
        );
        let stats = ExtractionStats::new("Año\n\nMes", &document);

        assert_eq!(stats.symbols(), 8);
        assert_eq!(stats.lines(), 3);
        assert_eq!(stats.entities(), 2);
        assert_eq!(stats.relations(), 1);
    }

    #[test]
    fn test_empty_text_is_one_line() {
        let stats = ExtractionStats::new("", &Document::default());
        assert_eq!(stats, ExtractionStats { lines: 1, ..Default::default() });
    }
}
