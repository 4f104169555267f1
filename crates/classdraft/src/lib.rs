//! Classdraft - Import class diagrams from scanned images.
//!
//! Recognized text from a diagram image is turned into a structured class
//! diagram [`Document`](document::Document) and combined with an existing
//! diagram version without duplicating entities, attributes or relations.

pub mod config;
pub mod recognize;

mod error;
mod extraction;

pub use classdraft_core::{document, merge};

pub use error::ClassdraftError;
pub use extraction::{Extraction, ExtractionStats};

use std::{fmt, str::FromStr};

use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use classdraft_core::Document;

use config::AppConfig;
use recognize::{Progress, Recognizer};

/// How an extracted document is combined with an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportMode {
    /// Discard the existing document and keep the extracted one.
    Replace,
    /// Fold the extracted document into the existing one.
    #[default]
    Merge,
}

impl ImportMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Replace => "replace",
            Self::Merge => "merge",
        }
    }
}

impl fmt::Display for ImportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImportMode {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "replace" => Ok(Self::Replace),
            "merge" => Ok(Self::Merge),
            _ => Err("Unsupported import mode"),
        }
    }
}

/// Importer for extracting class diagrams and combining them with existing
/// diagram versions.
///
/// # Examples
///
/// ```rust
/// use classdraft::{ImportMode, Importer, config::AppConfig};
///
/// let importer = Importer::new(AppConfig::default());
///
/// // Extract a document from recognized text
/// let extraction = importer.extract("Customer\nid: uuid {pk}\n\nOrder\n\nCustomer -- Order");
/// assert_eq!(extraction.stats().entities(), 2);
///
/// // Combine it with the current diagram version, if there is one
/// let document = importer.import(extraction.into_document(), None, ImportMode::Merge);
/// assert_eq!(document.relations().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Importer {
    config: AppConfig,
}

impl Importer {
    /// Create a new importer with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Extract a document from recognized text.
    ///
    /// Carriage returns are removed and the text is trimmed before
    /// extraction; the cleaned text is kept on the returned [`Extraction`].
    pub fn extract(&self, text: &str) -> Extraction {
        let text = clean_text(text);
        let document = classdraft_parser::extract(&text);
        let extraction = Extraction::new(document, text);

        let stats = extraction.stats();
        info!(
            symbols = stats.symbols(),
            lines = stats.lines(),
            entities = stats.entities(),
            relations = stats.relations();
            "Extracted document"
        );
        trace!(document:? = extraction.document(); "Extracted document");

        extraction
    }

    /// Combine an extracted document with the current one.
    ///
    /// With [`ImportMode::Replace`], or when there is no current document,
    /// the extracted document is returned unchanged. With
    /// [`ImportMode::Merge`] it is merged into a copy of `base`.
    pub fn import(&self, extracted: Document, base: Option<&Document>, mode: ImportMode) -> Document {
        match (mode, base) {
            (ImportMode::Merge, Some(base)) => {
                info!(mode = mode.as_str(); "Merging into existing document");
                merge::merge(base.clone(), extracted)
            }
            (_, base) => {
                info!(mode = mode.as_str(), has_base = base.is_some(); "Using extracted document as is");
                extracted
            }
        }
    }

    /// Recognize the text in `image` and extract a document from it.
    ///
    /// Engine progress events are logged. When the configuration sets a
    /// recognition timeout, a call that exceeds it is abandoned.
    ///
    /// # Errors
    ///
    /// Returns [`ClassdraftError::Recognition`] when the engine fails and
    /// [`ClassdraftError::Timeout`] when it runs out of time. Failures are
    /// not retried.
    pub async fn scan<R: Recognizer>(&self, image: &[u8], recognizer: &R) -> Result<Extraction, ClassdraftError> {
        let recognition = self.config.recognition();
        info!(bytes = image.len(), languages = recognition.languages(); "Recognizing image");

        let report = |event: Progress| {
            debug!(status = event.status(), percent = event.percent(); "Recognition progress");
        };
        let recognized = recognizer.recognize(image, recognition.languages(), &report);

        let text = match recognition.timeout() {
            Some(limit) => tokio::time::timeout(limit, recognized)
                .await
                .map_err(|_| ClassdraftError::Timeout(limit))??,
            None => recognized.await?,
        };

        Ok(self.extract(&text))
    }
}

/// Drop carriage returns and surrounding whitespace.
fn clean_text(text: &str) -> String {
    text.replace('\r', "").trim().to_string()
}
