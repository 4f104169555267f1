//! Error types for Classdraft operations.
//!
//! Extraction and merging never fail; this module's [`ClassdraftError`]
//! covers what happens around them: reading inputs, the external
//! recognition engine, and document (de)serialization.

use std::{io, time::Duration};

use thiserror::Error;

use crate::recognize::RecognitionError;

/// The main error type for Classdraft operations.
#[derive(Debug, Error)]
pub enum ClassdraftError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The recognition engine failed. Passed through unchanged.
    #[error("Recognition failed: {0}")]
    Recognition(#[from] RecognitionError),

    #[error("Recognition timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),

    #[error("Invalid document: {0}")]
    Document(#[from] serde_json::Error),
}
