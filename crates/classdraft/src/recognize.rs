//! The seam to an external text-recognition engine.
//!
//! Image decoding, preprocessing and recognition happen outside this crate.
//! An engine is plugged in by implementing [`Recognizer`]; the importer only
//! hands it image bytes and a language hint, and reads back plain text.

use std::{error::Error, future::Future};

use thiserror::Error;

/// A progress event reported by a recognition engine.
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    status: String,
    progress: f32,
}

impl Progress {
    /// Creates a progress event. `progress` is a fraction in `0.0..=1.0`.
    pub fn new(status: impl Into<String>, progress: f32) -> Self {
        Self {
            status: status.into(),
            progress,
        }
    }

    /// The engine's description of its current stage.
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Progress as a whole percentage, clamped to `0..=100`.
    pub fn percent(&self) -> u8 {
        (self.progress.clamp(0.0, 1.0) * 100.0).round() as u8
    }
}

/// Failure reported by a recognition engine.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct RecognitionError {
    message: String,
    #[source]
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl RecognitionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Wraps an engine-specific error as the cause.
    pub fn with_source(mut self, source: impl Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A text-recognition engine.
///
/// # Examples
///
/// ```
/// use classdraft::recognize::{Progress, RecognitionError, Recognizer};
///
/// /// Treats the image bytes as UTF-8 text.
/// struct Passthrough;
///
/// impl Recognizer for Passthrough {
///     async fn recognize(
///         &self,
///         image: &[u8],
///         _languages: &str,
///         progress: &(dyn Fn(Progress) + Send + Sync),
///     ) -> Result<String, RecognitionError> {
///         progress(Progress::new("recognizing text", 1.0));
///         String::from_utf8(image.to_vec())
///             .map_err(|err| RecognitionError::new("image is not text").with_source(err))
///     }
/// }
/// ```
pub trait Recognizer {
    /// Recognize the text in `image`.
    ///
    /// `languages` is an engine language hint such as `eng+spa`. Engines may
    /// call `progress` any number of times while working.
    fn recognize(
        &self,
        image: &[u8],
        languages: &str,
        progress: &(dyn Fn(Progress) + Send + Sync),
    ) -> impl Future<Output = Result<String, RecognitionError>> + Send;
}
