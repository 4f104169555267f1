//! Error adapter for converting ClassdraftError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use classdraft::ClassdraftError;

/// Adapter rendering a [`ClassdraftError`] as a miette diagnostic.
pub struct ErrorAdapter(pub ClassdraftError);

impl fmt::Debug for ErrorAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            ClassdraftError::Io(_) => "classdraft::io",
            ClassdraftError::Recognition(_) => "classdraft::recognition",
            ClassdraftError::Timeout(_) => "classdraft::timeout",
            ClassdraftError::Document(_) => "classdraft::document",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            ClassdraftError::Timeout(_) => {
                "raise `timeout_secs` in the [recognition] configuration section"
            }
            ClassdraftError::Document(err) if err.is_syntax() || err.is_eof() => {
                "the base document must be a JSON object with `entities` and `relations`"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_codes_follow_variants() {
        let adapter = ErrorAdapter(ClassdraftError::Timeout(Duration::from_secs(3)));
        assert_eq!(adapter.code().unwrap().to_string(), "classdraft::timeout");
        assert!(adapter.help().is_some());

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let adapter = ErrorAdapter(ClassdraftError::Io(io));
        assert_eq!(adapter.code().unwrap().to_string(), "classdraft::io");
        assert!(adapter.help().is_none());
    }

    #[test]
    fn test_document_syntax_errors_get_help() {
        let err = serde_json::from_str::<classdraft::document::Document>("{ entities: ").unwrap_err();
        let adapter = ErrorAdapter(ClassdraftError::Document(err));
        assert_eq!(adapter.code().unwrap().to_string(), "classdraft::document");
        assert!(adapter.help().is_some());
    }
}
