//! Structured error types for the pagegrid layout engine.
//!
//! Content problems (bad percentages, zero-size boxes) never become errors;
//! they are recovered in place and reported as [`LayoutWarning`]s. The
//! variants here cover the cases that are genuinely the caller's fault.
//!
//! [`LayoutWarning`]: crate::layout::LayoutWarning

use std::path::PathBuf;

use thiserror::Error;

/// The unified error type returned by all public pagegrid API functions.
#[derive(Debug, Error)]
pub enum PageGridError {
    /// JSON input failed to parse as a valid document.
    #[error("Failed to parse document: {source}{}", hint_suffix(.hint))]
    ParseError {
        #[source]
        source: serde_json::Error,
        hint: String,
    },
    /// The caller asked for something that cannot exist, such as an
    /// unknown breakpoint key or a non-positive reference width.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// A file could not be read or written.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn hint_suffix(hint: &str) -> String {
    if hint.is_empty() {
        String::new()
    } else {
        format!("\n  Hint: {}", hint)
    }
}

impl From<serde_json::Error> for PageGridError {
    fn from(e: serde_json::Error) -> Self {
        let hint = match e.classify() {
            serde_json::error::Category::Syntax => {
                "Check for trailing commas, missing quotes, or unescaped characters.".to_string()
            }
            serde_json::error::Category::Data => {
                "The JSON is valid but doesn't match the page document schema. \
                 Check field names and element types."
                    .to_string()
            }
            serde_json::error::Category::Eof => {
                "Unexpected end of input. Is the JSON truncated?".to_string()
            }
            serde_json::error::Category::Io => String::new(),
        };
        PageGridError::ParseError { source: e, hint }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_carries_hint() {
        let err: PageGridError = serde_json::from_str::<serde_json::Value>("{\"a\": 1,}")
            .unwrap_err()
            .into();
        let msg = err.to_string();
        assert!(msg.starts_with("Failed to parse document"));
        assert!(msg.contains("trailing commas"));
    }

    #[test]
    fn test_invalid_argument_message() {
        let err = PageGridError::InvalidArgument("unknown breakpoint 'watch'".into());
        assert_eq!(err.to_string(), "Invalid argument: unknown breakpoint 'watch'");
    }
}
