//! Unified, `miette`-based diagnostics for dotarr.
//!
//! Every failure the library or the CLI can produce is a [`DotError`].
//! Reads through the accessor never fail; errors come from strict reshaping,
//! entity hydration and document I/O.

use std::path::PathBuf;
use std::sync::Arc;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceCode};
use thiserror::Error;

use crate::value::Key;

pub type SourceArc = Arc<NamedSource<String>>;

pub type Result<T> = std::result::Result<T, DotError>;

/// Type-safe error classification, mirroring the `DotError` variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    /// A template or key did not match the document's shape
    Shape,
    /// Entity attribute lookup or conversion failed
    Entity,
    /// Reading or decoding a document failed
    Input,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::Shape => "Shape",
            ErrorType::Entity => "Entity",
            ErrorType::Input => "Input",
        }
    }
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Byte range inside a parsed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Error)]
pub enum DotError {
    #[error("Key '{key}' was not found in the main array")]
    MissingKey { key: Key },

    #[error("Key '{key}' must hold an array in the main array, found {found}")]
    ShapeMismatch { key: Key, found: &'static str },

    #[error("{type_name} cannot be used as an array key")]
    InvalidKey { type_name: &'static str },

    #[error("Attribute '{attribute}' does not exist in the '{entity}' model")]
    UnknownAttribute { attribute: String, entity: &'static str },

    #[error("Setter '{setter}' does not exist in the '{entity}' model")]
    MissingSetter { setter: String, entity: &'static str },

    #[error("Getter '{getter}' does not exist in the '{entity}' model")]
    MissingGetter { getter: String, entity: &'static str },

    #[error("Attribute '{attribute}' expects {expected}, got {actual}")]
    TypeMismatch {
        attribute: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Failed to read '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid {format} document: {message}")]
    Parse {
        format: &'static str,
        message: String,
        src: Option<SourceArc>,
        span: Option<Span>,
    },

    #[error("Failed to encode output")]
    Encode {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl DotError {
    /// Returns the type-safe error classification for this error.
    pub fn error_type(&self) -> ErrorType {
        match self {
            DotError::MissingKey { .. }
            | DotError::ShapeMismatch { .. }
            | DotError::InvalidKey { .. } => ErrorType::Shape,
            DotError::UnknownAttribute { .. }
            | DotError::MissingSetter { .. }
            | DotError::MissingGetter { .. }
            | DotError::TypeMismatch { .. } => ErrorType::Entity,
            DotError::Io { .. } | DotError::Parse { .. } | DotError::Encode { .. } => {
                ErrorType::Input
            }
        }
    }

    /// Builds a parse error pointing at a 1-based line/column of `text`.
    pub fn parse_at(
        format: &'static str,
        message: impl Into<String>,
        name: &str,
        text: &str,
        line: usize,
        column: usize,
    ) -> Self {
        let span = offset_of(text, line, column).map(|start| Span {
            start,
            end: start + 1,
        });
        DotError::Parse {
            format,
            message: message.into(),
            src: Some(to_error_source(name, text)),
            span,
        }
    }
}

impl Diagnostic for DotError {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        let code = match self {
            DotError::MissingKey { .. } => "dotarr::missing_key",
            DotError::ShapeMismatch { .. } => "dotarr::shape_mismatch",
            DotError::InvalidKey { .. } => "dotarr::invalid_key",
            DotError::UnknownAttribute { .. } => "dotarr::entity::unknown_attribute",
            DotError::MissingSetter { .. } => "dotarr::entity::missing_setter",
            DotError::MissingGetter { .. } => "dotarr::entity::missing_getter",
            DotError::TypeMismatch { .. } => "dotarr::entity::type_mismatch",
            DotError::Io { .. } => "dotarr::io",
            DotError::Parse { .. } => "dotarr::parse",
            DotError::Encode { .. } => "dotarr::encode",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        let help = match self {
            DotError::MissingKey { .. } => {
                "keys required by the template (nested maps and positional names) must exist in the source"
            }
            DotError::ShapeMismatch { .. } => {
                "a nested template map can only be applied to a list or map in the source"
            }
            DotError::InvalidKey { .. } => "only strings, numbers, booleans and null can be keys",
            DotError::UnknownAttribute { .. } => "check the entity's field table for the attribute name",
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        match self {
            DotError::Parse { src: Some(src), .. } => Some(&**src as &dyn SourceCode),
            _ => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let DotError::Parse {
            message,
            span: Some(span),
            ..
        } = self
        else {
            return None;
        };
        let len = if span.end > span.start {
            span.end - span.start
        } else {
            1
        };
        let label = LabeledSpan::new(Some(message.clone()), span.start, len);
        Some(Box::new(std::iter::once(label)))
    }
}

/// Converts a document into an `Arc<NamedSource<String>>` for use in error reports.
pub fn to_error_source(name: &str, text: &str) -> SourceArc {
    Arc::new(NamedSource::new(name, text.to_string()))
}

fn offset_of(text: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start = text
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum::<usize>();
    let offset = line_start + column.saturating_sub(1);
    (offset < text.len()).then_some(offset)
}

#[cfg(test)]
mod diagnostics_tests {
    use miette::Report;

    use super::*;

    #[test]
    fn test_missing_key_message_names_the_key() {
        let err = DotError::MissingKey {
            key: Key::from("z"),
        };
        assert_eq!(err.to_string(), "Key 'z' was not found in the main array");
        assert_eq!(err.error_type(), ErrorType::Shape);
        assert_eq!(err.code().unwrap().to_string(), "dotarr::missing_key");
    }

    #[test]
    fn test_parse_error_labels_the_offending_position() {
        let text = "{\n  \"a\": ,\n}";
        let err = DotError::parse_at("JSON", "expected value", "doc.json", text, 2, 8);
        let DotError::Parse { span: Some(span), .. } = &err else {
            panic!("expected a span");
        };
        assert_eq!(&text[span.start..span.end], ",");

        let output = format!("{:?}", Report::new(err));
        assert!(output.contains("expected value"));
    }

    #[test]
    fn test_offset_out_of_range_has_no_span() {
        let err = DotError::parse_at("YAML", "eof", "doc.yaml", "a: 1", 5, 1);
        assert!(matches!(err, DotError::Parse { span: None, .. }));
    }
}
