use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for plater-schema operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass the path to an ER schema JSON file"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse ER schema")]
    #[diagnostic(code(plater::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(plater::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(
        code(plater::invalid_identifier),
        help("names must start with a letter and contain only letters")
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },
}

impl Error {
    /// Create a parse error from a serde_json error with source context
    pub fn parse(source: serde_json::Error, src: &str, filename: &str) -> Box<Self> {
        let span = span_at(src, source.line(), source.column());
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a validation error with source context
    pub fn validation(message: impl Into<String>, src: &str, filename: &str) -> Box<Self> {
        Box::new(Error::Validation {
            src: NamedSource::new(filename, src.to_string()),
            span: None,
            message: message.into(),
        })
    }

    /// Create an invalid identifier error, pointing at the offending name
    /// in the source when it can be located
    pub fn invalid_identifier(
        name: impl Into<String>,
        context: impl Into<String>,
        src: &str,
        filename: &str,
    ) -> Box<Self> {
        let name = name.into();
        Box::new(Error::InvalidIdentifier {
            src: NamedSource::new(filename, src.to_string()),
            span: find_name_span(src, &name),
            name,
            context: context.into(),
        })
    }
}

/// Convert a 1-based line/column position into a byte-offset span.
fn span_at(src: &str, line: usize, column: usize) -> Option<SourceSpan> {
    if line == 0 {
        return None;
    }
    let mut offset = 0;
    for (i, text) in src.lines().enumerate() {
        if i + 1 == line {
            offset += column.saturating_sub(1).min(text.len());
            return Some(SourceSpan::from((offset.min(src.len()), 1)));
        }
        offset += text.len() + 1;
    }
    None
}

/// Locate a quoted name in the source for span reporting.
fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    let needle = format!("\"{}\"", name);
    src.find(&needle)
        .map(|pos| SourceSpan::from((pos, needle.len())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_at_first_line() {
        let span = span_at("{\"a\": 1}", 1, 3).unwrap();
        assert_eq!(span.offset(), 2);
    }

    #[test]
    fn test_span_at_later_line() {
        let src = "{\n  \"a\": tru\n}";
        let span = span_at(src, 2, 8).unwrap();
        assert_eq!(span.offset(), 9);
    }

    #[test]
    fn test_find_name_span() {
        let src = "{\"entity\": {\"name\": \"9bad\"}}";
        let span = find_name_span(src, "9bad").unwrap();
        assert_eq!(span.offset(), 20);
        assert_eq!(span.len(), 6);
    }

    #[test]
    fn test_find_name_span_missing() {
        assert!(find_name_span("{}", "absent").is_none());
    }
}
