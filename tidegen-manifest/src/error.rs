use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Boxed so `Result`s stay small on the happy path.
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Text of the file being parsed, kept so errors can point into it.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// TOML syntax or schema error, labelled where toml reports it.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        Box::new(Error::Parse {
            span: source.span().map(SourceSpan::from),
            src: self.named_source(),
            source,
        })
    }

    /// JSON syntax or schema error.
    ///
    /// serde_json only gives a 1-based line and column, so the label is a
    /// zero-width span at that position.
    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = line_column_offset(&self.src, source.line(), source.column())
            .map(|offset| SourceSpan::from((offset, 0)));
        Box::new(Error::Json {
            src: self.named_source(),
            span,
            source,
        })
    }

    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    /// A configured name that cannot appear in generated C code.
    pub fn invalid_identifier_error(
        &self,
        name: impl Into<String>,
        key: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span,
            name: name.into(),
            key: key.into(),
            reason: reason.into(),
        })
    }
}

fn line_column_offset(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    Some((line_start + column.saturating_sub(1)).min(src.len()))
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(tidegen::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse generator manifest")]
    #[diagnostic(code(tidegen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse completion document")]
    #[diagnostic(
        code(tidegen::json_error),
        help("expected a \"KeyWord\" array and a \"hints\" object with \"command\" and \"font\"")
    )]
    Json {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(tidegen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("invalid identifier '{name}' for '{key}'")]
    #[diagnostic(
        code(tidegen::invalid_identifier),
        help(
            "{reason}. Use only letters, numbers, and underscores, starting with a letter or underscore."
        )
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        key: String,
        reason: String,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_column_offset() {
        let src = "{\n  \"a\": 1,\n  oops\n}";
        assert_eq!(line_column_offset(src, 1, 1), Some(0));
        assert_eq!(line_column_offset(src, 3, 3), Some(14));
        assert_eq!(line_column_offset(src, 0, 0), None);
    }

    #[test]
    fn test_line_column_offset_clamps_to_source() {
        assert_eq!(line_column_offset("ab", 1, 99), Some(2));
    }

    #[test]
    fn test_json_error_has_span() {
        let src = "{\n  \"KeyWord\": [,]\n}";
        let source = serde_json::from_str::<serde_json::Value>(src).unwrap_err();
        let err = SourceContext::new(src, "autoCompletion.json").json_error(source);

        match *err {
            Error::Json { span, .. } => assert!(span.is_some()),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
