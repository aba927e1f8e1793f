//! The completion document (`autoCompletion.json`).

use std::{path::Path, str::FromStr};

use indexmap::IndexMap;
use serde::Deserialize;
use tidegen_core::HintEntry;

use crate::{
    Error, Result, SourceContext,
    validate::{find_key_span, find_quoted_span},
};

/// Keywords and command hints for the interactive shell.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CompletionDocument {
    /// Keywords offered as prefix completions
    #[serde(rename = "KeyWord")]
    pub keywords: Vec<String>,

    /// Command hints
    pub hints: Hints,
}

/// `hints` object of the completion document
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Hints {
    /// Command to hint text, in document order
    pub command: IndexMap<String, String>,

    /// Display attributes applied to every hint
    pub font: Font,
}

/// `[color, bold]` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Font(pub i64, pub i64);

impl Font {
    pub fn color(&self) -> i64 {
        self.0
    }

    pub fn bold(&self) -> i64 {
        self.1
    }
}

impl FromStr for CompletionDocument {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_document(s, "autoCompletion.json")
    }
}

impl CompletionDocument {
    /// Read and parse a completion document.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        parse_document(&content, &path.display().to_string())
    }

    /// Parse a completion document from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_document(content, filename)
    }

    /// One hint entry per command, in document order, with the shared font applied.
    pub fn hint_entries(&self) -> Vec<HintEntry> {
        self.hints
            .command
            .iter()
            .map(|(command, text)| HintEntry {
                command: command.clone(),
                color: self.hints.font.color(),
                bold: self.hints.font.bold(),
                text: text.clone(),
            })
            .collect()
    }
}

fn parse_document(content: &str, filename: &str) -> Result<CompletionDocument> {
    let ctx = SourceContext::new(content, filename);
    let document: CompletionDocument =
        serde_json::from_str(content).map_err(|e| ctx.json_error(e))?;
    validate_document(&document, &ctx)?;
    Ok(document)
}

fn validate_document(document: &CompletionDocument, ctx: &SourceContext) -> Result<()> {
    if document.keywords.is_empty() {
        return Err(ctx.validation_error(
            "keyword list is empty",
            find_key_span(ctx.src(), "KeyWord"),
        ));
    }
    if let Some(index) = document.keywords.iter().position(String::is_empty) {
        return Err(ctx.validation_error(
            format!("keyword at position {} is empty", index),
            find_quoted_span(ctx.src(), ""),
        ));
    }

    if document.hints.command.is_empty() {
        return Err(ctx.validation_error(
            "hint command mapping is empty",
            find_key_span(ctx.src(), "command"),
        ));
    }

    let bold = document.hints.font.bold();
    if bold != 0 && bold != 1 {
        return Err(ctx.validation_error(
            format!("bold flag must be 0 or 1, found {}", bold),
            find_key_span(ctx.src(), "font"),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
  "KeyWord": ["if", "import", "is", "app"],
  "hints": {
    "command": {
      "Tide": " <Name> = <Value>",
      "if": " (Expression) {Statement}",
      "fn": " name(args) {Statement}"
    },
    "font": [35, 0]
  }
}"#;

    #[test]
    fn test_parse_sample() {
        let doc = CompletionDocument::from_str(SAMPLE).unwrap();

        assert_eq!(doc.keywords, ["if", "import", "is", "app"]);
        assert_eq!(doc.hints.font, Font(35, 0));
        assert_eq!(doc.hints.command.len(), 3);
    }

    #[test]
    fn test_hint_entries_keep_document_order() {
        let doc = CompletionDocument::from_str(SAMPLE).unwrap();
        let entries = doc.hint_entries();

        let commands: Vec<&str> = entries.iter().map(|e| e.command.as_str()).collect();
        assert_eq!(commands, ["Tide", "if", "fn"]);
        assert_eq!(
            entries[1],
            HintEntry {
                command: "if".to_string(),
                color: 35,
                bold: 0,
                text: " (Expression) {Statement}".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_keywords_rejected() {
        let err = CompletionDocument::from_str(
            r#"{"KeyWord": [], "hints": {"command": {"a": "b"}, "font": [35, 0]}}"#,
        )
        .unwrap_err();

        match *err {
            Error::Validation { message, span, .. } => {
                assert_eq!(message, "keyword list is empty");
                assert!(span.is_some());
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_empty_keyword_rejected() {
        let err = CompletionDocument::from_str(
            r#"{"KeyWord": ["if", ""], "hints": {"command": {"a": "b"}, "font": [35, 0]}}"#,
        )
        .unwrap_err();

        assert_eq!(err.to_string(), "keyword at position 1 is empty");
    }

    #[test]
    fn test_empty_hints_rejected() {
        let err = CompletionDocument::from_str(
            r#"{"KeyWord": ["if"], "hints": {"command": {}, "font": [35, 0]}}"#,
        )
        .unwrap_err();

        assert_eq!(err.to_string(), "hint command mapping is empty");
    }

    #[test]
    fn test_bold_out_of_range_rejected() {
        let err = CompletionDocument::from_str(
            r#"{"KeyWord": ["if"], "hints": {"command": {"a": "b"}, "font": [35, 2]}}"#,
        )
        .unwrap_err();

        assert_eq!(err.to_string(), "bold flag must be 0 or 1, found 2");
    }

    #[test]
    fn test_missing_field_is_json_error() {
        let err = CompletionDocument::from_str(r#"{"KeyWord": ["if"]}"#).unwrap_err();
        assert!(matches!(*err, Error::Json { .. }));
    }

    #[test]
    fn test_font_must_be_pair() {
        let err = CompletionDocument::from_str(
            r#"{"KeyWord": ["if"], "hints": {"command": {"a": "b"}, "font": [35]}}"#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Json { .. }));
    }

    #[test]
    fn test_open_missing_file() {
        let err = CompletionDocument::open("/nonexistent/autoCompletion.json").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
