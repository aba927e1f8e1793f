//! Fundamental data types shared across the generator.

use std::path::{Path, PathBuf};

/// A plugin module discovered under the plugin root.
///
/// Identity is the name; the path points at the module's script file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    name: String,
    path: PathBuf,
    source_lines: Vec<String>,
}

impl Module {
    /// Create a module from already split source lines.
    pub fn new(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        source_lines: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            source_lines,
        }
    }

    /// Create a module from raw source text.
    pub fn from_source(name: impl Into<String>, path: impl Into<PathBuf>, source: &str) -> Self {
        Self::new(name, path, split_source_lines(source))
    }

    /// Module name (the directory entry name).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path of the module's script file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Source lines, each keeping its `\n` terminator.
    pub fn source_lines(&self) -> &[String] {
        &self.source_lines
    }
}

/// Split source text into lines, keeping each line's terminator.
///
/// `\r\n` and a lone `\r` both end a line and are normalized to `\n`. The
/// last line keeps no terminator when the text does not end with a newline.
pub fn split_source_lines(source: &str) -> Vec<String> {
    let normalized = source.replace("\r\n", "\n").replace('\r', "\n");
    normalized
        .split_inclusive('\n')
        .map(str::to_string)
        .collect()
}

/// A shell hint for one recognized command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintEntry {
    /// Command text matched case-insensitively against the input buffer.
    pub command: String,
    /// Terminal color code.
    pub color: i64,
    /// Bold flag (0 or 1).
    pub bold: i64,
    /// Hint text shown after the command.
    pub text: String,
}
