use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk, truncating any previous content.
    ///
    /// The file is always rewritten; the result only reports whether the
    /// bytes on disk changed.
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        let content = self.render();
        let unchanged = std::fs::read_to_string(&path).is_ok_and(|existing| existing == content);

        write_file(&path, &content)?;

        if unchanged {
            Ok(WriteResult::Unchanged)
        } else {
            Ok(WriteResult::Written)
        }
    }

    /// Compare the rendered content with what is on disk.
    fn status(&self, base: &Path) -> Result<FileStatus> {
        let path = self.path(base);
        if !path.exists() {
            return Ok(FileStatus::Missing);
        }

        let existing = std::fs::read_to_string(&path)
            .wrap_err_with(|| format!("failed to read '{}'", path.display()))?;
        if existing == self.render() {
            Ok(FileStatus::UpToDate)
        } else {
            Ok(FileStatus::Stale)
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File content changed (or the file was created)
    Written,
    /// File was rewritten with identical content
    Unchanged,
}

/// State of a generated file on disk relative to its rendered content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// Disk content matches
    UpToDate,
    /// Disk content differs
    Stale,
    /// File does not exist
    Missing,
}
