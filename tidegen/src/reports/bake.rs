//! Bake command report data structures.

use std::path::PathBuf;

use tidegen_codegen::WrittenFile;
use tidegen_core::WriteResult;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct BakeReport {
    /// Manifest file, `None` when running on defaults.
    pub manifest: Option<PathBuf>,

    /// One line per pipeline that ran.
    pub summary: Vec<String>,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(Vec<WrittenFile>),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: PathBuf,
    /// File content.
    pub content: String,
}

impl BakeReport {
    pub fn new(manifest: Option<PathBuf>, dry_run: bool) -> Self {
        Self {
            manifest,
            summary: Vec::new(),
            result: if dry_run {
                GenerationResult::Preview(Vec::new())
            } else {
                GenerationResult::Written(Vec::new())
            },
        }
    }

    pub fn push_preview(&mut self, files: impl IntoIterator<Item = PreviewFile>) {
        if let GenerationResult::Preview(preview) = &mut self.result {
            preview.extend(files);
        }
    }

    pub fn push_written(&mut self, files: impl IntoIterator<Item = WrittenFile>) {
        if let GenerationResult::Written(written) = &mut self.result {
            written.extend(files);
        }
    }
}

impl Report for BakeReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(files) => self.render_written(out, files),
            GenerationResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl BakeReport {
    fn render_header(&self, out: &mut dyn Output) {
        let manifest = self
            .manifest
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "defaults".to_string());
        out.key_value("Manifest", &manifest);
        for line in &self.summary {
            out.list_item(line);
        }
        out.newline();
    }

    fn render_written(&self, out: &mut dyn Output, files: &[WrittenFile]) {
        self.render_header(out);

        out.section("Generated");
        for file in files {
            let path = file.path.display().to_string();
            match file.result {
                WriteResult::Written => out.added_item(&path),
                WriteResult::Unchanged => out.list_item(&format!("{} (unchanged)", path)),
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path.display().to_string());
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        self.render_header(out);
        out.preformatted(&format!("{} files would be generated", files.len()));
    }
}
