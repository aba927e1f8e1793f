//! The plugin bundler and completion-table pipelines.

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use tidegen_core::{
    DirectorySource, FileStatus, GeneratedFile, Module, ModuleSource, WriteResult,
};
use tidegen_manifest::{CompletionDocument, CompletionsConfig, PluginsConfig};

use crate::{
    DispatchChain, KeyGroup, ScriptBundle,
    dispatch::{hint_dispatch, keyword_dispatch},
    files::{BindInc, DispatchInc, HeaderH, ScriptInc},
    grouping::group_keywords,
};

/// A generator producing a fixed set of output files.
///
/// Files are rendered and written one at a time, in `files()` order.
pub trait Pipeline {
    /// Pipeline identifier (e.g., "plugins", "completions")
    fn name(&self) -> &'static str;

    /// Output files of this pipeline
    fn files(&self) -> Vec<Box<dyn GeneratedFile + '_>>;

    /// Render every file without touching the disk
    fn preview(&self, base: &Path) -> Vec<PreviewFile> {
        self.files()
            .iter()
            .map(|file| PreviewFile {
                path: file.path(base),
                content: file.render(),
            })
            .collect()
    }

    /// Write every file under `base`
    fn generate(&self, base: &Path) -> Result<GenerateResult> {
        let mut written = Vec::new();
        for file in self.files() {
            let path = file.path(base);
            let result = file
                .write(base)
                .wrap_err_with(|| format!("{} pipeline failed", self.name()))?;
            log::info!("generated {} ({:?})", path.display(), result);
            written.push(WrittenFile { path, result });
        }
        Ok(GenerateResult { files: written })
    }

    /// Compare every file with what is on disk
    fn check(&self, base: &Path) -> Result<Vec<CheckedFile>> {
        self.files()
            .iter()
            .map(|file| {
                Ok(CheckedFile {
                    path: file.path(base),
                    status: file.status(base)?,
                })
            })
            .collect()
    }
}

/// A rendered file for preview
#[derive(Debug)]
pub struct PreviewFile {
    pub path: PathBuf,
    pub content: String,
}

/// A file written by [`Pipeline::generate`]
#[derive(Debug)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub result: WriteResult,
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    pub files: Vec<WrittenFile>,
}

/// A file compared by [`Pipeline::check`]
#[derive(Debug)]
pub struct CheckedFile {
    pub path: PathBuf,
    pub status: FileStatus,
}

/// Module source described by a `[plugins]` section, rooted at `base`.
pub fn plugin_source(config: &PluginsConfig, base: &Path) -> DirectorySource {
    DirectorySource::new(base.join(&config.root))
        .with_extension(config.script_extension.clone())
        .with_reserved(config.reserved.clone())
}

/// Bundles plugin scripts and emits the binding and header tables.
///
/// All three outputs are rendered from the same module list, so they agree
/// on module order.
pub struct PluginPipeline<'a> {
    config: &'a PluginsConfig,
    modules: Vec<Module>,
}

impl<'a> PluginPipeline<'a> {
    pub fn new(config: &'a PluginsConfig, modules: Vec<Module>) -> Self {
        Self { config, modules }
    }

    /// Load modules from `source` once; every output uses that list.
    pub fn from_source(config: &'a PluginsConfig, source: &impl ModuleSource) -> Result<Self> {
        let modules = source
            .list_modules()
            .wrap_err("failed to discover plugin modules")?;
        log::info!("discovered {} plugin modules", modules.len());
        Ok(Self::new(config, modules))
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// Number of script lines bundled into the script output.
    pub fn line_count(&self) -> usize {
        ScriptBundle::new(&self.modules).line_count()
    }
}

impl Pipeline for PluginPipeline<'_> {
    fn name(&self) -> &'static str {
        "plugins"
    }

    fn files(&self) -> Vec<Box<dyn GeneratedFile + '_>> {
        vec![
            Box::new(ScriptInc {
                path: &self.config.bundle,
                modules: &self.modules,
            }),
            Box::new(BindInc {
                path: &self.config.bindings,
                modules: &self.modules,
                binding: &self.config.binding,
            }),
            Box::new(HeaderH {
                path: &self.config.headers,
                modules: &self.modules,
            }),
        ]
    }
}

/// Emits keyword-completion and hint dispatch chains.
pub struct CompletionPipeline<'a> {
    config: &'a CompletionsConfig,
    groups: Vec<KeyGroup>,
    keywords: DispatchChain,
    hints: DispatchChain,
}

impl<'a> CompletionPipeline<'a> {
    pub fn new(config: &'a CompletionsConfig, document: &CompletionDocument) -> Result<Self> {
        let groups = group_keywords(document.keywords.as_slice())?;
        for group in &groups {
            log::debug!("keyword group '{}': {:?}", group.key, group.members);
        }

        let keywords = keyword_dispatch(&groups)?;
        let hints = hint_dispatch(&document.hint_entries())?;

        Ok(Self {
            config,
            groups,
            keywords,
            hints,
        })
    }

    pub fn groups(&self) -> &[KeyGroup] {
        &self.groups
    }

    pub fn hint_count(&self) -> usize {
        self.hints.blocks().len()
    }
}

impl Pipeline for CompletionPipeline<'_> {
    fn name(&self) -> &'static str {
        "completions"
    }

    fn files(&self) -> Vec<Box<dyn GeneratedFile + '_>> {
        vec![
            Box::new(DispatchInc {
                path: &self.config.keywords,
                chain: &self.keywords,
            }),
            Box::new(DispatchInc {
                path: &self.config.hints,
                chain: &self.hints,
            }),
        ]
    }
}
