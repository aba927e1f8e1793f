//! The `tidegen.toml` generator manifest.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;
use tidegen_core::{RESERVED_NAMES, SCRIPT_EXTENSION};

use crate::{
    Error, Result, SourceContext,
    validate::{find_key_span, find_quoted_span, validate_identifier, validate_identifier_prefix},
};

/// Default manifest file name.
pub const MANIFEST_FILE: &str = "tidegen.toml";

/// Root of tidegen.toml.
///
/// Every section is optional; defaults reproduce the Tide source tree
/// layout. Relative paths are resolved against the manifest's directory.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Plugin bundler settings
    #[serde(default)]
    pub plugins: PluginsConfig,

    /// Completion-table generator settings
    #[serde(default)]
    pub completions: CompletionsConfig,
}

/// `[plugins]` section
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PluginsConfig {
    /// Directory holding one subdirectory per plugin module
    pub root: PathBuf,
    /// Extension of each module's script file
    pub script_extension: String,
    /// Entry names under `root` that are not modules
    pub reserved: Vec<String>,
    /// Bundled script output
    pub bundle: PathBuf,
    /// Binding-registration output
    pub bindings: PathBuf,
    /// Header-inclusion output
    pub headers: PathBuf,
    /// Template parameters for binding invocations
    pub binding: BindingConfig,
}

impl Default for PluginsConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("Extension"),
            script_extension: SCRIPT_EXTENSION.to_string(),
            reserved: RESERVED_NAMES.iter().map(|s| s.to_string()).collect(),
            bundle: PathBuf::from("Extension/exten.script.inc"),
            bindings: PathBuf::from("Extension/exten.Bind.inc"),
            headers: PathBuf::from("Extension/extenHeader.h"),
            binding: BindingConfig::default(),
        }
    }
}

/// `[plugins.binding]` section
///
/// A module `Regex` renders as `<prefix>RegexBind(<context>, <registry>);`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BindingConfig {
    pub prefix: String,
    pub context: String,
    pub registry: String,
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            prefix: "exten".to_string(),
            context: "vm".to_string(),
            registry: "coreModule".to_string(),
        }
    }
}

/// `[completions]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompletionsConfig {
    /// The JSON completion document
    pub source: PathBuf,
    /// Keyword completion dispatch output
    pub keywords: PathBuf,
    /// Hint dispatch output
    pub hints: PathBuf,
}

impl Default for CompletionsConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("Util/Script/autoCompletion.json"),
            keywords: PathBuf::from("Cli/AutoCom_KeyWord.inc"),
            hints: PathBuf::from("Cli/AutoCom_Hint.inc"),
        }
    }
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, MANIFEST_FILE)
    }
}

impl Manifest {
    /// Parse a manifest from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, &source_ctx)?;
    Ok(manifest)
}

fn validate_manifest(manifest: &Manifest, ctx: &SourceContext) -> Result<()> {
    let plugins = &manifest.plugins;

    if plugins.script_extension.is_empty() {
        return Err(ctx.validation_error(
            "script_extension cannot be empty",
            find_key_span(ctx.src(), "script_extension"),
        ));
    }

    let binding = &plugins.binding;
    if let Some(reason) = validate_identifier_prefix(&binding.prefix) {
        return Err(ctx.invalid_identifier_error(
            &binding.prefix,
            "plugins.binding.prefix",
            reason,
            find_quoted_span(ctx.src(), &binding.prefix),
        ));
    }
    for (key, name) in [
        ("plugins.binding.context", &binding.context),
        ("plugins.binding.registry", &binding.registry),
    ] {
        if let Some(reason) = validate_identifier(name) {
            return Err(ctx.invalid_identifier_error(
                name,
                key,
                reason,
                find_quoted_span(ctx.src(), name),
            ));
        }
    }

    Ok(())
}

/// A manifest together with the directory its relative paths resolve against.
#[derive(Debug, Clone)]
pub struct ManifestFile {
    path: Option<PathBuf>,
    base_dir: PathBuf,
    manifest: Manifest,
}

impl ManifestFile {
    /// Open and parse a manifest file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let manifest = Manifest::from_str_with_filename(&content, &path.display().to_string())?;

        Ok(Self {
            base_dir: base_dir_of(&path),
            path: Some(path),
            manifest,
        })
    }

    /// Open `tidegen.toml` in `dir`, or fall back to defaults when it doesn't exist.
    pub fn discover(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let path = dir.join(MANIFEST_FILE);
        if path.exists() {
            Self::open(path)
        } else {
            Ok(Self {
                path: None,
                base_dir: dir.to_path_buf(),
                manifest: Manifest::default(),
            })
        }
    }

    /// Path of the manifest file, `None` when running on defaults.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Directory that relative manifest paths resolve against.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Resolve a manifest path against the base directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.base_dir.join(path)
    }
}

fn base_dir_of(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
