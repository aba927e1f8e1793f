//! Plugin module discovery.

use std::path::PathBuf;

use eyre::{Result, WrapErr, bail};

use crate::Module;

/// Entry names under the plugin root that are generator outputs, not modules.
pub const RESERVED_NAMES: [&str; 3] = ["exten.Bind.inc", "exten.script.inc", "extenHeader.h"];

/// Default file extension of a module's script file.
pub const SCRIPT_EXTENSION: &str = "vt";

/// Source of plugin modules for the bundler.
///
/// The order returned is the emission order for every plugin output.
pub trait ModuleSource {
    fn list_modules(&self) -> Result<Vec<Module>>;
}

impl ModuleSource for [Module] {
    fn list_modules(&self) -> Result<Vec<Module>> {
        Ok(self.to_vec())
    }
}

impl ModuleSource for Vec<Module> {
    fn list_modules(&self) -> Result<Vec<Module>> {
        Ok(self.clone())
    }
}

/// Discovers modules from a plugin root directory.
///
/// Every entry of the root, except reserved output names and hidden entries,
/// is a module directory `<name>/` holding `<name>.<extension>`. Modules are
/// returned sorted by name so all outputs agree on order across runs.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    extension: String,
    reserved: Vec<String>,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: SCRIPT_EXTENSION.to_string(),
            reserved: RESERVED_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Set the script file extension (without the dot).
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Replace the reserved entry names.
    pub fn with_reserved(mut self, reserved: Vec<String>) -> Self {
        self.reserved = reserved;
        self
    }

    /// Entry names that are modules, in emission order.
    pub fn module_names(&self) -> Result<Vec<String>> {
        let entries = std::fs::read_dir(&self.root)
            .wrap_err_with(|| format!("failed to read plugin root '{}'", self.root.display()))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry
                .wrap_err_with(|| format!("failed to read entry in '{}'", self.root.display()))?;
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                bail!(
                    "plugin entry '{}' is not valid UTF-8",
                    entry.path().display()
                );
            };

            if name.starts_with('.') || self.reserved.contains(&name) {
                continue;
            }
            if !entry.path().is_dir() {
                bail!(
                    "plugin entry '{}' is not a module directory",
                    entry.path().display()
                );
            }
            names.push(name);
        }

        names.sort();
        Ok(names)
    }

    fn script_path(&self, name: &str) -> PathBuf {
        self.root
            .join(name)
            .join(format!("{}.{}", name, self.extension))
    }
}

impl ModuleSource for DirectorySource {
    fn list_modules(&self) -> Result<Vec<Module>> {
        self.module_names()?
            .into_iter()
            .map(|name| {
                let path = self.script_path(&name);
                let source = std::fs::read_to_string(&path)
                    .wrap_err_with(|| format!("failed to read module script '{}'", path.display()))?;
                log::debug!(
                    "discovered module '{}' ({} bytes)",
                    name,
                    source.len()
                );
                Ok(Module::from_source(name, path, &source))
            })
            .collect()
    }
}
