// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Configuration inputs for tidegen.
//!
//! - [`Manifest`] - the `tidegen.toml` generator manifest (paths and binding
//!   template parameters)
//! - [`CompletionDocument`] - the `autoCompletion.json` keyword and hint
//!   document consumed by the completion pipeline

mod document;
mod error;
mod manifest;
mod validate;

pub use document::{CompletionDocument, Font, Hints};
pub use error::{Error, Result, SourceContext};
pub use manifest::{
    BindingConfig, CompletionsConfig, MANIFEST_FILE, Manifest, ManifestFile, PluginsConfig,
};
