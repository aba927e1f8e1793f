//! Escaping and code emission for tidegen.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`escape`] - Source line to string-literal escaping
//! - [`bundle`] - Module script bundling
//! - [`registration`] - Binding and header tables
//! - [`grouping`] - First-character keyword grouping
//! - [`dispatch`] - Conditional dispatch chains
//! - [`files`] - Output files
//! - [`pipeline`] - The plugin and completion pipelines

pub mod builder;
pub mod bundle;
pub mod dispatch;
pub mod escape;
pub mod files;
pub mod grouping;
pub mod pipeline;
pub mod registration;

pub use bundle::ScriptBundle;
pub use dispatch::{ConditionalBlock, DispatchChain, hint_dispatch, keyword_dispatch};
pub use escape::{EscapedLine, escape_line};
pub use grouping::{KeyGroup, group_keywords};
pub use pipeline::{
    CheckedFile, CompletionPipeline, GenerateResult, Pipeline, PluginPipeline, PreviewFile,
    WrittenFile, plugin_source,
};
pub use registration::{BindTable, HeaderList};
