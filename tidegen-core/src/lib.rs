//! Core types and utilities for the tidegen code generator.
//!
//! This crate provides the data types shared by both generation pipelines,
//! plugin module discovery, and the generated-file abstraction used to write
//! outputs to disk.

mod discovery;
mod file;
mod types;

// Module discovery
pub use discovery::{DirectorySource, ModuleSource, RESERVED_NAMES, SCRIPT_EXTENSION};
// File operations
pub use file::{FileStatus, GeneratedFile, WriteResult};
// Fundamental types
pub use types::{HintEntry, Module, split_source_lines};
