//! What each command prints.
//!
//! Commands collect results into a report value, then render it once.

mod bake;
mod check;
mod list;
mod output;

pub use bake::{BakeReport, PreviewFile};
pub use check::CheckReport;
pub use list::{GroupInfo, ListReport, ModuleInfo};
pub use output::{Report, TerminalOutput};
