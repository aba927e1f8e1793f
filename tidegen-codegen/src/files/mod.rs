//! Output files produced by the two pipelines.

mod dispatch_inc;
mod plugin_files;

pub use dispatch_inc::DispatchInc;
pub use plugin_files::{BindInc, HeaderH, ScriptInc};
