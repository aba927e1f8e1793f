//! Indentation-aware text assembly shared by the emitters.
//!
//! Emitters either drive a [`CodeBuilder`] directly or describe their output
//! as [`CodeFragment`]s through [`Renderable`].

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
