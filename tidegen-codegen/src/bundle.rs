//! Bundling of module scripts into one literal-array fragment.

use tidegen_core::Module;

use crate::{builder::CodeBuilder, escape::escape_line};

/// Every module's source, one escaped literal per line, closed by `;`.
///
/// The output is spliced into a string-array initializer, so elements are
/// juxtaposed literals and the trailing `;` ends the declaration.
#[derive(Debug, Clone, Copy)]
pub struct ScriptBundle<'a> {
    modules: &'a [Module],
}

impl<'a> ScriptBundle<'a> {
    pub fn new(modules: &'a [Module]) -> Self {
        Self { modules }
    }

    /// Total number of escaped lines in the bundle.
    pub fn line_count(&self) -> usize {
        self.modules.iter().map(|m| m.source_lines().len()).sum()
    }

    pub fn render(&self) -> String {
        self.modules
            .iter()
            .flat_map(|module| module.source_lines())
            .fold(CodeBuilder::c(), |builder, line| {
                builder.line(escape_line(line).as_str())
            })
            .raw(";")
            .build()
    }
}
