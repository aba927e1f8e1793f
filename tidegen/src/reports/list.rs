//! List command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Discovered plugin modules and keyword groups.
#[derive(Debug)]
pub struct ListReport {
    /// Modules in emission order.
    pub modules: Vec<ModuleInfo>,
    /// Keyword groups in dispatch order.
    pub groups: Vec<GroupInfo>,
}

#[derive(Debug)]
pub struct ModuleInfo {
    pub name: String,
    pub path: PathBuf,
    pub lines: usize,
}

#[derive(Debug)]
pub struct GroupInfo {
    pub key: char,
    pub members: Vec<String>,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        out.section("Modules");
        if self.modules.is_empty() {
            out.preformatted("  (none)");
        }
        for module in &self.modules {
            out.list_item(&format!(
                "{} ({}, {} lines)",
                module.name,
                module.path.display(),
                module.lines
            ));
        }
        out.newline();

        out.section("Keyword groups");
        for group in &self.groups {
            out.list_item(&format!("'{}': {}", group.key, group.members.join(", ")));
        }
    }
}
