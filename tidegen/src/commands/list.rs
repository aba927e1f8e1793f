use clap::Args;
use eyre::Result;

use super::{ManifestArgs, completion_pipeline, plugin_pipeline};
use crate::reports::{GroupInfo, ListReport, ModuleInfo, Report, TerminalOutput};

#[derive(Args)]
pub struct ListCommand {
    #[command(flatten)]
    pub manifest: ManifestArgs,
}

impl ListCommand {
    /// Run the list command
    pub fn run(&self) -> Result<()> {
        let file = self.manifest.load();

        let plugins = plugin_pipeline(&file)?;
        let modules = plugins
            .modules()
            .iter()
            .map(|m| ModuleInfo {
                name: m.name().to_string(),
                path: m.path().to_path_buf(),
                lines: m.source_lines().len(),
            })
            .collect();

        let completions = completion_pipeline(&file)?;
        let groups = completions
            .groups()
            .iter()
            .map(|g| GroupInfo {
                key: g.key,
                members: g.members.clone(),
            })
            .collect();

        ListReport { modules, groups }.render(&mut TerminalOutput::new());
        Ok(())
    }
}
