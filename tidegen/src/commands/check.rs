use clap::Args;
use eyre::Result;
use tidegen_codegen::Pipeline;

use super::{ManifestArgs, Target, completion_pipeline, plugin_pipeline};
use crate::reports::{CheckReport, Report, TerminalOutput};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub manifest: ManifestArgs,

    /// Only check one pipeline
    #[arg(long, value_enum)]
    pub only: Option<Target>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let file = self.manifest.load();
        let base = file.base_dir();
        let mut report = CheckReport::default();

        if Target::Plugins.selected(self.only) {
            report.files.extend(plugin_pipeline(&file)?.check(base)?);
        }
        if Target::Completions.selected(self.only) {
            report.files.extend(completion_pipeline(&file)?.check(base)?);
        }

        report.render(&mut TerminalOutput::new());

        if !report.is_up_to_date() {
            std::process::exit(1);
        }
        Ok(())
    }
}
