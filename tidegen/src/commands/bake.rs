use std::path::Path;

use clap::Args;
use eyre::{Context, Result};
use tidegen_codegen::Pipeline;

use super::{ManifestArgs, Target, completion_pipeline, plugin_pipeline};
use crate::reports::{BakeReport, PreviewFile, Report, TerminalOutput};

#[derive(Args)]
pub struct BakeCommand {
    #[command(flatten)]
    pub manifest: ManifestArgs,

    /// Only run one pipeline
    #[arg(long, value_enum)]
    pub only: Option<Target>,

    /// Print generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl BakeCommand {
    /// Run the bake command
    pub fn run(&self) -> Result<()> {
        let file = self.manifest.load();
        let base = file.base_dir();
        let mut report = BakeReport::new(file.path().map(|p| p.to_path_buf()), self.dry_run);

        if Target::Plugins.selected(self.only) {
            let pipeline = plugin_pipeline(&file)?;
            report.summary.push(plugin_summary(
                pipeline.modules().len(),
                pipeline.line_count(),
            ));
            self.execute(&pipeline, base, &mut report)?;
        }

        if Target::Completions.selected(self.only) {
            let pipeline = completion_pipeline(&file)?;
            report.summary.push(format!(
                "completions: {} keyword groups, {} hints",
                pipeline.groups().len(),
                pipeline.hint_count()
            ));
            self.execute(&pipeline, base, &mut report)?;
        }

        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    fn execute(
        &self,
        pipeline: &dyn Pipeline,
        base: &Path,
        report: &mut BakeReport,
    ) -> Result<()> {
        if self.dry_run {
            let files = pipeline.preview(base).into_iter().map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            });
            report.push_preview(files);
        } else {
            let result = pipeline
                .generate(base)
                .wrap_err("Failed to generate code")?;
            report.push_written(result.files);
        }
        Ok(())
    }
}

fn plugin_summary(modules: usize, lines: usize) -> String {
    format!(
        "plugins: {} module{}, {} script lines",
        modules,
        if modules == 1 { "" } else { "s" },
        lines
    )
}
