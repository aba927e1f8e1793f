mod bake;
mod check;
mod list;

use std::path::{Path, PathBuf};

use bake::BakeCommand;
use check::CheckCommand;
use clap::{Args, Parser, Subcommand, ValueEnum};
use eyre::Result;
use list::ListCommand;
use tidegen_codegen::{CompletionPipeline, PluginPipeline, plugin_source};
use tidegen_manifest::{CompletionDocument, ManifestFile};

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for tidegen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "tidegen")]
#[command(version)]
#[command(about = "Generate Tide plugin bundles and shell completion tables")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Bake(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate plugin and completion outputs
    Bake(BakeCommand),

    /// Verify generated outputs are up to date
    Check(CheckCommand),

    /// List plugin modules and keyword groups
    List(ListCommand),
}

/// Manifest selection shared by every command
#[derive(Args)]
pub(crate) struct ManifestArgs {
    /// Path to tidegen.toml (defaults to ./tidegen.toml, or built-in defaults when absent)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl ManifestArgs {
    /// Load the manifest, exiting with a diagnostic on failure
    pub fn load(&self) -> ManifestFile {
        let file = match &self.config {
            Some(path) => ManifestFile::open(path).unwrap_or_exit(),
            None => ManifestFile::discover(Path::new(".")).unwrap_or_exit(),
        };
        match file.path() {
            Some(path) => log::debug!("loaded manifest {}", path.display()),
            None => log::debug!("no manifest found, using defaults"),
        }
        file
    }
}

/// Which pipeline(s) a command runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Target {
    /// Plugin bundle, binding table and header list
    Plugins,
    /// Keyword completion and hint dispatch
    Completions,
}

impl Target {
    /// Whether `only` selects this target (no selection means all)
    pub fn selected(self, only: Option<Target>) -> bool {
        only.is_none_or(|t| t == self)
    }
}

/// Build the plugin pipeline from the manifest
pub(crate) fn plugin_pipeline(file: &ManifestFile) -> Result<PluginPipeline<'_>> {
    let config = &file.manifest().plugins;
    PluginPipeline::from_source(config, &plugin_source(config, file.base_dir()))
}

/// Build the completion pipeline from the manifest, exiting on document errors
pub(crate) fn completion_pipeline(file: &ManifestFile) -> Result<CompletionPipeline<'_>> {
    let config = &file.manifest().completions;
    let document = CompletionDocument::open(file.resolve(&config.source)).unwrap_or_exit();
    CompletionPipeline::new(config, &document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_selection() {
        assert!(Target::Plugins.selected(None));
        assert!(Target::Plugins.selected(Some(Target::Plugins)));
        assert!(!Target::Completions.selected(Some(Target::Plugins)));
    }

    #[test]
    fn test_cli_parses_bake_flags() {
        let cli = Cli::try_parse_from([
            "tidegen", "-vv", "bake", "--only", "completions", "--dry-run",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Bake(_)));
    }

    #[test]
    fn test_manifest_args_explicit_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tidegen.toml");
        std::fs::write(&path, "[plugins]\nroot = \"plugins\"\n").unwrap();

        let args = ManifestArgs {
            config: Some(path.clone()),
        };
        let file = args.load();
        assert_eq!(file.path(), Some(path.as_path()));
        assert_eq!(file.manifest().plugins.root, PathBuf::from("plugins"));
    }

    #[test]
    fn test_cli_rejects_unknown_target() {
        assert!(Cli::try_parse_from(["tidegen", "check", "--only", "docs"]).is_err());
    }
}
