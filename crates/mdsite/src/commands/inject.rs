//! `mdsite inject` command implementation.

use std::path::PathBuf;

use clap::Args;
use mdsite_config::{CliSettings, Config};
use mdsite_diagrams::{TreeStatus, process_tree};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the inject command.
#[derive(Args)]
pub(crate) struct InjectArgs {
    /// Root of the generated rustdoc HTML tree (default from config).
    root: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover mdsite.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl InjectArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            rustdoc_dir: self.root,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let root = config.rustdoc_resolved.dir;

        let report = process_tree(&root)?;
        match report.status {
            TreeStatus::RootNotFound => {
                output.warning(&format!("Rustdoc directory not found: {}", root.display()));
            }
            TreeStatus::NoHtmlFiles => {
                output.warning(&format!("No HTML files found in {}", root.display()));
            }
            TreeStatus::Processed => {
                output.success(&format!(
                    "Injected Mermaid support into {} of {} files",
                    report.modified, report.scanned
                ));
            }
        }
        Ok(())
    }
}
