//! `mdsite build` command implementation.

use std::path::PathBuf;

use clap::Args;
use mdsite_config::{CliSettings, Config};
use mdsite_site::{SiteConverter, SiteLayout};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Markdown source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Output directory for the generated site (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Project root holding README.md and friends (overrides config).
    #[arg(long)]
    root_dir: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover mdsite.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            output_dir: self.output_dir,
            root_dir: self.root_dir,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let layout = SiteLayout {
            source_dir: config.site_resolved.source_dir,
            output_dir: config.site_resolved.output_dir,
            root_dir: config.site_resolved.root_dir,
        };

        output.info(&format!("Source: {}", layout.source_dir.display()));
        output.info(&format!("Output: {}", layout.output_dir.display()));

        let report = SiteConverter::new().convert_site(&layout)?;

        if !report.docs_dir_found {
            output.warning(&format!(
                "Docs directory not found: {}",
                layout.source_dir.display()
            ));
        }
        for page in &report.pages {
            output.info(&format!(
                "Converted: {} -> {}",
                page.source.display(),
                page.output.display()
            ));
        }
        output.success(&format!("Converted {} pages", report.pages.len()));
        Ok(())
    }
}
