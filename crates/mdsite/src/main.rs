//! mdsite CLI - documentation site tooling.
//!
//! Provides commands for:
//! - `build`: Convert the Markdown docs tree to a static HTML site
//! - `inject`: Retrofit Mermaid rendering support into rustdoc HTML

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, InjectArgs};
use output::Output;

/// mdsite - documentation site tooling.
#[derive(Parser)]
#[command(name = "mdsite", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert the Markdown documentation tree to a static HTML site.
    Build(BuildArgs),
    /// Inject Mermaid rendering support into generated rustdoc HTML.
    Inject(InjectArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = match &cli.command {
        Commands::Build(args) => args.verbose,
        Commands::Inject(args) => args.verbose,
    };

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Build(args) => args.execute(),
        Commands::Inject(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
