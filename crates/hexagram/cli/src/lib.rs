//! Hexagram CLI - terminal presentation layer for the hexagram relationship index
//!
//! Commands:
//! - Render the registry as a grid, in registry order or a custom arrangement
//! - Show one hexagram with every resolved relationship
//! - Look up a hexagram by its six lines
//! - List the trigram table
//! - Propagate an annotation across the relationship web
//! - Print the fingerprint of the derived index

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod context;
mod error;
mod output;

use commands::{annotate, find, fingerprint, grid, show, trigrams};
pub use context::Sources;
pub use error::{CliError, CliResult};
pub use output::OutputFormat;

/// Hexagram CLI application
#[derive(Parser)]
#[command(name = "hexagram")]
#[command(about = "Hexagram relationship index CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Registry JSON file (defaults to the built-in canonical registry)
    #[arg(long, global = true, env = "HEXAGRAM_REGISTRY")]
    registry: Option<PathBuf>,

    /// Grid arrangement JSON file (array of rows of ids)
    #[arg(long, global = true, env = "HEXAGRAM_ARRANGEMENT")]
    arrangement: Option<PathBuf>,

    /// Engine configuration TOML file
    #[arg(short, long, global = true, env = "HEXAGRAM_CONFIG")]
    config: Option<PathBuf>,

    /// Output format (table, json, yaml)
    #[arg(short, long, global = true, default_value = "table")]
    output: OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Render hexagrams as a grid
    Grid(grid::GridArgs),

    /// Show a hexagram and its relationships
    Show(show::ShowArgs),

    /// Find a hexagram by its lines
    Find(find::FindArgs),

    /// List the eight trigrams
    Trigrams,

    /// Annotate a hexagram and propagate to related hexagrams
    Annotate(annotate::AnnotateArgs),

    /// Print the fingerprint of the derived index
    Fingerprint(fingerprint::FingerprintArgs),

    /// Show the effective engine configuration
    Config,
}

/// Run using the current process arguments.
pub fn run() -> CliResult<()> {
    run_with_args(std::env::args_os())
}

/// Run using the provided argument iterator.
pub fn run_with_args<I, T>(args: I) -> CliResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);

    let filter = if cli.verbose { "debug" } else { "warn" };
    // A subscriber may already be installed when embedded.
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init();

    let sources = Sources {
        registry: cli.registry,
        arrangement: cli.arrangement,
        config: cli.config,
    };

    match cli.command {
        Commands::Grid(args) => grid::execute(args, &sources, cli.output),
        Commands::Show(args) => show::execute(args, &sources, cli.output),
        Commands::Find(args) => find::execute(args, &sources, cli.output),
        Commands::Trigrams => trigrams::execute(cli.output),
        Commands::Annotate(args) => annotate::execute(args, &sources, cli.output),
        Commands::Fingerprint(args) => fingerprint::execute(args, &sources, cli.output),
        Commands::Config => show_config(&sources, cli.output),
    }
}

fn show_config(sources: &Sources, format: OutputFormat) -> CliResult<()> {
    let config = sources.load_config()?;
    match format {
        OutputFormat::Table => {
            output::print_heading("Engine Configuration");
            println!("  require_unique_ids:       {}", config.require_unique_ids);
            println!("  grid_columns:             {}", config.grid_columns);
            println!("  annotation_depth_warning: {}", config.annotation_depth_warning);
        }
        _ => println!("{}", output::render_structured(&config, format)?),
    }
    Ok(())
}
