//! Insight CLI - Command-line interface for the Insight classification engine
//!
//! This CLI provides operators and developers with a terminal interface to:
//! - Score constitutional (dosha) answer vectors
//! - Score personality answer vectors
//! - Attach narrative templates to either report
//! - Inspect the personality catalog and rule chains

use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod input;
mod output;

use commands::{constitution, personality, reference};
use config::CliConfig;
pub use error::{CliError, CliResult};
use output::OutputFormat;

/// Insight CLI application
#[derive(Parser)]
#[command(name = "insight")]
#[command(about = "Insight - questionnaire classification engine CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "INSIGHT_CONFIG")]
    config: Option<PathBuf>,

    /// Output format (table, json, yaml)
    #[arg(short, long)]
    output: Option<OutputFormat>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Classify a 35-answer constitutional vector
    Constitution(constitution::ConstitutionArgs),

    /// Score a 48-answer personality vector
    Personality(personality::PersonalityArgs),

    /// List the named personality types
    Catalog,

    /// Show the ordered classification rule chains
    Rules,
}

/// Settings shared by every command once flags and config are combined.
pub(crate) struct Context {
    pub format: OutputFormat,
    pub templates_path: Option<PathBuf>,
}

impl Context {
    fn resolve(cli: &Cli, config: CliConfig) -> Self {
        Self {
            format: cli.output.or(config.output).unwrap_or_default(),
            templates_path: config.templates_path,
        }
    }

    /// A per-command `--templates` flag wins over the configured path.
    pub fn templates(&self, flag: Option<PathBuf>) -> Option<PathBuf> {
        flag.or_else(|| self.templates_path.clone())
    }
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

    // Initialize tracing. A subscriber installed by an earlier call in the
    // same process stays in place.
    let filter = if cli.verbose { "debug" } else { "info" };
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

    let config = CliConfig::load(cli.config.as_deref())?;
    let ctx = Context::resolve(&cli, config);
    debug!(
        config = ?cli.config,
        format = ?ctx.format,
        templates = ?ctx.templates_path,
        "resolved cli settings"
    );

    match cli.command {
        Commands::Constitution(args) => constitution::execute(args, &ctx),
        Commands::Personality(args) => personality::execute(args, &ctx),
        Commands::Catalog => reference::show_catalog(ctx.format),
        Commands::Rules => reference::show_rules(ctx.format),
    }
}
