//! # natlas CLI entry point
//!
//! Parses command-line arguments, installs logging, builds the shared
//! catalog, and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use natlas_cli::config::AppContext;
use natlas_cli::list::{run_list, ListArgs};
use natlas_cli::nation::{run_compare, run_metrics, run_neighbors, run_show, CodeArgs, CompareArgs};
use natlas_cli::validate::{run_validate, ValidateArgs};
use natlas_cli::EXIT_FAILURE;

/// natlas: query, compare, and validate a catalog of nations.
#[derive(Parser, Debug)]
#[command(name = "natlas", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true, env = "NATLAS_CONFIG")]
    config: Option<PathBuf>,

    /// Catalog JSON file to use instead of the built-in dataset.
    #[arg(long, global = true, env = "NATLAS_CATALOG")]
    catalog: Option<PathBuf>,

    /// Emit log events as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Filter, sort, and limit the catalog.
    List(ListArgs),

    /// Show one nation.
    Show(CodeArgs),

    /// Compare two nations.
    Compare(CompareArgs),

    /// Derived metrics and power indices for one nation.
    Metrics(CodeArgs),

    /// Catalogued land-border neighbors of one nation.
    Neighbors(CodeArgs),

    /// Validate the catalog or a JSON file of nation documents.
    Validate(ValidateArgs),
}

/// Filter from `-v` count. Without `-v`, `RUST_LOG` is honored when set.
fn env_filter(verbose: u8) -> EnvFilter {
    if verbose == 0 {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return filter;
        }
    }
    match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

fn init_tracing(verbose: u8, json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "natlas starting");

    let ctx = match AppContext::load(cli.config.as_deref(), cli.catalog.as_deref()) {
        Ok(ctx) => ctx,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    let mut stdout = std::io::stdout().lock();
    let result = match &cli.command {
        Commands::List(args) => run_list(args, &ctx, &mut stdout),
        Commands::Show(args) => run_show(args, &ctx, &mut stdout),
        Commands::Compare(args) => run_compare(args, &ctx, &mut stdout),
        Commands::Metrics(args) => run_metrics(args, &ctx, &mut stdout),
        Commands::Neighbors(args) => run_neighbors(args, &ctx, &mut stdout),
        Commands::Validate(args) => run_validate(args, &ctx, &mut stdout),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
