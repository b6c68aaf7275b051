//! chpl-tasks CLI
//!
//! Prints the tasking backend for the current build target.

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::print_tasks;
use tracing_subscriber::EnvFilter;

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "chpl-tasks")]
#[command(about = "Print the CHPL_TASKS setting for the current target", long_about = None)]
#[command(version)]
struct Cli {
    /// Explain the selection on stderr
    #[arg(long)]
    explain: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    print_tasks(
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
        chplenv::tasks_selection(),
        cli.explain,
    )?;

    Ok(())
}

/// Logs go to stderr; stdout carries only the backend name.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .init();
}
