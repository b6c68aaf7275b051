//! Tasks Command
//!
//! Writes the selected tasking backend followed by a newline.

use anyhow::{Context, Result};
use chplenv::Selection;
use std::io::Write;
use tracing::debug;

// =============================================================================
// PRINT
// =============================================================================

/// Write `selection` to `out`, and optionally the reason to `diag`.
///
/// # Errors
///
/// Fails if `out` or `diag` cannot be written, or `out` cannot be flushed.
pub fn print_tasks<W: Write, D: Write>(
    out: &mut W,
    diag: &mut D,
    selection: &Selection,
    explain: bool,
) -> Result<()> {
    debug!(tasks = %selection.tasks, rule = %selection.rule, "printing selection");

    if explain {
        writeln!(diag, "CHPL_TASKS={} ({})", selection.tasks, selection.rule)
            .context("Failed to write explanation")?;
        if let Some(facts) = &selection.facts {
            writeln!(diag, "  {facts}").context("Failed to write explanation")?;
        }
    }

    writeln!(out, "{}", selection.tasks).context("Failed to write CHPL_TASKS to stdout")?;
    out.flush().context("Failed to flush stdout")?;

    Ok(())
}
