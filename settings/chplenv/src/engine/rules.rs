//! Tasking Decision Table
//!
//! Chooses the tasking backend from the target facts. First matching rule wins.

use crate::env::{non_empty, Environment};
use crate::types::{Rule, TargetFacts, TaskingBackend};
use crate::CHPL_TASKS;

/// Platform prefix of Cray XC/XE/XK systems.
pub const CRAY_X_PREFIX: &str = "cray-x";

/// Architecture without qthreads support.
pub const KNC_ARCH: &str = "knc";

/// Platform prefixes without qthreads support.
pub const FIFO_PLATFORM_PREFIXES: [&str; 2] = ["cygwin", "netbsd"];

/// Compiler without qthreads support.
pub const CRAY_CCE_COMPILER: &str = "cray-prgenv-cray";

// =============================================================================
// OVERRIDE
// =============================================================================

/// Raw `CHPL_TASKS` value, if set and non-empty.
///
/// Not validated against the known backends.
pub fn override_value<E: Environment + ?Sized>(env: &E) -> Option<String> {
    non_empty(env, CHPL_TASKS)
}

// =============================================================================
// DECISION TABLE
// =============================================================================

/// Evaluates the decision table against `facts`.
#[must_use]
pub fn decide(facts: &TargetFacts) -> (TaskingBackend, Rule) {
    // 1. Cray module builds ship muxed
    if facts.platform.starts_with(CRAY_X_PREFIX) && facts.using_vendor_module {
        return (TaskingBackend::Muxed, Rule::CrayModule);
    }

    // 2. Targets qthreads cannot run on
    let fifo_platform = FIFO_PLATFORM_PREFIXES
        .iter()
        .any(|prefix| facts.platform.starts_with(prefix));

    if facts.arch == KNC_ARCH || fifo_platform || facts.compiler == CRAY_CCE_COMPILER {
        return (TaskingBackend::Fifo, Rule::Fifo);
    }

    // 3. Everything else
    (TaskingBackend::Qthreads, Rule::Default)
}
