//! # chplenv
//!
//! Build-environment settings for the Chapel toolchain.
//! Currently covers the tasking backend (`CHPL_TASKS`).

//! # Usage
//! ```rust
//! use std::collections::HashMap;
//! use chplenv::{EnvProbe, TaskingSelector};
//!
//! // 1. Process-wide (memoized for the lifetime of the process)
//! let tasks = chplenv::tasks();
//! assert!(!tasks.is_empty());
//!
//! // 2. Scoped to an explicit environment
//! let env: HashMap<String, String> = [
//!     ("CHPL_TARGET_PLATFORM", "cygwin64"),
//!     ("CHPL_TARGET_ARCH", "x86_64"),
//! ]
//! .into_iter()
//! .map(|(k, v)| (k.to_owned(), v.to_owned()))
//! .collect();
//!
//! let selector = TaskingSelector::new(env.clone(), EnvProbe::new(env));
//! assert_eq!(selector.get(), "fifo");
//! ```

// =============================================================================
// MODULES
// =============================================================================

mod engine;
mod env;
mod target;
mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use engine::rules;
pub use engine::selector::TaskingSelector;
pub use env::{non_empty, Environment, ProcessEnv};
pub use target::{host_platform, EnvProbe, Side, TargetProbe};
pub use types::{Rule, Selection, TargetFacts, TaskingBackend, Tasks, UnknownBackendError};

use std::sync::LazyLock;

/// Name of the override variable.
pub const CHPL_TASKS: &str = "CHPL_TASKS";

static PROCESS_SELECTOR: LazyLock<TaskingSelector<ProcessEnv, EnvProbe<ProcessEnv>>> =
    LazyLock::new(TaskingSelector::from_process);

/// Returns the tasking backend for this process.
///
/// Computed on first call from the process environment, then fixed until exit.
#[must_use]
pub fn tasks() -> &'static str {
    PROCESS_SELECTOR.get()
}

/// Returns the process-wide selection together with the rule that produced it.
#[must_use]
pub fn tasks_selection() -> &'static Selection {
    PROCESS_SELECTOR.selection()
}
