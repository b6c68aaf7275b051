//! Memoized Selector
//!
//! Resolves `CHPL_TASKS` once and serves the cached value afterwards.

use super::rules;
use crate::env::{Environment, ProcessEnv};
use crate::target::{EnvProbe, TargetProbe};
use crate::types::{Rule, Selection, TargetFacts, Tasks};
use std::sync::OnceLock;
use tracing::{debug, trace};

// =============================================================================
// SELECTOR
// =============================================================================

/// Tasking backend selector with a one-time cache.
///
/// The first call to [`get`](Self::get) or [`selection`](Self::selection)
/// reads the environment and probes the target. Later calls return the same
/// value even if the environment has changed. Concurrent first calls publish
/// exactly one result.
#[derive(Debug)]
pub struct TaskingSelector<E, P> {
    env: E,
    probe: P,
    cache: OnceLock<Selection>,
}

impl TaskingSelector<ProcessEnv, EnvProbe<ProcessEnv>> {
    /// Selector over the process environment.
    pub const fn from_process() -> Self {
        Self::new(ProcessEnv, EnvProbe::new(ProcessEnv))
    }
}

impl<E: Environment, P: TargetProbe> TaskingSelector<E, P> {
    /// Create a selector. Nothing is read until the first query.
    pub const fn new(env: E, probe: P) -> Self {
        Self {
            env,
            probe,
            cache: OnceLock::new(),
        }
    }

    /// Backend identifier, e.g. `qthreads`.
    pub fn get(&self) -> &str {
        self.selection().tasks.as_str()
    }

    /// Cached selection, computing it on first use.
    pub fn selection(&self) -> &Selection {
        if let Some(cached) = self.cache.get() {
            trace!(tasks = %cached.tasks, "CHPL_TASKS cache hit");
            return cached;
        }
        self.cache.get_or_init(|| self.select())
    }

    /// True once a selection has been made.
    pub fn is_cached(&self) -> bool {
        self.cache.get().is_some()
    }

    /// Target facts as the decision table sees them. Not cached.
    pub fn gather_facts(&self) -> TargetFacts {
        self.probe.target_facts()
    }

    fn select(&self) -> Selection {
        if let Some(raw) = rules::override_value(&self.env) {
            debug!(tasks = %raw, "CHPL_TASKS taken from environment");
            return Selection {
                tasks: Tasks::Override(raw),
                rule: Rule::Override,
                facts: None,
            };
        }

        let facts = self.gather_facts();
        let (backend, rule) = rules::decide(&facts);
        debug!(
            tasks = %backend,
            rule = %rule,
            arch = %facts.arch,
            platform = %facts.platform,
            compiler = %facts.compiler,
            module = facts.using_vendor_module,
            "CHPL_TASKS selected"
        );

        Selection {
            tasks: Tasks::Backend(backend),
            rule,
            facts: Some(facts),
        }
    }
}
