//! Environment variable access.
//!
//! Every `CHPL_*` lookup goes through [`Environment`] so selections can be
//! evaluated against the real process or against a fixed map.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

// =============================================================================
// ENVIRONMENT
// =============================================================================

/// Source of environment variables.
pub trait Environment {
    /// Value of `key`, or `None` when unset.
    fn var(&self, key: &str) -> Option<String>;
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        // Presence is what matters; non-UTF-8 values still count as set.
        std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}

impl<S: BuildHasher> Environment for HashMap<String, String, S> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl Environment for BTreeMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

/// Value of `key` if it is set to a non-empty string.
pub fn non_empty<E: Environment + ?Sized>(env: &E, key: &str) -> Option<String> {
    env.var(key).filter(|value| !value.is_empty())
}
