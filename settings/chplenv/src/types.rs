//! Shared types used across the chplenv library.

use core::fmt;
use core::str::FromStr;
use thiserror::Error;

// =============================================================================
// TASKING BACKENDS
// =============================================================================

/// Tasking backends the decision table can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskingBackend {
    /// One OS thread per task
    Fifo,
    /// Qthreads lightweight tasks (default)
    Qthreads,
    /// Cray muxed user-level threads
    Muxed,
}

impl TaskingBackend {
    /// All known backends, in declaration order.
    pub const ALL: [Self; 3] = [Self::Fifo, Self::Qthreads, Self::Muxed];

    /// Identifier as it appears in `CHPL_TASKS`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fifo => "fifo",
            Self::Qthreads => "qthreads",
            Self::Muxed => "muxed",
        }
    }
}

impl fmt::Display for TaskingBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskingBackend {
    type Err = UnknownBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|backend| backend.as_str() == s)
            .ok_or_else(|| UnknownBackendError::new(s))
    }
}

// =============================================================================
// SELECTION
// =============================================================================

/// The value chosen for `CHPL_TASKS`.
///
/// Overrides are kept raw: any non-empty string is trusted as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tasks {
    /// Produced by the decision table
    Backend(TaskingBackend),
    /// Taken verbatim from the environment
    Override(String),
}

impl Tasks {
    /// Backend identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Backend(backend) => backend.as_str(),
            Self::Override(raw) => raw,
        }
    }

    /// The known backend this value names, if any.
    #[must_use]
    pub fn backend(&self) -> Option<TaskingBackend> {
        match self {
            Self::Backend(backend) => Some(*backend),
            Self::Override(raw) => raw.parse().ok(),
        }
    }

    /// True when the value came from `CHPL_TASKS`.
    #[must_use]
    pub const fn is_override(&self) -> bool {
        matches!(self, Self::Override(_))
    }
}

impl fmt::Display for Tasks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Row of the decision table that produced a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `CHPL_TASKS` was set
    Override,
    /// Cray XC/XE/XK platform with the Chapel module loaded
    CrayModule,
    /// Platform, architecture or compiler without qthreads support
    Fifo,
    /// Nothing else matched
    Default,
}

impl Rule {
    /// Short human-readable reason.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Override => "CHPL_TASKS override",
            Self::CrayModule => "cray-x* platform using the Chapel module",
            Self::Fifo => "knc, cygwin*, netbsd* or cray-prgenv-cray",
            Self::Default => "default",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// A cached selection and the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Selected value
    pub tasks: Tasks,
    /// Rule that matched
    pub rule: Rule,
    /// Facts the table was evaluated against (`None` for overrides)
    pub facts: Option<TargetFacts>,
}

// =============================================================================
// TARGET FACTS
// =============================================================================

/// Facts about the build target, gathered once per evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetFacts {
    /// Target architecture, least-common-denominator form
    pub arch: String,
    /// Target platform
    pub platform: String,
    /// Target compiler
    pub compiler: String,
    /// Running under the vendor-provided Chapel module
    pub using_vendor_module: bool,
}

impl TargetFacts {
    /// Build facts from borrowed strings.
    #[must_use]
    pub fn new(arch: &str, platform: &str, compiler: &str, using_vendor_module: bool) -> Self {
        Self {
            arch: arch.to_owned(),
            platform: platform.to_owned(),
            compiler: compiler.to_owned(),
            using_vendor_module,
        }
    }
}

impl fmt::Display for TargetFacts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "arch={} platform={} compiler={} module={}",
            self.arch, self.platform, self.compiler, self.using_vendor_module
        )
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Error for names that are not a known tasking backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tasking backend '{name}' (expected fifo, qthreads or muxed)")]
pub struct UnknownBackendError {
    name: String,
}

impl UnknownBackendError {
    /// Create a new `UnknownBackendError` for `name`.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
        }
    }

    /// The rejected name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
