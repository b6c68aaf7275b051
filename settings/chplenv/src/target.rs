//! Target Facts
//!
//! Architecture, platform and compiler lookups used by the decision table.

use crate::env::{non_empty, Environment};
use crate::types::TargetFacts;
use std::path::{Component, Path};

// =============================================================================
// PROBE INTERFACE
// =============================================================================

/// Which side of a cross build a query is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Machine running the compiler
    Host,
    /// Machine running the compiled program
    Target,
}

impl Side {
    const fn arch_var(self) -> &'static str {
        match self {
            Self::Host => "CHPL_HOST_ARCH",
            Self::Target => "CHPL_TARGET_ARCH",
        }
    }

    const fn platform_var(self) -> &'static str {
        match self {
            Self::Host => "CHPL_HOST_PLATFORM",
            Self::Target => "CHPL_TARGET_PLATFORM",
        }
    }

    const fn compiler_var(self) -> &'static str {
        match self {
            Self::Host => "CHPL_HOST_COMPILER",
            Self::Target => "CHPL_TARGET_COMPILER",
        }
    }
}

/// Provider of build facts.
///
/// Missing facts are reported as empty strings, never as errors.
pub trait TargetProbe {
    /// Architecture name. `lcd` asks for the least-common-denominator form.
    fn arch(&self, side: Side, lcd: bool) -> String;

    /// Platform name, e.g. `linux64` or `cray-xc`.
    fn platform(&self, side: Side) -> String;

    /// Compiler name, e.g. `gnu` or `cray-prgenv-cray`.
    fn compiler(&self, side: Side) -> String;

    /// True when the toolchain was loaded through the vendor Chapel module.
    fn using_vendor_module(&self) -> bool;

    /// All facts the tasking table needs, for the target side.
    fn target_facts(&self) -> TargetFacts {
        TargetFacts {
            arch: self.arch(Side::Target, true),
            platform: self.platform(Side::Target),
            compiler: self.compiler(Side::Target),
            using_vendor_module: self.using_vendor_module(),
        }
    }
}

impl<P: TargetProbe + ?Sized> TargetProbe for &P {
    fn arch(&self, side: Side, lcd: bool) -> String {
        (**self).arch(side, lcd)
    }

    fn platform(&self, side: Side) -> String {
        (**self).platform(side)
    }

    fn compiler(&self, side: Side) -> String {
        (**self).compiler(side)
    }

    fn using_vendor_module(&self) -> bool {
        (**self).using_vendor_module()
    }
}

// =============================================================================
// ENVIRONMENT PROBE
// =============================================================================

/// Probe answering from `CHPL_*` variables.
#[derive(Debug, Clone, Default)]
pub struct EnvProbe<E> {
    env: E,
}

impl<E: Environment> EnvProbe<E> {
    /// Create a probe over `env`.
    pub const fn new(env: E) -> Self {
        Self { env }
    }

    /// The underlying environment.
    pub const fn env(&self) -> &E {
        &self.env
    }
}

impl<E: Environment> TargetProbe for EnvProbe<E> {
    fn arch(&self, side: Side, lcd: bool) -> String {
        let arch = non_empty(&self.env, side.arch_var()).unwrap_or_default();
        if lcd && arch == "native" {
            return "none".to_owned();
        }
        arch
    }

    fn platform(&self, side: Side) -> String {
        if let Some(platform) = non_empty(&self.env, side.platform_var()) {
            return platform;
        }
        match side {
            // Target defaults to whatever the host resolves to
            Side::Target => self.platform(Side::Host),
            Side::Host => non_empty(&self.env, "CHPL_PLATFORM")
                .unwrap_or_else(|| host_platform().to_owned()),
        }
    }

    fn compiler(&self, side: Side) -> String {
        non_empty(&self.env, side.compiler_var()).unwrap_or_default()
    }

    fn using_vendor_module(&self) -> bool {
        match (
            non_empty(&self.env, "CHPL_HOME"),
            non_empty(&self.env, "CHPL_MODULE_HOME"),
        ) {
            (Some(home), Some(module_home)) => same_dir(&home, &module_home),
            _ => false,
        }
    }
}

/// Lexical path comparison after collapsing `.` and `..`; no filesystem access.
fn same_dir(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

fn normalize(path: &str) -> Vec<Component<'_>> {
    let mut parts = Vec::new();
    for component in Path::new(path).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            _ => parts.push(component),
        }
    }
    parts
}

// =============================================================================
// HOST DETECTION
// =============================================================================

/// Platform name of the machine this library was built for.
#[must_use]
pub fn host_platform() -> &'static str {
    let wide = cfg!(target_pointer_width = "64");
    match std::env::consts::OS {
        "linux" if wide => "linux64",
        "linux" => "linux32",
        "macos" => "darwin",
        "netbsd" if wide => "netbsd64",
        "netbsd" => "netbsd32",
        "windows" if cfg!(target_env = "gnu") && wide => "cygwin64",
        "windows" if cfg!(target_env = "gnu") => "cygwin32",
        other => other,
    }
}
