//! Purpose: Contracts between environment extensions and the host orchestrator.
//! Exports: `EnvironmentExtension`, `HookFactory`, `EnvironmentHookSpec`, `HookMode`.
//! Role: Seam types; hook rendering and plugin discovery live in the host.
//! Invariants: `EnvironmentHookSpec` is a request value, constructed per call and never reused.
//! Invariants: Factory results are opaque to extensions and returned unmodified.
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Error;

/// How a generated hook combines the new path segment with the variable's
/// existing value.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HookMode {
    /// Insert at the front of the existing value rather than replacing it.
    Prepend,
}

/// One environment-mutation request, handed to the host's hook factory.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct EnvironmentHookSpec {
    pub hook_name: String,
    pub prefix_path: PathBuf,
    pub package_name: String,
    pub environment_variable: String,
    pub subdirectory: String,
    pub mode: HookMode,
}

/// Generates hook artifacts (e.g. shell fragments) from a spec. Implemented
/// by the host; extensions only decide whether to call it.
pub trait HookFactory {
    fn create_environment_hook(&self, spec: &EnvironmentHookSpec) -> Result<Vec<PathBuf>, Error>;
}

/// Extension point the host discovers and invokes once per installed package.
pub trait EnvironmentExtension {
    /// Stable identifier used by the host to name this extension.
    fn name(&self) -> &'static str;

    /// Returns the hook artifacts needed for `package_name` installed at
    /// `prefix_path`, or an empty vec when no hook is warranted.
    fn create_environment_hooks(
        &self,
        factory: &dyn HookFactory,
        prefix_path: &Path,
        package_name: &str,
    ) -> Result<Vec<PathBuf>, Error>;
}
