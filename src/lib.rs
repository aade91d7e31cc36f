//! Purpose: Environment-hook resolution plugin for installed package prefixes.
//! Exports: `error`, `hook`, `library_path`, `platform`.
//! Role: Library consumed by a build orchestrator's environment step; no binary.
//! Invariants: Resolution is a pure decision over filesystem state and platform identity.
//! Invariants: Hook generation itself is delegated to the host via `hook::HookFactory`.
pub mod error;
pub mod hook;
pub mod library_path;
pub mod platform;

pub use error::{Error, ErrorKind};
pub use hook::{EnvironmentExtension, EnvironmentHookSpec, HookFactory, HookMode};
pub use library_path::LibraryPathEnvironment;
pub use platform::{LibraryDescriptor, Platform};
