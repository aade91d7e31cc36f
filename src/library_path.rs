//! Purpose: Decide whether an installed package needs a library search-path hook.
//! Exports: `LibraryPathEnvironment`.
//! Role: Environment extension; probes one subdirectory and delegates hook creation.
//! Invariants: Pure decision over filesystem state and platform identity at call time.
//! Invariants: A missing search directory means "no hook", never an error.
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, io_error_kind};
use crate::hook::{EnvironmentExtension, EnvironmentHookSpec, HookFactory, HookMode};
use crate::platform::{LibraryDescriptor, Platform};

/// Extends the platform-specific loader search path when a package ships
/// shared libraries.
///
/// On Linux `LD_LIBRARY_PATH` is extended if `lib` contains any `.so` files.
/// On Darwin `DYLD_LIBRARY_PATH` is extended if `lib` contains any `.dylib`
/// files. On Windows `PATH` is extended if `bin` contains any `.dll` files.
#[derive(Clone, Copy, Debug, Default)]
pub struct LibraryPathEnvironment;

impl LibraryPathEnvironment {
    pub fn new() -> Self {
        Self
    }

    /// Same decision as [`EnvironmentExtension::create_environment_hooks`]
    /// but with the platform supplied by the caller.
    pub fn resolve_hooks_for(
        &self,
        platform: Platform,
        factory: &dyn HookFactory,
        prefix_path: &Path,
        package_name: &str,
    ) -> Result<Vec<PathBuf>, Error> {
        let descriptor = LibraryDescriptor::for_platform(platform);
        let search_dir = prefix_path.join(descriptor.subdirectory);
        tracing::debug!(path = %search_dir.display(), "checking for shared libraries");

        if !contains_extension(&search_dir, descriptor.extension)? {
            return Ok(Vec::new());
        }
        factory.create_environment_hook(&EnvironmentHookSpec {
            hook_name: descriptor.hook_name.to_string(),
            prefix_path: prefix_path.to_path_buf(),
            package_name: package_name.to_string(),
            environment_variable: descriptor.environment_variable.to_string(),
            subdirectory: descriptor.subdirectory.to_string(),
            mode: HookMode::Prepend,
        })
    }
}

impl EnvironmentExtension for LibraryPathEnvironment {
    fn name(&self) -> &'static str {
        "library_path"
    }

    fn create_environment_hooks(
        &self,
        factory: &dyn HookFactory,
        prefix_path: &Path,
        package_name: &str,
    ) -> Result<Vec<PathBuf>, Error> {
        self.resolve_hooks_for(Platform::host(), factory, prefix_path, package_name)
    }
}

// Suffix match only; an entry that is itself a directory still counts.
fn contains_extension(dir: &Path, extension: &str) -> Result<bool, Error> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err)
            if matches!(
                err.kind(),
                io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
            ) =>
        {
            return Ok(false);
        }
        Err(err) => {
            return Err(Error::new(io_error_kind(&err))
                .with_message("failed to list search directory")
                .with_path(dir)
                .with_source(err));
        }
    };

    for entry in entries {
        let entry = entry.map_err(|err| {
            Error::new(io_error_kind(&err))
                .with_message("failed to read directory entry")
                .with_path(dir)
                .with_source(err)
        })?;
        let name = entry.file_name();
        if Path::new(&name).extension().is_some_and(|ext| ext == extension) {
            return Ok(true);
        }
    }
    Ok(false)
}
