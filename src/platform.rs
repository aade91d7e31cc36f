//! Purpose: Host platform identity and per-platform shared-library conventions.
//! Exports: `Platform`, `LibraryDescriptor`.
//! Invariants: Descriptor selection is total; exactly one descriptor per platform.
//! Invariants: Branch priority is Windows, then Darwin, then POSIX-generic.

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Platform {
    Windows,
    Darwin,
    /// Any other platform; treated as Linux/POSIX-generic.
    Posix,
}

impl Platform {
    pub fn host() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::Darwin
        } else {
            Platform::Posix
        }
    }
}

/// Where a platform's dynamic loader looks for shared libraries and which
/// environment variable steers it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LibraryDescriptor {
    pub hook_name: &'static str,
    pub subdirectory: &'static str,
    /// File suffix without the dot.
    pub extension: &'static str,
    pub environment_variable: &'static str,
}

impl LibraryDescriptor {
    pub fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Windows => Self {
                hook_name: "path_dll",
                subdirectory: "bin",
                extension: "dll",
                environment_variable: "PATH",
            },
            Platform::Darwin => Self {
                hook_name: "dyld_library_path",
                subdirectory: "lib",
                extension: "dylib",
                environment_variable: "DYLD_LIBRARY_PATH",
            },
            Platform::Posix => Self {
                hook_name: "ld_library_path",
                subdirectory: "lib",
                extension: "so",
                environment_variable: "LD_LIBRARY_PATH",
            },
        }
    }
}
