// Structured error modeling shared across the crate.
use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Internal,
    Usage,
    NotFound,
    Permission,
    Io,
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    path: Option<PathBuf>,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            path: None,
            source: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.kind)?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path.display())?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn StdError + 'static))
    }
}

pub fn io_error_kind(err: &io::Error) -> ErrorKind {
    match err.kind() {
        io::ErrorKind::NotFound => ErrorKind::NotFound,
        io::ErrorKind::PermissionDenied => ErrorKind::Permission,
        _ => ErrorKind::Io,
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, ErrorKind, io_error_kind};
    use std::io;

    #[test]
    fn io_errors_map_to_expected_kinds() {
        let err = io::Error::from(io::ErrorKind::NotFound);
        assert_eq!(io_error_kind(&err), ErrorKind::NotFound);

        let err = io::Error::from(io::ErrorKind::PermissionDenied);
        assert_eq!(io_error_kind(&err), ErrorKind::Permission);

        let err = io::Error::from(io::ErrorKind::Interrupted);
        assert_eq!(io_error_kind(&err), ErrorKind::Io);
    }

    #[test]
    fn display_includes_message_and_path() {
        let err = Error::new(ErrorKind::Permission)
            .with_message("cannot list directory")
            .with_path("/opt/pkg/lib");
        let rendered = err.to_string();
        assert!(rendered.contains("Permission"));
        assert!(rendered.contains("cannot list directory"));
        assert!(rendered.contains("/opt/pkg/lib"));
    }
}
