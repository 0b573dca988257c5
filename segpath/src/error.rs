//! Error types for the segpath library.
//!
//! Parsing never fails and type checks never fail, so every variant here
//! comes from an operating-system call made on behalf of a path. Each
//! variant carries the path (or the missing environment fact) it was
//! raised for, plus the underlying `std::io::Error` where there is one.

use std::io;

use thiserror::Error;

/// Result type alias for operations that may fail with a segpath error.
///
/// # Examples
///
/// ```
/// use segpath::{Error, Result};
///
/// fn example_operation() -> Result<u64> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the segpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A file expected to be readable could not be opened or measured, or a
    /// directory could not be enumerated.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// The path the operation was performed on.
        path: String,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// Absolute-path resolution could not complete.
    #[error("cannot resolve {path} to an absolute path: {source}")]
    Resolution {
        /// The path that could not be resolved.
        path: String,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// The process environment (working directory, executable location)
    /// could not be queried.
    #[error("cannot query {what}: {source}")]
    Environment {
        /// Which environment fact was being queried.
        what: &'static str,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// A directory could not be created for a reason other than it already
    /// existing.
    #[error("cannot create directory {path}: {source}")]
    CreateDirectory {
        /// The directory that could not be created.
        path: String,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// An unrecognized path style name was provided.
    #[error("invalid path style '{value}' (expected windows, unix, native or unknown)")]
    InvalidStyle {
        /// The rejected value.
        value: String,
    },
}

impl Error {
    fn io_source(&self) -> Option<&io::Error> {
        match self {
            Self::Io { source, .. }
            | Self::Resolution { source, .. }
            | Self::Environment { source, .. }
            | Self::CreateDirectory { source, .. } => Some(source),
            Self::InvalidStyle { .. } => None,
        }
    }

    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::Error;
    /// use std::io;
    ///
    /// let err = Error::Resolution {
    ///     path: "missing".to_string(),
    ///     source: io::Error::from(io::ErrorKind::NotFound),
    /// };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.io_source()
            .is_some_and(|e| e.kind() == io::ErrorKind::NotFound)
    }

    /// Check if error is permission-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use segpath::Error;
    /// use std::io;
    ///
    /// let err = Error::CreateDirectory {
    ///     path: "/restricted".to_string(),
    ///     source: io::Error::from(io::ErrorKind::PermissionDenied),
    /// };
    /// assert!(err.is_permission_denied());
    /// ```
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        self.io_source()
            .is_some_and(|e| e.kind() == io::ErrorKind::PermissionDenied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = Error::Io {
            path: "/data/report.csv".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "file not found"),
        };
        let display = format!("{err}");
        assert!(display.contains("I/O error"));
        assert!(display.contains("/data/report.csv"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_resolution_error_display() {
        let err = Error::Resolution {
            path: "../missing".to_string(),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        let display = format!("{err}");
        assert!(display.contains("cannot resolve"));
        assert!(display.contains("../missing"));
    }

    #[test]
    fn test_environment_error_display() {
        let err = Error::Environment {
            what: "current directory",
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        let display = format!("{err}");
        assert!(display.contains("current directory"));
        assert!(err.is_permission_denied());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_create_directory_error_display() {
        let err = Error::CreateDirectory {
            path: "/root/locked".to_string(),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        let display = format!("{err}");
        assert!(display.contains("cannot create directory"));
        assert!(display.contains("/root/locked"));
    }

    #[test]
    fn test_invalid_style_error() {
        let err = Error::InvalidStyle {
            value: "vms".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("vms"));
        assert!(!err.is_not_found());
        assert!(!err.is_permission_denied());
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error as _;

        let err = Error::Io {
            path: "x".to_string(),
            source: io::Error::new(io::ErrorKind::Other, "boom"),
        };
        assert!(err.source().is_some());
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<u64> {
            Err(Error::InvalidStyle {
                value: "test".to_string(),
            })
        }

        assert!(returns_result().is_err());
    }
}
