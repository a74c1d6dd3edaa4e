//! Probe error types.
//!
//! Every dependency call returns [`DependencyResult`]. The runner wraps a
//! failure in [`ProbeError::Dependency`] together with which dependency it
//! was. Window enumeration failures are their own type because the runner
//! recovers from them instead of stopping.

use std::fmt;
use std::io;
use std::str::Utf8Error;

use thiserror::Error;

/// Failure of a single call into a linked dependency.
#[derive(Debug, Error)]
pub enum DependencyError {
    /// The call returned a null pointer where a value was expected.
    #[error("{call} returned a null pointer")]
    NullPointer { call: &'static str },

    /// The call returned a C string that is not valid UTF-8.
    #[error("{call} returned a string that is not valid UTF-8")]
    InvalidUtf8 {
        call: &'static str,
        #[source]
        source: Utf8Error,
    },

    /// The call returned a value outside its documented range.
    #[error("{call} returned out-of-range value {value}")]
    OutOfRange { call: &'static str, value: i64 },
}

/// Result type for dependency calls.
pub type DependencyResult<T> = Result<T, DependencyError>;

/// Why no window enumeration could be obtained.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowListError {
    /// The platform returned a null enumeration reference.
    #[error("window list creation returned a null enumeration")]
    NullEnumeration,

    /// The target has no window server API this probe can call.
    #[error("window enumeration is not supported on {0}")]
    Unsupported(&'static str),
}

/// The dependency a probe step talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyKind {
    LocalLibrary,
    Compression,
    Database,
    WindowServer,
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::LocalLibrary => "foo",
            Self::Compression => "zlib",
            Self::Database => "sqlite3",
            Self::WindowServer => "window server",
        })
    }
}

/// Errors that stop a probe run.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// A dependency call failed.
    #[error("{dependency} probe failed")]
    Dependency {
        dependency: DependencyKind,
        #[source]
        source: DependencyError,
    },

    /// Writing a probe line failed.
    #[error("failed to write probe output")]
    Output(#[from] io::Error),
}

impl ProbeError {
    pub const fn dependency(dependency: DependencyKind, source: DependencyError) -> Self {
        Self::Dependency { dependency, source }
    }
}

/// Result type for probe runs.
pub type ProbeResult<T> = Result<T, ProbeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_dependency_error_chain() {
        let err = ProbeError::dependency(
            DependencyKind::Compression,
            DependencyError::NullPointer {
                call: "zlibVersion",
            },
        );
        assert_eq!(err.to_string(), "zlib probe failed");
        assert_eq!(
            err.source().map(ToString::to_string).as_deref(),
            Some("zlibVersion returned a null pointer")
        );
    }

    #[test]
    fn test_window_list_error_messages() {
        assert_eq!(
            WindowListError::Unsupported("linux").to_string(),
            "window enumeration is not supported on linux"
        );
        assert_eq!(
            WindowListError::NullEnumeration.to_string(),
            "window list creation returned a null enumeration"
        );
    }
}
