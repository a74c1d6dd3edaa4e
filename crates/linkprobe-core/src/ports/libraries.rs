//! Ports for the local, compression and database libraries.

use crate::error::DependencyResult;

/// The workspace's own `foo` library.
#[cfg_attr(test, mockall::automock)]
pub trait LocalLibraryPort {
    /// Primary entry point.
    fn foo(&self) -> DependencyResult<i32>;

    /// Secondary entry point, called by the extended probe only.
    fn bar(&self) -> DependencyResult<i32>;
}

/// The compression library (zlib).
#[cfg_attr(test, mockall::automock)]
pub trait CompressionPort {
    /// Runtime version string, as reported by `zlibVersion()`.
    fn version(&self) -> DependencyResult<String>;
}

/// The embedded database library (SQLite).
#[cfg_attr(test, mockall::automock)]
pub trait DatabasePort {
    /// Runtime version string, as reported by `sqlite3_libversion()`.
    fn version(&self) -> DependencyResult<String>;
}
