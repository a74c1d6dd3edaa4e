//! Adapters for `foo`, zlib and SQLite.

use linkprobe_core::{CompressionPort, DatabasePort, DependencyResult, LocalLibraryPort};
use tracing::trace;

use crate::cstr::version_string;

/// `LocalLibraryPort` over `foo-sys`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FooLibrary;

impl LocalLibraryPort for FooLibrary {
    fn foo(&self) -> DependencyResult<i32> {
        trace!(version = foo_sys::LIBRARY_VERSION, "calling foo()");
        Ok(foo_sys::foo())
    }

    fn bar(&self) -> DependencyResult<i32> {
        trace!("calling bar()");
        Ok(foo_sys::bar())
    }
}

/// `CompressionPort` over `libz-sys`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Zlib;

impl CompressionPort for Zlib {
    fn version(&self) -> DependencyResult<String> {
        // SAFETY: zlibVersion takes no arguments and returns a static string.
        unsafe { version_string("zlibVersion", libz_sys::zlibVersion()) }
    }
}

/// `DatabasePort` over `libsqlite3-sys`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sqlite;

impl DatabasePort for Sqlite {
    fn version(&self) -> DependencyResult<String> {
        // SAFETY: sqlite3_libversion needs no initialization and returns a static string.
        unsafe { version_string("sqlite3_libversion", libsqlite3_sys::sqlite3_libversion()) }
    }
}
