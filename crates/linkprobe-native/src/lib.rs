//! Native adapters for linkprobe.
//!
//! Each adapter implements one `linkprobe-core` port by calling into the
//! real library:
//!
//! | Port | Adapter | Library |
//! |------|---------|---------|
//! | `LocalLibraryPort` | [`FooLibrary`] | `foo-sys` |
//! | `CompressionPort` | [`Zlib`] | `libz-sys` |
//! | `DatabasePort` | [`Sqlite`] | `libsqlite3-sys` |
//! | `WindowServerPort` | [`PlatformWindowServer`] | CoreGraphics on macOS |
#![allow(unsafe_code)]

mod cstr;
mod libraries;
pub mod window_server;

use linkprobe_core::ProbeDependencies;

pub use libraries::{FooLibrary, Sqlite, Zlib};
pub use window_server::PlatformWindowServer;

/// The full set of native adapters for this target.
#[derive(Debug, Default)]
pub struct NativeDependencies {
    pub local: FooLibrary,
    pub compression: Zlib,
    pub database: Sqlite,
    pub windows: PlatformWindowServer,
}

impl NativeDependencies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the adapters as the probe's dependency set.
    pub fn deps(&self) -> ProbeDependencies<'_> {
        ProbeDependencies {
            local: &self.local,
            compression: &self.compression,
            database: &self.database,
            windows: &self.windows,
        }
    }
}
