//! Port definitions (trait abstractions) for the linked dependencies.
//!
//! Ports define what the probe expects from each native dependency. They
//! contain no FFI; `linkprobe-native` implements them over the real
//! libraries and tests implement them with mocks.
//!
//! # Design Rules
//!
//! - Every call returns a `Result`, even where the real library cannot fail
//! - No raw pointers in signatures except inside [`EnumerationHandle`]
//! - Releasing an enumeration consumes its handle

mod libraries;
mod window_server;

pub use libraries::{CompressionPort, DatabasePort, LocalLibraryPort};
pub use window_server::{
    EnumerationHandle, WindowId, WindowList, WindowListOption, WindowServerPort,
};

#[cfg(test)]
pub use libraries::{MockCompressionPort, MockDatabasePort, MockLocalLibraryPort};
#[cfg(test)]
pub use window_server::MockWindowServerPort;
