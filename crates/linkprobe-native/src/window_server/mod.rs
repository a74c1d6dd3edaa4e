//! Window server adapters.
//!
//! macOS gets [`CoreGraphicsWindowServer`]. Every other target gets
//! [`UnsupportedWindowServer`], which never hands out an enumeration.

#[cfg(target_os = "macos")]
mod macos;
mod unsupported;

#[cfg(target_os = "macos")]
pub use macos::CoreGraphicsWindowServer;
pub use unsupported::UnsupportedWindowServer;

/// The window server adapter for the current target.
#[cfg(target_os = "macos")]
pub type PlatformWindowServer = CoreGraphicsWindowServer;

/// The window server adapter for the current target.
#[cfg(not(target_os = "macos"))]
pub type PlatformWindowServer = UnsupportedWindowServer;
