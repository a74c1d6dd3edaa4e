//! Window server port and the scoped window-list guard.
//!
//! The platform allocates a window enumeration and hands back an opaque
//! reference. [`WindowList`] owns that reference from creation until its
//! `Drop` releases it, so every exit path (including `?` on an output
//! error) releases exactly once.

use std::ffi::c_void;
use std::ptr::NonNull;

use tracing::debug;

use crate::error::{DependencyResult, WindowListError};

/// Which windows to enumerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowListOption {
    /// Every window, on screen or not (`kCGWindowListOptionAll`).
    All,
}

impl WindowListOption {
    /// Raw `CGWindowListOption` bits.
    pub const fn bits(self) -> u32 {
        match self {
            Self::All => 0,
        }
    }
}

/// A platform window id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(pub u32);

impl WindowId {
    /// The "no window" sentinel (`kCGNullWindowID`).
    pub const NULL: Self = Self(0);
}

/// Opaque, platform-owned enumeration reference.
///
/// Not `Clone`: the only way to give it up is
/// [`WindowServerPort::release`], which consumes it.
#[derive(Debug, PartialEq, Eq)]
pub struct EnumerationHandle(NonNull<c_void>);

impl EnumerationHandle {
    /// Wrap a raw reference. Returns `None` for null.
    pub fn from_raw(ptr: *const c_void) -> Option<Self> {
        NonNull::new(ptr.cast_mut()).map(Self)
    }

    pub const fn as_ptr(&self) -> *const c_void {
        self.0.as_ptr().cast_const()
    }
}

/// The platform windowing API.
#[cfg_attr(test, mockall::automock)]
pub trait WindowServerPort {
    /// Create an enumeration of window ids.
    fn create_window_list(
        &self,
        option: WindowListOption,
        relative_to: WindowId,
    ) -> Result<EnumerationHandle, WindowListError>;

    /// Number of entries in an enumeration.
    fn window_count(&self, handle: &EnumerationHandle) -> DependencyResult<usize>;

    /// Release an enumeration.
    fn release(&self, handle: EnumerationHandle);
}

/// Scope guard owning one window enumeration.
pub struct WindowList<'a> {
    server: &'a dyn WindowServerPort,
    handle: Option<EnumerationHandle>,
}

impl<'a> WindowList<'a> {
    /// Ask `server` for an enumeration and take ownership of it.
    pub fn create(
        server: &'a dyn WindowServerPort,
        option: WindowListOption,
        relative_to: WindowId,
    ) -> Result<Self, WindowListError> {
        let handle = server.create_window_list(option, relative_to)?;
        debug!(handle = ?handle.as_ptr(), ?option, "acquired window list");
        Ok(Self {
            server,
            handle: Some(handle),
        })
    }

    /// Number of windows in the enumeration.
    pub fn count(&self) -> DependencyResult<usize> {
        self.handle
            .as_ref()
            .map_or(Ok(0), |handle| self.server.window_count(handle))
    }
}

impl Drop for WindowList<'_> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            debug!(handle = ?handle.as_ptr(), "releasing window list");
            self.server.release(handle);
        }
    }
}
