//! CoreGraphics window list.
//!
//! `CGWindowListCreate` returns a `CFArrayRef` of window ids following the
//! Core Foundation create rule: the caller owns it and must `CFRelease` it.

use std::ffi::c_void;

use linkprobe_core::{
    DependencyError, DependencyResult, EnumerationHandle, WindowId, WindowListError,
    WindowListOption, WindowServerPort,
};
use tracing::debug;

type CFArrayRef = *const c_void;
type CFIndex = isize;
type CGWindowListOption = u32;
type CGWindowID = u32;

// Frameworks are linked by build.rs.
unsafe extern "C" {
    fn CGWindowListCreate(option: CGWindowListOption, relative_to_window: CGWindowID) -> CFArrayRef;
    fn CFArrayGetCount(array: CFArrayRef) -> CFIndex;
    fn CFRelease(cf: *const c_void);
}

/// `WindowServerPort` over CoreGraphics.
///
/// Handles passed to [`WindowServerPort::window_count`] and
/// [`WindowServerPort::release`] must come from this adapter's
/// `create_window_list`.
#[derive(Debug, Default, Clone, Copy)]
pub struct CoreGraphicsWindowServer;

impl WindowServerPort for CoreGraphicsWindowServer {
    fn create_window_list(
        &self,
        option: WindowListOption,
        relative_to: WindowId,
    ) -> Result<EnumerationHandle, WindowListError> {
        // SAFETY: plain value arguments; a null return is handled below.
        let array = unsafe { CGWindowListCreate(option.bits(), relative_to.0) };
        debug!(?array, "CGWindowListCreate");
        EnumerationHandle::from_raw(array).ok_or(WindowListError::NullEnumeration)
    }

    fn window_count(&self, handle: &EnumerationHandle) -> DependencyResult<usize> {
        // SAFETY: the handle is a live CFArrayRef from CGWindowListCreate.
        let count = unsafe { CFArrayGetCount(handle.as_ptr()) };
        usize::try_from(count).map_err(|_| DependencyError::OutOfRange {
            call: "CFArrayGetCount",
            value: count as i64,
        })
    }

    fn release(&self, handle: EnumerationHandle) {
        // SAFETY: the handle is owned (create rule) and consumed here, so
        // this is its only release.
        unsafe { CFRelease(handle.as_ptr()) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkprobe_core::WindowList;

    #[test]
    fn test_window_list_round_trip() {
        let server = CoreGraphicsWindowServer;
        // Headless runners may have no window server session at all.
        match WindowList::create(&server, WindowListOption::All, WindowId::NULL) {
            Ok(list) => {
                list.count().unwrap();
            }
            Err(err) => assert_eq!(err, WindowListError::NullEnumeration),
        }
    }
}
