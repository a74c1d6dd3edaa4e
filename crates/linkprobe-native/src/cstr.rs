use std::ffi::{CStr, c_char};

use linkprobe_core::{DependencyError, DependencyResult};

/// Copy a library-owned version string.
///
/// # Safety
///
/// `ptr` must be null or point to a NUL-terminated string that stays valid
/// for the duration of the call.
pub unsafe fn version_string(call: &'static str, ptr: *const c_char) -> DependencyResult<String> {
    if ptr.is_null() {
        return Err(DependencyError::NullPointer { call });
    }

    // SAFETY: non-null, and the caller guarantees NUL termination.
    let raw = unsafe { CStr::from_ptr(ptr) };
    raw.to_str()
        .map(str::to_string)
        .map_err(|source| DependencyError::InvalidUtf8 { call, source })
}
