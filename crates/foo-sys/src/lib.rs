//! Bindings to the local `foo` library.
//!
//! The C sources live in `csrc/`. Consumers that depend on this crate
//! directly receive `foo`'s public definitions in their build script as
//! `DEP_FOO_DEFINITIONS`; the private ones stay here.
#![allow(unsafe_code)]

#[cfg(not(def_export_foo_api))]
compile_error!("EXPORT_FOO_API must be defined when building foo");

/// Version of the C library as declared by its build.
pub const LIBRARY_VERSION: &str = env!("FOO_LIBRARY_VERSION");

/// Raw declarations from `csrc/include/foo.h`.
pub mod ffi {
    use std::ffi::c_int;

    unsafe extern "C" {
        pub fn foo() -> c_int;
        pub fn bar() -> c_int;
        pub fn foo_mode_bits() -> c_int;
    }
}

/// Call `foo()`.
pub fn foo() -> i32 {
    // SAFETY: `foo` takes no arguments and touches no shared state.
    unsafe { ffi::foo() }
}

/// Call `bar()`.
pub fn bar() -> i32 {
    // SAFETY: `bar` takes no arguments and touches no shared state.
    unsafe { ffi::bar() }
}

/// Build modes `foo`'s C sources were compiled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeBits {
    pub debug: bool,
    pub ndebug: bool,
}

/// Ask the C side which of `DEBUG` / `NDEBUG` it saw.
pub fn mode_bits() -> ModeBits {
    // SAFETY: `foo_mode_bits` takes no arguments and touches no shared state.
    let bits = unsafe { ffi::foo_mode_bits() };
    ModeBits {
        debug: bits & 1 != 0,
        ndebug: bits & 2 != 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foo_returns_answer() {
        assert_eq!(foo(), 42);
    }

    #[test]
    fn test_bar_returns_public_definition() {
        assert_eq!(bar(), 4);
    }

    #[test]
    fn test_own_definitions_visible() {
        assert!(cfg!(def_export_foo_api));
        assert!(cfg!(def_foo_test_macro));
    }

    #[test]
    fn test_c_sources_share_rust_mode_definitions() {
        let bits = mode_bits();
        assert_eq!(bits.debug, cfg!(def_debug));
        assert_eq!(bits.ndebug, cfg!(def_ndebug));
    }

    #[test]
    fn test_profile_defines_exactly_one_mode() {
        let explicit = cfg!(feature = "define-debug") || cfg!(feature = "define-ndebug");
        if cfg!(feature = "profile-modes") && !explicit {
            let bits = mode_bits();
            assert_ne!(bits.debug, bits.ndebug);
        }
    }

    #[test]
    fn test_explicit_modes_reach_c_sources() {
        let bits = mode_bits();
        if cfg!(feature = "define-debug") {
            assert!(bits.debug);
        }
        if cfg!(feature = "define-ndebug") {
            assert!(bits.ndebug);
        }
    }

    #[test]
    fn test_library_version() {
        assert_eq!(LIBRARY_VERSION, "1.0.0");
    }
}
