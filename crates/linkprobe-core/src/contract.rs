//! Compile-time definition contract.
//!
//! A consumer's build script embeds the definitions its compilation unit
//! sees as a `NAME=VALUE;NAME;...` string (see `linkprobe-build`). The
//! functions here read that string in `const` context, so the contract is a
//! static assertion: a violation is a compile error, never a runtime branch.

/// Public definition of `foo` every consumer must see.
pub const REQUIRED_MACRO: &str = "FOO_TEST_MACRO";
/// Definition `foo` keeps to itself.
pub const PRIVATE_MACRO: &str = "EXPORT_FOO_API";
pub const DEBUG_MACRO: &str = "DEBUG";
pub const RELEASE_MACRO: &str = "NDEBUG";

/// Assert the definition contract at compile time.
///
/// Expands to an unnamed `const` item, so it belongs at module level.
///
/// ```
/// linkprobe_core::macro_contract! {
///     definitions: "FOO_TEST_MACRO=4;NDEBUG",
///     required: "FOO_TEST_MACRO",
///     private: "EXPORT_FOO_API",
/// }
/// # fn main() {}
/// ```
///
/// A missing required definition does not compile:
///
/// ```compile_fail
/// linkprobe_core::macro_contract! {
///     definitions: "DEBUG",
///     required: "FOO_TEST_MACRO",
///     private: "EXPORT_FOO_API",
/// }
/// fn main() {}
/// ```
///
/// Neither does a leaked private definition:
///
/// ```compile_fail
/// linkprobe_core::macro_contract! {
///     definitions: "FOO_TEST_MACRO=4;EXPORT_FOO_API=",
///     required: "FOO_TEST_MACRO",
///     private: "EXPORT_FOO_API",
/// }
/// fn main() {}
/// ```
#[macro_export]
macro_rules! macro_contract {
    (
        definitions: $defs:expr,
        required: $required:literal,
        private: $private:literal $(,)?
    ) => {
        const _: () = {
            assert!(
                $crate::contract::has_definition($defs, $required),
                concat!($required, " not exported properly")
            );
            assert!(
                !$crate::contract::has_definition($defs, $private),
                concat!($private, " should be private definition")
            );
        };
    };
}

/// Whether `name` is defined in a serialized definition set.
pub const fn has_definition(definitions: &str, name: &str) -> bool {
    let defs = definitions.as_bytes();
    let name = name.as_bytes();
    if name.is_empty() {
        return false;
    }

    let mut start = 0;
    while start < defs.len() {
        let mut end = start;
        while end < defs.len() && defs[end] != b';' {
            end += 1;
        }

        let mut name_end = start;
        while name_end < end && defs[name_end] != b'=' {
            name_end += 1;
        }

        let (from, to) = trim(defs, start, name_end);
        if range_eq(defs, from, to, name) {
            return true;
        }
        start = end + 1;
    }
    false
}

const fn trim(bytes: &[u8], mut from: usize, mut to: usize) -> (usize, usize) {
    while from < to && bytes[from] == b' ' {
        from += 1;
    }
    while to > from && bytes[to - 1] == b' ' {
        to -= 1;
    }
    (from, to)
}

const fn range_eq(hay: &[u8], from: usize, to: usize, needle: &[u8]) -> bool {
    if to - from != needle.len() {
        return false;
    }
    let mut i = 0;
    while i < needle.len() {
        if hay[from + i] != needle[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Compile-time view of a consumer's definitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MacroFlags {
    /// `FOO_TEST_MACRO` reached this unit. Must be true.
    pub required_macro_present: bool,
    /// `EXPORT_FOO_API` reached this unit. Must be false.
    pub private_macro_leaked: bool,
    /// `DEBUG` is defined.
    pub debug_mode_active: bool,
    /// `NDEBUG` is defined.
    pub release_mode_active: bool,
}

impl MacroFlags {
    pub const fn from_definitions(definitions: &str) -> Self {
        Self {
            required_macro_present: has_definition(definitions, REQUIRED_MACRO),
            private_macro_leaked: has_definition(definitions, PRIVATE_MACRO),
            debug_mode_active: has_definition(definitions, DEBUG_MACRO),
            release_mode_active: has_definition(definitions, RELEASE_MACRO),
        }
    }

    /// No build-mode definitions, contract satisfied.
    pub const fn baseline() -> Self {
        Self {
            required_macro_present: true,
            private_macro_leaked: false,
            debug_mode_active: false,
            release_mode_active: false,
        }
    }

    pub const fn contract_holds(&self) -> bool {
        self.required_macro_present && !self.private_macro_leaked
    }
}
