//! Compile-time configuration of the probe.
//!
//! Everything here is fixed when `hello` is built: the definition set comes
//! from build.rs, the probe variant from cargo features. Nothing is read at
//! run time.

use linkprobe_core::{MacroFlags, ProbeConfig};

/// Definitions this compilation unit sees, as `NAME=VALUE;NAME;...`.
pub const DEFINITIONS: &str = env!("LINKPROBE_DEFINITIONS");

/// Version `foo` declared in its link metadata.
pub const FOO_LIBRARY_VERSION: &str = env!("LINKPROBE_FOO_VERSION");

linkprobe_core::macro_contract! {
    definitions: DEFINITIONS,
    required: "FOO_TEST_MACRO",
    private: "EXPORT_FOO_API",
}

pub const FLAGS: MacroFlags = MacroFlags::from_definitions(DEFINITIONS);

pub const PROBE_CONFIG: ProbeConfig = ProbeConfig {
    report_build_modes: cfg!(feature = "mode-report"),
    call_secondary_entry: cfg!(feature = "secondary-entry"),
};
