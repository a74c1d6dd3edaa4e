//! Core of the linkprobe build verification probe.
//!
//! The probe checks a build configuration in three stages:
//!
//! 1. At compile time, [`macro_contract!`] asserts that the required public
//!    definition reached this compilation unit and the private one did not.
//! 2. At run time, [`Probe::run`] reports the active build modes and calls
//!    into every linked dependency through the [`ports`] traits.
//! 3. It finishes with a window-list round trip whose handle is owned by the
//!    [`WindowList`] scope guard.
//!
//! This crate holds no FFI. Adapters live in `linkprobe-native`.

pub mod config;
pub mod contract;
pub mod error;
pub mod ports;
pub mod probe;

pub use config::ProbeConfig;
pub use contract::{
    DEBUG_MACRO, MacroFlags, PRIVATE_MACRO, RELEASE_MACRO, REQUIRED_MACRO, has_definition,
};
pub use error::{
    DependencyError, DependencyKind, DependencyResult, ProbeError, ProbeResult, WindowListError,
};
pub use ports::{
    CompressionPort, DatabasePort, EnumerationHandle, LocalLibraryPort, WindowId, WindowList,
    WindowListOption, WindowServerPort,
};
pub use probe::{Probe, ProbeDependencies, ProbeSummary};
