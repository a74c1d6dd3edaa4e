//! The `hello` probe binary's library half.
//!
//! `build_config` holds what was decided when the binary was compiled,
//! `logging` sets up diagnostics on stderr. `main.rs` wires both to the
//! native adapters.

pub mod build_config;
pub mod logging;

pub use build_config::{DEFINITIONS, FLAGS, PROBE_CONFIG};
pub use logging::init_logging;
