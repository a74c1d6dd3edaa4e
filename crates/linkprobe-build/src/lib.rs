//! Shared build-script utilities for the linkprobe workspace.
//!
//! Build scripts in this workspace model C-style compile definitions:
//! a native library declares public and private definitions, exports the
//! public ones to its consumers through cargo `links` metadata, and a
//! consumer checks the definitions it inherited before anything compiles.
//!
//! Include this crate under `[build-dependencies]`:
//!
//! ```ignore
//! use linkprobe_build::{Definitions, Emitter, LinkMetadata};
//!
//! fn main() {
//!     let mut out = Emitter::stdout();
//!     let inherited = LinkMetadata::from_dependency("foo").unwrap();
//!     out.rustc_env("APP_DEFINITIONS", &inherited.definitions.to_string()).unwrap();
//! }
//! ```

mod contract;
mod definitions;
mod emit;
mod metadata;
mod modes;

pub use contract::{ContractViolation, MacroContract};
pub use definitions::{Definition, DefinitionError, Definitions, definition_cfg_name};
pub use emit::Emitter;
pub use metadata::LinkMetadata;
pub use modes::{DEBUG, ModeRequest, NDEBUG};
