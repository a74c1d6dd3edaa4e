//! `DEBUG` / `NDEBUG` build-mode definitions.

use std::env;

use crate::definitions::{DefinitionError, Definitions};

pub const DEBUG: &str = "DEBUG";
pub const NDEBUG: &str = "NDEBUG";

/// Which build-mode definitions were requested through cargo features.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeRequest {
    /// `define-debug` feature.
    pub define_debug: bool,
    /// `define-ndebug` feature.
    pub define_ndebug: bool,
    /// `profile-modes` feature: derive the mode from the cargo profile.
    pub from_profile: bool,
}

impl ModeRequest {
    /// Read the request from the `CARGO_FEATURE_*` variables of the running build script.
    pub fn from_features() -> Self {
        let feature = |name: &str| env::var_os(format!("CARGO_FEATURE_{name}")).is_some();
        Self {
            define_debug: feature("DEFINE_DEBUG"),
            define_ndebug: feature("DEFINE_NDEBUG"),
            from_profile: feature("PROFILE_MODES"),
        }
    }

    /// Mode definitions to add on top of `existing`.
    ///
    /// Explicit requests win and may define both. Otherwise nothing is added
    /// when `existing` already carries a mode; failing that, a `debug`
    /// profile adds `DEBUG` and any other profile adds `NDEBUG`.
    pub fn resolve(
        &self,
        existing: &Definitions,
        profile: Option<&str>,
    ) -> Result<Definitions, DefinitionError> {
        let mut modes = Definitions::new();

        if self.define_debug || self.define_ndebug {
            if self.define_debug {
                modes.define(DEBUG, None)?;
            }
            if self.define_ndebug {
                modes.define(NDEBUG, None)?;
            }
            return Ok(modes);
        }

        if !self.from_profile || existing.contains(DEBUG) || existing.contains(NDEBUG) {
            return Ok(modes);
        }

        match profile {
            Some("debug") => modes.define(DEBUG, None)?,
            Some(_) => modes.define(NDEBUG, None)?,
            None => {}
        }
        Ok(modes)
    }
}
