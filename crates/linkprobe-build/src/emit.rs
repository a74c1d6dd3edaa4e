//! Cargo build-script instructions.

use std::io::{self, Write};
use std::path::Path;

use crate::definitions::{Definitions, definition_cfg_name};

/// Writes cargo instructions to a sink, normally stdout.
pub struct Emitter<W: Write> {
    out: W,
}

impl Emitter<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> Emitter<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn rerun_if_changed(&mut self, path: impl AsRef<Path>) -> io::Result<()> {
        writeln!(self.out, "cargo:rerun-if-changed={}", path.as_ref().display())
    }

    pub fn rerun_if_env_changed(&mut self, key: &str) -> io::Result<()> {
        writeln!(self.out, "cargo:rerun-if-env-changed={key}")
    }

    pub fn rustc_env(&mut self, key: &str, value: &str) -> io::Result<()> {
        writeln!(self.out, "cargo:rustc-env={key}={value}")
    }

    pub fn rustc_cfg(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.out, "cargo:rustc-cfg={name}")
    }

    /// Declare a cfg name as expected so `unexpected_cfgs` stays quiet.
    pub fn check_cfg(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.out, "cargo::rustc-check-cfg=cfg({name})")
    }

    pub fn link_framework(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.out, "cargo:rustc-link-lib=framework={name}")
    }

    /// `links` metadata, visible to direct dependents as `DEP_<LINKS>_<KEY>`.
    pub fn metadata(&mut self, key: &str, value: &str) -> io::Result<()> {
        writeln!(self.out, "cargo:{key}={value}")
    }

    pub fn warning(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "cargo:warning={message}")
    }

    /// Emit one `def_<name>` cfg per definition and declare `known` names as
    /// expected cfgs whether or not they are defined.
    pub fn definition_cfgs(&mut self, defs: &Definitions, known: &[&str]) -> io::Result<()> {
        for name in known {
            self.check_cfg(&definition_cfg_name(name))?;
        }
        for def in defs.iter() {
            let cfg = definition_cfg_name(&def.name);
            if !known.contains(&def.name.as_str()) {
                self.check_cfg(&cfg)?;
            }
            self.rustc_cfg(&cfg)?;
        }
        Ok(())
    }
}
