//! The probe runner.
//!
//! Writes, in order: build-mode lines (optional), the greeting, the local
//! library results, the compression and database versions, and the window
//! count. A dependency failure stops the run before any later line is
//! written. A missing window enumeration does not: the count line is
//! skipped and the run still succeeds.

use std::io::Write;

use tracing::{debug, info, warn};

use crate::config::ProbeConfig;
use crate::contract::MacroFlags;
use crate::error::{DependencyKind, DependencyResult, ProbeError, ProbeResult};
use crate::ports::{
    CompressionPort, DatabasePort, LocalLibraryPort, WindowId, WindowList, WindowListOption,
    WindowServerPort,
};

/// Everything the probe calls into.
#[derive(Clone, Copy)]
pub struct ProbeDependencies<'a> {
    pub local: &'a dyn LocalLibraryPort,
    pub compression: &'a dyn CompressionPort,
    pub database: &'a dyn DatabasePort,
    pub windows: &'a dyn WindowServerPort,
}

/// What a completed run observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeSummary {
    pub foo: i32,
    /// `None` when the secondary entry point was not called.
    pub bar: Option<i32>,
    pub zlib_version: String,
    pub sqlite_version: String,
    /// `None` when no window enumeration was available.
    pub window_count: Option<usize>,
}

/// The build verification probe.
pub struct Probe<'a> {
    config: ProbeConfig,
    flags: MacroFlags,
    deps: ProbeDependencies<'a>,
}

impl<'a> Probe<'a> {
    pub const fn new(config: ProbeConfig, flags: MacroFlags, deps: ProbeDependencies<'a>) -> Self {
        Self {
            config,
            flags,
            deps,
        }
    }

    /// Run every step, writing one line per result to `out`.
    pub fn run<W: Write>(&self, out: &mut W) -> ProbeResult<ProbeSummary> {
        info!(config = ?self.config, "starting probe");

        if self.config.report_build_modes {
            self.report_modes(out)?;
        }

        writeln!(out, "Hello world!")?;

        let foo = call(DependencyKind::LocalLibrary, || self.deps.local.foo())?;
        writeln!(out, "foo() returns: {foo}")?;

        let bar = if self.config.call_secondary_entry {
            let bar = call(DependencyKind::LocalLibrary, || self.deps.local.bar())?;
            writeln!(out, "bar() returns: {bar}")?;
            Some(bar)
        } else {
            None
        };

        let zlib_version = call(DependencyKind::Compression, || {
            self.deps.compression.version()
        })?;
        writeln!(out, "Zlib version: {zlib_version}")?;

        let sqlite_version = call(DependencyKind::Database, || self.deps.database.version())?;
        writeln!(out, "sqlite3 version: {sqlite_version}")?;

        let window_count = self.count_windows(out)?;

        out.flush()?;
        info!("probe complete");

        Ok(ProbeSummary {
            foo,
            bar,
            zlib_version,
            sqlite_version,
            window_count,
        })
    }

    fn report_modes<W: Write>(&self, out: &mut W) -> ProbeResult<()> {
        // Independent checks: both, either or neither may print.
        if self.flags.debug_mode_active {
            writeln!(out, "DEBUG is defined")?;
        }
        if self.flags.release_mode_active {
            writeln!(out, "NDEBUG is defined")?;
        }
        Ok(())
    }

    fn count_windows<W: Write>(&self, out: &mut W) -> ProbeResult<Option<usize>> {
        let created =
            WindowList::create(self.deps.windows, WindowListOption::All, WindowId::NULL);
        let list = match created {
            Ok(list) => list,
            Err(err) => {
                warn!(error = %err, "no window enumeration, skipping window count");
                return Ok(None);
            }
        };

        let count = call(DependencyKind::WindowServer, || list.count())?;
        writeln!(out, "There are {count} windows")?;
        Ok(Some(count))
    }
}

fn call<T: std::fmt::Debug>(
    dependency: DependencyKind,
    f: impl FnOnce() -> DependencyResult<T>,
) -> ProbeResult<T> {
    match f() {
        Ok(value) => {
            debug!(%dependency, ?value, "dependency call succeeded");
            Ok(value)
        }
        Err(source) => Err(ProbeError::dependency(dependency, source)),
    }
}
