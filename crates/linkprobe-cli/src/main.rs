use std::io::{self, Write};

use anyhow::Result;
use linkprobe_cli::{FLAGS, PROBE_CONFIG, init_logging};
use linkprobe_core::Probe;
use linkprobe_native::NativeDependencies;
use tracing::debug;

fn main() -> Result<()> {
    init_logging()?;
    debug!(definitions = linkprobe_cli::DEFINITIONS, ?PROBE_CONFIG, "starting probe");

    let native = NativeDependencies::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let summary = Probe::new(PROBE_CONFIG, FLAGS, native.deps()).run(&mut out)?;
    out.flush()?;

    debug!(?summary, "probe finished");
    Ok(())
}
