//! Probe variant selection.

/// Optional probe steps.
///
/// The defaults describe the baseline probe. The executable builds its
/// config from cargo features at compile time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Print a line for each active build-mode definition.
    pub report_build_modes: bool,
    /// Call the local library's secondary entry point (`bar`).
    pub call_secondary_entry: bool,
}

impl ProbeConfig {
    /// Greeting, `foo`, versions and the window count. Nothing optional.
    pub const fn baseline() -> Self {
        Self {
            report_build_modes: false,
            call_secondary_entry: false,
        }
    }

    /// Every optional step enabled.
    pub const fn extended() -> Self {
        Self {
            report_build_modes: true,
            call_secondary_entry: true,
        }
    }
}
