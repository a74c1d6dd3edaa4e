use std::env::consts::OS;

use linkprobe_core::{
    DependencyResult, EnumerationHandle, WindowId, WindowListError, WindowListOption,
    WindowServerPort,
};
use tracing::debug;

/// Window server for targets without a supported windowing API.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedWindowServer;

impl WindowServerPort for UnsupportedWindowServer {
    fn create_window_list(
        &self,
        option: WindowListOption,
        relative_to: WindowId,
    ) -> Result<EnumerationHandle, WindowListError> {
        debug!(?option, ?relative_to, os = OS, "window enumeration unsupported");
        Err(WindowListError::Unsupported(OS))
    }

    // Never reached: this adapter hands out no handles.
    fn window_count(&self, _handle: &EnumerationHandle) -> DependencyResult<usize> {
        Ok(0)
    }

    fn release(&self, _handle: EnumerationHandle) {}
}
