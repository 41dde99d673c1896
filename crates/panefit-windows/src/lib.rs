/// Win32 implementation of the native window API.
#[cfg(windows)]
pub mod api;

/// Process listing via `tasklist`.
pub mod tasklist;

#[cfg(windows)]
pub use api::Win32Api;
pub use tasklist::Tasklist;

use panefit_core::{Result, WindowService};

/// Builds the engine over the live desktop and hands it to `f`.
///
/// The Win32 access object and the process source are created once here
/// and borrowed by every component for the duration of the call.
#[cfg(windows)]
pub fn with_service<R>(f: impl FnOnce(&dyn WindowService) -> Result<R>) -> Result<R> {
    let api = Win32Api::new();
    let source = Tasklist::new();
    let engine = panefit_core::Engine::new(&api, &source);
    f(&engine)
}

/// Window control needs Win32; other hosts get [`panefit_core::Error::Unsupported`].
#[cfg(not(windows))]
pub fn with_service<R>(_f: impl FnOnce(&dyn WindowService) -> Result<R>) -> Result<R> {
    Err(panefit_core::Error::Unsupported)
}
