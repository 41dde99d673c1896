//! The six operations exposed to front ends.
//!
//! Discovery and window control are separate capability sets
//! ([`ProcessManager`], [`WindowManager`]). [`Engine`] owns one
//! implementation of each and exposes the union as [`WindowService`].
//!
//! Every call takes a fresh snapshot of OS state; nothing is cached and
//! nothing is retried. Callers that need an atomic read-modify-write on
//! one process's window must serialize those calls themselves.

use crate::process::{self, ProcessSource};
use crate::window;
use crate::{ProcessRecord, Result, WindowApi, WindowGeometry, WindowHandle};

/// Process discovery.
pub trait ProcessManager {
    /// Lists one representative window-owning process per application.
    fn list_application_processes(&self) -> Result<Vec<ProcessRecord>>;

    /// Lists every process that owns a titled visible window, without
    /// application filtering or grouping. Intended for debugging.
    fn list_all_windowed_processes(&self) -> Result<Vec<ProcessRecord>>;

    fn is_application(&self, record: &ProcessRecord) -> bool;
}

/// Window geometry control by process id.
pub trait WindowManager {
    fn window_geometry(&self, pid: u32) -> Result<WindowGeometry>;

    fn set_window_size(&self, pid: u32, width: i32, height: i32) -> Result<()>;

    fn set_window_position(&self, pid: u32, x: i32, y: i32, width: i32, height: i32)
    -> Result<()>;

    fn find_window_handle(&self, pid: u32) -> Result<WindowHandle>;
}

/// Both capability sets together.
pub trait WindowService: ProcessManager + WindowManager {}

impl<T: ProcessManager + WindowManager> WindowService for T {}

/// [`ProcessManager`] over a process listing and the native window API.
pub struct ProcessDiscovery<'a, A: ?Sized, S: ?Sized> {
    api: &'a A,
    source: &'a S,
}

impl<'a, A, S> ProcessDiscovery<'a, A, S>
where
    A: WindowApi + ?Sized,
    S: ProcessSource + ?Sized,
{
    pub fn new(api: &'a A, source: &'a S) -> Self {
        Self { api, source }
    }

    fn snapshot(&self) -> Result<Vec<ProcessRecord>> {
        let text = self.source.listing()?;
        process::parse_listing(&text)
    }

    /// Attaches window info to `record` if it owns a titled visible window.
    ///
    /// Enumeration failures are logged and treated as "no window".
    fn with_window(&self, mut record: ProcessRecord) -> Option<ProcessRecord> {
        let info = match window::query_windows(self.api, record.pid) {
            Ok(info) => info,
            Err(e) => {
                tracing::warn!(pid = record.pid, error = %e, "failed to enumerate windows");
                return None;
            }
        };

        if !info.has_window {
            return None;
        }
        record.annotate(&info);
        Some(record)
    }
}

impl<A, S> ProcessManager for ProcessDiscovery<'_, A, S>
where
    A: WindowApi + ?Sized,
    S: ProcessSource + ?Sized,
{
    fn list_application_processes(&self) -> Result<Vec<ProcessRecord>> {
        let apps: Vec<ProcessRecord> = self
            .snapshot()?
            .into_iter()
            .filter(process::is_application)
            .filter_map(|record| self.with_window(record))
            .collect();

        let grouped = process::group_by_image(apps);
        tracing::info!(count = grouped.len(), "found application processes");
        Ok(grouped)
    }

    fn list_all_windowed_processes(&self) -> Result<Vec<ProcessRecord>> {
        let windowed: Vec<ProcessRecord> = self
            .snapshot()?
            .into_iter()
            .filter_map(|record| self.with_window(record))
            .collect();

        tracing::debug!(count = windowed.len(), "found processes with windows");
        Ok(windowed)
    }

    fn is_application(&self, record: &ProcessRecord) -> bool {
        process::is_application(record)
    }
}

/// [`WindowManager`] over the native window API.
pub struct WindowControl<'a, A: ?Sized> {
    api: &'a A,
}

impl<'a, A: WindowApi + ?Sized> WindowControl<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }
}

impl<A: WindowApi + ?Sized> WindowManager for WindowControl<'_, A> {
    fn window_geometry(&self, pid: u32) -> Result<WindowGeometry> {
        window::window_geometry(self.api, pid)
    }

    fn set_window_size(&self, pid: u32, width: i32, height: i32) -> Result<()> {
        window::set_window_size(self.api, pid, width, height)
    }

    fn set_window_position(
        &self,
        pid: u32,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> Result<()> {
        window::set_window_position(self.api, pid, WindowGeometry::new(x, y, width, height))
    }

    fn find_window_handle(&self, pid: u32) -> Result<WindowHandle> {
        window::find_window(self.api, pid)
    }
}

/// The combined service: discovery plus control, sharing one API object.
pub struct Engine<'a, A: ?Sized, S: ?Sized> {
    processes: ProcessDiscovery<'a, A, S>,
    windows: WindowControl<'a, A>,
}

impl<'a, A, S> Engine<'a, A, S>
where
    A: WindowApi + ?Sized,
    S: ProcessSource + ?Sized,
{
    pub fn new(api: &'a A, source: &'a S) -> Self {
        Self {
            processes: ProcessDiscovery::new(api, source),
            windows: WindowControl::new(api),
        }
    }
}

impl<A, S> ProcessManager for Engine<'_, A, S>
where
    A: WindowApi + ?Sized,
    S: ProcessSource + ?Sized,
{
    fn list_application_processes(&self) -> Result<Vec<ProcessRecord>> {
        self.processes.list_application_processes()
    }

    fn list_all_windowed_processes(&self) -> Result<Vec<ProcessRecord>> {
        self.processes.list_all_windowed_processes()
    }

    fn is_application(&self, record: &ProcessRecord) -> bool {
        self.processes.is_application(record)
    }
}

impl<A, S> WindowManager for Engine<'_, A, S>
where
    A: WindowApi + ?Sized,
    S: ProcessSource + ?Sized,
{
    fn window_geometry(&self, pid: u32) -> Result<WindowGeometry> {
        self.windows.window_geometry(pid)
    }

    fn set_window_size(&self, pid: u32, width: i32, height: i32) -> Result<()> {
        self.windows.set_window_size(pid, width, height)
    }

    fn set_window_position(
        &self,
        pid: u32,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> Result<()> {
        self.windows.set_window_position(pid, x, y, width, height)
    }

    fn find_window_handle(&self, pid: u32) -> Result<WindowHandle> {
        self.windows.find_window_handle(pid)
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
