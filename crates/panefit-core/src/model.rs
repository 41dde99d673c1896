use std::fmt;

use serde::{Deserialize, Serialize};

/// One row of the OS process table, optionally annotated with window info.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessRecord {
    /// Executable image name, case preserved (e.g. `"Notepad.exe"`).
    pub image_name: String,
    pub pid: u32,
    /// Session name as listed (e.g. `"Console"`, `"Services"`).
    pub session_name: String,
    /// Session number. `0` is the non-interactive system session.
    pub session_id: u32,
    /// Memory usage exactly as listed, e.g. `"12,345 K"`.
    pub memory_usage: String,
    /// Memory usage parsed to bytes.
    pub memory_bytes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_title: Option<String>,
    pub window_count: u32,
    pub has_window: bool,
}

impl ProcessRecord {
    /// Returns the image name lower-cased, used as the grouping key.
    pub fn image_key(&self) -> String {
        self.image_name.to_lowercase()
    }

    /// Returns the window title, or `""` when none was recorded.
    pub fn title(&self) -> &str {
        self.window_title.as_deref().unwrap_or_default()
    }

    /// Copies the result of a window query onto this record.
    pub fn annotate(&mut self, info: &WindowQueryResult) {
        self.window_title = Some(info.title.clone());
        self.window_count = info.window_count;
        self.has_window = info.has_window;
    }
}

/// What one enumeration pass found for a single process id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowQueryResult {
    /// Visible top-level windows owned by the process, titled or not.
    pub window_count: u32,
    /// Longest non-noise title seen. Empty when none qualified.
    pub title: String,
    pub has_window: bool,
}

/// Opaque top-level window handle.
///
/// Only valid during the enumeration pass that produced it; the window
/// may close at any time afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowHandle(pub usize);

impl WindowHandle {
    pub fn raw(self) -> usize {
        self.0
    }
}

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:X}", self.0)
    }
}
