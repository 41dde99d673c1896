//! Process table snapshot, application classification, and grouping.

pub mod classify;
pub mod group;
pub mod tasklist;

pub use classify::is_application;
pub use group::group_by_image;
pub use tasklist::{parse_listing, parse_memory_bytes};

use crate::Result;

/// Produces the raw process table text.
///
/// The expected format is headerless CSV with the columns image name,
/// pid, session name, session number, and memory usage (`"12,345 K"`).
/// This is what `tasklist /FO CSV /NH` prints.
pub trait ProcessSource {
    fn listing(&self) -> Result<String>;
}

/// A fixed listing, for tests and offline inspection.
impl ProcessSource for str {
    fn listing(&self) -> Result<String> {
        Ok(self.to_owned())
    }
}
