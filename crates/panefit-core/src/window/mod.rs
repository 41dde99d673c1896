//! Window lookup and geometry control by process id.

pub mod control;
pub mod locate;
pub mod query;

pub use control::{set_window_position, set_window_size, window_geometry};
pub use locate::find_window;
pub use query::query_windows;

/// Titles of helper windows that every GUI process owns and that never
/// describe the application.
pub const NOISE_TITLES: &[&str] = &["Default IME", "MSCTFIME UI"];

/// Returns whether a title can stand for the window it belongs to.
pub(crate) fn is_candidate_title(title: &str) -> bool {
    !title.is_empty() && !NOISE_TITLES.contains(&title)
}
