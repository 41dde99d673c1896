use std::ops::ControlFlow;

use crate::process::classify::EXECUTABLE_EXTENSION;
use crate::{Error, Result, WindowApi, WindowHandle};

use super::is_candidate_title;

/// Title of the desktop shell's top-level window.
pub const SHELL_WINDOW_TITLE: &str = "Program Manager";

/// Titles at or below this many characters are not considered descriptive.
const MEANINGFUL_TITLE_MIN: usize = 10;

/// Resolves the single window to operate on for `pid`.
///
/// Candidates are visible, titled, non-helper windows owned by the
/// process. With several candidates, the first one with a descriptive
/// title (longer than ten characters and not a bare `*.exe` name) is
/// preferred, otherwise the first candidate found.
pub fn find_window<A: WindowApi + ?Sized>(api: &A, pid: u32) -> Result<WindowHandle> {
    let mut candidates: Vec<(WindowHandle, String)> = Vec::new();

    api.enum_windows(&mut |handle| {
        if !api.is_window_visible(handle) || api.window_process_id(handle) != pid {
            return ControlFlow::Continue(());
        }

        let title = api.window_title(handle);
        if is_candidate_title(&title) && title != SHELL_WINDOW_TITLE {
            candidates.push((handle, title));
        }

        ControlFlow::Continue(())
    })
    .map_err(|e| Error::native("enumerate windows", pid, e))?;

    let handle = match candidates.as_slice() {
        [] => return Err(Error::WindowNotFound { pid }),
        [(only, _)] => *only,
        [(first, _), ..] => candidates
            .iter()
            .find(|(_, title)| is_meaningful_title(title))
            .map_or(*first, |(handle, _)| *handle),
    };

    tracing::debug!(pid, %handle, candidates = candidates.len(), "resolved window");
    Ok(handle)
}

/// Distinguishes real window titles from filename placeholders.
fn is_meaningful_title(title: &str) -> bool {
    title.chars().count() > MEANINGFUL_TITLE_MIN
        && !title.to_lowercase().ends_with(EXECUTABLE_EXTENSION)
}
