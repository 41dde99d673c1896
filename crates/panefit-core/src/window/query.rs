use std::ops::ControlFlow;

use crate::{NativeError, WindowApi, WindowQueryResult};

use super::is_candidate_title;

/// Walks every top-level window once and summarizes those owned by `pid`.
///
/// Every visible window of the process counts toward `window_count`, even
/// untitled or helper windows. Only non-empty, non-noise titles compete
/// for `title`; the first longest one wins.
///
/// Title length is counted in characters (Unicode scalar values), not
/// UTF-8 bytes.
pub fn query_windows<A: WindowApi + ?Sized>(
    api: &A,
    pid: u32,
) -> Result<WindowQueryResult, NativeError> {
    let mut result = WindowQueryResult::default();
    let mut best_len = 0;

    api.enum_windows(&mut |handle| {
        if !api.is_window_visible(handle) {
            return ControlFlow::Continue(());
        }
        if api.window_process_id(handle) != pid {
            return ControlFlow::Continue(());
        }

        result.window_count += 1;

        let title = api.window_title(handle);
        if is_candidate_title(&title) {
            let len = title.chars().count();
            if len > best_len {
                best_len = len;
                result.title = title;
            }
        }

        ControlFlow::Continue(())
    })?;

    result.has_window = result.window_count > 0 && !result.title.is_empty();
    Ok(result)
}
