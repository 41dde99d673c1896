//! The native windowing surface the engine is written against.
//!
//! The platform crate implements [`WindowApi`] over Win32; tests use an
//! in-memory fake. One instance is built at startup and borrowed by every
//! component.

use std::ops::{BitOr, ControlFlow};

use crate::{NativeError, ScreenRect, WindowHandle};

#[cfg(test)]
pub(crate) mod fake;

/// Fixed title buffer length in UTF-16 code units. Longer titles are
/// truncated by the OS.
pub const TITLE_BUFFER_LEN: usize = 256;

/// Flags accepted by [`WindowApi::set_window_pos`].
///
/// Values match the Win32 `SWP_*` constants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionFlags(u32);

impl PositionFlags {
    /// Keep the current position; `x` and `y` are ignored.
    pub const NO_MOVE: Self = Self(0x0002);
    /// Keep the current z-order.
    pub const NO_ZORDER: Self = Self(0x0004);
    /// Do not activate or focus the window.
    pub const NO_ACTIVATE: Self = Self(0x0010);

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for PositionFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Synchronous access to top-level windows.
pub trait WindowApi {
    /// Calls `visit` once for every top-level window, in OS order.
    ///
    /// Returning `ControlFlow::Break` stops the walk early; that is not
    /// reported as an error.
    fn enum_windows(
        &self,
        visit: &mut dyn FnMut(WindowHandle) -> ControlFlow<()>,
    ) -> Result<(), NativeError>;

    fn is_window_visible(&self, handle: WindowHandle) -> bool;

    /// Returns the id of the process that created the window, or `0` if
    /// the handle is no longer valid.
    fn window_process_id(&self, handle: WindowHandle) -> u32;

    /// Returns the window title, truncated to [`TITLE_BUFFER_LEN`] code
    /// units. Empty on failure.
    fn window_title(&self, handle: WindowHandle) -> String;

    fn window_rect(&self, handle: WindowHandle) -> Result<ScreenRect, NativeError>;

    fn set_window_pos(
        &self,
        handle: WindowHandle,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        flags: PositionFlags,
    ) -> Result<(), NativeError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_match_win32_values() {
        let flags = PositionFlags::NO_MOVE | PositionFlags::NO_ZORDER | PositionFlags::NO_ACTIVATE;
        assert_eq!(flags.bits(), 0x0016);
        assert!(flags.contains(PositionFlags::NO_MOVE));
        assert!(!PositionFlags::NO_ZORDER.contains(PositionFlags::NO_MOVE));
    }
}
