use std::ops::ControlFlow;

use panefit_core::native::TITLE_BUFFER_LEN;
use panefit_core::{NativeError, PositionFlags, ScreenRect, WindowApi, WindowHandle};

use windows::Win32::Foundation::{HWND, LPARAM, RECT};
use windows::Win32::UI::WindowsAndMessaging::{
    EnumWindows, GetWindowRect, GetWindowTextW, GetWindowThreadProcessId, IsWindowVisible,
    SET_WINDOW_POS_FLAGS, SetWindowPos,
};
use windows::core::BOOL;

/// The Win32 window API.
///
/// Stateless; one instance is created at startup and borrowed by every
/// engine component.
#[derive(Debug, Default, Clone, Copy)]
pub struct Win32Api;

impl Win32Api {
    pub fn new() -> Self {
        Self
    }
}

fn hwnd(handle: WindowHandle) -> HWND {
    HWND(handle.raw() as *mut _)
}

fn native_error(e: windows::core::Error) -> NativeError {
    NativeError::new(e.code().0, e.message())
}

/// State shared with [`enum_window_callback`] through `LPARAM`.
///
/// The visitor is a fat pointer, so it travels inside this struct rather
/// than being cast to an integer directly.
struct EnumState<'a> {
    visit: &'a mut dyn FnMut(WindowHandle) -> ControlFlow<()>,
    stopped: bool,
}

/// Callback invoked by `EnumWindows` for each top-level window.
///
/// Returns `TRUE` to continue enumeration, `FALSE` to stop.
unsafe extern "system" fn enum_window_callback(hwnd: HWND, lparam: LPARAM) -> BOOL {
    // SAFETY: lparam points to the EnumState owned by enum_windows(),
    // which outlives the synchronous EnumWindows call.
    let state = unsafe { &mut *(lparam.0 as *mut EnumState<'_>) };

    match (state.visit)(WindowHandle(hwnd.0 as usize)) {
        ControlFlow::Continue(()) => BOOL(1),
        ControlFlow::Break(()) => {
            state.stopped = true;
            BOOL(0)
        }
    }
}

impl WindowApi for Win32Api {
    fn enum_windows(
        &self,
        visit: &mut dyn FnMut(WindowHandle) -> ControlFlow<()>,
    ) -> Result<(), NativeError> {
        let mut state = EnumState {
            visit,
            stopped: false,
        };

        // SAFETY: EnumWindows runs synchronously and calls our callback
        // for each top-level window. The pointer to `state` stays valid
        // for the whole call.
        let result = unsafe {
            EnumWindows(
                Some(enum_window_callback),
                LPARAM(&mut state as *mut EnumState<'_> as isize),
            )
        };

        match result {
            // A visitor that stops early makes EnumWindows return FALSE.
            Err(_) if state.stopped => Ok(()),
            Err(e) => Err(native_error(e)),
            Ok(()) => Ok(()),
        }
    }

    fn is_window_visible(&self, handle: WindowHandle) -> bool {
        // SAFETY: IsWindowVisible is a simple query that returns a BOOL.
        unsafe { IsWindowVisible(hwnd(handle)).as_bool() }
    }

    fn window_process_id(&self, handle: WindowHandle) -> u32 {
        let mut pid = 0u32;
        // SAFETY: pid is a valid out-pointer for the duration of the call.
        unsafe { GetWindowThreadProcessId(hwnd(handle), Some(&mut pid as *mut u32)) };
        pid
    }

    fn window_title(&self, handle: WindowHandle) -> String {
        let mut buffer = [0u16; TITLE_BUFFER_LEN];
        // SAFETY: GetWindowTextW writes at most buffer.len() units,
        // including the null terminator.
        let copied = unsafe { GetWindowTextW(hwnd(handle), &mut buffer) };
        if copied <= 0 {
            return String::new();
        }
        String::from_utf16_lossy(&buffer[..copied as usize])
    }

    fn window_rect(&self, handle: WindowHandle) -> Result<ScreenRect, NativeError> {
        let mut rect = RECT::default();
        // SAFETY: rect is a valid out-pointer.
        unsafe { GetWindowRect(hwnd(handle), &mut rect) }.map_err(native_error)?;

        Ok(ScreenRect {
            left: rect.left,
            top: rect.top,
            right: rect.right,
            bottom: rect.bottom,
        })
    }

    fn set_window_pos(
        &self,
        handle: WindowHandle,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        flags: PositionFlags,
    ) -> Result<(), NativeError> {
        tracing::debug!(
            %handle, x, y, width, height, flags = flags.bits(),
            "SetWindowPos"
        );

        // SAFETY: SetWindowPos with a window handle from this enumeration
        // pass. A stale handle is reported as an error, not UB.
        unsafe {
            SetWindowPos(
                hwnd(handle),
                None,
                x,
                y,
                width,
                height,
                SET_WINDOW_POS_FLAGS(flags.bits()),
            )
        }
        .map_err(native_error)
    }
}
