use std::cell::RefCell;
use std::ops::ControlFlow;

use crate::{NativeError, PositionFlags, ScreenRect, WindowApi, WindowHandle};

#[derive(Debug, Clone)]
pub(crate) struct FakeWindow {
    pub handle: WindowHandle,
    pub pid: u32,
    pub visible: bool,
    pub title: String,
    pub rect: ScreenRect,
}

impl FakeWindow {
    pub fn new(handle: usize, pid: u32, title: &str) -> Self {
        Self {
            handle: WindowHandle(handle),
            pid,
            visible: true,
            title: title.into(),
            rect: ScreenRect {
                left: 0,
                top: 0,
                right: 800,
                bottom: 600,
            },
        }
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SetPosCall {
    pub handle: WindowHandle,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub flags: PositionFlags,
}

/// In-memory desktop. `set_window_pos` applies to the stored rectangle
/// the same way the OS would.
#[derive(Debug, Default)]
pub(crate) struct FakeWindowApi {
    windows: RefCell<Vec<FakeWindow>>,
    pub calls: RefCell<Vec<SetPosCall>>,
    enum_passes: RefCell<u32>,
    fail_enum: bool,
    fail_rect: bool,
    fail_set_pos: bool,
}

impl FakeWindowApi {
    pub fn with_windows(windows: Vec<FakeWindow>) -> Self {
        Self {
            windows: RefCell::new(windows),
            ..Default::default()
        }
    }

    pub fn failing_enum(mut self) -> Self {
        self.fail_enum = true;
        self
    }

    pub fn failing_rect(mut self) -> Self {
        self.fail_rect = true;
        self
    }

    pub fn failing_set_pos(mut self) -> Self {
        self.fail_set_pos = true;
        self
    }

    pub fn passes(&self) -> u32 {
        *self.enum_passes.borrow()
    }

    fn find(&self, handle: WindowHandle) -> Option<FakeWindow> {
        self.windows
            .borrow()
            .iter()
            .find(|w| w.handle == handle)
            .cloned()
    }
}

impl WindowApi for FakeWindowApi {
    fn enum_windows(
        &self,
        visit: &mut dyn FnMut(WindowHandle) -> ControlFlow<()>,
    ) -> Result<(), NativeError> {
        *self.enum_passes.borrow_mut() += 1;
        if self.fail_enum {
            return Err(NativeError::new(5, "Access is denied."));
        }
        let handles: Vec<_> = self.windows.borrow().iter().map(|w| w.handle).collect();
        for handle in handles {
            if visit(handle).is_break() {
                break;
            }
        }
        Ok(())
    }

    fn is_window_visible(&self, handle: WindowHandle) -> bool {
        self.find(handle).is_some_and(|w| w.visible)
    }

    fn window_process_id(&self, handle: WindowHandle) -> u32 {
        self.find(handle).map_or(0, |w| w.pid)
    }

    fn window_title(&self, handle: WindowHandle) -> String {
        self.find(handle).map(|w| w.title).unwrap_or_default()
    }

    fn window_rect(&self, handle: WindowHandle) -> Result<ScreenRect, NativeError> {
        if self.fail_rect {
            return Err(NativeError::new(1400, "Invalid window handle."));
        }
        self.find(handle)
            .map(|w| w.rect)
            .ok_or_else(|| NativeError::new(1400, "Invalid window handle."))
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
        self.calls.borrow_mut().push(SetPosCall {
            handle,
            x,
            y,
            width,
            height,
            flags,
        });
        if self.fail_set_pos {
            return Err(NativeError::new(5, "Access is denied."));
        }

        let mut windows = self.windows.borrow_mut();
        let window = windows
            .iter_mut()
            .find(|w| w.handle == handle)
            .ok_or_else(|| NativeError::new(1400, "Invalid window handle."))?;

        let (left, top) = if flags.contains(PositionFlags::NO_MOVE) {
            (window.rect.left, window.rect.top)
        } else {
            (x, y)
        };
        window.rect = ScreenRect {
            left,
            top,
            right: left + width,
            bottom: top + height,
        };
        Ok(())
    }
}
