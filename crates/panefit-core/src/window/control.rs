use crate::{Error, PositionFlags, Result, WindowApi, WindowGeometry};

use super::find_window;

/// Reads the current position and size of the window owned by `pid`.
pub fn window_geometry<A: WindowApi + ?Sized>(api: &A, pid: u32) -> Result<WindowGeometry> {
    let handle = find_window(api, pid)?;
    let rect = api
        .window_rect(handle)
        .map_err(|e| Error::native("get window rect", pid, e))?;
    Ok(rect.into())
}

/// Resizes the window owned by `pid`, keeping its position.
///
/// Z-order and focus are left untouched.
pub fn set_window_size<A: WindowApi + ?Sized>(
    api: &A,
    pid: u32,
    width: i32,
    height: i32,
) -> Result<()> {
    let handle = find_window(api, pid)?;
    let flags = PositionFlags::NO_MOVE | PositionFlags::NO_ZORDER | PositionFlags::NO_ACTIVATE;

    api.set_window_pos(handle, 0, 0, width, height, flags)
        .map_err(|e| Error::native("set window size", pid, e))?;

    tracing::info!(pid, width, height, "window size changed");
    Ok(())
}

/// Moves and resizes the window owned by `pid`.
///
/// Z-order and focus are left untouched.
pub fn set_window_position<A: WindowApi + ?Sized>(
    api: &A,
    pid: u32,
    geometry: WindowGeometry,
) -> Result<()> {
    let handle = find_window(api, pid)?;
    let flags = PositionFlags::NO_ZORDER | PositionFlags::NO_ACTIVATE;
    let WindowGeometry {
        x,
        y,
        width,
        height,
    } = geometry;

    api.set_window_pos(handle, x, y, width, height, flags)
        .map_err(|e| Error::native("set window position", pid, e))?;

    tracing::info!(pid, x, y, width, height, "window position changed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScreenRect;
    use crate::WindowHandle;
    use crate::native::fake::{FakeWindow, FakeWindowApi};

    fn desktop() -> FakeWindowApi {
        let mut main = FakeWindow::new(0x20, 42, "Untitled - Notepad");
        main.rect = ScreenRect {
            left: 100,
            top: 50,
            right: 900,
            bottom: 650,
        };
        FakeWindowApi::with_windows(vec![FakeWindow::new(0x10, 42, "Default IME"), main])
    }

    #[test]
    fn geometry_is_derived_from_edges() {
        let api = desktop();

        assert_eq!(
            window_geometry(&api, 42).unwrap(),
            WindowGeometry::new(100, 50, 800, 600)
        );
    }

    #[test]
    fn rect_failure_surfaces_os_error() {
        let api = desktop().failing_rect();

        let err = window_geometry(&api, 42).unwrap_err();

        match err {
            Error::Native {
                operation, source, ..
            } => {
                assert_eq!(operation, "get window rect");
                assert_eq!(source.code, 1400);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn set_size_keeps_position_and_focus() {
        let api = desktop();

        set_window_size(&api, 42, 1280, 720).unwrap();

        let calls = api.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].handle, WindowHandle(0x20));
        assert_eq!((calls[0].width, calls[0].height), (1280, 720));
        assert!(calls[0].flags.contains(PositionFlags::NO_MOVE));
        assert!(calls[0].flags.contains(PositionFlags::NO_ZORDER));
        assert!(calls[0].flags.contains(PositionFlags::NO_ACTIVATE));
        drop(calls);

        assert_eq!(
            window_geometry(&api, 42).unwrap(),
            WindowGeometry::new(100, 50, 1280, 720)
        );
    }

    #[test]
    fn set_position_applies_all_four_values() {
        let api = desktop();
        let target = WindowGeometry::new(30, 30, 1860, 1000);

        set_window_position(&api, 42, target).unwrap();

        let call = api.calls.borrow()[0].clone();
        assert_eq!((call.x, call.y, call.width, call.height), (30, 30, 1860, 1000));
        assert!(!call.flags.contains(PositionFlags::NO_MOVE));
        assert!(call.flags.contains(PositionFlags::NO_ZORDER | PositionFlags::NO_ACTIVATE));
    }

    #[test]
    fn get_after_set_position_returns_same_geometry() {
        let api = desktop();
        let target = WindowGeometry::new(-8, 0, 1936, 1048);

        set_window_position(&api, 42, target).unwrap();

        assert_eq!(window_geometry(&api, 42).unwrap(), target);
        assert_eq!(window_geometry(&api, 42).unwrap(), target);
    }

    #[test]
    fn each_operation_runs_its_own_enumeration() {
        let api = desktop();

        window_geometry(&api, 42).unwrap();
        set_window_size(&api, 42, 640, 480).unwrap();

        assert_eq!(api.passes(), 2);
    }

    #[test]
    fn missing_window_aborts_before_any_native_change() {
        let api = desktop();

        let err = set_window_size(&api, 7, 640, 480).unwrap_err();

        assert!(matches!(err, Error::WindowNotFound { pid: 7 }));
        assert!(api.calls.borrow().is_empty());
    }

    #[test]
    fn set_size_failure_is_reported_with_operation() {
        let api = desktop().failing_set_pos();

        let err = set_window_size(&api, 42, 640, 480).unwrap_err();

        assert!(matches!(
            err,
            Error::Native {
                operation: "set window size",
                pid: 42,
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "set window size failed for pid 42: OS error 0x00000005: Access is denied."
        );
    }

    #[test]
    fn set_position_failure_is_reported_with_operation() {
        let api = desktop().failing_set_pos();

        let err =
            set_window_position(&api, 42, WindowGeometry::new(0, 0, 1024, 768)).unwrap_err();

        assert!(matches!(
            err,
            Error::Native {
                operation: "set window position",
                pid: 42,
                ..
            }
        ));
        assert_eq!(
            window_geometry(&api, 42).unwrap(),
            WindowGeometry::new(100, 50, 800, 600)
        );
    }
}
