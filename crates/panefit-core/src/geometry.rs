use serde::{Deserialize, Serialize};

/// A window's position and size in absolute screen coordinates.
///
/// No DPI scaling or per-monitor normalization is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowGeometry {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl WindowGeometry {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Raw window rectangle as reported by the native API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl From<ScreenRect> for WindowGeometry {
    fn from(rect: ScreenRect) -> Self {
        Self::new(
            rect.left,
            rect.top,
            rect.right - rect.left,
            rect.bottom - rect.top,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_is_edge_difference() {
        let rect = ScreenRect {
            left: -8,
            top: 10,
            right: 1912,
            bottom: 1090,
        };
        assert_eq!(
            WindowGeometry::from(rect),
            WindowGeometry::new(-8, 10, 1920, 1080)
        );
    }

    #[test]
    fn empty_rect_has_zero_extent() {
        assert_eq!(
            WindowGeometry::from(ScreenRect::default()),
            WindowGeometry::new(0, 0, 0, 0)
        );
    }
}
