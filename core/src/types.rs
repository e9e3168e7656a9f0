use serde::{Deserialize, Serialize};

/// Scalar for view-local coordinates, matching the precision hosts report
/// pointer positions in.
pub type Px = f32;

/// A position in view-local space.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointF {
    pub x: Px,
    pub y: Px,
}

impl PointF {
    pub const fn new(x: Px, y: Px) -> Self {
        Self { x, y }
    }
}

/// Raster and viewport dimensions in whole pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeU {
    pub width: u32,
    pub height: u32,
}

impl SizeU {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Axis-aligned rectangle with `f32` edges.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RectF {
    pub left: Px,
    pub top: Px,
    pub right: Px,
    pub bottom: Px,
}

impl RectF {
    pub const fn new(left: Px, top: Px, right: Px, bottom: Px) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn from_origin_size(origin: PointF, size: SizeU) -> Self {
        Self::new(
            origin.x,
            origin.y,
            origin.x + size.width as Px,
            origin.y + size.height as Px,
        )
    }

    pub fn width(&self) -> Px {
        self.right - self.left
    }

    pub fn height(&self) -> Px {
        self.bottom - self.top
    }

    /// Half-open containment: `left <= x < right` and `top <= y < bottom`.
    pub fn contains(&self, p: PointF) -> bool {
        p.x >= self.left && p.x < self.right && p.y >= self.top && p.y < self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containment_is_half_open() {
        let rect = RectF::new(10.0, 20.0, 30.0, 40.0);

        assert!(rect.contains(PointF::new(10.0, 20.0)));
        assert!(rect.contains(PointF::new(29.9, 39.9)));
        assert!(!rect.contains(PointF::new(30.0, 20.0)));
        assert!(!rect.contains(PointF::new(10.0, 40.0)));
        assert!(!rect.contains(PointF::new(9.9, 20.0)));
    }

    #[test]
    fn rect_from_origin_and_size() {
        let rect = RectF::from_origin_size(PointF::new(450.0, 180.0), SizeU::new(100, 100));

        assert_eq!(rect, RectF::new(450.0, 180.0, 550.0, 280.0));
        assert_eq!(rect.width(), 100.0);
        assert_eq!(rect.height(), 100.0);
    }
}
