#![forbid(unsafe_code)]

//! Geometric primitives for pointer tracking.

/// A pointer position in screen coordinates (distance units, origin top-left).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Displacement from `anchor` to this point.
    #[inline]
    #[must_use]
    pub fn offset_from(self, anchor: Point) -> Offset {
        Offset::new(self.x - anchor.x, self.y - anchor.y)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// A displacement between two pointer positions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub dx: f32,
    pub dy: f32,
}

impl Offset {
    /// The zero displacement.
    pub const ZERO: Offset = Offset::new(0.0, 0.0);

    /// Create a new offset.
    #[inline]
    #[must_use]
    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    /// Horizontal magnitude, the quantity compared against the swipe threshold.
    #[inline]
    #[must_use]
    pub fn abs_dx(self) -> f32 {
        self.dx.abs()
    }

    /// True when this is exactly the zero displacement.
    #[inline]
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

impl From<(f32, f32)> for Offset {
    fn from((dx, dy): (f32, f32)) -> Self {
        Self { dx, dy }
    }
}
