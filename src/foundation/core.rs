pub use kurbo::{Affine, Point, Vec2};

/// Integer pixel coordinate in target-image space (x right, y down).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct PixelPoint {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl PixelPoint {
    /// Construct a pixel coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Truncate a sub-pixel point toward zero.
    pub fn from_point_trunc(p: Point) -> Self {
        Self {
            x: p.x.trunc() as i32,
            y: p.y.trunc() as i32,
        }
    }

    /// Lift to a floating-point [`Point`].
    pub fn to_point(self) -> Point {
        Point::new(f64::from(self.x), f64::from(self.y))
    }

    /// Integer midpoint, truncated toward zero like an integer cast of the mean.
    pub fn midpoint(self, other: Self) -> Self {
        Self::from_point_trunc(self.to_point().midpoint(other.to_point()))
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Self) -> f64 {
        self.to_point().distance(other.to_point())
    }
}

impl From<(i32, i32)> for PixelPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
