//! Affine transform helpers.

use crate::foundation::core::{Affine, Point};

/// Rotation by `angle_degrees` about `center` in y-down image space.
///
/// A positive angle turns the +x axis toward +y, i.e. clockwise on screen, so a level asset
/// follows an eye line that descends to the right.
#[inline]
pub fn rotation_about(angle_degrees: f64, center: Point) -> Affine {
    Affine::rotate_about(angle_degrees.to_radians(), center)
}

/// Inverse mapping used for backward sampling (destination pixel -> source coordinate).
#[inline]
pub fn sampling_map(forward: Affine) -> Affine {
    forward.inverse()
}

#[cfg(test)]
#[path = "../../tests/unit/transform/affine.rs"]
mod tests;
