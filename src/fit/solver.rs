use crate::face::landmarks::EyePair;
use crate::foundation::core::PixelPoint;
use crate::foundation::math::scaled_dim;

/// Tunable fitting constants.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FitParams {
    /// Rendered glasses width as a multiple of the measured eye span.
    pub width_factor: f64,
    /// Downward nudge of the anchor toward the nose bridge, as a fraction of rendered height.
    pub vertical_offset: f64,
}

impl Default for FitParams {
    fn default() -> Self {
        Self {
            width_factor: 1.8,
            vertical_offset: 0.2,
        }
    }
}

/// Placement of one glasses asset on one face.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Transform {
    /// Isotropic scale applied to the native asset.
    pub scale: f64,
    /// Eye-line angle in degrees, y-down (positive when the right eye sits lower).
    pub angle_degrees: f64,
    /// Top-left of the prepared asset in target pixels.
    pub anchor: PixelPoint,
    /// Resized asset width.
    pub width: u32,
    /// Resized asset height.
    pub height: u32,
}

impl Transform {
    /// `true` when the resized asset has no pixels to place.
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Rotation in radians.
    pub fn angle_radians(&self) -> f64 {
        self.angle_degrees.to_radians()
    }
}

/// Fit an `asset_width x asset_height` asset to `eyes`.
///
/// Coincident eyes (or a zero-width asset) produce `scale == 0` and a degenerate transform.
pub fn solve(eyes: EyePair, asset_width: u32, asset_height: u32, params: &FitParams) -> Transform {
    let EyePair { left, right } = eyes;
    let eye_distance = left.distance(right);
    let scale = if asset_width == 0 {
        0.0
    } else {
        eye_distance / f64::from(asset_width) * params.width_factor
    };

    let dy = f64::from(right.y - left.y);
    let dx = f64::from(right.x - left.x);
    let angle_degrees = dy.atan2(dx).to_degrees();

    let width = scaled_dim(asset_width, scale);
    let height = scaled_dim(asset_height, scale);

    let center = left.midpoint(right);
    let lift = (params.vertical_offset * f64::from(height)).round() as i32;
    let anchor = PixelPoint::new(
        center.x - (width / 2) as i32,
        center.y - (height / 2) as i32 + lift,
    );

    Transform {
        scale,
        angle_degrees,
        anchor,
        width,
        height,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fit/solver.rs"]
mod tests;
