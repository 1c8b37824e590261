use std::path::Path;

use anyhow::Context;

use crate::foundation::core::{PixelPoint, Point};
use crate::foundation::error::{GlassioError, GlassioResult};

/// Detector index of the left-eye outer corner.
pub const LEFT_EYE_OUTER: usize = 33;
/// Detector index of the right-eye outer corner.
pub const RIGHT_EYE_OUTER: usize = 263;
/// Detector index of the nose bridge.
pub const NOSE_BRIDGE: usize = 168;

/// Normalized facial landmarks as produced by the upstream detector.
///
/// Coordinates are in `[0, 1]` relative to image width/height, ordered by the detector's fixed
/// point scheme. On disk this is a plain JSON array of `[x, y]` pairs.
#[derive(Clone, Debug, PartialEq)]
pub struct LandmarkSet {
    /// Normalized points in detector order.
    pub points: Vec<Point>,
}

impl LandmarkSet {
    /// Wrap detector output.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Number of landmarks.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` when the set holds no landmarks.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Read a landmark set from a JSON file of `[x, y]` pairs.
    pub fn from_path(path: &Path) -> GlassioResult<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("read landmarks '{}'", path.display()))?;
        Self::from_json(&bytes)
    }

    /// Parse a landmark set from JSON bytes.
    pub fn from_json(bytes: &[u8]) -> GlassioResult<Self> {
        let pairs: Vec<[f64; 2]> = serde_json::from_slice(bytes)
            .map_err(|e| GlassioError::serde(format!("parse landmarks JSON: {e}")))?;
        Ok(Self::new(
            pairs.into_iter().map(|[x, y]| Point::new(x, y)).collect(),
        ))
    }

    fn pixel(&self, idx: usize, width: u32, height: u32) -> GlassioResult<PixelPoint> {
        let p = self.points.get(idx).ok_or_else(|| {
            GlassioError::validation(format!(
                "landmark set has {} points, index {idx} required",
                self.points.len()
            ))
        })?;
        Ok(PixelPoint::from_point_trunc(Point::new(
            p.x * f64::from(width),
            p.y * f64::from(height),
        )))
    }
}

/// The two eye positions the transform solver consumes, in target pixel space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EyePair {
    /// Left eye (image-left).
    pub left: PixelPoint,
    /// Right eye (image-right).
    pub right: PixelPoint,
}

impl EyePair {
    /// Pair two eye positions.
    pub fn new(left: impl Into<PixelPoint>, right: impl Into<PixelPoint>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }

    /// Fixed eye guess used when no detector output is available: 35% and 65% across, 40% down.
    pub fn approximate(width: u32, height: u32) -> Self {
        let at = |fx: f64, fy: f64| {
            PixelPoint::from_point_trunc(Point::new(
                f64::from(width) * fx,
                f64::from(height) * fy,
            ))
        };
        Self {
            left: at(0.35, 0.4),
            right: at(0.65, 0.4),
        }
    }
}

/// Named landmarks read once from a [`LandmarkSet`] at the detector boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EyeLandmarks {
    /// Left-eye outer corner.
    pub left_eye: PixelPoint,
    /// Right-eye outer corner.
    pub right_eye: PixelPoint,
    /// Nose bridge.
    pub nose_bridge: PixelPoint,
}

impl EyeLandmarks {
    /// Denormalize the eye and nose landmarks against a `width x height` image.
    pub fn from_landmarks(set: &LandmarkSet, width: u32, height: u32) -> GlassioResult<Self> {
        Ok(Self {
            left_eye: set.pixel(LEFT_EYE_OUTER, width, height)?,
            right_eye: set.pixel(RIGHT_EYE_OUTER, width, height)?,
            nose_bridge: set.pixel(NOSE_BRIDGE, width, height)?,
        })
    }

    /// Eye positions for the solver.
    pub fn eyes(&self) -> EyePair {
        EyePair {
            left: self.left_eye,
            right: self.right_eye,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/face/landmarks.rs"]
mod tests;
