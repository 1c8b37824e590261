use std::path::{Path, PathBuf};

use image::{RgbImage, RgbaImage};

use crate::assets::catalog::{Catalog, FaceShape};
use crate::assets::decode::{GlassesAsset, encode_png, load_glasses};
use crate::face::landmarks::EyePair;
use crate::fit::solver::{FitParams, Transform, solve};
use crate::foundation::error::{GlassioError, GlassioResult};
use crate::render::{composite::composite_in_place, resample::resize_area, rotate::rotate_reflect};

/// What a single overlay did to its target.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct OverlayReport {
    /// Solved placement.
    pub transform: Transform,
    /// `false` when the transform was degenerate and nothing was blended.
    pub placed: bool,
    /// Target pixels inside the overlap region.
    pub pixels_blended: u64,
}

/// Resize and rotate `asset` per `transform`. `None` when there are no pixels to place.
pub fn prepare(asset: &GlassesAsset, transform: &Transform) -> GlassioResult<Option<RgbaImage>> {
    if transform.is_degenerate() {
        return Ok(None);
    }
    let resized = resize_area(&asset.image, transform.width, transform.height)?;
    Ok(Some(rotate_reflect(&resized, transform.angle_degrees)))
}

/// Fit `asset` to `eyes` and blend it into `target`, mutating the caller's buffer.
///
/// Degenerate geometry leaves `target` untouched and reports `placed: false`. `target` is only
/// written once the asset has been fully prepared, so an error leaves it untouched as well.
#[tracing::instrument(skip(target, asset), fields(asset = %asset.source.display()))]
pub fn overlay_in_place(
    target: &mut RgbImage,
    eyes: EyePair,
    asset: &GlassesAsset,
    params: &FitParams,
) -> GlassioResult<OverlayReport> {
    let transform = solve(eyes, asset.width(), asset.height(), params);
    let Some(prepared) = prepare(asset, &transform)? else {
        tracing::debug!(scale = transform.scale, "degenerate transform, nothing placed");
        return Ok(OverlayReport {
            transform,
            placed: false,
            pixels_blended: 0,
        });
    };

    let pixels_blended = composite_in_place(target, &prepared, transform.anchor);
    tracing::debug!(
        scale = transform.scale,
        angle = transform.angle_degrees,
        x = transform.anchor.x,
        y = transform.anchor.y,
        pixels_blended,
        "glasses placed"
    );
    Ok(OverlayReport {
        transform,
        placed: true,
        pixels_blended,
    })
}

/// Load the asset at `path` and overlay it in place. Missing or invalid assets are errors.
pub fn overlay_path_in_place(
    target: &mut RgbImage,
    eyes: EyePair,
    path: &Path,
    params: &FitParams,
) -> GlassioResult<OverlayReport> {
    let asset = load_glasses(path)?;
    overlay_in_place(target, eyes, &asset, params)
}

/// Why a batch candidate produced no image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The asset file does not exist.
    Missing,
    /// The asset could not be decoded or has no alpha channel.
    Invalid(String),
    /// The composited image could not be encoded.
    Encode(String),
    /// Any other failure, e.g. an asset file that exists but cannot be read (permission
    /// denied) or a resize error.
    Other(String),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing => f.write_str("missing asset"),
            Self::Invalid(r) => write!(f, "invalid asset: {r}"),
            Self::Encode(r) => write!(f, "encode failed: {r}"),
            Self::Other(r) => write!(f, "{r}"),
        }
    }
}

impl From<GlassioError> for SkipReason {
    fn from(err: GlassioError) -> Self {
        match err {
            GlassioError::MissingAsset { .. } => Self::Missing,
            GlassioError::InvalidAsset { reason, .. } => Self::Invalid(reason),
            GlassioError::Encode(r) => Self::Encode(r),
            other => Self::Other(format!("{other:#}")),
        }
    }
}

/// Outcome for one candidate asset in a batch.
#[derive(Clone, Debug)]
pub struct CandidateOutcome {
    /// Candidate asset path.
    pub path: PathBuf,
    /// PNG bytes of the composited copy, or why the candidate was skipped.
    pub result: Result<Vec<u8>, SkipReason>,
}

/// Per-candidate results of a batch render, in candidate order.
#[derive(Clone, Debug, Default)]
pub struct BatchReport {
    /// One entry per candidate path.
    pub outcomes: Vec<CandidateOutcome>,
}

impl BatchReport {
    /// `true` when there were no candidates at all.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Successful PNG encodings, in candidate order.
    pub fn encoded(&self) -> impl Iterator<Item = &[u8]> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_deref().ok())
    }

    /// Skipped candidates with their reasons, in candidate order.
    pub fn skipped(&self) -> impl Iterator<Item = (&Path, &SkipReason)> {
        self.outcomes.iter().filter_map(|o| match &o.result {
            Ok(_) => None,
            Err(reason) => Some((o.path.as_path(), reason)),
        })
    }

    /// Consume the report, keeping only successful encodings.
    pub fn into_encoded(self) -> Vec<Vec<u8>> {
        self.outcomes
            .into_iter()
            .filter_map(|o| o.result.ok())
            .collect()
    }
}

/// Render one composited copy of `original` per candidate path.
///
/// `original` is never mutated; each candidate works on its own clone. Failing candidates are
/// recorded with a [`SkipReason`] and do not stop the batch.
#[tracing::instrument(skip(original, paths), fields(candidates = paths.len()))]
pub fn render_candidates(
    original: &RgbImage,
    eyes: EyePair,
    paths: &[PathBuf],
    params: &FitParams,
) -> BatchReport {
    let outcomes = paths
        .iter()
        .map(|path| {
            let result = render_one(original, eyes, path, params).map_err(SkipReason::from);
            if let Err(reason) = &result {
                tracing::warn!(path = %path.display(), %reason, "candidate skipped");
            }
            CandidateOutcome {
                path: path.clone(),
                result,
            }
        })
        .collect();
    BatchReport { outcomes }
}

fn render_one(
    original: &RgbImage,
    eyes: EyePair,
    path: &Path,
    params: &FitParams,
) -> GlassioResult<Vec<u8>> {
    let asset = load_glasses(path)?;
    let mut copy = original.clone();
    overlay_in_place(&mut copy, eyes, &asset, params)?;
    encode_png(&copy)
}

/// Resolve `label` through `catalog` and render every candidate for that face shape.
pub fn render_for_face_shape(
    original: &RgbImage,
    eyes: EyePair,
    label: &str,
    catalog: &Catalog,
    params: &FitParams,
) -> BatchReport {
    let shape = FaceShape::from_label(label);
    tracing::debug!(label, %shape, "face shape resolved");
    render_candidates(original, eyes, catalog.candidates(shape), params)
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/pipeline.rs"]
mod tests;
