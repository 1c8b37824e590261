//! glassio fits a pair of eyeglasses to a face photo and alpha-composites it in place.
//!
//! # Pipeline overview
//!
//! 1. **Locate**: detector landmarks -> [`EyeLandmarks`] -> [`EyePair`] (or
//!    [`EyePair::approximate`] when no detector output is available)
//! 2. **Solve**: `EyePair + asset size -> Transform` (scale, eye-line angle, anchor)
//! 3. **Prepare**: area-resize the asset, rotate it about its center with reflected borders
//! 4. **Blend**: straight-alpha composite into the RGB target, clipped to its bounds
//! 5. **Encode** (batch mode): PNG bytes per candidate
//!
//! Two ownership contracts are exposed:
//!
//! - [`overlay_in_place`] / [`overlay_path_in_place`] mutate the caller's buffer and fail loudly on
//!   a missing or invalid asset.
//! - [`render_candidates`] / [`render_for_face_shape`] never touch the original; each candidate is
//!   composited onto its own copy and reported as a [`CandidateOutcome`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Glasses asset loading and the face-shape catalog.
pub mod assets;
/// JSON configuration.
pub mod config;
/// Landmark boundary types.
pub mod face;
/// Transform solving.
pub mod fit;
/// Overlay pipeline entry points.
pub mod overlay;
/// Pixel stages.
pub mod render;
/// Shared transform helpers.
pub mod transform;

pub use assets::catalog::{BUILTIN_STYLES, Catalog, FaceShape};
pub use assets::decode::{
    GlassesAsset, decode_glasses, decode_target, encode_png, load_glasses, load_target,
};
pub use config::OverlayConfig;
pub use face::landmarks::{EyeLandmarks, EyePair, LandmarkSet};
pub use fit::solver::{FitParams, Transform, solve};
pub use foundation::core::{Affine, PixelPoint, Point, Vec2};
pub use foundation::error::{GlassioError, GlassioResult};
pub use overlay::pipeline::{
    BatchReport, CandidateOutcome, OverlayReport, SkipReason, overlay_in_place,
    overlay_path_in_place, prepare, render_candidates, render_for_face_shape,
};
pub use render::composite::{blend_pixel, composite_in_place};
pub use render::resample::resize_area;
pub use render::rotate::rotate_reflect;
