//! CPU pixel stages: resample, rotate, blend.

/// Straight-alpha blending of an RGBA overlay into an RGB target.
pub mod composite;
/// Area-averaging resize.
pub mod resample;
/// Rotation about the buffer center with reflected borders.
pub mod rotate;
