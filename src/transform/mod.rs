//! Shared transform helpers.

/// Rotation affines built on `kurbo`.
pub mod affine;
