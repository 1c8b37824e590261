//! Boundary with the external landmark detector.

/// Landmark sets and the named eye/nose fields read from them.
pub mod landmarks;
