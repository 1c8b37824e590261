//! End-to-end overlay: single in-place overlay and copy-per-candidate batches.

/// Solve, prepare, blend and encode.
pub mod pipeline;
