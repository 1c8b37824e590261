//! Glasses asset loading and the face-shape catalog.

/// Face-shape categories and their candidate asset lists.
pub mod catalog;
/// Decoding, validation and PNG encoding.
pub mod decode;
