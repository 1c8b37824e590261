use std::path::PathBuf;

/// Convenience result type used across glassio.
pub type GlassioResult<T> = Result<T, GlassioError>;

/// Top-level error taxonomy used by overlay APIs.
#[derive(thiserror::Error, Debug)]
pub enum GlassioError {
    /// The referenced glasses file does not exist.
    #[error("missing glasses asset: '{}'", path.display())]
    MissingAsset {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// The glasses file could not be decoded or carries no alpha channel.
    #[error("invalid glasses asset '{}': {reason}", path.display())]
    InvalidAsset {
        /// Path of the rejected asset.
        path: PathBuf,
        /// Why the asset was rejected.
        reason: String,
    },

    /// Invalid user-provided input (landmarks, config, style index).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Errors while encoding a composited image.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GlassioError {
    /// Build a [`GlassioError::MissingAsset`] value.
    pub fn missing_asset(path: impl Into<PathBuf>) -> Self {
        Self::MissingAsset { path: path.into() }
    }

    /// Build a [`GlassioError::InvalidAsset`] value.
    pub fn invalid_asset(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::InvalidAsset {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Build a [`GlassioError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GlassioError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`GlassioError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
