use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::assets::catalog::{Catalog, FaceShape};
use crate::fit::solver::FitParams;
use crate::foundation::error::{GlassioError, GlassioResult};

/// User configuration. Every field is optional in JSON.
///
/// ```json
/// {
///   "fit": { "width_factor": 1.8, "vertical_offset": 0.2 },
///   "assets_root": "glasses",
///   "catalog": { "round": ["round/1.png"], "default": ["default/1.png"] }
/// }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OverlayConfig {
    /// Fitting constants.
    pub fit: FitParams,
    /// Directory that relative catalog paths (and the built-in layout) resolve against.
    pub assets_root: PathBuf,
    /// Explicit catalog; the built-in `<shape>/{1,2,3}.png` layout is used when absent.
    pub catalog: Option<BTreeMap<FaceShape, Vec<PathBuf>>>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            fit: FitParams::default(),
            assets_root: PathBuf::from("glasses"),
            catalog: None,
        }
    }
}

impl OverlayConfig {
    /// Read a config JSON file. Relative `assets_root` is resolved against the file's directory.
    pub fn from_path(path: &Path) -> GlassioResult<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        let mut cfg = Self::from_json(&bytes)?;
        if cfg.assets_root.is_relative() {
            let base = path.parent().unwrap_or_else(|| Path::new("."));
            cfg.assets_root = base.join(&cfg.assets_root);
        }
        Ok(cfg)
    }

    /// Parse config JSON and validate it.
    pub fn from_json(bytes: &[u8]) -> GlassioResult<Self> {
        let cfg: Self = serde_json::from_slice(bytes)
            .map_err(|e| GlassioError::serde(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values the solver cannot use.
    pub fn validate(&self) -> GlassioResult<()> {
        let FitParams {
            width_factor,
            vertical_offset,
        } = self.fit;
        if !width_factor.is_finite() || width_factor <= 0.0 {
            return Err(GlassioError::validation(
                "fit.width_factor must be finite and > 0",
            ));
        }
        if !vertical_offset.is_finite() {
            return Err(GlassioError::validation(
                "fit.vertical_offset must be finite",
            ));
        }
        if let Some(entries) = &self.catalog {
            if !entries.contains_key(&FaceShape::Default) {
                return Err(GlassioError::validation(
                    "catalog must define a 'default' entry",
                ));
            }
        }
        Ok(())
    }

    /// Resolve the catalog, rooted at `assets_root`.
    pub fn catalog(&self) -> GlassioResult<Catalog> {
        match &self.catalog {
            Some(entries) => {
                Ok(Catalog::from_entries(entries.clone())?.rooted_at(&self.assets_root))
            }
            None => Ok(Catalog::builtin(&self.assets_root)),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
