use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use crate::foundation::error::{GlassioError, GlassioResult};

/// Face-shape categories the catalog knows about.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FaceShape {
    /// Round face.
    Round,
    /// Square face.
    Square,
    /// Oval face.
    Oval,
    /// Diamond face.
    Diamond,
    /// Anything the classifier produced that is not one of the above.
    Default,
}

impl FaceShape {
    /// All categories, in catalog order.
    pub const ALL: [FaceShape; 5] = [
        FaceShape::Round,
        FaceShape::Square,
        FaceShape::Oval,
        FaceShape::Diamond,
        FaceShape::Default,
    ];

    /// Resolve a classifier label. Case-insensitive; unrecognized labels map to
    /// [`FaceShape::Default`].
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "round" => Self::Round,
            "square" => Self::Square,
            "oval" => Self::Oval,
            "diamond" => Self::Diamond,
            _ => Self::Default,
        }
    }

    /// Lowercase name, also the asset directory name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Round => "round",
            Self::Square => "square",
            Self::Oval => "oval",
            Self::Diamond => "diamond",
            Self::Default => "default",
        }
    }
}

impl std::fmt::Display for FaceShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of styles the built-in catalog ships per face shape.
pub const BUILTIN_STYLES: u32 = 3;

/// Ordered candidate glasses per face shape.
///
/// Always carries a `Default` list; deserialization goes through [`Catalog::from_entries`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(
    try_from = "BTreeMap<FaceShape, Vec<PathBuf>>",
    into = "BTreeMap<FaceShape, Vec<PathBuf>>"
)]
pub struct Catalog {
    entries: BTreeMap<FaceShape, Vec<PathBuf>>,
}

impl Catalog {
    /// `<root>/<shape>/{1,2,3}.png` for every shape.
    pub fn builtin(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let entries = FaceShape::ALL
            .iter()
            .map(|&shape| {
                let paths = (1..=BUILTIN_STYLES)
                    .map(|n| root.join(shape.as_str()).join(format!("{n}.png")))
                    .collect();
                (shape, paths)
            })
            .collect();
        Self { entries }
    }

    /// Build from explicit entries. A `Default` list is required so every label resolves.
    pub fn from_entries(entries: BTreeMap<FaceShape, Vec<PathBuf>>) -> GlassioResult<Self> {
        if !entries.contains_key(&FaceShape::Default) {
            return Err(GlassioError::validation(
                "catalog must define a 'default' entry",
            ));
        }
        Ok(Self { entries })
    }

    /// Candidates for `shape`, falling back to the `Default` list when the shape has no entry.
    pub fn candidates(&self, shape: FaceShape) -> &[PathBuf] {
        self.entries
            .get(&shape)
            .or_else(|| self.entries.get(&FaceShape::Default))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Candidates for a raw classifier label.
    pub fn candidates_for_label(&self, label: &str) -> &[PathBuf] {
        self.candidates(FaceShape::from_label(label))
    }

    /// The `style`-th (1-based) candidate for `shape`.
    pub fn style_path(&self, shape: FaceShape, style: u32) -> GlassioResult<&Path> {
        let list = self.candidates(shape);
        style
            .checked_sub(1)
            .and_then(|i| list.get(i as usize))
            .map(PathBuf::as_path)
            .ok_or_else(|| {
                GlassioError::validation(format!(
                    "style {style} out of range for '{shape}' (1..={})",
                    list.len()
                ))
            })
    }

    /// Re-root every relative path under `root`.
    pub fn rooted_at(mut self, root: &Path) -> Self {
        for paths in self.entries.values_mut() {
            for p in paths.iter_mut() {
                if p.is_relative() {
                    *p = root.join(&*p);
                }
            }
        }
        self
    }
}

impl TryFrom<BTreeMap<FaceShape, Vec<PathBuf>>> for Catalog {
    type Error = GlassioError;

    fn try_from(entries: BTreeMap<FaceShape, Vec<PathBuf>>) -> GlassioResult<Self> {
        Self::from_entries(entries)
    }
}

impl From<Catalog> for BTreeMap<FaceShape, Vec<PathBuf>> {
    fn from(catalog: Catalog) -> Self {
        catalog.entries
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/catalog.rs"]
mod tests;
