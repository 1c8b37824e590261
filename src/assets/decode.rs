use std::{
    io::Cursor,
    path::{Path, PathBuf},
};

use anyhow::Context;
use image::{RgbImage, RgbaImage};

use crate::foundation::error::{GlassioError, GlassioResult};

/// A decoded glasses image with a verified alpha channel.
#[derive(Clone, Debug)]
pub struct GlassesAsset {
    /// Where the asset was loaded from.
    pub source: PathBuf,
    /// Straight (non-premultiplied) RGBA8 pixels.
    pub image: RgbaImage,
}

impl GlassesAsset {
    /// Native width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Native height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Load a glasses asset from disk.
///
/// A missing file is [`GlassioError::MissingAsset`]; an undecodable file or one without exactly
/// four channels (RGB + alpha) is [`GlassioError::InvalidAsset`].
pub fn load_glasses(path: &Path) -> GlassioResult<GlassesAsset> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(GlassioError::missing_asset(path));
        }
        Err(e) => {
            return Err(anyhow::Error::new(e)
                .context(format!("read glasses asset '{}'", path.display()))
                .into());
        }
    };
    decode_glasses(path, &bytes)
}

/// Decode glasses bytes, tagging errors with `source`.
pub fn decode_glasses(source: impl Into<PathBuf>, bytes: &[u8]) -> GlassioResult<GlassesAsset> {
    let source = source.into();
    let dyn_img = match image::load_from_memory(bytes) {
        Ok(img) => img,
        Err(e) => return Err(GlassioError::invalid_asset(source, format!("decode: {e}"))),
    };

    let color = dyn_img.color();
    if !color.has_alpha() || color.channel_count() != 4 {
        return Err(GlassioError::invalid_asset(
            source,
            format!("expected 4 channels with alpha, found {color:?}"),
        ));
    }

    Ok(GlassesAsset {
        source,
        image: dyn_img.into_rgba8(),
    })
}

/// Load a face photo from disk as 3-channel RGB.
pub fn load_target(path: &Path) -> GlassioResult<RgbImage> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
    let img = decode_target(&bytes).with_context(|| format!("decode image '{}'", path.display()))?;
    Ok(img)
}

/// Decode a face photo as 3-channel RGB; any alpha channel is dropped.
pub fn decode_target(bytes: &[u8]) -> anyhow::Result<RgbImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    Ok(dyn_img.into_rgb8())
}

/// Encode an RGB image as PNG (lossless).
pub fn encode_png(img: &RgbImage) -> GlassioResult<Vec<u8>> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| GlassioError::encode(format!("png: {e}")))?;
    Ok(buf)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
