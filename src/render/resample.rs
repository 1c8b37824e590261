use anyhow::Context;
use fast_image_resize as fir;
use fir::images::{TypedImage, TypedImageRef};
use fir::pixels::U8x4;
use fir::{FilterType, ResizeAlg, ResizeOptions, Resizer};
use image::RgbaImage;

use crate::foundation::error::GlassioResult;

/// Resize with area (box) averaging: every destination pixel is the mean of the source pixels
/// under its footprint. All four channels are treated identically (no alpha premultiply).
///
/// A zero target dimension (or an empty source) yields an empty image.
pub fn resize_area(src: &RgbaImage, width: u32, height: u32) -> GlassioResult<RgbaImage> {
    let (src_w, src_h) = src.dimensions();
    if width == 0 || height == 0 || src_w == 0 || src_h == 0 {
        return Ok(RgbaImage::new(0, 0));
    }
    if (width, height) == (src_w, src_h) {
        return Ok(src.clone());
    }

    let src_view = TypedImageRef::<U8x4>::from_buffer(src_w, src_h, src.as_raw())
        .context("wrap glasses pixels for resize")?;

    let mut buf = vec![0u8; width as usize * height as usize * 4];
    let mut dst_view = TypedImage::<U8x4>::from_buffer(width, height, &mut buf)
        .context("allocate resize target")?;

    let opts = ResizeOptions::new()
        .resize_alg(ResizeAlg::Convolution(FilterType::Box))
        .use_alpha(false);
    Resizer::new()
        .resize_typed::<U8x4>(&src_view, &mut dst_view, &opts)
        .with_context(|| format!("resize {src_w}x{src_h} -> {width}x{height}"))?;
    drop(dst_view);

    let out = RgbaImage::from_raw(width, height, buf)
        .context("resized buffer does not match its dimensions")?;
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/render/resample.rs"]
mod tests;
