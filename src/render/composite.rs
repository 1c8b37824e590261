use image::{RgbImage, RgbaImage};

use crate::foundation::core::PixelPoint;
use crate::foundation::math::quantize_u8;

/// Straight (non-premultiplied) alpha blend of one overlay pixel onto an opaque RGB pixel.
///
/// `dst' = (1 - a) * dst + a * src` per channel with `a = src[3] / 255`, rounded.
pub fn blend_pixel(dst: [u8; 3], src: [u8; 4]) -> [u8; 3] {
    let alpha = f64::from(src[3]) / 255.0;
    let mut out = [0u8; 3];
    for c in 0..3 {
        out[c] = quantize_u8((1.0 - alpha) * f64::from(dst[c]) + alpha * f64::from(src[c]));
    }
    out
}

/// Blend `overlay` into `target` with its top-left corner at `anchor`.
///
/// Overlay pixels whose destination falls outside `target` are dropped. Returns the number of
/// destination pixels visited.
pub fn composite_in_place(target: &mut RgbImage, overlay: &RgbaImage, anchor: PixelPoint) -> u64 {
    let (tw, th) = (i64::from(target.width()), i64::from(target.height()));
    let (ow, oh) = (i64::from(overlay.width()), i64::from(overlay.height()));
    let (ax, ay) = (i64::from(anchor.x), i64::from(anchor.y));

    let cols = (-ax).max(0)..ow.min(tw - ax);
    let rows = (-ay).max(0)..oh.min(th - ay);
    if cols.is_empty() || rows.is_empty() {
        return 0;
    }

    let mut visited = 0u64;
    for i in rows {
        for j in cols.clone() {
            let src = overlay.get_pixel(j as u32, i as u32).0;
            let dst = target.get_pixel_mut((ax + j) as u32, (ay + i) as u32);
            dst.0 = blend_pixel(dst.0, src);
            visited += 1;
        }
    }
    visited
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
