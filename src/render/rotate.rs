use image::RgbaImage;

use crate::foundation::core::Point;
use crate::foundation::math::{quantize_u8, reflect_index};
use crate::transform::affine::{rotation_about, sampling_map};

/// Rotate `src` about its integer center `(w / 2, h / 2)` into a buffer of the same size.
///
/// Sampling is bilinear; source coordinates that fall outside the buffer are mirrored back in
/// (edge sample repeated) so the frame never picks up a hard transparent or black border.
pub fn rotate_reflect(src: &RgbaImage, angle_degrees: f64) -> RgbaImage {
    let (w, h) = src.dimensions();
    if w == 0 || h == 0 || angle_degrees == 0.0 {
        return src.clone();
    }

    let center = Point::new(f64::from(w / 2), f64::from(h / 2));
    let inv = sampling_map(rotation_about(angle_degrees, center));

    RgbaImage::from_fn(w, h, |x, y| {
        let s = inv * Point::new(f64::from(x), f64::from(y));
        image::Rgba(sample_bilinear_reflect(src, s))
    })
}

fn sample_bilinear_reflect(src: &RgbaImage, p: Point) -> [u8; 4] {
    let (w, h) = (i64::from(src.width()), i64::from(src.height()));
    let x0 = p.x.floor();
    let y0 = p.y.floor();
    let fx = p.x - x0;
    let fy = p.y - y0;
    let (x0, y0) = (x0 as i64, y0 as i64);

    let fetch = |x: i64, y: i64| {
        let xi = reflect_index(x, w) as u32;
        let yi = reflect_index(y, h) as u32;
        src.get_pixel(xi, yi).0
    };

    let p00 = fetch(x0, y0);
    let p10 = fetch(x0 + 1, y0);
    let p01 = fetch(x0, y0 + 1);
    let p11 = fetch(x0 + 1, y0 + 1);

    let mut out = [0u8; 4];
    for c in 0..4 {
        let top = f64::from(p00[c]) * (1.0 - fx) + f64::from(p10[c]) * fx;
        let bottom = f64::from(p01[c]) * (1.0 - fx) + f64::from(p11[c]) * fx;
        out[c] = quantize_u8(top * (1.0 - fy) + bottom * fy);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/rotate.rs"]
mod tests;
