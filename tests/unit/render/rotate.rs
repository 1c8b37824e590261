use super::*;

fn gradient(w: u32, h: u32) -> RgbaImage {
    RgbaImage::from_fn(w, h, |x, y| image::Rgba([(x * 10) as u8, (y * 10) as u8, 7, 255]))
}

#[test]
fn zero_angle_is_exact_copy() {
    let src = gradient(9, 5);
    assert_eq!(rotate_reflect(&src, 0.0), src);
}

#[test]
fn keeps_dimensions() {
    let src = gradient(12, 5);
    let out = rotate_reflect(&src, 17.0);
    assert_eq!(out.dimensions(), (12, 5));
}

#[test]
fn quarter_turn_maps_pixels_about_center() {
    // 5x5 with center (2, 2): destination (2 + dx, 2 + dy) samples source (2 + dy, 2 - dx).
    let src = gradient(5, 5);
    let out = rotate_reflect(&src, 90.0);
    assert_eq!(out.get_pixel(2, 2), src.get_pixel(2, 2));
    assert_eq!(out.get_pixel(2, 3), src.get_pixel(3, 2));
    assert_eq!(out.get_pixel(3, 2), src.get_pixel(2, 1));
}

#[test]
fn corners_are_filled_by_reflection_not_transparency() {
    let src = RgbaImage::from_pixel(10, 4, image::Rgba([30, 60, 90, 255]));
    let out = rotate_reflect(&src, 30.0);
    assert!(out.pixels().all(|p| p.0 == [30, 60, 90, 255]));
}

#[test]
fn empty_buffer_passes_through() {
    let src = RgbaImage::new(0, 0);
    assert_eq!(rotate_reflect(&src, 45.0).dimensions(), (0, 0));
}
