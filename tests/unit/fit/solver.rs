use super::*;

fn eyes(l: (i32, i32), r: (i32, i32)) -> EyePair {
    EyePair::new(l, r)
}

#[test]
fn level_eyes_scale_and_anchor() {
    let t = solve(eyes((100, 200), (200, 200)), 50, 20, &FitParams::default());
    assert!((t.scale - 3.6).abs() < 1e-12);
    assert_eq!(t.angle_degrees, 0.0);
    assert_eq!(t.width, 180);
    assert_eq!(t.height, 72);
    // center (150, 200); lift round(0.2 * 72) = 14
    assert_eq!(t.anchor, PixelPoint::new(150 - 90, 200 - 36 + 14));
    assert!(!t.is_degenerate());
}

#[test]
fn angle_is_signed_in_image_coordinates() {
    let down = solve(eyes((0, 0), (100, 100)), 10, 10, &FitParams::default());
    assert!((down.angle_degrees - 45.0).abs() < 1e-9);

    let up = solve(eyes((0, 100), (100, 0)), 10, 10, &FitParams::default());
    assert!((up.angle_degrees + 45.0).abs() < 1e-9);
    assert!((up.angle_radians() + std::f64::consts::FRAC_PI_4).abs() < 1e-12);
}

#[test]
fn distinct_eyes_give_positive_scale() {
    for (l, r) in [((0, 0), (1, 0)), ((10, 10), (10, 11)), ((-5, 3), (40, -7))] {
        let t = solve(eyes(l, r), 64, 32, &FitParams::default());
        assert!(t.scale > 0.0, "{l:?} {r:?}");
    }
}

#[test]
fn coincident_eyes_are_degenerate() {
    let t = solve(eyes((50, 50), (50, 50)), 64, 32, &FitParams::default());
    assert_eq!(t.scale, 0.0);
    assert_eq!((t.width, t.height), (0, 0));
    assert!(t.is_degenerate());
    assert_eq!(t.anchor, PixelPoint::new(50, 50));
}

#[test]
fn zero_width_asset_is_degenerate() {
    let t = solve(eyes((0, 0), (10, 0)), 0, 10, &FitParams::default());
    assert_eq!(t.scale, 0.0);
    assert!(t.is_degenerate());
}

#[test]
fn params_control_width_and_offset() {
    let params = FitParams {
        width_factor: 1.0,
        vertical_offset: 0.0,
    };
    let t = solve(eyes((0, 0), (100, 0)), 100, 50, &params);
    assert_eq!((t.width, t.height), (100, 50));
    assert_eq!(t.anchor, PixelPoint::new(50 - 50, -25));
}

#[test]
fn params_deserialize_with_defaults() {
    let p: FitParams = serde_json::from_str(r#"{"width_factor": 2.0}"#).unwrap();
    assert_eq!(p.width_factor, 2.0);
    assert_eq!(p.vertical_offset, 0.2);
}
