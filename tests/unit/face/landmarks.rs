use super::*;

fn mesh_with(points: &[(usize, f64, f64)]) -> LandmarkSet {
    let mut pts = vec![Point::new(0.5, 0.5); 468];
    for &(idx, x, y) in points {
        pts[idx] = Point::new(x, y);
    }
    LandmarkSet::new(pts)
}

#[test]
fn reads_named_points_from_fixed_indices() {
    let set = mesh_with(&[
        (LEFT_EYE_OUTER, 0.25, 0.5),
        (RIGHT_EYE_OUTER, 0.75, 0.5),
        (NOSE_BRIDGE, 0.5, 0.55),
    ]);
    let lm = EyeLandmarks::from_landmarks(&set, 400, 200).unwrap();
    assert_eq!(lm.left_eye, PixelPoint::new(100, 100));
    assert_eq!(lm.right_eye, PixelPoint::new(300, 100));
    assert_eq!(lm.nose_bridge, PixelPoint::new(200, 110));
    assert_eq!(
        lm.eyes(),
        EyePair::new(PixelPoint::new(100, 100), PixelPoint::new(300, 100))
    );
}

#[test]
fn denormalization_truncates() {
    let set = mesh_with(&[(LEFT_EYE_OUTER, 0.3333, 0.9999)]);
    let lm = EyeLandmarks::from_landmarks(&set, 10, 10).unwrap();
    assert_eq!(lm.left_eye, PixelPoint::new(3, 9));
}

#[test]
fn short_landmark_set_is_a_validation_error() {
    let set = LandmarkSet::new(vec![Point::new(0.1, 0.1); 100]);
    let err = EyeLandmarks::from_landmarks(&set, 10, 10).unwrap_err();
    assert!(matches!(err, GlassioError::Validation(_)));
    assert!(err.to_string().contains("263"));
}

#[test]
fn approximate_eyes_follow_fixed_fractions() {
    let eyes = EyePair::approximate(200, 100);
    assert_eq!(eyes.left, PixelPoint::new(70, 40));
    assert_eq!(eyes.right, PixelPoint::new(130, 40));
}

#[test]
fn parses_json_pairs() {
    let set = LandmarkSet::from_json(br#"[[0.1, 0.2], [0.3, 0.4]]"#).unwrap();
    assert_eq!(set.len(), 2);
    assert_eq!(set.points[1], Point::new(0.3, 0.4));

    let err = LandmarkSet::from_json(br#"{"x": 1}"#).unwrap_err();
    assert!(matches!(err, GlassioError::Serde(_)));
}
