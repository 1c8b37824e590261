use super::*;

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

#[test]
fn zero_angle_is_identity() {
    let m = rotation_about(0.0, Point::new(5.0, 7.0));
    assert!(close(m * Point::new(1.0, 2.0), Point::new(1.0, 2.0)));
}

#[test]
fn positive_angle_turns_x_axis_downward() {
    let c = Point::new(10.0, 10.0);
    let m = rotation_about(90.0, c);
    assert!(close(m * c, c));
    assert!(close(m * Point::new(11.0, 10.0), Point::new(10.0, 11.0)));
}

#[test]
fn sampling_map_undoes_forward() {
    let m = rotation_about(33.0, Point::new(3.0, 4.0));
    let inv = sampling_map(m);
    let p = Point::new(-2.5, 8.0);
    assert!(close(inv * (m * p), p));
}
