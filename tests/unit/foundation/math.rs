use super::*;

#[test]
fn quantize_rounds_and_saturates() {
    assert_eq!(quantize_u8(0.49), 0);
    assert_eq!(quantize_u8(0.5), 1);
    assert_eq!(quantize_u8(254.6), 255);
    assert_eq!(quantize_u8(300.0), 255);
    assert_eq!(quantize_u8(-4.0), 0);
}

#[test]
fn scaled_dim_rounds_and_collapses_degenerate_scales() {
    assert_eq!(scaled_dim(50, 3.6), 180);
    assert_eq!(scaled_dim(10, 0.25), 3);
    assert_eq!(scaled_dim(10, 0.0), 0);
    assert_eq!(scaled_dim(10, -2.0), 0);
    assert_eq!(scaled_dim(10, f64::NAN), 0);
}

#[test]
fn reflect_index_repeats_edge_sample() {
    let len = 4;
    let mapped: Vec<i64> = (-5..9).map(|i| reflect_index(i, len)).collect();
    // index:  -5 -4 -3 -2 -1  0  1  2  3  4  5  6  7  8
    assert_eq!(mapped, vec![3, 3, 2, 1, 0, 0, 1, 2, 3, 3, 2, 1, 0, 0]);
}

#[test]
fn reflect_index_single_sample_is_always_zero() {
    for i in -3..3 {
        assert_eq!(reflect_index(i, 1), 0);
    }
}
