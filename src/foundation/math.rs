/// Round a channel value to the nearest `u8`, saturating at the range ends.
pub(crate) fn quantize_u8(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Scale a pixel dimension, rounding to the nearest integer. Non-positive or non-finite
/// results collapse to zero.
pub(crate) fn scaled_dim(dim: u32, scale: f64) -> u32 {
    let v = (f64::from(dim) * scale).round();
    if !v.is_finite() || v <= 0.0 {
        return 0;
    }
    v.min(f64::from(u32::MAX)) as u32
}

/// Map an out-of-range index back into `[0, len)` by mirroring at the borders with the edge
/// sample repeated (`cba|abcd|dcb`).
pub(crate) fn reflect_index(mut i: i64, len: i64) -> i64 {
    if len <= 1 {
        return 0;
    }
    let period = 2 * len;
    i = i.rem_euclid(period);
    if i >= len { period - 1 - i } else { i }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
