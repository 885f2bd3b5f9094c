//! Scalar helpers shared by the animation and layout code

/// Linearly re-map `value` from `[in_lo, in_hi]` to `[out_lo, out_hi]`.
///
/// The result is not clamped; values outside the input range extrapolate.
#[inline]
pub fn map_range(value: f32, in_lo: f32, in_hi: f32, out_lo: f32, out_hi: f32) -> f32 {
    let span = in_hi - in_lo;
    if span.abs() < f32::EPSILON {
        return out_lo;
    }
    out_lo + (value - in_lo) / span * (out_hi - out_lo)
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_range_endpoints() {
        assert_eq!(map_range(0.0, 0.0, 1000.0, 10.0, 50.0), 10.0);
        assert_eq!(map_range(1000.0, 0.0, 1000.0, 10.0, 50.0), 50.0);
        assert_eq!(map_range(500.0, 0.0, 1000.0, 255.0, 0.0), 127.5);
    }

    #[test]
    fn test_map_range_degenerate_input() {
        assert_eq!(map_range(3.0, 1.0, 1.0, 7.0, 9.0), 7.0);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
    }
}
