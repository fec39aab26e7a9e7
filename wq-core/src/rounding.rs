/// Number of decimal places kept for every value that enters a chart model.
pub const CHART_DECIMALS: i32 = 3;

/// Round to [`CHART_DECIMALS`] places, half away from zero on the scaled value.
///
/// Stable rounding keeps tooltip text and pixel positions identical between
/// renders of the same data. Non-finite input is returned unchanged.
pub fn round3(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(CHART_DECIMALS);
    let rounded = (value * scale).round() / scale;
    // Normalize negative zero so serialized output never shows "-0.0".
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        // 1.0625 is exact in binary, so the scaled value is exactly 1062.5.
        assert_eq!(round3(1.0625), 1.063);
        assert_eq!(round3(-1.0625), -1.063);
        assert_eq!(round3(1.2346), 1.235);
        assert_eq!(round3(2.0004), 2.0);
    }

    #[test]
    fn negative_zero_is_normalized() {
        assert!(round3(-0.0001).is_sign_positive());
    }

    #[test]
    fn non_finite_passes_through() {
        assert!(round3(f64::NAN).is_nan());
        assert_eq!(round3(f64::INFINITY), f64::INFINITY);
    }
}
