//! Shared utility functions for vastu calculations.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// 1-based position in a cycle of `cycle` values: `floor(value) mod cycle + 1`.
///
/// `value` must be non-negative. The floor happens before the remainder, so
/// fractional parts never leak into the index.
pub fn cyclic_index(value: f64, cycle: u8) -> u8 {
    (value.floor() % f64::from(cycle)) as u8 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero() {
        assert!((normalize_360(0.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_360_wraps() {
        assert!((normalize_360(360.0) - 0.0).abs() < 1e-15);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-11.25) - 348.75).abs() < 1e-12);
    }

    #[test]
    fn normalize_large() {
        assert!((normalize_360(742.5) - 22.5).abs() < 1e-10);
    }

    #[test]
    fn cyclic_index_floors_first() {
        // floor(52.5) = 52, 52 mod 8 = 4
        assert_eq!(cyclic_index(52.5, 8), 5);
    }

    #[test]
    fn cyclic_index_wraps_to_one() {
        assert_eq!(cyclic_index(27.0, 27), 1);
        assert_eq!(cyclic_index(26.99, 27), 27);
    }

    #[test]
    fn cyclic_index_small_values() {
        assert_eq!(cyclic_index(0.0, 7), 1);
        assert_eq!(cyclic_index(0.9, 30), 1);
    }
}
