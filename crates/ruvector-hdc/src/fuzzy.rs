//! Scalar fuzzy-logic operators used by graded bind and bundle
//!
//! Graded values live on [0,1]; bipolar graded values live on [-1,1].
//! The `*_bipolar` wrappers map into [0,1], apply the graded operator,
//! and map back.

/// Maps a bipolar value in [-1,1] to the graded domain [0,1]
#[inline]
pub fn bipolar_to_graded(x: f64) -> f64 {
    (x + 1.0) / 2.0
}

/// Maps a graded value in [0,1] to the bipolar domain [-1,1]
#[inline]
pub fn graded_to_bipolar(x: f64) -> f64 {
    2.0 * x - 1.0
}

/// Fuzzy three-valued product
///
/// `x·y / (x·y + (1−x)(1−y))`, except that the indeterminate pair
/// `{0, 1}` (where `|x − y| = 1`) yields `0.0`.
///
/// # Example
///
/// ```rust
/// use ruvector_hdc::fuzzy::three_pi;
///
/// assert_eq!(three_pi(0.0, 1.0), 0.0);
/// assert_eq!(three_pi(0.5, 0.5), 0.5);
/// ```
#[inline]
pub fn three_pi(x: f64, y: f64) -> f64 {
    if (x - y).abs() == 1.0 {
        return 0.0;
    }
    let xy = x * y;
    xy / (xy + (1.0 - x) * (1.0 - y))
}

/// Fuzzy exclusive-or: `(1−x)·y + x·(1−y)`
///
/// Not an involution: `fuzzy_xor(fuzzy_xor(x, y), y) != x` in general.
#[inline]
pub fn fuzzy_xor(x: f64, y: f64) -> f64 {
    (1.0 - x) * y + x * (1.0 - y)
}

/// Recovers `y` from `z = fuzzy_xor(x, y)` and the known operand `x`
///
/// Returns `None` when `x == 0.5`, where every `y` maps to the same `z`.
#[inline]
pub fn inverse_fuzzy_xor(z: f64, x: f64) -> Option<f64> {
    let denom = 1.0 - 2.0 * x;
    if denom == 0.0 {
        None
    } else {
        Some((z - x) / denom)
    }
}

/// [`three_pi`] on bipolar values
#[inline]
pub fn three_pi_bipolar(x: f64, y: f64) -> f64 {
    graded_to_bipolar(three_pi(bipolar_to_graded(x), bipolar_to_graded(y)))
}

/// [`fuzzy_xor`] on bipolar values
#[inline]
pub fn fuzzy_xor_bipolar(x: f64, y: f64) -> f64 {
    graded_to_bipolar(fuzzy_xor(bipolar_to_graded(x), bipolar_to_graded(y)))
}

/// [`inverse_fuzzy_xor`] on bipolar values; `None` when `x == 0.0`
#[inline]
pub fn inverse_fuzzy_xor_bipolar(z: f64, x: f64) -> Option<f64> {
    inverse_fuzzy_xor(bipolar_to_graded(z), bipolar_to_graded(x)).map(graded_to_bipolar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_domain_maps() {
        assert_eq!(bipolar_to_graded(-1.0), 0.0);
        assert_eq!(bipolar_to_graded(0.0), 0.5);
        assert_eq!(bipolar_to_graded(1.0), 1.0);
        assert_eq!(graded_to_bipolar(0.0), -1.0);
        assert_eq!(graded_to_bipolar(0.5), 0.0);
        assert_eq!(graded_to_bipolar(1.0), 1.0);
    }

    #[test]
    fn test_domain_round_trip_dyadic() {
        for &x in &[0.0, 0.125, 0.25, 0.5, 0.75, 1.0] {
            assert_eq!(bipolar_to_graded(graded_to_bipolar(x)), x);
        }
        for &x in &[-1.0, -0.5, -0.25, 0.0, 0.25, 0.5, 1.0] {
            assert_eq!(graded_to_bipolar(bipolar_to_graded(x)), x);
        }
    }

    #[test]
    fn test_three_pi_indeterminate_pair() {
        assert_eq!(three_pi(0.0, 1.0), 0.0);
        assert_eq!(three_pi(1.0, 0.0), 0.0);
        assert!(!three_pi(0.0, 1.0).is_nan());
    }

    #[test]
    fn test_three_pi_values() {
        assert_eq!(three_pi(1.0, 1.0), 1.0);
        assert_eq!(three_pi(0.0, 0.0), 0.0);
        assert_eq!(three_pi(0.5, 0.5), 0.5);
        // 0.5 is neutral
        assert_abs_diff_eq!(three_pi(0.5, 0.8), 0.8, epsilon = 1e-12);
        // 0.8·0.8 / (0.64 + 0.04)
        assert_abs_diff_eq!(three_pi(0.8, 0.8), 0.64 / 0.68, epsilon = 1e-12);
    }

    #[test]
    fn test_fuzzy_xor_crisp_truth_table() {
        assert_eq!(fuzzy_xor(0.0, 0.0), 0.0);
        assert_eq!(fuzzy_xor(0.0, 1.0), 1.0);
        assert_eq!(fuzzy_xor(1.0, 0.0), 1.0);
        assert_eq!(fuzzy_xor(1.0, 1.0), 0.0);
    }

    #[test]
    fn test_inverse_fuzzy_xor_recovers_operand() {
        let x = 0.2;
        let y = 0.9;
        let z = fuzzy_xor(x, y);
        let recovered = inverse_fuzzy_xor(z, x).unwrap();
        assert_abs_diff_eq!(recovered, y, epsilon = 1e-12);
    }

    #[test]
    fn test_inverse_fuzzy_xor_half_is_unrecoverable() {
        assert_eq!(inverse_fuzzy_xor(0.5, 0.5), None);
        assert_eq!(inverse_fuzzy_xor_bipolar(0.3, 0.0), None);
    }

    #[test]
    fn test_fuzzy_xor_not_involution() {
        let x = 0.3;
        let y = 0.8;
        let twice = fuzzy_xor(fuzzy_xor(x, y), y);
        assert!((twice - x).abs() > 1e-3, "fuzzy_xor behaved as involution");
    }

    #[test]
    fn test_bipolar_wrappers() {
        // bipolar 0 is graded 0.5, neutral for three_pi
        assert_abs_diff_eq!(three_pi_bipolar(0.0, 0.6), 0.6, epsilon = 1e-12);
        // crisp corners: -1 maps to 0, 1 maps to 1
        assert_eq!(fuzzy_xor_bipolar(-1.0, 1.0), 1.0);
        assert_eq!(fuzzy_xor_bipolar(1.0, 1.0), -1.0);

        let z = fuzzy_xor_bipolar(0.4, -0.7);
        let y = inverse_fuzzy_xor_bipolar(z, 0.4).unwrap();
        assert_abs_diff_eq!(y, -0.7, epsilon = 1e-12);
    }
}
