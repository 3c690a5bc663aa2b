//! Number formatting for the display

/// Default number of fractional digits kept after rounding
pub const DEFAULT_MAX_FRACTION_DIGITS: u8 = 10;

/// Largest accepted fractional digit count
pub const MAX_FRACTION_DIGITS_LIMIT: u8 = 15;

/// Formats a result for the display with the default precision
///
/// Integers render without a fractional part; everything else is rounded to
/// ten fractional digits and printed in its shortest form.
#[must_use]
pub fn format_result(value: f64) -> String {
    format_result_with(value, DEFAULT_MAX_FRACTION_DIGITS)
}

/// Formats a result rounding to at most `max_fraction_digits` fractional digits
///
/// An exact midpoint rounds away from zero (`0.00048828125` keeps ten digits
/// as `0.0004882813`).
#[must_use]
pub fn format_result_with(value: f64, max_fraction_digits: u8) -> String {
    if value == value.trunc() {
        return format_operand(value);
    }

    let digits = max_fraction_digits.min(MAX_FRACTION_DIGITS_LIMIT);
    let target = if is_midpoint(value, digits) {
        // one ulp further from zero; still short of the next midpoint
        f64::from_bits(value.to_bits() + 1)
    } else {
        value
    };
    let digits = usize::from(digits);
    let rounded: f64 = format!("{target:.digits$}").parse().unwrap_or(value);
    format_operand(rounded)
}

/// Shortest decimal text of a parsed operand, as shown in the history line
///
/// Never uses exponent notation: `1e23` prints as all its digits.
#[must_use]
pub fn format_operand(value: f64) -> String {
    if value == 0.0 {
        // also folds -0
        return "0".to_string();
    }
    format!("{value}")
}

/// True when `value` sits exactly halfway between two `digits`-place decimals
///
/// A binary fraction with `k` fractional bits has exactly `k` fractional
/// decimal digits, the last one a 5, so the tie case is exactly
/// `digits + 1` fractional bits.
fn is_midpoint(value: f64, digits: u8) -> bool {
    let scale = 2f64.powi(i32::from(digits));
    let finer = value * scale * 2.0;
    let coarser = value * scale;
    finer == finer.trunc() && coarser != coarser.trunc()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_format_integer() {
        assert_eq!(format_result(4.0), "4");
        assert_eq!(format_result(42.0), "42");
        assert_eq!(format_result(-9.0), "-9");
    }

    #[test]
    fn test_format_negative_zero() {
        assert_eq!(format_result(-0.0), "0");
        assert_eq!(format_operand(-0.0), "0");
    }

    #[test]
    fn test_format_float_noise() {
        assert_eq!(format_result(0.1 + 0.2), "0.3");
    }

    #[test]
    fn test_format_one_third() {
        assert_eq!(format_result(1.0 / 3.0), "0.3333333333");
    }

    #[test]
    fn test_format_two_thirds_rounds_up() {
        assert_eq!(format_result(2.0 / 3.0), "0.6666666667");
    }

    #[test]
    fn test_format_strips_trailing_zeros() {
        assert_eq!(format_result(2.5), "2.5");
        assert_eq!(format_result(1.125), "1.125");
    }

    #[test]
    fn test_format_rounds_to_integer() {
        assert_eq!(format_result(2.999_999_999_999_9), "3");
    }

    #[test]
    fn test_format_tiny_value_rounds_to_zero() {
        assert_eq!(format_result(1e-12), "0");
        assert_eq!(format_result(-1e-12), "0");
    }

    #[test]
    fn test_format_custom_precision() {
        assert_eq!(format_result_with(1.0 / 3.0, 2), "0.33");
        assert_eq!(format_result_with(2.0 / 3.0, 0), "1");
    }

    #[test]
    fn test_format_precision_is_capped() {
        assert_eq!(
            format_result_with(0.1 + 0.2, u8::MAX),
            format_result_with(0.1 + 0.2, MAX_FRACTION_DIGITS_LIMIT)
        );
    }

    #[test]
    fn test_format_large_integer_shortest() {
        assert_eq!(format_result(1e23), "100000000000000000000000");
        assert_eq!(format_result(-1e23), "-100000000000000000000000");
        assert_eq!(format_result(1e23), format_operand(1e23));
    }

    #[test]
    fn test_format_midpoint_rounds_away_from_zero() {
        assert_eq!(format_result(1.0 / 2048.0), "0.0004882813");
        assert_eq!(format_result(-1.0 / 2048.0), "-0.0004882813");
        assert_eq!(format_result_with(2.5, 0), "3");
        assert_eq!(format_result_with(-2.5, 0), "-3");
        assert_eq!(format_result_with(0.125, 2), "0.13");
        assert_eq!(format_result_with(-0.375, 2), "-0.38");
    }

    #[test]
    fn test_format_near_midpoint_not_a_tie() {
        // 1.005 is stored just below the midpoint
        assert_eq!(format_result_with(1.005, 2), "1");
        assert_eq!(format_result_with(0.126, 2), "0.13");
        assert_eq!(format_result_with(0.124, 2), "0.12");
    }

    #[test]
    fn test_format_operand() {
        assert_eq!(format_operand(7.0), "7");
        assert_eq!(format_operand(0.5), "0.5");
        assert_eq!(format_operand(-9.0), "-9");
    }

    proptest! {
        #[test]
        fn prop_integers_round_trip(n in -1_000_000_000i64..1_000_000_000i64) {
            prop_assert_eq!(format_result(n as f64), n.to_string());
        }

        #[test]
        fn prop_large_integers_shortest(x in -1e300f64..1e300f64) {
            let n = x.trunc();
            prop_assume!(n != 0.0);
            prop_assert_eq!(format_result(n), format!("{}", n));
        }

        #[test]
        fn prop_midpoints_round_away_from_zero(k in 1u32..1024, digits in 0u8..=10) {
            // odd multiples of 2^-(digits + 1) are exact ties at `digits` places
            let unit = 2f64.powi(-(i32::from(digits) + 1));
            let value = f64::from(2 * k + 1) * unit;
            prop_assume!(value != value.trunc());
            let up = format_result_with(value, digits);
            let down = format_result_with(-value, digits);
            prop_assert_eq!(format!("-{up}"), down);
            let kept: f64 = up.parse().unwrap();
            prop_assert!(kept > value);
        }

        #[test]
        fn prop_fraction_digits_bounded(a in -1e6f64..1e6f64) {
            let text = format_result(a);
            let fraction = text.split('.').nth(1).unwrap_or("");
            prop_assert!(fraction.len() <= 10);
            prop_assert!(!fraction.ends_with('0'));
        }
    }
}
