//! Number-to-display formatting
//!
//! Results are rendered as the shortest clean decimal the display can hold:
//! float noise such as `0.30000000000000004` is rounded away, integral values
//! carry no decimal point, and very large or very small magnitudes switch to
//! a bounded exponent form.

use serde::{Deserialize, Serialize};

/// The display sentinel for the arithmetic error state
pub const ERROR_DISPLAY: &str = "Error";

/// Bounded-precision policy used by [`format_number`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatPolicy {
    /// Magnitudes at or above this render in exponent form
    pub exponent_upper: f64,
    /// Non-zero magnitudes below this render in exponent form
    pub exponent_lower: Option<f64>,
    /// Significant digits kept in exponent form
    pub significant_digits: usize,
    /// Decimal places kept in plain form before trailing zeros are stripped
    pub max_decimals: usize,
}

impl Default for FormatPolicy {
    fn default() -> Self {
        Self {
            exponent_upper: 1e12,
            exponent_lower: Some(1e-9),
            significant_digits: 10,
            max_decimals: 12,
        }
    }
}

impl FormatPolicy {
    /// Create the default policy
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the upper exponent threshold
    #[must_use]
    pub const fn with_exponent_upper(mut self, threshold: f64) -> Self {
        self.exponent_upper = threshold;
        self
    }

    /// Set (or disable) the lower exponent threshold
    #[must_use]
    pub const fn with_exponent_lower(mut self, threshold: Option<f64>) -> Self {
        self.exponent_lower = threshold;
        self
    }

    /// Set significant digits for exponent form
    #[must_use]
    pub const fn with_significant_digits(mut self, digits: usize) -> Self {
        self.significant_digits = digits;
        self
    }

    /// Set the decimal place bound for plain form
    #[must_use]
    pub const fn with_max_decimals(mut self, decimals: usize) -> Self {
        self.max_decimals = decimals;
        self
    }

    /// Returns true if `n` should be rendered in exponent form
    #[must_use]
    pub fn wants_exponent(&self, n: f64) -> bool {
        let magnitude = n.abs();
        if magnitude >= self.exponent_upper {
            return true;
        }
        self.exponent_lower
            .is_some_and(|lower| magnitude > 0.0 && magnitude < lower)
    }
}

/// Formats `n` for a display holding at most `max_len` characters.
///
/// Non-finite values yield [`ERROR_DISPLAY`]; `-0` is never produced.
#[must_use]
pub fn format_number(n: f64, policy: &FormatPolicy, max_len: usize) -> String {
    if !n.is_finite() {
        return ERROR_DISPLAY.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    if policy.wants_exponent(n) {
        return format_exponent(n, policy.significant_digits, max_len);
    }
    let plain = normalize_zero(format_plain(n, policy.max_decimals, max_len));
    // Rounding can carry the value across a threshold; narrow displays cannot
    // hold every integer below the upper threshold
    let rounded = parse_display(&plain).unwrap_or(n);
    if policy.wants_exponent(rounded) || plain.chars().count() > max_len {
        format_exponent(n, policy.significant_digits, max_len)
    } else {
        plain
    }
}

/// Plain decimal form, shedding decimal places until it fits
fn format_plain(n: f64, max_decimals: usize, max_len: usize) -> String {
    let mut decimals = max_decimals;
    loop {
        let s = strip_fraction_zeros(format!("{n:.decimals$}"));
        if s.chars().count() <= max_len || decimals == 0 {
            return s;
        }
        decimals -= 1;
    }
}

/// Exponent form with bounded significant digits, e.g. `1.5e12`
fn format_exponent(n: f64, significant_digits: usize, max_len: usize) -> String {
    let mut precision = significant_digits.saturating_sub(1);
    loop {
        let raw = format!("{n:.precision$e}");
        let s = match raw.split_once('e') {
            Some((mantissa, exponent)) => {
                format!("{}e{exponent}", strip_fraction_zeros(mantissa.to_string()))
            }
            None => raw,
        };
        if s.chars().count() <= max_len || precision == 0 {
            return s;
        }
        precision -= 1;
    }
}

/// Strips trailing zeros after a decimal point, then a lone trailing point
fn strip_fraction_zeros(s: String) -> String {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn normalize_zero(s: String) -> String {
    if s == "-0" {
        "0".to_string()
    } else {
        s
    }
}

/// Reads a display string back as a finite number.
///
/// Returns `None` for the error sentinel and for partial input that does not
/// parse, such as a lone `-`.
#[must_use]
pub fn parse_display(display: &str) -> Option<f64> {
    display.parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(n: f64) -> String {
        format_number(n, &FormatPolicy::default(), 18)
    }

    // ===== Plain form =====

    #[test]
    fn test_format_integer() {
        assert_eq!(fmt(42.0), "42");
        assert_eq!(fmt(-5.0), "-5");
        assert_eq!(fmt(100.0), "100");
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(fmt(3.5), "3.5");
        assert_eq!(fmt(0.125), "0.125");
        assert_eq!(fmt(-0.75), "-0.75");
    }

    #[test]
    fn test_format_strips_float_noise() {
        assert_eq!(fmt(0.1 + 0.2), "0.3");
        assert_eq!(fmt(1.1 * 3.0), "3.3");
    }

    #[test]
    fn test_format_bounded_decimals() {
        assert_eq!(fmt(1.0 / 3.0), "0.333333333333");
        assert_eq!(fmt(2.0 / 3.0), "0.666666666667");
    }

    #[test]
    fn test_format_sheds_decimals_to_fit_display() {
        let s = fmt(123_456_789.123_456_79);
        assert!(s.len() <= 18, "{s} too long");
        assert!(s.starts_with("123456789.12345"));
    }

    #[test]
    fn test_format_narrow_display_falls_back_to_exponent() {
        let policy = FormatPolicy::default();
        assert_eq!(format_number(12_345_678.0, &policy, 6), "1.23e7");
        assert_eq!(format_number(0.5, &policy, 6), "0.5");
    }

    #[test]
    fn test_format_largest_plain_integer() {
        assert_eq!(fmt(999_999_999_999.0), "999999999999");
    }

    // ===== Exponent form =====

    #[test]
    fn test_format_large_uses_exponent() {
        assert_eq!(fmt(1e12), "1e12");
        assert_eq!(fmt(1.5e12), "1.5e12");
        assert_eq!(fmt(-2.5e15), "-2.5e15");
    }

    #[test]
    fn test_format_exponent_significant_digits() {
        assert_eq!(fmt(1_234_567_890_123.0), "1.23456789e12");
        assert_eq!(fmt(9_876_543_210_987.0), "9.876543211e12");
    }

    #[test]
    fn test_format_rounding_up_to_threshold_uses_exponent() {
        let policy = FormatPolicy::default();
        assert_eq!(format_number(999_999_999_999.999_9, &policy, 13), "1e12");
        assert_eq!(format_number(999_999_999_999.999_9, &policy, 16), "1e12");
        assert_eq!(format_number(-999_999_999_999.999_9, &policy, 14), "-1e12");
        assert_eq!(fmt(999_999_999_999.999_9), "999999999999.99988");
    }

    #[test]
    fn test_format_tiny_uses_exponent() {
        assert_eq!(fmt(2.5e-10), "2.5e-10");
        assert_eq!(fmt(-1e-12), "-1e-12");
    }

    #[test]
    fn test_format_lower_threshold_boundary_is_plain() {
        assert_eq!(fmt(1e-9), "0.000000001");
    }

    #[test]
    fn test_format_without_lower_threshold() {
        let policy = FormatPolicy::default().with_exponent_lower(None);
        assert_eq!(format_number(2.5e-10, &policy, 18), "0.00000000025");
        assert_eq!(format_number(2.5e-14, &policy, 18), "0");
        assert_eq!(format_number(2.5e-6, &policy, 18), "0.0000025");
    }

    #[test]
    fn test_format_exponent_extremes_fit() {
        for n in [f64::MAX, -f64::MAX, f64::MIN_POSITIVE, -f64::MIN_POSITIVE] {
            let s = fmt(n);
            assert!(s.chars().count() <= 18, "{s} too long");
            assert!(parse_display(&s).is_some(), "{s} not parseable");
        }
    }

    // ===== Special values =====

    #[test]
    fn test_format_non_finite_is_error() {
        assert_eq!(fmt(f64::NAN), ERROR_DISPLAY);
        assert_eq!(fmt(f64::INFINITY), ERROR_DISPLAY);
        assert_eq!(fmt(f64::NEG_INFINITY), ERROR_DISPLAY);
    }

    #[test]
    fn test_format_never_negative_zero() {
        assert_eq!(fmt(-0.0), "0");
        let policy = FormatPolicy::default().with_exponent_lower(None);
        assert_eq!(format_number(-1e-15, &policy, 18), "0");
    }

    // ===== parse_display =====

    #[test]
    fn test_parse_display() {
        assert_eq!(parse_display("12.5"), Some(12.5));
        assert_eq!(parse_display("0."), Some(0.0));
        assert_eq!(parse_display("-3"), Some(-3.0));
        assert_eq!(parse_display("1.5e12"), Some(1.5e12));
        assert_eq!(parse_display("-"), None);
        assert_eq!(parse_display(""), None);
        assert_eq!(parse_display(ERROR_DISPLAY), None);
        assert_eq!(parse_display("inf"), None);
    }

    #[test]
    fn test_policy_builder() {
        let policy = FormatPolicy::new()
            .with_exponent_upper(1e9)
            .with_significant_digits(7)
            .with_max_decimals(4);
        assert_eq!(format_number(2e9, &policy, 18), "2e9");
        assert_eq!(format_number(1.0 / 3.0, &policy, 18), "0.3333");
    }
}
