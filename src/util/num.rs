use std::str::FromStr;

use bigdecimal::{BigDecimal, ToPrimitive, Zero};

/// Number of significant digits kept when a division does not terminate.
pub const DIVISION_PRECISION: u64 = 28;

/// Parses the text of a number literal.
///
/// ## Returns
/// - `Some(BigDecimal)`: If the whole text is a decimal number.
/// - `None`: Otherwise.
///
/// ## Example
/// ```
/// use logoterp::util::num::parse_decimal;
///
/// assert!(parse_decimal("3.25").is_some());
/// assert!(parse_decimal("forward").is_none());
/// ```
pub fn parse_decimal(text: &str) -> Option<BigDecimal> {
    BigDecimal::from_str(text).ok()
}

/// Renders a decimal the way Logo prints numbers.
///
/// Integral values print without a fractional part and fractional values
/// print without trailing zeros.
///
/// ## Example
/// ```
/// use logoterp::util::num::{format_decimal, parse_decimal};
///
/// assert_eq!(format_decimal(&parse_decimal("16.000").unwrap()), "16");
/// assert_eq!(format_decimal(&parse_decimal("2.50").unwrap()), "2.5");
/// assert_eq!(format_decimal(&parse_decimal("0.0000001").unwrap()), "0.0000001");
/// assert_eq!(format_decimal(&parse_decimal("1E+30").unwrap()),
///            "1000000000000000000000000000000");
/// ```
#[must_use]
pub fn format_decimal(value: &BigDecimal) -> String {
    let integral = value.with_scale(0);
    if integral == *value {
        integral.to_plain_string()
    } else {
        value.normalized().to_plain_string()
    }
}

/// Divides two decimals, rounding results that do not terminate.
///
/// ## Returns
/// - `Some(BigDecimal)`: The quotient.
/// - `None`: If `divisor` is zero.
///
/// ## Example
/// ```
/// use logoterp::util::num::{checked_divide, format_decimal, parse_decimal};
///
/// let q = checked_divide(&parse_decimal("7").unwrap(), &parse_decimal("2").unwrap()).unwrap();
/// assert_eq!(format_decimal(&q), "3.5");
///
/// assert!(checked_divide(&parse_decimal("1").unwrap(), &parse_decimal("0").unwrap()).is_none());
/// ```
#[must_use]
pub fn checked_divide(dividend: &BigDecimal, divisor: &BigDecimal) -> Option<BigDecimal> {
    if divisor.is_zero() {
        return None;
    }
    Some((dividend / divisor).with_prec(DIVISION_PRECISION).normalized())
}

/// Converts a decimal to a count or index.
///
/// ## Returns
/// - `Some(usize)`: If the value is a non-negative whole number that fits.
/// - `None`: If it is negative, fractional, or too large.
///
/// ## Example
/// ```
/// use logoterp::util::num::{decimal_to_count, parse_decimal};
///
/// assert_eq!(decimal_to_count(&parse_decimal("3").unwrap()), Some(3));
/// assert_eq!(decimal_to_count(&parse_decimal("2.5").unwrap()), None);
/// assert_eq!(decimal_to_count(&parse_decimal("-1").unwrap()), None);
/// ```
#[must_use]
pub fn decimal_to_count(value: &BigDecimal) -> Option<usize> {
    if value.with_scale(0) != *value {
        return None;
    }
    value.to_usize()
}

/// Converts a count back into a decimal.
#[must_use]
pub fn count_to_decimal(count: usize) -> BigDecimal {
    BigDecimal::from(count as u64)
}
