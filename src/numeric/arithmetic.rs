// ============================================================================
// Exact Arithmetic
// Scale-preserving add/subtract/mod on decimal literals
// ============================================================================
//
// Every result keeps the fractional-digit count of the longitude operand.
// Whole-degree shifts (e.g. ±360) contribute no fractional digits, so
// `170.3456 - 360` is `-189.6544` and never `-189.64560000000001`.

use super::decimal_literal::DecimalLiteral;
use super::errors::{NumericError, NumericResult};
use rust_decimal::Decimal;
use std::num::NonZeroU32;

/// Add a whole-number shift to `a`, keeping `a`'s fractional digits.
///
/// Same-sign operands add magnitudes; opposite signs go through
/// [`subtract_magnitude`] and take the sign of the larger magnitude.
///
/// # Errors
/// - `Overflow` if the sum leaves the decimal range
/// - `PrecisionLoss` if the sum could not keep `a.scale()` digits
pub fn add_integer(a: &DecimalLiteral, shift: i128) -> NumericResult<DecimalLiteral> {
    let shift_negative = shift < 0;
    let shift = Decimal::try_from_i128_with_scale(shift.unsigned_abs() as i128, 0)
        .map(DecimalLiteral::from_decimal)
        .map_err(|_| NumericError::Overflow)?;

    let sum = if a.is_negative() == shift_negative {
        add_magnitude(a, &shift)?.with_sign(a.is_negative())
    } else {
        let (magnitude, flipped) = subtract_magnitude(a, &shift)?;
        magnitude.with_sign(a.is_negative() != flipped)
    };

    expect_scale(sum, a.scale())
}

/// `| |a| - |b| |` together with whether `|b|` was the larger magnitude.
///
/// The result carries `max(a.scale(), b.scale())` fractional digits.
///
/// # Errors
/// Returns `PrecisionLoss` if the difference could not keep that scale.
pub fn subtract_magnitude(
    a: &DecimalLiteral,
    b: &DecimalLiteral,
) -> NumericResult<(DecimalLiteral, bool)> {
    let a_mag = a.magnitude().as_decimal();
    let b_mag = b.magnitude().as_decimal();
    let scale = a.scale().max(b.scale());

    let (larger, smaller, is_negative) = if b_mag > a_mag {
        (b_mag, a_mag, true)
    } else {
        (a_mag, b_mag, false)
    };

    // Both operands are non-negative and larger >= smaller, so this cannot overflow.
    let difference = larger
        .checked_sub(smaller)
        .ok_or(NumericError::Overflow)?;

    let difference = expect_scale(DecimalLiteral::from_result(difference), scale)?;
    Ok((difference, is_negative))
}

/// `|integer part of a| mod divisor`, scanning digits left to right.
///
/// The integer is never materialised in a fixed-width type; only the running
/// remainder is.
pub fn integer_mod(a: &DecimalLiteral, divisor: NonZeroU32) -> u32 {
    let divisor = u64::from(divisor.get());

    let remainder = a
        .integer_digits()
        .bytes()
        .fold(0u64, |remainder, digit| {
            (remainder * 10 + u64::from(digit - b'0')) % divisor
        });

    remainder as u32
}

impl DecimalLiteral {
    /// Shift by a whole number of degrees, keeping this literal's precision.
    ///
    /// # Example
    /// ```
    /// use geowindow::numeric::DecimalLiteral;
    ///
    /// let lon: DecimalLiteral = "10.5".parse().unwrap();
    /// assert_eq!(lon.shift(360).unwrap().to_string(), "370.5");
    /// ```
    #[inline]
    pub fn shift(&self, degrees: i64) -> NumericResult<Self> {
        add_integer(self, i128::from(degrees))
    }
}

fn add_magnitude(a: &DecimalLiteral, b: &DecimalLiteral) -> NumericResult<DecimalLiteral> {
    a.magnitude()
        .as_decimal()
        .checked_add(b.magnitude().as_decimal())
        .map(DecimalLiteral::from_result)
        .ok_or(NumericError::Overflow)
}

/// The backing decimal trades scale for range on overflow; refuse such results.
fn expect_scale(value: DecimalLiteral, scale: u32) -> NumericResult<DecimalLiteral> {
    if value.scale() == scale {
        return Ok(value);
    }

    if value.is_zero() {
        return Decimal::try_from_i128_with_scale(0, scale)
            .map(DecimalLiteral::from_decimal)
            .map_err(|_| NumericError::PrecisionLoss);
    }

    Err(NumericError::PrecisionLoss)
}
