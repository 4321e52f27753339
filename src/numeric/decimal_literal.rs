// ============================================================================
// Decimal Literal
// Exact sign/integer/fraction representation of a decimal number
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Largest number of fractional digits the backing decimal can carry.
pub const MAX_SCALE: u32 = 28;

/// Longest run of significant digits that can fit the 96-bit mantissa.
const MAX_SIGNIFICANT_DIGITS: usize = 29;

/// An exact decimal number that never passes through binary floating point.
///
/// The value is held in a [`rust_decimal::Decimal`] whose scale is the
/// number of fractional digits the literal was written with. That scale is
/// authoritative: arithmetic in [`crate::numeric::arithmetic`] keeps it, and
/// `Display` always prints exactly that many fractional digits.
///
/// # Example
/// ```
/// use geowindow::numeric::DecimalLiteral;
///
/// let lon: DecimalLiteral = "170.3456".parse().unwrap();
/// assert_eq!(lon.shift(-360).unwrap().to_string(), "-189.6544");
/// ```
#[derive(Clone)]
pub struct DecimalLiteral {
    value: Decimal,
}

impl DecimalLiteral {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Parse a plain decimal literal: `-?[0-9]+(\.[0-9]+)?`.
    ///
    /// # Errors
    /// - `Malformed` for exponent notation, repeated decimal points,
    ///   stray characters or empty digit runs
    /// - `Unrepresentable` when the digits exceed the decimal's capacity
    pub fn parse(text: &str) -> NumericResult<Self> {
        let (negative, body) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        if body.contains(['e', 'E']) {
            return Err(NumericError::malformed(
                text,
                "exponent notation is not supported",
            ));
        }

        let (int_digits, frac_digits) = match body.split_once('.') {
            Some((int_digits, frac_digits)) => (int_digits, Some(frac_digits)),
            None => (body, None),
        };

        if frac_digits.is_some_and(|frac| frac.contains('.')) {
            return Err(NumericError::malformed(text, "multiple decimal points"));
        }
        if int_digits.is_empty() {
            return Err(NumericError::malformed(text, "missing integer digits"));
        }
        if frac_digits == Some("") {
            return Err(NumericError::malformed(text, "missing fractional digits"));
        }

        let frac_digits = frac_digits.unwrap_or("");
        if !int_digits.bytes().chain(frac_digits.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(NumericError::malformed(text, "unexpected non-digit character"));
        }

        let scale = frac_digits.len() as u32;
        if scale > MAX_SCALE {
            return Err(NumericError::Unrepresentable {
                input: text.to_string(),
            });
        }

        let combined = format!("{int_digits}{frac_digits}");
        let significant = combined.trim_start_matches('0');
        if significant.len() > MAX_SIGNIFICANT_DIGITS {
            return Err(NumericError::Unrepresentable {
                input: text.to_string(),
            });
        }

        let mantissa: i128 = if significant.is_empty() {
            0
        } else {
            significant
                .parse()
                .map_err(|_| NumericError::Unrepresentable {
                    input: text.to_string(),
                })?
        };

        let mut value = Decimal::try_from_i128_with_scale(mantissa, scale).map_err(|_| {
            NumericError::Unrepresentable {
                input: text.to_string(),
            }
        })?;
        value.set_sign_negative(negative);

        Ok(Self { value })
    }

    /// Create a whole-number literal (no fractional digits).
    #[inline]
    pub fn from_integer(value: i64) -> Self {
        Self {
            value: Decimal::from(value),
        }
    }

    /// Wrap an existing decimal, adopting its scale as the precision.
    #[inline]
    pub fn from_decimal(value: Decimal) -> Self {
        Self { value }
    }

    /// Build an arithmetic result, folding negative zero to positive zero.
    pub(crate) fn from_result(mut value: Decimal) -> Self {
        if value.is_zero() {
            value.set_sign_positive(true);
        }
        Self { value }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The backing decimal.
    #[inline]
    pub fn as_decimal(&self) -> Decimal {
        self.value
    }

    /// Number of fractional digits.
    #[inline]
    pub fn scale(&self) -> u32 {
        self.value.scale()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.value.is_sign_negative()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Integer digits without leading zeros (a lone `"0"` for values below one).
    pub fn integer_digits(&self) -> String {
        let digits = self.padded_digits();
        digits[..digits.len() - self.scale() as usize].to_string()
    }

    /// Fractional digits, exactly `scale()` of them.
    pub fn fractional_digits(&self) -> String {
        let digits = self.padded_digits();
        digits[digits.len() - self.scale() as usize..].to_string()
    }

    /// Integer part truncated toward zero, as a scale-0 literal.
    pub fn integer_part(&self) -> Self {
        Self::from_result(self.value.trunc())
    }

    /// Numeric comparison, ignoring scale (`10.5` and `10.50` compare equal).
    #[inline]
    pub fn numeric_cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }

    /// True when the value equals the whole number `other`, at any scale.
    #[inline]
    pub fn equals_integer(&self, other: i64) -> bool {
        self.value == Decimal::from(other)
    }

    /// Absolute value, keeping the scale.
    pub(crate) fn magnitude(&self) -> Self {
        Self {
            value: self.value.abs(),
        }
    }

    /// Same digits and scale with the requested sign (zero stays positive).
    pub(crate) fn with_sign(mut self, negative: bool) -> Self {
        self.value.set_sign_negative(negative && !self.value.is_zero());
        self
    }

    /// All digits of the mantissa, left-padded so the integer part has at least one.
    fn padded_digits(&self) -> String {
        let width = self.scale() as usize + 1;
        format!(
            "{:0>width$}",
            self.value.mantissa().unsigned_abs(),
            width = width
        )
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialEq for DecimalLiteral {
    /// Exact equality: same value written with the same number of fractional digits.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value.scale() == other.value.scale() && self.value == other.value
    }
}

impl Eq for DecimalLiteral {}

impl Hash for DecimalLiteral {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.mantissa().hash(state);
        self.value.scale().hash(state);
    }
}

impl FromStr for DecimalLiteral {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<i64> for DecimalLiteral {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Display for DecimalLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.padded_digits();
        let split = digits.len() - self.scale() as usize;
        let sign = if self.is_negative() { "-" } else { "" };

        let text = if split == digits.len() {
            format!("{}{}", sign, digits)
        } else {
            format!("{}{}.{}", sign, &digits[..split], &digits[split..])
        };
        f.pad(&text)
    }
}

impl fmt::Debug for DecimalLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DecimalLiteral({}, scale={})", self, self.scale())
    }
}

// ============================================================================
// Serde (exact string form)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for DecimalLiteral {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DecimalLiteral {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LiteralVisitor;

        impl serde::de::Visitor<'_> for LiteralVisitor {
            type Value = DecimalLiteral;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a decimal literal string or an integer")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                DecimalLiteral::parse(v).map_err(E::custom)
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(DecimalLiteral::from_integer(v))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Self::Value, E> {
                i64::try_from(v)
                    .map(DecimalLiteral::from_integer)
                    .map_err(|_| E::custom("integer out of range"))
            }
        }

        deserializer.deserialize_any(LiteralVisitor)
    }
}

// ============================================================================
// Tests
// ============================================================================
