// ============================================================================
// Longitude Normalizer
// Folds any longitude into the canonical [-180, 180] range, exactly
// ============================================================================

use crate::numeric::{add_integer, integer_mod, DecimalLiteral, NumericError, NumericResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::num::NonZeroU32;

const HALF_TURN: i128 = 180;

const FULL_TURN: NonZeroU32 = match NonZeroU32::new(360) {
    Some(turn) => turn,
    None => panic!("a full turn is 360 degrees"),
};

/// Reduce a longitude to `[-180, 180]`, keeping its fractional digits.
///
/// `180` and `-180` (at any scale) are returned unchanged. Otherwise the
/// integer degree `i` (truncated toward zero) is folded with
/// `n = ((i + 180) mod 360) - 180` and the whole literal is shifted by
/// the exact multiple of 360 that takes `i` to `n`.
///
/// Only the integer part decides the fold, so a value such as `-180.5`
/// (integer part `-180`) is left where it is.
///
/// # Example
/// ```
/// use geowindow::engine::normalize;
/// use geowindow::numeric::DecimalLiteral;
///
/// let lon: DecimalLiteral = "200.12".parse().unwrap();
/// assert_eq!(normalize(&lon).unwrap().to_string(), "-159.88");
/// ```
pub fn normalize(lon: &DecimalLiteral) -> NumericResult<DecimalLiteral> {
    if is_boundary(lon) {
        return Ok(lon.clone());
    }

    let full_turn = i128::from(FULL_TURN.get());
    let magnitude_residue = i128::from(integer_mod(lon, FULL_TURN));
    let residue = if lon.is_negative() {
        (full_turn - magnitude_residue) % full_turn
    } else {
        magnitude_residue
    };
    let folded = (residue + HALF_TURN) % full_turn - HALF_TURN;

    let integer = lon
        .integer_part()
        .as_decimal()
        .to_i128()
        .ok_or(NumericError::Overflow)?;

    add_integer(lon, folded - integer)
}

/// True when `lon` already lies in `[-180, 180]`.
pub fn is_canonical(lon: &DecimalLiteral) -> bool {
    let half_turn = Decimal::from(180);
    (-half_turn..=half_turn).contains(&lon.as_decimal())
}

fn is_boundary(lon: &DecimalLiteral) -> bool {
    lon.equals_integer(180) || lon.equals_integer(-180)
}
