// ============================================================================
// Result Projector
// Re-expresses stored longitudes for the caller's window and for rendering
// ============================================================================

use super::normalizer::normalize;
use crate::domain::{
    DegreeRange, LookupError, LookupWindow, PointProjections, PointRecord, ProjectedPoint,
};
use crate::numeric::{add_integer, DecimalLiteral, NumericError, NumericResult};
use std::cmp::Ordering;

const FULL_TURN: i64 = 360;

/// Projects stored points into the three output forms of a lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultProjector;

impl ResultProjector {
    pub fn new() -> Self {
        Self
    }

    /// Shift `lon` by whole turns until it sits in `window`.
    ///
    /// Same result as adding 360 while below `window.min` and then
    /// subtracting 360 while above `window.max`, but the number of turns is
    /// computed exactly in one step, so the distance to the window is
    /// unbounded.
    ///
    /// # Errors
    /// - `OutOfRange` if the window is inverted (`min > max`)
    /// - `Arithmetic` if the shifted value leaves the decimal range
    pub fn project_into_window(
        &self,
        lon: &DecimalLiteral,
        window: &DegreeRange,
    ) -> Result<DecimalLiteral, LookupError> {
        if window.is_inverted() {
            return Err(LookupError::inverted_window(window));
        }

        let mut projected = lon.clone();

        if projected.numeric_cmp(&window.min) == Ordering::Less {
            let turns = turns_to_cover(&projected, &window.min)?;
            projected = add_integer(&projected, full_turns(turns)?)?;
        }

        if projected.numeric_cmp(&window.max) == Ordering::Greater {
            let turns = turns_to_cover(&window.max, &projected)?;
            projected = add_integer(&projected, -full_turns(turns)?)?;
        }

        Ok(projected)
    }

    /// The canonical `[-180, 180]` form of `lon`.
    #[inline]
    pub fn normalize(&self, lon: &DecimalLiteral) -> NumericResult<DecimalLiteral> {
        normalize(lon)
    }

    /// `[lon - 360, lon, lon + 360]`, independent of any window.
    pub fn replicate(&self, lon: &DecimalLiteral) -> NumericResult<[DecimalLiteral; 3]> {
        Ok([lon.shift(-FULL_TURN)?, lon.clone(), lon.shift(FULL_TURN)?])
    }

    /// All three projections of one record against the caller's raw window.
    pub fn project(
        &self,
        record: &PointRecord,
        window: &LookupWindow,
    ) -> Result<PointProjections, LookupError> {
        let point = |lon: DecimalLiteral| {
            ProjectedPoint::new(lon, record.lat.clone(), record.attributes.clone())
        };

        let in_window = self.project_into_window(&record.lon, &window.lon)?;
        let normalized = self.normalize(&record.lon)?;
        let [west, center, east] = self.replicate(&record.lon)?;

        Ok(PointProjections {
            in_window: point(in_window),
            normalized: point(normalized),
            replicas: [point(west), point(center), point(east)],
        })
    }
}

/// Smallest `k >= 0` with `from + 360 * k >= to`, i.e. `ceil((to - from) / 360)`.
///
/// Works on the mantissa of the exact difference, so no digit is rounded.
fn turns_to_cover(from: &DecimalLiteral, to: &DecimalLiteral) -> NumericResult<i128> {
    let gap = to
        .as_decimal()
        .checked_sub(from.as_decimal())
        .ok_or(NumericError::Overflow)?;
    if gap.is_sign_negative() || gap.is_zero() {
        return Ok(0);
    }
    if gap.scale() != from.scale().max(to.scale()) {
        return Err(NumericError::PrecisionLoss);
    }

    let turn = 10i128
        .checked_pow(gap.scale())
        .and_then(|unit| unit.checked_mul(i128::from(FULL_TURN)))
        .ok_or(NumericError::Overflow)?;
    let gap = gap.mantissa();

    Ok(gap / turn + i128::from(gap % turn != 0))
}

fn full_turns(turns: i128) -> NumericResult<i128> {
    turns
        .checked_mul(i128::from(FULL_TURN))
        .ok_or(NumericError::Overflow)
}
