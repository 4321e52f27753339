// ============================================================================
// Range Wrap Planner
// Turns a caller's longitude window into one or two storage queries
// ============================================================================

use super::normalizer::normalize;
use crate::domain::{DegreeRange, LonPredicate, QueryPlan, StoreQuery};
use crate::numeric::NumericResult;
use std::cmp::Ordering;

/// Plan the storage queries for a longitude window and latitude range.
///
/// Both longitude bounds are normalized independently. If the normalized
/// minimum does not exceed the normalized maximum the window is one
/// contiguous range; otherwise it wraps through the antimeridian and is
/// split into `lon >= min` and `lon <= max`.
///
/// Stored longitudes are assumed to be canonical already.
pub fn plan(lon: &DegreeRange, lat: &DegreeRange) -> NumericResult<QueryPlan> {
    let min = normalize(&lon.min)?;
    let max = normalize(&lon.max)?;

    let plan = if min.numeric_cmp(&max) != Ordering::Greater {
        QueryPlan::Single(StoreQuery::new(
            LonPredicate::Between { min, max },
            lat.clone(),
        ))
    } else {
        QueryPlan::Split(
            StoreQuery::new(LonPredicate::AtLeast(min), lat.clone()),
            StoreQuery::new(LonPredicate::AtMost(max), lat.clone()),
        )
    };

    tracing::trace!(window = %lon, split = plan.is_split(), "planned longitude window");
    Ok(plan)
}
