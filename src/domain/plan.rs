// ============================================================================
// Query Plan
// Storage predicates produced by the range-wrap planner
// ============================================================================

use super::window::DegreeRange;
use crate::numeric::DecimalLiteral;
use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Longitude predicate over canonical stored values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LonPredicate {
    /// `min <= lon <= max`
    Between {
        min: DecimalLiteral,
        max: DecimalLiteral,
    },
    /// `lon >= min` (east part of an antimeridian split)
    AtLeast(DecimalLiteral),
    /// `lon <= max` (west part of an antimeridian split)
    AtMost(DecimalLiteral),
}

impl LonPredicate {
    pub fn matches(&self, lon: &DecimalLiteral) -> bool {
        match self {
            LonPredicate::Between { min, max } => {
                lon.numeric_cmp(min) != Ordering::Less && lon.numeric_cmp(max) != Ordering::Greater
            },
            LonPredicate::AtLeast(min) => lon.numeric_cmp(min) != Ordering::Less,
            LonPredicate::AtMost(max) => lon.numeric_cmp(max) != Ordering::Greater,
        }
    }
}

impl fmt::Display for LonPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LonPredicate::Between { min, max } => write!(f, "{} <= lon <= {}", min, max),
            LonPredicate::AtLeast(min) => write!(f, "lon >= {}", min),
            LonPredicate::AtMost(max) => write!(f, "lon <= {}", max),
        }
    }
}

/// One storage query: a longitude predicate and an inclusive latitude range.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StoreQuery {
    pub lon: LonPredicate,
    pub lat: DegreeRange,
}

impl StoreQuery {
    pub fn new(lon: LonPredicate, lat: DegreeRange) -> Self {
        Self { lon, lat }
    }

    pub fn matches(&self, lon: &DecimalLiteral, lat: &DecimalLiteral) -> bool {
        self.lon.matches(lon) && self.lat.contains(lat)
    }
}

impl fmt::Display for StoreQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} and lat in {}", self.lon, self.lat)
    }
}

/// How a lookup window is executed against storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum QueryPlan {
    /// The normalized window is contiguous
    Single(StoreQuery),
    /// The window wraps through the antimeridian: east part, then west part
    Split(StoreQuery, StoreQuery),
}

impl QueryPlan {
    /// Queries in execution order.
    pub fn queries(&self) -> Vec<&StoreQuery> {
        match self {
            QueryPlan::Single(query) => vec![query],
            QueryPlan::Split(east, west) => vec![east, west],
        }
    }

    #[inline]
    pub fn is_split(&self) -> bool {
        matches!(self, QueryPlan::Split(..))
    }
}
