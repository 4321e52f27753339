// ============================================================================
// Lookup Response
// The three projections returned for every stored point
// ============================================================================

use super::point::PointAttributes;
use crate::numeric::DecimalLiteral;

#[cfg(feature = "serde")]
use serde::Serialize;

/// One output point: `{lon, lat, ...attributes}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ProjectedPoint {
    pub lon: DecimalLiteral,
    pub lat: DecimalLiteral,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub attributes: PointAttributes,
}

impl ProjectedPoint {
    pub fn new(lon: DecimalLiteral, lat: DecimalLiteral, attributes: PointAttributes) -> Self {
        Self {
            lon,
            lat,
            attributes,
        }
    }
}

/// Everything the projector derives from one stored point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointProjections {
    /// Re-expressed inside the caller's original window
    pub in_window: ProjectedPoint,
    /// Reduced to canonical `[-180, 180]`
    pub normalized: ProjectedPoint,
    /// `lon - 360`, `lon`, `lon + 360`
    pub replicas: [ProjectedPoint; 3],
}

/// Result of a lookup, in storage order (east part first for split windows).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LookupResponse {
    pub coordinates: Vec<ProjectedPoint>,
    pub normalized_coordinates: Vec<ProjectedPoint>,
    /// Three entries per point, flattened
    pub all_coordinates: Vec<ProjectedPoint>,
}

impl LookupResponse {
    /// Append one point's projections.
    pub fn push(&mut self, projections: PointProjections) {
        self.coordinates.push(projections.in_window);
        self.normalized_coordinates.push(projections.normalized);
        self.all_coordinates.extend(projections.replicas);
    }

    /// Number of stored points in the response.
    #[inline]
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }
}
