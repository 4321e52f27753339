// ============================================================================
// Lookup Window
// Longitude/latitude ranges as supplied by the caller
// ============================================================================

use super::error::LookupError;
use crate::numeric::{DecimalLiteral, NumericResult};
use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A closed range of degrees.
///
/// `min <= max` is not enforced: an inverted longitude range is how a
/// caller may spell an antimeridian-crossing window.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DegreeRange {
    pub min: DecimalLiteral,
    pub max: DecimalLiteral,
}

impl DegreeRange {
    pub fn new(min: DecimalLiteral, max: DecimalLiteral) -> Self {
        Self { min, max }
    }

    /// Parse both bounds from decimal literals.
    pub fn parse(min: &str, max: &str) -> NumericResult<Self> {
        Ok(Self {
            min: DecimalLiteral::parse(min)?,
            max: DecimalLiteral::parse(max)?,
        })
    }

    /// True when `min > max` numerically.
    pub fn is_inverted(&self) -> bool {
        self.min.numeric_cmp(&self.max) == Ordering::Greater
    }

    /// Inclusive numeric containment.
    pub fn contains(&self, value: &DecimalLiteral) -> bool {
        value.numeric_cmp(&self.min) != Ordering::Less
            && value.numeric_cmp(&self.max) != Ordering::Greater
    }
}

impl fmt::Display for DegreeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// The caller's window, exactly as requested (not normalized).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LookupWindow {
    pub lon: DegreeRange,
    pub lat: DegreeRange,
}

impl LookupWindow {
    pub fn new(lon: DegreeRange, lat: DegreeRange) -> Self {
        Self { lon, lat }
    }
}

// ============================================================================
// Request Shape
// ============================================================================

/// Raw lookup input: four decimal literals in exact textual form.
///
/// With the `serde` feature this deserializes from
/// `{"lon_range": ["170", "200"], "lat_range": ["-10.5", "10.5"]}`.
/// JSON numbers are accepted too, but only strings keep every digit the
/// caller wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LookupRequest {
    #[cfg_attr(feature = "serde", serde(deserialize_with = "literal_pair::deserialize"))]
    pub lon_range: [String; 2],
    #[cfg_attr(feature = "serde", serde(deserialize_with = "literal_pair::deserialize"))]
    pub lat_range: [String; 2],
}

impl LookupRequest {
    pub fn new(
        lon_range: (impl Into<String>, impl Into<String>),
        lat_range: (impl Into<String>, impl Into<String>),
    ) -> Self {
        Self {
            lon_range: [lon_range.0.into(), lon_range.1.into()],
            lat_range: [lat_range.0.into(), lat_range.1.into()],
        }
    }

    /// Parse the four literals, naming the first one that is malformed.
    pub fn window(&self) -> Result<LookupWindow, LookupError> {
        let lon = DegreeRange::new(
            parse_field("lon_range.min", &self.lon_range[0])?,
            parse_field("lon_range.max", &self.lon_range[1])?,
        );
        let lat = DegreeRange::new(
            parse_field("lat_range.min", &self.lat_range[0])?,
            parse_field("lat_range.max", &self.lat_range[1])?,
        );
        Ok(LookupWindow { lon, lat })
    }
}

fn parse_field(field: &'static str, text: &str) -> Result<DecimalLiteral, LookupError> {
    DecimalLiteral::parse(text).map_err(|source| LookupError::MalformedNumber { field, source })
}

#[cfg(feature = "serde")]
mod literal_pair {
    use serde::de::{self, Deserializer, SeqAccess, Visitor};
    use std::fmt;

    /// One literal, taken from a JSON string or number.
    struct Literal(String);

    impl<'de> de::Deserialize<'de> for Literal {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            struct LiteralVisitor;

            impl Visitor<'_> for LiteralVisitor {
                type Value = Literal;

                fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str("a decimal literal string or number")
                }

                fn visit_str<E: de::Error>(self, v: &str) -> Result<Literal, E> {
                    Ok(Literal(v.to_string()))
                }

                fn visit_i64<E: de::Error>(self, v: i64) -> Result<Literal, E> {
                    Ok(Literal(v.to_string()))
                }

                fn visit_u64<E: de::Error>(self, v: u64) -> Result<Literal, E> {
                    Ok(Literal(v.to_string()))
                }

                fn visit_f64<E: de::Error>(self, v: f64) -> Result<Literal, E> {
                    Ok(Literal(v.to_string()))
                }
            }

            deserializer.deserialize_any(LiteralVisitor)
        }
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<[String; 2], D::Error> {
        struct PairVisitor;

        impl<'de> Visitor<'de> for PairVisitor {
            type Value = [String; 2];

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a [min, max] pair")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<[String; 2], A::Error> {
                let min: Literal = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let max: Literal = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                if seq.next_element::<de::IgnoredAny>()?.is_some() {
                    return Err(de::Error::invalid_length(3, &self));
                }
                Ok([min.0, max.0])
            }
        }

        deserializer.deserialize_seq(PairVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::NumericError;

    fn lit(text: &str) -> DecimalLiteral {
        DecimalLiteral::parse(text).unwrap()
    }

    #[test]
    fn test_range_contains_is_inclusive() {
        let range = DegreeRange::parse("-10.5", "20").unwrap();
        assert!(range.contains(&lit("-10.50")));
        assert!(range.contains(&lit("20.000")));
        assert!(range.contains(&lit("0")));
        assert!(!range.contains(&lit("20.001")));
        assert!(!range.is_inverted());
    }

    #[test]
    fn test_range_inverted() {
        assert!(DegreeRange::parse("170", "-170").unwrap().is_inverted());
        assert!(!DegreeRange::parse("5.0", "5").unwrap().is_inverted());
    }

    #[test]
    fn test_request_window() {
        let request = LookupRequest::new(("170", "200"), ("-10", "10.25"));
        let window = request.window().unwrap();
        assert_eq!(window.lon.min, lit("170"));
        assert_eq!(window.lon.max, lit("200"));
        assert_eq!(window.lat.max.to_string(), "10.25");
    }

    #[test]
    fn test_request_names_malformed_field() {
        let request = LookupRequest::new(("170", "200"), ("-10", "1e2"));
        let err = request.window().unwrap_err();
        match err {
            LookupError::MalformedNumber { field, source } => {
                assert_eq!(field, "lat_range.max");
                assert!(matches!(source, NumericError::Malformed { .. }));
            },
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_request_deserializes_strings_and_numbers() {
        let request: LookupRequest =
            serde_json::from_str(r#"{"lon_range": ["170.3456", 200], "lat_range": [-10.5, "10"]}"#)
                .unwrap();
        assert_eq!(request.lon_range, ["170.3456".to_string(), "200".to_string()]);
        assert_eq!(request.lat_range, ["-10.5".to_string(), "10".to_string()]);

        let bad = serde_json::from_str::<LookupRequest>(r#"{"lon_range": ["1"], "lat_range": ["0", "1"]}"#);
        assert!(bad.is_err());
    }
}
