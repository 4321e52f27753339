// ============================================================================
// Point Records
// Stored documents and the typed records built from them
// ============================================================================

use super::error::LookupError;
use crate::numeric::DecimalLiteral;
use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

// ============================================================================
// Stored Documents
// ============================================================================

/// A field value as held by the storage collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(untagged))]
pub enum FieldValue {
    Number(DecimalLiteral),
    Text(String),
    Null,
}

impl FieldValue {
    /// Text used when joining station id components; null renders empty.
    fn component(&self) -> String {
        match self {
            FieldValue::Number(value) => value.to_string(),
            FieldValue::Text(text) => text.clone(),
            FieldValue::Null => String::new(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(value) => write!(f, "{}", value),
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Null => f.write_str("null"),
        }
    }
}

impl From<DecimalLiteral> for FieldValue {
    fn from(value: DecimalLiteral) -> Self {
        FieldValue::Number(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

/// A raw document returned by the storage collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointDocument {
    fields: BTreeMap<String, FieldValue>,
}

impl PointDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set a field
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// A numeric field, if present and decimal (numeric strings included).
    pub fn number(&self, name: &str) -> Option<DecimalLiteral> {
        match self.get(name)? {
            FieldValue::Number(value) => Some(value.clone()),
            FieldValue::Text(text) => DecimalLiteral::parse(text).ok(),
            FieldValue::Null => None,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<serde_json::Value> for PointDocument {
    type Error = super::error::StoreError;

    /// Convert a JSON object. Numbers go through their textual form, so
    /// integers and short decimals keep their digits.
    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value;

        let Value::Object(object) = value else {
            return Err(super::error::StoreError::new("document is not a JSON object"));
        };

        let mut document = PointDocument::new();
        for (name, value) in object {
            let field = match value {
                Value::Null => FieldValue::Null,
                Value::String(text) => FieldValue::Text(text),
                Value::Number(number) => {
                    let text = number.to_string();
                    match DecimalLiteral::parse(&text) {
                        Ok(literal) => FieldValue::Number(literal),
                        Err(_) => FieldValue::Text(text),
                    }
                },
                other => FieldValue::Text(other.to_string()),
            };
            document.insert(name, field);
        }
        Ok(document)
    }
}

// ============================================================================
// Typed Records
// ============================================================================

/// Which schema a collection's documents follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum CollectionKind {
    /// Quake points, carrying `magnitude`
    Earthquakes,
    /// Station points, carrying an `id` (or `net`/`sta`/`loc`)
    Stations,
}

impl CollectionKind {
    /// `"earthquakes"` selects quake points; every other collection holds stations.
    pub fn from_collection_name(name: &str) -> Self {
        if name == "earthquakes" {
            CollectionKind::Earthquakes
        } else {
            CollectionKind::Stations
        }
    }
}

/// Schema-dependent fields carried through to every projection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(untagged))]
pub enum PointAttributes {
    Quake {
        #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
        magnitude: Option<FieldValue>,
    },
    Station {
        id: String,
    },
}

impl PointAttributes {
    fn from_document(document: &PointDocument, kind: CollectionKind) -> Self {
        match kind {
            CollectionKind::Earthquakes => PointAttributes::Quake {
                magnitude: document.get("magnitude").cloned(),
            },
            CollectionKind::Stations => PointAttributes::Station {
                id: station_id(document),
            },
        }
    }
}

/// `id` verbatim when present, else `"{net}.{sta}.{loc}"` with blanks for gaps.
fn station_id(document: &PointDocument) -> String {
    match document.get("id") {
        Some(id) if *id != FieldValue::Null => id.component(),
        _ => {
            let part = |name: &str| {
                document
                    .get(name)
                    .map(FieldValue::component)
                    .unwrap_or_default()
            };
            format!("{}.{}.{}", part("net"), part("sta"), part("loc"))
        },
    }
}

/// A stored point, validated and typed. Transient: built per lookup result.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PointRecord {
    pub lon: DecimalLiteral,
    pub lat: DecimalLiteral,
    pub attributes: PointAttributes,
}

impl PointRecord {
    pub fn new(lon: DecimalLiteral, lat: DecimalLiteral, attributes: PointAttributes) -> Self {
        Self {
            lon,
            lat,
            attributes,
        }
    }

    /// Build from a stored document; `position` identifies it in error reports.
    ///
    /// # Errors
    /// - `MissingField` when `lon` or `lat` is absent or null
    /// - `InvalidField` when either is text that is not a decimal literal
    pub fn from_document(
        document: &PointDocument,
        kind: CollectionKind,
        position: usize,
    ) -> Result<Self, LookupError> {
        Ok(Self {
            lon: required_number(document, "lon", position)?,
            lat: required_number(document, "lat", position)?,
            attributes: PointAttributes::from_document(document, kind),
        })
    }
}

fn required_number(
    document: &PointDocument,
    field: &'static str,
    record: usize,
) -> Result<DecimalLiteral, LookupError> {
    match document.get(field) {
        None | Some(FieldValue::Null) => Err(LookupError::MissingField { record, field }),
        Some(FieldValue::Number(value)) => Ok(value.clone()),
        Some(FieldValue::Text(text)) => DecimalLiteral::parse(text)
            .map_err(|source| LookupError::InvalidField {
                record,
                field,
                source,
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(text: &str) -> DecimalLiteral {
        DecimalLiteral::parse(text).unwrap()
    }

    #[test]
    fn test_collection_kind_from_name() {
        assert_eq!(
            CollectionKind::from_collection_name("earthquakes"),
            CollectionKind::Earthquakes
        );
        assert_eq!(
            CollectionKind::from_collection_name("source"),
            CollectionKind::Stations
        );
    }

    #[test]
    fn test_quake_record_keeps_magnitude() {
        let doc = PointDocument::new()
            .with_field("lon", lit("170.3456"))
            .with_field("lat", lit("-12.5"))
            .with_field("magnitude", lit("6.1"));

        let record = PointRecord::from_document(&doc, CollectionKind::Earthquakes, 0).unwrap();
        assert_eq!(record.lon, lit("170.3456"));
        assert_eq!(
            record.attributes,
            PointAttributes::Quake {
                magnitude: Some(FieldValue::Number(lit("6.1")))
            }
        );
    }

    #[test]
    fn test_quake_record_without_magnitude() {
        let doc = PointDocument::new()
            .with_field("lon", lit("1"))
            .with_field("lat", lit("2"));

        let record = PointRecord::from_document(&doc, CollectionKind::Earthquakes, 0).unwrap();
        assert_eq!(record.attributes, PointAttributes::Quake { magnitude: None });
    }

    #[test]
    fn test_station_id_copied_verbatim() {
        let doc = PointDocument::new()
            .with_field("lon", lit("1"))
            .with_field("lat", lit("2"))
            .with_field("id", "IU.ANMO.00")
            .with_field("net", "XX");

        let record = PointRecord::from_document(&doc, CollectionKind::Stations, 0).unwrap();
        assert_eq!(
            record.attributes,
            PointAttributes::Station {
                id: "IU.ANMO.00".to_string()
            }
        );
    }

    #[test]
    fn test_station_id_synthesized_with_blanks() {
        let doc = PointDocument::new()
            .with_field("lon", lit("1"))
            .with_field("lat", lit("2"))
            .with_field("net", "IU")
            .with_field("sta", "ANMO")
            .with_field("loc", FieldValue::Null);

        let record = PointRecord::from_document(&doc, CollectionKind::Stations, 0).unwrap();
        assert_eq!(
            record.attributes,
            PointAttributes::Station {
                id: "IU.ANMO.".to_string()
            }
        );

        let bare = PointDocument::new()
            .with_field("lon", lit("1"))
            .with_field("lat", lit("2"));
        let record = PointRecord::from_document(&bare, CollectionKind::Stations, 0).unwrap();
        assert_eq!(
            record.attributes,
            PointAttributes::Station {
                id: "..".to_string()
            }
        );
    }

    #[test]
    fn test_missing_coordinates_are_reported() {
        let doc = PointDocument::new().with_field("lat", lit("2"));
        assert_eq!(
            PointRecord::from_document(&doc, CollectionKind::Earthquakes, 7),
            Err(LookupError::MissingField {
                record: 7,
                field: "lon"
            })
        );

        let doc = PointDocument::new()
            .with_field("lon", lit("2"))
            .with_field("lat", FieldValue::Null);
        assert_eq!(
            PointRecord::from_document(&doc, CollectionKind::Stations, 1),
            Err(LookupError::MissingField {
                record: 1,
                field: "lat"
            })
        );
    }

    #[test]
    fn test_text_coordinates() {
        let doc = PointDocument::new()
            .with_field("lon", "-179.25")
            .with_field("lat", "not a number");

        assert_eq!(doc.number("lon"), Some(lit("-179.25")));
        let err = PointRecord::from_document(&doc, CollectionKind::Stations, 4).unwrap_err();
        assert!(matches!(
            err,
            LookupError::InvalidField {
                record: 4,
                field: "lat",
                ..
            }
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_document_from_json() {
        let value = serde_json::json!({
            "lon": 170.3456,
            "lat": -12,
            "net": "IU",
            "loc": null,
        });
        let doc = PointDocument::try_from(value).unwrap();
        assert_eq!(doc.get("lon"), Some(&FieldValue::Number(lit("170.3456"))));
        assert_eq!(doc.get("lat"), Some(&FieldValue::Number(lit("-12"))));
        assert_eq!(doc.get("loc"), Some(&FieldValue::Null));

        assert!(PointDocument::try_from(serde_json::json!([1, 2])).is_err());
    }
}
