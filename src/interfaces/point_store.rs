// ============================================================================
// Point Store Interface
// Defines the contract for the storage collaborator queried by lookups
// ============================================================================

use crate::domain::{PointDocument, StoreError, StoreQuery};
use parking_lot::RwLock;

/// Storage capability injected into the coordinate service.
/// Implementations: document-store clients, the in-memory store below, etc.
pub trait PointStore: Send + Sync {
    /// Return every document whose stored `lon`/`lat` satisfy the query,
    /// in the store's own order.
    fn find(&self, query: &StoreQuery) -> Result<Vec<PointDocument>, StoreError>;

    /// Store name for logging
    fn name(&self) -> &str;
}

/// In-memory point store, in insertion order.
///
/// Documents whose `lon` or `lat` is absent or not a decimal never match a
/// query, the way a document store skips them on range predicates.
#[derive(Debug, Default)]
pub struct InMemoryPointStore {
    documents: RwLock<Vec<PointDocument>>,
}

impl InMemoryPointStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_documents(documents: impl IntoIterator<Item = PointDocument>) -> Self {
        Self {
            documents: RwLock::new(documents.into_iter().collect()),
        }
    }

    pub fn insert(&self, document: PointDocument) {
        self.documents.write().push(document);
    }

    pub fn len(&self) -> usize {
        self.documents.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.read().is_empty()
    }
}

impl PointStore for InMemoryPointStore {
    fn find(&self, query: &StoreQuery) -> Result<Vec<PointDocument>, StoreError> {
        let documents = self.documents.read();
        Ok(documents
            .iter()
            .filter(|doc| match (doc.number("lon"), doc.number("lat")) {
                (Some(lon), Some(lat)) => query.matches(&lon, &lat),
                _ => false,
            })
            .cloned()
            .collect())
    }

    fn name(&self) -> &str {
        "in-memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DegreeRange, LonPredicate};
    use crate::numeric::DecimalLiteral;

    fn lit(text: &str) -> DecimalLiteral {
        DecimalLiteral::parse(text).unwrap()
    }

    fn doc(lon: &str, lat: &str) -> PointDocument {
        PointDocument::new()
            .with_field("lon", lit(lon))
            .with_field("lat", lit(lat))
    }

    #[test]
    fn test_find_preserves_insertion_order() {
        let store = InMemoryPointStore::with_documents([
            doc("175", "0"),
            doc("-175", "0"),
            doc("171.5", "1"),
            doc("179.9", "45"),
        ]);

        let query = StoreQuery::new(
            LonPredicate::AtLeast(lit("170")),
            DegreeRange::parse("-10", "10").unwrap(),
        );
        let found = store.find(&query).unwrap();

        assert_eq!(found, vec![doc("175", "0"), doc("171.5", "1")]);
    }

    #[test]
    fn test_documents_without_coordinates_never_match() {
        let store = InMemoryPointStore::new();
        store.insert(PointDocument::new().with_field("lat", lit("0")));
        store.insert(doc("0", "0"));
        assert_eq!(store.len(), 2);

        let query = StoreQuery::new(
            LonPredicate::Between {
                min: lit("-180"),
                max: lit("180"),
            },
            DegreeRange::parse("-90", "90").unwrap(),
        );
        assert_eq!(store.find(&query).unwrap(), vec![doc("0", "0")]);
    }
}
