// ============================================================================
// Service Configuration
// Collection binding and record schema for a coordinate service
// ============================================================================

use super::point::CollectionKind;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Comprehensive configuration for creating a coordinate service
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ServiceConfig {
    /// Storage collection queried by the service (e.g. "earthquakes", "source")
    pub collection: String,

    /// Record schema, chosen once from the collection name
    pub kind: CollectionKind,
}

impl ServiceConfig {
    /// Create a configuration for a collection; the schema follows its name.
    pub fn new(collection: impl Into<String>) -> Self {
        let collection = collection.into();
        let kind = CollectionKind::from_collection_name(&collection);
        Self { collection, kind }
    }

    /// Builder method: Override the record schema
    pub fn with_kind(mut self, kind: CollectionKind) -> Self {
        self.kind = kind;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.collection.is_empty() {
            return Err("Collection name cannot be empty".to_string());
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl ServiceConfig {
    /// Quake catalogue: `earthquakes` collection, magnitude carried through
    pub fn earthquakes() -> Self {
        Self::new("earthquakes")
    }

    /// Station inventory: `source` collection, `id` (or net.sta.loc) carried through
    pub fn stations() -> Self {
        Self::new("source")
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::earthquakes()
    }
}
