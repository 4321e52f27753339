// ============================================================================
// Coordinate Service Factory
// Creates coordinate services with proper configuration
// ============================================================================

use crate::domain::{CollectionKind, ServiceConfig};
use crate::engine::CoordinateService;
use crate::interfaces::{LookupObserver, PointStore};
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a coordinate service from configuration
///
/// # Arguments
/// * `config` - Service configuration
/// * `store` - Storage collaborator queried by every lookup
/// * `observer` - Observer for lookup events
///
/// # Returns
/// * `Result<CoordinateService, String>` - Configured service or error
///
/// # Example
/// ```
/// use geowindow::prelude::*;
/// use std::sync::Arc;
///
/// let config = ServiceConfig::earthquakes();
/// let service = create_from_config(
///     config,
///     Arc::new(InMemoryPointStore::new()),
///     Arc::new(NoOpObserver),
/// )
/// .unwrap();
/// assert_eq!(service.collection(), "earthquakes");
/// ```
pub fn create_from_config(
    config: ServiceConfig,
    store: Arc<dyn PointStore>,
    observer: Arc<dyn LookupObserver>,
) -> Result<CoordinateService, String> {
    config.validate()?;

    tracing::debug!(
        collection = %config.collection,
        kind = ?config.kind,
        store = store.name(),
        "creating coordinate service"
    );

    Ok(CoordinateService::new(config, store, observer))
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating coordinate services with fluent API
///
/// # Example
/// ```
/// use geowindow::prelude::*;
/// use std::sync::Arc;
///
/// let service = CoordinateServiceBuilder::new("source")
///     .stations()
///     .build(Arc::new(InMemoryPointStore::new()), Arc::new(NoOpObserver))
///     .unwrap();
/// assert_eq!(service.config().kind, CollectionKind::Stations);
/// ```
pub struct CoordinateServiceBuilder {
    config: ServiceConfig,
}

impl CoordinateServiceBuilder {
    /// Create a new builder for the specified collection
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            config: ServiceConfig::new(collection),
        }
    }

    // ========================================================================
    // Record Schema Configuration
    // ========================================================================

    /// Treat documents as quake points (magnitude carried through)
    pub fn earthquakes(mut self) -> Self {
        self.config.kind = CollectionKind::Earthquakes;
        self
    }

    /// Treat documents as station points (id carried through)
    pub fn stations(mut self) -> Self {
        self.config.kind = CollectionKind::Stations;
        self
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Apply the quake catalogue preset
    pub fn earthquake_catalogue() -> Self {
        Self {
            config: ServiceConfig::earthquakes(),
        }
    }

    /// Apply the station inventory preset
    pub fn station_inventory() -> Self {
        Self {
            config: ServiceConfig::stations(),
        }
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the coordinate service
    pub fn build(
        self,
        store: Arc<dyn PointStore>,
        observer: Arc<dyn LookupObserver>,
    ) -> Result<CoordinateService, String> {
        create_from_config(self.config, store, observer)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &ServiceConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::{InMemoryPointStore, NoOpObserver};

    fn store() -> Arc<dyn PointStore> {
        Arc::new(InMemoryPointStore::new())
    }

    #[test]
    fn test_create_earthquake_service() {
        let service =
            create_from_config(ServiceConfig::earthquakes(), store(), Arc::new(NoOpObserver))
                .unwrap();
        assert_eq!(service.collection(), "earthquakes");
        assert_eq!(service.config().kind, CollectionKind::Earthquakes);
        assert_eq!(service.store_name(), "in-memory");
    }

    #[test]
    fn test_create_rejects_invalid_config() {
        let result = create_from_config(ServiceConfig::new(""), store(), Arc::new(NoOpObserver));
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_pattern() {
        let service = CoordinateServiceBuilder::new("quakes_2024")
            .earthquakes()
            .build(store(), Arc::new(NoOpObserver))
            .unwrap();

        assert_eq!(service.collection(), "quakes_2024");
        assert_eq!(service.config().kind, CollectionKind::Earthquakes);
    }

    #[test]
    fn test_builder_kind_follows_collection_name() {
        let builder = CoordinateServiceBuilder::new("source");
        assert_eq!(builder.get_config().kind, CollectionKind::Stations);

        let builder = CoordinateServiceBuilder::new("earthquakes");
        assert_eq!(builder.get_config().kind, CollectionKind::Earthquakes);
    }

    #[test]
    fn test_builder_rejects_empty_collection() {
        let result = CoordinateServiceBuilder::new("")
            .stations()
            .build(store(), Arc::new(NoOpObserver));
        assert!(result.is_err());
    }

    #[test]
    fn test_preset_builders() {
        let quakes = CoordinateServiceBuilder::earthquake_catalogue()
            .build(store(), Arc::new(NoOpObserver))
            .unwrap();
        assert_eq!(quakes.collection(), "earthquakes");

        let stations = CoordinateServiceBuilder::station_inventory()
            .build(store(), Arc::new(NoOpObserver))
            .unwrap();
        assert_eq!(stations.collection(), "source");
    }
}
