// ============================================================================
// Coordinate Service
// Core lookup pipeline: plan, query storage, project every record
// ============================================================================

use super::planner;
use super::projector::ResultProjector;
use crate::domain::{
    LookupError, LookupRequest, LookupResponse, LookupWindow, PointRecord, ServiceConfig,
};
use crate::interfaces::{LookupEvent, LookupId, LookupObserver, PointStore};
use chrono::Utc;
use std::sync::Arc;

/// Window lookup service over an injected point store.
///
/// Holds no mutable state: any number of threads may call `lookup`
/// concurrently on a shared instance.
pub struct CoordinateService {
    /// Collection binding and limits
    config: ServiceConfig,

    /// Storage collaborator
    store: Arc<dyn PointStore>,

    /// Projection of stored records into output form
    projector: ResultProjector,

    /// Observer for lookup events
    observer: Arc<dyn LookupObserver>,
}

impl CoordinateService {
    /// Create a new coordinate service
    pub fn new(
        config: ServiceConfig,
        store: Arc<dyn PointStore>,
        observer: Arc<dyn LookupObserver>,
    ) -> Self {
        Self {
            config,
            store,
            projector: ResultProjector::new(),
            observer,
        }
    }

    /// Parse a raw request and run the lookup.
    pub fn lookup(&self, request: &LookupRequest) -> Result<LookupResponse, LookupError> {
        let lookup_id = LookupId::new();

        match request.window() {
            Ok(window) => self.execute(lookup_id, &window),
            Err(error) => {
                tracing::debug!(%lookup_id, %error, "rejected lookup request");
                self.observer.on_event(LookupEvent::failed(lookup_id, &error));
                Err(error)
            },
        }
    }

    /// Run a lookup for an already-parsed window.
    pub fn lookup_window(&self, window: &LookupWindow) -> Result<LookupResponse, LookupError> {
        self.execute(LookupId::new(), window)
    }

    /// Run a lookup on the tokio blocking pool.
    #[cfg(feature = "async")]
    pub async fn spawn_lookup(
        self: Arc<Self>,
        request: LookupRequest,
    ) -> Result<LookupResponse, LookupError> {
        tokio::task::spawn_blocking(move || self.lookup(&request))
            .await
            .map_err(|error| LookupError::Aborted(error.to_string()))?
    }

    /// Get the service configuration
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Get the collection name
    pub fn collection(&self) -> &str {
        &self.config.collection
    }

    /// Get the storage collaborator's name
    pub fn store_name(&self) -> &str {
        self.store.name()
    }

    // ========================================================================
    // Private methods
    // ========================================================================

    fn execute(
        &self,
        lookup_id: LookupId,
        window: &LookupWindow,
    ) -> Result<LookupResponse, LookupError> {
        let mut events = Vec::new();
        let result = self.run(lookup_id, window, &mut events);

        match &result {
            Ok(response) => {
                tracing::debug!(%lookup_id, points = response.len(), "coordinate lookup finished");
            },
            Err(error) => {
                tracing::debug!(%lookup_id, %error, "coordinate lookup failed");
                events.push(LookupEvent::failed(lookup_id, error));
            },
        }

        self.observer.on_events(events);
        result
    }

    fn run(
        &self,
        lookup_id: LookupId,
        window: &LookupWindow,
        events: &mut Vec<LookupEvent>,
    ) -> Result<LookupResponse, LookupError> {
        events.push(LookupEvent::LookupReceived {
            lookup_id,
            window: format!("lon {} x lat {}", window.lon, window.lat),
            timestamp: Utc::now(),
        });

        // An inverted raw window is a caller error whatever the store holds.
        if window.lon.is_inverted() {
            return Err(LookupError::inverted_window(&window.lon));
        }

        let plan = planner::plan(&window.lon, &window.lat)?;
        events.push(LookupEvent::PlanBuilt {
            lookup_id,
            split: plan.is_split(),
            timestamp: Utc::now(),
        });

        let mut response = LookupResponse::default();
        let mut position = 0usize;

        for query in plan.queries() {
            let documents = self.store.find(query)?;
            tracing::trace!(
                %lookup_id,
                store = self.store.name(),
                %query,
                documents = documents.len(),
                "queried point store"
            );
            events.push(LookupEvent::StoreQueried {
                lookup_id,
                query: query.to_string(),
                documents: documents.len(),
                timestamp: Utc::now(),
            });

            for document in &documents {
                let record = PointRecord::from_document(document, self.config.kind, position)?;
                response.push(self.projector.project(&record, window)?);
                position += 1;
            }
        }

        events.push(LookupEvent::LookupCompleted {
            lookup_id,
            points: response.len(),
            timestamp: Utc::now(),
        });

        Ok(response)
    }
}
