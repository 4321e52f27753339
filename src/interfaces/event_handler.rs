// ============================================================================
// Lookup Observer Interface
// Defines the contract for observing lookup events
// ============================================================================

use crate::domain::LookupError;
use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unique lookup identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LookupId(Uuid);

impl LookupId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for LookupId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LookupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Events emitted while a lookup runs
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum LookupEvent {
    /// Request parsed and accepted
    LookupReceived {
        lookup_id: LookupId,
        window: String,
        timestamp: DateTime<Utc>,
    },

    /// Storage plan decided
    PlanBuilt {
        lookup_id: LookupId,
        split: bool,
        timestamp: DateTime<Utc>,
    },

    /// One storage query returned
    StoreQueried {
        lookup_id: LookupId,
        query: String,
        documents: usize,
        timestamp: DateTime<Utc>,
    },

    /// All records projected
    LookupCompleted {
        lookup_id: LookupId,
        points: usize,
        timestamp: DateTime<Utc>,
    },

    /// Lookup aborted, no results returned
    LookupFailed {
        lookup_id: LookupId,
        reason: String,
        timestamp: DateTime<Utc>,
    },
}

impl LookupEvent {
    pub fn lookup_id(&self) -> LookupId {
        match self {
            LookupEvent::LookupReceived { lookup_id, .. }
            | LookupEvent::PlanBuilt { lookup_id, .. }
            | LookupEvent::StoreQueried { lookup_id, .. }
            | LookupEvent::LookupCompleted { lookup_id, .. }
            | LookupEvent::LookupFailed { lookup_id, .. } => *lookup_id,
        }
    }

    pub(crate) fn failed(lookup_id: LookupId, error: &LookupError) -> Self {
        LookupEvent::LookupFailed {
            lookup_id,
            reason: error.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Observer trait for lookup events.
/// Implementations can handle logging, metrics, auditing, etc.
pub trait LookupObserver: Send + Sync {
    /// Handle a lookup event
    fn on_event(&self, event: LookupEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<LookupEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op observer for testing
pub struct NoOpObserver;

impl LookupObserver for NoOpObserver {
    fn on_event(&self, _event: LookupEvent) {
        // Do nothing
    }
}

/// Logging observer
pub struct LoggingObserver;

impl LookupObserver for LoggingObserver {
    fn on_event(&self, event: LookupEvent) {
        match &event {
            LookupEvent::LookupFailed {
                lookup_id, reason, ..
            } => tracing::warn!(%lookup_id, %reason, "coordinate lookup failed"),
            _ => tracing::debug!("Coordinate lookup event: {:?}", event),
        }
    }
}
