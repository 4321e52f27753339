// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod event_handler;
mod point_store;

pub use event_handler::{LookupEvent, LookupId, LookupObserver, LoggingObserver, NoOpObserver};
pub use point_store::{InMemoryPointStore, PointStore};
