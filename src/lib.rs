// ============================================================================
// Geowindow Library
// Exact-precision longitude windows over stored geographic points
// ============================================================================

//! # Geowindow
//!
//! Answers "which stored points fall in this longitude/latitude window" when
//! the longitude window may lie outside `[-180, 180]` or wrap through the
//! antimeridian.
//!
//! ## Features
//!
//! - **Exact decimal longitudes**: `170.3456 - 360` is `-189.6544`, never a
//!   binary-float approximation
//! - **Canonical normalization** into `[-180, 180]`, keeping every
//!   fractional digit
//! - **Antimeridian-aware planning**: one storage query, or two for a window
//!   that wraps
//! - **Projection** of stored points back into the caller's own window, plus
//!   canonical and `±360` replica forms for map rendering
//! - **Pluggable storage** through the [`interfaces::PointStore`] trait
//!
//! ## Example
//!
//! ```rust
//! use geowindow::prelude::*;
//! use geowindow::numeric::DecimalLiteral;
//! use std::sync::Arc;
//!
//! let store = Arc::new(InMemoryPointStore::new());
//! store.insert(
//!     PointDocument::new()
//!         .with_field("lon", DecimalLiteral::parse("-170.3456").unwrap())
//!         .with_field("lat", DecimalLiteral::parse("12.5").unwrap())
//!         .with_field("magnitude", DecimalLiteral::parse("6.1").unwrap()),
//! );
//!
//! let service = CoordinateService::new(
//!     ServiceConfig::earthquakes(),
//!     store,
//!     Arc::new(NoOpObserver),
//! );
//!
//! // A window from 170°E across the antimeridian to 160°W, written as [170, 200].
//! let response = service
//!     .lookup(&LookupRequest::new(("170", "200"), ("-10", "20")))
//!     .unwrap();
//!
//! assert_eq!(response.coordinates[0].lon.to_string(), "189.6544");
//! assert_eq!(response.normalized_coordinates[0].lon.to_string(), "-170.3456");
//! assert_eq!(response.all_coordinates.len(), 3);
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
#[cfg(feature = "logging")]
pub mod logging;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        CollectionKind, DegreeRange, FieldValue, LonPredicate, LookupError, LookupErrorKind,
        LookupRequest, LookupResponse, LookupWindow, PointAttributes, PointDocument, PointRecord,
        ProjectedPoint, QueryPlan, ServiceConfig, StoreError, StoreQuery,
    };
    pub use crate::engine::{
        create_from_config, normalize, plan, CoordinateService, CoordinateServiceBuilder,
        ResultProjector,
    };
    pub use crate::interfaces::{
        InMemoryPointStore, LoggingObserver, LookupEvent, LookupId, LookupObserver, NoOpObserver,
        PointStore,
    };
}
