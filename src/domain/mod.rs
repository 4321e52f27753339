// ============================================================================
// Domain Models Module
// Contains all core domain entities and value objects
// ============================================================================

pub mod config;
pub mod error;
pub mod plan;
pub mod point;
pub mod response;
pub mod window;

pub use config::ServiceConfig;
pub use error::{LookupError, LookupErrorKind, StoreError};
pub use plan::{LonPredicate, QueryPlan, StoreQuery};
pub use point::{CollectionKind, FieldValue, PointAttributes, PointDocument, PointRecord};
pub use response::{LookupResponse, PointProjections, ProjectedPoint};
pub use window::{DegreeRange, LookupRequest, LookupWindow};
