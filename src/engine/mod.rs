// ============================================================================
// Engine Module
// Contains the longitude arithmetic pipeline and the lookup service
// ============================================================================

mod coordinate_service;
mod normalizer;
mod planner;
mod projector;

pub mod factory;

pub use coordinate_service::CoordinateService;
pub use factory::{create_from_config, CoordinateServiceBuilder};
pub use normalizer::{is_canonical, normalize};
pub use planner::plan;
pub use projector::ResultProjector;
