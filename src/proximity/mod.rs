//! Fault-proximity queries: evaluator, grid-quantized cache, and engine.
//!
//! # Architecture
//!
//! ```text
//! ProximityEngine::find_nearby_faults(lat, lng, radius_km)
//!     │
//!     ├── GridCell (0.5° quantized key) → RegionalCache hit? return
//!     │
//!     └── miss → DatasetLoader::load()
//!             │
//!             └── per LineString feature: distance_to_query()
//!                     (3° bounding-box prefilter, then haversine minimum)
//! ```

mod cache;
mod engine;
mod evaluator;
mod grid;

pub use cache::{CacheStats, RegionalCache, REGIONAL_CACHE_CAPACITY};
pub use engine::{ProximityEngine, DEFAULT_RADIUS_KM};
pub use evaluator::{distance_to_query, BOUNDING_BOX_DEG};
pub use grid::{GridCell, CELL_SIZE_DEG};
