//! Fault dataset: model, resource fetcher, and memoizing loader.
//!
//! The dataset is a GeoJSON feature collection of tectonic fault lines.
//! It is fetched and parsed once per process by [`DatasetLoader`], then
//! shared read-only by every proximity query.
//!
//! # Architecture
//!
//! ```text
//! DatasetLoader (memoized, coalesces concurrent loads)
//!     │
//!     └── FaultFetcher trait → HttpFaultFetcher (reqwest)
//!             │
//!             └── GeoJSON FeatureCollection → FaultDataset
//! ```

mod error;
mod fetch;
mod loader;
mod model;

pub use error::DatasetError;
pub use fetch::{FaultFetcher, HttpFaultFetcher, DEFAULT_FAULTS_URL};
pub use loader::DatasetLoader;
pub use model::{parse_feature_collection, FaultDataset, FaultFeature, FaultGeometry};
