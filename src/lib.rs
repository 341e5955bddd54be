//! Faultline - fault-proximity queries over a tectonic fault dataset
//!
//! This library answers one question efficiently and repeatedly: given a
//! geographic point, which fault lines from a large line-feature dataset lie
//! within a radius?
//!
//! # High-Level API
//!
//! The [`proximity::ProximityEngine`] is the main entry point:
//!
//! ```ignore
//! use faultline::dataset::{DatasetLoader, HttpFaultFetcher};
//! use faultline::proximity::ProximityEngine;
//!
//! let loader = DatasetLoader::new(HttpFaultFetcher::default_catalog()?);
//! let engine = ProximityEngine::new(loader);
//!
//! // First call fetches the dataset once; later calls reuse it.
//! let faults = engine.find_nearby_faults(37.0, -122.05, 50.0).await;
//! for fault in &faults {
//!     let info = faultline::display::describe(fault);
//!     println!("{} ({})", info.name, info.slip_rate);
//! }
//! ```

pub mod dataset;
pub mod display;
pub mod geo;
pub mod logging;
pub mod proximity;

/// Version of the faultline library.
///
/// Defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
