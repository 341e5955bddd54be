//! Query orchestrator: cache lookup, dataset scan, result caching.

use crate::dataset::{DatasetLoader, FaultFeature, FaultFetcher};

use super::cache::RegionalCache;
use super::evaluator::distance_to_query;
use super::grid::GridCell;

/// Default query radius in kilometres.
///
/// This is also the maximum supported radius: the evaluator's bounding-box
/// prefilter is sized against it.
pub const DEFAULT_RADIUS_KM: f64 = 200.0;

/// Fault-proximity query engine.
///
/// Owns an injected dataset loader and regional cache; construct one
/// instance per runtime and share it. Queries are safe to issue
/// concurrently: the dataset is immutable once loaded, and cache updates
/// are atomic per query.
pub struct ProximityEngine<F> {
    loader: DatasetLoader<F>,
    cache: RegionalCache,
}

impl<F: FaultFetcher> ProximityEngine<F> {
    /// Create an engine with the default cache capacity.
    pub fn new(loader: DatasetLoader<F>) -> Self {
        Self::with_cache(loader, RegionalCache::default())
    }

    /// Create an engine around an explicit cache instance.
    pub fn with_cache(loader: DatasetLoader<F>, cache: RegionalCache) -> Self {
        Self { loader, cache }
    }

    /// Find fault lines within `radius_km` of a query point.
    ///
    /// Returns matching features in original dataset order (stable, not
    /// sorted by distance - callers needing distance order must sort
    /// themselves). Non-LineString features and malformed coordinate
    /// sequences are excluded silently; the dataset is heterogeneous by
    /// design.
    ///
    /// Results are cached per 0.5° grid cell, so repeated queries in the
    /// same area skip the dataset scan entirely.
    ///
    /// Proximity lookups are a best-effort enhancement: if the dataset
    /// cannot be loaded, the failure is logged and an empty sequence is
    /// returned rather than an error. The next query retries the load.
    pub async fn find_nearby_faults(
        &self,
        lat: f64,
        lng: f64,
        radius_km: f64,
    ) -> Vec<FaultFeature> {
        let cell = GridCell::from_query(lat, lng, radius_km);

        if let Some(cached) = self.cache.get(&cell) {
            tracing::debug!(cell = %cell, faults = cached.len(), "Proximity cache hit");
            return cached;
        }

        let dataset = match self.loader.load().await {
            Ok(dataset) => dataset,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    lat,
                    lng,
                    radius_km,
                    "Fault dataset unavailable; returning no nearby faults"
                );
                // Not cached: a later query in this cell should retry.
                return Vec::new();
            }
        };

        let nearby: Vec<FaultFeature> = dataset
            .iter()
            .filter(|fault| {
                fault.is_line()
                    && distance_to_query(lat, lng, &fault.geometry.coordinates) <= radius_km
            })
            .cloned()
            .collect();

        tracing::debug!(
            cell = %cell,
            scanned = dataset.len(),
            faults = nearby.len(),
            "Proximity scan complete"
        );

        self.cache.insert(cell, nearby.clone());
        nearby
    }

    /// [`Self::find_nearby_faults`] with the default 200 km radius.
    pub async fn find_nearby_faults_default(&self, lat: f64, lng: f64) -> Vec<FaultFeature> {
        self.find_nearby_faults(lat, lng, DEFAULT_RADIUS_KM).await
    }

    /// The engine's regional cache, for stats and explicit invalidation.
    pub fn cache(&self) -> &RegionalCache {
        &self.cache
    }

    /// The engine's dataset loader.
    pub fn loader(&self) -> &DatasetLoader<F> {
        &self.loader
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{parse_feature_collection, DatasetError, FaultDataset};
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    const TWO_FAULTS: &[u8] = br#"{
        "type": "FeatureCollection",
        "features": [
            {
                "geometry": {"type": "LineString", "coordinates": [[-122.0, 37.0], [-122.5, 37.5]]},
                "properties": {"name": "Coastal Fault"}
            },
            {
                "geometry": {"type": "Point", "coordinates": [-122.0, 37.0]},
                "properties": {"name": "Not A Line"}
            },
            {
                "geometry": {"type": "LineString", "coordinates": [[30.0, 50.0]]},
                "properties": {"name": "Far Away Fault"}
            }
        ]
    }"#;

    /// Fetcher serving a fixed payload, optionally failing, with a fetch
    /// counter for cache behavior assertions.
    struct FixtureFetcher {
        fetches: AtomicUsize,
        fail: AtomicBool,
    }

    impl FixtureFetcher {
        fn new() -> Self {
            Self {
                fetches: AtomicUsize::new(0),
                fail: AtomicBool::new(false),
            }
        }

        fn failing() -> Self {
            let fetcher = Self::new();
            fetcher.fail.store(true, Ordering::SeqCst);
            fetcher
        }
    }

    impl FaultFetcher for FixtureFetcher {
        async fn fetch(&self) -> Result<FaultDataset, DatasetError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            if self.fail.load(Ordering::SeqCst) {
                return Err(DatasetError::LoadError("fixture outage".to_string()));
            }
            parse_feature_collection(TWO_FAULTS)
        }
    }

    fn engine() -> ProximityEngine<FixtureFetcher> {
        ProximityEngine::new(DatasetLoader::new(FixtureFetcher::new()))
    }

    #[tokio::test]
    async fn test_nearby_fault_included() {
        let engine = engine();

        // ~4.4 km from the Coastal Fault's first vertex
        let faults = engine.find_nearby_faults(37.0, -122.05, 50.0).await;
        assert_eq!(faults.len(), 1);
        assert_eq!(faults[0].property_str("name"), Some("Coastal Fault"));
    }

    #[tokio::test]
    async fn test_distant_query_returns_empty() {
        let engine = engine();

        let faults = engine.find_nearby_faults(10.0, 10.0, 200.0).await;
        assert!(faults.is_empty());
    }

    #[tokio::test]
    async fn test_non_linestring_excluded() {
        let engine = engine();

        // Query directly on the Point feature's coordinates
        let faults = engine.find_nearby_faults(37.0, -122.0, 50.0).await;
        assert_eq!(faults.len(), 1, "Point geometry must not match");
        assert_eq!(faults[0].property_str("name"), Some("Coastal Fault"));
    }

    #[tokio::test]
    async fn test_idempotent_results() {
        let engine = engine();

        let first = engine.find_nearby_faults(37.0, -122.05, 50.0).await;
        let second = engine.find_nearby_faults(37.0, -122.05, 50.0).await;

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.property_str("name"), b.property_str("name"));
        }
    }

    #[tokio::test]
    async fn test_same_cell_hits_cache() {
        let engine = engine();

        engine.find_nearby_faults(37.01, -122.05, 50.0).await;
        // Different point, same 0.5° cell and radius
        engine.find_nearby_faults(37.26, -122.30, 50.0).await;

        let stats = engine.cache().stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(engine.cache().len(), 1, "Both queries share one cell");
    }

    #[tokio::test]
    async fn test_radius_boundary_inclusive() {
        let engine = engine();

        // Exact distance from query latitude to the nearest vertex (both
        // on the -122.0 meridian, so it is a pure latitude offset)
        let query_lat = 36.5;
        let exact = crate::geo::distance_km((query_lat, -122.0), (37.0, -122.0));

        let at_radius = engine.find_nearby_faults(query_lat, -122.0, exact).await;
        assert_eq!(at_radius.len(), 1, "distance == radius is included");

        // Shrinking the radius changes the cache key, so no fresh engine
        // is needed; the nearer boundary now excludes the fault
        let under_radius = engine
            .find_nearby_faults(query_lat, -122.0, exact - 1.0)
            .await;
        assert!(under_radius.is_empty(), "distance > radius is excluded");
    }

    #[tokio::test]
    async fn test_load_failure_returns_empty_and_is_not_cached() {
        let engine = ProximityEngine::new(DatasetLoader::new(FixtureFetcher::failing()));

        let faults = engine.find_nearby_faults(37.0, -122.05, 50.0).await;
        assert!(faults.is_empty());
        assert!(
            engine.cache().is_empty(),
            "Failure results must not be cached"
        );

        // Upstream recovers; the same query now succeeds
        engine.loader().fetcher().fail.store(false, Ordering::SeqCst);
        let faults = engine.find_nearby_faults(37.0, -122.05, 50.0).await;
        assert_eq!(faults.len(), 1);
        assert_eq!(engine.cache().len(), 1);
    }

    #[tokio::test]
    async fn test_default_radius() {
        let engine = engine();

        let faults = engine.find_nearby_faults_default(37.0, -122.05).await;
        assert_eq!(faults.len(), 1);

        let cached_cell = GridCell::from_query(37.0, -122.05, DEFAULT_RADIUS_KM);
        assert!(engine.cache().contains(&cached_cell));
    }
}
