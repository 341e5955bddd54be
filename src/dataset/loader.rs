//! Memoizing dataset loader with concurrent-load coalescing.

use std::sync::Arc;

use tokio::sync::Mutex;

use super::error::DatasetError;
use super::fetch::FaultFetcher;
use super::model::FaultDataset;

/// Loads the fault dataset once and shares it for the process lifetime.
///
/// The first `load()` call fetches and parses the dataset. Callers arriving
/// while that fetch is in flight wait on the same operation rather than
/// issuing duplicate fetches, so a burst of concurrent first queries
/// performs exactly one upstream load. On failure the memo is left empty,
/// so the next call retries from scratch; a failed load never poisons the
/// cache.
pub struct DatasetLoader<F> {
    /// Resource fetcher for the raw feature collection.
    fetcher: F,

    /// Memoized dataset. The async mutex is held across the in-flight
    /// fetch, which is what coalesces concurrent loaders: followers block
    /// on the lock, then find the dataset already cached.
    cached: Mutex<Option<Arc<FaultDataset>>>,
}

impl<F: FaultFetcher> DatasetLoader<F> {
    /// Create a loader around a fetcher. Nothing is fetched until the
    /// first `load()` call.
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            cached: Mutex::new(None),
        }
    }

    /// Get the fault dataset, fetching it on first use.
    ///
    /// Idempotent and safe to call concurrently. After the first success
    /// this resolves immediately from the memo.
    ///
    /// # Errors
    ///
    /// Returns the fetcher's [`DatasetError`] when the resource is
    /// unreachable or the payload is structurally invalid. The error is
    /// not memoized.
    pub async fn load(&self) -> Result<Arc<FaultDataset>, DatasetError> {
        let mut cached = self.cached.lock().await;

        if let Some(dataset) = cached.as_ref() {
            return Ok(Arc::clone(dataset));
        }

        tracing::info!("Loading fault dataset");
        let dataset = match self.fetcher.fetch().await {
            Ok(dataset) => Arc::new(dataset),
            Err(e) => {
                // Leave the memo empty so the next call retries.
                tracing::warn!(error = %e, "Fault dataset load failed");
                return Err(e);
            }
        };

        tracing::info!(feature_count = dataset.len(), "Fault dataset loaded");
        *cached = Some(Arc::clone(&dataset));
        Ok(dataset)
    }

    /// Whether the dataset has been loaded and memoized.
    pub async fn is_loaded(&self) -> bool {
        self.cached.lock().await.is_some()
    }

    /// The underlying resource fetcher.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }
}
