//! Bounded regional cache with FIFO eviction.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use crate::dataset::FaultFeature;

use super::grid::GridCell;

/// Maximum number of distinct grid cells kept in the cache.
pub const REGIONAL_CACHE_CAPACITY: usize = 50;

/// Cache hit/miss/eviction counters.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Number of lookups that found an entry.
    pub hits: u64,
    /// Number of lookups that found nothing.
    pub misses: u64,
    /// Number of entries evicted to make room.
    pub evictions: u64,
}

/// Cache storage guarded by one mutex, so an insert and its eviction are
/// a single atomic step.
#[derive(Default)]
struct CacheInner {
    entries: HashMap<GridCell, Vec<FaultFeature>>,
    /// Keys in insertion order, oldest first.
    insertion_order: VecDeque<GridCell>,
    stats: CacheStats,
}

/// Bounded cache mapping a quantized query cell to its nearby faults.
///
/// Eviction is FIFO: when the distinct-key count would exceed the capacity,
/// the oldest-inserted key is dropped. This deliberately preserves the
/// original engine's behavior rather than switching to LRU; spatial query
/// locality makes recency a weak signal here, and lookups never reorder
/// entries. The cache is always derivable by recomputing from the dataset,
/// so clearing it can only cost time, never correctness.
///
/// Construct per engine instance; there is no global cache, so tests can
/// assert eviction order on isolated instances.
pub struct RegionalCache {
    inner: Mutex<CacheInner>,
    capacity: usize,
}

impl Default for RegionalCache {
    fn default() -> Self {
        Self::new(REGIONAL_CACHE_CAPACITY)
    }
}

impl RegionalCache {
    /// Create a cache holding at most `capacity` distinct cells.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(CacheInner::default()),
            capacity,
        }
    }

    /// Get the cached fault sequence for a cell, if present.
    pub fn get(&self, cell: &GridCell) -> Option<Vec<FaultFeature>> {
        let mut inner = self.inner.lock().unwrap();

        if let Some(faults) = inner.entries.get(cell).cloned() {
            inner.stats.hits += 1;
            Some(faults)
        } else {
            inner.stats.misses += 1;
            None
        }
    }

    /// Insert a result sequence for a cell, evicting the oldest-inserted
    /// key first if the cache is at capacity.
    ///
    /// Re-inserting an existing key replaces its value without changing
    /// its position in the eviction order. Two concurrent misses on the
    /// same key may both insert; last write wins, which is harmless since
    /// both computed equivalent results.
    pub fn insert(&self, cell: GridCell, faults: Vec<FaultFeature>) {
        let mut inner = self.inner.lock().unwrap();

        if !inner.entries.contains_key(&cell) {
            if inner.insertion_order.len() >= self.capacity {
                if let Some(oldest) = inner.insertion_order.pop_front() {
                    inner.entries.remove(&oldest);
                    inner.stats.evictions += 1;
                    tracing::debug!(cell = %oldest, "Regional cache evicted oldest cell");
                }
            }
            inner.insertion_order.push_back(cell);
        }

        inner.entries.insert(cell, faults);
    }

    /// Whether a cell is currently cached.
    pub fn contains(&self, cell: &GridCell) -> bool {
        self.inner.lock().unwrap().entries.contains_key(cell)
    }

    /// Number of cached cells.
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all entries. Safe at any time; the next query recomputes.
    pub fn clear(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.entries.clear();
        inner.insertion_order.clear();
    }

    /// Snapshot of the hit/miss/eviction counters.
    pub fn stats(&self) -> CacheStats {
        self.inner.lock().unwrap().stats.clone()
    }
}
