//! Read-through cache of generated tables.
//!
//! The cache exists for reproducibility across re-renders, not for speed:
//! a caller that re-renders a view within a session keeps seeing the table it
//! saw first. Because generation is deterministic, recomputing a missing
//! entry always yields the same table, so population is last-writer-wins and
//! generation runs outside the lock.

use std::{
    collections::{HashMap, VecDeque},
    sync::{
        atomic::{AtomicU64, Ordering},
        Mutex, MutexGuard,
    },
};

use tracing::debug;

use ehospital_contracts::{
    error::DashboardResult,
    series::{SeriesRequest, TimeSeriesTable},
};

use crate::{seed::request_key, traits::SeriesSource};

/// Hit/miss counters and current size of a `SeriesCache`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Default entry limit of a `SeriesCache`.
pub const DEFAULT_MAX_ENTRIES: usize = 256;

/// Tables plus their insertion order, oldest first.
#[derive(Debug, Default)]
struct CacheState {
    tables: HashMap<String, TimeSeriesTable>,
    order: VecDeque<String>,
}

impl CacheState {
    /// Insert `table`, evicting the oldest entries beyond `max_entries`.
    fn insert(&mut self, key: String, table: TimeSeriesTable, max_entries: usize) {
        if self.tables.insert(key.clone(), table).is_none() {
            self.order.push_back(key);
        }
        while self.tables.len() > max_entries {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            self.tables.remove(&oldest);
        }
    }
}

/// A map from request key to generated table.
///
/// Keys are the hex SHA-256 of the request's canonical JSON, so identity,
/// period count, end date and every metric parameter all take part. Failed
/// generations are never stored.
///
/// Holds at most `max_entries` tables; the oldest is evicted first. An
/// evicted table is regenerated on its next request, and regeneration yields
/// an equal table.
#[derive(Debug)]
pub struct SeriesCache {
    state: Mutex<CacheState>,
    max_entries: usize,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl Default for SeriesCache {
    fn default() -> Self {
        Self::with_max_entries(DEFAULT_MAX_ENTRIES)
    }
}

impl SeriesCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cache holding at most `max_entries` tables (at least one).
    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            state: Mutex::new(CacheState::default()),
            max_entries: max_entries.max(1),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    // A poisoned map still only holds complete, deterministic tables.
    fn lock(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Return the cached table for `request`, generating it with `source` on
    /// a miss.
    pub fn get_or_generate<S>(&self, request: &SeriesRequest, source: &S) -> DashboardResult<TimeSeriesTable>
    where
        S: SeriesSource + ?Sized,
    {
        let key = request_key(request)?;

        if let Some(table) = self.lock().tables.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!(key = %short_key(&key), "series cache hit");
            return Ok(table.clone());
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        debug!(key = %short_key(&key), identity = %request.identity, "series cache miss");

        let table = source.generate(request)?;
        self.lock().insert(key, table.clone(), self.max_entries);
        Ok(table)
    }

    /// Drop every cached table. Counters are kept.
    pub fn clear(&self) {
        let mut state = self.lock();
        state.tables.clear();
        state.order.clear();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.lock().tables.len(),
        }
    }
}

/// A `SeriesSource` that serves repeated requests from a `SeriesCache`.
#[derive(Debug, Default)]
pub struct CachedSeries<S> {
    inner: S,
    cache: SeriesCache,
}

impl<S: SeriesSource> CachedSeries<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            cache: SeriesCache::new(),
        }
    }

    pub fn cache(&self) -> &SeriesCache {
        &self.cache
    }
}

impl<S: SeriesSource> SeriesSource for CachedSeries<S> {
    fn generate(&self, request: &SeriesRequest) -> DashboardResult<TimeSeriesTable> {
        self.cache.get_or_generate(request, &self.inner)
    }
}

/// First 12 hex chars, enough to tell keys apart in logs.
fn short_key(key: &str) -> &str {
    &key[..key.len().min(12)]
}
