use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use trust_score::scoring::{CacheError, ScoreCache, ScoreResult, SnapshotKey};

/// Snapshots kept by the server before the oldest entries are evicted.
pub(crate) const DEFAULT_CACHE_CAPACITY: usize = 1_024;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default)]
struct CacheEntries {
    results: HashMap<SnapshotKey, ScoreResult>,
    insertion_order: VecDeque<SnapshotKey>,
}

/// Process-local snapshot cache bounded to `capacity` entries, evicting in insertion order.
#[derive(Clone)]
pub(crate) struct InMemoryScoreCache {
    capacity: usize,
    entries: Arc<Mutex<CacheEntries>>,
}

impl Default for InMemoryScoreCache {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }
}

impl InMemoryScoreCache {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: Arc::new(Mutex::new(CacheEntries::default())),
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries
            .lock()
            .expect("cache mutex poisoned")
            .results
            .len()
    }
}

fn poisoned() -> CacheError {
    CacheError::Unavailable("score cache mutex poisoned".to_string())
}

impl ScoreCache for InMemoryScoreCache {
    fn get(&self, key: &SnapshotKey) -> Result<Option<ScoreResult>, CacheError> {
        let guard = self.entries.lock().map_err(|_| poisoned())?;
        Ok(guard.results.get(key).cloned())
    }

    fn put(&self, key: SnapshotKey, result: ScoreResult) -> Result<(), CacheError> {
        let mut guard = self.entries.lock().map_err(|_| poisoned())?;
        if guard.results.insert(key.clone(), result).is_some() {
            return Ok(());
        }

        guard.insertion_order.push_back(key);
        while guard.results.len() > self.capacity {
            match guard.insertion_order.pop_front() {
                Some(oldest) => {
                    guard.results.remove(&oldest);
                }
                None => break,
            }
        }
        Ok(())
    }
}
