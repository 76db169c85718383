use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::scoring::cache::{CacheError, ScoreCache, SnapshotKey};
use crate::scoring::domain::{
    BehaviorMetrics, ParticipantRole, PerformanceMetrics, RatingCategory, RatingEvent,
    ScoreRequest,
};
use crate::scoring::engine::{ScoringConfig, TrustScoreEngine};
use crate::scoring::service::TrustScoreService;
use crate::scoring::views::ScoreResult;

pub(super) fn engine() -> TrustScoreEngine {
    TrustScoreEngine::new(ScoringConfig::default())
}

/// Rating where every recognized category carries the overall value.
pub(super) fn uniform_rating(sequence_index: u32, value: f64) -> RatingEvent {
    RatingCategory::ordered()
        .into_iter()
        .fold(RatingEvent::new(sequence_index, value), |event, category| {
            event.with_category(category, value)
        })
}

pub(super) fn five_star(sequence_index: u32) -> RatingEvent {
    uniform_rating(sequence_index, 5.0)
}

pub(super) fn strong_performance() -> PerformanceMetrics {
    PerformanceMetrics {
        completion_rate: 1.0,
        cancellation_rate: 0.0,
        avg_response_time_minutes: 0.0,
        repeat_rate: 0.5,
        total_jobs: 10,
    }
}

/// Metrics that trigger no performance rule for either role.
pub(super) fn flat_performance() -> PerformanceMetrics {
    PerformanceMetrics {
        completion_rate: 0.85,
        cancellation_rate: 0.0,
        avg_response_time_minutes: 30.0,
        repeat_rate: 0.1,
        total_jobs: 40,
    }
}

pub(super) fn scenario_request() -> ScoreRequest {
    ScoreRequest {
        role: ParticipantRole::Customer,
        rating_events: vec![five_star(0)],
        behavior_metrics: BehaviorMetrics::default(),
        performance_metrics: strong_performance(),
    }
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[derive(Default)]
pub(super) struct MemoryCache {
    entries: Mutex<HashMap<SnapshotKey, ScoreResult>>,
    hits: Mutex<usize>,
}

impl MemoryCache {
    pub(super) fn hits(&self) -> usize {
        *self.hits.lock().expect("hits mutex poisoned")
    }

    pub(super) fn len(&self) -> usize {
        self.entries.lock().expect("cache mutex poisoned").len()
    }
}

impl ScoreCache for MemoryCache {
    fn get(&self, key: &SnapshotKey) -> Result<Option<ScoreResult>, CacheError> {
        let found = self
            .entries
            .lock()
            .expect("cache mutex poisoned")
            .get(key)
            .cloned();
        if found.is_some() {
            *self.hits.lock().expect("hits mutex poisoned") += 1;
        }
        Ok(found)
    }

    fn put(&self, key: SnapshotKey, result: ScoreResult) -> Result<(), CacheError> {
        self.entries
            .lock()
            .expect("cache mutex poisoned")
            .insert(key, result);
        Ok(())
    }
}

pub(super) struct UnavailableCache;

impl ScoreCache for UnavailableCache {
    fn get(&self, _key: &SnapshotKey) -> Result<Option<ScoreResult>, CacheError> {
        Err(CacheError::Unavailable("redis offline".to_string()))
    }

    fn put(&self, _key: SnapshotKey, _result: ScoreResult) -> Result<(), CacheError> {
        Err(CacheError::Unavailable("redis offline".to_string()))
    }
}

pub(super) fn build_service() -> (Arc<TrustScoreService<MemoryCache>>, Arc<MemoryCache>) {
    let cache = Arc::new(MemoryCache::default());
    let service = Arc::new(TrustScoreService::new(
        cache.clone(),
        ScoringConfig::default(),
    ));
    (service, cache)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
