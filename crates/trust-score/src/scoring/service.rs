use std::sync::Arc;

use tracing::debug;

use super::cache::{CacheError, ScoreCache, SnapshotKey};
use super::domain::{InvalidInputError, ScoreRequest};
use super::engine::{ScoringConfig, TrustScoreEngine};
use super::views::ScoreResult;

/// Service composing the scoring engine with a snapshot cache.
pub struct TrustScoreService<C> {
    engine: Arc<TrustScoreEngine>,
    cache: Arc<C>,
}

impl<C> TrustScoreService<C>
where
    C: ScoreCache + 'static,
{
    pub fn new(cache: Arc<C>, config: ScoringConfig) -> Self {
        Self {
            engine: Arc::new(TrustScoreEngine::new(config)),
            cache,
        }
    }

    pub fn engine(&self) -> &TrustScoreEngine {
        &self.engine
    }

    /// Score a snapshot, reusing a cached result when the snapshot was seen before.
    pub fn score(&self, request: &ScoreRequest) -> Result<ScoreResult, ScoreServiceError> {
        let key = SnapshotKey::for_request(request)?;

        if let Some(cached) = self.cache.get(&key)? {
            debug!(role = request.role.label(), "score cache hit");
            return Ok(cached);
        }

        let result = self.engine.score(request)?;
        self.cache.put(key, result.clone())?;
        debug!(
            role = request.role.label(),
            total = result.total_score,
            "score cache miss, stored"
        );

        Ok(result)
    }
}

/// Error raised by the scoring service.
#[derive(Debug, thiserror::Error)]
pub enum ScoreServiceError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
    #[error(transparent)]
    Cache(#[from] CacheError),
    #[error("could not fingerprint score request: {0}")]
    Fingerprint(#[from] serde_json::Error),
}
