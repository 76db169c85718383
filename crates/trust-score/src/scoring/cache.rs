use super::domain::ScoreRequest;
use super::views::ScoreResult;

/// Cache key derived from the complete input snapshot.
///
/// Any change to a rating, behavior count or performance field produces a different key, so a
/// cached result never outlives the records it was computed from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SnapshotKey(pub String);

impl SnapshotKey {
    pub fn for_request(request: &ScoreRequest) -> Result<Self, serde_json::Error> {
        serde_json::to_string(request).map(Self)
    }
}

/// Storage abstraction for previously computed scores.
pub trait ScoreCache: Send + Sync {
    fn get(&self, key: &SnapshotKey) -> Result<Option<ScoreResult>, CacheError>;
    fn put(&self, key: SnapshotKey, result: ScoreResult) -> Result<(), CacheError>;
}

/// Cache that never stores anything; every request is computed.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCache;

impl ScoreCache for NoCache {
    fn get(&self, _key: &SnapshotKey) -> Result<Option<ScoreResult>, CacheError> {
        Ok(None)
    }

    fn put(&self, _key: SnapshotKey, _result: ScoreResult) -> Result<(), CacheError> {
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("score cache unavailable: {0}")]
    Unavailable(String),
}
