//! Participant trust scoring.
//!
//! A pure pipeline: rating events feed the rating aggregator, behavior counts feed the behavioral
//! ledger, operational metrics feed the performance evaluator, and the three sub-scores are
//! composed into a bounded total, a tier and a capped list of recommendations. The service and
//! router wrap that pipeline with a snapshot cache and HTTP endpoints.

pub mod cache;
pub mod domain;
pub mod engine;
pub mod router;
pub mod service;
pub mod views;

#[cfg(test)]
mod tests;

pub use cache::{CacheError, NoCache, ScoreCache, SnapshotKey};
pub use domain::{
    BehaviorEffect, BehaviorKind, BehaviorMetrics, ContractorBehavior, CustomerBehavior,
    InvalidInputError, ParticipantRole, PerformanceMetrics, RatingCategory, RatingEvent,
    ScoreRequest, ScoreTier,
};
pub use engine::{CategoryWeights, ScoringConfig, ScoringConfigError, TrustScoreEngine};
pub use router::score_router;
pub use service::{ScoreServiceError, TrustScoreService};
pub use views::{
    BehaviorImpact, BehavioralBreakdown, PerformanceBreakdown, PerformanceComponent,
    PerformanceFactor, RatingBreakdown, Recommendation, RecommendationPriority, ScoreBreakdown,
    ScoreResult, TierView,
};
