mod behavior;
mod composite;
mod config;
mod performance;
mod ratings;
mod recommendations;

pub use behavior::{tally_behavior, BehavioralTally, BEHAVIORAL_MAX, BEHAVIORAL_MIN};
pub use composite::{compose, CompositeScore};
pub use config::{CategoryWeights, ScoringConfig, ScoringConfigError};
pub use performance::{evaluate_performance, PerformanceOutcome, PERFORMANCE_MAX, PERFORMANCE_MIN};
pub use ratings::{aggregate_ratings, RatingAggregate};
pub use recommendations::{recommend, RecommendationContext, MAX_RECOMMENDATIONS};

use super::domain::{
    BehaviorMetrics, InvalidInputError, ParticipantRole, PerformanceMetrics, RatingEvent,
    ScoreRequest,
};
use super::views::{ScoreBreakdown, ScoreResult};
use tracing::debug;

/// Stateless scorer; holds only its immutable configuration and may be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct TrustScoreEngine {
    config: ScoringConfig,
}

impl TrustScoreEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Runs the full pipeline: ratings, behavior, performance, composite, recommendations.
    pub fn compute_score(
        &self,
        role: ParticipantRole,
        rating_events: &[RatingEvent],
        behavior_metrics: &BehaviorMetrics,
        performance_metrics: &PerformanceMetrics,
    ) -> Result<ScoreResult, InvalidInputError> {
        let ratings = aggregate_ratings(rating_events, &self.config)?;
        let behavioral = tally_behavior(behavior_metrics, role)?;
        let performance = evaluate_performance(performance_metrics, role)?;

        let composite = compose(ratings.score, behavioral.score, performance.score);
        let recommendations = recommend(&RecommendationContext {
            role,
            tier: composite.tier,
            behavior: behavior_metrics,
            performance: performance_metrics,
        });

        debug!(
            role = role.label(),
            ratings = rating_events.len(),
            total = composite.total_score,
            tier = composite.tier.label(),
            "computed trust score"
        );

        Ok(ScoreResult {
            total_score: composite.total_score,
            rating_score: ratings.rounded_score(),
            behavioral_score: behavioral.score,
            performance_score: performance.score,
            tier: composite.tier,
            breakdown: ScoreBreakdown {
                rating_breakdown: ratings.breakdown,
                behavioral_breakdown: behavioral.breakdown,
                performance_breakdown: performance.breakdown,
            },
            recommendations,
        })
    }

    pub fn score(&self, request: &ScoreRequest) -> Result<ScoreResult, InvalidInputError> {
        self.compute_score(
            request.role,
            &request.rating_events,
            &request.behavior_metrics,
            &request.performance_metrics,
        )
    }
}
