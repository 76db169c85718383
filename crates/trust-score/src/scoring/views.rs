use serde::Serialize;

use super::domain::ScoreTier;

/// Engine output: the composite score plus every component needed to explain it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub total_score: u8,
    pub rating_score: u8,
    pub behavioral_score: i16,
    pub performance_score: i16,
    pub tier: ScoreTier,
    pub breakdown: ScoreBreakdown,
    pub recommendations: Vec<Recommendation>,
}

impl ScoreResult {
    pub fn tier_label(&self) -> &'static str {
        self.tier.label()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub rating_breakdown: Option<RatingBreakdown>,
    pub behavioral_breakdown: BehavioralBreakdown,
    pub performance_breakdown: PerformanceBreakdown,
}

/// Plain (undecayed) averages across the rating history, one decimal place.
///
/// Category means divide by every event, so a category nobody rated reports 0.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingBreakdown {
    pub overall: f64,
    pub timeliness: f64,
    pub communication: f64,
    pub professionalism: f64,
    pub quality: f64,
    pub total_ratings: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BehavioralBreakdown {
    pub penalties: Vec<BehaviorImpact>,
    pub bonuses: Vec<BehaviorImpact>,
    /// Unclamped sum of every impact.
    pub total_impact: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BehaviorImpact {
    pub behavior: &'static str,
    pub count: i64,
    pub impact: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceBreakdown {
    pub completion_rate: f64,
    pub cancellation_rate: f64,
    pub avg_response_time_minutes: f64,
    pub repeat_rate: f64,
    pub total_jobs: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<PerformanceComponent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceFactor {
    CompletionRate,
    CancellationRate,
    ResponseTime,
    RepeatBusiness,
}

/// One performance rule that fired, kept for audits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerformanceComponent {
    pub factor: PerformanceFactor,
    pub points: i16,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendationPriority {
    High,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub category: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub impact: &'static str,
    pub priority: RecommendationPriority,
}

/// Tier metadata exposed to dashboards.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierView {
    pub tier: ScoreTier,
    pub label: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    pub minimum_score: u8,
}

impl From<ScoreTier> for TierView {
    fn from(tier: ScoreTier) -> Self {
        Self {
            tier,
            label: tier.label(),
            description: tier.description(),
            color: tier.color(),
            minimum_score: tier.minimum_score(),
        }
    }
}
