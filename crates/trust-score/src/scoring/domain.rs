use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Lowest and highest value a rating (overall or category) may carry.
pub const RATING_MIN: f64 = 1.0;
pub const RATING_MAX: f64 = 5.0;

/// Marketplace side a participant is scored as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantRole {
    Customer,
    Contractor,
}

impl ParticipantRole {
    pub const fn ordered() -> [Self; 2] {
        [Self::Customer, Self::Contractor]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Customer => "Customer",
            Self::Contractor => "Contractor",
        }
    }

    pub fn from_key(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "customer" => Some(Self::Customer),
            "contractor" => Some(Self::Contractor),
            _ => None,
        }
    }
}

/// Feedback dimensions recognized by the rating aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingCategory {
    Timeliness,
    Communication,
    Professionalism,
    Quality,
}

impl RatingCategory {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Timeliness,
            Self::Communication,
            Self::Professionalism,
            Self::Quality,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Timeliness => "timeliness",
            Self::Communication => "communication",
            Self::Professionalism => "professionalism",
            Self::Quality => "quality",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Timeliness => "Timeliness",
            Self::Communication => "Communication",
            Self::Professionalism => "Professionalism",
            Self::Quality => "Quality",
        }
    }

    pub fn from_key(value: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|category| category.key() == value)
    }
}

/// One feedback submission about a participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingEvent {
    pub overall: f64,
    #[serde(default)]
    pub categories: BTreeMap<String, f64>,
    #[serde(default)]
    pub sequence_index: u32,
}

impl RatingEvent {
    pub fn new(sequence_index: u32, overall: f64) -> Self {
        Self {
            overall,
            categories: BTreeMap::new(),
            sequence_index,
        }
    }

    pub fn with_category(mut self, category: RatingCategory, value: f64) -> Self {
        self.categories.insert(category.key().to_string(), value);
        self
    }

    /// Rating for a recognized category, if the submission included it.
    pub fn category(&self, category: RatingCategory) -> Option<f64> {
        self.categories.get(category.key()).copied()
    }

    pub(crate) fn validate(&self) -> Result<(), InvalidInputError> {
        check_rating(self.sequence_index, "overall", self.overall)?;
        for category in RatingCategory::ordered() {
            if let Some(value) = self.category(category) {
                check_rating(self.sequence_index, category.key(), value)?;
            }
        }
        Ok(())
    }
}

fn check_rating(
    sequence_index: u32,
    field: &'static str,
    value: f64,
) -> Result<(), InvalidInputError> {
    if value.is_finite() && (RATING_MIN..=RATING_MAX).contains(&value) {
        Ok(())
    } else {
        Err(InvalidInputError::RatingOutOfRange {
            sequence_index,
            field,
            value,
        })
    }
}

/// Occurrence counts keyed by behavior name, as reported by behavior tracking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BehaviorMetrics(BTreeMap<String, i64>);

impl BehaviorMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<K: BehaviorKind>(mut self, behavior: K, count: i64) -> Self {
        self.record(behavior.key(), count);
        self
    }

    pub fn record(&mut self, behavior: impl Into<String>, count: i64) {
        self.0.insert(behavior.into(), count);
    }

    /// Count for a behavior name; absent names count as zero.
    pub fn count(&self, behavior: &str) -> i64 {
        self.0.get(behavior).copied().unwrap_or(0)
    }

    pub fn count_of<K: BehaviorKind>(&self, behavior: K) -> i64 {
        self.count(behavior.key())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for BehaviorMetrics {
    fn from_iter<T: IntoIterator<Item = (S, i64)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(behavior, count)| (behavior.into(), count))
                .collect(),
        )
    }
}

/// Aggregate operational metrics for one participant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PerformanceMetrics {
    pub completion_rate: f64,
    pub cancellation_rate: f64,
    pub avg_response_time_minutes: f64,
    pub repeat_rate: f64,
    pub total_jobs: u32,
}

impl PerformanceMetrics {
    pub(crate) fn validate(&self) -> Result<(), InvalidInputError> {
        check_rate("completionRate", self.completion_rate)?;
        check_rate("cancellationRate", self.cancellation_rate)?;
        check_rate("repeatRate", self.repeat_rate)?;

        let response = self.avg_response_time_minutes;
        if !response.is_finite() || response < 0.0 {
            return Err(InvalidInputError::InvalidResponseTime(response));
        }
        Ok(())
    }
}

fn check_rate(field: &'static str, value: f64) -> Result<(), InvalidInputError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(InvalidInputError::RateOutOfRange { field, value })
    }
}

/// Whether a behavior subtracts from or adds to the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BehaviorEffect {
    Penalty,
    Bonus,
}

/// Closed table of tracked behaviors for one role.
pub trait BehaviorKind: Copy + 'static {
    /// Every behavior in declaration order: penalties first, then bonuses.
    const ALL: &'static [Self];

    fn key(self) -> &'static str;

    /// Signed points applied per occurrence.
    fn points(self) -> i64;

    fn effect(self) -> BehaviorEffect {
        if self.points() < 0 {
            BehaviorEffect::Penalty
        } else {
            BehaviorEffect::Bonus
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CustomerBehavior {
    LastMinuteCancellation,
    NoShow,
    UnpreparedPickup,
    IncorrectVolume,
    PoorCommunication,
    MultipleDisputes,
    EarlyReady,
    ClearInstructions,
    FlexibleScheduling,
    PositiveFeedback,
    FrequentUser,
    OnTimePayment,
}

impl BehaviorKind for CustomerBehavior {
    const ALL: &'static [Self] = &[
        Self::LastMinuteCancellation,
        Self::NoShow,
        Self::UnpreparedPickup,
        Self::IncorrectVolume,
        Self::PoorCommunication,
        Self::MultipleDisputes,
        Self::EarlyReady,
        Self::ClearInstructions,
        Self::FlexibleScheduling,
        Self::PositiveFeedback,
        Self::FrequentUser,
        Self::OnTimePayment,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::LastMinuteCancellation => "lastMinuteCancellation",
            Self::NoShow => "noShow",
            Self::UnpreparedPickup => "unpreparedPickup",
            Self::IncorrectVolume => "incorrectVolume",
            Self::PoorCommunication => "poorCommunication",
            Self::MultipleDisputes => "multipleDisputes",
            Self::EarlyReady => "earlyReady",
            Self::ClearInstructions => "clearInstructions",
            Self::FlexibleScheduling => "flexibleScheduling",
            Self::PositiveFeedback => "positiveFeedback",
            Self::FrequentUser => "frequentUser",
            Self::OnTimePayment => "onTimePayment",
        }
    }

    fn points(self) -> i64 {
        match self {
            Self::LastMinuteCancellation => -10,
            Self::NoShow => -15,
            Self::UnpreparedPickup => -5,
            Self::IncorrectVolume => -8,
            Self::PoorCommunication => -5,
            Self::MultipleDisputes => -12,
            Self::EarlyReady => 3,
            Self::ClearInstructions => 2,
            Self::FlexibleScheduling => 2,
            Self::PositiveFeedback => 5,
            Self::FrequentUser => 3,
            Self::OnTimePayment => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContractorBehavior {
    LateArrival,
    NoShow,
    IncompletePickup,
    PoorCommunication,
    UnprofessionalBehavior,
    VehicleIssues,
    EarlyArrival,
    ExceedsExpectations,
    HandlesDifficultSituations,
    HighVolumeCapacity,
    FlexibleSchedule,
    ConsistentPerformance,
}

impl BehaviorKind for ContractorBehavior {
    const ALL: &'static [Self] = &[
        Self::LateArrival,
        Self::NoShow,
        Self::IncompletePickup,
        Self::PoorCommunication,
        Self::UnprofessionalBehavior,
        Self::VehicleIssues,
        Self::EarlyArrival,
        Self::ExceedsExpectations,
        Self::HandlesDifficultSituations,
        Self::HighVolumeCapacity,
        Self::FlexibleSchedule,
        Self::ConsistentPerformance,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::LateArrival => "lateArrival",
            Self::NoShow => "noShow",
            Self::IncompletePickup => "incompletePickup",
            Self::PoorCommunication => "poorCommunication",
            Self::UnprofessionalBehavior => "unprofessionalBehavior",
            Self::VehicleIssues => "vehicleIssues",
            Self::EarlyArrival => "earlyArrival",
            Self::ExceedsExpectations => "exceedsExpectations",
            Self::HandlesDifficultSituations => "handlesDifficultSituations",
            Self::HighVolumeCapacity => "highVolumeCapacity",
            Self::FlexibleSchedule => "flexibleSchedule",
            Self::ConsistentPerformance => "consistentPerformance",
        }
    }

    fn points(self) -> i64 {
        match self {
            Self::LateArrival => -8,
            Self::NoShow => -20,
            Self::IncompletePickup => -10,
            Self::PoorCommunication => -5,
            Self::UnprofessionalBehavior => -15,
            Self::VehicleIssues => -5,
            Self::EarlyArrival => 5,
            Self::ExceedsExpectations => 8,
            Self::HandlesDifficultSituations => 5,
            Self::HighVolumeCapacity => 3,
            Self::FlexibleSchedule => 2,
            Self::ConsistentPerformance => 4,
        }
    }
}

/// Discrete classification of a composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScoreTier {
    Excellent,
    Good,
    Average,
    BelowAverage,
    Poor,
}

impl ScoreTier {
    /// Highest tier first; classification takes the first inclusive lower bound met.
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Excellent,
            Self::Good,
            Self::Average,
            Self::BelowAverage,
            Self::Poor,
        ]
    }

    pub const fn minimum_score(self) -> u8 {
        match self {
            Self::Excellent => 90,
            Self::Good => 75,
            Self::Average => 60,
            Self::BelowAverage => 45,
            Self::Poor => 0,
        }
    }

    pub fn for_score(score: u8) -> Self {
        Self::ordered()
            .into_iter()
            .find(|tier| score >= tier.minimum_score())
            .unwrap_or(Self::Poor)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::BelowAverage => "Below Average",
            Self::Poor => "Poor",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Excellent => "Outstanding service provider",
            Self::Good => "Reliable and professional",
            Self::Average => "Meets basic expectations",
            Self::BelowAverage => "Needs improvement",
            Self::Poor => "Requires immediate attention",
        }
    }

    /// Display colour used by dashboards rendering the tier badge.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Excellent => "#34A853",
            Self::Good => "#1E88E5",
            Self::Average => "#FF8F00",
            Self::BelowAverage => "#F59E0B",
            Self::Poor => "#EF4444",
        }
    }

    pub const fn needs_attention(self) -> bool {
        matches!(self, Self::BelowAverage | Self::Poor)
    }
}

/// Full input snapshot for a single scoring call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    pub role: ParticipantRole,
    #[serde(default)]
    pub rating_events: Vec<RatingEvent>,
    #[serde(default)]
    pub behavior_metrics: BehaviorMetrics,
    #[serde(default)]
    pub performance_metrics: PerformanceMetrics,
}

impl ScoreRequest {
    pub fn new(role: ParticipantRole) -> Self {
        Self {
            role,
            rating_events: Vec::new(),
            behavior_metrics: BehaviorMetrics::default(),
            performance_metrics: PerformanceMetrics::default(),
        }
    }
}

/// Caller contract violations detected before any score is produced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidInputError {
    #[error("rating #{sequence_index} has {field} = {value}, expected a value between 1 and 5")]
    RatingOutOfRange {
        sequence_index: u32,
        field: &'static str,
        value: f64,
    },
    #[error("behavior {behavior} has negative count {count}")]
    NegativeBehaviorCount { behavior: &'static str, count: i64 },
    #[error("{field} = {value} is outside the 0..=1 range")]
    RateOutOfRange { field: &'static str, value: f64 },
    #[error("average response time {0} must be a non-negative number of minutes")]
    InvalidResponseTime(f64),
}
