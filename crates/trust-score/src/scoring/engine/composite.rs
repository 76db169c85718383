use super::super::domain::ScoreTier;

pub const TOTAL_MIN: f64 = 0.0;
pub const TOTAL_MAX: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositeScore {
    pub total_score: u8,
    pub tier: ScoreTier,
}

/// Sums the sub-scores, clamps to 0..=100 and classifies the rounded total.
pub fn compose(rating_score: f64, behavioral_score: i16, performance_score: i16) -> CompositeScore {
    let raw = rating_score + f64::from(behavioral_score) + f64::from(performance_score);
    let total_score = if raw.is_nan() {
        0
    } else {
        raw.clamp(TOTAL_MIN, TOTAL_MAX).round() as u8
    };

    CompositeScore {
        total_score,
        tier: ScoreTier::for_score(total_score),
    }
}
