//! Rating aggregation: a recency-weighted average of per-event scores.

use super::super::domain::{InvalidInputError, RatingCategory, RatingEvent};
use super::super::views::RatingBreakdown;
use super::config::{CategoryWeights, ScoringConfig};

/// Maps the 1..=5 rating scale onto 0..=100.
const RATING_SCALE: f64 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub struct RatingAggregate {
    /// Unrounded score in 0..=100.
    pub score: f64,
    pub breakdown: Option<RatingBreakdown>,
}

impl RatingAggregate {
    pub fn rounded_score(&self) -> u8 {
        self.score.clamp(0.0, 100.0).round() as u8
    }
}

pub fn aggregate_ratings(
    events: &[RatingEvent],
    config: &ScoringConfig,
) -> Result<RatingAggregate, InvalidInputError> {
    for event in events {
        event.validate()?;
    }

    if events.is_empty() {
        return Ok(RatingAggregate {
            score: config.neutral_prior.clamp(0.0, 100.0),
            breakdown: None,
        });
    }

    let mut ordered: Vec<&RatingEvent> = events.iter().collect();
    ordered.sort_by_key(|event| event.sequence_index);

    let len = ordered.len();
    let mut weighted_total = 0.0;
    let mut weight_sum = 0.0;
    for (position, event) in ordered.iter().enumerate() {
        let steps_back = (len - position - 1) as f64;
        let weight = config.recency_decay.powf(steps_back);
        weighted_total += event_score(event, config) * weight;
        weight_sum += weight;
    }

    let score = if weight_sum > 0.0 {
        weighted_total / weight_sum
    } else {
        config.neutral_prior
    };

    Ok(RatingAggregate {
        score: score.clamp(0.0, 100.0),
        breakdown: Some(breakdown(&ordered)),
    })
}

fn event_score(event: &RatingEvent, config: &ScoringConfig) -> f64 {
    let overall_component = event.overall * RATING_SCALE;
    let category_component = category_component(event, &config.category_weights)
        .unwrap_or(config.unrated_category_score);

    overall_component * config.overall_weight + category_component * (1.0 - config.overall_weight)
}

/// Weighted sum of the rated categories; an unrated category contributes nothing.
/// `None` when the event rated no recognized category at all.
fn category_component(event: &RatingEvent, weights: &CategoryWeights) -> Option<f64> {
    let mut rated = false;
    let mut total = 0.0;
    for category in RatingCategory::ordered() {
        if let Some(value) = event.category(category) {
            total += value * RATING_SCALE * weights.weight(category);
            rated = true;
        }
    }

    rated.then_some(total)
}

fn breakdown(events: &[&RatingEvent]) -> RatingBreakdown {
    let count = events.len() as f64;
    let overall = events.iter().map(|event| event.overall).sum::<f64>() / count;
    let category_mean = |category: RatingCategory| {
        let total: f64 = events
            .iter()
            .filter_map(|event| event.category(category))
            .sum();
        one_decimal(total / count)
    };

    RatingBreakdown {
        overall: one_decimal(overall),
        timeliness: category_mean(RatingCategory::Timeliness),
        communication: category_mean(RatingCategory::Communication),
        professionalism: category_mean(RatingCategory::Professionalism),
        quality: category_mean(RatingCategory::Quality),
        total_ratings: events.len(),
    }
}

fn one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
