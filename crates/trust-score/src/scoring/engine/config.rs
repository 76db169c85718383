use serde::{Deserialize, Serialize};

use super::super::domain::RatingCategory;

/// Tunable business constants for the rating aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Share of each event's score taken from the overall rating; categories get the rest.
    pub overall_weight: f64,
    pub category_weights: CategoryWeights,
    /// Geometric decay applied per step back in the rating history.
    pub recency_decay: f64,
    /// Rating score assigned to participants without any feedback.
    pub neutral_prior: f64,
    /// Category component used for a rating that scored no category.
    pub unrated_category_score: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            overall_weight: 0.4,
            category_weights: CategoryWeights::default(),
            recency_decay: 0.95,
            neutral_prior: 50.0,
            unrated_category_score: 50.0,
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), ScoringConfigError> {
        check_unit("overall_weight", self.overall_weight)?;
        for category in RatingCategory::ordered() {
            check_unit(category.key(), self.category_weights.weight(category))?;
        }
        if self.category_weights.total() <= 0.0 {
            return Err(ScoringConfigError::EmptyCategoryWeights);
        }
        if !(self.recency_decay > 0.0 && self.recency_decay <= 1.0) {
            return Err(ScoringConfigError::DecayOutOfRange(self.recency_decay));
        }
        if !(0.0..=100.0).contains(&self.neutral_prior) {
            return Err(ScoringConfigError::PriorOutOfRange(self.neutral_prior));
        }
        if !(0.0..=100.0).contains(&self.unrated_category_score) {
            return Err(ScoringConfigError::UnratedCategoryOutOfRange(
                self.unrated_category_score,
            ));
        }
        Ok(())
    }
}

fn check_unit(name: &'static str, value: f64) -> Result<(), ScoringConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ScoringConfigError::WeightOutOfRange { name, value })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryWeights {
    pub timeliness: f64,
    pub communication: f64,
    pub professionalism: f64,
    pub quality: f64,
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            timeliness: 0.25,
            communication: 0.25,
            professionalism: 0.25,
            quality: 0.25,
        }
    }
}

impl CategoryWeights {
    pub fn weight(&self, category: RatingCategory) -> f64 {
        match category {
            RatingCategory::Timeliness => self.timeliness,
            RatingCategory::Communication => self.communication,
            RatingCategory::Professionalism => self.professionalism,
            RatingCategory::Quality => self.quality,
        }
    }

    pub fn set(&mut self, category: RatingCategory, weight: f64) {
        match category {
            RatingCategory::Timeliness => self.timeliness = weight,
            RatingCategory::Communication => self.communication = weight,
            RatingCategory::Professionalism => self.professionalism = weight,
            RatingCategory::Quality => self.quality = weight,
        }
    }

    pub fn total(&self) -> f64 {
        RatingCategory::ordered()
            .into_iter()
            .map(|category| self.weight(category))
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringConfigError {
    #[error("{name} weight {value} must be between 0 and 1")]
    WeightOutOfRange { name: &'static str, value: f64 },
    #[error("category weights must not all be zero")]
    EmptyCategoryWeights,
    #[error("recency decay {0} must be greater than 0 and at most 1")]
    DecayOutOfRange(f64),
    #[error("neutral prior {0} must be between 0 and 100")]
    PriorOutOfRange(f64),
    #[error("unrated category score {0} must be between 0 and 100")]
    UnratedCategoryOutOfRange(f64),
}
