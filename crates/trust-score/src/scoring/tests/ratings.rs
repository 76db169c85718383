use super::common::*;
use crate::scoring::domain::{InvalidInputError, RatingCategory, RatingEvent};
use crate::scoring::engine::{aggregate_ratings, ScoringConfig};

#[test]
fn empty_history_yields_neutral_prior() {
    let aggregate = aggregate_ratings(&[], &ScoringConfig::default()).expect("aggregates");

    assert_close(aggregate.score, 50.0);
    assert_eq!(aggregate.rounded_score(), 50);
    assert!(aggregate.breakdown.is_none());
}

#[test]
fn perfect_rating_maps_to_one_hundred() {
    let aggregate =
        aggregate_ratings(&[five_star(0)], &ScoringConfig::default()).expect("aggregates");

    assert_close(aggregate.score, 100.0);
    assert_eq!(aggregate.rounded_score(), 100);
}

#[test]
fn missing_categories_contribute_nothing() {
    let event = RatingEvent::new(0, 4.0).with_category(RatingCategory::Timeliness, 5.0);

    let aggregate = aggregate_ratings(&[event], &ScoringConfig::default()).expect("aggregates");

    // 80 * 0.4 from overall, timeliness alone: 100 * 0.25 * 0.6.
    assert_close(aggregate.score, 47.0);
    assert_eq!(aggregate.rounded_score(), 47);
}

#[test]
fn overall_only_rating_uses_neutral_category_share() {
    let aggregate = aggregate_ratings(&[RatingEvent::new(0, 3.0)], &ScoringConfig::default())
        .expect("aggregates");

    // 60 * 0.4 + 50 * 0.6
    assert_close(aggregate.score, 54.0);
}

#[test]
fn unrated_category_share_is_configurable() {
    let config = ScoringConfig {
        unrated_category_score: 100.0,
        ..ScoringConfig::default()
    };
    let aggregate = aggregate_ratings(&[RatingEvent::new(0, 3.0)], &config).expect("aggregates");

    assert_close(aggregate.score, 84.0);
}

#[test]
fn unrecognized_category_keys_are_ignored() {
    let mut event = RatingEvent::new(0, 5.0);
    event.categories.insert("friendliness".to_string(), 1.0);
    event.categories.insert("cleanliness".to_string(), 42.0);

    let aggregate = aggregate_ratings(&[event], &ScoringConfig::default()).expect("aggregates");

    // Treated like a rating without categories: 100 * 0.4 + 50 * 0.6.
    assert_close(aggregate.score, 70.0);
}

#[test]
fn recent_low_rating_weighs_more_than_old_low_rating() {
    let config = ScoringConfig::default();
    let recent_low: Vec<RatingEvent> = (0..4)
        .map(five_star)
        .chain(std::iter::once(uniform_rating(4, 1.0)))
        .collect();
    let old_low: Vec<RatingEvent> = std::iter::once(uniform_rating(0, 1.0))
        .chain((1..5).map(five_star))
        .collect();

    let recent = aggregate_ratings(&recent_low, &config).expect("aggregates");
    let old = aggregate_ratings(&old_low, &config).expect("aggregates");

    assert!(
        recent.score < old.score,
        "recent low rating ({}) should pull harder than an old one ({})",
        recent.score,
        old.score
    );
    assert!(old.score < 100.0);
    assert_eq!(recent.rounded_score(), 82);
    assert_eq!(old.rounded_score(), 86);
}

#[test]
fn history_is_ordered_by_sequence_index() {
    let config = ScoringConfig::default();
    let ordered = vec![uniform_rating(0, 2.0), five_star(1), uniform_rating(2, 4.0)];
    let shuffled = vec![uniform_rating(2, 4.0), uniform_rating(0, 2.0), five_star(1)];

    let expected = aggregate_ratings(&ordered, &config).expect("aggregates");
    let actual = aggregate_ratings(&shuffled, &config).expect("aggregates");

    assert_eq!(expected, actual);
}

#[test]
fn no_decay_is_a_plain_average() {
    let config = ScoringConfig {
        recency_decay: 1.0,
        ..ScoringConfig::default()
    };
    let events = vec![five_star(0), uniform_rating(1, 1.0)];

    let aggregate = aggregate_ratings(&events, &config).expect("aggregates");

    assert_close(aggregate.score, 60.0);
}

#[test]
fn breakdown_reports_plain_means_to_one_decimal() {
    let events = vec![
        RatingEvent::new(0, 4.0).with_category(RatingCategory::Timeliness, 3.0),
        RatingEvent::new(1, 4.0).with_category(RatingCategory::Timeliness, 4.0),
        RatingEvent::new(2, 5.0).with_category(RatingCategory::Quality, 5.0),
    ];

    let breakdown = aggregate_ratings(&events, &ScoringConfig::default())
        .expect("aggregates")
        .breakdown
        .expect("breakdown present");

    assert_close(breakdown.overall, 4.3);
    // Means are taken across all three events.
    assert_close(breakdown.timeliness, 2.3);
    assert_close(breakdown.quality, 1.7);
    assert_close(breakdown.communication, 0.0);
    assert_close(breakdown.professionalism, 0.0);
    assert_eq!(breakdown.total_ratings, 3);
}

#[test]
fn rejects_ratings_outside_the_scale() {
    let config = ScoringConfig::default();

    let error = aggregate_ratings(&[RatingEvent::new(3, 0.0)], &config).expect_err("rejects");
    assert_eq!(
        error,
        InvalidInputError::RatingOutOfRange {
            sequence_index: 3,
            field: "overall",
            value: 0.0,
        }
    );

    let event = RatingEvent::new(1, 4.0).with_category(RatingCategory::Quality, 6.0);
    match aggregate_ratings(&[event], &config) {
        Err(InvalidInputError::RatingOutOfRange { field, .. }) => assert_eq!(field, "quality"),
        other => panic!("expected out of range quality, got {other:?}"),
    }

    assert!(aggregate_ratings(&[RatingEvent::new(0, f64::NAN)], &config).is_err());
}

#[test]
fn long_histories_stay_within_bounds() {
    let events: Vec<RatingEvent> = (0..5_000).map(|index| uniform_rating(index, 1.0)).collect();

    let aggregate = aggregate_ratings(&events, &ScoringConfig::default()).expect("aggregates");

    assert_close(aggregate.score, 20.0);
    assert_eq!(aggregate.breakdown.expect("breakdown").total_ratings, 5_000);
}
