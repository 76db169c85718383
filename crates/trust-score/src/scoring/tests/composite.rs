use crate::scoring::domain::ScoreTier;
use crate::scoring::engine::compose;

#[test]
fn tier_boundaries_are_inclusive_lower_bounds() {
    assert_eq!(compose(90.0, 0, 0).tier, ScoreTier::Excellent);
    assert_eq!(compose(89.0, 0, 0).tier, ScoreTier::Good);
    assert_eq!(compose(75.0, 0, 0).tier, ScoreTier::Good);
    assert_eq!(compose(74.0, 0, 0).tier, ScoreTier::Average);
    assert_eq!(compose(60.0, 0, 0).tier, ScoreTier::Average);
    assert_eq!(compose(59.0, 0, 0).tier, ScoreTier::BelowAverage);
    assert_eq!(compose(45.0, 0, 0).tier, ScoreTier::BelowAverage);
    assert_eq!(compose(44.0, 0, 0).tier, ScoreTier::Poor);
}

#[test]
fn total_is_clamped_to_range() {
    let high = compose(100.0, 20, 15);
    assert_eq!(high.total_score, 100);
    assert_eq!(high.tier, ScoreTier::Excellent);

    let low = compose(0.0, -20, -15);
    assert_eq!(low.total_score, 0);
    assert_eq!(low.tier, ScoreTier::Poor);
}

#[test]
fn tier_follows_the_rounded_total() {
    assert_eq!(compose(89.5, 0, 0).total_score, 90);
    assert_eq!(compose(89.5, 0, 0).tier, ScoreTier::Excellent);
    assert_eq!(compose(89.4, 0, 0).tier, ScoreTier::Good);
    assert_eq!(compose(50.0, -10, 5).total_score, 45);
}

#[test]
fn tier_lookup_matches_thresholds() {
    assert_eq!(ScoreTier::for_score(100), ScoreTier::Excellent);
    assert_eq!(ScoreTier::for_score(0), ScoreTier::Poor);
    for tier in ScoreTier::ordered() {
        assert_eq!(ScoreTier::for_score(tier.minimum_score()), tier);
    }
}

#[test]
fn tiers_carry_presentation_metadata() {
    assert_eq!(ScoreTier::Excellent.color(), "#34A853");
    assert_eq!(ScoreTier::Poor.description(), "Requires immediate attention");
    assert_eq!(ScoreTier::BelowAverage.label(), "Below Average");
    assert!(ScoreTier::BelowAverage.needs_attention());
    assert!(!ScoreTier::Average.needs_attention());
}
