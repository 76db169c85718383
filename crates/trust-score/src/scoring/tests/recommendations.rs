use super::common::*;
use crate::scoring::domain::{
    BehaviorMetrics, ContractorBehavior, CustomerBehavior, ParticipantRole, PerformanceMetrics,
    ScoreTier,
};
use crate::scoring::engine::{recommend, RecommendationContext, MAX_RECOMMENDATIONS};
use crate::scoring::views::{Recommendation, RecommendationPriority};

fn recommend_for(
    role: ParticipantRole,
    tier: ScoreTier,
    behavior: &BehaviorMetrics,
    performance: &PerformanceMetrics,
) -> Vec<Recommendation> {
    recommend(&RecommendationContext {
        role,
        tier,
        behavior,
        performance,
    })
}

fn categories(recommendations: &[Recommendation]) -> Vec<&'static str> {
    recommendations
        .iter()
        .map(|recommendation| recommendation.category)
        .collect()
}

#[test]
fn excellent_participants_get_no_recommendations() {
    for role in ParticipantRole::ordered() {
        let recommendations = recommend_for(
            role,
            ScoreTier::Excellent,
            &BehaviorMetrics::default(),
            &PerformanceMetrics::default(),
        );
        assert!(recommendations.is_empty());
    }
}

#[test]
fn good_tier_only_gets_service_quality_with_role_wording() {
    let customer = recommend_for(
        ParticipantRole::Customer,
        ScoreTier::Good,
        &BehaviorMetrics::default(),
        &flat_performance(),
    );
    let contractor = recommend_for(
        ParticipantRole::Contractor,
        ScoreTier::Good,
        &BehaviorMetrics::default(),
        &flat_performance(),
    );

    assert_eq!(categories(&customer), vec!["Service Quality"]);
    assert_eq!(categories(&contractor), vec!["Service Quality"]);
    assert_eq!(customer[0].priority, RecommendationPriority::Medium);
    assert!(customer[0].description.contains("detailed instructions"));
    assert!(contractor[0].description.contains("arriving early"));
    assert_eq!(customer[0].title, contractor[0].title);
}

#[test]
fn struggling_customer_gets_targeted_high_priority_advice() {
    let behavior = BehaviorMetrics::default()
        .with(CustomerBehavior::NoShow, 1)
        .with(CustomerBehavior::LastMinuteCancellation, 2);

    let recommendations = recommend_for(
        ParticipantRole::Customer,
        ScoreTier::Poor,
        &behavior,
        &flat_performance(),
    );

    assert_eq!(
        categories(&recommendations),
        vec!["Communication", "Reliability", "Planning", "Service Quality"]
    );
    assert!(recommendations[..3]
        .iter()
        .all(|recommendation| recommendation.priority == RecommendationPriority::High));
}

#[test]
fn struggling_contractor_gets_punctuality_and_response_advice() {
    let behavior = BehaviorMetrics::default().with(ContractorBehavior::LateArrival, 1);
    let performance = PerformanceMetrics {
        avg_response_time_minutes: 45.0,
        ..flat_performance()
    };

    let recommendations = recommend_for(
        ParticipantRole::Contractor,
        ScoreTier::BelowAverage,
        &behavior,
        &performance,
    );

    assert_eq!(
        categories(&recommendations),
        vec![
            "Punctuality",
            "Time Management",
            "Communication",
            "Service Quality"
        ]
    );
    let priorities: Vec<RecommendationPriority> = recommendations
        .iter()
        .map(|recommendation| recommendation.priority)
        .collect();
    assert_eq!(
        priorities,
        vec![
            RecommendationPriority::High,
            RecommendationPriority::Medium,
            RecommendationPriority::Medium,
            RecommendationPriority::Medium,
        ]
    );
    assert_eq!(recommendations[2].title, "Faster Response Time");
}

#[test]
fn targeted_advice_requires_a_struggling_tier() {
    let behavior = BehaviorMetrics::default().with(ContractorBehavior::LateArrival, 4);
    let performance = PerformanceMetrics {
        avg_response_time_minutes: 120.0,
        ..flat_performance()
    };

    let recommendations = recommend_for(
        ParticipantRole::Contractor,
        ScoreTier::Average,
        &behavior,
        &performance,
    );

    assert_eq!(categories(&recommendations), vec!["Service Quality"]);
}

#[test]
fn customer_behavior_keys_do_not_leak_into_contractor_rules() {
    let behavior = BehaviorMetrics::default().with(CustomerBehavior::NoShow, 3);

    let recommendations = recommend_for(
        ParticipantRole::Contractor,
        ScoreTier::Poor,
        &behavior,
        &flat_performance(),
    );

    assert_eq!(
        categories(&recommendations),
        vec!["Punctuality", "Service Quality"]
    );
}

#[test]
fn never_exceeds_the_cap() {
    let behavior: BehaviorMetrics = [
        ("noShow", 5),
        ("lastMinuteCancellation", 5),
        ("lateArrival", 5),
    ]
    .into_iter()
    .collect();
    let performance = PerformanceMetrics {
        avg_response_time_minutes: 500.0,
        ..flat_performance()
    };

    for role in ParticipantRole::ordered() {
        for tier in ScoreTier::ordered() {
            let recommendations = recommend_for(role, tier, &behavior, &performance);
            assert!(recommendations.len() <= MAX_RECOMMENDATIONS);
            assert_eq!(recommendations.is_empty(), tier == ScoreTier::Excellent);
        }
    }
}
