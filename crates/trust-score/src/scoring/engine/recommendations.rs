//! Improvement recommendations as an ordered rule list.
//!
//! Rules are evaluated top to bottom and each contributes at most one entry. Emission order is the
//! priority order; the list is cut at [`MAX_RECOMMENDATIONS`] without re-sorting.

use super::super::domain::{
    BehaviorMetrics, ContractorBehavior, CustomerBehavior, ParticipantRole, PerformanceMetrics,
    ScoreTier,
};
use super::super::views::{Recommendation, RecommendationPriority};

pub const MAX_RECOMMENDATIONS: usize = 5;

/// Average response time, in minutes, above which contractors are nudged to reply faster.
const SLOW_RESPONSE_MINUTES: f64 = 30.0;

pub struct RecommendationContext<'a> {
    pub role: ParticipantRole,
    pub tier: ScoreTier,
    pub behavior: &'a BehaviorMetrics,
    pub performance: &'a PerformanceMetrics,
}

pub fn recommend(context: &RecommendationContext<'_>) -> Vec<Recommendation> {
    RULES
        .iter()
        .filter(|rule| (rule.applies)(context))
        .map(|rule| rule.template.for_role(context.role))
        .take(MAX_RECOMMENDATIONS)
        .collect()
}

struct RecommendationRule {
    applies: fn(&RecommendationContext<'_>) -> bool,
    template: Template,
}

enum Template {
    Fixed(Recommendation),
    PerRole {
        customer: Recommendation,
        contractor: Recommendation,
    },
}

impl Template {
    fn for_role(&self, role: ParticipantRole) -> Recommendation {
        match self {
            Template::Fixed(recommendation) => recommendation.clone(),
            Template::PerRole {
                customer,
                contractor,
            } => match role {
                ParticipantRole::Customer => customer.clone(),
                ParticipantRole::Contractor => contractor.clone(),
            },
        }
    }
}

static RULES: &[RecommendationRule] = &[
    RecommendationRule {
        applies: struggling_customer,
        template: Template::Fixed(IMPROVE_COMMUNICATION),
    },
    RecommendationRule {
        applies: customer_missed_pickups,
        template: Template::Fixed(BE_AVAILABLE),
    },
    RecommendationRule {
        applies: customer_cancelled_late,
        template: Template::Fixed(PLAN_AHEAD),
    },
    RecommendationRule {
        applies: struggling_contractor,
        template: Template::Fixed(ARRIVE_ON_TIME),
    },
    RecommendationRule {
        applies: contractor_arrived_late,
        template: Template::Fixed(BETTER_TIME_PLANNING),
    },
    RecommendationRule {
        applies: contractor_responds_slowly,
        template: Template::Fixed(FASTER_RESPONSE),
    },
    RecommendationRule {
        applies: below_excellent,
        template: Template::PerRole {
            customer: Recommendation {
                description: "Have items ready early and provide detailed instructions.",
                ..EXCEED_EXPECTATIONS
            },
            contractor: Recommendation {
                description:
                    "Go above and beyond by arriving early and handling items with care.",
                ..EXCEED_EXPECTATIONS
            },
        },
    },
];

fn struggling_customer(context: &RecommendationContext<'_>) -> bool {
    context.role == ParticipantRole::Customer && context.tier.needs_attention()
}

fn customer_missed_pickups(context: &RecommendationContext<'_>) -> bool {
    struggling_customer(context) && context.behavior.count_of(CustomerBehavior::NoShow) > 0
}

fn customer_cancelled_late(context: &RecommendationContext<'_>) -> bool {
    struggling_customer(context)
        && context
            .behavior
            .count_of(CustomerBehavior::LastMinuteCancellation)
            > 0
}

fn struggling_contractor(context: &RecommendationContext<'_>) -> bool {
    context.role == ParticipantRole::Contractor && context.tier.needs_attention()
}

fn contractor_arrived_late(context: &RecommendationContext<'_>) -> bool {
    struggling_contractor(context)
        && context.behavior.count_of(ContractorBehavior::LateArrival) > 0
}

fn contractor_responds_slowly(context: &RecommendationContext<'_>) -> bool {
    struggling_contractor(context)
        && context.performance.avg_response_time_minutes > SLOW_RESPONSE_MINUTES
}

fn below_excellent(context: &RecommendationContext<'_>) -> bool {
    context.tier != ScoreTier::Excellent
}

const IMPROVE_COMMUNICATION: Recommendation = Recommendation {
    category: "Communication",
    title: "Improve Communication",
    description:
        "Respond promptly to contractor messages and provide clear pickup instructions.",
    impact: "Can improve your score by 5-10 points",
    priority: RecommendationPriority::High,
};

const BE_AVAILABLE: Recommendation = Recommendation {
    category: "Reliability",
    title: "Be Available During Pickup",
    description: "Ensure you or someone is available when contractors arrive for pickup.",
    impact: "Can improve your score by 10-15 points",
    priority: RecommendationPriority::High,
};

const PLAN_AHEAD: Recommendation = Recommendation {
    category: "Planning",
    title: "Plan Ahead",
    description: "Avoid last-minute cancellations. Cancel at least 2 hours in advance.",
    impact: "Can improve your score by 8-12 points",
    priority: RecommendationPriority::High,
};

const ARRIVE_ON_TIME: Recommendation = Recommendation {
    category: "Punctuality",
    title: "Arrive On Time",
    description:
        "Aim to arrive within the scheduled time window to improve customer satisfaction.",
    impact: "Can improve your score by 8-12 points",
    priority: RecommendationPriority::High,
};

const BETTER_TIME_PLANNING: Recommendation = Recommendation {
    category: "Time Management",
    title: "Better Time Planning",
    description: "Plan your route and allow extra time for traffic or unexpected delays.",
    impact: "Can improve your score by 5-8 points",
    priority: RecommendationPriority::Medium,
};

const FASTER_RESPONSE: Recommendation = Recommendation {
    category: "Communication",
    title: "Faster Response Time",
    description: "Respond to customer messages within 15 minutes.",
    impact: "Can improve your score by 3-5 points",
    priority: RecommendationPriority::Medium,
};

const EXCEED_EXPECTATIONS: Recommendation = Recommendation {
    category: "Service Quality",
    title: "Exceed Expectations",
    description: "",
    impact: "Can improve your score by 3-8 points",
    priority: RecommendationPriority::Medium,
};
