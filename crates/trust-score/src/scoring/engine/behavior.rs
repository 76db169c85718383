//! Behavioral ledger: per-role point tables applied to occurrence counts.

use super::super::domain::{
    BehaviorEffect, BehaviorKind, BehaviorMetrics, ContractorBehavior, CustomerBehavior,
    InvalidInputError, ParticipantRole,
};
use super::super::views::{BehaviorImpact, BehavioralBreakdown};

pub const BEHAVIORAL_MIN: i64 = -20;
pub const BEHAVIORAL_MAX: i64 = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BehavioralTally {
    pub score: i16,
    pub breakdown: BehavioralBreakdown,
}

pub fn tally_behavior(
    metrics: &BehaviorMetrics,
    role: ParticipantRole,
) -> Result<BehavioralTally, InvalidInputError> {
    match role {
        ParticipantRole::Customer => tally_table::<CustomerBehavior>(metrics),
        ParticipantRole::Contractor => tally_table::<ContractorBehavior>(metrics),
    }
}

fn tally_table<K: BehaviorKind>(
    metrics: &BehaviorMetrics,
) -> Result<BehavioralTally, InvalidInputError> {
    let mut breakdown = BehavioralBreakdown::default();

    for &behavior in K::ALL {
        let count = metrics.count_of(behavior);
        if count < 0 {
            return Err(InvalidInputError::NegativeBehaviorCount {
                behavior: behavior.key(),
                count,
            });
        }
        if count == 0 {
            continue;
        }

        let impact = behavior.points().saturating_mul(count);
        breakdown.total_impact = breakdown.total_impact.saturating_add(impact);

        let entry = BehaviorImpact {
            behavior: behavior.key(),
            count,
            impact,
        };
        match behavior.effect() {
            BehaviorEffect::Penalty => breakdown.penalties.push(entry),
            BehaviorEffect::Bonus => breakdown.bonuses.push(entry),
        }
    }

    let score = breakdown.total_impact.clamp(BEHAVIORAL_MIN, BEHAVIORAL_MAX) as i16;
    Ok(BehavioralTally { score, breakdown })
}
