//! Performance evaluation: independent threshold rules over operational metrics.

use super::super::domain::{InvalidInputError, ParticipantRole, PerformanceMetrics};
use super::super::views::{PerformanceBreakdown, PerformanceComponent, PerformanceFactor};

pub const PERFORMANCE_MIN: i16 = -15;
pub const PERFORMANCE_MAX: i16 = 15;

#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceOutcome {
    pub score: i16,
    pub breakdown: PerformanceBreakdown,
}

pub fn evaluate_performance(
    metrics: &PerformanceMetrics,
    role: ParticipantRole,
) -> Result<PerformanceOutcome, InvalidInputError> {
    metrics.validate()?;

    let mut components = Vec::new();

    let completion = metrics.completion_rate;
    if completion >= 0.95 {
        components.push(component(
            PerformanceFactor::CompletionRate,
            10,
            format!("completion rate {:.0}% at or above 95%", completion * 100.0),
        ));
    } else if completion >= 0.90 {
        components.push(component(
            PerformanceFactor::CompletionRate,
            5,
            format!("completion rate {:.0}% at or above 90%", completion * 100.0),
        ));
    } else if completion < 0.80 {
        components.push(component(
            PerformanceFactor::CompletionRate,
            -10,
            format!("completion rate {:.0}% below 80%", completion * 100.0),
        ));
    }

    let cancellation = metrics.cancellation_rate;
    if cancellation > 0.10 {
        components.push(component(
            PerformanceFactor::CancellationRate,
            -15,
            format!("cancellation rate {:.0}% above 10%", cancellation * 100.0),
        ));
    } else if cancellation > 0.05 {
        components.push(component(
            PerformanceFactor::CancellationRate,
            -8,
            format!("cancellation rate {:.0}% above 5%", cancellation * 100.0),
        ));
    }

    // Response time only reflects on providers.
    if role == ParticipantRole::Contractor {
        let minutes = metrics.avg_response_time_minutes;
        if minutes < 5.0 {
            components.push(component(
                PerformanceFactor::ResponseTime,
                5,
                format!("average response {minutes:.1} min under 5 min"),
            ));
        } else if minutes < 15.0 {
            components.push(component(
                PerformanceFactor::ResponseTime,
                2,
                format!("average response {minutes:.1} min under 15 min"),
            ));
        } else if minutes > 60.0 {
            components.push(component(
                PerformanceFactor::ResponseTime,
                -5,
                format!("average response {minutes:.1} min over an hour"),
            ));
        }
    }

    if metrics.repeat_rate > 0.30 {
        components.push(component(
            PerformanceFactor::RepeatBusiness,
            5,
            format!(
                "repeat business {:.0}% above 30%",
                metrics.repeat_rate * 100.0
            ),
        ));
    }

    let raw: i16 = components.iter().map(|component| component.points).sum();
    let score = raw.clamp(PERFORMANCE_MIN, PERFORMANCE_MAX);

    Ok(PerformanceOutcome {
        score,
        breakdown: PerformanceBreakdown {
            completion_rate: metrics.completion_rate,
            cancellation_rate: metrics.cancellation_rate,
            avg_response_time_minutes: metrics.avg_response_time_minutes,
            repeat_rate: metrics.repeat_rate,
            total_jobs: metrics.total_jobs,
            components,
        },
    })
}

fn component(factor: PerformanceFactor, points: i16, notes: String) -> PerformanceComponent {
    PerformanceComponent {
        factor,
        points,
        notes,
    }
}
