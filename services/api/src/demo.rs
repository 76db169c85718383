use clap::Args;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing::info;
use trust_score::config::AppConfig;
use trust_score::error::AppError;
use trust_score::imports::RatingHistoryImporter;
use trust_score::scoring::{
    BehaviorMetrics, ContractorBehavior, CustomerBehavior, ParticipantRole, PerformanceMetrics,
    RatingCategory, RatingEvent, ScoreRequest, ScoreResult, TrustScoreEngine,
};
use trust_score::telemetry::{self, LogTarget};

#[derive(Args, Debug, Default)]
pub(crate) struct ScoreArgs {
    /// JSON snapshot with role, ratingEvents, behaviorMetrics and performanceMetrics.
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Ratings CSV export; replaces any rating events in the snapshot.
    #[arg(long)]
    pub(crate) ratings_csv: Option<PathBuf>,
    /// Participant role (customer or contractor). Defaults to the snapshot role, else customer.
    #[arg(long, value_parser = parse_role)]
    pub(crate) role: Option<ParticipantRole>,
    /// Print the full result as JSON instead of a text report.
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Include the behavioral and performance breakdown for each participant.
    #[arg(long)]
    pub(crate) detailed: bool,
}

fn parse_role(raw: &str) -> Result<ParticipantRole, String> {
    ParticipantRole::from_key(raw)
        .ok_or_else(|| format!("unknown role '{raw}', expected customer or contractor"))
}

/// Loads configuration and routes logs to stderr so reports own stdout.
fn command_engine() -> Result<TrustScoreEngine, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry, LogTarget::Stderr)?;
    Ok(TrustScoreEngine::new(config.scoring))
}

pub(crate) fn run_score_report(args: ScoreArgs) -> Result<(), AppError> {
    let engine = command_engine()?;
    let request = load_score_request(&args)?;
    let result = engine.score(&request).map_err(|err| AppError::Scoring(err.into()))?;

    info!(
        role = request.role.label(),
        ratings = request.rating_events.len(),
        total = result.total_score,
        "scored participant"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        render_score_report("Participant", &request, &result, true);
    }

    Ok(())
}

pub(crate) fn load_score_request(args: &ScoreArgs) -> Result<ScoreRequest, AppError> {
    let mut request = match &args.input {
        Some(path) => {
            let reader = BufReader::new(File::open(path)?);
            serde_json::from_reader::<_, ScoreRequest>(reader)?
        }
        None => ScoreRequest::new(ParticipantRole::Customer),
    };

    if let Some(role) = args.role {
        request.role = role;
    }
    if let Some(path) = &args.ratings_csv {
        request.rating_events = RatingHistoryImporter::from_path(path)?;
    }

    Ok(request)
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let engine = command_engine()?;

    println!("Trust score demo");
    for (name, request) in sample_participants() {
        let result = engine
            .score(&request)
            .map_err(|err| AppError::Scoring(err.into()))?;
        println!();
        render_score_report(name, &request, &result, args.detailed);
    }

    Ok(())
}

fn sample_participants() -> Vec<(&'static str, ScoreRequest)> {
    let reliable_customer = ScoreRequest {
        role: ParticipantRole::Customer,
        rating_events: (0..4).map(|index| uniform_rating(index, 5.0)).collect(),
        behavior_metrics: BehaviorMetrics::new()
            .with(CustomerBehavior::OnTimePayment, 4)
            .with(CustomerBehavior::ClearInstructions, 2),
        performance_metrics: PerformanceMetrics {
            completion_rate: 0.97,
            cancellation_rate: 0.02,
            avg_response_time_minutes: 12.0,
            repeat_rate: 0.45,
            total_jobs: 18,
        },
    };

    let late_contractor = ScoreRequest {
        role: ParticipantRole::Contractor,
        rating_events: vec![
            uniform_rating(0, 4.0),
            uniform_rating(1, 3.0).with_category(RatingCategory::Timeliness, 1.0),
            uniform_rating(2, 2.0).with_category(RatingCategory::Timeliness, 1.0),
        ],
        behavior_metrics: BehaviorMetrics::new()
            .with(ContractorBehavior::LateArrival, 3)
            .with(ContractorBehavior::PoorCommunication, 1),
        performance_metrics: PerformanceMetrics {
            completion_rate: 0.82,
            cancellation_rate: 0.08,
            avg_response_time_minutes: 48.0,
            repeat_rate: 0.1,
            total_jobs: 22,
        },
    };

    let new_contractor = ScoreRequest {
        role: ParticipantRole::Contractor,
        rating_events: Vec::new(),
        behavior_metrics: BehaviorMetrics::new(),
        performance_metrics: PerformanceMetrics {
            completion_rate: 0.9,
            cancellation_rate: 0.0,
            avg_response_time_minutes: 9.0,
            repeat_rate: 0.0,
            total_jobs: 3,
        },
    };

    vec![
        ("Reliable customer", reliable_customer),
        ("Contractor running late", late_contractor),
        ("New contractor", new_contractor),
    ]
}

fn uniform_rating(sequence_index: u32, value: f64) -> RatingEvent {
    RatingCategory::ordered()
        .into_iter()
        .fold(RatingEvent::new(sequence_index, value), |event, category| {
            event.with_category(category, value)
        })
}

pub(crate) fn render_score_report(
    name: &str,
    request: &ScoreRequest,
    result: &ScoreResult,
    detailed: bool,
) {
    println!("{} ({})", name, request.role.label());
    println!(
        "Trust score: {} ({}, {})",
        result.total_score,
        result.tier_label(),
        result.tier.description()
    );
    println!(
        "Components: ratings {} | behavior {:+} | performance {:+}",
        result.rating_score, result.behavioral_score, result.performance_score
    );

    match &result.breakdown.rating_breakdown {
        Some(ratings) => {
            println!(
                "Ratings: {} submitted, overall average {:.1}",
                ratings.total_ratings, ratings.overall
            );
            for (category, average) in [
                (RatingCategory::Timeliness, ratings.timeliness),
                (RatingCategory::Communication, ratings.communication),
                (RatingCategory::Professionalism, ratings.professionalism),
                (RatingCategory::Quality, ratings.quality),
            ] {
                println!("  - {}: {:.1}", category.label(), average);
            }
        }
        None => println!("Ratings: none yet (neutral starting score)"),
    }

    if detailed {
        let behavioral = &result.breakdown.behavioral_breakdown;
        if behavioral.penalties.is_empty() && behavioral.bonuses.is_empty() {
            println!("Behavior: no recorded events");
        } else {
            println!("Behavior (net {:+})", behavioral.total_impact);
            for impact in behavioral.penalties.iter().chain(&behavioral.bonuses) {
                println!(
                    "  - {} x{}: {:+}",
                    impact.behavior, impact.count, impact.impact
                );
            }
        }

        let performance = &result.breakdown.performance_breakdown;
        if performance.components.is_empty() {
            println!("Performance: no adjustments");
        } else {
            println!("Performance");
            for component in &performance.components {
                println!("  - {:+}: {}", component.points, component.notes);
            }
        }
    }

    if result.recommendations.is_empty() {
        println!("Recommendations: none");
    } else {
        println!("Recommendations");
        for recommendation in &result.recommendations {
            println!(
                "- [{:?}] {}: {} ({})",
                recommendation.priority,
                recommendation.title,
                recommendation.description,
                recommendation.impact
            );
        }
    }
}
