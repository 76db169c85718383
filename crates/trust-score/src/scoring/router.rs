use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;
use tracing::warn;

use super::cache::ScoreCache;
use super::domain::{ScoreRequest, ScoreTier};
use super::service::{ScoreServiceError, TrustScoreService};
use super::views::TierView;

/// Router builder exposing the scoring endpoints.
pub fn score_router<C>(service: Arc<TrustScoreService<C>>) -> Router
where
    C: ScoreCache + 'static,
{
    Router::new()
        .route("/api/v1/scores", post(score_handler::<C>))
        .route("/api/v1/scores/tiers", get(tiers_handler))
        .with_state(service)
}

pub(crate) async fn score_handler<C>(
    State(service): State<Arc<TrustScoreService<C>>>,
    axum::Json(request): axum::Json<ScoreRequest>,
) -> Response
where
    C: ScoreCache + 'static,
{
    match service.score(&request) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(ScoreServiceError::InvalidInput(error)) => {
            warn!(role = request.role.label(), %error, "rejected score request");
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn tiers_handler() -> axum::Json<Vec<TierView>> {
    axum::Json(ScoreTier::ordered().into_iter().map(TierView::from).collect())
}
