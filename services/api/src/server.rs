use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryScoreCache};
use crate::routes::with_score_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;
use trust_score::config::AppConfig;
use trust_score::error::AppError;
use trust_score::scoring::TrustScoreService;
use trust_score::telemetry::{self, LogTarget};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry, LogTarget::Stdout)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let cache = Arc::new(InMemoryScoreCache::default());
    let score_service = Arc::new(TrustScoreService::new(cache, config.scoring.clone()));

    let app = with_score_routes(score_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        recency_decay = config.scoring.recency_decay,
        "trust score service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
