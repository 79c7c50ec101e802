use crate::cli::ServeArgs;
use crate::infra::{
    load_candidates_from_path, AppState, InMemoryCandidateDirectory, InMemoryEvaluationRepository,
};
use crate::routes::with_evaluation_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use candidate_eval::config::AppConfig;
use candidate_eval::error::AppError;
use candidate_eval::telemetry;
use candidate_eval::workflows::evaluations::EvaluationService;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let candidates = InMemoryCandidateDirectory::default();
    if let Some(path) = args.candidates.take() {
        let loaded = load_candidates_from_path(&path, &candidates)?;
        info!(
            loaded,
            total = candidates.len(),
            path = %path.display(),
            "candidate directory preloaded"
        );
    }

    let repository = Arc::new(InMemoryEvaluationRepository::default());
    let evaluation_service = Arc::new(EvaluationService::new(repository, Arc::new(candidates)));

    let app = with_evaluation_routes(evaluation_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "candidate evaluation service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
