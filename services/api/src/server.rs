use crate::cli::ServeArgs;
use crate::infra::{load_config, AppState};
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use brickview::dataset::SqliteDataset;
use brickview::error::AppError;
use brickview::telemetry;
use brickview::{analytics_router, AnalyticsService};
use std::path::PathBuf;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs, database: Option<PathBuf>) -> Result<(), AppError> {
    let mut config = load_config(database)?;

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

    let dataset = SqliteDataset::new(config.database.path.clone());
    if !dataset.path().exists() {
        tracing::warn!(
            path = %dataset.path().display(),
            "dataset file not found; analytics requests fail until it is in place"
        );
    }
    let service = Arc::new(AnalyticsService::new(Arc::new(dataset)));

    let app = with_service_routes(analytics_router(service))
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        database = %config.database.path.display(),
        "brickview analytics ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
