use crate::cli::ServeArgs;
use crate::infra::{default_validation_policy, AppState};
use crate::routes::with_reporting_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use progtrack::config::AppConfig;
use progtrack::error::AppError;
use progtrack::reporting::periods::PeriodCalendar;
use progtrack::telemetry;
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

    let calendar = PeriodCalendar::with_policy(config.reporting.period_policy());
    let validation_policy = Arc::new(default_validation_policy());

    let app = with_reporting_routes(validation_policy)
        .layer(Extension(app_state))
        .layer(Extension(calendar))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "program reporting service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
