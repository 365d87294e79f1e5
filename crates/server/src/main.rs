//! Interview Platform Server Entry Point

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusBuilder;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use interview_config::load_settings;
use interview_persistence::{PersistenceLayer, ScyllaConfig};
use interview_server::{create_router, AppState, HttpFaceDetector, HttpFaceEmbedder, HttpFaceMesh, HttpTranscriber, StoreHistoryReader};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::var("INTERVIEW_CONFIG_PATH").ok().map(PathBuf::from);
    let config = load_settings(config_path.as_deref())?;
    config.validate()?;

    init_tracing(&config);
    tracing::info!(environment = ?config.environment, "starting interview platform server");

    let metrics_handle = PrometheusBuilder::new().install_recorder()?;
    tracing::info!("initialized Prometheus metrics at /metrics");

    let scylla_config = ScyllaConfig {
        hosts: config.persistence.scylla_hosts.clone(),
        keyspace: config.persistence.keyspace.clone(),
        replication_factor: config.persistence.replication_factor,
    };
    let persistence = PersistenceLayer::connect(scylla_config).await?;
    tracing::info!(keyspace = %config.persistence.keyspace, "ScyllaDB persistence initialized");

    let speech_endpoint = std::env::var("INTERVIEW_SPEECH_ENDPOINT").ok();
    let vision_endpoint = std::env::var("INTERVIEW_VISION_ENDPOINT").ok();

    let transcriber = Arc::new(HttpTranscriber::new(speech_endpoint));
    let face_detector = Arc::new(HttpFaceDetector::new(vision_endpoint.clone()));
    let face_mesh = Arc::new(HttpFaceMesh::new(vision_endpoint.clone()));
    let face_embedder = Arc::new(HttpFaceEmbedder::new(vision_endpoint));
    let history = Arc::new(StoreHistoryReader::new(Arc::new(persistence.profiles.clone()), Arc::new(persistence.metrics.clone())));

    let state = AppState::new(config.clone(), persistence, transcriber, face_detector, face_mesh, face_embedder, history, metrics_handle);

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!(%addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    tracing::info!("server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received Ctrl+C, initiating graceful shutdown"),
        _ = terminate => tracing::info!("received SIGTERM, initiating graceful shutdown"),
    }
}

fn init_tracing(config: &interview_config::Settings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("interview_server={},tower_http=debug", config.observability.log_level).into());

    let subscriber = tracing_subscriber::registry().with(env_filter);
    let fmt_layer = if config.observability.json_logs {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };

    subscriber.with(fmt_layer).init();
}
