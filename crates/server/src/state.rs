//! Application state (`SPEC_FULL.md` §5, §6), grounded on
//! `crates/server/src/state.rs::AppState`: one `Clone`-able struct bundling
//! the registries, the store, and the collaborator trait objects behind
//! `Arc`, built once at startup and threaded through every handler via
//! axum's `State` extractor.

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

use interview_config::Settings;
use interview_core::{FaceDetector, FaceEmbedder, FaceMesh, HistoryReader, ProctorSessionState, SessionContext, Transcriber};
use interview_persistence::{PersistenceLayer, ScyllaResponseStore};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Settings>,
    pub interviews: Arc<interview_agent::SessionRegistry<SessionContext>>,
    pub proctor_sessions: Arc<interview_agent::SessionRegistry<ProctorSessionState>>,
    pub persistence: Arc<PersistenceLayer>,
    pub responses: Arc<ScyllaResponseStore>,
    pub transcriber: Arc<dyn Transcriber>,
    pub face_detector: Arc<dyn FaceDetector>,
    pub face_mesh: Arc<dyn FaceMesh>,
    pub face_embedder: Arc<dyn FaceEmbedder>,
    pub history: Arc<dyn HistoryReader>,
    pub metrics_handle: Arc<PrometheusHandle>,
}

impl AppState {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        config: Settings,
        persistence: PersistenceLayer,
        transcriber: Arc<dyn Transcriber>,
        face_detector: Arc<dyn FaceDetector>,
        face_mesh: Arc<dyn FaceMesh>,
        face_embedder: Arc<dyn FaceEmbedder>,
        history: Arc<dyn HistoryReader>,
        metrics_handle: PrometheusHandle,
    ) -> Self {
        let responses = Arc::new(persistence.responses.clone());
        Self {
            interviews: Arc::new(interview_agent::SessionRegistry::new(config.server.max_interview_sessions)),
            proctor_sessions: Arc::new(interview_agent::SessionRegistry::new(config.server.max_proctor_sessions)),
            config: Arc::new(config),
            persistence: Arc::new(persistence),
            responses,
            transcriber,
            face_detector,
            face_mesh,
            face_embedder,
            history,
            metrics_handle: Arc::new(metrics_handle),
        }
    }
}
