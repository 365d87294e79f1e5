//! Collaborator adapters (`SPEC_FULL.md` §6): the concrete implementations
//! of `Transcriber`/`FaceDetector`/`FaceMesh`/`FaceEmbedder`/`HistoryReader`
//! that `AppState` wires up. Speech-to-text and vision inference are
//! delegated to an external HTTP microservice (configurable URL), the same
//! pattern the teacher uses `reqwest` for health checks — no model
//! inference runs in-process, matching the spec's "no training of ML
//! models" non-goal read broadly as "no in-process model runtime" here.
//! When no endpoint is configured, each adapter degrades to the documented
//! safe default (empty transcript, no detections) rather than failing, so
//! the platform is runnable without a vision/speech sidecar during
//! development.

use std::sync::Arc;

use async_trait::async_trait;

use interview_core::traits::{FaceDetection, HistoryProfile, LandmarkSet};
use interview_core::{
    AdaptiveProfileStore as _, CoreError, Difficulty, FaceDetector, FaceEmbedder, FaceMesh,
    HistoryReader, PerformanceMetricStore as _, Result, Transcriber, TranscriptionResult,
};
use interview_persistence::{ScyllaAdaptiveProfileStore, ScyllaPerformanceMetricStore};

fn unavailable(collaborator: &str, err: impl std::fmt::Display) -> CoreError {
    CoreError::CollaboratorUnavailable { collaborator: collaborator.to_string(), reason: err.to_string() }
}

pub struct HttpTranscriber {
    client: reqwest::Client,
    endpoint: Option<String>,
}

impl HttpTranscriber {
    pub fn new(endpoint: Option<String>) -> Self {
        Self { client: reqwest::Client::new(), endpoint }
    }
}

#[async_trait]
impl Transcriber for HttpTranscriber {
    async fn transcribe(&self, audio: &[u8]) -> Result<TranscriptionResult> {
        let Some(endpoint) = &self.endpoint else {
            return Ok(TranscriptionResult { text: String::new(), duration_seconds: 0.0, backend_name: "none".to_string() });
        };

        let response = self
            .client
            .post(endpoint)
            .header("content-type", "application/octet-stream")
            .body(audio.to_vec())
            .send()
            .await
            .map_err(|e| unavailable("transcriber", e))?;

        response.json::<TranscriptionResult>().await.map_err(|e| unavailable("transcriber", e))
    }
}

pub struct HttpFaceDetector {
    client: reqwest::Client,
    endpoint: Option<String>,
}

impl HttpFaceDetector {
    pub fn new(endpoint: Option<String>) -> Self {
        Self { client: reqwest::Client::new(), endpoint }
    }
}

#[async_trait]
impl FaceDetector for HttpFaceDetector {
    async fn detect(&self, frame: &[u8]) -> Result<Vec<FaceDetection>> {
        let Some(endpoint) = &self.endpoint else {
            return Ok(Vec::new());
        };

        let response = self
            .client
            .post(endpoint)
            .body(frame.to_vec())
            .send()
            .await
            .map_err(|e| unavailable("face_detector", e))?;

        response.json::<Vec<FaceDetection>>().await.map_err(|e| unavailable("face_detector", e))
    }
}

pub struct HttpFaceMesh {
    client: reqwest::Client,
    endpoint: Option<String>,
}

impl HttpFaceMesh {
    pub fn new(endpoint: Option<String>) -> Self {
        Self { client: reqwest::Client::new(), endpoint }
    }
}

#[async_trait]
impl FaceMesh for HttpFaceMesh {
    async fn landmarks(&self, frame: &[u8]) -> Result<Vec<LandmarkSet>> {
        let Some(endpoint) = &self.endpoint else {
            return Ok(Vec::new());
        };

        let response = self
            .client
            .post(endpoint)
            .body(frame.to_vec())
            .send()
            .await
            .map_err(|e| unavailable("face_mesh", e))?;

        response.json::<Vec<LandmarkSet>>().await.map_err(|e| unavailable("face_mesh", e))
    }
}

pub struct HttpFaceEmbedder {
    client: reqwest::Client,
    endpoint: Option<String>,
}

impl HttpFaceEmbedder {
    pub fn new(endpoint: Option<String>) -> Self {
        Self { client: reqwest::Client::new(), endpoint }
    }
}

#[async_trait]
impl FaceEmbedder for HttpFaceEmbedder {
    async fn embed(&self, frame: &[u8]) -> Result<Option<Vec<f32>>> {
        let Some(endpoint) = &self.endpoint else {
            return Ok(None);
        };

        let response = self
            .client
            .post(endpoint)
            .body(frame.to_vec())
            .send()
            .await
            .map_err(|e| unavailable("face_embedder", e))?;

        response.json::<Option<Vec<f32>>>().await.map_err(|e| unavailable("face_embedder", e))
    }
}

fn parse_difficulty(s: &str) -> Difficulty {
    match s {
        "easy" => Difficulty::Easy,
        "hard" => Difficulty::Hard,
        _ => Difficulty::Medium,
    }
}

/// Reads `AdaptiveProfile`/`PerformanceMetric` rows to recommend a starting
/// difficulty and surface focus/avoid topics (`SPEC_FULL.md` §4.7, §6).
pub struct StoreHistoryReader {
    profiles: Arc<ScyllaAdaptiveProfileStore>,
    metrics: Arc<ScyllaPerformanceMetricStore>,
}

impl StoreHistoryReader {
    pub fn new(profiles: Arc<ScyllaAdaptiveProfileStore>, metrics: Arc<ScyllaPerformanceMetricStore>) -> Self {
        Self { profiles, metrics }
    }
}

#[async_trait]
impl HistoryReader for StoreHistoryReader {
    async fn recommend_difficulty(&self, user_id: &str, _interview_type: &str) -> Result<Difficulty> {
        let profile = self.profiles.get(user_id).await?;
        Ok(profile.map(|p| parse_difficulty(&p.preferred_difficulty)).unwrap_or_default())
    }

    async fn load_profile(&self, user_id: &str) -> Result<Option<HistoryProfile>> {
        let Some(profile) = self.profiles.get(user_id).await? else {
            return Ok(None);
        };
        let metric = self.metrics.get(user_id).await?;

        Ok(Some(HistoryProfile {
            weak_topics: profile.weak_topics,
            strong_topics: profile.strong_topics,
            focus_areas: profile.focus_areas,
            average_score: metric.as_ref().map(|m| m.average_score),
            total_interviews: metric.as_ref().map(|m| m.total_interviews).unwrap_or(0),
            improvement_rate: metric.as_ref().map(|m| m.improvement_rate),
        }))
    }
}
