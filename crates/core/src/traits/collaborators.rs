use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptionResult {
    pub text: String,
    pub duration_seconds: f64,
    pub backend_name: String,
}

/// Converts raw audio bytes to text. One implementation per speech-to-text
/// backend; `backend_name` is threaded through to the evaluation record
/// rather than hidden, per the Open Question decision in `DESIGN.md`.
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, audio: &[u8]) -> Result<TranscriptionResult>;
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FaceDetection {
    /// Relative bounding box: (x, y, width, height), each in [0, 1].
    pub bbox: (f32, f32, f32, f32),
    pub confidence: f32,
}

#[async_trait]
pub trait FaceDetector: Send + Sync {
    async fn detect(&self, frame: &[u8]) -> Result<Vec<FaceDetection>>;
}

/// 2D facial landmark positions (relative to frame size), including iris
/// landmarks, for one detected face.
pub type LandmarkSet = Vec<(f32, f32)>;

#[async_trait]
pub trait FaceMesh: Send + Sync {
    async fn landmarks(&self, frame: &[u8]) -> Result<Vec<LandmarkSet>>;
}

#[async_trait]
pub trait FaceEmbedder: Send + Sync {
    async fn embed(&self, frame: &[u8]) -> Result<Option<Vec<f32>>>;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryProfile {
    pub weak_topics: Vec<String>,
    pub strong_topics: Vec<String>,
    pub focus_areas: Vec<String>,
    pub average_score: Option<f64>,
    pub total_interviews: u32,
    pub improvement_rate: Option<f64>,
}

/// Read-only view over a user's prior performance, backing the adaptive
/// difficulty recommendation and focus/avoid-topic selection in
/// `interview-agent::core::start`.
#[async_trait]
pub trait HistoryReader: Send + Sync {
    async fn recommend_difficulty(
        &self,
        user_id: &str,
        interview_type: &str,
    ) -> Result<crate::domain::Difficulty>;

    async fn load_profile(&self, user_id: &str) -> Result<Option<HistoryProfile>>;
}
