//! Persisted-entity value types. Field sets are grounded on the original
//! platform's relational schema (`original_source/backend/models.py`),
//! flattened to plain structs with id-only references rather than ORM
//! relations, per `SPEC_FULL.md` §3's `[SUPPLEMENT]` note.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedInterview {
    pub id: String,
    pub user_id: String,
    pub resume_id: Option<String>,
    pub interview_type: String,
    pub status: InterviewStatus,
    pub difficulty: String,
    pub total_questions: u32,
    pub answered_questions: u32,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub duration_minutes: Option<f64>,
    pub overall_score: Option<f64>,
    pub content_score: Option<f64>,
    pub clarity_score: Option<f64>,
    pub fluency_score: Option<f64>,
    pub confidence_score: Option<f64>,
    pub emotion_score: Option<f64>,
    pub weak_areas: Vec<String>,
    pub strong_areas: Vec<String>,
    pub feedback: Option<String>,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedResponse {
    pub id: String,
    pub interview_id: String,
    pub question_id: String,
    pub text_response: String,
    pub audio_ref: Option<String>,
    pub video_ref: Option<String>,
    pub content_score: f64,
    pub relevance_score: f64,
    pub clarity_score: Option<f64>,
    pub fluency_score: Option<f64>,
    pub confidence_score: Option<f64>,
    pub response_time_seconds: Option<f64>,
    pub thinking_time_seconds: Option<f64>,
    pub feedback: String,
    pub improvement_suggestions: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceMetric {
    pub user_id: String,
    pub total_interviews: u32,
    pub average_score: f64,
    pub improvement_rate: f64,
    pub general_avg_score: f64,
    pub technical_avg_score: f64,
    pub hr_avg_score: f64,
    pub communication_score: f64,
    pub technical_knowledge_score: f64,
    pub problem_solving_score: f64,
    pub confidence_score: f64,
    pub skill_gaps: Vec<String>,
    pub learning_path: Vec<String>,
    pub next_focus_areas: Vec<String>,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdaptiveProfile {
    pub user_id: String,
    pub learning_pace: String,
    pub preferred_difficulty: String,
    pub strong_topics: Vec<String>,
    pub weak_topics: Vec<String>,
    pub avg_response_time: f64,
    pub consistency_score: f64,
    pub stress_indicators: Vec<String>,
    pub question_difficulty_multiplier: f64,
    pub focus_areas: Vec<String>,
    pub recommended_practice: Vec<String>,
    pub updated_at: DateTime<Utc>,
}
