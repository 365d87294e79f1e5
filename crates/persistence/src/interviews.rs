//! ScyllaDB-backed `InterviewStore`. Grounded on
//! `crates/persistence/src/appointments.rs::ScyllaAppointmentStore` (query
//! construction, row decoding into a plain struct) with list/map fields
//! stored as JSON text columns, matching the original schema's JSON
//! columns per `SPEC_FULL.md` §3.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use interview_core::persisted::InterviewStatus;
use interview_core::{CoreError, InterviewStore, PersistedInterview, Result};

use crate::client::ScyllaClient;
use crate::error::PersistenceError;

fn status_as_str(status: InterviewStatus) -> &'static str {
    match status {
        InterviewStatus::Pending => "pending",
        InterviewStatus::InProgress => "in_progress",
        InterviewStatus::Completed => "completed",
        InterviewStatus::Cancelled => "cancelled",
    }
}

fn status_from_str(s: &str) -> InterviewStatus {
    match s {
        "in_progress" => InterviewStatus::InProgress,
        "completed" => InterviewStatus::Completed,
        "cancelled" => InterviewStatus::Cancelled,
        _ => InterviewStatus::Pending,
    }
}

fn millis(ts: Option<DateTime<Utc>>) -> Option<i64> {
    ts.map(|t| t.timestamp_millis())
}

fn from_millis(ms: Option<i64>) -> Option<DateTime<Utc>> {
    ms.and_then(|v| DateTime::from_timestamp_millis(v))
}

fn json(list: &[String]) -> Result<String, PersistenceError> {
    Ok(serde_json::to_string(list)?)
}

fn from_json(s: &str) -> Vec<String> {
    serde_json::from_str(s).unwrap_or_default()
}

#[derive(Clone)]
pub struct ScyllaInterviewStore {
    client: ScyllaClient,
}

impl ScyllaInterviewStore {
    pub fn new(client: ScyllaClient) -> Self {
        Self { client }
    }

    fn row_to_interview(&self, row: scylla::frame::response::result::Row) -> std::result::Result<PersistedInterview, PersistenceError> {
        let (
            id,
            user_id,
            resume_id,
            interview_type,
            status,
            difficulty,
            total_questions,
            answered_questions,
            scheduled_at,
            started_at,
            completed_at,
            duration_minutes,
            overall_score,
            content_score,
            clarity_score,
            fluency_score,
            confidence_score,
            emotion_score,
            weak_areas_json,
            strong_areas_json,
            feedback,
            recommendations_json,
        ): (
            String,
            String,
            Option<String>,
            String,
            String,
            String,
            i32,
            i32,
            Option<i64>,
            Option<i64>,
            Option<i64>,
            Option<f64>,
            Option<f64>,
            Option<f64>,
            Option<f64>,
            Option<f64>,
            Option<f64>,
            Option<f64>,
            String,
            String,
            Option<String>,
            String,
        ) = row
            .into_typed()
            .map_err(|e| PersistenceError::Decode(e.to_string()))?;

        Ok(PersistedInterview {
            id,
            user_id,
            resume_id,
            interview_type,
            status: status_from_str(&status),
            difficulty,
            total_questions: total_questions as u32,
            answered_questions: answered_questions as u32,
            scheduled_at: from_millis(scheduled_at),
            started_at: from_millis(started_at),
            completed_at: from_millis(completed_at),
            duration_minutes,
            overall_score,
            content_score,
            clarity_score,
            fluency_score,
            confidence_score,
            emotion_score,
            weak_areas: from_json(&weak_areas_json),
            strong_areas: from_json(&strong_areas_json),
            feedback,
            recommendations: from_json(&recommendations_json),
        })
    }
}

#[async_trait]
impl InterviewStore for ScyllaInterviewStore {
    async fn upsert(&self, interview: &PersistedInterview) -> Result<()> {
        let query = format!(
            "INSERT INTO {}.interviews (
                id, user_id, resume_id, interview_type, status, difficulty,
                total_questions, answered_questions, scheduled_at, started_at,
                completed_at, duration_minutes, overall_score, content_score,
                clarity_score, fluency_score, confidence_score, emotion_score,
                weak_areas_json, strong_areas_json, feedback, recommendations_json
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            self.client.keyspace()
        );

        let weak_areas_json = json(&interview.weak_areas).map_err(CoreError::from)?;
        let strong_areas_json = json(&interview.strong_areas).map_err(CoreError::from)?;
        let recommendations_json = json(&interview.recommendations).map_err(CoreError::from)?;

        self.client
            .session()
            .query_unpaged(
                query,
                (
                    &interview.id,
                    &interview.user_id,
                    &interview.resume_id,
                    &interview.interview_type,
                    status_as_str(interview.status),
                    &interview.difficulty,
                    interview.total_questions as i32,
                    interview.answered_questions as i32,
                    millis(interview.scheduled_at),
                    millis(interview.started_at),
                    millis(interview.completed_at),
                    interview.duration_minutes,
                    interview.overall_score,
                    interview.content_score,
                    interview.clarity_score,
                    interview.fluency_score,
                    interview.confidence_score,
                    interview.emotion_score,
                    weak_areas_json,
                    strong_areas_json,
                    &interview.feedback,
                    recommendations_json,
                ),
            )
            .await
            .map_err(PersistenceError::from)
            .map_err(CoreError::from)?;

        tracing::info!(interview_id = %interview.id, "interview upserted");
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<PersistedInterview>> {
        let query = format!(
            "SELECT id, user_id, resume_id, interview_type, status, difficulty,
                    total_questions, answered_questions, scheduled_at, started_at,
                    completed_at, duration_minutes, overall_score, content_score,
                    clarity_score, fluency_score, confidence_score, emotion_score,
                    weak_areas_json, strong_areas_json, feedback, recommendations_json
             FROM {}.interviews WHERE id = ?",
            self.client.keyspace()
        );

        let result = self
            .client
            .session()
            .query_unpaged(query, (id,))
            .await
            .map_err(PersistenceError::from)
            .map_err(CoreError::from)?;

        if let Some(rows) = result.rows {
            if let Some(row) = rows.into_iter().next() {
                return Ok(Some(self.row_to_interview(row).map_err(CoreError::from)?));
            }
        }
        Ok(None)
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<PersistedInterview>> {
        let query = format!(
            "SELECT id, user_id, resume_id, interview_type, status, difficulty,
                    total_questions, answered_questions, scheduled_at, started_at,
                    completed_at, duration_minutes, overall_score, content_score,
                    clarity_score, fluency_score, confidence_score, emotion_score,
                    weak_areas_json, strong_areas_json, feedback, recommendations_json
             FROM {}.interviews WHERE user_id = ? ALLOW FILTERING",
            self.client.keyspace()
        );

        let result = self
            .client
            .session()
            .query_unpaged(query, (user_id,))
            .await
            .map_err(PersistenceError::from)
            .map_err(CoreError::from)?;

        let mut interviews = Vec::new();
        if let Some(rows) = result.rows {
            for row in rows {
                interviews.push(self.row_to_interview(row).map_err(CoreError::from)?);
            }
        }
        Ok(interviews)
    }
}
