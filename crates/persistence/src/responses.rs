//! ScyllaDB-backed `ResponseStore`. Same query/row-decode idiom as
//! `interviews.rs`, partitioned by interview id to match the per-question
//! access pattern (`list_for_interview`).

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use interview_core::{CoreError, PersistedResponse, ResponseStore, Result};

use crate::client::ScyllaClient;
use crate::error::PersistenceError;

fn json(list: &[String]) -> std::result::Result<String, PersistenceError> {
    Ok(serde_json::to_string(list)?)
}

fn from_json(s: &str) -> Vec<String> {
    serde_json::from_str(s).unwrap_or_default()
}

#[derive(Clone)]
pub struct ScyllaResponseStore {
    client: ScyllaClient,
}

impl ScyllaResponseStore {
    pub fn new(client: ScyllaClient) -> Self {
        Self { client }
    }

    fn row_to_response(&self, row: scylla::frame::response::result::Row) -> std::result::Result<PersistedResponse, PersistenceError> {
        let (
            interview_id,
            id,
            question_id,
            text_response,
            audio_ref,
            video_ref,
            content_score,
            relevance_score,
            clarity_score,
            fluency_score,
            confidence_score,
            response_time_seconds,
            thinking_time_seconds,
            feedback,
            improvement_suggestions_json,
            created_at,
        ): (
            String,
            String,
            String,
            String,
            Option<String>,
            Option<String>,
            f64,
            f64,
            Option<f64>,
            Option<f64>,
            Option<f64>,
            Option<f64>,
            Option<f64>,
            String,
            String,
            i64,
        ) = row
            .into_typed()
            .map_err(|e| PersistenceError::Decode(e.to_string()))?;

        Ok(PersistedResponse {
            id,
            interview_id,
            question_id,
            text_response,
            audio_ref,
            video_ref,
            content_score,
            relevance_score,
            clarity_score,
            fluency_score,
            confidence_score,
            response_time_seconds,
            thinking_time_seconds,
            feedback,
            improvement_suggestions: from_json(&improvement_suggestions_json),
            created_at: DateTime::from_timestamp_millis(created_at).unwrap_or_else(Utc::now),
        })
    }
}

#[async_trait]
impl ResponseStore for ScyllaResponseStore {
    async fn insert(&self, response: &PersistedResponse) -> Result<()> {
        let query = format!(
            "INSERT INTO {}.responses (
                interview_id, id, question_id, text_response, audio_ref, video_ref,
                content_score, relevance_score, clarity_score, fluency_score,
                confidence_score, response_time_seconds, thinking_time_seconds,
                feedback, improvement_suggestions_json, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            self.client.keyspace()
        );

        let suggestions_json = json(&response.improvement_suggestions).map_err(CoreError::from)?;

        self.client
            .session()
            .query_unpaged(
                query,
                (
                    &response.interview_id,
                    &response.id,
                    &response.question_id,
                    &response.text_response,
                    &response.audio_ref,
                    &response.video_ref,
                    response.content_score,
                    response.relevance_score,
                    response.clarity_score,
                    response.fluency_score,
                    response.confidence_score,
                    response.response_time_seconds,
                    response.thinking_time_seconds,
                    &response.feedback,
                    suggestions_json,
                    response.created_at.timestamp_millis(),
                ),
            )
            .await
            .map_err(PersistenceError::from)
            .map_err(CoreError::from)?;

        tracing::info!(interview_id = %response.interview_id, question_id = %response.question_id, "response persisted");
        Ok(())
    }

    async fn list_for_interview(&self, interview_id: &str) -> Result<Vec<PersistedResponse>> {
        let query = format!(
            "SELECT interview_id, id, question_id, text_response, audio_ref, video_ref,
                    content_score, relevance_score, clarity_score, fluency_score,
                    confidence_score, response_time_seconds, thinking_time_seconds,
                    feedback, improvement_suggestions_json, created_at
             FROM {}.responses WHERE interview_id = ?",
            self.client.keyspace()
        );

        let result = self
            .client
            .session()
            .query_unpaged(query, (interview_id,))
            .await
            .map_err(PersistenceError::from)
            .map_err(CoreError::from)?;

        let mut responses = Vec::new();
        if let Some(rows) = result.rows {
            for row in rows {
                responses.push(self.row_to_response(row).map_err(CoreError::from)?);
            }
        }
        Ok(responses)
    }
}
