//! ScyllaDB-backed `AdaptiveProfileStore`, one row per user. This is the
//! table `interview-agent::core::start` reads through `HistoryReader` to
//! recommend difficulty and focus/avoid topics.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use interview_core::{AdaptiveProfile, AdaptiveProfileStore, CoreError, Result};

use crate::client::ScyllaClient;
use crate::error::PersistenceError;

fn json(list: &[String]) -> std::result::Result<String, PersistenceError> {
    Ok(serde_json::to_string(list)?)
}

fn from_json(s: &str) -> Vec<String> {
    serde_json::from_str(s).unwrap_or_default()
}

#[derive(Clone)]
pub struct ScyllaAdaptiveProfileStore {
    client: ScyllaClient,
}

impl ScyllaAdaptiveProfileStore {
    pub fn new(client: ScyllaClient) -> Self {
        Self { client }
    }

    fn row_to_profile(&self, row: scylla::frame::response::result::Row) -> std::result::Result<AdaptiveProfile, PersistenceError> {
        let (
            user_id,
            learning_pace,
            preferred_difficulty,
            strong_topics_json,
            weak_topics_json,
            avg_response_time,
            consistency_score,
            stress_indicators_json,
            question_difficulty_multiplier,
            focus_areas_json,
            recommended_practice_json,
            updated_at,
        ): (String, String, String, String, String, f64, f64, String, f64, String, String, i64) =
            row.into_typed().map_err(|e| PersistenceError::Decode(e.to_string()))?;

        Ok(AdaptiveProfile {
            user_id,
            learning_pace,
            preferred_difficulty,
            strong_topics: from_json(&strong_topics_json),
            weak_topics: from_json(&weak_topics_json),
            avg_response_time,
            consistency_score,
            stress_indicators: from_json(&stress_indicators_json),
            question_difficulty_multiplier,
            focus_areas: from_json(&focus_areas_json),
            recommended_practice: from_json(&recommended_practice_json),
            updated_at: DateTime::from_timestamp_millis(updated_at).unwrap_or_else(Utc::now),
        })
    }
}

#[async_trait]
impl AdaptiveProfileStore for ScyllaAdaptiveProfileStore {
    async fn upsert(&self, profile: &AdaptiveProfile) -> Result<()> {
        let query = format!(
            "INSERT INTO {}.adaptive_profiles (
                user_id, learning_pace, preferred_difficulty, strong_topics_json,
                weak_topics_json, avg_response_time, consistency_score,
                stress_indicators_json, question_difficulty_multiplier,
                focus_areas_json, recommended_practice_json, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            self.client.keyspace()
        );

        let strong_topics_json = json(&profile.strong_topics).map_err(CoreError::from)?;
        let weak_topics_json = json(&profile.weak_topics).map_err(CoreError::from)?;
        let stress_indicators_json = json(&profile.stress_indicators).map_err(CoreError::from)?;
        let focus_areas_json = json(&profile.focus_areas).map_err(CoreError::from)?;
        let recommended_practice_json = json(&profile.recommended_practice).map_err(CoreError::from)?;

        self.client
            .session()
            .query_unpaged(
                query,
                (
                    &profile.user_id,
                    &profile.learning_pace,
                    &profile.preferred_difficulty,
                    strong_topics_json,
                    weak_topics_json,
                    profile.avg_response_time,
                    profile.consistency_score,
                    stress_indicators_json,
                    profile.question_difficulty_multiplier,
                    focus_areas_json,
                    recommended_practice_json,
                    profile.updated_at.timestamp_millis(),
                ),
            )
            .await
            .map_err(PersistenceError::from)
            .map_err(CoreError::from)?;

        Ok(())
    }

    async fn get(&self, user_id: &str) -> Result<Option<AdaptiveProfile>> {
        let query = format!(
            "SELECT user_id, learning_pace, preferred_difficulty, strong_topics_json,
                    weak_topics_json, avg_response_time, consistency_score,
                    stress_indicators_json, question_difficulty_multiplier,
                    focus_areas_json, recommended_practice_json, updated_at
             FROM {}.adaptive_profiles WHERE user_id = ?",
            self.client.keyspace()
        );

        let result = self
            .client
            .session()
            .query_unpaged(query, (user_id,))
            .await
            .map_err(PersistenceError::from)
            .map_err(CoreError::from)?;

        if let Some(rows) = result.rows {
            if let Some(row) = rows.into_iter().next() {
                return Ok(Some(self.row_to_profile(row).map_err(CoreError::from)?));
            }
        }
        Ok(None)
    }
}
