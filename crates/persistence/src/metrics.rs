//! ScyllaDB-backed `PerformanceMetricStore`, one row per user.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use interview_core::{CoreError, PerformanceMetric, PerformanceMetricStore, Result};

use crate::client::ScyllaClient;
use crate::error::PersistenceError;

fn json(list: &[String]) -> std::result::Result<String, PersistenceError> {
    Ok(serde_json::to_string(list)?)
}

fn from_json(s: &str) -> Vec<String> {
    serde_json::from_str(s).unwrap_or_default()
}

#[derive(Clone)]
pub struct ScyllaPerformanceMetricStore {
    client: ScyllaClient,
}

impl ScyllaPerformanceMetricStore {
    pub fn new(client: ScyllaClient) -> Self {
        Self { client }
    }

    fn row_to_metric(&self, row: scylla::frame::response::result::Row) -> std::result::Result<PerformanceMetric, PersistenceError> {
        let (
            user_id,
            total_interviews,
            average_score,
            improvement_rate,
            general_avg_score,
            technical_avg_score,
            hr_avg_score,
            communication_score,
            technical_knowledge_score,
            problem_solving_score,
            confidence_score,
            skill_gaps_json,
            learning_path_json,
            next_focus_areas_json,
            last_updated,
        ): (String, i32, f64, f64, f64, f64, f64, f64, f64, f64, f64, String, String, String, i64) =
            row.into_typed().map_err(|e| PersistenceError::Decode(e.to_string()))?;

        Ok(PerformanceMetric {
            user_id,
            total_interviews: total_interviews as u32,
            average_score,
            improvement_rate,
            general_avg_score,
            technical_avg_score,
            hr_avg_score,
            communication_score,
            technical_knowledge_score,
            problem_solving_score,
            confidence_score,
            skill_gaps: from_json(&skill_gaps_json),
            learning_path: from_json(&learning_path_json),
            next_focus_areas: from_json(&next_focus_areas_json),
            last_updated: DateTime::from_timestamp_millis(last_updated).unwrap_or_else(Utc::now),
        })
    }
}

#[async_trait]
impl PerformanceMetricStore for ScyllaPerformanceMetricStore {
    async fn upsert(&self, metric: &PerformanceMetric) -> Result<()> {
        let query = format!(
            "INSERT INTO {}.performance_metrics (
                user_id, total_interviews, average_score, improvement_rate,
                general_avg_score, technical_avg_score, hr_avg_score,
                communication_score, technical_knowledge_score, problem_solving_score,
                confidence_score, skill_gaps_json, learning_path_json,
                next_focus_areas_json, last_updated
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            self.client.keyspace()
        );

        let skill_gaps_json = json(&metric.skill_gaps).map_err(CoreError::from)?;
        let learning_path_json = json(&metric.learning_path).map_err(CoreError::from)?;
        let next_focus_areas_json = json(&metric.next_focus_areas).map_err(CoreError::from)?;

        self.client
            .session()
            .query_unpaged(
                query,
                (
                    &metric.user_id,
                    metric.total_interviews as i32,
                    metric.average_score,
                    metric.improvement_rate,
                    metric.general_avg_score,
                    metric.technical_avg_score,
                    metric.hr_avg_score,
                    metric.communication_score,
                    metric.technical_knowledge_score,
                    metric.problem_solving_score,
                    metric.confidence_score,
                    skill_gaps_json,
                    learning_path_json,
                    next_focus_areas_json,
                    metric.last_updated.timestamp_millis(),
                ),
            )
            .await
            .map_err(PersistenceError::from)
            .map_err(CoreError::from)?;

        Ok(())
    }

    async fn get(&self, user_id: &str) -> Result<Option<PerformanceMetric>> {
        let query = format!(
            "SELECT user_id, total_interviews, average_score, improvement_rate,
                    general_avg_score, technical_avg_score, hr_avg_score,
                    communication_score, technical_knowledge_score, problem_solving_score,
                    confidence_score, skill_gaps_json, learning_path_json,
                    next_focus_areas_json, last_updated
             FROM {}.performance_metrics WHERE user_id = ?",
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
                return Ok(Some(self.row_to_metric(row).map_err(CoreError::from)?));
            }
        }
        Ok(None)
    }
}
