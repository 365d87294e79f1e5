//! In-memory implementations of the four store traits, for tests and
//! local development without a ScyllaDB cluster. Grounded on the
//! `RwLock<HashMap<..>>` idiom used throughout the workspace for
//! in-process state (`crates/server/src/session.rs::SessionManager`,
//! `interview-agent::registry::SessionRegistry`) rather than on anything
//! ScyllaDB-specific.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use interview_core::{
    AdaptiveProfile, AdaptiveProfileStore, InterviewStore, PerformanceMetric, PerformanceMetricStore,
    PersistedInterview, PersistedResponse, ResponseStore, Result,
};

#[derive(Default)]
pub struct InMemoryInterviewStore {
    rows: RwLock<HashMap<String, PersistedInterview>>,
}

#[async_trait]
impl InterviewStore for InMemoryInterviewStore {
    async fn upsert(&self, interview: &PersistedInterview) -> Result<()> {
        self.rows.write().insert(interview.id.clone(), interview.clone());
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<PersistedInterview>> {
        Ok(self.rows.read().get(id).cloned())
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<PersistedInterview>> {
        Ok(self.rows.read().values().filter(|i| i.user_id == user_id).cloned().collect())
    }
}

#[derive(Default)]
pub struct InMemoryResponseStore {
    rows: RwLock<HashMap<String, Vec<PersistedResponse>>>,
}

#[async_trait]
impl ResponseStore for InMemoryResponseStore {
    async fn insert(&self, response: &PersistedResponse) -> Result<()> {
        self.rows.write().entry(response.interview_id.clone()).or_default().push(response.clone());
        Ok(())
    }

    async fn list_for_interview(&self, interview_id: &str) -> Result<Vec<PersistedResponse>> {
        Ok(self.rows.read().get(interview_id).cloned().unwrap_or_default())
    }
}

#[derive(Default)]
pub struct InMemoryPerformanceMetricStore {
    rows: RwLock<HashMap<String, PerformanceMetric>>,
}

#[async_trait]
impl PerformanceMetricStore for InMemoryPerformanceMetricStore {
    async fn upsert(&self, metric: &PerformanceMetric) -> Result<()> {
        self.rows.write().insert(metric.user_id.clone(), metric.clone());
        Ok(())
    }

    async fn get(&self, user_id: &str) -> Result<Option<PerformanceMetric>> {
        Ok(self.rows.read().get(user_id).cloned())
    }
}

#[derive(Default)]
pub struct InMemoryAdaptiveProfileStore {
    rows: RwLock<HashMap<String, AdaptiveProfile>>,
}

#[async_trait]
impl AdaptiveProfileStore for InMemoryAdaptiveProfileStore {
    async fn upsert(&self, profile: &AdaptiveProfile) -> Result<()> {
        self.rows.write().insert(profile.user_id.clone(), profile.clone());
        Ok(())
    }

    async fn get(&self, user_id: &str) -> Result<Option<AdaptiveProfile>> {
        Ok(self.rows.read().get(user_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use interview_core::persisted::InterviewStatus;

    fn sample_interview(id: &str, user_id: &str) -> PersistedInterview {
        PersistedInterview {
            id: id.to_string(),
            user_id: user_id.to_string(),
            resume_id: None,
            interview_type: "general".to_string(),
            status: InterviewStatus::Completed,
            difficulty: "medium".to_string(),
            total_questions: 5,
            answered_questions: 5,
            scheduled_at: None,
            started_at: Some(Utc::now()),
            completed_at: Some(Utc::now()),
            duration_minutes: Some(12.0),
            overall_score: Some(78.0),
            content_score: Some(80.0),
            clarity_score: Some(75.0),
            fluency_score: Some(77.0),
            confidence_score: Some(70.0),
            emotion_score: Some(72.0),
            weak_areas: vec!["algorithms".to_string()],
            strong_areas: vec!["communication".to_string()],
            feedback: Some("solid performance".to_string()),
            recommendations: vec!["practice system design".to_string()],
        }
    }

    #[tokio::test]
    async fn upsert_then_get_round_trips() {
        let store = InMemoryInterviewStore::default();
        let interview = sample_interview("i1", "u1");
        store.upsert(&interview).await.unwrap();
        let fetched = store.get("i1").await.unwrap().unwrap();
        assert_eq!(fetched.overall_score, Some(78.0));
    }

    #[tokio::test]
    async fn list_for_user_filters_by_owner() {
        let store = InMemoryInterviewStore::default();
        store.upsert(&sample_interview("i1", "u1")).await.unwrap();
        store.upsert(&sample_interview("i2", "u2")).await.unwrap();
        let mine = store.list_for_user("u1").await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].id, "i1");
    }
}
