use async_trait::async_trait;

use crate::error::Result;
use crate::persisted::{AdaptiveProfile, PerformanceMetric, PersistedInterview, PersistedResponse};

#[async_trait]
pub trait InterviewStore: Send + Sync {
    async fn upsert(&self, interview: &PersistedInterview) -> Result<()>;
    async fn get(&self, id: &str) -> Result<Option<PersistedInterview>>;
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<PersistedInterview>>;
}

#[async_trait]
pub trait ResponseStore: Send + Sync {
    async fn insert(&self, response: &PersistedResponse) -> Result<()>;
    async fn list_for_interview(&self, interview_id: &str) -> Result<Vec<PersistedResponse>>;
}

#[async_trait]
pub trait PerformanceMetricStore: Send + Sync {
    async fn upsert(&self, metric: &PerformanceMetric) -> Result<()>;
    async fn get(&self, user_id: &str) -> Result<Option<PerformanceMetric>>;
}

#[async_trait]
pub trait AdaptiveProfileStore: Send + Sync {
    async fn upsert(&self, profile: &AdaptiveProfile) -> Result<()>;
    async fn get(&self, user_id: &str) -> Result<Option<AdaptiveProfile>>;
}
