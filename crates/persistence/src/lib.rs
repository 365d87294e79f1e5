//! Persistence layer (`SPEC_FULL.md` §3 and §7), grounded on
//! `crates/persistence` (`voice-agent-persistence`) for the
//! client/schema/store-per-entity shape. Each store trait is defined in
//! `interview-core::traits::stores` and has two implementations here: a
//! ScyllaDB-backed one for production and an in-memory one for tests and
//! local development.

pub mod client;
pub mod error;
pub mod interviews;
pub mod memory;
pub mod metrics;
pub mod profiles;
pub mod responses;
pub mod schema;

pub use client::{ScyllaClient, ScyllaConfig};
pub use error::PersistenceError;
pub use interviews::ScyllaInterviewStore;
pub use memory::{
    InMemoryAdaptiveProfileStore, InMemoryInterviewStore, InMemoryPerformanceMetricStore,
    InMemoryResponseStore,
};
pub use metrics::ScyllaPerformanceMetricStore;
pub use profiles::ScyllaAdaptiveProfileStore;
pub use responses::ScyllaResponseStore;

/// The four Scylla-backed stores, bundled behind one connection for
/// `interview-server` to construct once at startup.
#[derive(Clone)]
pub struct PersistenceLayer {
    pub interviews: ScyllaInterviewStore,
    pub responses: ScyllaResponseStore,
    pub metrics: ScyllaPerformanceMetricStore,
    pub profiles: ScyllaAdaptiveProfileStore,
}

impl PersistenceLayer {
    pub async fn connect(config: ScyllaConfig) -> Result<Self, PersistenceError> {
        let client = ScyllaClient::connect(config).await?;
        client.ensure_schema().await?;

        Ok(Self {
            interviews: ScyllaInterviewStore::new(client.clone()),
            responses: ScyllaResponseStore::new(client.clone()),
            metrics: ScyllaPerformanceMetricStore::new(client.clone()),
            profiles: ScyllaAdaptiveProfileStore::new(client),
        })
    }
}
