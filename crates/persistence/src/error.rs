//! Persistence-layer error type. Mirrors `interview-core::CoreError`'s
//! shape (one `thiserror` enum, `String` payload for wrapped driver
//! errors) rather than propagating `scylla`'s error types directly.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("scylla connection error: {0}")]
    Connection(String),

    #[error("schema error: {0}")]
    Schema(String),

    #[error("query error: {0}")]
    Query(String),

    #[error("row decode error: {0}")]
    Decode(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<scylla::transport::errors::NewSessionError> for PersistenceError {
    fn from(err: scylla::transport::errors::NewSessionError) -> Self {
        PersistenceError::Connection(err.to_string())
    }
}

impl From<scylla::transport::errors::QueryError> for PersistenceError {
    fn from(err: scylla::transport::errors::QueryError) -> Self {
        PersistenceError::Query(err.to_string())
    }
}

impl From<PersistenceError> for interview_core::CoreError {
    fn from(err: PersistenceError) -> Self {
        interview_core::CoreError::CollaboratorUnavailable {
            collaborator: "persistence".to_string(),
            reason: err.to_string(),
        }
    }
}
