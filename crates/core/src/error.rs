//! Shared error type.
//!
//! Mirrors the voice-agent teacher's `AgentError`/`FSMError` shape: one
//! `thiserror` enum, struct-like variants where context is useful, a plain
//! `String` payload otherwise.

use thiserror::Error;

use crate::domain::Phase;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("no such session: {id}")]
    NotFound { id: String },

    #[error("invalid transition from {from:?} via {operation}")]
    InvalidTransition { from: Phase, operation: String },

    #[error("question {question_order} was already answered")]
    AlreadyAnswered { question_order: u32 },

    #[error("validation failed: {0}")]
    ValidationError(String),

    #[error("collaborator unavailable: {collaborator}: {reason}")]
    CollaboratorUnavailable { collaborator: String, reason: String },

    #[error("session {id} is closed")]
    SessionClosed { id: String },

    #[error("internal error: {0}")]
    InternalError(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
