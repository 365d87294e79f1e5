//! Core domain types for the interview and proctoring platform.
//!
//! This crate is the dependency-free center of the workspace: value types
//! for questions, evaluations, session state, and proctoring state; the
//! error enum shared by every other crate; and the collaborator traits
//! (`Transcriber`, `FaceDetector`, `FaceMesh`, `FaceEmbedder`,
//! `HistoryReader`) that narrow the outside world down to what the core
//! actually needs from it.

pub mod domain;
pub mod error;
pub mod evaluation;
pub mod persisted;
pub mod proctor;
pub mod question;
pub mod session;
pub mod traits;

pub use domain::{Difficulty, InterviewType, Phase, Sentiment, Severity, ViolationKind};
pub use error::{CoreError, Result};
pub use evaluation::{Evaluation, KeywordAnalysis, RealtimeFeedback, SpeechEvaluation};
pub use persisted::{AdaptiveProfile, PerformanceMetric, PersistedInterview, PersistedResponse};
pub use proctor::{FrameResult, ProctorReport, ProctorSessionState, Violation};
pub use question::Question;
pub use session::{Decision, Observation, SessionContext};
pub use traits::{
    AdaptiveProfileStore, FaceDetection, FaceDetector, FaceEmbedder, FaceMesh, HistoryProfile,
    HistoryReader, InterviewStore, LandmarkSet, PerformanceMetricStore, ResponseStore,
    Transcriber, TranscriptionResult,
};
