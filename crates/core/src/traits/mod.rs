//! Collaborator and persistence-store trait interfaces (`SPEC_FULL.md` §6).
//!
//! These are the seams at which the deterministic core hands off to
//! external, possibly-blocking providers. Styled after
//! `crates/core/src/traits/speech.rs`'s `SpeechToText` trait and
//! `crates/server/src/session.rs`'s `SessionStore` trait in the teacher:
//! `#[async_trait]`, `Send + Sync`, one capability per trait.

mod collaborators;
mod stores;

pub use collaborators::{
    FaceDetection, FaceDetector, FaceEmbedder, FaceMesh, HistoryProfile, HistoryReader,
    LandmarkSet, Transcriber, TranscriptionResult,
};
pub use stores::{AdaptiveProfileStore, InterviewStore, PerformanceMetricStore, ResponseStore};
