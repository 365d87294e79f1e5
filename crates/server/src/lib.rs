//! HTTP surface for the interview and proctoring platform.
//!
//! Wires `interview-core`'s session model, `interview-agent`'s scheduler,
//! and `interview-persistence`'s stores behind `axum`, grounded on
//! `crates/server` (`voice-agent-server`) for the crate's role in the
//! workspace: one `AppState`, one router, collaborator calls released from
//! the session lock before the async hop. See `DESIGN.md`.

pub mod audio;
pub mod collaborators;
pub mod error;
pub mod http;
pub mod persist;
pub mod state;
pub mod video;

pub use collaborators::{HttpFaceDetector, HttpFaceEmbedder, HttpFaceMesh, HttpTranscriber, StoreHistoryReader};
pub use error::ServerError;
pub use http::create_router;
pub use state::AppState;
