//! Proctoring value types shared between `interview-proctor` (which owns
//! the mutable `ProctorSessionState` and the detection pipeline) and the
//! server layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Severity, ViolationKind};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    pub kind: ViolationKind,
    pub severity: Severity,
    pub timestamp: DateTime<Utc>,
    pub confidence: f64,
    pub detail: String,
    pub frame_index: Option<u64>,
}

/// Result of analyzing a single frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameResult {
    pub frame_index: u64,
    pub face_visible: bool,
    pub looking_away: bool,
    pub new_violations: Vec<Violation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProctorReport {
    pub session_id: String,
    pub total_frames: u64,
    pub face_visible_frames: u64,
    pub visibility_ratio: f64,
    pub attention_ratio: f64,
    pub violations: Vec<Violation>,
    pub integrity_score: f64,
    pub recommendation: String,
}

/// The mutable per-session proctoring record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProctorSessionState {
    pub session_id: String,
    pub user_id: String,
    pub interview_id: String,
    pub started_at: DateTime<Utc>,
    pub reference_embedding: Option<Vec<f32>>,
    pub total_frames: u64,
    pub face_visible_frames: u64,
    pub consecutive_looking_away: u64,
    pub looking_away_emitted_multiples: u64,
    pub violations: Vec<Violation>,
    pub closed: bool,
}

impl ProctorSessionState {
    pub fn new(session_id: String, user_id: String, interview_id: String) -> Self {
        Self {
            session_id,
            user_id,
            interview_id,
            started_at: Utc::now(),
            reference_embedding: None,
            total_frames: 0,
            face_visible_frames: 0,
            consecutive_looking_away: 0,
            looking_away_emitted_multiples: 0,
            violations: Vec::new(),
            closed: false,
        }
    }

    pub fn visibility_ratio(&self) -> f64 {
        if self.total_frames == 0 {
            return 100.0;
        }
        self.face_visible_frames as f64 / self.total_frames as f64 * 100.0
    }
}
