//! The per-answer scoring result. Produced once by the scorers, attached
//! to exactly one question per `SPEC_FULL.md` §8 property 2.

use serde::{Deserialize, Serialize};

use crate::domain::Sentiment;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordAnalysis {
    pub found: Vec<String>,
    pub missing: Vec<String>,
}

impl KeywordAnalysis {
    pub fn coverage_ratio(&self) -> f64 {
        let total = self.found.len() + self.missing.len();
        if total == 0 {
            return 1.0;
        }
        self.found.len() as f64 / total as f64
    }
}

/// Speech-channel sub-record. Carries the transcription backend identity
/// per the Open Question decision recorded in `DESIGN.md`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechEvaluation {
    pub clarity: f64,
    pub fluency: f64,
    pub words_per_minute: f64,
    pub filler_count: u32,
    pub filler_ratio: f64,
    pub pause_count: u32,
    pub backend_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    pub content_score: f64,
    pub relevance_score: f64,
    pub speech: Option<SpeechEvaluation>,
    pub confidence_score: Option<f64>,
    pub dominant_emotion: Option<String>,
    pub emotional_stability: Option<f64>,
    pub face_visibility: Option<f64>,
    pub keywords: KeywordAnalysis,
    pub sentiment: Sentiment,
    pub coherence_score: f64,
    pub word_count: u32,
    pub sentence_count: u32,
    pub feedback: String,
    pub suggestions: Vec<String>,
}

/// Level bucket + message shown back to the candidate immediately after
/// submission, per `SPEC_FULL.md` §4.7 real-time feedback templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimeFeedback {
    pub level: String,
    pub message: String,
    pub tips: Vec<String>,
}
