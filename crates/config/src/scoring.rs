//! Scoring thresholds and overall-score weights, factored out of
//! `Settings` so `interview-scoring` can depend on just this type.
//! Named after the teacher's `domain/scoring.rs::ScoringConfig`.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Category average below this is a weak area (`SPEC_FULL.md` §4.6).
    #[serde(default = "default_weak_threshold")]
    pub weak_threshold: f64,
    /// Category average at/above this is a strong area.
    #[serde(default = "default_strong_threshold")]
    pub strong_threshold: f64,
    /// `should_adjust` upshift threshold on average content score.
    #[serde(default = "default_upshift_threshold")]
    pub upshift_threshold: f64,
    /// `should_adjust` downshift threshold on average content score.
    #[serde(default = "default_downshift_threshold")]
    pub downshift_threshold: f64,
    /// Minimum answered questions before `should_adjust` considers a change.
    #[serde(default = "default_min_answers_for_adjustment")]
    pub min_answers_for_adjustment: usize,
    /// Target skill-gap baseline (`SPEC_FULL.md` §4.6 skill gaps).
    #[serde(default = "default_skill_gap_baseline")]
    pub skill_gap_baseline: f64,
    /// Overall-score weight on combined content+relevance.
    #[serde(default = "default_content_weight")]
    pub content_weight: f64,
    /// Overall-score weight on clarity+fluency.
    #[serde(default = "default_speech_weight")]
    pub speech_weight: f64,
    /// Overall-score weight on confidence.
    #[serde(default = "default_confidence_weight")]
    pub confidence_weight: f64,
    /// Default value substituted for a missing scoring channel.
    #[serde(default = "default_missing_channel_default")]
    pub missing_channel_default: f64,
}

fn default_weak_threshold() -> f64 {
    70.0
}
fn default_strong_threshold() -> f64 {
    85.0
}
fn default_upshift_threshold() -> f64 {
    85.0
}
fn default_downshift_threshold() -> f64 {
    45.0
}
fn default_min_answers_for_adjustment() -> usize {
    3
}
fn default_skill_gap_baseline() -> f64 {
    80.0
}
fn default_content_weight() -> f64 {
    0.4
}
fn default_speech_weight() -> f64 {
    0.3
}
fn default_confidence_weight() -> f64 {
    0.3
}
fn default_missing_channel_default() -> f64 {
    70.0
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weak_threshold: default_weak_threshold(),
            strong_threshold: default_strong_threshold(),
            upshift_threshold: default_upshift_threshold(),
            downshift_threshold: default_downshift_threshold(),
            min_answers_for_adjustment: default_min_answers_for_adjustment(),
            skill_gap_baseline: default_skill_gap_baseline(),
            content_weight: default_content_weight(),
            speech_weight: default_speech_weight(),
            confidence_weight: default_confidence_weight(),
            missing_channel_default: default_missing_channel_default(),
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sum = self.content_weight + self.speech_weight + self.confidence_weight;
        if (sum - 1.0).abs() > 1e-6 {
            return Err(ConfigError::ValidationError(format!(
                "scoring weights must sum to 1.0, got {sum}"
            )));
        }
        if self.weak_threshold >= self.strong_threshold {
            return Err(ConfigError::ValidationError(
                "weak_threshold must be less than strong_threshold".to_string(),
            ));
        }
        Ok(())
    }
}
