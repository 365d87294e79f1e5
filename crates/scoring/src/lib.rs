//! Deterministic scorers and the cross-question aggregator
//! (`SPEC_FULL.md` §4.2–§4.4, §4.6), grounded on
//! `ai_modules/nlp/answer_evaluator.py`, `ai_modules/speech/speech_analyzer.py`,
//! `ai_modules/emotion/emotion_analyzer.py`, `adaptive_system.py`, and
//! `report_generator.py`.

pub mod aggregate;
pub mod emotion;
pub mod speech;
pub mod text;
pub mod vocab;

pub use aggregate::{
    FinalReport, LearningPath, SkillGap, Suggestion, WeakArea, StrongArea, aggregate_session,
};
pub use emotion::{score_emotion, EmotionFrame};
pub use speech::{score_speech, AudioFeatures};
pub use text::score_text;
