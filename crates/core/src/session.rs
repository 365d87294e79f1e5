//! `SessionContext`: the mutable per-interview record owned exclusively by
//! the Agent Core for the session's lifetime (`SPEC_FULL.md` §3).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::{Difficulty, InterviewType, Phase};
use crate::evaluation::Evaluation;
use crate::question::Question;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Observation {
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decision {
    pub timestamp: DateTime<Utc>,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionContext {
    pub interview_id: String,
    pub user_id: String,
    pub interview_type: InterviewType,
    pub mode: String,
    pub difficulty: Difficulty,
    pub started_at: DateTime<Utc>,
    pub resume_digest: Option<String>,
    pub skills: Vec<String>,
    pub known_weak_areas: Vec<String>,
    pub known_strong_areas: Vec<String>,
    pub questions: Vec<Question>,
    pub current_question_index: usize,
    pub evaluations: HashMap<u32, Evaluation>,
    pub content_scores: Vec<f64>,
    pub relevance_scores: Vec<f64>,
    pub clarity_scores: Vec<f64>,
    pub fluency_scores: Vec<f64>,
    pub confidence_scores: Vec<f64>,
    /// category -> per-question (content+relevance)/2 averages seen so far
    pub category_scores: HashMap<String, Vec<f64>>,
    pub observations: Vec<Observation>,
    pub decisions: Vec<Decision>,
    pub phase: Phase,
}

impl SessionContext {
    pub fn new(
        interview_id: String,
        user_id: String,
        interview_type: InterviewType,
        mode: String,
        difficulty: Difficulty,
        resume_digest: Option<String>,
        skills: Vec<String>,
        known_weak_areas: Vec<String>,
        known_strong_areas: Vec<String>,
        questions: Vec<Question>,
    ) -> Self {
        Self {
            interview_id,
            user_id,
            interview_type,
            mode,
            difficulty,
            started_at: Utc::now(),
            resume_digest,
            skills,
            known_weak_areas,
            known_strong_areas,
            questions,
            current_question_index: 0,
            evaluations: HashMap::new(),
            content_scores: Vec::new(),
            relevance_scores: Vec::new(),
            clarity_scores: Vec::new(),
            fluency_scores: Vec::new(),
            confidence_scores: Vec::new(),
            category_scores: HashMap::new(),
            observations: Vec::new(),
            decisions: Vec::new(),
            phase: Phase::Init,
        }
    }

    pub fn answered_count(&self) -> usize {
        self.evaluations.len()
    }

    pub fn question_by_order(&self, order: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.order_number == order)
    }

    pub fn observe(&mut self, message: impl Into<String>) {
        self.observations.push(Observation {
            timestamp: Utc::now(),
            message: message.into(),
        });
    }

    pub fn decide(&mut self, description: impl Into<String>) {
        self.decisions.push(Decision {
            timestamp: Utc::now(),
            description: description.into(),
        });
    }

    pub fn avg(scores: &[f64]) -> f64 {
        if scores.is_empty() {
            return 0.0;
        }
        scores.iter().sum::<f64>() / scores.len() as f64
    }
}
