//! Small tagged enums shared across the workspace.
//!
//! Styled after `ConversationStage` in the teacher's `conversation.rs`:
//! a plain enum, `serde(rename_all = "snake_case")`, and a handful of
//! inherent helper methods rather than a trait per enum.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewType {
    General,
    Technical,
    Hr,
    Upsc,
}

impl InterviewType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Technical => "technical",
            Self::Hr => "hr",
            Self::Upsc => "upsc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    pub fn step_up(self) -> Self {
        match self {
            Self::Easy => Self::Medium,
            Self::Medium => Self::Hard,
            Self::Hard => Self::Hard,
        }
    }

    pub fn step_down(self) -> Self {
        match self {
            Self::Easy => Self::Easy,
            Self::Medium => Self::Easy,
            Self::Hard => Self::Medium,
        }
    }
}

/// Interview Agent Core phase. Transitions are monotone; see
/// `interview-agent::fsm::valid_transitions`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Init,
    QuestionGen,
    AnswerCollection,
    Analysis,
    SuggestionGen,
    ReportGen,
    Completed,
}

impl Phase {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Init => "initializing",
            Self::QuestionGen => "generating questions",
            Self::AnswerCollection => "collecting answers",
            Self::Analysis => "analyzing performance",
            Self::SuggestionGen => "generating suggestions",
            Self::ReportGen => "generating report",
            Self::Completed => "completed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Integrity-score deduction for a single violation of this severity.
    pub fn deduction(&self) -> f64 {
        match self {
            Self::Low => 2.0,
            Self::Medium => 5.0,
            Self::High => 10.0,
            Self::Critical => 20.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    NoFace,
    MultipleFaces,
    LookingAway,
    DifferentPerson,
    TabSwitch,
    WindowBlur,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_steps_clamp_at_bounds() {
        assert_eq!(Difficulty::Hard.step_up(), Difficulty::Hard);
        assert_eq!(Difficulty::Easy.step_down(), Difficulty::Easy);
        assert_eq!(Difficulty::Easy.step_up(), Difficulty::Medium);
        assert_eq!(Difficulty::Hard.step_down(), Difficulty::Medium);
    }

    #[test]
    fn severity_deduction_matches_spec_table() {
        assert_eq!(Severity::Critical.deduction(), 20.0);
        assert_eq!(Severity::High.deduction(), 10.0);
        assert_eq!(Severity::Medium.deduction(), 5.0);
        assert_eq!(Severity::Low.deduction(), 2.0);
    }
}
