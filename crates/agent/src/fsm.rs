//! Interview phase transition table (`SPEC_FULL.md` §4.7 state machine),
//! grounded on `crates/agent/src/stage.rs::ConversationStage::valid_transitions`:
//! the same "enum + `valid_transitions` lookup + reject-or-accept" shape, with
//! the gold-loan sales stages replaced by the monotone interview phases and
//! every backward edge removed.

use interview_core::{CoreError, Phase, Result};

/// Phases reachable directly from `phase`. `Completed` is always reachable
/// (cancellation), everything else is strictly forward-only.
pub fn valid_transitions(phase: Phase) -> &'static [Phase] {
    use Phase::*;
    match phase {
        Init => &[QuestionGen, Completed],
        QuestionGen => &[AnswerCollection, Completed],
        AnswerCollection => &[Analysis, Completed],
        Analysis => &[SuggestionGen, Completed],
        SuggestionGen => &[ReportGen, Completed],
        ReportGen => &[Completed],
        Completed => &[],
    }
}

/// Validates and returns the destination phase, or `InvalidTransition` if
/// `to` is not reachable from `from`. `operation` names the caller for the
/// error message (`"start"`, `"submit"`, `"complete"`, `"cancel"`).
pub fn transition(from: Phase, to: Phase, operation: &str) -> Result<Phase> {
    if valid_transitions(from).contains(&to) {
        Ok(to)
    } else {
        Err(CoreError::InvalidTransition { from, operation: operation.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_transitions_are_allowed() {
        assert!(transition(Phase::Init, Phase::QuestionGen, "start").is_ok());
        assert!(transition(Phase::AnswerCollection, Phase::Analysis, "complete").is_ok());
    }

    #[test]
    fn backward_transitions_are_rejected() {
        assert!(transition(Phase::Analysis, Phase::AnswerCollection, "submit").is_err());
    }

    #[test]
    fn cancel_reaches_completed_from_any_phase() {
        for phase in [
            Phase::Init,
            Phase::QuestionGen,
            Phase::AnswerCollection,
            Phase::Analysis,
            Phase::SuggestionGen,
            Phase::ReportGen,
        ] {
            assert!(transition(phase, Phase::Completed, "cancel").is_ok());
        }
    }

    #[test]
    fn completed_is_terminal() {
        assert!(valid_transitions(Phase::Completed).is_empty());
    }
}
