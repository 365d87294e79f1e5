//! Agent Core: the interview phase state machine, the session registry,
//! and the five scheduling operations (`SPEC_FULL.md` §4.7), grounded on
//! `crates/agent` (`voice-agent-agent`) for the crate's role in the
//! workspace, though none of its sales-conversation content survives the
//! transform — see `DESIGN.md`.

pub mod core;
pub mod fsm;
pub mod registry;

pub use core::{
    apply_adjustment, cancel, complete, should_adjust, start, submit, unanswered_questions,
    StartRequest, SubmitInput, SubmitOutcome, DEFAULT_QUESTION_COUNT,
};
pub use fsm::{transition, valid_transitions};
pub use registry::SessionRegistry;
