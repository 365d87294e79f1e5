//! Agent Core scheduler (`SPEC_FULL.md` §4.7), grounded on
//! `interview_agent.py` for the operation shapes and
//! `agent_state.py` for the phase/observation-log shape. The trait-object
//! composition idiom (collaborators reached through `Arc<dyn Trait>`,
//! built up by a constructor) is borrowed from
//! `crates/agent/src/agent/mod.rs::DomainAgent`; none of that file's sales
//! content carries over.
//!
//! Every operation here is synchronous and takes already-resolved
//! collaborator outputs (a `TranscriptionResult`, a `Vec<EmotionFrame>`, a
//! `HistoryProfile`) rather than calling `Transcriber`/`FaceMesh`/
//! `HistoryReader` itself. `SPEC_FULL.md` §5 requires suspension points —
//! collaborator calls — to happen without holding the session lock; since
//! this crate has no async runtime dependency of its own beyond the mutex
//! type, that requirement is satisfied one layer up, in `interview-server`,
//! which awaits the collaborator, then calls into this module under the
//! per-session `tokio::sync::Mutex` for the brief synchronous update.

use interview_core::traits::HistoryProfile;
use interview_core::{CoreError, Difficulty, Evaluation, InterviewType, Phase, Question, RealtimeFeedback, Result, SessionContext};
use interview_config::ScoringConfig;

use interview_scoring::speech::AudioFeatures;
use interview_scoring::{score_emotion, score_speech, score_text, EmotionFrame};

use crate::fsm::transition;

/// Default number of questions generated per interview when the caller
/// doesn't ask for a specific count (`SPEC_FULL.md` §8 scenario S1 uses 5).
pub const DEFAULT_QUESTION_COUNT: usize = 5;

fn ensure_open(ctx: &SessionContext) -> Result<()> {
    if ctx.phase == Phase::Completed {
        return Err(CoreError::SessionClosed { id: ctx.interview_id.clone() });
    }
    Ok(())
}

pub struct StartRequest {
    pub interview_id: String,
    pub user_id: String,
    pub interview_type: InterviewType,
    pub mode: String,
    pub difficulty: Option<Difficulty>,
    pub resume_digest: Option<String>,
    pub skills: Vec<String>,
    pub question_count: usize,
    pub seed: u64,
    /// Already resolved by the caller via `HistoryReader::recommend_difficulty`
    /// when `difficulty` is absent; ignored otherwise.
    pub recommended_difficulty: Difficulty,
    pub history: Option<HistoryProfile>,
}

/// Starts a new interview: resolves difficulty, generates the question
/// set, and advances straight through question-gen into answer-collection.
#[tracing::instrument(skip(req), fields(interview_id = %req.interview_id, user_id = %req.user_id))]
pub fn start(req: StartRequest) -> SessionContext {
    let chosen_difficulty = req.difficulty.unwrap_or(req.recommended_difficulty);

    let (focus_areas, avoid_topics) = match &req.history {
        Some(profile) if profile.strong_topics.len() > 3 => {
            (profile.weak_topics.clone(), profile.strong_topics.clone())
        }
        Some(profile) => (profile.weak_topics.clone(), Vec::new()),
        None => (Vec::new(), Vec::new()),
    };

    let questions = interview_catalog::generate(&interview_catalog::GenerateRequest {
        interview_type: req.interview_type,
        difficulty: chosen_difficulty,
        mode: req.mode.clone(),
        skills: req.skills.clone(),
        focus_areas,
        avoid_topics,
        count: req.question_count,
        seed: req.seed,
    });

    let (weak, strong) = req
        .history
        .map(|p| (p.weak_topics, p.strong_topics))
        .unwrap_or_default();

    let mut ctx = SessionContext::new(
        req.interview_id,
        req.user_id,
        req.interview_type,
        req.mode,
        chosen_difficulty,
        req.resume_digest,
        req.skills,
        weak,
        strong,
        questions,
    );

    ctx.phase = transition(ctx.phase, Phase::QuestionGen, "start").expect("init always permits question-gen");
    ctx.phase = transition(ctx.phase, Phase::AnswerCollection, "start").expect("question-gen always permits answer-collection");
    ctx.observe(format!(
        "interview started, difficulty={}, {} questions",
        chosen_difficulty.as_str(),
        ctx.questions.len()
    ));
    tracing::info!(difficulty = chosen_difficulty.as_str(), questions = ctx.questions.len(), "interview started");
    metrics::counter!("interviews_started_total", "interview_type" => ctx.interview_type.as_str()).increment(1);
    ctx
}

pub struct SubmitInput<'a> {
    pub question_order: u32,
    pub answer_text: &'a str,
    pub audio: Option<(&'a AudioFeatures, &'a str)>,
    pub video: Option<&'a [EmotionFrame]>,
}

pub struct SubmitOutcome {
    pub evaluation: Evaluation,
    pub running_perf: f64,
    pub realtime_feedback: RealtimeFeedback,
    pub remaining: usize,
}

fn realtime_feedback(answer_score: f64, word_count: u32, missing_keywords: &[String]) -> RealtimeFeedback {
    let (level, message) = if answer_score >= 80.0 {
        ("excellent", "Excellent answer! You demonstrated strong knowledge and clear communication.")
    } else if answer_score >= 65.0 {
        ("good", "Good answer! You covered the key points well.")
    } else if answer_score >= 50.0 {
        ("fair", "Decent answer, but there's room for improvement in depth and clarity.")
    } else {
        ("needs-improvement", "Your answer could be stronger. Consider providing more detail and specific examples.")
    };

    let mut tips = Vec::new();
    if word_count < 30 {
        tips.push("Try to elaborate more on your answer with specific examples.".to_string());
    }
    if !missing_keywords.is_empty() {
        tips.push(format!("Consider mentioning: {}.", missing_keywords.join(", ")));
    }

    RealtimeFeedback { level: level.to_string(), message: message.to_string(), tips }
}

/// Scores one answer, folds it into the cumulative session state, and
/// returns the feedback shown back to the candidate.
#[tracing::instrument(skip(ctx, cfg, input), fields(interview_id = %ctx.interview_id, question_order = input.question_order))]
pub fn submit(ctx: &mut SessionContext, cfg: &ScoringConfig, input: SubmitInput<'_>) -> Result<SubmitOutcome> {
    ensure_open(ctx)?;

    let question = ctx
        .question_by_order(input.question_order)
        .ok_or_else(|| CoreError::NotFound { id: format!("question {}", input.question_order) })?
        .clone();

    if ctx.evaluations.contains_key(&input.question_order) {
        return Err(CoreError::AlreadyAnswered { question_order: input.question_order });
    }

    let scoring_started = std::time::Instant::now();

    let mut evaluation = score_text(&question.text, &question.question_type, input.answer_text, &question.expected_keywords);
    metrics::histogram!("scorer_latency_seconds", "scorer" => "text").record(scoring_started.elapsed().as_secs_f64());

    if let Some((features, backend_name)) = input.audio {
        let started = std::time::Instant::now();
        evaluation.speech = Some(score_speech(features, input.answer_text, backend_name));
        metrics::histogram!("scorer_latency_seconds", "scorer" => "speech").record(started.elapsed().as_secs_f64());
    }

    if let Some(frames) = input.video {
        let started = std::time::Instant::now();
        let emotion = score_emotion(frames);
        metrics::histogram!("scorer_latency_seconds", "scorer" => "emotion").record(started.elapsed().as_secs_f64());
        evaluation.confidence_score = Some(emotion.confidence);
        evaluation.dominant_emotion = emotion.dominant_emotion;
        evaluation.emotional_stability = Some(emotion.emotional_stability);
        evaluation.face_visibility = Some(emotion.face_visibility);
    }

    ctx.content_scores.push(evaluation.content_score);
    ctx.relevance_scores.push(evaluation.relevance_score);
    if let Some(speech) = &evaluation.speech {
        ctx.clarity_scores.push(speech.clarity);
        ctx.fluency_scores.push(speech.fluency);
    }
    if let Some(confidence) = evaluation.confidence_score {
        ctx.confidence_scores.push(confidence);
    }

    let category_average = (evaluation.content_score + evaluation.relevance_score) / 2.0;
    ctx.category_scores.entry(question.category.clone()).or_default().push(category_average);
    if category_average < cfg.weak_threshold {
        if !ctx.known_weak_areas.contains(&question.category) {
            ctx.known_weak_areas.push(question.category.clone());
        }
    } else if category_average >= cfg.strong_threshold && !ctx.known_strong_areas.contains(&question.category) {
        ctx.known_strong_areas.push(question.category.clone());
    }

    ctx.current_question_index = (ctx.current_question_index + 1).min(ctx.questions.len());

    let feedback = realtime_feedback(category_average, evaluation.word_count, &evaluation.keywords.missing);

    ctx.observe(format!(
        "answered question {} (category={}, score={:.1})",
        input.question_order, question.category, category_average
    ));
    ctx.evaluations.insert(input.question_order, evaluation.clone());

    let running_perf = SessionContext::avg(&ctx.content_scores) * 0.6 + SessionContext::avg(&ctx.relevance_scores) * 0.4;
    let remaining = ctx.questions.len() - ctx.answered_count();

    Ok(SubmitOutcome { evaluation, running_perf, realtime_feedback: feedback, remaining })
}

/// Whether the mid-session difficulty should change, per `SPEC_FULL.md`
/// §4.7 and §8 property 5. Only considers adjustment once at least
/// `cfg.min_answers_for_adjustment` answers are in.
pub fn should_adjust(ctx: &SessionContext, cfg: &ScoringConfig) -> (bool, Difficulty) {
    if ctx.answered_count() < cfg.min_answers_for_adjustment {
        return (false, ctx.difficulty);
    }
    let avg_content = SessionContext::avg(&ctx.content_scores);
    if avg_content >= cfg.upshift_threshold && ctx.difficulty != Difficulty::Hard {
        (true, Difficulty::Hard)
    } else if avg_content <= cfg.downshift_threshold && ctx.difficulty != Difficulty::Easy {
        (true, Difficulty::Easy)
    } else {
        (false, ctx.difficulty)
    }
}

/// Applies a `should_adjust` decision, recording it in the decision log.
pub fn apply_adjustment(ctx: &mut SessionContext, new_difficulty: Difficulty) {
    ctx.decide(format!("difficulty adjusted {} -> {}", ctx.difficulty.as_str(), new_difficulty.as_str()));
    ctx.difficulty = new_difficulty;
}

/// Runs the Aggregator and closes out the interview.
#[tracing::instrument(skip(ctx, cfg), fields(interview_id = %ctx.interview_id))]
pub fn complete(ctx: &mut SessionContext, cfg: &ScoringConfig) -> Result<interview_scoring::FinalReport> {
    ensure_open(ctx)?;

    ctx.phase = transition(ctx.phase, Phase::Analysis, "complete")?;
    let report = interview_scoring::aggregate_session(ctx, cfg);
    ctx.phase = transition(ctx.phase, Phase::SuggestionGen, "complete")?;
    ctx.phase = transition(ctx.phase, Phase::ReportGen, "complete")?;
    ctx.phase = transition(ctx.phase, Phase::Completed, "complete")?;
    ctx.decide(format!("interview completed, overall score {:.1}", report.overall_score));
    tracing::info!(overall_score = report.overall_score, "interview completed");
    metrics::counter!("interviews_completed_total", "interview_type" => ctx.interview_type.as_str()).increment(1);

    Ok(report)
}

/// Terminal cancellation from any phase; produces no report.
#[tracing::instrument(skip(ctx), fields(interview_id = %ctx.interview_id))]
pub fn cancel(ctx: &mut SessionContext) -> Result<()> {
    ctx.phase = transition(ctx.phase, Phase::Completed, "cancel")?;
    ctx.decide("interview cancelled");
    tracing::info!("interview cancelled");
    metrics::counter!("interviews_cancelled_total", "interview_type" => ctx.interview_type.as_str()).increment(1);
    Ok(())
}

/// All questions not yet answered, in presentation order.
pub fn unanswered_questions(ctx: &SessionContext) -> Vec<&Question> {
    ctx.questions.iter().filter(|q| !ctx.evaluations.contains_key(&q.order_number)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use interview_core::InterviewType;

    fn start_ctx(question_count: usize) -> SessionContext {
        start(StartRequest {
            interview_id: "i1".into(),
            user_id: "u1".into(),
            interview_type: InterviewType::General,
            mode: "text".into(),
            difficulty: Some(Difficulty::Easy),
            resume_digest: None,
            skills: vec![],
            question_count,
            seed: 42,
            recommended_difficulty: Difficulty::Medium,
            history: None,
        })
    }

    #[test]
    fn start_lands_in_answer_collection_with_requested_question_count() {
        let ctx = start_ctx(5);
        assert_eq!(ctx.phase, Phase::AnswerCollection);
        assert_eq!(ctx.questions.len(), 5);
        assert_eq!(ctx.difficulty, Difficulty::Easy);
    }

    #[test]
    fn duplicate_submit_is_rejected() {
        let mut ctx = start_ctx(2);
        let cfg = ScoringConfig::default();
        let order = ctx.questions[0].order_number;
        submit(&mut ctx, &cfg, SubmitInput { question_order: order, answer_text: "a reasonably long answer about the topic at hand", audio: None, video: None }).unwrap();
        let err = submit(&mut ctx, &cfg, SubmitInput { question_order: order, answer_text: "again", audio: None, video: None }).unwrap_err();
        assert!(matches!(err, CoreError::AlreadyAnswered { .. }));
    }

    #[test]
    fn should_adjust_requires_minimum_answers() {
        let ctx = start_ctx(5);
        let cfg = ScoringConfig::default();
        assert_eq!(should_adjust(&ctx, &cfg), (false, Difficulty::Easy));
    }

    #[test]
    fn cancel_closes_the_session() {
        let mut ctx = start_ctx(3);
        cancel(&mut ctx).unwrap();
        assert_eq!(ctx.phase, Phase::Completed);
        let cfg = ScoringConfig::default();
        let order = ctx.questions[0].order_number;
        let err = submit(&mut ctx, &cfg, SubmitInput { question_order: order, answer_text: "too late", audio: None, video: None }).unwrap_err();
        assert!(matches!(err, CoreError::SessionClosed { .. }));
    }

    #[test]
    fn complete_runs_aggregator_and_reaches_completed() {
        let mut ctx = start_ctx(3);
        let cfg = ScoringConfig::default();
        for order in ctx.questions.clone().iter().map(|q| q.order_number) {
            submit(
                &mut ctx,
                &cfg,
                SubmitInput {
                    question_order: order,
                    answer_text: "a thorough and well structured answer that covers the topic in detail with examples",
                    audio: None,
                    video: None,
                },
            )
            .unwrap();
        }
        let report = complete(&mut ctx, &cfg).unwrap();
        assert_eq!(ctx.phase, Phase::Completed);
        assert!(report.overall_score >= 0.0 && report.overall_score <= 100.0);
    }
}
