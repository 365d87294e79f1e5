//! Maps a completed `SessionContext`/`FinalReport` onto the persisted
//! entities (`SPEC_FULL.md` §6: "the core only reads `AdaptiveProfile` and
//! writes a final `Interview` + per-question `Response` rows on
//! completion").

use chrono::Utc;
use uuid::Uuid;

use interview_core::persisted::InterviewStatus;
use interview_core::{PersistedInterview, PersistedResponse, SessionContext};
use interview_scoring::FinalReport;

pub fn to_persisted_interview(ctx: &SessionContext, report: &FinalReport) -> PersistedInterview {
    let completed_at = Utc::now();
    let duration_minutes = (completed_at - ctx.started_at).num_seconds() as f64 / 60.0;

    PersistedInterview {
        id: ctx.interview_id.clone(),
        user_id: ctx.user_id.clone(),
        resume_id: ctx.resume_digest.clone(),
        interview_type: ctx.interview_type.as_str().to_string(),
        status: InterviewStatus::Completed,
        difficulty: ctx.difficulty.as_str().to_string(),
        total_questions: report.total_questions,
        answered_questions: report.answered_questions,
        scheduled_at: None,
        started_at: Some(ctx.started_at),
        completed_at: Some(completed_at),
        duration_minutes: Some(duration_minutes),
        overall_score: Some(report.overall_score),
        content_score: Some(report.content_score),
        clarity_score: Some(report.clarity_score),
        fluency_score: Some(report.fluency_score),
        confidence_score: Some(report.confidence_score),
        emotion_score: Some(report.emotion_score),
        weak_areas: report.weak_areas.iter().map(|w| w.area.clone()).collect(),
        strong_areas: report.strong_areas.iter().map(|s| s.area.clone()).collect(),
        feedback: Some(report.feedback.clone()),
        recommendations: report.suggestions.iter().map(|s| s.title.clone()).collect(),
    }
}

pub fn to_persisted_responses(ctx: &SessionContext) -> Vec<PersistedResponse> {
    ctx.questions
        .iter()
        .filter_map(|question| {
            let evaluation = ctx.evaluations.get(&question.order_number)?;
            Some(PersistedResponse {
                id: Uuid::new_v4().to_string(),
                interview_id: ctx.interview_id.clone(),
                question_id: question.id.clone(),
                text_response: String::new(),
                audio_ref: None,
                video_ref: None,
                content_score: evaluation.content_score,
                relevance_score: evaluation.relevance_score,
                clarity_score: evaluation.speech.as_ref().map(|s| s.clarity),
                fluency_score: evaluation.speech.as_ref().map(|s| s.fluency),
                confidence_score: evaluation.confidence_score,
                response_time_seconds: None,
                thinking_time_seconds: None,
                feedback: evaluation.feedback.clone(),
                improvement_suggestions: evaluation.suggestions.clone(),
                created_at: Utc::now(),
            })
        })
        .collect()
}
