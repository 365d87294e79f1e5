//! The axum router and handlers (`SPEC_FULL.md` §6), grounded on
//! `crates/server/src/http.rs::create_router` for the middleware layering
//! order (trace, CORS, `with_state`) and the `State<AppState>` /
//! `Path<String>` / `Json<T>` handler idiom. Each handler follows the
//! suspension-point rule from §5: collaborator calls happen before the
//! session lock is taken, and the lock is reacquired only to commit the
//! already-computed result.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use interview_core::{CoreError, Difficulty, InterviewType, Question, SessionContext};
use interview_scoring::speech::AudioFeatures;
use interview_scoring::EmotionFrame;

use crate::error::ServerError;
use crate::state::AppState;
use crate::{audio, persist, video};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/metrics", get(metrics))
        .route("/interviews", post(start_interview))
        .route("/interviews/:id", get(interview_status))
        .route("/interviews/:id/answers", post(submit_answer))
        .route("/interviews/:id/complete", post(complete_interview))
        .route("/proctor/sessions", post(proctor_start))
        .route("/proctor/sessions/:id/reference-photo", post(proctor_reference_photo))
        .route("/proctor/sessions/:id/frames", post(proctor_analyze_frame))
        .route("/proctor/sessions/:id/tab-switch", post(proctor_tab_switch))
        .route("/proctor/sessions/:id/end", post(proctor_end))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    let _ = &state.config;
    StatusCode::OK
}

async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    state.metrics_handle.render()
}

fn parse_interview_type(s: &str) -> Result<InterviewType, ServerError> {
    match s {
        "general" => Ok(InterviewType::General),
        "technical" => Ok(InterviewType::Technical),
        "hr" => Ok(InterviewType::Hr),
        "upsc" => Ok(InterviewType::Upsc),
        other => Err(ServerError::Core(CoreError::ValidationError(format!("unsupported interview type: {other}")))),
    }
}

fn parse_difficulty(s: &str) -> Result<Difficulty, ServerError> {
    match s {
        "easy" => Ok(Difficulty::Easy),
        "medium" => Ok(Difficulty::Medium),
        "hard" => Ok(Difficulty::Hard),
        other => Err(ServerError::Core(CoreError::ValidationError(format!("unsupported difficulty: {other}")))),
    }
}

#[derive(Deserialize)]
struct StartInterviewRequest {
    interview_id: String,
    user_id: String,
    interview_type: String,
    mode: Option<String>,
    difficulty: Option<String>,
    resume: Option<String>,
    skills: Option<Vec<String>>,
}

#[derive(Serialize)]
struct StartInterviewResponse {
    questions: Vec<Question>,
    difficulty: String,
    context_summary: String,
}

#[tracing::instrument(skip(state, body), fields(interview_id = %body.interview_id))]
async fn start_interview(State(state): State<AppState>, Json(body): Json<StartInterviewRequest>) -> Result<Json<StartInterviewResponse>, ServerError> {
    let interview_type = parse_interview_type(&body.interview_type)?;
    let explicit_difficulty = body.difficulty.as_deref().map(parse_difficulty).transpose()?;

    let history = state.history.load_profile(&body.user_id).await.ok().flatten();
    let recommended_difficulty = state
        .history
        .recommend_difficulty(&body.user_id, &body.interview_type)
        .await
        .unwrap_or_default();

    let ctx = interview_agent::start(interview_agent::StartRequest {
        interview_id: body.interview_id.clone(),
        user_id: body.user_id,
        interview_type,
        mode: body.mode.unwrap_or_else(|| "text".to_string()),
        difficulty: explicit_difficulty,
        resume_digest: body.resume,
        skills: body.skills.unwrap_or_default(),
        question_count: interview_agent::DEFAULT_QUESTION_COUNT,
        seed: rand::random(),
        recommended_difficulty,
        history,
    });

    let difficulty = ctx.difficulty.as_str().to_string();
    let questions = ctx.questions.clone();
    let context_summary = format!("{} questions, difficulty {}", questions.len(), difficulty);

    state.interviews.insert(body.interview_id, ctx)?;

    Ok(Json(StartInterviewResponse { questions, difficulty, context_summary }))
}

#[derive(Deserialize)]
struct SubmitAnswerRequest {
    question_order: u32,
    text: String,
    audio: Option<Vec<u8>>,
    video_frames: Option<Vec<Vec<u8>>>,
}

#[derive(Serialize)]
struct SubmitAnswerResponse {
    evaluation: interview_core::Evaluation,
    running_performance: f64,
    realtime_feedback: interview_core::RealtimeFeedback,
    remaining: usize,
}

#[tracing::instrument(skip(state, body), fields(interview_id = %id))]
async fn submit_answer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<SubmitAnswerRequest>,
) -> Result<Json<SubmitAnswerResponse>, ServerError> {
    if body.text.trim().is_empty() {
        return Err(ServerError::Core(CoreError::ValidationError("answer text must not be empty".to_string())));
    }

    let audio_payload = match &body.audio {
        Some(bytes) => {
            let transcription = state.transcriber.transcribe(bytes).await?;
            let features = audio::extract_audio_features(bytes, 16_000);
            Some((features, transcription.backend_name))
        }
        None => None,
    };

    let video_frames = match &body.video_frames {
        Some(frames) => {
            let mut out = Vec::with_capacity(frames.len());
            for frame in frames {
                let landmarks = state.face_mesh.landmarks(frame).await?;
                out.push(video::frame_from_landmarks(landmarks.first(), 640.0, 480.0));
            }
            Some(out)
        }
        None => None,
    };

    let handle = state.interviews.get(&id)?;
    let mut ctx = handle.lock().await;

    let audio_ref: Option<(&AudioFeatures, &str)> = audio_payload.as_ref().map(|(f, b)| (f, b.as_str()));
    let video_ref: Option<&[EmotionFrame]> = video_frames.as_deref();

    let outcome = interview_agent::submit(
        &mut ctx,
        &state.config.scoring,
        interview_agent::SubmitInput { question_order: body.question_order, answer_text: &body.text, audio: audio_ref, video: video_ref },
    )?;

    let (should_adjust, new_difficulty) = interview_agent::should_adjust(&ctx, &state.config.scoring);
    if should_adjust {
        interview_agent::apply_adjustment(&mut ctx, new_difficulty);
    }

    Ok(Json(SubmitAnswerResponse {
        evaluation: outcome.evaluation,
        running_performance: outcome.running_perf,
        realtime_feedback: outcome.realtime_feedback,
        remaining: outcome.remaining,
    }))
}

#[tracing::instrument(skip(state), fields(interview_id = %id))]
async fn complete_interview(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<interview_scoring::FinalReport>, ServerError> {
    let handle = state.interviews.get(&id)?;
    let mut ctx = handle.lock().await;

    let report = interview_agent::complete(&mut ctx, &state.config.scoring)?;

    let persisted_interview = persist::to_persisted_interview(&ctx, &report);
    let persisted_responses = persist::to_persisted_responses(&ctx);
    drop(ctx);

    state.persistence.interviews.upsert(&persisted_interview).await?;
    for response in &persisted_responses {
        state.responses.insert(response).await?;
    }

    state.interviews.remove(&id);

    Ok(Json(report))
}

#[derive(Serialize)]
struct InterviewStatusResponse {
    phase: &'static str,
    total: usize,
    answered: usize,
    current_performance: f64,
    started_at: chrono::DateTime<chrono::Utc>,
}

#[tracing::instrument(skip(state), fields(interview_id = %id))]
async fn interview_status(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<InterviewStatusResponse>, ServerError> {
    let handle = state.interviews.get(&id)?;
    let ctx = handle.lock().await;

    Ok(Json(InterviewStatusResponse {
        phase: ctx.phase.display_name(),
        total: ctx.questions.len(),
        answered: ctx.answered_count(),
        current_performance: SessionContext::avg(&ctx.content_scores) * 0.6 + SessionContext::avg(&ctx.relevance_scores) * 0.4,
        started_at: ctx.started_at,
    }))
}

#[derive(Deserialize)]
struct ProctorStartRequest {
    interview_id: String,
    user_id: String,
}

#[derive(Serialize)]
struct ProctorStartResponse {
    session_id: String,
}

#[tracing::instrument(skip(state))]
async fn proctor_start(State(state): State<AppState>, Json(body): Json<ProctorStartRequest>) -> Result<Json<ProctorStartResponse>, ServerError> {
    let session_id = uuid::Uuid::new_v4().to_string();
    let proctor = interview_core::ProctorSessionState::new(session_id.clone(), body.user_id, body.interview_id);
    state.proctor_sessions.insert(session_id.clone(), proctor)?;
    Ok(Json(ProctorStartResponse { session_id }))
}

#[tracing::instrument(skip(state, body), fields(session_id = %id))]
async fn proctor_reference_photo(State(state): State<AppState>, Path(id): Path<String>, body: axum::body::Bytes) -> Result<StatusCode, ServerError> {
    let embedding = state.face_embedder.embed(&body).await?;
    let handle = state.proctor_sessions.get(&id)?;
    let mut proctor = handle.lock().await;
    proctor.reference_embedding = embedding;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
struct FrameQuery {
    #[serde(default)]
    verify_person: bool,
    #[serde(default = "default_frame_width")]
    frame_width: f64,
    #[serde(default = "default_frame_height")]
    frame_height: f64,
}

fn default_frame_width() -> f64 {
    640.0
}

fn default_frame_height() -> f64 {
    480.0
}

#[tracing::instrument(skip(state, body), fields(session_id = %id))]
async fn proctor_analyze_frame(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<FrameQuery>,
    body: axum::body::Bytes,
) -> Result<Json<interview_core::FrameResult>, ServerError> {
    let detections = state.face_detector.detect(&body).await?;
    let landmark_sets = state.face_mesh.landmarks(&body).await?;
    let embedding = if query.verify_person { state.face_embedder.embed(&body).await? } else { None };

    let handle = state.proctor_sessions.get(&id)?;
    let mut proctor = handle.lock().await;

    let result = interview_proctor::analyze_frame(
        &mut proctor,
        &state.config.sensitivity,
        &detections,
        landmark_sets.first(),
        query.frame_width,
        query.frame_height,
        embedding.as_deref(),
        query.verify_person,
    );

    Ok(Json(result))
}

#[derive(Deserialize)]
struct TabSwitchRequest {
    kind: String,
}

#[tracing::instrument(skip(state), fields(session_id = %id))]
async fn proctor_tab_switch(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<TabSwitchRequest>,
) -> Result<Json<interview_core::Violation>, ServerError> {
    let handle = state.proctor_sessions.get(&id)?;
    let mut proctor = handle.lock().await;
    let violation = interview_proctor::tab_switch(&mut proctor, &body.kind);
    Ok(Json(violation))
}

#[tracing::instrument(skip(state), fields(session_id = %id))]
async fn proctor_end(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<interview_core::ProctorReport>, ServerError> {
    let handle = state.proctor_sessions.get(&id)?;
    let report = {
        let proctor = handle.lock().await;
        interview_proctor::end(&proctor)
    };
    state.proctor_sessions.remove(&id);
    Ok(Json(report))
}
