//! Per-frame proctoring pipeline (`SPEC_FULL.md` §4.8), grounded on
//! `ai_modules/proctoring/__init__.py::AntiCheatMonitor.analyze_frame`.
//!
//! Pure state-transition functions over `ProctorSessionState`: callers fetch
//! detections/landmarks/embeddings from the collaborator traits, then hand
//! the results here. No I/O happens in this crate.

use chrono::Utc;
use interview_config::SensitivityConfig;
use interview_core::traits::{FaceDetection, LandmarkSet};
use interview_core::{FrameResult, ProctorReport, ProctorSessionState, Severity, Violation, ViolationKind};

use crate::detect::{estimate_gaze, estimate_head_pose, is_looking_away};

fn violation_kind_label(kind: ViolationKind) -> &'static str {
    match kind {
        ViolationKind::NoFace => "no_face",
        ViolationKind::MultipleFaces => "multiple_faces",
        ViolationKind::LookingAway => "looking_away",
        ViolationKind::DifferentPerson => "different_person",
        ViolationKind::TabSwitch => "tab_switch",
        ViolationKind::WindowBlur => "window_blur",
    }
}

fn push_violation(
    state: &mut ProctorSessionState,
    kind: ViolationKind,
    severity: Severity,
    confidence: f64,
    detail: impl Into<String>,
) -> Violation {
    let violation = Violation {
        kind,
        severity,
        timestamp: Utc::now(),
        confidence,
        detail: detail.into(),
        frame_index: Some(state.total_frames),
    };
    state.violations.push(violation.clone());
    metrics::counter!("proctor_violations_total", "kind" => violation_kind_label(kind)).increment(1);
    violation
}

fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let dot: f64 = a.iter().zip(b).map(|(x, y)| *x as f64 * *y as f64).sum();
    let norm_a: f64 = a.iter().map(|x| (*x as f64).powi(2)).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| (*x as f64).powi(2)).sum::<f64>().sqrt();
    if norm_a <= 0.0 || norm_b <= 0.0 {
        return 0.0;
    }
    (dot / (norm_a * norm_b)).clamp(-1.0, 1.0)
}

/// Runs the nine-step per-frame pipeline and mutates `state` in place.
pub fn analyze_frame(
    state: &mut ProctorSessionState,
    cfg: &SensitivityConfig,
    detections: &[FaceDetection],
    landmarks: Option<&LandmarkSet>,
    frame_width: f64,
    frame_height: f64,
    current_embedding: Option<&[f32]>,
    verify_person: bool,
) -> FrameResult {
    state.total_frames += 1;
    let mut new_violations = Vec::new();

    let confident: Vec<&FaceDetection> = detections.iter().filter(|d| d.confidence >= cfg.face_confidence).collect();
    let face_visible = !confident.is_empty();

    if face_visible {
        state.face_visible_frames += 1;

        if confident.len() > 1 {
            new_violations.push(push_violation(
                state,
                ViolationKind::MultipleFaces,
                Severity::High,
                0.95,
                format!("Detected {} faces", confident.len()),
            ));
        }
    } else if state.total_frames - state.face_visible_frames > cfg.no_face_frames {
        new_violations.push(push_violation(
            state,
            ViolationKind::NoFace,
            Severity::Medium,
            0.9,
            "Face not visible for an extended period",
        ));
    }

    let mut looking_away = false;
    if let Some(lm) = landmarks {
        if let Some(pose) = estimate_head_pose(lm, frame_width, frame_height) {
            if let Some(gaze) = estimate_gaze(lm) {
                looking_away = is_looking_away(&pose, &gaze, cfg.head_pose_threshold_deg as f64);
            }
        }
    }

    if looking_away {
        state.consecutive_looking_away += 1;
        let multiple = state.consecutive_looking_away / cfg.looking_away_frames;
        if multiple > 0 && multiple > state.looking_away_emitted_multiples {
            state.looking_away_emitted_multiples = multiple;
            new_violations.push(push_violation(
                state,
                ViolationKind::LookingAway,
                Severity::Low,
                0.85,
                "Candidate looked away from the screen",
            ));
        }
    } else {
        state.consecutive_looking_away = 0;
        state.looking_away_emitted_multiples = 0;
    }

    if verify_person && face_visible {
        if let (Some(reference), Some(current)) = (&state.reference_embedding, current_embedding) {
            let similarity = cosine_similarity(reference, current);
            if similarity < cfg.verification_threshold as f64 {
                new_violations.push(push_violation(
                    state,
                    ViolationKind::DifferentPerson,
                    Severity::Critical,
                    similarity,
                    format!("Face did not match the reference (similarity {similarity:.2})"),
                ));
            }
        }
    }

    FrameResult {
        frame_index: state.total_frames,
        face_visible,
        looking_away,
        new_violations,
    }
}

/// Externally-driven tab-switch/window-blur event (`SPEC_FULL.md` §4.8).
pub fn tab_switch(state: &mut ProctorSessionState, kind: &str) -> Violation {
    let violation_kind = if kind == "blur" {
        ViolationKind::WindowBlur
    } else {
        ViolationKind::TabSwitch
    };
    push_violation(state, violation_kind, Severity::Medium, 1.0, format!("Browser event: {kind}"))
}

fn integrity_score(state: &ProctorSessionState) -> f64 {
    let visibility_ratio = state.visibility_ratio();
    let attention_ratio = if state.total_frames == 0 {
        100.0
    } else {
        let looking_away_frames = state
            .violations
            .iter()
            .filter(|v| v.kind == ViolationKind::LookingAway)
            .count() as f64;
        ((state.face_visible_frames as f64 - looking_away_frames) / state.total_frames as f64 * 100.0).max(0.0)
    };

    let mut score = 100.0;
    if visibility_ratio < 95.0 {
        score -= (95.0 - visibility_ratio) * 0.5;
    }
    if attention_ratio < 90.0 {
        score -= (90.0 - attention_ratio) * 0.3;
    }
    for violation in &state.violations {
        score -= violation.severity.deduction();
    }
    score.clamp(0.0, 100.0)
}

fn recommendation(score: f64, violations: &[Violation]) -> String {
    if violations.iter().any(|v| v.severity == Severity::Critical) {
        return "review required".to_string();
    }
    if score >= 90.0 {
        "passed".to_string()
    } else if score >= 70.0 {
        "passed with notes".to_string()
    } else if score >= 50.0 {
        "flagged".to_string()
    } else {
        "failed".to_string()
    }
}

/// Closes out a proctoring session and produces its final report.
pub fn end(state: &ProctorSessionState) -> ProctorReport {
    let attention_ratio = if state.total_frames == 0 {
        100.0
    } else {
        let looking_away_frames = state
            .violations
            .iter()
            .filter(|v| v.kind == ViolationKind::LookingAway)
            .count() as f64;
        ((state.face_visible_frames as f64 - looking_away_frames) / state.total_frames as f64 * 100.0).max(0.0)
    };
    let score = integrity_score(state);

    ProctorReport {
        session_id: state.session_id.clone(),
        total_frames: state.total_frames,
        face_visible_frames: state.face_visible_frames,
        visibility_ratio: state.visibility_ratio(),
        attention_ratio,
        violations: state.violations.clone(),
        integrity_score: score,
        recommendation: recommendation(score, &state.violations),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> SensitivityConfig {
        SensitivityConfig::for_profile(interview_config::SensitivityProfile::Medium)
    }

    fn detection(confidence: f32) -> FaceDetection {
        FaceDetection { bbox: (0.4, 0.3, 0.2, 0.3), confidence }
    }

    #[test]
    fn multiple_faces_emits_high_severity_violation() {
        let mut state = ProctorSessionState::new("s1".into(), "u1".into(), "i1".into());
        let result = analyze_frame(&mut state, &cfg(), &[detection(0.9), detection(0.9)], None, 640.0, 480.0, None, false);
        assert_eq!(result.new_violations.len(), 1);
        assert_eq!(result.new_violations[0].kind, ViolationKind::MultipleFaces);
    }

    #[test]
    fn sustained_no_face_emits_violation_once_threshold_crossed() {
        let mut state = ProctorSessionState::new("s1".into(), "u1".into(), "i1".into());
        let mut emitted = 0;
        for _ in 0..cfg().no_face_frames + 1 {
            let result = analyze_frame(&mut state, &cfg(), &[], None, 640.0, 480.0, None, false);
            emitted += result.new_violations.iter().filter(|v| v.kind == ViolationKind::NoFace).count();
        }
        assert_eq!(emitted, 1);
    }

    #[test]
    fn looking_away_is_emitted_once_per_threshold_multiple() {
        let mut state = ProctorSessionState::new("s1".into(), "u1".into(), "i1".into());
        let sensitivity = cfg();
        let mut lm: LandmarkSet = vec![(0.5, 0.5); 478];
        lm[1] = (0.9, 0.45);
        lm[152] = (0.85, 0.75);
        lm[33] = (0.4, 0.4);
        lm[263] = (0.6, 0.4);

        let mut total_emitted = 0;
        for _ in 0..(sensitivity.looking_away_frames * 2 + 1) {
            let result = analyze_frame(&mut state, &sensitivity, &[detection(0.9)], Some(&lm), 640.0, 480.0, None, false);
            total_emitted += result.new_violations.iter().filter(|v| v.kind == ViolationKind::LookingAway).count();
        }
        assert_eq!(total_emitted, 2);
    }

    #[test]
    fn tab_switch_and_window_blur_map_to_distinct_kinds() {
        let mut state = ProctorSessionState::new("s1".into(), "u1".into(), "i1".into());
        assert_eq!(tab_switch(&mut state, "switch").kind, ViolationKind::TabSwitch);
        assert_eq!(tab_switch(&mut state, "blur").kind, ViolationKind::WindowBlur);
    }

    #[test]
    fn clean_session_scores_perfectly_and_passes() {
        let mut state = ProctorSessionState::new("s1".into(), "u1".into(), "i1".into());
        for _ in 0..10 {
            analyze_frame(&mut state, &cfg(), &[detection(0.9)], None, 640.0, 480.0, None, false);
        }
        let report = end(&state);
        assert_eq!(report.integrity_score, 100.0);
        assert_eq!(report.recommendation, "passed");
    }

    #[test]
    fn different_person_forces_review_required() {
        let mut state = ProctorSessionState::new("s1".into(), "u1".into(), "i1".into());
        state.reference_embedding = Some(vec![1.0, 0.0, 0.0]);
        let result = analyze_frame(&mut state, &cfg(), &[detection(0.9)], None, 640.0, 480.0, Some(&[0.0, 1.0, 0.0]), true);
        assert_eq!(result.new_violations[0].kind, ViolationKind::DifferentPerson);
        let report = end(&state);
        assert_eq!(report.recommendation, "review required");
    }
}
