//! Per-frame `EmotionFrame` derivation for `submit-answer`'s optional
//! video channel (`SPEC_FULL.md` §4.4, §4.7).
//!
//! `interview_scoring::score_emotion` is a pure function over
//! already-classified per-frame emotion distributions; the spec names no
//! dedicated emotion-classifier collaborator, only `FaceDetector`/
//! `FaceMesh`. This reuses `interview-proctor`'s head-pose/gaze estimate
//! (the same landmarks already drive the proctoring pipeline) as a
//! deterministic stand-in for a learned classifier: a steady, forward-facing
//! gaze reads as calm/neutral, a sustained away-gaze reads as stress. This
//! is a heuristic, not a trained model, consistent with the "no training of
//! ML models" non-goal.

use std::collections::HashMap;

use interview_core::traits::LandmarkSet;
use interview_proctor::{estimate_gaze, estimate_head_pose, is_looking_away};
use interview_scoring::EmotionFrame;

const HEAD_POSE_THRESHOLD_DEG: f64 = 25.0;

pub fn frame_from_landmarks(landmarks: Option<&LandmarkSet>, frame_width: f64, frame_height: f64) -> EmotionFrame {
    let Some(lm) = landmarks else {
        return EmotionFrame::NoFace;
    };

    let away = estimate_head_pose(lm, frame_width, frame_height)
        .and_then(|pose| estimate_gaze(lm).map(|gaze| (pose, gaze)))
        .map(|(pose, gaze)| is_looking_away(&pose, &gaze, HEAD_POSE_THRESHOLD_DEG))
        .unwrap_or(false);

    let mut scores = HashMap::new();
    if away {
        scores.insert("fear".to_string(), 0.55);
        scores.insert("neutral".to_string(), 0.35);
        scores.insert("happy".to_string(), 0.10);
    } else {
        scores.insert("neutral".to_string(), 0.55);
        scores.insert("happy".to_string(), 0.35);
        scores.insert("fear".to_string(), 0.10);
    }
    EmotionFrame::Detected { scores }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_landmarks_read_as_no_face() {
        assert!(matches!(frame_from_landmarks(None, 640.0, 480.0), EmotionFrame::NoFace));
    }

    #[test]
    fn forward_facing_landmarks_read_as_detected() {
        let lm: LandmarkSet = vec![(0.5, 0.5); 478];
        assert!(matches!(frame_from_landmarks(Some(&lm), 640.0, 480.0), EmotionFrame::Detected { .. }));
    }
}
