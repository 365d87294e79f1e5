//! Emotion Scorer (`SPEC_FULL.md` §4.4), grounded on
//! `ai_modules/emotion/emotion_analyzer.py`.

use std::collections::HashMap;

const POSITIVE_POOL: &[&str] = &["happy", "neutral"];
const STRESS_POOL: &[&str] = &["fear", "sad", "angry"];

#[derive(Debug, Clone)]
pub enum EmotionFrame {
    NoFace,
    Detected { scores: HashMap<String, f64> },
}

pub struct EmotionResult {
    pub confidence: f64,
    pub dominant_emotion: Option<String>,
    pub emotional_stability: f64,
    pub face_visibility: f64,
    pub feedback: String,
}

fn dominant(scores: &HashMap<String, f64>) -> Option<String> {
    scores
        .iter()
        .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(k, _)| k.clone())
}

/// Scores a time-ordered sequence of per-frame emotion readings. Pure
/// function over already-extracted distributions (the ML inference that
/// produces them lives behind the `FaceDetector`/`FaceMesh` collaborators).
pub fn score_emotion(frames: &[EmotionFrame]) -> EmotionResult {
    let total = frames.len().max(1);
    let detected: Vec<&HashMap<String, f64>> = frames
        .iter()
        .filter_map(|f| match f {
            EmotionFrame::Detected { scores } => Some(scores),
            EmotionFrame::NoFace => None,
        })
        .collect();

    let face_visibility = detected.len() as f64 / total as f64 * 100.0;

    if detected.is_empty() {
        return EmotionResult {
            confidence: 50.0,
            dominant_emotion: None,
            emotional_stability: 100.0,
            face_visibility,
            feedback: "No face was visible for most of the answer; video-based feedback is unavailable.".to_string(),
        };
    }

    let mut averaged: HashMap<String, f64> = HashMap::new();
    for scores in &detected {
        for (label, value) in scores.iter() {
            *averaged.entry(label.clone()).or_insert(0.0) += value;
        }
    }
    for v in averaged.values_mut() {
        *v /= detected.len() as f64;
    }

    let positive_sum: f64 = POSITIVE_POOL.iter().filter_map(|p| averaged.get(*p)).sum();
    let stress_sum: f64 = STRESS_POOL.iter().filter_map(|p| averaged.get(*p)).sum();
    let confidence = if positive_sum + stress_sum <= 0.0 {
        50.0
    } else {
        100.0 * positive_sum / (positive_sum + stress_sum)
    };

    let dominant_emotion = dominant(&averaged);

    let mut transitions = 0usize;
    let mut previous: Option<String> = None;
    for scores in &detected {
        let current = dominant(scores);
        if let (Some(prev), Some(cur)) = (&previous, &current) {
            if prev != cur {
                transitions += 1;
            }
        }
        previous = current;
    }
    let denom = (detected.len() as i64 - 1).max(1) as f64;
    let emotional_stability = ((1.0 - transitions as f64 / denom) * 100.0).clamp(0.0, 100.0);

    let feedback = if confidence >= 70.0 {
        "You appeared calm and confident throughout your answer.".to_string()
    } else if confidence >= 45.0 {
        "Your expression was mixed; try to project more ease while answering.".to_string()
    } else {
        "You appeared visibly stressed; practicing under timed conditions may help.".to_string()
    };

    EmotionResult {
        confidence,
        dominant_emotion,
        emotional_stability,
        face_visibility,
        feedback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(label: &str, value: f64) -> EmotionFrame {
        let mut scores = HashMap::new();
        scores.insert(label.to_string(), value);
        scores.insert("neutral".to_string(), 1.0 - value);
        EmotionFrame::Detected { scores }
    }

    #[test]
    fn no_face_frames_degrade_gracefully() {
        let result = score_emotion(&[EmotionFrame::NoFace, EmotionFrame::NoFace]);
        assert_eq!(result.confidence, 50.0);
        assert_eq!(result.face_visibility, 0.0);
        assert!(result.dominant_emotion.is_none());
    }

    #[test]
    fn stable_happy_frames_score_high_confidence_and_stability() {
        let frames = vec![frame("happy", 0.9), frame("happy", 0.85), frame("happy", 0.8)];
        let result = score_emotion(&frames);
        assert!(result.confidence > 80.0);
        assert_eq!(result.emotional_stability, 100.0);
    }

    #[test]
    fn alternating_dominant_emotion_lowers_stability() {
        let frames = vec![frame("happy", 0.9), frame("fear", 0.9), frame("happy", 0.9), frame("fear", 0.9)];
        let result = score_emotion(&frames);
        assert!(result.emotional_stability < 100.0);
    }
}
