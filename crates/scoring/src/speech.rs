//! Speech Scorer (`SPEC_FULL.md` §4.3), grounded on
//! `ai_modules/speech/speech_analyzer.py`.

use interview_core::SpeechEvaluation;

use crate::vocab::FILLER_WORDS;

#[derive(Debug, Clone)]
pub struct AudioFeatures {
    pub duration_seconds: f64,
    pub rms_energy: Vec<f64>,
    pub zero_crossing_rate: Vec<f64>,
    pub sample_rate: u32,
    pub hop_length: u32,
}

fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        0.0
    } else {
        xs.iter().sum::<f64>() / xs.len() as f64
    }
}

fn std_dev(xs: &[f64], avg: f64) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    (xs.iter().map(|x| (x - avg).powi(2)).sum::<f64>() / xs.len() as f64).sqrt()
}

fn count_pauses(features: &AudioFeatures, avg_rms: f64) -> u32 {
    if avg_rms <= 0.0 {
        return 0;
    }
    let threshold = 0.3 * avg_rms;
    let frame_seconds = features.hop_length as f64 / features.sample_rate.max(1) as f64;
    let min_frames = (0.5 / frame_seconds).ceil().max(1.0) as usize;

    let mut pauses = 0u32;
    let mut run = 0usize;
    for &e in &features.rms_energy {
        if e < threshold {
            run += 1;
        } else {
            if run >= min_frames {
                pauses += 1;
            }
            run = 0;
        }
    }
    if run >= min_frames {
        pauses += 1;
    }
    pauses
}

fn total_pause_seconds(features: &AudioFeatures, avg_rms: f64) -> f64 {
    if avg_rms <= 0.0 {
        return 0.0;
    }
    let threshold = 0.3 * avg_rms;
    let frame_seconds = features.hop_length as f64 / features.sample_rate.max(1) as f64;
    let silent_frames = features.rms_energy.iter().filter(|&&e| e < threshold).count();
    silent_frames as f64 * frame_seconds
}

fn clarity_score(features: &AudioFeatures) -> f64 {
    let avg_rms = mean(&features.rms_energy);
    let volume_consistency = if avg_rms > 0.0 {
        (100.0 - (std_dev(&features.rms_energy, avg_rms) / avg_rms * 100.0)).clamp(0.0, 100.0)
    } else {
        0.0
    };
    let avg_zcr = mean(&features.zero_crossing_rate);
    let audio_quality = (1.0 - avg_zcr.min(0.5)) * 100.0;

    let pauses = count_pauses(features, avg_rms);
    let minutes = (features.duration_seconds / 60.0).max(1e-6);
    let pause_rate = pauses as f64 / minutes;
    let pause_term = if (2.0..=4.0).contains(&pause_rate) {
        30.0
    } else if pause_rate < 2.0 {
        20.0 + (pause_rate / 2.0) * 10.0
    } else {
        (30.0 - (pause_rate - 4.0) * 5.0).max(0.0)
    };

    (audio_quality.min(100.0) * 0.4 + volume_consistency * 0.3 + pause_term).clamp(0.0, 100.0)
}

fn speaking_rate_score(word_count: usize, duration_seconds: f64) -> (f64, f64) {
    let wpm = word_count as f64 * 60.0 / duration_seconds.max(1e-6);
    let score = if (120.0..=160.0).contains(&wpm) {
        40.0
    } else if (100.0..120.0).contains(&wpm) || (160.0..=180.0).contains(&wpm) {
        30.0
    } else if wpm < 100.0 {
        (wpm / 100.0) * 20.0
    } else {
        (40.0 - (wpm - 180.0) * 0.5).max(0.0)
    };
    (score, wpm)
}

fn pause_ratio_score(features: &AudioFeatures, avg_rms: f64) -> f64 {
    let ratio = total_pause_seconds(features, avg_rms) / features.duration_seconds.max(1e-6);
    if (0.15..=0.25).contains(&ratio) {
        30.0
    } else if (0.10..0.15).contains(&ratio) || (0.25..=0.30).contains(&ratio) {
        20.0
    } else {
        10.0
    }
}

fn lexical_variety_score(transcript: &str) -> f64 {
    let words: Vec<String> = transcript
        .split_whitespace()
        .map(|w| w.to_lowercase())
        .collect();
    if words.is_empty() {
        return 0.0;
    }
    let unique: std::collections::HashSet<&String> = words.iter().collect();
    ((unique.len() as f64 / words.len() as f64) * 60.0).min(30.0)
}

fn filler_stats(transcript: &str) -> (u32, f64) {
    let lower = transcript.to_lowercase();
    let word_count = transcript.split_whitespace().count().max(1);
    let count: u32 = FILLER_WORDS
        .iter()
        .map(|f| lower.matches(f).count() as u32)
        .sum();
    (count, count as f64 / word_count as f64 * 100.0)
}

/// Scores one answer's speech signal. Pure function; `backend_name` is
/// recorded verbatim from the `Transcriber` collaborator.
pub fn score_speech(features: &AudioFeatures, transcript: &str, backend_name: &str) -> SpeechEvaluation {
    let avg_rms = mean(&features.rms_energy);
    let word_count = transcript.split_whitespace().count();

    let clarity = clarity_score(features);
    let (rate_score, wpm) = speaking_rate_score(word_count, features.duration_seconds);
    let fluency = (rate_score + pause_ratio_score(features, avg_rms) + lexical_variety_score(transcript)).clamp(0.0, 100.0);
    let (filler_count, filler_ratio) = filler_stats(transcript);
    let pause_count = count_pauses(features, avg_rms);

    SpeechEvaluation {
        clarity,
        fluency,
        words_per_minute: wpm,
        filler_count,
        filler_ratio,
        pause_count,
        backend_name: backend_name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steady_features(duration: f64) -> AudioFeatures {
        AudioFeatures {
            duration_seconds: duration,
            rms_energy: vec![0.1; 100],
            zero_crossing_rate: vec![0.1; 100],
            sample_rate: 16000,
            hop_length: 512,
        }
    }

    #[test]
    fn ideal_speaking_rate_scores_well() {
        let features = steady_features(60.0);
        let transcript = "word ".repeat(140);
        let result = score_speech(&features, &transcript, "whisper");
        assert!(result.words_per_minute > 130.0 && result.words_per_minute < 150.0);
        assert!(result.fluency > 50.0);
    }

    #[test]
    fn filler_words_are_counted() {
        let features = steady_features(10.0);
        let transcript = "um so like I think uh the answer is basically yes you know";
        let result = score_speech(&features, transcript, "whisper");
        assert!(result.filler_count >= 4);
    }

    #[test]
    fn backend_name_is_preserved() {
        let features = steady_features(10.0);
        let result = score_speech(&features, "a short reply", "vosk");
        assert_eq!(result.backend_name, "vosk");
    }
}
