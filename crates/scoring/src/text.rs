//! Text Scorer (`SPEC_FULL.md` §4.2), grounded on
//! `ai_modules/nlp/answer_evaluator.py`.

use interview_core::{Evaluation, KeywordAnalysis, Sentiment};

use crate::vocab::{EXAMPLE_PHRASES, NEGATIVE_WORDS, POSITIVE_WORDS, STOP_WORDS, TRANSITION_WORDS};

fn words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

fn sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect()
}

fn length_score(word_count: usize) -> f64 {
    let wc = word_count as f64;
    if wc < 20.0 {
        (wc / 20.0) * 20.0
    } else if wc < 50.0 {
        20.0 + ((wc - 20.0) / 30.0) * 10.0
    } else if wc < 100.0 {
        30.0 + ((wc - 50.0) / 50.0) * 10.0
    } else {
        40.0
    }
}

fn structure_score(sentence_count: usize, lower_text: &str) -> f64 {
    let base = if sentence_count >= 3 {
        15.0
    } else if sentence_count >= 2 {
        10.0
    } else {
        5.0
    };
    let has_example = EXAMPLE_PHRASES.iter().any(|p| lower_text.contains(p));
    base + if has_example { 15.0 } else { 0.0 }
}

fn complexity_score(words: &[String]) -> f64 {
    if words.is_empty() {
        return 0.0;
    }
    let avg_len = words.iter().map(|w| w.len()).sum::<usize>() as f64 / words.len() as f64;
    if avg_len > 5.0 {
        15.0
    } else if avg_len > 4.0 {
        10.0
    } else {
        5.0
    }
}

fn content_score(word_count: usize, sentence_count: usize, words: &[String], lower_text: &str) -> f64 {
    length_score(word_count) + structure_score(sentence_count, lower_text) + complexity_score(words)
}

fn relevance_score(question_text: &str, answer_words: &[String], keywords: &KeywordAnalysis) -> f64 {
    let q_tokens: Vec<String> = words(question_text)
        .into_iter()
        .filter(|w| !STOP_WORDS.contains(w.as_str()))
        .collect();
    let a_set: std::collections::HashSet<&String> = answer_words
        .iter()
        .filter(|w| !STOP_WORDS.contains(w.as_str()))
        .collect();

    let overlap = if q_tokens.is_empty() {
        0.0
    } else {
        let hits = q_tokens.iter().filter(|t| a_set.contains(t)).count();
        (hits as f64 / q_tokens.len() as f64) * 50.0
    };

    let keyword_component = if keywords.found.is_empty() && keywords.missing.is_empty() {
        25.0
    } else {
        keywords.coverage_ratio() * 50.0
    };

    overlap + keyword_component
}

fn analyze_keywords(lower_answer: &str, expected_keywords: &[String]) -> KeywordAnalysis {
    let mut found = Vec::new();
    let mut missing = Vec::new();
    for kw in expected_keywords {
        if lower_answer.contains(&kw.to_lowercase()) {
            found.push(kw.clone());
        } else {
            missing.push(kw.clone());
        }
    }
    KeywordAnalysis { found, missing }
}

fn sentiment(lower_answer: &str) -> Sentiment {
    let pos = POSITIVE_WORDS.iter().filter(|w| lower_answer.contains(**w)).count();
    let neg = NEGATIVE_WORDS.iter().filter(|w| lower_answer.contains(**w)).count();
    if pos > neg {
        Sentiment::Positive
    } else if neg > pos {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

fn coherence(sentence_list: &[&str], lower_text: &str) -> f64 {
    if sentence_list.len() < 2 {
        return 60.0;
    }
    let transitions = TRANSITION_WORDS.iter().filter(|w| lower_text.contains(**w)).count();
    let mut score = 70.0;
    score += if transitions >= 2 {
        20.0
    } else if transitions == 1 {
        10.0
    } else {
        0.0
    };
    let lengths: Vec<f64> = sentence_list.iter().map(|s| words(s).len() as f64).collect();
    let mean = lengths.iter().sum::<f64>() / lengths.len() as f64;
    let variance = lengths.iter().map(|l| (l - mean).powi(2)).sum::<f64>() / lengths.len() as f64;
    if variance < 100.0 {
        score += 10.0;
    }
    score.min(100.0)
}

fn feedback_and_suggestions(
    content: f64,
    relevance: f64,
    keywords: &KeywordAnalysis,
    question_type: &str,
) -> (String, Vec<String>) {
    let mut notes = Vec::new();
    let mut suggestions = Vec::new();

    if content < 60.0 {
        notes.push("Your answer could use more depth and detail.");
        suggestions.push("Expand your answer with specific examples or outcomes.".to_string());
    }
    if relevance < 60.0 {
        notes.push("Try to stay closer to what the question is actually asking.");
        suggestions.push("Re-read the question and address its specific points directly.".to_string());
    }
    if !keywords.missing.is_empty() {
        suggestions.push(format!(
            "Consider mentioning: {}.",
            keywords.missing.join(", ")
        ));
    }
    match question_type {
        "behavioral" => suggestions.push("Use the STAR method (Situation, Task, Action, Result).".to_string()),
        "technical" => suggestions.push("Walk through your reasoning step by step, not just the conclusion.".to_string()),
        "situational" => suggestions.push("Describe the specific actions you took, not just the outcome.".to_string()),
        _ => {}
    }

    let feedback = if notes.is_empty() {
        "Solid answer overall.".to_string()
    } else {
        notes.join(" ")
    };
    (feedback, suggestions)
}

/// Scores one answer. Pure function, no I/O.
pub fn score_text(question_text: &str, question_type: &str, answer: &str, expected_keywords: &[String]) -> Evaluation {
    let answer_words = words(answer);
    if answer.trim().is_empty() || answer_words.len() < 10 {
        return Evaluation {
            content_score: 0.0,
            relevance_score: 0.0,
            speech: None,
            confidence_score: None,
            dominant_emotion: None,
            emotional_stability: None,
            face_visibility: None,
            keywords: KeywordAnalysis { found: vec![], missing: expected_keywords.to_vec() },
            sentiment: Sentiment::Neutral,
            coherence_score: 0.0,
            word_count: answer_words.len() as u32,
            sentence_count: 0,
            feedback: "Answer is too short to evaluate meaningfully.".to_string(),
            suggestions: vec![
                "Provide more detail in your answer.".to_string(),
                "Explain your reasoning.".to_string(),
            ],
        };
    }

    let lower_answer = answer.to_lowercase();
    let sentence_list = sentences(answer);
    let keywords = analyze_keywords(&lower_answer, expected_keywords);

    let content = content_score(answer_words.len(), sentence_list.len(), &answer_words, &lower_answer);
    let relevance = relevance_score(question_text, &answer_words, &keywords);
    let coherence_score = coherence(&sentence_list, &lower_answer);
    let sentiment_value = sentiment(&lower_answer);
    let (feedback, suggestions) = feedback_and_suggestions(content, relevance, &keywords, question_type);

    Evaluation {
        content_score: content.min(100.0),
        relevance_score: relevance.min(100.0),
        speech: None,
        confidence_score: None,
        dominant_emotion: None,
        emotional_stability: None,
        face_visibility: None,
        keywords,
        sentiment: sentiment_value,
        coherence_score,
        word_count: answer_words.len() as u32,
        sentence_count: sentence_list.len() as u32,
        feedback,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_answer_is_zero_scored() {
        let eval = score_text("What is your strength?", "behavioral", "I am good.", &[]);
        assert_eq!(eval.content_score, 0.0);
        assert_eq!(eval.relevance_score, 0.0);
    }

    #[test]
    fn keyword_coverage_raises_relevance() {
        let keywords = vec!["mutable".to_string(), "immutable".to_string()];
        let answer = "Lists are mutable in python while tuples are immutable, which affects how they are used as dictionary keys and passed around in larger programs that care about data integrity.";
        let eval = score_text("Explain the difference between lists and tuples.", "technical", answer, &keywords);
        assert!(eval.keywords.found.len() == 2);
        assert!(eval.relevance_score > 50.0);
    }

    #[test]
    fn scores_stay_within_bounds() {
        let answer = "I believe I am confident and successful because I have achieved great things through effective and efficient planning, for example managing three cross functional projects at once while keeping every stakeholder informed and aligned on outcomes.";
        let eval = score_text("Tell me about yourself.", "behavioral", answer, &[]);
        assert!(eval.content_score >= 0.0 && eval.content_score <= 100.0);
        assert!(eval.relevance_score >= 0.0 && eval.relevance_score <= 100.0);
        assert_eq!(eval.sentiment, Sentiment::Positive);
    }
}
