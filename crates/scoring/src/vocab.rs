//! Closed vocabularies used by the Text and Speech Scorers, grounded on
//! `ai_modules/nlp/answer_evaluator.py` and
//! `ai_modules/speech/speech_analyzer.py`.

use once_cell::sync::Lazy;
use std::collections::HashSet;

pub static POSITIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "confident", "successful", "achieved", "excellent", "great", "proud", "happy",
        "accomplished", "effective", "efficient",
    ]
    .into_iter()
    .collect()
});

pub static NEGATIVE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "failed", "difficult", "struggled", "problem", "issue", "challenge", "mistake",
        "wrong", "poor", "worried",
    ]
    .into_iter()
    .collect()
});

pub static TRANSITION_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "however", "therefore", "moreover", "furthermore", "additionally", "consequently",
        "thus", "hence", "meanwhile", "similarly",
    ]
    .into_iter()
    .collect()
});

pub static EXAMPLE_PHRASES: &[&str] = &["for example", "for instance", "such as", "like", "specifically"];

pub static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "an", "the", "is", "are", "was", "were", "be", "been", "being", "to", "of", "and",
        "in", "on", "at", "for", "with", "as", "by", "that", "this", "it", "from", "or", "but",
        "not", "so", "if", "than", "then", "i", "you", "he", "she", "they", "we",
    ]
    .into_iter()
    .collect()
});

pub static FILLER_WORDS: &[&str] = &[
    "um", "uh", "like", "you know", "basically", "actually", "literally", "sort of", "kind of",
    "i mean",
];
