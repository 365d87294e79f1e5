//! Aggregator (`SPEC_FULL.md` §4.6), grounded on `adaptive_system.py` and
//! `report_generator.py`. Turns per-question evaluations into weak/strong
//! areas, skill gaps, suggestions, a learning path, and the final overall
//! score.

use interview_core::session::{Decision, Observation};
use interview_core::{Evaluation, SessionContext};
use interview_config::ScoringConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeakArea {
    pub area: String,
    pub avg_score: f64,
    pub attempts: usize,
    pub severity: String,
    pub common_missing_keywords: Vec<String>,
    pub improvement_potential: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrongArea {
    pub area: String,
    pub avg_score: f64,
    pub attempts: usize,
    pub confidence_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGap {
    pub skill: String,
    pub related_area: String,
    pub current: f64,
    pub gap: f64,
    pub priority: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub kind: String,
    pub priority: String,
    pub title: String,
    pub description: String,
    pub action_items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningPathPhase {
    pub name: String,
    pub skills: Vec<String>,
    pub milestone: String,
}

pub type LearningPath = Vec<LearningPathPhase>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinalReport {
    pub interview_id: String,
    pub total_questions: u32,
    pub answered_questions: u32,
    pub overall_score: f64,
    pub content_score: f64,
    pub relevance_score: f64,
    pub clarity_score: f64,
    pub fluency_score: f64,
    pub confidence_score: f64,
    pub emotion_score: f64,
    pub consistency_score: f64,
    pub weak_areas: Vec<WeakArea>,
    pub strong_areas: Vec<StrongArea>,
    pub skill_gaps: Vec<SkillGap>,
    pub suggestions: Vec<Suggestion>,
    pub learning_path: LearningPath,
    pub feedback: String,
    pub recent_observations: Vec<Observation>,
    pub recent_decisions: Vec<Decision>,
}

fn weak_areas(category_scores: &HashMap<String, Vec<f64>>, evaluations: &HashMap<u32, Evaluation>, cfg: &ScoringConfig) -> Vec<WeakArea> {
    let mut out = Vec::new();
    for (area, scores) in category_scores {
        let avg = SessionContext::avg(scores);
        if avg >= cfg.weak_threshold {
            continue;
        }
        let severity = if avg < 50.0 { "high" } else { "medium" };
        let missing: Vec<String> = evaluations
            .values()
            .flat_map(|e| e.keywords.missing.clone())
            .collect();
        out.push(WeakArea {
            area: area.clone(),
            avg_score: avg,
            attempts: scores.len(),
            severity: severity.to_string(),
            common_missing_keywords: dedup(missing),
            improvement_potential: (cfg.weak_threshold - avg).max(0.0),
        });
    }
    out.sort_by(|a, b| a.avg_score.partial_cmp(&b.avg_score).unwrap());
    out
}

fn strong_areas(category_scores: &HashMap<String, Vec<f64>>, cfg: &ScoringConfig) -> Vec<StrongArea> {
    let mut out = Vec::new();
    for (area, scores) in category_scores {
        let avg = SessionContext::avg(scores);
        if avg < cfg.strong_threshold {
            continue;
        }
        let confidence_level = if avg >= 90.0 { "high" } else { "good" };
        out.push(StrongArea {
            area: area.clone(),
            avg_score: avg,
            attempts: scores.len(),
            confidence_level: confidence_level.to_string(),
        });
    }
    out.sort_by(|a, b| b.avg_score.partial_cmp(&a.avg_score).unwrap());
    out
}

fn dedup(mut v: Vec<String>) -> Vec<String> {
    v.sort();
    v.dedup();
    v
}

const SKILL_KEYWORDS: &[(&str, &[&str])] = &[
    ("Communication", &["general", "hr", "behavioral"]),
    ("Technical Knowledge", &["technical", "python", "java", "javascript", "algorithms", "databases", "system_design"]),
    ("Problem Solving", &["situational", "algorithms"]),
    ("Confidence", &["behavioral", "hr"]),
];

fn skill_gaps(weak: &[WeakArea], cfg: &ScoringConfig) -> Vec<SkillGap> {
    let mut out = Vec::new();
    for (skill, categories) in SKILL_KEYWORDS {
        if let Some(area) = weak.iter().find(|w| categories.contains(&w.area.as_str())) {
            let gap = (cfg.skill_gap_baseline - area.avg_score).max(0.0);
            let priority = if gap > 30.0 {
                "high"
            } else if gap > 15.0 {
                "medium"
            } else {
                "low"
            };
            out.push(SkillGap {
                skill: skill.to_string(),
                related_area: area.area.clone(),
                current: area.avg_score,
                gap,
                priority: priority.to_string(),
            });
        }
    }
    out
}

fn suggestions(weak: &[WeakArea], strong: &[StrongArea], evaluations: &HashMap<u32, Evaluation>) -> Vec<Suggestion> {
    let mut out = Vec::new();
    let total = evaluations.len().max(1) as f64;

    let low_content = evaluations.values().filter(|e| e.content_score < 60.0).count() as f64;
    let low_relevance = evaluations.values().filter(|e| e.relevance_score < 60.0).count() as f64;
    let short_answers = evaluations.values().filter(|e| e.word_count < 40).count() as f64;

    if low_content / total > 0.3 {
        out.push(Suggestion {
            kind: "content".to_string(),
            priority: "high".to_string(),
            title: "Deepen your answers".to_string(),
            description: "Several answers lacked depth or supporting detail.".to_string(),
            action_items: vec!["Practice elaborating with concrete examples and outcomes.".to_string()],
        });
    }
    if low_relevance / total > 0.3 {
        out.push(Suggestion {
            kind: "relevance".to_string(),
            priority: "high".to_string(),
            title: "Stay on-topic".to_string(),
            description: "Several answers drifted from what was actually asked.".to_string(),
            action_items: vec!["Restate the question in your own words before answering.".to_string()],
        });
    }
    if short_answers / total > 0.4 {
        out.push(Suggestion {
            kind: "length".to_string(),
            priority: "medium".to_string(),
            title: "Expand your responses".to_string(),
            description: "Many answers were brief relative to the question's scope.".to_string(),
            action_items: vec!["Aim for 3-4 sentences per answer at minimum.".to_string()],
        });
    }
    for area in weak {
        let (title, action) = match area.area.as_str() {
            "technical" | "algorithms" | "databases" | "system_design" | "python" | "java" | "javascript" => (
                "Strengthen technical fundamentals",
                "Review core concepts and practice explaining them out loud.",
            ),
            "behavioral" => (
                "Practice behavioral storytelling",
                "Prepare 3-5 STAR-format stories ahead of time.",
            ),
            _ => (
                "Improve communication clarity",
                "Practice structuring answers with a clear beginning, middle, and end.",
            ),
        };
        out.push(Suggestion {
            kind: "weak_area".to_string(),
            priority: area.severity.clone(),
            title: title.to_string(),
            description: format!("Your {} answers averaged {:.1}.", area.area, area.avg_score),
            action_items: vec![action.to_string()],
        });
    }
    if !strong.is_empty() {
        out.push(Suggestion {
            kind: "strength".to_string(),
            priority: "low".to_string(),
            title: "Leverage your strengths".to_string(),
            description: format!(
                "You performed well in {}; lean on these in your real interview.",
                strong.iter().map(|s| s.area.as_str()).collect::<Vec<_>>().join(", ")
            ),
            action_items: vec!["Bring these topics up proactively when relevant.".to_string()],
        });
    }
    out
}

fn learning_path(weak: &[WeakArea], skill_gaps: &[SkillGap]) -> LearningPath {
    let estimate_weeks = |gap: f64| (gap / 10.0).max(2.0);

    let mut foundation = Vec::new();
    let mut practice = Vec::new();
    let mut mastery = Vec::new();

    for gap in skill_gaps {
        let weeks = estimate_weeks(gap.gap);
        if weeks <= 2.5 {
            mastery.push(gap.skill.clone());
        } else if weeks <= 4.0 {
            practice.push(gap.skill.clone());
        } else {
            foundation.push(gap.skill.clone());
        }
    }
    for area in weak {
        if skill_gaps.iter().all(|g| g.related_area != area.area) {
            practice.push(area.area.clone());
        }
    }

    let mut phases = Vec::new();
    if !foundation.is_empty() {
        phases.push(LearningPathPhase {
            name: "foundation".to_string(),
            skills: dedup(foundation),
            milestone: "Review core concepts and close the largest knowledge gaps.".to_string(),
        });
    }
    if !practice.is_empty() {
        phases.push(LearningPathPhase {
            name: "practice".to_string(),
            skills: dedup(practice),
            milestone: "Complete timed mock answers targeting weak categories.".to_string(),
        });
    }
    if !mastery.is_empty() {
        phases.push(LearningPathPhase {
            name: "mastery".to_string(),
            skills: dedup(mastery),
            milestone: "Polish delivery and consistency under interview conditions.".to_string(),
        });
    }
    phases
}

fn consistency_score(recent_overall_scores: &[f64]) -> f64 {
    if recent_overall_scores.len() < 2 {
        return 100.0;
    }
    let avg = SessionContext::avg(recent_overall_scores);
    let variance = recent_overall_scores.iter().map(|s| (s - avg).powi(2)).sum::<f64>() / recent_overall_scores.len() as f64;
    (100.0 - variance.sqrt().min(100.0)).max(0.0)
}

fn comprehensive_feedback(weak: &[WeakArea], strong: &[StrongArea]) -> String {
    let mut parts = Vec::new();
    if strong.is_empty() {
        parts.push("You showed steady performance across the interview.".to_string());
    } else {
        parts.push(format!(
            "You were strongest in {}.",
            strong.iter().map(|s| s.area.as_str()).collect::<Vec<_>>().join(", ")
        ));
    }
    if weak.is_empty() {
        parts.push("No significant weak areas were identified.".to_string());
    } else {
        parts.push(format!(
            "Focus your preparation on {}.",
            weak.iter().map(|w| w.area.as_str()).collect::<Vec<_>>().join(", ")
        ));
    }
    parts.join(" ")
}

/// Computes the overall score per `SPEC_FULL.md` §4.6's law:
/// `0.4 * (0.6*content + 0.4*relevance) + 0.3*((clarity+fluency)/2) + 0.3*confidence`,
/// with missing channels defaulting to `cfg.missing_channel_default`.
pub fn overall_score(
    avg_content: f64,
    avg_relevance: f64,
    avg_clarity: Option<f64>,
    avg_fluency: Option<f64>,
    avg_confidence: Option<f64>,
    cfg: &ScoringConfig,
) -> f64 {
    let default = cfg.missing_channel_default;
    let content_combined = 0.6 * avg_content + 0.4 * avg_relevance;
    let speech_combined = (avg_clarity.unwrap_or(default) + avg_fluency.unwrap_or(default)) / 2.0;
    let confidence = avg_confidence.unwrap_or(default);
    (cfg.content_weight * content_combined
        + cfg.speech_weight * speech_combined
        + cfg.confidence_weight * confidence)
        .clamp(0.0, 100.0)
}

/// Synthesizes the final report from a completed session. Called once, at
/// `interview-agent::core::complete`.
pub fn aggregate_session(ctx: &SessionContext, cfg: &ScoringConfig) -> FinalReport {
    let weak = weak_areas(&ctx.category_scores, &ctx.evaluations, cfg);
    let strong = strong_areas(&ctx.category_scores, cfg);
    let gaps = skill_gaps(&weak, cfg);
    let suggestion_list = suggestions(&weak, &strong, &ctx.evaluations);
    let path = learning_path(&weak, &gaps);

    let avg_content = SessionContext::avg(&ctx.content_scores);
    let avg_relevance = SessionContext::avg(&ctx.relevance_scores);
    let avg_clarity = (!ctx.clarity_scores.is_empty()).then(|| SessionContext::avg(&ctx.clarity_scores));
    let avg_fluency = (!ctx.fluency_scores.is_empty()).then(|| SessionContext::avg(&ctx.fluency_scores));
    let avg_confidence = (!ctx.confidence_scores.is_empty()).then(|| SessionContext::avg(&ctx.confidence_scores));

    let overall = overall_score(avg_content, avg_relevance, avg_clarity, avg_fluency, avg_confidence, cfg);
    let consistency = consistency_score(&ctx.content_scores);

    let recent_observations = ctx.observations.iter().rev().take(10).rev().cloned().collect();
    let recent_decisions = ctx.decisions.iter().rev().take(5).rev().cloned().collect();

    FinalReport {
        interview_id: ctx.interview_id.clone(),
        total_questions: ctx.questions.len() as u32,
        answered_questions: ctx.answered_count() as u32,
        overall_score: overall,
        content_score: avg_content,
        relevance_score: avg_relevance,
        clarity_score: avg_clarity.unwrap_or(cfg.missing_channel_default),
        fluency_score: avg_fluency.unwrap_or(cfg.missing_channel_default),
        confidence_score: avg_confidence.unwrap_or(cfg.missing_channel_default),
        emotion_score: avg_confidence.unwrap_or(cfg.missing_channel_default),
        consistency_score: consistency,
        feedback: comprehensive_feedback(&weak, &strong),
        weak_areas: weak,
        strong_areas: strong,
        skill_gaps: gaps,
        suggestions: suggestion_list,
        learning_path: path,
        recent_observations,
        recent_decisions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overall_score_matches_formula() {
        let cfg = ScoringConfig::default();
        let score = overall_score(80.0, 70.0, Some(60.0), Some(90.0), Some(85.0), &cfg);
        let expected = 0.4 * (0.6 * 80.0 + 0.4 * 70.0) + 0.3 * ((60.0 + 90.0) / 2.0) + 0.3 * 85.0;
        assert!((score - expected).abs() < 0.01);
    }

    #[test]
    fn missing_channels_default_per_config() {
        let cfg = ScoringConfig::default();
        let score = overall_score(80.0, 70.0, None, None, None, &cfg);
        let expected = 0.4 * (0.6 * 80.0 + 0.4 * 70.0) + 0.3 * cfg.missing_channel_default + 0.3 * cfg.missing_channel_default;
        assert!((score - expected).abs() < 0.01);
    }

    #[test]
    fn overall_score_stays_in_bounds() {
        let cfg = ScoringConfig::default();
        let score = overall_score(100.0, 100.0, Some(100.0), Some(100.0), Some(100.0), &cfg);
        assert!(score <= 100.0 + 1e-9);
    }
}
