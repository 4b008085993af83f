//! Recommendation Generator — ordered improvement advice from score and content checks.

use crate::analysis::patterns::contains_any;
use crate::analysis::templates::{
    FEW_SKILLS_ADVICE, GENERAL_ADVICE, LOW_SCORE_ADVICE, MISSING_LEARNING_ADVICE,
    MISSING_PROJECTS_ADVICE, MISSING_SUMMARY_ADVICE, MODERATE_SCORE_ADVICE, PARAGRAPH_SEPARATOR,
};

const LOW_SCORE_THRESHOLD: u8 = 60;
const MODERATE_SCORE_THRESHOLD: u8 = 75;
const MIN_SKILLS_FOR_KEYWORD_MATCHING: usize = 6;

/// Advice paragraphs in rule order. General best practices are always last.
pub fn recommendation_paragraphs(text: &str, skill_count: usize, score: u8) -> Vec<&'static str> {
    let text_lower = text.to_lowercase();
    let mut paragraphs = Vec::new();

    if score < LOW_SCORE_THRESHOLD {
        paragraphs.extend_from_slice(LOW_SCORE_ADVICE);
    }
    if score < MODERATE_SCORE_THRESHOLD {
        paragraphs.extend_from_slice(MODERATE_SCORE_ADVICE);
    }
    if !contains_any(&text_lower, &["summary", "objective"]) {
        paragraphs.push(MISSING_SUMMARY_ADVICE);
    }
    if skill_count < MIN_SKILLS_FOR_KEYWORD_MATCHING {
        paragraphs.push(FEW_SKILLS_ADVICE);
    }
    if !text_lower.contains("project") {
        paragraphs.push(MISSING_PROJECTS_ADVICE);
    }
    if !contains_any(&text_lower, &["certification", "course"]) {
        paragraphs.push(MISSING_LEARNING_ADVICE);
    }

    paragraphs.extend_from_slice(GENERAL_ADVICE);
    paragraphs
}

/// Renders the advice as a single string, paragraphs separated by a blank line.
pub fn generate_recommendations(text: &str, skill_count: usize, score: u8) -> String {
    recommendation_paragraphs(text, skill_count, score).join(PARAGRAPH_SEPARATOR)
}
