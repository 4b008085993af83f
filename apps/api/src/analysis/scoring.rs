//! Scoring Engine — composite 25 – 100 résumé score from weighted sub-scores.
//!
//! Tiered dimensions are expressed as ordered `(threshold, points)` ladders; the first
//! threshold the value reaches wins, otherwise the ladder's floor applies.

use crate::analysis::certifications::extract_certifications;
use crate::analysis::history::estimate_experience_years;
use crate::analysis::patterns::{
    contains_any, count_occurrences, ACHIEVEMENT_KEYWORDS, ADVANCED_DEGREE_KEYWORDS,
    BASIC_DEGREE_KEYWORDS, EXPERIENCE_SECTION_KEYWORDS, PHONE_SHAPE, PROFESSIONAL_LINK_KEYWORDS,
    SUMMARY_KEYWORDS,
};
use crate::analysis::random::RandomSource;
use crate::analysis::skills::extract_skills;
use crate::models::analysis::ScoreBreakdown;

/// Ordered ladder of `(minimum value, points)` with a floor for values below every step.
pub struct TierLadder {
    pub steps: &'static [(usize, i32)],
    pub floor: i32,
}

impl TierLadder {
    pub fn points(&self, value: usize) -> i32 {
        self.steps
            .iter()
            .find(|(threshold, _)| value >= *threshold)
            .map(|(_, points)| *points)
            .unwrap_or(self.floor)
    }
}

pub const SKILL_LADDER: TierLadder = TierLadder {
    steps: &[(8, 20), (5, 15), (3, 10)],
    floor: 5,
};

pub const EXPERIENCE_LADDER: TierLadder = TierLadder {
    steps: &[(5, 25), (3, 20), (1, 15)],
    floor: 5,
};

pub const ACHIEVEMENT_LADDER: TierLadder = TierLadder {
    steps: &[(3, 10), (1, 5)],
    floor: 0,
};

const CONTACT_POINTS_EACH: i32 = 5;
const SUMMARY_POINTS: i32 = 10;
const ADVANCED_DEGREE_POINTS: i32 = 10;
const BASIC_DEGREE_POINTS: i32 = 7;
const CERTIFICATION_POINTS: i32 = 5;
const IDEAL_LENGTH_POINTS: i32 = 5;
const ACCEPTABLE_LENGTH_POINTS: i32 = 3;
const IDEAL_WORD_RANGE: std::ops::RangeInclusive<usize> = 300..=800;
const ACCEPTABLE_MIN_WORDS: usize = 200;
const SHORT_TEXT_CHARS: usize = 200;
const SHORT_TEXT_PENALTY: i32 = -10;
const MISSING_EXPERIENCE_PENALTY: i32 = -5;
pub const MAX_JITTER: i32 = 5;

/// Signals already extracted elsewhere in the pipeline, fed into the score.
#[derive(Debug, Clone, Copy)]
pub struct ScoreInputs {
    pub skill_count: usize,
    pub experience_years: u8,
    pub certification_count: usize,
}

/// Computes every sub-score, both penalties and one jitter draw.
pub fn compute_breakdown(
    text: &str,
    inputs: ScoreInputs,
    rng: &mut dyn RandomSource,
) -> ScoreBreakdown {
    let text_lower = text.to_lowercase();

    ScoreBreakdown {
        contact: contact_points(text, &text_lower),
        summary: if contains_any(&text_lower, SUMMARY_KEYWORDS) {
            SUMMARY_POINTS
        } else {
            0
        },
        skills: SKILL_LADDER.points(inputs.skill_count),
        experience: EXPERIENCE_LADDER.points(inputs.experience_years as usize),
        achievements: ACHIEVEMENT_LADDER.points(count_occurrences(&text_lower, ACHIEVEMENT_KEYWORDS)),
        education: education_points(&text_lower),
        certifications: if inputs.certification_count > 0 {
            CERTIFICATION_POINTS
        } else {
            0
        },
        length: length_points(text.split_whitespace().count()),
        short_text_penalty: if text.chars().count() < SHORT_TEXT_CHARS {
            SHORT_TEXT_PENALTY
        } else {
            0
        },
        missing_experience_penalty: if contains_any(&text_lower, EXPERIENCE_SECTION_KEYWORDS) {
            0
        } else {
            MISSING_EXPERIENCE_PENALTY
        },
        jitter: rng.int_in(-MAX_JITTER, MAX_JITTER),
    }
}

/// Self-contained score: re-derives skills, years and certifications from the text.
///
/// Each call draws fresh randomness, so repeated calls on the same text may differ.
pub fn compute_score(text: &str, rng: &mut dyn RandomSource) -> u8 {
    let inputs = ScoreInputs {
        skill_count: extract_skills(text).len(),
        experience_years: estimate_experience_years(text, rng),
        certification_count: extract_certifications(text).len(),
    };
    compute_breakdown(text, inputs, rng).total()
}

fn contact_points(text: &str, text_lower: &str) -> i32 {
    let checks = [
        text.contains('@'),
        PHONE_SHAPE.is_match(text),
        contains_any(text_lower, PROFESSIONAL_LINK_KEYWORDS),
    ];
    checks.iter().filter(|hit| **hit).count() as i32 * CONTACT_POINTS_EACH
}

fn education_points(text_lower: &str) -> i32 {
    if contains_any(text_lower, ADVANCED_DEGREE_KEYWORDS) {
        ADVANCED_DEGREE_POINTS
    } else if contains_any(text_lower, BASIC_DEGREE_KEYWORDS) {
        BASIC_DEGREE_POINTS
    } else {
        0
    }
}

fn length_points(word_count: usize) -> i32 {
    if IDEAL_WORD_RANGE.contains(&word_count) {
        IDEAL_LENGTH_POINTS
    } else if word_count >= ACCEPTABLE_MIN_WORDS {
        ACCEPTABLE_LENGTH_POINTS
    } else {
        0
    }
}
