//! History Extractor — years-of-experience estimate and archetype-based work/education history.
//!
//! Entries are not parsed from the document. Trigger keywords select fixed archetypes.

use crate::analysis::patterns::{
    contains_any, count_occurrences, INTERN_KEYWORDS, JOB_TITLE_KEYWORDS, MANAGEMENT_KEYWORDS,
    SENIORITY_KEYWORDS,
};
use crate::analysis::random::{choose, RandomSource};
use crate::analysis::templates::{
    DEGREES, FULL_STACK_ARCHETYPE, GRADUATION_YEAR, INSTITUTES, INTERN_ARCHETYPE,
    SENIOR_ARCHETYPE,
};
use crate::models::analysis::{EducationEntry, ExperienceEntry};

pub const MIN_EXPERIENCE_YEARS: u8 = 1;
pub const MAX_EXPERIENCE_YEARS: u8 = 12;

const SENIORITY_POINTS: f64 = 3.0;
const MANAGEMENT_POINTS: f64 = 2.0;
const POINTS_PER_TITLE_MENTION: f64 = 1.5;
const MAX_TITLE_POINTS: f64 = 4.0;
const MAX_RANDOM_POINTS: f64 = 2.0;

/// Heuristic years-of-experience estimate in 1 – 12.
///
/// senior/lead +3, manager/architect +2, 1.5 per job-title mention (capped at 4),
/// plus uniform noise in [0, 2). Rounded, then clamped.
pub fn estimate_experience_years(text: &str, rng: &mut dyn RandomSource) -> u8 {
    let text_lower = text.to_lowercase();
    let mut years = 0.0_f64;

    if contains_any(&text_lower, SENIORITY_KEYWORDS) {
        years += SENIORITY_POINTS;
    }
    if contains_any(&text_lower, MANAGEMENT_KEYWORDS) {
        years += MANAGEMENT_POINTS;
    }

    let title_mentions = count_occurrences(&text_lower, JOB_TITLE_KEYWORDS);
    years += (title_mentions as f64 * POINTS_PER_TITLE_MENTION).min(MAX_TITLE_POINTS);

    years += rng.unit() * MAX_RANDOM_POINTS;

    (years.round() as i64).clamp(MIN_EXPERIENCE_YEARS as i64, MAX_EXPERIENCE_YEARS as i64) as u8
}

/// Selects experience archetypes. Always returns at least one entry.
pub fn extract_experience_entries(text: &str) -> Vec<ExperienceEntry> {
    let text_lower = text.to_lowercase();
    let mut entries = Vec::new();

    if contains_any(&text_lower, SENIORITY_KEYWORDS) {
        entries.push(SENIOR_ARCHETYPE.to_entry());
    }
    if contains_any(&text_lower, &["developer", "engineer"]) {
        entries.push(FULL_STACK_ARCHETYPE.to_entry());
    }
    if contains_any(&text_lower, INTERN_KEYWORDS) || entries.is_empty() {
        entries.push(INTERN_ARCHETYPE.to_entry());
    }

    entries
}

/// Always exactly one entry; degree and institute drawn independently.
pub fn extract_education_entries(rng: &mut dyn RandomSource) -> Vec<EducationEntry> {
    let degree = choose(rng, DEGREES).to_string();
    let institute = choose(rng, INSTITUTES).to_string();
    vec![EducationEntry {
        degree,
        institute,
        year: GRADUATION_YEAR.to_string(),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::random::{FixedRandom, StdRandom};

    fn no_noise() -> FixedRandom {
        FixedRandom::default()
    }

    #[test]
    fn test_years_floor_is_one() {
        assert_eq!(estimate_experience_years("gardening", &mut no_noise()), 1);
    }

    #[test]
    fn test_years_senior_manager_titles() {
        // 3 (senior) + 2 (manager) + min(2 * 1.5, 4) = 8
        let text = "Senior engineer, engineering manager";
        assert_eq!(estimate_experience_years(text, &mut no_noise()), 8);
    }

    #[test]
    fn test_title_points_are_capped() {
        // 5 mentions * 1.5 = 7.5 → capped at 4
        let text = "developer developer developer developer developer";
        assert_eq!(estimate_experience_years(text, &mut no_noise()), 4);
    }

    #[test]
    fn test_noise_rounds_up() {
        let mut rng = FixedRandom {
            unit: 0.9,
            ..Default::default()
        };
        // 0 + 1.8 → 2
        assert_eq!(estimate_experience_years("gardening", &mut rng), 2);
    }

    #[test]
    fn test_years_always_within_bounds() {
        let mut rng = StdRandom::from_entropy();
        let heavy = "senior lead manager architect developer engineer analyst consultant specialist";
        for text in ["", "intern", heavy] {
            for _ in 0..50 {
                let years = estimate_experience_years(text, &mut rng);
                assert!((MIN_EXPERIENCE_YEARS..=MAX_EXPERIENCE_YEARS).contains(&years));
            }
        }
    }

    #[test]
    fn test_intern_only_yields_intern_archetype() {
        let entries = extract_experience_entries("Summer intern at a small studio");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].role, "Software Development Intern");
    }

    #[test]
    fn test_intern_archetype_is_fallback() {
        let entries = extract_experience_entries("Nothing relevant here");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].company, "StartupXYZ");
    }

    #[test]
    fn test_senior_engineer_gets_two_archetypes() {
        let entries = extract_experience_entries("Senior Software Engineer");
        let roles: Vec<_> = entries.iter().map(|e| e.role.as_str()).collect();
        assert_eq!(roles, vec!["Senior Software Engineer", "Full Stack Developer"]);
    }

    #[test]
    fn test_education_is_single_entry() {
        let mut rng = FixedRandom {
            index: 2,
            ..Default::default()
        };
        let education = extract_education_entries(&mut rng);
        assert_eq!(education.len(), 1);
        assert_eq!(education[0].degree, "Bachelor of Engineering");
        assert_eq!(education[0].institute, "Delhi University");
        assert_eq!(education[0].year, "2020");
    }
}
