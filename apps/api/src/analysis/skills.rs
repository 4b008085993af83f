//! Skill Extractor — dictionary scan plus contextual inference.

use std::collections::HashSet;

use crate::analysis::patterns::{
    contains_any, DEFAULT_SKILLS, INFERRED_SKILL_RULES, SKILL_CATEGORIES,
};

/// Maximum number of skills reported for a résumé.
pub const MAX_SKILLS: usize = 12;

/// Extracts up to 12 skills in first-seen order.
///
/// Algorithm:
/// 1. Every dictionary skill appearing as a case-insensitive substring, in category order
/// 2. Inferred skills from trigger words (manage/lead, api/rest, test/quality)
/// 3. Case-insensitive dedup, truncate to 12
/// 4. Empty result → fixed default list
pub fn extract_skills(text: &str) -> Vec<String> {
    let text_lower = text.to_lowercase();

    let found = SKILL_CATEGORIES
        .iter()
        .flat_map(|(_, skills)| skills.iter())
        .filter(|skill| text_lower.contains(&skill.to_lowercase()));

    let inferred = INFERRED_SKILL_RULES
        .iter()
        .filter(|(triggers, _)| contains_any(&text_lower, triggers))
        .flat_map(|(_, skills)| skills.iter());

    let mut seen = HashSet::new();
    let skills: Vec<String> = found
        .chain(inferred)
        .filter(|skill| seen.insert(skill.to_lowercase()))
        .take(MAX_SKILLS)
        .map(|skill| skill.to_string())
        .collect();

    if skills.is_empty() {
        return DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect();
    }
    skills
}

/// Case-insensitive membership check against an extracted skill list.
pub fn has_skill(skills: &[String], label: &str) -> bool {
    skills.iter().any(|s| s.eq_ignore_ascii_case(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_order_is_preserved() {
        let skills = extract_skills("Worked with docker, python and React");
        assert_eq!(skills, vec!["Python", "React", "Docker"]);
    }

    #[test]
    fn test_inferred_skills_are_appended() {
        let skills = extract_skills("Built a REST api in Rust");
        assert_eq!(
            skills,
            vec!["Rust", "API Development", "RESTful Services"]
        );
    }

    #[test]
    fn test_inferred_duplicates_collapse() {
        // "Leadership" is a dictionary hit; the lead/manage rule must not repeat it
        let skills = extract_skills("Leadership and people management");
        assert_eq!(skills, vec!["Leadership", "Team Management"]);
    }

    #[test]
    fn test_substring_semantics_catch_nested_labels() {
        // "JavaScript" contains "Java"; both dictionary entries match
        let skills = extract_skills("JavaScript");
        assert_eq!(skills, vec!["JavaScript", "Java"]);
    }

    #[test]
    fn test_capped_at_twelve() {
        let text = "JavaScript Python C++ C# PHP Ruby Swift Kotlin TypeScript Rust React Angular \
                    Docker Kubernetes";
        let skills = extract_skills(text);
        assert_eq!(skills.len(), MAX_SKILLS);
    }

    #[test]
    fn test_default_when_nothing_found() {
        let skills = extract_skills("xyz");
        assert_eq!(skills, vec!["JavaScript", "HTML", "CSS", "Problem Solving"]);
    }

    #[test]
    fn test_every_verbatim_term_is_reported() {
        let text = "Agile Scrum Jira Figma Linux";
        let skills = extract_skills(text);
        for term in ["Agile", "Scrum", "Jira", "Figma", "Linux"] {
            assert!(has_skill(&skills, term), "missing {term}");
        }
    }

    #[test]
    fn test_output_is_unique_case_insensitively() {
        let skills = extract_skills("lead manager leadership testing quality test api rest");
        let lowered: HashSet<_> = skills.iter().map(|s| s.to_lowercase()).collect();
        assert_eq!(lowered.len(), skills.len());
    }
}
