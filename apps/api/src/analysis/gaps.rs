//! Gap Analyzer — suggests skills worth adding, given what was already extracted.

use crate::analysis::patterns::{TRENDING_SKILLS, WEB_SKILLS};
use crate::analysis::skills::has_skill;

pub const MAX_MISSING_SKILLS: usize = 6;

/// Personalized suggestions first, then trending skills not already covered. At most six.
///
/// A trending skill counts as covered when its lowercase label is a substring of any
/// extracted skill (so "API Development" covers "API Development" but "Testing" does not
/// cover "Testing Automation").
pub fn suggest_missing_skills(skills: &[String]) -> Vec<String> {
    let lowered: Vec<String> = skills.iter().map(|s| s.to_lowercase()).collect();

    let trending = TRENDING_SKILLS.iter().filter(|trend| {
        let trend_lower = trend.to_lowercase();
        !lowered.iter().any(|skill| skill.contains(&trend_lower))
    });

    personalized_suggestions(skills)
        .into_iter()
        .chain(trending.copied())
        .take(MAX_MISSING_SKILLS)
        .map(String::from)
        .collect()
}

fn personalized_suggestions(skills: &[String]) -> Vec<&'static str> {
    let mut suggestions = Vec::new();

    if has_skill(skills, "JavaScript") && !has_skill(skills, "TypeScript") {
        suggestions.push("TypeScript");
    }
    if has_skill(skills, "React") && !has_skill(skills, "Next.js") {
        suggestions.push("Next.js");
    }
    let has_web = WEB_SKILLS.iter().any(|web| has_skill(skills, web));
    if has_web && !has_skill(skills, "Testing") {
        suggestions.push("Unit Testing");
        suggestions.push("Test-Driven Development");
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::skills::extract_skills;

    fn owned(skills: &[&str]) -> Vec<String> {
        skills.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_trending_only_when_no_personalization() {
        let missing = suggest_missing_skills(&owned(&["Python", "SQL"]));
        assert_eq!(
            missing,
            vec![
                "Machine Learning",
                "AI/ML",
                "Data Science",
                "Cloud Computing",
                "DevOps",
                "Microservices"
            ]
        );
    }

    #[test]
    fn test_personalized_suggestions_come_first() {
        let missing = suggest_missing_skills(&owned(&["JavaScript", "React"]));
        assert_eq!(
            missing[..4],
            ["TypeScript", "Next.js", "Unit Testing", "Test-Driven Development"]
        );
        assert_eq!(missing.len(), MAX_MISSING_SKILLS);
    }

    #[test]
    fn test_testing_skill_suppresses_testing_suggestions() {
        let missing = suggest_missing_skills(&owned(&["React", "Testing"]));
        assert_eq!(missing[0], "Next.js");
        assert!(!missing.contains(&"Unit Testing".to_string()));
    }

    #[test]
    fn test_covered_trending_skill_is_removed() {
        let missing = suggest_missing_skills(&owned(&[
            "API Development",
            "Machine Learning",
            "AI/ML",
        ]));
        assert!(!missing.contains(&"API Development".to_string()));
        assert!(!missing.contains(&"Machine Learning".to_string()));
        assert_eq!(missing[0], "Data Science");
    }

    #[test]
    fn test_never_suggests_an_extracted_skill() {
        let texts = [
            "JavaScript TypeScript React api rest testing",
            "Python SQL Docker Kubernetes leadership",
            "HTML CSS Vue.js Node.js",
        ];
        for text in texts {
            let skills = extract_skills(text);
            let missing = suggest_missing_skills(&skills);
            for suggestion in &missing {
                assert!(!has_skill(&skills, suggestion), "{suggestion} already present");
            }
        }
    }
}
