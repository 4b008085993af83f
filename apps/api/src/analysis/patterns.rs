//! Pattern Library — compiled regexes and keyword dictionaries shared by every extractor.
//!
//! Read-only after first use. Nothing here holds logic beyond table lookups.

use once_cell::sync::Lazy;
use regex::Regex;

// ────────────────────────────────────────────────────────────────────────────
// Contact patterns
// ────────────────────────────────────────────────────────────────────────────

/// Name patterns in priority order: leading capitalized pair, `Name:` label, all-caps line.
pub static NAME_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?m)^([A-Z][a-z]+ [A-Z][a-z]+)",
        r"(?i)Name:?\s*([A-Z][a-z]+ [A-Z][a-z]+)",
        r"(?m)^([A-Z][A-Z\s]+)$",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("name pattern must compile"))
    .collect()
});

pub static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
        .expect("email pattern must compile")
});

/// Phone patterns in priority order: Indian 10-digit, then generic international.
pub static PHONE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(\+91[-.\s]?)?\d{10}",
        r"(\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("phone pattern must compile"))
    .collect()
});

/// Looser phone shape used only for the contact sub-score.
pub static PHONE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{3}[-.\s]?\d{3}[-.\s]?\d{4}").expect("phone shape must compile"));

// ────────────────────────────────────────────────────────────────────────────
// Skill dictionaries
// ────────────────────────────────────────────────────────────────────────────

pub const PROGRAMMING_SKILLS: &[&str] = &[
    "JavaScript", "Python", "Java", "C++", "C#", "PHP", "Ruby", "Go", "Swift", "Kotlin",
    "TypeScript", "Rust",
];

pub const WEB_SKILLS: &[&str] = &[
    "React", "Angular", "Vue.js", "Node.js", "Express", "HTML", "CSS", "SASS", "Bootstrap",
    "Tailwind",
];

pub const DATABASE_SKILLS: &[&str] = &[
    "SQL", "MongoDB", "PostgreSQL", "MySQL", "Redis", "Firebase", "DynamoDB",
];

pub const CLOUD_SKILLS: &[&str] = &[
    "AWS", "Azure", "Google Cloud", "Docker", "Kubernetes", "Jenkins", "CI/CD",
];

pub const TOOL_SKILLS: &[&str] = &["Git", "Linux", "Agile", "Scrum", "Jira", "Figma", "Photoshop"];

pub const SOFT_SKILLS: &[&str] = &[
    "Leadership", "Communication", "Problem Solving", "Team Management", "Project Management",
];

/// Categories in scan order. Extraction order follows this table.
pub const SKILL_CATEGORIES: &[(&str, &[&str])] = &[
    ("programming", PROGRAMMING_SKILLS),
    ("web", WEB_SKILLS),
    ("database", DATABASE_SKILLS),
    ("cloud", CLOUD_SKILLS),
    ("tools", TOOL_SKILLS),
    ("soft", SOFT_SKILLS),
];

/// (trigger substrings, skills added when any trigger is present)
pub const INFERRED_SKILL_RULES: &[(&[&str], &[&str])] = &[
    (&["manage", "lead"], &["Leadership", "Team Management"]),
    (&["api", "rest"], &["API Development", "RESTful Services"]),
    (&["test", "quality"], &["Testing", "Quality Assurance"]),
];

pub const DEFAULT_SKILLS: &[&str] = &["JavaScript", "HTML", "CSS", "Problem Solving"];

pub const TRENDING_SKILLS: &[&str] = &[
    "Machine Learning",
    "AI/ML",
    "Data Science",
    "Cloud Computing",
    "DevOps",
    "Microservices",
    "GraphQL",
    "Blockchain",
    "Cybersecurity",
    "Mobile Development",
    "UI/UX Design",
    "API Development",
    "Testing Automation",
    "Performance Optimization",
];

// ────────────────────────────────────────────────────────────────────────────
// Role flags
// ────────────────────────────────────────────────────────────────────────────

pub const ROLE_WEB_SKILLS: &[&str] = &["React", "Angular", "Vue.js", "HTML", "CSS", "JavaScript"];
pub const ROLE_BACKEND_SKILLS: &[&str] = &["Node.js", "Python", "Java", "PHP", "SQL"];
pub const ROLE_CLOUD_SKILLS: &[&str] = &["AWS", "Azure", "Docker", "Kubernetes"];
pub const ROLE_DATA_SKILLS: &[&str] = &["Python", "SQL", "MongoDB", "Analytics"];

pub const GENERIC_ROLES: &[&str] = &["Software Developer", "Web Developer", "IT Specialist"];

// ────────────────────────────────────────────────────────────────────────────
// Scoring and history keywords
// ────────────────────────────────────────────────────────────────────────────

pub const SENIORITY_KEYWORDS: &[&str] = &["senior", "lead"];
pub const MANAGEMENT_KEYWORDS: &[&str] = &["manager", "architect"];
pub const JOB_TITLE_KEYWORDS: &[&str] = &["developer", "engineer", "analyst", "consultant", "specialist"];
pub const INTERN_KEYWORDS: &[&str] = &["intern"];

pub const ACHIEVEMENT_KEYWORDS: &[&str] = &[
    "increased", "improved", "reduced", "achieved", "delivered", "managed", "%", "$", "million",
    "thousand",
];

pub const PROFESSIONAL_LINK_KEYWORDS: &[&str] = &["linkedin", "github"];
pub const SUMMARY_KEYWORDS: &[&str] = &["summary", "objective", "profile"];
pub const ADVANCED_DEGREE_KEYWORDS: &[&str] = &["bachelor", "master", "phd"];
pub const BASIC_DEGREE_KEYWORDS: &[&str] = &["degree", "diploma"];
pub const EXPERIENCE_SECTION_KEYWORDS: &[&str] = &["experience", "work"];

pub const KNOWN_CERTIFICATIONS: &[&str] = &[
    "AWS Certified Developer",
    "Google Cloud Professional",
    "Microsoft Azure Fundamentals",
    "Certified Scrum Master",
    "Oracle Certified Professional",
    "CompTIA Security+",
];

// ────────────────────────────────────────────────────────────────────────────
// Text helpers over lowercased input
// ────────────────────────────────────────────────────────────────────────────

/// True when any keyword occurs in `text_lower`. Keywords must already be lowercase.
pub fn contains_any(text_lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text_lower.contains(k))
}

/// Sum of non-overlapping substring occurrences of every keyword.
pub fn count_occurrences(text_lower: &str, keywords: &[&str]) -> usize {
    keywords.iter().map(|k| text_lower.matches(k).count()).sum()
}
