//! Role Recommender — maps skill families and seniority to job-title suggestions.

use crate::analysis::patterns::{
    GENERIC_ROLES, ROLE_BACKEND_SKILLS, ROLE_CLOUD_SKILLS, ROLE_DATA_SKILLS, ROLE_WEB_SKILLS,
};

pub const MAX_ROLES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillFamilies {
    pub web: bool,
    pub backend: bool,
    pub cloud: bool,
    pub data: bool,
}

impl SkillFamilies {
    /// Exact label membership, matching the dictionary spelling.
    pub fn detect(skills: &[String]) -> Self {
        let any_of = |family: &[&str]| skills.iter().any(|s| family.contains(&s.as_str()));
        Self {
            web: any_of(ROLE_WEB_SKILLS),
            backend: any_of(ROLE_BACKEND_SKILLS),
            cloud: any_of(ROLE_CLOUD_SKILLS),
            data: any_of(ROLE_DATA_SKILLS),
        }
    }
}

pub fn seniority_prefix(years: u8) -> &'static str {
    match years {
        y if y >= 5 => "Senior ",
        y if y >= 3 => "Mid-level ",
        _ => "Junior ",
    }
}

/// Up to four roles in fixed priority order; generic titles when no family matches.
pub fn suggest_job_roles(skills: &[String], years: u8) -> Vec<String> {
    let families = SkillFamilies::detect(skills);
    let prefix = seniority_prefix(years);

    let candidates = [
        (families.web && families.backend, "Full Stack Developer"),
        (families.web, "Frontend Developer"),
        (families.backend, "Backend Developer"),
        (families.cloud, "DevOps Engineer"),
        (families.data, "Data Analyst"),
    ];

    let roles: Vec<String> = candidates
        .iter()
        .filter(|(applies, _)| *applies)
        .map(|(_, title)| format!("{prefix}{title}"))
        .take(MAX_ROLES)
        .collect();

    if roles.is_empty() {
        return GENERIC_ROLES.iter().map(|r| r.to_string()).collect();
    }
    roles
}
