use serde::{Deserialize, Serialize};

/// Where a contact field value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldSource {
    /// Matched verbatim in the résumé text.
    Extracted,
    /// Fabricated placeholder because no pattern matched.
    Synthesized,
}

/// A contact field value tagged with its provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedField {
    pub value: String,
    pub source: FieldSource,
}

impl ExtractedField {
    pub fn extracted(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            source: FieldSource::Extracted,
        }
    }

    pub fn synthesized(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            source: FieldSource::Synthesized,
        }
    }

    pub fn is_synthesized(&self) -> bool {
        self.source == FieldSource::Synthesized
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactProfile {
    pub name: ExtractedField,
    pub email: ExtractedField,
    pub phone: ExtractedField,
}

/// Templated work-history archetype selected by keyword trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub role: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institute: String,
    pub year: String,
}

/// Per-dimension contributions to the composite résumé score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub contact: i32,        // 0 – 15
    pub summary: i32,        // 0 – 10
    pub skills: i32,         // 5 – 20
    pub experience: i32,     // 5 – 25
    pub achievements: i32,   // 0 – 10
    pub education: i32,      // 0 – 10
    pub certifications: i32, // 0 – 5
    pub length: i32,         // 0 – 5
    pub short_text_penalty: i32,
    pub missing_experience_penalty: i32,
    pub jitter: i32, // -5 – 5
}

impl ScoreBreakdown {
    pub const MIN_SCORE: i32 = 25;
    pub const MAX_SCORE: i32 = 100;

    /// Unclamped sum of every term, penalties and jitter included.
    pub fn raw_total(&self) -> i32 {
        self.contact
            + self.summary
            + self.skills
            + self.experience
            + self.achievements
            + self.education
            + self.certifications
            + self.length
            + self.short_text_penalty
            + self.missing_experience_penalty
            + self.jitter
    }

    /// Final score, always within 25 – 100.
    pub fn total(&self) -> u8 {
        self.raw_total().clamp(Self::MIN_SCORE, Self::MAX_SCORE) as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreGrade {
    Excellent,
    Good,
    Average,
    NeedsWork,
}

impl ScoreGrade {
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= 85 => ScoreGrade::Excellent,
            s if s >= 70 => ScoreGrade::Good,
            s if s >= 50 => ScoreGrade::Average,
            _ => ScoreGrade::NeedsWork,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreGrade::Excellent => "Excellent",
            ScoreGrade::Good => "Good",
            ScoreGrade::Average => "Average",
            ScoreGrade::NeedsWork => "Needs Work",
        }
    }
}

/// Full structured assessment of a single résumé.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub contact: ContactProfile,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub certifications: Vec<String>,
    pub total_experience_years: u8, // 1 – 12
    pub resume_score: u8,           // 25 – 100
    pub score_grade: ScoreGrade,
    pub score_breakdown: ScoreBreakdown,
    pub missing_skills: Vec<String>,
    pub job_fit_roles: Vec<String>,
    /// Advice paragraphs separated by a blank line.
    pub recommendations: String,
}
