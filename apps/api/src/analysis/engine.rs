//! Analysis Orchestrator — runs every extractor in dependency order and assembles the result.
//!
//! `AppState` holds an `Arc<dyn ResumeAnalyzer>`; `HeuristicAnalyzer` is the keyword backend.
//! The pipeline itself is synchronous and CPU-bound, so it runs inside `spawn_blocking`
//! after the configured artificial latency.

use std::str::FromStr;
use std::time::Duration;

use anyhow::anyhow;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::analysis::certifications::extract_certifications;
use crate::analysis::fields::extract_contact;
use crate::analysis::gaps::suggest_missing_skills;
use crate::analysis::history::{
    estimate_experience_years, extract_education_entries, extract_experience_entries,
};
use crate::analysis::random::{RandomSource, StdRandom};
use crate::analysis::recommendations::generate_recommendations;
use crate::analysis::roles::suggest_job_roles;
use crate::analysis::scoring::{compute_breakdown, compute_score, ScoreInputs};
use crate::analysis::skills::extract_skills;
use crate::errors::AppError;
use crate::models::analysis::{AnalysisResult, ScoreGrade};

// ────────────────────────────────────────────────────────────────────────────
// Settings
// ────────────────────────────────────────────────────────────────────────────

/// How often the randomized signals (years of experience, score) are computed per analysis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreReuse {
    /// Compute once and thread the same values into every downstream stage.
    #[default]
    ComputeOnce,
    /// Recompute per consuming stage. Role seniority and advice may disagree with the
    /// reported years and score because each recomputation draws fresh randomness.
    PerStage,
}

impl FromStr for ScoreReuse {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compute_once" => Ok(ScoreReuse::ComputeOnce),
            "per_stage" => Ok(ScoreReuse::PerStage),
            other => Err(anyhow!(
                "unknown score reuse policy '{other}' (expected 'compute_once' or 'per_stage')"
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnalyzerSettings {
    /// Artificial delay before the pipeline runs. Has no effect on the result.
    pub latency: Duration,
    /// When set, every call is seeded with this value and becomes reproducible.
    pub seed: Option<u64>,
    pub reuse: ScoreReuse,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(3000),
            seed: None,
            reuse: ScoreReuse::ComputeOnce,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The analyzer trait. Callers must reject empty or too-short input before calling.
#[async_trait]
pub trait ResumeAnalyzer: Send + Sync {
    async fn analyze(&self, text: &str) -> Result<AnalysisResult, AppError>;
}

/// Keyword and template driven analyzer.
pub struct HeuristicAnalyzer {
    settings: AnalyzerSettings,
}

impl HeuristicAnalyzer {
    pub fn new(settings: AnalyzerSettings) -> Self {
        Self { settings }
    }

    fn random_source(&self) -> StdRandom {
        match self.settings.seed {
            Some(seed) => StdRandom::seeded(seed),
            None => StdRandom::from_entropy(),
        }
    }
}

#[async_trait]
impl ResumeAnalyzer for HeuristicAnalyzer {
    async fn analyze(&self, text: &str) -> Result<AnalysisResult, AppError> {
        tokio::time::sleep(self.settings.latency).await;

        let text = text.to_owned();
        let reuse = self.settings.reuse;
        let mut rng = self.random_source();

        let result = tokio::task::spawn_blocking(move || run_pipeline(&text, reuse, &mut rng))
            .await
            .map_err(|e| AppError::Internal(anyhow!("Resume analysis task failed: {e}")))?;

        info!(
            "Resume analyzed: score {} ({}), {} skills, {} years",
            result.resume_score,
            result.score_grade.label(),
            result.skills.len(),
            result.total_experience_years
        );
        Ok(result)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs every stage against `text`. All randomness is drawn from `rng`, in a fixed order.
pub fn run_pipeline(text: &str, reuse: ScoreReuse, rng: &mut dyn RandomSource) -> AnalysisResult {
    let contact = extract_contact(text, rng);
    let skills = extract_skills(text);
    let experience = extract_experience_entries(text);
    let education = extract_education_entries(rng);
    let certifications = extract_certifications(text);
    debug!(
        "Extracted {} skills, {} experience entries, {} certifications",
        skills.len(),
        experience.len(),
        certifications.len()
    );

    let years = estimate_experience_years(text, rng);
    let score_breakdown = compute_breakdown(
        text,
        ScoreInputs {
            skill_count: skills.len(),
            experience_years: years,
            certification_count: certifications.len(),
        },
        rng,
    );
    let score = score_breakdown.total();
    debug!("Estimated {years} years; score breakdown {score_breakdown:?} → {score}");

    let (role_years, advice_score) = match reuse {
        ScoreReuse::ComputeOnce => (years, score),
        ScoreReuse::PerStage => (
            estimate_experience_years(text, rng),
            compute_score(text, rng),
        ),
    };

    let missing_skills = suggest_missing_skills(&skills);
    let job_fit_roles = suggest_job_roles(&skills, role_years);
    let recommendations = generate_recommendations(text, skills.len(), advice_score);

    AnalysisResult {
        contact,
        skills,
        experience,
        education,
        certifications,
        total_experience_years: years,
        resume_score: score,
        score_grade: ScoreGrade::from_score(score),
        score_breakdown,
        missing_skills,
        job_fit_roles,
        recommendations,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
