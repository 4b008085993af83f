//! Axum route handlers for the Analysis API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::analysis::AnalysisResult;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub resume_text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub result: AnalysisResult,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Validates the résumé text and returns the full structured assessment.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let Json(request) = payload?;
    validate_resume_text(
        &request.resume_text,
        state.config.min_resume_chars,
        state.config.max_resume_bytes,
    )?;

    let result = state.analyzer.analyze(&request.resume_text).await?;

    Ok(Json(AnalyzeResponse {
        analysis_id: Uuid::new_v4(),
        analyzed_at: Utc::now(),
        result,
    }))
}

/// Rejects input the engine is not meant to see: blank, too short, or oversized.
pub fn validate_resume_text(text: &str, min_chars: usize, max_bytes: usize) -> Result<(), AppError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation("Please upload a resume first".to_string()));
    }
    if trimmed.chars().count() < min_chars {
        return Err(AppError::Validation(
            "Resume seems too short. Please upload a complete resume.".to_string(),
        ));
    }
    if text.len() > max_bytes {
        return Err(AppError::PayloadTooLarge(format!(
            "Resume text must be at most {max_bytes} bytes"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text_rejected() {
        let err = validate_resume_text("   \n\t ", 50, 1024).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("upload a resume")));
    }

    #[test]
    fn test_short_text_rejected_after_trim() {
        let text = format!("   {}   ", "a".repeat(49));
        let err = validate_resume_text(&text, 50, 1024).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("too short")));
    }

    #[test]
    fn test_oversized_text_rejected() {
        let text = "a".repeat(2048);
        let err = validate_resume_text(&text, 50, 1024).unwrap_err();
        assert!(matches!(err, AppError::PayloadTooLarge(_)));
    }

    #[test]
    fn test_minimum_length_accepted() {
        assert!(validate_resume_text(&"a".repeat(50), 50, 1024).is_ok());
    }
}
