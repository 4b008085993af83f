use std::time::Duration;

use anyhow::{Context, Result};

use crate::analysis::{AnalyzerSettings, ScoreReuse};

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub analysis_latency_ms: u64,
    pub analysis_seed: Option<u64>,
    pub score_reuse: ScoreReuse,
    pub min_resume_chars: usize,
    pub max_resume_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", 8080).context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            analysis_latency_ms: parse_env("ANALYSIS_LATENCY_MS", 3000)
                .context("ANALYSIS_LATENCY_MS must be a non-negative integer")?,
            analysis_seed: optional_env("ANALYSIS_SEED")
                .map(|v| v.parse::<u64>())
                .transpose()
                .context("ANALYSIS_SEED must be an unsigned 64-bit integer")?,
            score_reuse: optional_env("SCORE_REUSE")
                .map(|v| v.parse::<ScoreReuse>())
                .transpose()?
                .unwrap_or_default(),
            min_resume_chars: parse_env("MIN_RESUME_CHARS", 50)
                .context("MIN_RESUME_CHARS must be a non-negative integer")?,
            max_resume_bytes: parse_env("MAX_RESUME_BYTES", 5 * 1024 * 1024)
                .context("MAX_RESUME_BYTES must be a non-negative integer")?,
        })
    }

    pub fn analyzer_settings(&self) -> AnalyzerSettings {
        AnalyzerSettings {
            latency: Duration::from_millis(self.analysis_latency_ms),
            seed: self.analysis_seed,
            reuse: self.score_reuse,
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Invalid value '{raw}' for environment variable '{key}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyzer_settings_follow_config() {
        let config = Config {
            port: 8080,
            rust_log: "info".to_string(),
            analysis_latency_ms: 250,
            analysis_seed: Some(9),
            score_reuse: ScoreReuse::PerStage,
            min_resume_chars: 50,
            max_resume_bytes: 1024,
        };
        let settings = config.analyzer_settings();
        assert_eq!(settings.latency, Duration::from_millis(250));
        assert_eq!(settings.seed, Some(9));
        assert_eq!(settings.reuse, ScoreReuse::PerStage);
    }

    #[test]
    fn test_parse_env_uses_default_when_unset() {
        let value: u64 = parse_env("RESUME_ANALYZER_TEST_UNSET_VARIABLE", 42).unwrap();
        assert_eq!(value, 42);
    }
}
