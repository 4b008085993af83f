// Resume Analysis Engine
// Implements: contact extraction, skill extraction, history inference, scoring, gap analysis,
// role and advice suggestions. Pure functions over the input text; randomness is injected.

pub mod certifications;
pub mod engine;
pub mod fields;
pub mod gaps;
pub mod handlers;
pub mod history;
pub mod patterns;
pub mod random;
pub mod recommendations;
pub mod roles;
pub mod scoring;
pub mod skills;
pub mod templates;

// Re-export the public API consumed by state and routes.
pub use engine::{AnalyzerSettings, HeuristicAnalyzer, ResumeAnalyzer, ScoreReuse};
