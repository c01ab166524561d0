//! Health Risk - normalized multi-category health risk scoring
//!
//! This library provides the rule-based engine that turns raw health and
//! lifestyle attributes into a risk profile with recommendations, plus the
//! thin HTTP layer that serves it.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{RiskAssessor, RiskEngine, EngineError, calculate_bmi};
pub use crate::models::{HealthObservation, RiskProfile, RiskCategory, RiskLevel, SmokingStatus, ExerciseFrequency};
