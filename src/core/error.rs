use thiserror::Error;
use crate::models::{Factor, RiskCategory};

/// Configuration errors raised while building the engine
///
/// None of these can occur during `assess`; they are surfaced once at
/// start-up and the process should refuse to serve.
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error("Weights for {category} sum to {total}, expected 1.0")]
    WeightSum { category: RiskCategory, total: f64 },

    #[error("Invalid weight {weight} for factor {factor} in {category}")]
    InvalidWeight {
        category: RiskCategory,
        factor: Factor,
        weight: f64,
    },

    #[error("Factor {factor} listed more than once in {category}")]
    DuplicateFactor { category: RiskCategory, factor: Factor },

    #[error("Unknown risk factor '{0}'")]
    UnknownFactor(String),

    #[error("Unknown risk category '{0}'")]
    UnknownCategory(String),

    #[error("Invalid reference band for {attribute}: [{low}, {high}]")]
    InvalidBand {
        attribute: &'static str,
        low: f64,
        high: f64,
    },

    #[error("Invalid default {value} for {attribute}")]
    InvalidDefault { attribute: &'static str, value: f64 },

    #[error("Score {value} for {category} is outside [0, 1]")]
    ScoreOutOfRange { category: RiskCategory, value: f64 },

    #[error("Recommendation threshold {0} is outside [0, 1]")]
    InvalidThreshold(f64),
}
