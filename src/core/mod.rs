// Core algorithm exports
pub mod aggregate;
pub mod engine;
pub mod error;
pub mod normalize;
pub mod recommend;

pub use aggregate::{CategoryScorer, CategoryScores, CategoryWeighting, ConstantScorer, RiskAggregator, WeightedScorer};
pub use engine::{RiskAssessor, RiskEngine, RULES_MODEL_VERSION};
pub use error::EngineError;
pub use normalize::{calculate_bmi, NormalizationTable, NormalizedFactors, Normalizer, ReferenceBand};
pub use recommend::{CatalogEntry, RecommendationCatalog};
