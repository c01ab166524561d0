use std::sync::Arc;
use crate::config::EngineSettings;
use crate::core::{
    aggregate::{CategoryScores, CategoryWeighting, RiskAggregator},
    error::EngineError,
    normalize::{NormalizationTable, Normalizer},
    recommend::RecommendationCatalog,
};
use crate::models::{Factor, HealthObservation, RiskCategory, RiskLevel, RiskProfile};

/// Version tag reported by the rule-based engine
pub const RULES_MODEL_VERSION: &str = "rules-v1";

/// Anything that can turn an observation into a risk profile
///
/// The HTTP layer holds one of these chosen at start-up, so a model-backed
/// scorer can replace the rule engine without touching callers.
pub trait RiskAssessor: Send + Sync {
    fn assess(&self, observation: &HealthObservation) -> RiskProfile;

    fn model_version(&self) -> &str;
}

/// Rule-based health risk engine
///
/// # Pipeline Stages
/// 1. Resolve defaults and normalize every attribute onto `[0, 1]`
/// 2. Score each category from the normalized factors
/// 3. Average the category scores into the overall score
/// 4. Collect recommendations for categories above threshold
///
/// Holds only read-only tables, so clones are cheap and can be shared
/// across threads freely.
#[derive(Debug, Clone, Default)]
pub struct RiskEngine {
    normalizer: Normalizer,
    aggregator: RiskAggregator,
    catalog: Arc<RecommendationCatalog>,
}

impl RiskEngine {
    pub fn new(
        normalizer: Normalizer,
        aggregator: RiskAggregator,
        catalog: RecommendationCatalog,
    ) -> Self {
        Self {
            normalizer,
            aggregator,
            catalog: Arc::new(catalog),
        }
    }

    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Build the engine from configuration, validating every table
    pub fn from_settings(settings: &EngineSettings) -> Result<Self, EngineError> {
        let normalizer = Normalizer::new(NormalizationTable::from(&settings.normalization))?;

        let mut weightings = Vec::with_capacity(settings.weights.len());
        for (category_name, table) in &settings.weights {
            let category: RiskCategory = category_name
                .parse()
                .map_err(EngineError::UnknownCategory)?;

            let weights = table
                .iter()
                .map(|(factor, weight)| {
                    factor
                        .parse::<Factor>()
                        .map(|f| (f, *weight))
                        .map_err(EngineError::UnknownFactor)
                })
                .collect::<Result<Vec<_>, _>>()?;

            weightings.push(CategoryWeighting::new(category, weights)?);
        }

        let aggregator = RiskAggregator::new(weightings, settings.placeholder_score)?;
        let catalog = RecommendationCatalog::standard(settings.recommendation_threshold)?;

        Ok(Self::new(normalizer, aggregator, catalog))
    }

    pub fn catalog(&self) -> &RecommendationCatalog {
        &self.catalog
    }

    /// Category scores without recommendations
    pub fn score(&self, observation: &HealthObservation) -> CategoryScores {
        let factors = self.normalizer.normalize(observation);
        self.aggregator.score(&factors)
    }

    /// Assess one observation
    ///
    /// Never fails: missing attributes use defaults and out-of-range values
    /// are clamped.
    pub fn assess(&self, observation: &HealthObservation) -> RiskProfile {
        let factors = self.normalizer.normalize(observation);
        let scores = self.aggregator.score(&factors);
        let overall = scores.overall();
        let recommendations = self.catalog.recommend(&scores);

        tracing::debug!(
            "Assessed observation: overall={:.3}, cardiovascular={:.3}, diabetes={:.3}, recommendations={}",
            overall,
            scores.cardiovascular,
            scores.diabetes,
            recommendations.len()
        );

        RiskProfile {
            overall_risk_score: overall,
            risk_level: RiskLevel::from_score(overall),
            cardiovascular_risk: scores.cardiovascular,
            diabetes_risk: scores.diabetes,
            respiratory_risk: scores.respiratory,
            metabolic_risk: scores.metabolic,
            lifestyle_risk: scores.lifestyle,
            risk_factors: factors.at_ceiling(),
            recommendations,
            model_version: RULES_MODEL_VERSION.to_string(),
        }
    }
}

impl RiskAssessor for RiskEngine {
    fn assess(&self, observation: &HealthObservation) -> RiskProfile {
        RiskEngine::assess(self, observation)
    }

    fn model_version(&self) -> &str {
        RULES_MODEL_VERSION
    }
}
