use std::fmt;
use std::sync::Arc;
use crate::core::error::EngineError;
use crate::core::normalize::NormalizedFactors;
use crate::models::{Factor, RiskCategory};

/// Allowed drift when checking that a weight table sums to 1.0
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Score used for categories that have no factor definitions yet
pub const PLACEHOLDER_SCORE: f64 = 0.5;

/// Weight table for one risk category
///
/// Weights are non-negative and sum to 1.0, so a weighted sum of factors in
/// `[0, 1]` stays in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryWeighting {
    category: RiskCategory,
    weights: Vec<(Factor, f64)>,
}

impl CategoryWeighting {
    pub fn new<I>(category: RiskCategory, weights: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = (Factor, f64)>,
    {
        let mut table: Vec<(Factor, f64)> = Vec::new();

        for (factor, weight) in weights {
            if !weight.is_finite() || weight < 0.0 {
                return Err(EngineError::InvalidWeight { category, factor, weight });
            }
            if table.iter().any(|(existing, _)| *existing == factor) {
                return Err(EngineError::DuplicateFactor { category, factor });
            }
            table.push((factor, weight));
        }

        let total: f64 = table.iter().map(|(_, w)| w).sum();
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(EngineError::WeightSum { category, total });
        }

        Ok(Self { category, weights: table })
    }

    /// Cardiovascular weights: bmi 0.2, blood pressure 0.3, cholesterol 0.2,
    /// smoking 0.2, exercise 0.1
    pub fn cardiovascular() -> Self {
        Self {
            category: RiskCategory::Cardiovascular,
            weights: vec![
                (Factor::Bmi, 0.2),
                (Factor::BloodPressure, 0.3),
                (Factor::Cholesterol, 0.2),
                (Factor::Smoking, 0.2),
                (Factor::Exercise, 0.1),
            ],
        }
    }

    /// Diabetes weights: bmi 0.3, blood sugar 0.3, age 0.2, exercise 0.2
    pub fn diabetes() -> Self {
        Self {
            category: RiskCategory::Diabetes,
            weights: vec![
                (Factor::Bmi, 0.3),
                (Factor::BloodSugar, 0.3),
                (Factor::Age, 0.2),
                (Factor::Exercise, 0.2),
            ],
        }
    }

    pub fn category(&self) -> RiskCategory {
        self.category
    }

    pub fn weights(&self) -> &[(Factor, f64)] {
        &self.weights
    }

    pub fn total(&self) -> f64 {
        self.weights.iter().map(|(_, w)| w).sum()
    }
}

/// Strategy for scoring a single risk category
pub trait CategoryScorer: fmt::Debug + Send + Sync {
    fn category(&self) -> RiskCategory;

    /// Score in `[0, 1]`
    fn score(&self, factors: &NormalizedFactors) -> f64;
}

/// Weighted sum of normalized factors
#[derive(Debug, Clone)]
pub struct WeightedScorer {
    weighting: CategoryWeighting,
}

impl WeightedScorer {
    pub fn new(weighting: CategoryWeighting) -> Self {
        Self { weighting }
    }

    pub fn weighting(&self) -> &CategoryWeighting {
        &self.weighting
    }
}

impl CategoryScorer for WeightedScorer {
    fn category(&self) -> RiskCategory {
        self.weighting.category
    }

    fn score(&self, factors: &NormalizedFactors) -> f64 {
        let total: f64 = self
            .weighting
            .weights
            .iter()
            .map(|(factor, weight)| factors.get(*factor) * weight)
            .sum();

        total.clamp(0.0, 1.0)
    }
}

/// Fixed score for a category whose factors are not defined yet
///
/// Respiratory, metabolic and lifestyle risk use this until real factor
/// tables exist. Swap in another `CategoryScorer` to replace it.
#[derive(Debug, Clone, Copy)]
pub struct ConstantScorer {
    category: RiskCategory,
    value: f64,
}

impl ConstantScorer {
    pub fn new(category: RiskCategory, value: f64) -> Result<Self, EngineError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(EngineError::ScoreOutOfRange { category, value });
        }
        Ok(Self { category, value })
    }

    pub fn placeholder(category: RiskCategory) -> Self {
        Self {
            category,
            value: PLACEHOLDER_SCORE,
        }
    }
}

impl CategoryScorer for ConstantScorer {
    fn category(&self) -> RiskCategory {
        self.category
    }

    fn score(&self, _factors: &NormalizedFactors) -> f64 {
        self.value
    }
}

/// Per-category scores for one observation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryScores {
    pub cardiovascular: f64,
    pub diabetes: f64,
    pub respiratory: f64,
    pub metabolic: f64,
    pub lifestyle: f64,
}

impl CategoryScores {
    pub fn get(&self, category: RiskCategory) -> f64 {
        match category {
            RiskCategory::Cardiovascular => self.cardiovascular,
            RiskCategory::Diabetes => self.diabetes,
            RiskCategory::Respiratory => self.respiratory,
            RiskCategory::Metabolic => self.metabolic,
            RiskCategory::Lifestyle => self.lifestyle,
        }
    }

    /// Mean of the five category scores
    pub fn overall(&self) -> f64 {
        let sum: f64 = RiskCategory::ALL.iter().map(|c| self.get(*c)).sum();
        sum / RiskCategory::ALL.len() as f64
    }
}

/// Holds one scorer per risk category
#[derive(Debug, Clone)]
pub struct RiskAggregator {
    cardiovascular: Arc<dyn CategoryScorer>,
    diabetes: Arc<dyn CategoryScorer>,
    respiratory: Arc<dyn CategoryScorer>,
    metabolic: Arc<dyn CategoryScorer>,
    lifestyle: Arc<dyn CategoryScorer>,
}

impl RiskAggregator {
    /// Weighted cardiovascular and diabetes scoring, placeholders elsewhere
    pub fn with_default_weights() -> Self {
        Self {
            cardiovascular: Arc::new(WeightedScorer::new(CategoryWeighting::cardiovascular())),
            diabetes: Arc::new(WeightedScorer::new(CategoryWeighting::diabetes())),
            respiratory: Arc::new(ConstantScorer::placeholder(RiskCategory::Respiratory)),
            metabolic: Arc::new(ConstantScorer::placeholder(RiskCategory::Metabolic)),
            lifestyle: Arc::new(ConstantScorer::placeholder(RiskCategory::Lifestyle)),
        }
    }

    /// Build from explicit weight tables
    ///
    /// Categories without a table keep their built-in scorer; the three
    /// placeholder categories report `placeholder` unless a table is given.
    pub fn new<I>(weightings: I, placeholder: f64) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = CategoryWeighting>,
    {
        let mut aggregator = Self::with_default_weights();

        for category in [
            RiskCategory::Respiratory,
            RiskCategory::Metabolic,
            RiskCategory::Lifestyle,
        ] {
            aggregator = aggregator.with_scorer(Arc::new(ConstantScorer::new(category, placeholder)?));
        }

        for weighting in weightings {
            aggregator = aggregator.with_scorer(Arc::new(WeightedScorer::new(weighting)));
        }

        Ok(aggregator)
    }

    /// Replace the scorer for the category it reports
    pub fn with_scorer(mut self, scorer: Arc<dyn CategoryScorer>) -> Self {
        match scorer.category() {
            RiskCategory::Cardiovascular => self.cardiovascular = scorer,
            RiskCategory::Diabetes => self.diabetes = scorer,
            RiskCategory::Respiratory => self.respiratory = scorer,
            RiskCategory::Metabolic => self.metabolic = scorer,
            RiskCategory::Lifestyle => self.lifestyle = scorer,
        }
        self
    }

    pub fn score(&self, factors: &NormalizedFactors) -> CategoryScores {
        CategoryScores {
            cardiovascular: self.cardiovascular.score(factors),
            diabetes: self.diabetes.score(factors),
            respiratory: self.respiratory.score(factors),
            metabolic: self.metabolic.score(factors),
            lifestyle: self.lifestyle.score(factors),
        }
    }
}

impl Default for RiskAggregator {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
