use std::collections::HashSet;
use crate::core::aggregate::CategoryScores;
use crate::core::error::EngineError;
use crate::models::RiskCategory;

/// Score a category must strictly exceed before its advice is included
pub const DEFAULT_THRESHOLD: f64 = 0.7;

/// Advice attached to one risk category
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub category: RiskCategory,
    pub threshold: f64,
    pub recommendations: Vec<String>,
}

impl CatalogEntry {
    pub fn new(category: RiskCategory, threshold: f64, recommendations: &[&str]) -> Self {
        Self {
            category,
            threshold,
            recommendations: recommendations.iter().map(|r| r.to_string()).collect(),
        }
    }
}

/// Fixed table of category → (threshold, advice)
///
/// Respiratory has no entry and never contributes advice.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationCatalog {
    entries: Vec<CatalogEntry>,
}

impl RecommendationCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, EngineError> {
        for entry in &entries {
            if !(0.0..=1.0).contains(&entry.threshold) {
                return Err(EngineError::InvalidThreshold(entry.threshold));
            }
        }
        Ok(Self { entries })
    }

    /// Built-in catalog with every category gated at `threshold`
    pub fn standard(threshold: f64) -> Result<Self, EngineError> {
        Self::new(standard_entries(threshold))
    }
}

fn standard_entries(threshold: f64) -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::new(
            RiskCategory::Cardiovascular,
            threshold,
            &[
                "Schedule a cardiac check-up",
                "Monitor blood pressure daily",
                "Reduce salt intake",
                "Start a regular exercise program",
            ],
        ),
        CatalogEntry::new(
            RiskCategory::Diabetes,
            threshold,
            &[
                "Monitor blood sugar levels",
                "Consult a nutritionist",
                "Reduce sugar intake",
                "Exercise regularly",
            ],
        ),
        CatalogEntry::new(
            RiskCategory::Metabolic,
            threshold,
            &[
                "Maintain a balanced diet",
                "Stay hydrated",
                "Get regular sleep",
                "Manage stress levels",
            ],
        ),
        CatalogEntry::new(
            RiskCategory::Lifestyle,
            threshold,
            &[
                "Quit smoking",
                "Limit alcohol consumption",
                "Practice stress management",
                "Get regular health check-ups",
            ],
        ),
    ]
}

impl RecommendationCatalog {
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn entry(&self, category: RiskCategory) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.category == category)
    }

    /// Collect advice for every category above its threshold
    ///
    /// Duplicates are dropped, keeping the first occurrence. An empty list
    /// means nothing crossed a threshold.
    pub fn recommend(&self, scores: &CategoryScores) -> Vec<String> {
        let mut seen = HashSet::new();

        self.entries
            .iter()
            .filter(|entry| scores.get(entry.category) > entry.threshold)
            .flat_map(|entry| entry.recommendations.iter())
            .filter(|rec| seen.insert(*rec))
            .cloned()
            .collect()
    }
}

impl Default for RecommendationCatalog {
    fn default() -> Self {
        Self {
            entries: standard_entries(DEFAULT_THRESHOLD),
        }
    }
}
