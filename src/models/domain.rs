use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Smoking history as reported by the individual
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmokingStatus {
    #[default]
    Never,
    Former,
    Current,
}

impl SmokingStatus {
    /// Sub-risk contribution. Only active smoking counts.
    pub fn risk_value(self) -> f64 {
        match self {
            SmokingStatus::Current => 1.0,
            SmokingStatus::Never | SmokingStatus::Former => 0.0,
        }
    }
}

/// Self-reported exercise frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseFrequency {
    #[default]
    #[serde(rename = "none")]
    Sedentary,
    Occasional,
    Regular,
    VeryActive,
}

impl ExerciseFrequency {
    /// Sub-risk contribution, falling as activity rises
    pub fn risk_value(self) -> f64 {
        match self {
            ExerciseFrequency::Sedentary => 1.0,
            ExerciseFrequency::Occasional => 0.75,
            ExerciseFrequency::Regular => 0.5,
            ExerciseFrequency::VeryActive => 0.25,
        }
    }
}

/// Raw health and lifestyle attributes for one individual at one point in time
///
/// Every field is optional. Missing values are replaced with clinically
/// neutral defaults during normalization, so an empty observation is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthObservation {
    #[serde(default)]
    pub bmi: Option<f64>,
    /// Height in centimetres, used to derive BMI when `bmi` is absent
    #[serde(rename = "height", default)]
    pub height_cm: Option<f64>,
    /// Weight in kilograms, used to derive BMI when `bmi` is absent
    #[serde(rename = "weight", default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub systolic_bp: Option<i32>,
    #[serde(default)]
    pub diastolic_bp: Option<i32>,
    /// Total cholesterol, mg/dL
    #[serde(default)]
    pub cholesterol: Option<f64>,
    /// Fasting blood sugar, mg/dL
    #[serde(default)]
    pub blood_sugar: Option<f64>,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub smoking_status: Option<SmokingStatus>,
    #[serde(default)]
    pub exercise_frequency: Option<ExerciseFrequency>,
}

/// Risk dimensions reported in a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    Cardiovascular,
    Diabetes,
    Respiratory,
    Metabolic,
    Lifestyle,
}

impl RiskCategory {
    pub const ALL: [RiskCategory; 5] = [
        RiskCategory::Cardiovascular,
        RiskCategory::Diabetes,
        RiskCategory::Respiratory,
        RiskCategory::Metabolic,
        RiskCategory::Lifestyle,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RiskCategory::Cardiovascular => "cardiovascular",
            RiskCategory::Diabetes => "diabetes",
            RiskCategory::Respiratory => "respiratory",
            RiskCategory::Metabolic => "metabolic",
            RiskCategory::Lifestyle => "lifestyle",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RiskCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// Normalized sub-risk signals that category weightings draw from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    Bmi,
    BloodPressure,
    Cholesterol,
    BloodSugar,
    Age,
    Smoking,
    Exercise,
}

impl Factor {
    pub const ALL: [Factor; 7] = [
        Factor::Bmi,
        Factor::BloodPressure,
        Factor::Cholesterol,
        Factor::BloodSugar,
        Factor::Age,
        Factor::Smoking,
        Factor::Exercise,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Factor::Bmi => "bmi",
            Factor::BloodPressure => "blood_pressure",
            Factor::Cholesterol => "cholesterol",
            Factor::BloodSugar => "blood_sugar",
            Factor::Age => "age",
            Factor::Smoking => "smoking",
            Factor::Exercise => "exercise",
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Factor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Factor::ALL
            .into_iter()
            .find(|factor| factor.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// Coarse banding of the overall risk score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RiskLevel {
    pub fn from_score(score: f64) -> Self {
        if score < 0.4 {
            RiskLevel::Low
        } else if score < 0.6 {
            RiskLevel::Medium
        } else if score < 0.8 {
            RiskLevel::High
        } else {
            RiskLevel::VeryHigh
        }
    }
}

/// Result of a single assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskProfile {
    pub overall_risk_score: f64,
    pub risk_level: RiskLevel,
    pub cardiovascular_risk: f64,
    pub diabetes_risk: f64,
    pub respiratory_risk: f64,
    pub metabolic_risk: f64,
    pub lifestyle_risk: f64,
    /// Factors sitting at the top of their reference band
    pub risk_factors: Vec<Factor>,
    pub recommendations: Vec<String>,
    pub model_version: String,
}

impl RiskProfile {
    pub fn category_score(&self, category: RiskCategory) -> f64 {
        match category {
            RiskCategory::Cardiovascular => self.cardiovascular_risk,
            RiskCategory::Diabetes => self.diabetes_risk,
            RiskCategory::Respiratory => self.respiratory_risk,
            RiskCategory::Metabolic => self.metabolic_risk,
            RiskCategory::Lifestyle => self.lifestyle_risk,
        }
    }
}
