use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{ExerciseFrequency, HealthObservation, SmokingStatus};

/// Request to assess health risk
///
/// Ranges mirror the health-record schema. The engine itself clamps rather
/// than rejects, so these bounds only guard the HTTP boundary.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct AssessRiskRequest {
    #[validate(range(min = 0, max = 150))]
    #[serde(default)]
    pub age: Option<i32>,
    #[validate(range(min = 0.0, max = 300.0))]
    #[serde(default)]
    pub height: Option<f64>,
    #[validate(range(min = 0.0, max = 500.0))]
    #[serde(default)]
    pub weight: Option<f64>,
    #[validate(range(min = 0.0, max = 100.0))]
    #[serde(default)]
    pub bmi: Option<f64>,
    #[validate(range(min = 0, max = 300))]
    #[serde(alias = "blood_pressure_systolic", default)]
    pub systolic_bp: Option<i32>,
    #[validate(range(min = 0, max = 200))]
    #[serde(alias = "blood_pressure_diastolic", default)]
    pub diastolic_bp: Option<i32>,
    #[validate(range(min = 0.0, max = 1000.0))]
    #[serde(alias = "cholesterol_total", default)]
    pub cholesterol: Option<f64>,
    #[validate(range(min = 0.0, max = 500.0))]
    #[serde(default)]
    pub blood_sugar: Option<f64>,
    #[serde(default)]
    pub smoking_status: Option<SmokingStatus>,
    #[serde(default)]
    pub exercise_frequency: Option<ExerciseFrequency>,
}

impl From<AssessRiskRequest> for HealthObservation {
    fn from(req: AssessRiskRequest) -> Self {
        HealthObservation {
            bmi: req.bmi,
            height_cm: req.height,
            weight_kg: req.weight,
            systolic_bp: req.systolic_bp,
            diastolic_bp: req.diastolic_bp,
            cholesterol: req.cholesterol,
            blood_sugar: req.blood_sugar,
            age: req.age,
            smoking_status: req.smoking_status,
            exercise_frequency: req.exercise_frequency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_request_is_valid() {
        let req = AssessRiskRequest::default();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_out_of_range_age_rejected() {
        let req = AssessRiskRequest {
            age: Some(200),
            ..Default::default()
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("age"));
    }

    #[test]
    fn test_negative_weight_rejected() {
        let req = AssessRiskRequest {
            weight: Some(-5.0),
            ..Default::default()
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_health_record_aliases() {
        let json = r#"{"blood_pressure_systolic": 135, "cholesterol_total": 210.5}"#;
        let req: AssessRiskRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.systolic_bp, Some(135));
        assert_eq!(req.cholesterol, Some(210.5));
    }

    #[test]
    fn test_into_observation() {
        let req = AssessRiskRequest {
            height: Some(170.0),
            weight: Some(70.0),
            smoking_status: Some(SmokingStatus::Former),
            ..Default::default()
        };
        let obs: HealthObservation = req.into();

        assert_eq!(obs.height_cm, Some(170.0));
        assert_eq!(obs.weight_kg, Some(70.0));
        assert_eq!(obs.smoking_status, Some(SmokingStatus::Former));
    }
}
