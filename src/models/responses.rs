use serde::{Deserialize, Serialize};
use crate::models::domain::RiskProfile;

/// Response for the assess endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessRiskResponse {
    #[serde(flatten)]
    pub profile: RiskProfile,
    pub assessed_at: chrono::DateTime<chrono::Utc>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
