// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{HealthObservation, SmokingStatus, ExerciseFrequency, RiskCategory, Factor, RiskLevel, RiskProfile};
pub use requests::AssessRiskRequest;
pub use responses::{AssessRiskResponse, HealthResponse, ErrorResponse};
