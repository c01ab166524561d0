use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::RiskAssessor;
use crate::models::{AssessRiskRequest, AssessRiskResponse, ErrorResponse, HealthObservation, HealthResponse};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub assessor: Arc<dyn RiskAssessor>,
}

/// Configure all assessment-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/risk/assess", web::post().to(assess_risk));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Assess health risk endpoint
///
/// POST /api/v1/risk/assess
///
/// Request body (every field optional):
/// ```json
/// {
///   "age": 45,
///   "height": 175.0,
///   "weight": 82.0,
///   "bmi": 26.8,
///   "systolic_bp": 130,
///   "diastolic_bp": 85,
///   "cholesterol": 210.0,
///   "blood_sugar": 98.0,
///   "smoking_status": "never|former|current",
///   "exercise_frequency": "none|occasional|regular|very_active"
/// }
/// ```
async fn assess_risk(
    state: web::Data<AppState>,
    req: web::Json<AssessRiskRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for assess request: field_errors={:?}", errors);
        return HttpResponse::UnprocessableEntity().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 422,
        });
    }

    let observation = HealthObservation::from(req.into_inner());
    let profile = state.assessor.assess(&observation);

    tracing::info!(
        "Assessment complete: overall={:.3}, level={:?}, recommendations={}, model={}",
        profile.overall_risk_score,
        profile.risk_level,
        profile.recommendations.len(),
        state.assessor.model_version()
    );

    HttpResponse::Ok().json(AssessRiskResponse {
        profile,
        assessed_at: chrono::Utc::now(),
    })
}
