use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{Assessment, Assessor};
use crate::models::{
    AssessRequest, AssessResponse, ErrorResponse, HealthResponse, PatientRecord, RawAssessRequest,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub assessor: Assessor,
}

/// Configure all assessment routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/assess", web::post().to(assess))
        .route("/assess/raw", web::post().to(assess_raw));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Assess a patient record with named fields
///
/// POST /api/v1/assess
///
/// Request body: the 22 record fields in camelCase, e.g.
/// ```json
/// {
///   "gender": 0, "ethnicity": 1, "education": 2, "bmi": 24.5,
///   "mmseScore": 27, "familyHistory": 0, ...
/// }
/// ```
async fn assess(
    state: web::Data<AppState>,
    req: web::Json<AssessRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for assess request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let record: PatientRecord = req.into_inner().into();
    let assessment = state.assessor.assess(&record);

    build_response(assessment)
}

/// Assess a raw positional value vector
///
/// POST /api/v1/assess/raw
///
/// Request body:
/// ```json
/// { "values": [0, 1, 2, 24.5, 0, 3, 4, 6, 7, 0, 0, 0, 0, 190, 27, 8, 0, 0, 0, 0, 0, 0] }
/// ```
///
/// The vector must hold exactly 22 values in form order; binary positions
/// must be 0 or 1.
async fn assess_raw(
    state: web::Data<AppState>,
    req: web::Json<RawAssessRequest>,
) -> impl Responder {
    let record = match PatientRecord::from_values(&req.values) {
        Ok(record) => record,
        Err(e) => {
            tracing::info!("Rejected raw assess request: {}", e);
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Invalid record".to_string(),
                message: e.to_string(),
                status_code: 400,
            });
        }
    };

    let assessment = state.assessor.assess(&record);

    build_response(assessment)
}

fn build_response(assessment: Assessment) -> HttpResponse {
    let response = AssessResponse {
        assessment_id: uuid::Uuid::new_v4().to_string(),
        label: assessment.prediction.label,
        probabilities: assessment.prediction.into(),
        risk_factors: assessment.risk_factors,
        recommendations: assessment.recommendations,
    };

    tracing::info!(
        "Returning assessment {}: label={:?}, {} risk factors",
        response.assessment_id,
        response.label,
        response.risk_factors.len()
    );

    HttpResponse::Ok().json(response)
}
