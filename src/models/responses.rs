use serde::{Deserialize, Serialize};
use crate::models::domain::{PredictionResult, RiskLabel};

/// Two-class probability pair on the wire
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Probabilities {
    pub negative: f64,
    pub positive: f64,
}

impl From<PredictionResult> for Probabilities {
    fn from(prediction: PredictionResult) -> Self {
        Self {
            negative: prediction.negative_probability(),
            positive: prediction.positive_probability(),
        }
    }
}

/// Response for the assess endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessResponse {
    #[serde(rename = "assessmentId")]
    pub assessment_id: String,
    pub label: RiskLabel,
    pub probabilities: Probabilities,
    #[serde(rename = "riskFactors")]
    pub risk_factors: Vec<String>,
    pub recommendations: Vec<String>,
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
