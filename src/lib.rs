//! AlzDetect Risk - Risk assessment service for the AlzDetect screening app
//!
//! This library provides the risk scoring heuristic used by the AlzDetect
//! screening app: a deterministic point-threshold rule over a fixed-shape
//! patient record, plus the risk-factor listing and recommendation text
//! attached to each assessment.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{classify, risk_score, Assessment, Assessor, HeuristicModel, RiskModel};
pub use crate::models::{
    AssessRequest, AssessResponse, PatientRecord, PredictionResult, RecordError, RiskLabel,
    ScoringThresholds,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let thresholds = ScoringThresholds::default();
        let prediction = classify(0, &thresholds);
        assert_eq!(prediction.label, RiskLabel::Negative);
    }
}
