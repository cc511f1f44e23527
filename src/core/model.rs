use crate::core::scoring::{classify, risk_score};
use crate::models::{PatientRecord, PredictionResult, ScoringThresholds};

/// Interface for the prediction backend
///
/// The service currently ships with the point-threshold heuristic below. A
/// trained classifier loaded from storage would implement the same trait, so
/// swapping it in does not touch the assessor or the routes.
pub trait RiskModel: Send + Sync {
    fn predict(&self, record: &PatientRecord) -> PredictionResult;
}

/// Point-threshold heuristic standing in for a trained model
///
/// Deterministic and stateless: identical input always yields identical
/// output.
#[derive(Debug, Clone, Copy)]
pub struct HeuristicModel {
    thresholds: ScoringThresholds,
}

impl HeuristicModel {
    pub fn new(thresholds: ScoringThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &ScoringThresholds {
        &self.thresholds
    }
}

impl Default for HeuristicModel {
    fn default() -> Self {
        Self::new(ScoringThresholds::default())
    }
}

impl RiskModel for HeuristicModel {
    fn predict(&self, record: &PatientRecord) -> PredictionResult {
        let score = risk_score(record, &self.thresholds);
        classify(score, &self.thresholds)
    }
}
