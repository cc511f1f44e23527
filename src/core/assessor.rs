use std::sync::Arc;

use crate::core::factors::{identify_risk_factors, recommendations};
use crate::core::model::{HeuristicModel, RiskModel};
use crate::models::{PatientRecord, PredictionResult, ScoringThresholds};

/// Result of a full assessment
#[derive(Debug, Clone)]
pub struct Assessment {
    pub prediction: PredictionResult,
    pub risk_factors: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Main assessment orchestrator
///
/// Runs the prediction backend over a record, then derives the risk-factor
/// listing and attaches the fixed recommendation text. Stateless per request:
/// each record is consumed once and nothing is retained between calls.
#[derive(Clone)]
pub struct Assessor {
    model: Arc<dyn RiskModel>,
}

impl Assessor {
    pub fn new(model: Arc<dyn RiskModel>) -> Self {
        Self { model }
    }

    pub fn with_thresholds(thresholds: ScoringThresholds) -> Self {
        Self::new(Arc::new(HeuristicModel::new(thresholds)))
    }

    pub fn with_default_model() -> Self {
        Self::with_thresholds(ScoringThresholds::default())
    }

    /// Assess a single patient record
    pub fn assess(&self, record: &PatientRecord) -> Assessment {
        let prediction = self.model.predict(record);
        let risk_factors = identify_risk_factors(record);

        tracing::debug!(
            "Assessment complete: label={:?}, factors={}",
            prediction.label,
            risk_factors.len()
        );

        Assessment {
            prediction,
            risk_factors,
            recommendations: recommendations(),
        }
    }
}

impl Default for Assessor {
    fn default() -> Self {
        Self::with_default_model()
    }
}
