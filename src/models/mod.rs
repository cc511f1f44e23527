// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{PatientRecord, PredictionResult, RecordError, RiskLabel, ScoringThresholds, RECORD_FIELD_COUNT};
pub use requests::{AssessRequest, RawAssessRequest};
pub use responses::{AssessResponse, ErrorResponse, HealthResponse, Probabilities};
