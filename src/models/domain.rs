use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of fields in a patient record. Positional input must match exactly.
pub const RECORD_FIELD_COUNT: usize = 22;

/// Errors produced when constructing a record from raw positional values
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("expected {expected} fields, got {actual}")]
    FieldCount { expected: usize, actual: usize },

    #[error("binary field '{field}' must be 0 or 1, got {value}")]
    NonBinaryField { field: &'static str, value: f64 },
}

/// Patient risk-factor record as collected by the screening form
///
/// Field order is fixed and positionally significant: `from_values` indexes
/// the raw vector by position, matching the order the form emits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientRecord {
    pub gender: u8,
    pub ethnicity: u8,
    pub education: u8,
    pub bmi: f64,
    pub smoking: u8,
    /// Weekly alcohol units
    pub alcohol: u8,
    /// Hours per week
    pub physical_activity: f64,
    pub diet_quality: u8,
    pub sleep_quality: u8,
    pub family_history: u8,
    pub cardiovascular_disease: u8,
    pub depression: u8,
    pub head_injury: u8,
    /// Total cholesterol, mg/dL
    pub cholesterol: u16,
    pub mmse_score: u8,
    pub functional_assessment: u8,
    pub memory_complaints: u8,
    pub adl_difficulty: u8,
    pub confusion: u8,
    pub disorientation: u8,
    pub difficulty_completing_tasks: u8,
    pub forgetfulness: u8,
}

impl PatientRecord {
    /// Build a record from a raw positional value vector
    ///
    /// Fails when the vector does not hold exactly 22 values, or when a
    /// binary field carries anything other than 0 or 1. Range constraints on
    /// the remaining fields are enforced by the input collectors, not here.
    pub fn from_values(values: &[f64]) -> Result<Self, RecordError> {
        if values.len() != RECORD_FIELD_COUNT {
            return Err(RecordError::FieldCount {
                expected: RECORD_FIELD_COUNT,
                actual: values.len(),
            });
        }

        Ok(Self {
            gender: binary_at(values, 0, "gender")?,
            ethnicity: values[1] as u8,
            education: values[2] as u8,
            bmi: values[3],
            smoking: binary_at(values, 4, "smoking")?,
            alcohol: values[5] as u8,
            physical_activity: values[6],
            diet_quality: values[7] as u8,
            sleep_quality: values[8] as u8,
            family_history: binary_at(values, 9, "family_history")?,
            cardiovascular_disease: binary_at(values, 10, "cardiovascular_disease")?,
            depression: binary_at(values, 11, "depression")?,
            head_injury: binary_at(values, 12, "head_injury")?,
            cholesterol: values[13] as u16,
            mmse_score: values[14] as u8,
            functional_assessment: values[15] as u8,
            memory_complaints: binary_at(values, 16, "memory_complaints")?,
            adl_difficulty: binary_at(values, 17, "adl_difficulty")?,
            confusion: binary_at(values, 18, "confusion")?,
            disorientation: binary_at(values, 19, "disorientation")?,
            difficulty_completing_tasks: binary_at(values, 20, "difficulty_completing_tasks")?,
            forgetfulness: binary_at(values, 21, "forgetfulness")?,
        })
    }

    /// The nine binary indicators that feed the risk score, in scoring order
    pub fn risk_indicators(&self) -> [u8; 9] {
        [
            self.family_history,
            self.cardiovascular_disease,
            self.depression,
            self.head_injury,
            self.memory_complaints,
            self.confusion,
            self.disorientation,
            self.difficulty_completing_tasks,
            self.forgetfulness,
        ]
    }
}

fn binary_at(values: &[f64], index: usize, field: &'static str) -> Result<u8, RecordError> {
    let value = values[index];
    if value == 0.0 {
        Ok(0)
    } else if value == 1.0 {
        Ok(1)
    } else {
        Err(RecordError::NonBinaryField { field, value })
    }
}

/// Binary classification outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLabel {
    Negative,
    Positive,
}

/// Result of a single prediction, produced fresh per invocation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub label: RiskLabel,
    /// (p_negative, p_positive), summing to 1.0
    pub probabilities: (f64, f64),
}

impl PredictionResult {
    pub fn negative_probability(&self) -> f64 {
        self.probabilities.0
    }

    pub fn positive_probability(&self) -> f64 {
        self.probabilities.1
    }
}

/// Scoring thresholds
#[derive(Debug, Clone, Copy)]
pub struct ScoringThresholds {
    /// Score at or above this is classified high risk
    pub high_score: u32,
    /// Score at or above this (but below high) is classified elevated risk
    pub elevated_score: u32,
    /// MMSE below this adds one point
    pub mmse_cutoff: u8,
    /// BMI above this adds one point
    pub bmi_cutoff: f64,
}

impl Default for ScoringThresholds {
    fn default() -> Self {
        Self {
            high_score: 7,
            elevated_score: 4,
            mmse_cutoff: 20,
            bmi_cutoff: 30.0,
        }
    }
}
