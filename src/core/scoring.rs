use crate::models::{PatientRecord, PredictionResult, RiskLabel, ScoringThresholds};

/// Probability pairs per risk band: (p_negative, p_positive)
pub const HIGH_RISK_PROBABILITIES: (f64, f64) = (0.2, 0.8);
pub const ELEVATED_RISK_PROBABILITIES: (f64, f64) = (0.4, 0.6);
pub const LOW_RISK_PROBABILITIES: (f64, f64) = (0.7, 0.3);

/// Calculate the integer risk score for a record
///
/// Score = sum of the nine binary indicators
///       + 1 if MMSE is below the cutoff
///       + 1 if BMI is above the cutoff
pub fn risk_score(record: &PatientRecord, thresholds: &ScoringThresholds) -> u32 {
    let indicator_sum: u32 = record.risk_indicators().iter().map(|&v| v as u32).sum();

    indicator_sum
        + mmse_point(record.mmse_score, thresholds.mmse_cutoff)
        + bmi_point(record.bmi, thresholds.bmi_cutoff)
}

/// Map an integer risk score to a label and probability pair
///
/// score >= high      -> positive, (0.2, 0.8)
/// elevated <= score  -> positive, (0.4, 0.6)
/// score < elevated   -> negative, (0.7, 0.3)
pub fn classify(score: u32, thresholds: &ScoringThresholds) -> PredictionResult {
    if score >= thresholds.high_score {
        PredictionResult {
            label: RiskLabel::Positive,
            probabilities: HIGH_RISK_PROBABILITIES,
        }
    } else if score >= thresholds.elevated_score {
        PredictionResult {
            label: RiskLabel::Positive,
            probabilities: ELEVATED_RISK_PROBABILITIES,
        }
    } else {
        PredictionResult {
            label: RiskLabel::Negative,
            probabilities: LOW_RISK_PROBABILITIES,
        }
    }
}

#[inline]
fn mmse_point(mmse_score: u8, cutoff: u8) -> u32 {
    if mmse_score < cutoff {
        1
    } else {
        0
    }
}

#[inline]
fn bmi_point(bmi: f64, cutoff: f64) -> u32 {
    if bmi > cutoff {
        1
    } else {
        0
    }
}
