use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::PatientRecord;

/// Request to assess a patient record, with named fields
///
/// Ranges mirror the constraints the screening form enforces on its widgets.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AssessRequest {
    #[validate(range(min = 0, max = 1))]
    pub gender: u8,
    #[validate(range(min = 0, max = 3))]
    pub ethnicity: u8,
    #[validate(range(min = 0, max = 3))]
    pub education: u8,
    #[validate(range(min = 15.0, max = 40.0))]
    pub bmi: f64,
    #[validate(range(min = 0, max = 1))]
    pub smoking: u8,
    #[validate(range(min = 0, max = 20))]
    pub alcohol: u8,
    #[validate(range(min = 0.0, max = 10.0))]
    #[serde(alias = "physical_activity", rename = "physicalActivity")]
    pub physical_activity: f64,
    #[validate(range(min = 0, max = 10))]
    #[serde(alias = "diet_quality", rename = "dietQuality")]
    pub diet_quality: u8,
    #[validate(range(min = 4, max = 10))]
    #[serde(alias = "sleep_quality", rename = "sleepQuality")]
    pub sleep_quality: u8,
    #[validate(range(min = 0, max = 1))]
    #[serde(alias = "family_history", rename = "familyHistory")]
    pub family_history: u8,
    #[validate(range(min = 0, max = 1))]
    #[serde(alias = "cardiovascular_disease", rename = "cardiovascularDisease")]
    pub cardiovascular_disease: u8,
    #[validate(range(min = 0, max = 1))]
    pub depression: u8,
    #[validate(range(min = 0, max = 1))]
    #[serde(alias = "head_injury", rename = "headInjury")]
    pub head_injury: u8,
    #[validate(range(min = 150, max = 300))]
    pub cholesterol: u16,
    #[validate(range(min = 0, max = 30))]
    #[serde(alias = "mmse_score", rename = "mmseScore")]
    pub mmse_score: u8,
    #[validate(range(min = 0, max = 10))]
    #[serde(alias = "functional_assessment", rename = "functionalAssessment")]
    pub functional_assessment: u8,
    #[validate(range(min = 0, max = 1))]
    #[serde(alias = "memory_complaints", rename = "memoryComplaints")]
    pub memory_complaints: u8,
    #[validate(range(min = 0, max = 1))]
    #[serde(alias = "adl_difficulty", rename = "adlDifficulty")]
    pub adl_difficulty: u8,
    #[validate(range(min = 0, max = 1))]
    pub confusion: u8,
    #[validate(range(min = 0, max = 1))]
    pub disorientation: u8,
    #[validate(range(min = 0, max = 1))]
    #[serde(alias = "difficulty_completing_tasks", rename = "difficultyCompletingTasks")]
    pub difficulty_completing_tasks: u8,
    #[validate(range(min = 0, max = 1))]
    pub forgetfulness: u8,
}

impl From<AssessRequest> for PatientRecord {
    fn from(req: AssessRequest) -> Self {
        Self {
            gender: req.gender,
            ethnicity: req.ethnicity,
            education: req.education,
            bmi: req.bmi,
            smoking: req.smoking,
            alcohol: req.alcohol,
            physical_activity: req.physical_activity,
            diet_quality: req.diet_quality,
            sleep_quality: req.sleep_quality,
            family_history: req.family_history,
            cardiovascular_disease: req.cardiovascular_disease,
            depression: req.depression,
            head_injury: req.head_injury,
            cholesterol: req.cholesterol,
            mmse_score: req.mmse_score,
            functional_assessment: req.functional_assessment,
            memory_complaints: req.memory_complaints,
            adl_difficulty: req.adl_difficulty,
            confusion: req.confusion,
            disorientation: req.disorientation,
            difficulty_completing_tasks: req.difficulty_completing_tasks,
            forgetfulness: req.forgetfulness,
        }
    }
}

/// Request to assess a raw positional value vector (22 values, form order)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAssessRequest {
    pub values: Vec<f64>,
}
