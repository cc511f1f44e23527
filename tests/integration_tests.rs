// Integration tests for AlzDetect Risk

use alzdetect_risk::core::Assessor;
use alzdetect_risk::models::{AssessRequest, PatientRecord, RiskLabel, ScoringThresholds};
use validator::Validate;

fn create_request() -> AssessRequest {
    AssessRequest {
        gender: 1,
        ethnicity: 2,
        education: 1,
        bmi: 26.0,
        smoking: 1,
        alcohol: 5,
        physical_activity: 2.0,
        diet_quality: 5,
        sleep_quality: 6,
        family_history: 0,
        cardiovascular_disease: 0,
        depression: 0,
        head_injury: 0,
        cholesterol: 210,
        mmse_score: 27,
        functional_assessment: 7,
        memory_complaints: 0,
        adl_difficulty: 0,
        confusion: 0,
        disorientation: 0,
        difficulty_completing_tasks: 0,
        forgetfulness: 0,
    }
}

#[test]
fn test_end_to_end_low_risk_assessment() {
    let assessor = Assessor::with_default_model();
    let request = create_request();
    assert!(request.validate().is_ok());

    let record: PatientRecord = request.into();
    let assessment = assessor.assess(&record);

    assert_eq!(assessment.prediction.label, RiskLabel::Negative);
    assert_eq!(assessment.prediction.probabilities, (0.7, 0.3));
    assert!(assessment.risk_factors.is_empty());
    assert_eq!(assessment.recommendations.len(), 5);
}

#[test]
fn test_end_to_end_high_risk_assessment() {
    let assessor = Assessor::with_default_model();

    let mut request = create_request();
    request.family_history = 1;
    request.cardiovascular_disease = 1;
    request.depression = 1;
    request.memory_complaints = 1;
    request.confusion = 1;
    request.disorientation = 1;
    request.forgetfulness = 1;
    assert!(request.validate().is_ok());

    let record: PatientRecord = request.into();
    let assessment = assessor.assess(&record);

    // Seven indicators -> score 7 -> high-risk band
    assert_eq!(assessment.prediction.label, RiskLabel::Positive);
    assert_eq!(assessment.prediction.probabilities, (0.2, 0.8));
    assert_eq!(assessment.risk_factors.len(), 7);
}

#[test]
fn test_end_to_end_raw_vector_path() {
    let assessor = Assessor::with_default_model();

    // Form order: three indicators set, mmse 15, bmi 35 -> score 5
    let values = vec![
        0.0,   // gender
        1.0,   // ethnicity
        1.0,   // education
        35.0,  // bmi
        0.0,   // smoking
        4.0,   // alcohol
        1.0,   // physical_activity
        4.0,   // diet_quality
        5.0,   // sleep_quality
        1.0,   // family_history
        1.0,   // cardiovascular_disease
        1.0,   // depression
        0.0,   // head_injury
        240.0, // cholesterol
        15.0,  // mmse_score
        4.0,   // functional_assessment
        0.0,   // memory_complaints
        0.0,   // adl_difficulty
        0.0,   // confusion
        0.0,   // disorientation
        0.0,   // difficulty_completing_tasks
        0.0,   // forgetfulness
    ];

    let record = PatientRecord::from_values(&values).expect("valid vector");
    let assessment = assessor.assess(&record);

    assert_eq!(assessment.prediction.label, RiskLabel::Positive);
    assert_eq!(assessment.prediction.probabilities, (0.4, 0.6));

    // Listing covers the three indicators plus low MMSE and high BMI
    assert_eq!(assessment.risk_factors.len(), 5);
    assert!(assessment.risk_factors.contains(&"Low MMSE score".to_string()));
    assert!(assessment.risk_factors.contains(&"High BMI".to_string()));
}

#[test]
fn test_raw_vector_rejects_malformed_input() {
    assert!(PatientRecord::from_values(&[]).is_err());
    assert!(PatientRecord::from_values(&[0.0; 21]).is_err());

    let mut values = vec![0.0; 22];
    values[8] = 5.0; // sleep_quality, non-binary field: allowed
    values[3] = 22.0;
    assert!(PatientRecord::from_values(&values).is_ok());

    values[21] = 3.0; // forgetfulness out of {0,1}
    assert!(PatientRecord::from_values(&values).is_err());
}

#[test]
fn test_configured_thresholds_change_banding() {
    // A stricter deployment classifies score 2 as high risk
    let thresholds = ScoringThresholds {
        high_score: 2,
        elevated_score: 1,
        ..ScoringThresholds::default()
    };
    let strict = Assessor::with_thresholds(thresholds);
    let default = Assessor::with_default_model();

    let mut request = create_request();
    request.depression = 1;
    request.forgetfulness = 1;
    let record: PatientRecord = request.into();

    let strict_result = strict.assess(&record);
    let default_result = default.assess(&record);

    assert_eq!(strict_result.prediction.probabilities, (0.2, 0.8));
    assert_eq!(default_result.prediction.label, RiskLabel::Negative);
}

#[test]
fn test_assessments_are_independent() {
    let assessor = Assessor::with_default_model();
    let record: PatientRecord = create_request().into();

    let first = assessor.assess(&record);
    let second = assessor.assess(&record);

    assert_eq!(first.prediction, second.prediction);
    assert_eq!(first.risk_factors, second.risk_factors);
}
