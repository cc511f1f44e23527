use crate::models::PatientRecord;

/// Display cutoffs for the risk-factor listing
///
/// The listing flags a low MMSE earlier than the scorer does (24 vs 20), so
/// borderline cognition shows up in the report before it moves the score.
const MMSE_DISPLAY_CUTOFF: u8 = 24;
const BMI_DISPLAY_CUTOFF: f64 = 30.0;

/// Fixed recommendation text shown with every assessment
pub const RECOMMENDATIONS: [&str; 5] = [
    "Consult a neurologist for a full clinical evaluation",
    "Schedule regular cognitive check-ups",
    "Maintain a healthy and active lifestyle",
    "Eat a nutritious diet that supports brain health",
    "Engage in mentally stimulating activities",
];

/// List the names of risk factors present in a record
///
/// Covers the nine binary indicators plus the two display cutoffs. Returns an
/// empty list when no factor applies.
pub fn identify_risk_factors(record: &PatientRecord) -> Vec<String> {
    let mut factors = Vec::new();

    let indicators: [(u8, &str); 9] = [
        (record.family_history, "Family history of Alzheimer's"),
        (record.cardiovascular_disease, "Cardiovascular disease"),
        (record.depression, "Depression"),
        (record.head_injury, "Head injury"),
        (record.memory_complaints, "Memory complaints"),
        (record.confusion, "Confusion"),
        (record.disorientation, "Disorientation"),
        (record.difficulty_completing_tasks, "Difficulty completing tasks"),
        (record.forgetfulness, "Forgetfulness"),
    ];

    for (present, name) in indicators {
        if present == 1 {
            factors.push(name.to_string());
        }
    }

    if record.mmse_score < MMSE_DISPLAY_CUTOFF {
        factors.push("Low MMSE score".to_string());
    }

    if record.bmi > BMI_DISPLAY_CUTOFF {
        factors.push("High BMI".to_string());
    }

    factors
}

/// The fixed recommendation list
pub fn recommendations() -> Vec<String> {
    RECOMMENDATIONS.iter().map(|r| r.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean_record() -> PatientRecord {
        PatientRecord {
            gender: 0,
            ethnicity: 0,
            education: 1,
            bmi: 22.0,
            smoking: 0,
            alcohol: 0,
            physical_activity: 2.0,
            diet_quality: 5,
            sleep_quality: 7,
            family_history: 0,
            cardiovascular_disease: 0,
            depression: 0,
            head_injury: 0,
            cholesterol: 200,
            mmse_score: 28,
            functional_assessment: 5,
            memory_complaints: 0,
            adl_difficulty: 0,
            confusion: 0,
            disorientation: 0,
            difficulty_completing_tasks: 0,
            forgetfulness: 0,
        }
    }

    #[test]
    fn test_clean_record_has_no_factors() {
        assert!(identify_risk_factors(&clean_record()).is_empty());
    }

    #[test]
    fn test_indicators_listed_in_order() {
        let mut record = clean_record();
        record.depression = 1;
        record.forgetfulness = 1;

        let factors = identify_risk_factors(&record);
        assert_eq!(factors, vec!["Depression", "Forgetfulness"]);
    }

    #[test]
    fn test_borderline_mmse_listed_but_not_scored() {
        let mut record = clean_record();
        record.mmse_score = 22; // below display cutoff, above scoring cutoff

        let factors = identify_risk_factors(&record);
        assert_eq!(factors, vec!["Low MMSE score"]);
    }

    #[test]
    fn test_high_bmi_listed() {
        let mut record = clean_record();
        record.bmi = 32.5;

        let factors = identify_risk_factors(&record);
        assert_eq!(factors, vec!["High BMI"]);
    }

    #[test]
    fn test_recommendations_fixed_list() {
        let recs = recommendations();
        assert_eq!(recs.len(), 5);
        assert_eq!(recs[0], RECOMMENDATIONS[0]);
    }
}
