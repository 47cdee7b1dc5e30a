//! Plaintext report and share-text synthesis for the results view. Pure
//! string building; the caller supplies render-time date and time strings
//! and performs the actual browser-side save.

use crate::{AnalysisHandoff, ClassificationResult};

pub const REPORT_TITLE: &str = "DIABETIC RETINOPATHY ANALYSIS REPORT";

pub const MEDICAL_DISCLAIMER: &str = "This AI analysis is for screening purposes only. Always \
     consult with a qualified ophthalmologist for proper medical diagnosis and treatment \
     decisions.";

pub const SHARE_TITLE: &str = "Diabetic Retinopathy Analysis Results";

/// Builds the downloadable plaintext report. Patient lines are emitted
/// only for non-empty fields; an absent field leaves no labeled line
/// behind. Confidence is written verbatim, without rounding.
pub fn render_report(handoff: &AnalysisHandoff, date: &str, time: &str) -> String {
    let mut report = String::new();

    report.push_str(REPORT_TITLE);
    report.push_str("\n=====================================\n\n");
    report.push_str(&format!("Analysis Date: {date}\n"));
    report.push_str(&format!("Analysis Time: {time}\n\n"));

    report.push_str("PATIENT INFORMATION:\n");
    if !handoff.patient.id.is_empty() {
        report.push_str(&format!("Patient ID: {}\n", handoff.patient.id));
    }
    if !handoff.patient.age.is_empty() {
        report.push_str(&format!("Age: {} years\n", handoff.patient.age));
    }
    if let Some(eye) = handoff.patient.eye {
        report.push_str(&format!("Eye: {}\n", eye.label()));
    }

    report.push_str("\nIMAGE INFORMATION:\n");
    report.push_str(&format!("File Name: {}\n\n", handoff.file_name));

    report.push_str("ANALYSIS RESULTS:\n");
    report.push_str(&format!("Classification: {}\n", handoff.result.class_name));
    report.push_str(&format!("Confidence Level: {}%\n", handoff.result.confidence));
    report.push_str(&format!("Severity: {}\n\n", handoff.result.severity.report_token()));

    report.push_str("DESCRIPTION:\n");
    report.push_str(&handoff.result.description);
    report.push_str("\n\nRECOMMENDATION:\n");
    report.push_str(&handoff.result.recommendation);
    report.push_str("\n\nDISCLAIMER:\n");
    report.push_str(MEDICAL_DISCLAIMER);
    report.push('\n');

    report
}

/// Report file name; locale date separators are path-unsafe and get
/// replaced before the date is embedded.
pub fn report_file_name(date: &str) -> String {
    format!("diabetic_retinopathy_analysis_{}.txt", date.replace('/', "-"))
}

/// One-line summary for the native share sheet.
pub fn share_summary(result: &ClassificationResult) -> String {
    format!(
        "Analysis Result: {} ({}% confidence)",
        result.class_name, result.confidence
    )
}

/// Multi-line summary used by the clipboard fallback when native sharing
/// is unavailable.
pub fn clipboard_summary(result: &ClassificationResult) -> String {
    format!(
        "{SHARE_TITLE}\n\nResult: {}\nConfidence: {}%\nRecommendation: {}",
        result.class_name, result.confidence, result.recommendation
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EyeSide, PatientInfo, Severity};

    fn mild_handoff(patient: PatientInfo) -> AnalysisHandoff {
        AnalysisHandoff {
            result: ClassificationResult {
                class_name: "Mild Diabetic Retinopathy".into(),
                confidence: 87.5,
                severity: Severity::Mild,
                description: "Early signs of diabetic retinopathy detected with minimal retinal changes.".into(),
                recommendation: "Schedule follow-up examination in 6-12 months. Continue diabetes management.".into(),
            },
            patient,
            image_preview: "data:image/png;base64,AAAA".into(),
            file_name: "fundus_left.png".into(),
        }
    }

    #[test]
    fn report_contains_fixed_sections_and_verbatim_confidence() {
        let handoff = mild_handoff(PatientInfo::default());
        let report = render_report(&handoff, "8/6/2026", "10:15:00 AM");

        assert!(report.starts_with(REPORT_TITLE));
        assert!(report.contains("Analysis Date: 8/6/2026"));
        assert!(report.contains("Analysis Time: 10:15:00 AM"));
        assert!(report.contains("File Name: fundus_left.png"));
        assert!(report.contains("Classification: Mild Diabetic Retinopathy"));
        assert!(report.contains("Confidence Level: 87.5%"));
        assert!(report.contains("Severity: MILD"));
        assert!(report.contains("DESCRIPTION:\nEarly signs"));
        assert!(report.contains("RECOMMENDATION:\nSchedule follow-up"));
        assert!(report.contains(MEDICAL_DISCLAIMER));
    }

    #[test]
    fn report_omits_exactly_the_empty_patient_lines() {
        let handoff = mild_handoff(PatientInfo {
            id: String::new(),
            age: "34".into(),
            eye: Some(EyeSide::Left),
        });
        let report = render_report(&handoff, "8/6/2026", "10:15:00 AM");

        assert!(report.contains("Age: 34 years"));
        assert!(report.contains("Eye: Left"));
        assert!(!report.contains("Patient ID:"));
    }

    #[test]
    fn report_with_no_patient_info_has_no_patient_lines() {
        let handoff = mild_handoff(PatientInfo::default());
        let report = render_report(&handoff, "8/6/2026", "10:15:00 AM");

        assert!(report.contains("PATIENT INFORMATION:"));
        assert!(!report.contains("Patient ID:"));
        assert!(!report.contains("Age:"));
        assert!(!report.contains("Eye:"));
    }

    #[test]
    fn file_name_replaces_path_unsafe_separators() {
        assert_eq!(
            report_file_name("8/6/2026"),
            "diabetic_retinopathy_analysis_8-6-2026.txt"
        );
        assert_eq!(
            report_file_name("2026-08-06"),
            "diabetic_retinopathy_analysis_2026-08-06.txt"
        );
    }

    #[test]
    fn share_texts_carry_class_and_verbatim_confidence() {
        let handoff = mild_handoff(PatientInfo::default());
        assert_eq!(
            share_summary(&handoff.result),
            "Analysis Result: Mild Diabetic Retinopathy (87.5% confidence)"
        );

        let clipboard = clipboard_summary(&handoff.result);
        assert!(clipboard.starts_with(SHARE_TITLE));
        assert!(clipboard.contains("Result: Mild Diabetic Retinopathy"));
        assert!(clipboard.contains("Confidence: 87.5%"));
        assert!(clipboard.contains("Recommendation: Schedule follow-up"));
    }

    #[test]
    fn whole_percent_confidence_renders_without_decimals() {
        let mut handoff = mild_handoff(PatientInfo::default());
        handoff.result.confidence = 90.0;
        let report = render_report(&handoff, "8/6/2026", "10:15:00 AM");
        assert!(report.contains("Confidence Level: 90%"));
    }
}
