use serde::{Deserialize, Serialize};

pub mod api_types;
pub mod classes;
pub mod report;

pub use classes::{REFERENCE_RESULTS, ReferenceEntry, Severity, Urgency, pick_reference};

/// MIME types the intake surface accepts. Everything else is rejected
/// before any image state is created.
pub const ACCEPTED_IMAGE_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

pub fn accepted_image_type(mime: &str) -> bool {
    ACCEPTED_IMAGE_TYPES.contains(&mime)
}

/// Which eye the fundus photograph was taken of.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EyeSide {
    Left,
    Right,
}

impl EyeSide {
    /// Parses the value of the eye `<select>` control. An empty selection
    /// means "unset".
    pub fn from_form_value(value: &str) -> Option<EyeSide> {
        match value {
            "left" => Some(EyeSide::Left),
            "right" => Some(EyeSide::Right),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EyeSide::Left => "Left",
            EyeSide::Right => "Right",
        }
    }
}

/// Optional, free-form patient details collected on the intake form.
/// Nothing here is validated; the fields are carried through to the
/// results view and the report exactly as typed.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct PatientInfo {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub age: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eye: Option<EyeSide>,
}

impl PatientInfo {
    pub fn is_empty(&self) -> bool {
        self.id.is_empty() && self.age.is_empty() && self.eye.is_none()
    }
}

/// One classification outcome, immutable once produced. `confidence` is a
/// percentage in [0, 100] and is displayed verbatim wherever it appears.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ClassificationResult {
    #[serde(rename = "class")]
    pub class_name: String,
    pub confidence: f32,
    pub severity: Severity,
    pub description: String,
    pub recommendation: String,
}

/// The one-shot bundle handed from the intake view to the results view.
/// The results view never renders without one; navigation requests for it
/// with an absent bundle fall back to the intake view.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisHandoff {
    pub result: ClassificationResult,
    pub patient: PatientInfo,
    pub image_preview: String,
    pub file_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_only_jpeg_and_png() {
        assert!(accepted_image_type("image/jpeg"));
        assert!(accepted_image_type("image/png"));
        assert!(!accepted_image_type("image/webp"));
        assert!(!accepted_image_type("image/gif"));
        assert!(!accepted_image_type("application/pdf"));
        assert!(!accepted_image_type("image/jpg"));
        assert!(!accepted_image_type(""));
    }

    #[test]
    fn default_patient_info_is_empty() {
        let patient = PatientInfo::default();
        assert_eq!(patient.id, "");
        assert_eq!(patient.age, "");
        assert_eq!(patient.eye, None);
        assert!(patient.is_empty());
    }

    #[test]
    fn patient_info_with_any_field_is_not_empty() {
        let patient = PatientInfo {
            age: "34".into(),
            ..PatientInfo::default()
        };
        assert!(!patient.is_empty());
    }

    #[test]
    fn eye_side_parses_form_values() {
        assert_eq!(EyeSide::from_form_value("left"), Some(EyeSide::Left));
        assert_eq!(EyeSide::from_form_value("right"), Some(EyeSide::Right));
        assert_eq!(EyeSide::from_form_value(""), None);
        assert_eq!(EyeSide::from_form_value("both"), None);
    }

    #[test]
    fn patient_info_serializes_without_empty_fields() {
        let patient = PatientInfo {
            id: String::new(),
            age: "52".into(),
            eye: Some(EyeSide::Left),
        };
        let json = serde_json::to_value(&patient).unwrap();
        assert_eq!(json, serde_json::json!({"age": "52", "eye": "left"}));
    }

    #[test]
    fn classification_result_uses_wire_field_names() {
        let result = ClassificationResult {
            class_name: "Mild Diabetic Retinopathy".into(),
            confidence: 87.5,
            severity: Severity::Mild,
            description: "Early signs...".into(),
            recommendation: "Schedule follow-up...".into(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["class"], "Mild Diabetic Retinopathy");
        assert_eq!(json["severity"], "mild");
    }
}
