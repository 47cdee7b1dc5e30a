//! Wire contract of the external inference service and the normalized
//! error the client reduces every failure to.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::classes::{Severity, Urgency};
use crate::{ClassificationResult, PatientInfo};

/// Body of `POST /predict`. The image travels as a data-URL string.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PredictionRequest {
    pub image: String,
    #[serde(rename = "patientInfo", skip_serializing_if = "Option::is_none", default)]
    pub patient_info: Option<PatientInfo>,
}

/// The service's classification payload. Carries the same fields as
/// [`ClassificationResult`] plus the follow-up urgency.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Prediction {
    #[serde(rename = "class")]
    pub class_name: String,
    pub confidence: f32,
    pub severity: Severity,
    pub description: String,
    pub recommendation: String,
    pub urgency: Urgency,
}

impl From<Prediction> for ClassificationResult {
    fn from(prediction: Prediction) -> Self {
        ClassificationResult {
            class_name: prediction.class_name,
            confidence: prediction.confidence,
            severity: prediction.severity,
            description: prediction.description,
            recommendation: prediction.recommendation,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PredictionResponse {
    pub success: bool,
    pub prediction: Prediction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_info: Option<PatientInfo>,
    pub timestamp: String,
    pub model_accuracy: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// One entry of `GET /classes`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ClassInfo {
    #[serde(rename = "class")]
    pub class_name: String,
    pub severity: Severity,
    pub description: String,
    pub recommendation: String,
    pub urgency: Urgency,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ClassesResponse {
    pub classes: Vec<ClassInfo>,
    pub total_classes: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub model_loaded: bool,
    pub timestamp: String,
}

/// Every inference-service failure collapses into one of these. A non-2xx
/// response keeps the server's message when it sent one; transport-level
/// failures are indistinguishable to the caller beyond "unexpected".
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ApiError {
    #[error("{0}")]
    Http(String),
    #[error("An unexpected error occurred")]
    Unexpected,
}

/// Error-normalization rule shared by every endpoint: prefer the body's
/// `error` field, fall back to a generic message carrying the status code.
pub fn http_error_message(status: u16, body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: Option<String>,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .unwrap_or_else(|| format!("HTTP error! status: {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EyeSide;

    #[test]
    fn error_message_prefers_the_server_provided_message() {
        assert_eq!(http_error_message(500, r#"{"error": "X"}"#), "X");
        assert_eq!(
            http_error_message(422, r#"{"error": "No image provided", "success": false}"#),
            "No image provided"
        );
    }

    #[test]
    fn error_message_falls_back_to_the_status_code() {
        assert_eq!(http_error_message(500, ""), "HTTP error! status: 500");
        assert_eq!(http_error_message(404, "<html>"), "HTTP error! status: 404");
        assert_eq!(http_error_message(502, "{}"), "HTTP error! status: 502");
        assert_eq!(
            http_error_message(400, r#"{"error": null}"#),
            "HTTP error! status: 400"
        );
    }

    #[test]
    fn api_error_displays_its_normalized_message() {
        assert_eq!(ApiError::Http("X".into()).to_string(), "X");
        assert_eq!(
            ApiError::Unexpected.to_string(),
            "An unexpected error occurred"
        );
    }

    #[test]
    fn prediction_request_uses_camel_case_patient_key() {
        let request = PredictionRequest {
            image: "data:image/jpeg;base64,AAAA".into(),
            patient_info: Some(PatientInfo {
                id: "P-17".into(),
                age: "61".into(),
                eye: Some(EyeSide::Right),
            }),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["image"], "data:image/jpeg;base64,AAAA");
        assert_eq!(json["patientInfo"]["id"], "P-17");
        assert_eq!(json["patientInfo"]["eye"], "right");
    }

    #[test]
    fn prediction_request_omits_absent_patient_info() {
        let request = PredictionRequest {
            image: "data:image/png;base64,AAAA".into(),
            patient_info: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("patientInfo"));
    }

    #[test]
    fn prediction_response_deserializes_the_documented_shape() {
        let body = r#"{
            "success": true,
            "prediction": {
                "class": "Moderate Diabetic Retinopathy",
                "confidence": 91.8,
                "severity": "moderate",
                "description": "Moderate diabetic changes present. Closer monitoring recommended.",
                "recommendation": "Schedule follow-up examination in 3-6 months. Optimize diabetes control.",
                "urgency": "moderate"
            },
            "timestamp": "2026-08-06T10:15:00Z",
            "model_accuracy": 0.93
        }"#;
        let response: PredictionResponse = serde_json::from_str(body).unwrap();
        assert!(response.success);
        assert_eq!(response.prediction.severity, Severity::Moderate);
        assert_eq!(response.prediction.urgency, Urgency::Moderate);
        assert_eq!(response.error, None);

        let result: ClassificationResult = response.prediction.into();
        assert_eq!(result.class_name, "Moderate Diabetic Retinopathy");
        assert_eq!(result.confidence, 91.8);
    }

    #[test]
    fn classes_response_deserializes() {
        let body = r#"{
            "classes": [{
                "class": "No Diabetic Retinopathy",
                "severity": "none",
                "description": "No signs of diabetic retinopathy detected in the retinal image.",
                "recommendation": "Continue regular eye examinations as recommended by your healthcare provider.",
                "urgency": "routine"
            }],
            "total_classes": 1
        }"#;
        let response: ClassesResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.total_classes, 1);
        assert_eq!(response.classes[0].severity, Severity::None);
    }

    #[test]
    fn health_response_deserializes() {
        let body = r#"{"status": "healthy", "model_loaded": true, "timestamp": "2026-08-06T10:15:00Z"}"#;
        let response: HealthResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.status, "healthy");
        assert!(response.model_loaded);
    }
}
