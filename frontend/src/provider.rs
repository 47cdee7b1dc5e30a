//! Strategy for producing a classification. The demo and wired paths are
//! interchangeable behind [`ResultProvider::classify`]; which one a build
//! uses is decided by configuration alone.

use gloo_timers::future::TimeoutFuture;
use shared::api_types::{ApiError, PredictionRequest};
use shared::{ClassificationResult, PatientInfo, pick_reference};

use crate::api::ApiService;
use crate::config::{AppConfig, ProviderKind};

/// Simulated processing time of the demo path.
pub const DEMO_ANALYSIS_DELAY_MS: u32 = 3_000;

#[derive(Clone, Debug, PartialEq)]
pub enum ResultProvider {
    Demo,
    Remote(ApiService),
}

impl ResultProvider {
    pub fn from_config(config: &AppConfig) -> Self {
        match config.provider {
            ProviderKind::Demo => ResultProvider::Demo,
            ProviderKind::Remote => {
                ResultProvider::Remote(ApiService::new(config.api_base_url.clone()))
            }
        }
    }

    /// Produces exactly one classification for the uploaded image. The
    /// demo arm never fails; the remote arm surfaces the normalized
    /// service error.
    pub async fn classify(
        &self,
        image_data_url: &str,
        patient: &PatientInfo,
    ) -> Result<ClassificationResult, ApiError> {
        match self {
            ResultProvider::Demo => {
                TimeoutFuture::new(DEMO_ANALYSIS_DELAY_MS).await;
                let entry = pick_reference(js_sys::Math::random());
                log::debug!("demo provider selected {}", entry.class_name);
                Ok(entry.to_result())
            }
            ResultProvider::Remote(api) => {
                let request = PredictionRequest {
                    image: image_data_url.to_string(),
                    patient_info: (!patient.is_empty()).then(|| patient.clone()),
                };
                let response = api.predict(&request).await?;
                if !response.success {
                    return Err(ApiError::Http(
                        response
                            .error
                            .unwrap_or_else(|| "Prediction failed".to_string()),
                    ));
                }
                Ok(response.prediction.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_selection_follows_configuration() {
        let demo = AppConfig {
            api_base_url: "http://localhost:5001".into(),
            provider: ProviderKind::Demo,
        };
        assert_eq!(ResultProvider::from_config(&demo), ResultProvider::Demo);

        let remote = AppConfig {
            api_base_url: "https://dr.example.org".into(),
            provider: ProviderKind::Remote,
        };
        assert_eq!(
            ResultProvider::from_config(&remote),
            ResultProvider::Remote(ApiService::new("https://dr.example.org"))
        );
    }
}
