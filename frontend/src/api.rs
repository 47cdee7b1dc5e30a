//! Thin client for the external inference service. Stateless: one
//! request/response round trip per call, no retries, no timeout. Every
//! failure is normalized into [`ApiError`].

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::api_types::{
    ApiError, ClassesResponse, HealthResponse, PredictionRequest, PredictionResponse,
    http_error_message,
};

#[derive(Clone, Debug, PartialEq)]
pub struct ApiService {
    base_url: String,
}

impl ApiService {
    /// The base address is injected explicitly so tests and deployments
    /// can point the client anywhere.
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiService {
            base_url: base_url.into(),
        }
    }

    pub async fn health_check(&self) -> Result<HealthResponse, ApiError> {
        let response = Request::get(&self.endpoint("/health"))
            .send()
            .await
            .map_err(unexpected)?;
        parse(response).await
    }

    pub async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse, ApiError> {
        let response = Request::post(&self.endpoint("/predict"))
            .json(request)
            .map_err(unexpected)?
            .send()
            .await
            .map_err(unexpected)?;
        parse(response).await
    }

    pub async fn get_classes(&self) -> Result<ClassesResponse, ApiError> {
        let response = Request::get(&self.endpoint("/classes"))
            .send()
            .await
            .map_err(unexpected)?;
        parse(response).await
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Http(http_error_message(status, &body)));
    }
    response.json::<T>().await.map_err(unexpected)
}

fn unexpected(err: impl std::fmt::Display) -> ApiError {
    log::error!("inference service call failed: {err}");
    ApiError::Unexpected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_join_base_address_and_path() {
        let api = ApiService::new("http://localhost:5001");
        assert_eq!(api.endpoint("/health"), "http://localhost:5001/health");
        assert_eq!(api.endpoint("/predict"), "http://localhost:5001/predict");
        assert_eq!(api.endpoint("/classes"), "http://localhost:5001/classes");
    }
}
