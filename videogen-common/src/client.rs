use crate::types::{
    ErrorResponse, GenerationRequest, GenerationResponse, HealthResponse, ModelsResponse,
    PreviewRequest, PreviewResponse, VideoGenError,
};
use reqwest::Url;
use serde::de::DeserializeOwned;

pub struct VideoGenClient {
    base_url: Url,
    client: reqwest::Client,
}

impl VideoGenClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Generate a video with the given request
    pub async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, VideoGenError> {
        let url = self.join("generate-video")?;
        let response = self
            .client
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(|e| VideoGenError::NetworkError(e.to_string()))?;
        Self::parse_response(response).await
    }

    /// Get capability metadata for all models
    pub async fn get_models(&self) -> Result<ModelsResponse, VideoGenError> {
        let url = self.join("video-models")?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| VideoGenError::NetworkError(e.to_string()))?;
        Self::parse_response(response).await
    }

    /// Get a model recommendation without generating
    pub async fn preview(&self, request: PreviewRequest) -> Result<PreviewResponse, VideoGenError> {
        let url = self.join("generate-video-preview")?;
        let response = self
            .client
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(|e| VideoGenError::NetworkError(e.to_string()))?;
        Self::parse_response(response).await
    }

    /// Get the service health report
    pub async fn health(&self) -> Result<HealthResponse, VideoGenError> {
        let url = self.join("health")?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| VideoGenError::NetworkError(e.to_string()))?;
        Self::parse_response(response).await
    }

    fn join(&self, path: &str) -> Result<Url, VideoGenError> {
        self.base_url
            .join(path)
            .map_err(|e| VideoGenError::NetworkError(format!("Invalid URL: {e}")))
    }

    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, VideoGenError> {
        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| VideoGenError::NetworkError(e.to_string()))
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error text".to_string());

            // Try to parse as the service's error envelope
            match serde_json::from_str::<ErrorResponse>(&error_text) {
                Ok(envelope) => Err(envelope.error),
                Err(_) => Err(VideoGenError::NetworkError(format!(
                    "Server error: {error_text}"
                ))),
            }
        }
    }
}
