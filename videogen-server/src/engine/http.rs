use std::time::Duration;

use async_trait::async_trait;
use global_constants::{GENERATION_TIMEOUT_SECONDS, WARMUP_TIMEOUT_SECONDS};
use serde::Serialize;
use videogen_common::generator::EndpointFromEnv;
use videogen_common::{ModelType, VideoGenError, VideoGenInput, VideoGenerator};

use crate::engine::VideoEngine;

/// Request body sent to an inference worker
#[derive(Serialize)]
struct WorkerRequest<'a> {
    prompt: &'a str,
    duration_seconds: u8,
}

/// Engine backed by a per-model inference worker reachable over HTTP. The
/// worker owns the diffusion pipeline; `load` maps to its warmup route so a
/// cold worker pulls weights exactly once.
pub struct HttpEngine {
    model_type: ModelType,
    base_url: String,
    client: reqwest::Client,
}

impl HttpEngine {
    pub fn from_env(model_type: ModelType) -> Self {
        let base_url = model_type.endpoint_from_env(&default_endpoint(model_type));
        Self::new(model_type, base_url)
    }

    pub fn new(model_type: ModelType, base_url: String) -> Self {
        Self {
            model_type,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

fn default_endpoint(model_type: ModelType) -> String {
    let port = match model_type {
        ModelType::Photorealistic => 9101,
        ModelType::Creative => 9102,
        ModelType::Animation => 9103,
    };
    format!("http://127.0.0.1:{port}")
}

#[async_trait]
impl VideoEngine for HttpEngine {
    fn model_id(&self) -> &'static str {
        self.model_type.model_id()
    }

    async fn load(&self) -> Result<(), VideoGenError> {
        let url = format!("{}/warmup", self.base_url);
        let response = self
            .client
            .post(&url)
            .timeout(Duration::from_secs(WARMUP_TIMEOUT_SECONDS))
            .send()
            .await
            .map_err(|e| VideoGenError::ModelLoadError(e.to_string()))?;
        if !response.status().is_success() {
            return Err(VideoGenError::ModelLoadError(format!(
                "{} worker returned {}",
                self.model_id(),
                response.status()
            )));
        }
        Ok(())
    }

    async fn generate(&self, input: &VideoGenInput) -> Result<Vec<u8>, VideoGenError> {
        let url = format!("{}/generate", self.base_url);
        let body = WorkerRequest {
            prompt: input.get_prompt(),
            duration_seconds: input.duration_seconds(),
        };
        let response = self
            .client
            .post(&url)
            .json(&body)
            .timeout(Duration::from_secs(GENERATION_TIMEOUT_SECONDS))
            .send()
            .await
            .map_err(|e| VideoGenError::NetworkError(e.to_string()))?;
        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(VideoGenError::GenerationError(format!(
                "{} worker returned {status}: {detail}",
                self.model_id()
            )));
        }
        let bytes = response
            .bytes()
            .await
            .map_err(|e| VideoGenError::NetworkError(e.to_string()))?;
        if bytes.is_empty() {
            return Err(VideoGenError::GenerationError(format!(
                "{} worker returned an empty video",
                self.model_id()
            )));
        }
        Ok(bytes.to_vec())
    }
}
