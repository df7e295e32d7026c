use std::sync::LazyLock;

use crate::models::{AnimateDiffModel, CogVideoModel, MochiModel};
use crate::selector::select_model;
use crate::types::{GenerationRequest, ModelInfo, ModelType, ModelsResponse, VideoGenError};
use crate::VideoGenInput;

/// Registry for all available model adapters
pub struct AdapterRegistry;

impl AdapterRegistry {
    /// Adapt a unified request to model-specific format, resolving `auto`
    /// through the keyword selector and validating along the way
    pub fn adapt_request(
        &self,
        request: GenerationRequest,
    ) -> Result<VideoGenInput, VideoGenError> {
        if request.prompt.trim().is_empty() {
            return Err(VideoGenError::InvalidInput(
                "Prompt cannot be empty".to_string(),
            ));
        }
        match select_model(&request.prompt, request.model_type) {
            ModelType::Photorealistic => MochiModel::from_request(request),
            ModelType::Creative => CogVideoModel::from_request(request),
            ModelType::Animation => AnimateDiffModel::from_request(request),
        }
    }

    /// Get capability metadata for all registered models
    pub fn get_all_models(&self) -> ModelsResponse {
        ModelsResponse {
            success: true,
            auto_detection: true,
            models: vec![
                MochiModel::model_info(),
                CogVideoModel::model_info(),
                AnimateDiffModel::model_info(),
            ],
        }
    }

    /// Get capability metadata for a specific model
    pub fn get_model_info(&self, model_type: ModelType) -> ModelInfo {
        match model_type {
            ModelType::Photorealistic => MochiModel::model_info(),
            ModelType::Creative => CogVideoModel::model_info(),
            ModelType::Animation => AnimateDiffModel::model_info(),
        }
    }
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self
    }
}

/// Global adapter registry instance
pub static ADAPTER_REGISTRY: LazyLock<AdapterRegistry> = LazyLock::new(AdapterRegistry::default);
