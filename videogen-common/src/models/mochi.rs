use crate::types::{GenerationRequest, ModelInfo, ModelType, VideoGenerator};
use crate::{VideoGenError, VideoGenInput};
use global_constants::{
    MIN_DURATION_SECONDS, MOCHI_ESTIMATED_TIME_SECONDS, MOCHI_MAX_DURATION_SECONDS,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Mochi-1, the photorealistic pipeline
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct MochiModel {
    pub prompt: String,
    #[schema(example = 6)]
    pub duration_seconds: u8,
}

impl VideoGenerator for MochiModel {
    fn model_type(&self) -> ModelType {
        ModelType::Photorealistic
    }

    fn validate_input(&self) -> Result<(), VideoGenError> {
        if self.prompt.trim().is_empty() {
            return Err(VideoGenError::InvalidInput(
                "Prompt cannot be empty".to_string(),
            ));
        }
        if self.duration_seconds < MIN_DURATION_SECONDS
            || self.duration_seconds > MOCHI_MAX_DURATION_SECONDS
        {
            return Err(VideoGenError::InvalidInput(format!(
                "Mochi-1 supports durations between {MIN_DURATION_SECONDS} and {MOCHI_MAX_DURATION_SECONDS} seconds, got {}",
                self.duration_seconds
            )));
        }
        Ok(())
    }

    fn get_prompt(&self) -> &str {
        &self.prompt
    }

    fn duration_seconds(&self) -> u8 {
        self.duration_seconds
    }

    fn max_duration_seconds(&self) -> u8 {
        MOCHI_MAX_DURATION_SECONDS
    }
}

impl MochiModel {
    /// Create from a unified generation request
    pub fn from_request(request: GenerationRequest) -> Result<VideoGenInput, VideoGenError> {
        let model = MochiModel {
            prompt: request.prompt,
            duration_seconds: request.duration,
        };
        model.validate_input()?;
        Ok(VideoGenInput::Mochi(model))
    }

    /// Capability metadata for the models endpoint
    pub fn model_info() -> ModelInfo {
        ModelInfo {
            id: ModelType::Photorealistic.model_id().to_string(),
            model_type: ModelType::Photorealistic,
            name: ModelType::Photorealistic.display_name().to_string(),
            quality: "Highest".to_string(),
            max_duration_seconds: MOCHI_MAX_DURATION_SECONDS,
            best_for: vec![
                "realistic".to_string(),
                "people".to_string(),
                "nature".to_string(),
                "objects".to_string(),
            ],
            estimated_time_seconds: MOCHI_ESTIMATED_TIME_SECONDS,
        }
    }
}
