use crate::types::{GenerationRequest, ModelInfo, ModelType, VideoGenerator};
use crate::{VideoGenError, VideoGenInput};
use global_constants::{
    COGVIDEO_ESTIMATED_TIME_SECONDS, COGVIDEO_MAX_DURATION_SECONDS, MIN_DURATION_SECONDS,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// CogVideoX-5B, the creative and artistic pipeline
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CogVideoModel {
    pub prompt: String,
    #[schema(example = 6)]
    pub duration_seconds: u8,
}

impl VideoGenerator for CogVideoModel {
    fn model_type(&self) -> ModelType {
        ModelType::Creative
    }

    fn validate_input(&self) -> Result<(), VideoGenError> {
        if self.prompt.trim().is_empty() {
            return Err(VideoGenError::InvalidInput(
                "Prompt cannot be empty".to_string(),
            ));
        }
        if self.duration_seconds < MIN_DURATION_SECONDS
            || self.duration_seconds > COGVIDEO_MAX_DURATION_SECONDS
        {
            return Err(VideoGenError::InvalidInput(format!(
                "CogVideoX-5B supports durations between {MIN_DURATION_SECONDS} and {COGVIDEO_MAX_DURATION_SECONDS} seconds, got {}",
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
        COGVIDEO_MAX_DURATION_SECONDS
    }
}

impl CogVideoModel {
    /// Create from a unified generation request
    pub fn from_request(request: GenerationRequest) -> Result<VideoGenInput, VideoGenError> {
        let model = CogVideoModel {
            prompt: request.prompt,
            duration_seconds: request.duration,
        };
        model.validate_input()?;
        Ok(VideoGenInput::CogVideo(model))
    }

    /// Capability metadata for the models endpoint
    pub fn model_info() -> ModelInfo {
        ModelInfo {
            id: ModelType::Creative.model_id().to_string(),
            model_type: ModelType::Creative,
            name: ModelType::Creative.display_name().to_string(),
            quality: "High".to_string(),
            max_duration_seconds: COGVIDEO_MAX_DURATION_SECONDS,
            best_for: vec![
                "artistic".to_string(),
                "abstract".to_string(),
                "fantasy".to_string(),
                "creative".to_string(),
            ],
            estimated_time_seconds: COGVIDEO_ESTIMATED_TIME_SECONDS,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejects_empty_prompt() {
        let model = CogVideoModel {
            prompt: "   ".to_string(),
            duration_seconds: 6,
        };
        assert!(matches!(
            model.validate_input(),
            Err(VideoGenError::InvalidInput(_))
        ));
    }
}
