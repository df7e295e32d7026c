use crate::types::{GenerationRequest, ModelInfo, ModelType, VideoGenerator};
use crate::{VideoGenError, VideoGenInput};
use global_constants::{
    ANIMATEDIFF_ESTIMATED_TIME_SECONDS, ANIMATEDIFF_MAX_DURATION_SECONDS, MIN_DURATION_SECONDS,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// AnimateDiff, the cartoon and anime pipeline. Clips are capped at two
/// seconds by the underlying motion module.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct AnimateDiffModel {
    pub prompt: String,
    #[schema(example = 2)]
    pub duration_seconds: u8,
}

impl VideoGenerator for AnimateDiffModel {
    fn model_type(&self) -> ModelType {
        ModelType::Animation
    }

    fn validate_input(&self) -> Result<(), VideoGenError> {
        if self.prompt.trim().is_empty() {
            return Err(VideoGenError::InvalidInput(
                "Prompt cannot be empty".to_string(),
            ));
        }
        if self.duration_seconds < MIN_DURATION_SECONDS {
            return Err(VideoGenError::InvalidInput(format!(
                "Duration must be at least {MIN_DURATION_SECONDS} seconds, got {}",
                self.duration_seconds
            )));
        }
        if self.duration_seconds > ANIMATEDIFF_MAX_DURATION_SECONDS {
            return Err(VideoGenError::InvalidInput(format!(
                "AnimateDiff is capped at {ANIMATEDIFF_MAX_DURATION_SECONDS} second clips, got {}",
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
        ANIMATEDIFF_MAX_DURATION_SECONDS
    }
}

impl AnimateDiffModel {
    /// Create from a unified generation request
    pub fn from_request(request: GenerationRequest) -> Result<VideoGenInput, VideoGenError> {
        let model = AnimateDiffModel {
            prompt: request.prompt,
            duration_seconds: request.duration,
        };
        model.validate_input()?;
        Ok(VideoGenInput::AnimateDiff(model))
    }

    /// Capability metadata for the models endpoint
    pub fn model_info() -> ModelInfo {
        ModelInfo {
            id: ModelType::Animation.model_id().to_string(),
            model_type: ModelType::Animation,
            name: ModelType::Animation.display_name().to_string(),
            quality: "High".to_string(),
            max_duration_seconds: ANIMATEDIFF_MAX_DURATION_SECONDS,
            best_for: vec![
                "cartoon".to_string(),
                "anime".to_string(),
                "character".to_string(),
                "illustration".to_string(),
            ],
            estimated_time_seconds: ANIMATEDIFF_ESTIMATED_TIME_SECONDS,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejects_durations_over_the_cap() {
        let model = AnimateDiffModel {
            prompt: "a cartoon dog chasing a ball".to_string(),
            duration_seconds: 6,
        };
        let err = model.validate_input().unwrap_err();
        match err {
            VideoGenError::InvalidInput(message) => {
                assert!(message.contains("2 second"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn accepts_the_cap_itself() {
        let model = AnimateDiffModel {
            prompt: "a cartoon dog chasing a ball".to_string(),
            duration_seconds: ANIMATEDIFF_MAX_DURATION_SECONDS,
        };
        assert!(model.validate_input().is_ok());
    }
}
