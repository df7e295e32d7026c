use crate::models::{AnimateDiffModel, CogVideoModel, MochiModel};
use base64::prelude::*;
use enum_dispatch::enum_dispatch;
use global_constants::{DEFAULT_DURATION_SECONDS, VIDEO_DATA_URL_PREFIX};
use serde::{Deserialize, Serialize};
use strum::Display;
use utoipa::ToSchema;

/// Core trait for video generation models
#[enum_dispatch]
pub trait VideoGenerator {
    /// Get the model category this input dispatches to
    fn model_type(&self) -> ModelType;

    /// Validate the input parameters
    fn validate_input(&self) -> Result<(), VideoGenError>;

    /// Get the prompt text
    fn get_prompt(&self) -> &str;

    /// Get the requested clip length in seconds
    fn duration_seconds(&self) -> u8;

    /// Get the longest clip this model can produce
    fn max_duration_seconds(&self) -> u8;
}

#[enum_dispatch(VideoGenerator)]
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(tag = "model", content = "data")]
pub enum VideoGenInput {
    Mochi(MochiModel),
    CogVideo(CogVideoModel),
    AnimateDiff(AnimateDiffModel),
}

/// The three model categories a request can resolve to
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, ToSchema, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ModelType {
    Photorealistic,
    Creative,
    Animation,
}

impl ModelType {
    /// Stable identifier used for engine endpoints, log fields and the
    /// health report
    pub fn model_id(self) -> &'static str {
        match self {
            ModelType::Photorealistic => "mochi",
            ModelType::Creative => "cogvideo",
            ModelType::Animation => "animatediff",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ModelType::Photorealistic => "Mochi-1",
            ModelType::Creative => "CogVideoX-5B",
            ModelType::Animation => "AnimateDiff",
        }
    }
}

/// Model choice as it appears on the wire, `auto` defers to the keyword
/// selector
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default, ToSchema, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ModelSelection {
    #[default]
    Auto,
    Photorealistic,
    Creative,
    Animation,
}

impl ModelSelection {
    /// The explicitly requested model, if any
    pub fn resolved(self) -> Option<ModelType> {
        match self {
            ModelSelection::Auto => None,
            ModelSelection::Photorealistic => Some(ModelType::Photorealistic),
            ModelSelection::Creative => Some(ModelType::Creative),
            ModelSelection::Animation => Some(ModelType::Animation),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct GenerationRequest {
    #[serde(default)]
    #[schema(example = "A beautiful sunset over calm ocean waves")]
    pub prompt: String,
    #[serde(default = "default_duration")]
    #[schema(example = 6)]
    pub duration: u8,
    #[serde(default)]
    pub model_type: ModelSelection,
}

fn default_duration() -> u8 {
    DEFAULT_DURATION_SECONDS
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct GenerationResponse {
    pub operation_id: String,
    pub success: bool,
    /// Base64 data URL carrying the generated MP4
    #[schema(example = "data:video/mp4;base64,AAAA...")]
    pub video_data: String,
    pub model_used: ModelType,
    pub duration: u8,
    pub prompt: String,
    #[schema(example = "2026-08-07T12:00:00+00:00")]
    pub timestamp: String,
    pub message: String,
}

impl GenerationResponse {
    /// Decode `video_data` back into raw video bytes, accepting the payload
    /// with or without its data-URL prefix
    pub fn video_bytes(&self) -> Result<Vec<u8>, VideoGenError> {
        let payload = self
            .video_data
            .strip_prefix(VIDEO_DATA_URL_PREFIX)
            .unwrap_or(&self.video_data);
        BASE64_STANDARD
            .decode(payload)
            .map_err(|e| VideoGenError::InvalidInput(format!("Invalid video payload: {e}")))
    }
}

/// Capability metadata for a single model
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ModelInfo {
    #[schema(example = "animatediff")]
    pub id: String,
    pub model_type: ModelType,
    #[schema(example = "AnimateDiff")]
    pub name: String,
    #[schema(example = "High")]
    pub quality: String,
    #[schema(example = 2)]
    pub max_duration_seconds: u8,
    #[schema(example = json!(["cartoon", "anime"]))]
    pub best_for: Vec<String>,
    #[schema(example = 60)]
    pub estimated_time_seconds: u16,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ModelsResponse {
    pub success: bool,
    pub auto_detection: bool,
    pub models: Vec<ModelInfo>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct PreviewRequest {
    #[serde(default)]
    #[schema(example = "A cute cat playing with a ball of yarn")]
    pub prompt: String,
    #[serde(default)]
    pub model_type: ModelSelection,
}

/// Model recommendation without running any generation
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct PreviewResponse {
    pub success: bool,
    pub prompt: String,
    pub recommended_model: ModelType,
    #[schema(example = "AnimateDiff")]
    pub model_name: String,
    #[schema(example = "matched keywords: cartoon")]
    pub reason: String,
    pub estimated_time_seconds: u16,
    pub max_duration_seconds: u8,
}

/// Per-model loaded flags, all false until a model's first use
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, ToSchema)]
pub struct ModelsLoaded {
    pub mochi: bool,
    pub cogvideo: bool,
    pub animatediff: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "online")]
    pub status: String,
    #[schema(example = "mythiq-video-creator")]
    pub service: String,
    #[schema(example = "cpu")]
    pub device: String,
    pub cuda_available: bool,
    pub models_loaded: ModelsLoaded,
    pub message: String,
    pub timestamp: String,
}

#[derive(Serialize, Deserialize, Debug, thiserror::Error, ToSchema)]
pub enum VideoGenError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Model load failed: {0}")]
    ModelLoadError(String),
    #[error("Generation failed: {0}")]
    GenerationError(String),
    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Error envelope returned by the service for rejected or failed requests
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: VideoGenError,
}

impl ErrorResponse {
    pub fn new(error: VideoGenError) -> Self {
        Self {
            success: false,
            error,
        }
    }
}
