use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use base64::prelude::*;
use chrono::Utc;
use global_constants::{SERVICE_NAME, VIDEO_DATA_URL_PREFIX};
use uuid::Uuid;
use videogen_common::{
    classify_prompt, ErrorResponse, GenerationRequest, GenerationResponse, HealthResponse,
    ModelsResponse, PreviewRequest, PreviewResponse, VideoGenError, VideoGenerator,
    ADAPTER_REGISTRY,
};

use crate::state::AppState;

pub struct ApiError(VideoGenError);

impl From<VideoGenError> for ApiError {
    fn from(error: VideoGenError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            VideoGenError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            VideoGenError::ModelLoadError(_)
            | VideoGenError::GenerationError(_)
            | VideoGenError::NetworkError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(ErrorResponse::new(self.0))).into_response()
    }
}

pub async fn generate_video(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> Result<Json<GenerationResponse>, ApiError> {
    let operation_id = Uuid::new_v4().to_string();
    let input = ADAPTER_REGISTRY.adapt_request(request)?;
    tracing::info!(
        %operation_id,
        model = input.model_type().model_id(),
        duration = input.duration_seconds(),
        "video generation request"
    );

    let video_bytes = match state.engines.generate(&input).await {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::error!(%operation_id, %error, "video generation failed");
            return Err(error.into());
        }
    };

    tracing::info!(%operation_id, bytes = video_bytes.len(), "video generated");
    let video_data = format!(
        "{VIDEO_DATA_URL_PREFIX}{}",
        BASE64_STANDARD.encode(&video_bytes)
    );
    Ok(Json(GenerationResponse {
        operation_id,
        success: true,
        video_data,
        model_used: input.model_type(),
        duration: input.duration_seconds(),
        prompt: input.get_prompt().to_string(),
        timestamp: Utc::now().to_rfc3339(),
        message: "Video generated successfully".to_string(),
    }))
}

pub async fn video_models() -> Json<ModelsResponse> {
    Json(ADAPTER_REGISTRY.get_all_models())
}

pub async fn generate_video_preview(
    Json(request): Json<PreviewRequest>,
) -> Result<Json<PreviewResponse>, ApiError> {
    if request.prompt.trim().is_empty() {
        return Err(VideoGenError::InvalidInput("Prompt cannot be empty".to_string()).into());
    }

    let (model_type, reason) = match request.model_type.resolved() {
        Some(model_type) => (model_type, format!("explicitly requested {model_type}")),
        None => {
            let classification = classify_prompt(&request.prompt);
            let reason = if classification.matched_keywords.is_empty() {
                "no style keywords matched, defaulting to photorealistic".to_string()
            } else {
                format!(
                    "matched keywords: {}",
                    classification.matched_keywords.join(", ")
                )
            };
            (classification.model_type, reason)
        }
    };

    let info = ADAPTER_REGISTRY.get_model_info(model_type);
    Ok(Json(PreviewResponse {
        success: true,
        prompt: request.prompt,
        recommended_model: model_type,
        model_name: info.name,
        reason,
        estimated_time_seconds: info.estimated_time_seconds,
        max_duration_seconds: info.max_duration_seconds,
    }))
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "online".to_string(),
        service: SERVICE_NAME.to_string(),
        device: state.device.device.to_string(),
        cuda_available: state.device.cuda_available,
        models_loaded: state.engines.models_loaded(),
        message: "Video generation service ready".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}
