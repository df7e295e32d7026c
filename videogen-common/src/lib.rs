pub mod adapter_registry;
pub mod client;
pub mod generator;
pub mod models;
pub mod selector;
pub mod types;

pub use adapter_registry::{AdapterRegistry, ADAPTER_REGISTRY};
pub use client::VideoGenClient;
pub use models::{AnimateDiffModel, CogVideoModel, MochiModel};
pub use selector::{classify_prompt, select_model, PromptClassification};
pub use types::{
    ErrorResponse, GenerationRequest, GenerationResponse, HealthResponse, ModelInfo,
    ModelSelection, ModelType, ModelsLoaded, ModelsResponse, PreviewRequest, PreviewResponse,
    VideoGenError, VideoGenInput, VideoGenerator,
};
