pub mod http;

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::OnceCell;
use videogen_common::{ModelType, ModelsLoaded, VideoGenError, VideoGenInput, VideoGenerator};

use crate::engine::http::HttpEngine;

/// Boundary to an external video generation pipeline. `load` is the one-time
/// warmup that pulls weights; `generate` produces raw video bytes.
#[async_trait]
pub trait VideoEngine: Send + Sync {
    fn model_id(&self) -> &'static str;

    async fn load(&self) -> Result<(), VideoGenError>;

    async fn generate(&self, input: &VideoGenInput) -> Result<Vec<u8>, VideoGenError>;
}

struct EngineSlot {
    engine: Arc<dyn VideoEngine>,
    loaded: OnceCell<()>,
}

impl EngineSlot {
    fn new(engine: Arc<dyn VideoEngine>) -> Self {
        Self {
            engine,
            loaded: OnceCell::new(),
        }
    }
}

/// Process-wide mapping from model category to its engine. Engines are
/// constructed eagerly (cheap) but loaded lazily; concurrent first requests
/// for the same model await a single in-flight load.
pub struct EngineRegistry {
    photorealistic: EngineSlot,
    creative: EngineSlot,
    animation: EngineSlot,
}

impl EngineRegistry {
    pub fn from_env() -> Self {
        Self::with_engines(
            Arc::new(HttpEngine::from_env(ModelType::Photorealistic)),
            Arc::new(HttpEngine::from_env(ModelType::Creative)),
            Arc::new(HttpEngine::from_env(ModelType::Animation)),
        )
    }

    pub fn with_engines(
        photorealistic: Arc<dyn VideoEngine>,
        creative: Arc<dyn VideoEngine>,
        animation: Arc<dyn VideoEngine>,
    ) -> Self {
        Self {
            photorealistic: EngineSlot::new(photorealistic),
            creative: EngineSlot::new(creative),
            animation: EngineSlot::new(animation),
        }
    }

    fn slot(&self, model_type: ModelType) -> &EngineSlot {
        match model_type {
            ModelType::Photorealistic => &self.photorealistic,
            ModelType::Creative => &self.creative,
            ModelType::Animation => &self.animation,
        }
    }

    /// Run a validated input through its engine, loading the engine first if
    /// this is the model's first use
    pub async fn generate(&self, input: &VideoGenInput) -> Result<Vec<u8>, VideoGenError> {
        let slot = self.slot(input.model_type());
        slot.loaded
            .get_or_try_init(|| async {
                tracing::info!(model = slot.engine.model_id(), "loading model");
                slot.engine.load().await
            })
            .await?;
        slot.engine.generate(input).await
    }

    pub fn models_loaded(&self) -> ModelsLoaded {
        ModelsLoaded {
            mochi: self.photorealistic.loaded.initialized(),
            cogvideo: self.creative.loaded.initialized(),
            animatediff: self.animation.loaded.initialized(),
        }
    }
}
