use crate::types::ModelType;

/// Helper trait for resolving inference worker endpoints from environment
pub trait EndpointFromEnv {
    fn env_prefix(&self) -> &'static str;

    /// Read `{PREFIX}_ENDPOINT`, falling back to the given default
    fn endpoint_from_env(&self, default: &str) -> String {
        let key = format!("{}_ENDPOINT", self.env_prefix());
        std::env::var(&key).unwrap_or_else(|_| default.to_string())
    }
}

impl EndpointFromEnv for ModelType {
    fn env_prefix(&self) -> &'static str {
        match self {
            ModelType::Photorealistic => "MOCHI",
            ModelType::Creative => "COGVIDEO",
            ModelType::Animation => "ANIMATEDIFF",
        }
    }
}
