use std::sync::Arc;

use crate::device::{self, DeviceInfo};
use crate::engine::EngineRegistry;

#[derive(Clone)]
pub struct AppState {
    pub engines: Arc<EngineRegistry>,
    pub device: DeviceInfo,
}

impl AppState {
    pub fn from_env() -> Self {
        Self {
            engines: Arc::new(EngineRegistry::from_env()),
            device: device::detect(),
        }
    }
}
