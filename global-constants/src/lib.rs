// Service identity
pub const SERVICE_NAME: &str = "mythiq-video-creator";

// HTTP defaults
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_CORS_ORIGINS: [&str; 3] = [
    "https://mythiq-ui-production.up.railway.app",
    "http://localhost:5173",
    "http://localhost:3000",
];

// Request duration bounds in seconds
pub const MIN_DURATION_SECONDS: u8 = 2;
pub const DEFAULT_DURATION_SECONDS: u8 = 6;

// Per-model duration caps in seconds
pub const MOCHI_MAX_DURATION_SECONDS: u8 = 6;
pub const COGVIDEO_MAX_DURATION_SECONDS: u8 = 6;
pub const ANIMATEDIFF_MAX_DURATION_SECONDS: u8 = 2;

// Rough wall-clock estimates surfaced by the preview endpoint, in seconds
pub const MOCHI_ESTIMATED_TIME_SECONDS: u16 = 180;
pub const COGVIDEO_ESTIMATED_TIME_SECONDS: u16 = 120;
pub const ANIMATEDIFF_ESTIMATED_TIME_SECONDS: u16 = 60;

// Inference worker timeouts in seconds. Warmup covers a cold weight download
// on the worker, generation covers the longest sampling run we tolerate.
pub const WARMUP_TIMEOUT_SECONDS: u64 = 600;
pub const GENERATION_TIMEOUT_SECONDS: u64 = 300;

// Inline video payloads are returned as a data URL with this prefix
pub const VIDEO_DATA_URL_PREFIX: &str = "data:video/mp4;base64,";
