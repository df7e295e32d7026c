pub mod animatediff;
pub mod cogvideo;
pub mod mochi;

pub use animatediff::AnimateDiffModel;
pub use cogvideo::CogVideoModel;
pub use mochi::MochiModel;
