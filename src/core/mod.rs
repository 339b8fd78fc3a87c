pub mod camera;
pub mod celebration;
pub mod config;
pub mod confetti;
pub mod constants;
pub mod heart;
pub mod navigator;
pub mod scene;

pub use camera::*;
pub use celebration::*;
pub use config::*;
pub use confetti::*;
pub use constants::*;
pub use heart::*;
pub use navigator::*;
pub use scene::*;

// Shaders bundled as string constants
pub static HEARTS_WGSL: &str = include_str!("../../shaders/hearts.wgsl");
