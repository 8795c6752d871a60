pub mod asset;
pub mod camera;
pub mod constants;
pub mod controller;
pub mod error;
pub mod loading;
pub mod mesh;
pub mod model;
pub mod picker;
pub mod projector;
pub mod regions;
pub mod scene;
pub mod signal;

pub use asset::{load_glb, model_placement};
pub use camera::*;
pub use constants::*;
pub use controller::*;
pub use error::AssetError;
pub use loading::*;
pub use mesh::*;
pub use model::*;
pub use picker::*;
pub use projector::*;
pub use regions::*;
pub use scene::*;
pub use signal::LoadSignal;

// Shaders bundled as string constants
pub static HEART_WGSL: &str = include_str!("../shaders/heart.wgsl");
