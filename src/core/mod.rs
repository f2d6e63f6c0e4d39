pub mod constants;
pub mod painter;
pub mod particles;
pub mod population;
pub mod scene;
pub mod state;

pub use constants::*;
pub use painter::*;
pub use particles::*;
pub use population::*;
pub use scene::*;
pub use state::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
pub static POST_WGSL: &str = include_str!("../../shaders/post.wgsl");
