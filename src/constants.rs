//! Render-side tuning constants. Simulation constants live in `core::constants`.

// Bloom post chain
pub const BLOOM_STRENGTH: f32 = 2.0;
pub const BLOOM_THRESHOLD: f32 = 0.1;

// World-space sprite sizes
pub const SPARKLE_POINT_SIZE: f32 = 1.2;
pub const SNOW_POINT_SIZE: f32 = 0.8;
pub const STAR_GLOW_SIZE: f32 = 8.0;

// Warm gold for the star glow and rays
pub const STAR_COLOR: [f32; 3] = [1.0, 0.843, 0.0];
pub const SNOW_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
