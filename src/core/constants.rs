// Simulation tuning constants shared with the web frontend.
//
// These express intended behavior (timeouts, smoothing factors, clamp
// limits) and keep magic numbers out of the update code.

// Input activity -> beauty level
pub const TYPING_TIMEOUT_MS: f64 = 2000.0; // idle time before typing flag drops
pub const FADE_IN_SPEED: f32 = 0.03; // lerp factor toward target while typing
pub const FADE_OUT_SPEED: f32 = 0.01; // lerp factor toward target while idle
pub const TARGET_STEP_PER_KEY: f32 = 0.02; // target gain per keystroke
pub const TARGET_DECAY_PER_TICK: f32 = 0.008; // passive target decay while idle

// Quote overlay hysteresis band (show high, hide low, never flicker between)
pub const QUOTE_SHOW_LEVEL: f32 = 0.5;
pub const QUOTE_HIDE_LEVEL: f32 = 0.3;

// Painter population
pub const MAX_PAINTERS: usize = 30;
pub const SPAWN_PROBABILITY: f64 = 0.3; // per keystroke, while below the cap
pub const ACTIVATE_PROBABILITY: f64 = 0.5; // per keystroke, per inactive painter
pub const SPAWN_DELAY_STEP_MS: f32 = 100.0; // staggered-activation hint per spawn

// Trail geometry
pub const TRAIL_POINTS: usize = 80;
pub const TAIL_LERP_BASE: f32 = 0.18; // follow factor at the head
pub const TAIL_LERP_SPAN: f32 = 0.12; // subtracted linearly toward the tail
pub const OPACITY_LERP: f32 = 0.05;
pub const PAINTER_OPACITY_SCALE: f32 = 0.8; // painter target = level * this
pub const VISIBILITY_EPSILON: f32 = 0.01; // below this, skip path recompute

// Cone-spiral path randomization ranges (per painter, drawn once)
pub const RADIUS_BASE_MIN: f32 = 8.0;
pub const RADIUS_BASE_SPAN: f32 = 25.0;
pub const HEIGHT_MIN: f32 = 35.0;
pub const HEIGHT_SPAN: f32 = 70.0;
pub const SPEED_MIN: f32 = 0.008;
pub const SPEED_SPAN: f32 = 0.015;
pub const SPIRAL_TURNS: f32 = 4.0; // full rotations from base to tip

// Organic head jitter (deterministic in time and angle offset)
pub const JITTER_AMP_XZ: f32 = 1.5;
pub const JITTER_AMP_Y: f32 = 0.8;
pub const JITTER_FREQ_XZ: f32 = 2.0;
pub const JITTER_FREQ_Y: f32 = 1.5;

// Sparkle dust around the leading part of each trail
pub const SPARKLES_PER_PAINTER: usize = 25;
pub const SPARKLE_SOURCE_POINTS: usize = 15; // sampled with replacement
pub const SPARKLE_JITTER: f32 = 1.5; // +/- per axis
pub const SPARKLE_OPACITY_SCALE: f32 = 0.6; // relative to painter opacity

// Snow field
pub const SNOW_COUNT: usize = 800;
pub const SNOW_SPREAD: f32 = 150.0; // xz extent, centered on origin
pub const SNOW_CEILING: f32 = 120.0;
pub const SNOW_FLOOR: f32 = -5.0; // recycle boundary
pub const SNOW_FALL_MIN: f32 = 0.03;
pub const SNOW_FALL_SPAN: f32 = 0.05;
pub const SNOW_SWAY_FREQ: f32 = 0.05; // keyed to current height
pub const SNOW_SWAY_AMP: f32 = 0.02;
pub const SNOW_OPACITY_SCALE: f32 = 0.5;
pub const SNOW_MIN_LEVEL: f32 = 0.1; // positions frozen at or below this

// Tree-top star
pub const STAR_RAY_COUNT: usize = 8;
pub const STAR_RAY_LENGTH: f32 = 8.0;
pub const STAR_POSITION: [f32; 3] = [0.0, 85.0, 0.0];
pub const STAR_GLOW_BASE_OPACITY: f32 = 0.6;
pub const STAR_RAY_BASE_OPACITY: f32 = 0.4;
pub const STAR_SPIN_SPEED: f32 = 0.5; // rad/s around Y
pub const STAR_TILT_AMP: f32 = 0.1; // sin(2t) wobble around Z

// Scene motion and camera
pub const SCENE_ROTATION_SPEED: f32 = 0.1; // music-box spin, rad/s
pub const CAMERA_BASE_Y: f32 = 35.0;
pub const CAMERA_LEVEL_LIFT: f32 = 10.0; // extra height at full beauty
pub const CAMERA_Y_LERP: f32 = 0.02;
pub const CAMERA_Z: f32 = 110.0;
pub const CAMERA_TARGET_Y: f32 = 35.0;
pub const CAMERA_FOVY_DEG: f32 = 60.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Atmosphere
pub const FOG_DENSITY_BASE: f32 = 0.004;
pub const FOG_DENSITY_LEVEL_DROP: f32 = 0.002;
pub const BG_INTENSITY_BASE: f32 = 0.02;
pub const BG_INTENSITY_SPAN: f32 = 0.03;
pub const BG_TINT: [f32; 3] = [1.0, 0.9, 1.1]; // cool night tint

// Christmas palette (gold, coral, forest green, lemon, bright red, mint)
pub const XMAS_PALETTE: [[f32; 3]; 6] = [
    [1.0, 0.843, 0.0],
    [1.0, 0.42, 0.42],
    [0.133, 0.545, 0.133],
    [1.0, 0.98, 0.804],
    [1.0, 0.278, 0.341],
    [0.18, 0.835, 0.451],
];
