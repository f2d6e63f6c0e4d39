// Beauty-level state machine and camera types shared with the web frontend.
//
// These types avoid platform-specific APIs so they run (and are tested) on
// the host as well as on wasm. All time is passed in explicitly as
// milliseconds from an arbitrary monotonic origin.

use crate::core::constants::*;
use glam::{Mat4, Vec3};

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Global activity intensity in [0, 1], driven by keystrokes and smoothed
/// toward a clamped target with distinct fade-in/fade-out rates.
///
/// `current_level` is continuous: each tick moves it by at most the lerp
/// fraction of its remaining distance to the target, never a jump.
#[derive(Clone, Debug)]
pub struct BeautyState {
    pub current_level: f32,
    pub target_level: f32,
    pub is_typing: bool,
    pub last_input_ms: f64,
    pub key_press_count: u32,
}

impl Default for BeautyState {
    fn default() -> Self {
        Self {
            current_level: 0.0,
            target_level: 0.0,
            is_typing: false,
            last_input_ms: 0.0,
            key_press_count: 0,
        }
    }
}

impl BeautyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a keystroke at `now_ms`.
    pub fn on_input(&mut self, now_ms: f64) {
        self.is_typing = true;
        self.last_input_ms = now_ms;
        self.key_press_count += 1;
        self.target_level = (self.target_level + TARGET_STEP_PER_KEY).min(1.0);
    }

    /// Register a key release; extends the typing window without raising
    /// the target.
    pub fn on_release(&mut self, now_ms: f64) {
        self.last_input_ms = now_ms;
    }

    /// Advance one frame. Drops the typing flag after the idle timeout and
    /// eases `current_level` toward the (possibly decaying) target.
    pub fn tick(&mut self, now_ms: f64) {
        if self.is_typing && now_ms - self.last_input_ms > TYPING_TIMEOUT_MS {
            self.is_typing = false;
        }
        if self.is_typing {
            self.current_level = lerp(self.current_level, self.target_level, FADE_IN_SPEED);
        } else {
            // Darkness reclaims the scene: the target itself decays.
            self.target_level = (self.target_level - TARGET_DECAY_PER_TICK).max(0.0);
            self.current_level = lerp(self.current_level, self.target_level, FADE_OUT_SPEED);
        }
    }

    #[inline]
    pub fn level(&self) -> f32 {
        self.current_level
    }
}

/// Visibility flags for the DOM overlay, derived from input and level.
///
/// The quote uses an asymmetric hysteresis band: it appears once the level
/// reaches `QUOTE_SHOW_LEVEL` and disappears only below `QUOTE_HIDE_LEVEL`,
/// so it cannot flicker while the level hovers in between.
#[derive(Clone, Copy, Debug)]
pub struct OverlayFlags {
    pub hint_visible: bool,
    pub typing_indicator: bool,
    pub quote_visible: bool,
}

impl Default for OverlayFlags {
    fn default() -> Self {
        Self {
            hint_visible: true,
            typing_indicator: false,
            quote_visible: false,
        }
    }
}

impl OverlayFlags {
    /// The idle hint disappears on the first keystroke and never returns.
    pub fn on_input(&mut self) {
        self.hint_visible = false;
    }

    pub fn update(&mut self, is_typing: bool, level: f32) {
        self.typing_indicator = is_typing;
        if level >= QUOTE_SHOW_LEVEL {
            self.quote_visible = true;
        } else if level < QUOTE_HIDE_LEVEL {
            self.quote_visible = false;
        }
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}
