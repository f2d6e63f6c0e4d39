// Frame-level simulation aggregate.
//
// Owns every animated component and sequences one logical frame: beauty
// state first (everything else reads its level), then scene motion, then
// each component. There are no process-wide singletons; the web frontend
// holds a `Scene` behind `Rc<RefCell<…>>`, tests hold it by value.

use crate::core::constants::*;
use crate::core::particles::{SnowField, StarGlow};
use crate::core::population::Population;
use crate::core::state::{lerp, BeautyState, Camera, OverlayFlags};
use glam::Vec3;

pub struct Scene {
    pub state: BeautyState,
    pub flags: OverlayFlags,
    pub population: Population,
    pub snow: SnowField,
    pub star: StarGlow,
    pub camera_y: f32,
    pub rotation: f32,
}

impl Scene {
    /// Build a scene from one base seed; component RNGs get derived seeds
    /// so their draws stay independent of each other.
    pub fn new(seed: u64) -> Self {
        let mix = |i: u64| seed ^ i.wrapping_mul(0x9E37_79B9_7F4A_7C15);
        Self {
            state: BeautyState::new(),
            flags: OverlayFlags::default(),
            population: Population::new(mix(1)),
            snow: SnowField::new(mix(2)),
            star: StarGlow::new(),
            camera_y: CAMERA_BASE_Y,
            rotation: 0.0,
        }
    }

    /// Handle one keystroke at `now_ms` (milliseconds, monotonic origin).
    pub fn on_key(&mut self, now_ms: f64) {
        self.state.on_input(now_ms);
        self.flags.on_input();
        self.flags.update(self.state.is_typing, self.state.current_level);
        self.population.on_input();
    }

    pub fn on_key_release(&mut self, now_ms: f64) {
        self.state.on_release(now_ms);
    }

    /// Advance one frame: `now_ms` for the idle timeout, `time` in elapsed
    /// seconds for all path and flicker functions.
    pub fn advance(&mut self, now_ms: f64, time: f32) {
        self.state.tick(now_ms);
        self.flags.update(self.state.is_typing, self.state.current_level);

        self.rotation = time * SCENE_ROTATION_SPEED;
        let target_y = CAMERA_BASE_Y + self.state.current_level * CAMERA_LEVEL_LIFT;
        self.camera_y = lerp(self.camera_y, target_y, CAMERA_Y_LERP);

        let level = self.state.current_level;
        self.population.update(time, level);
        self.snow.update(level);
        self.star.update(time, level);
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: Vec3::new(0.0, self.camera_y, CAMERA_Z),
            target: Vec3::new(0.0, CAMERA_TARGET_Y, 0.0),
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Fog thins out as the scene brightens.
    pub fn fog_density(&self) -> f32 {
        FOG_DENSITY_BASE - self.state.current_level * FOG_DENSITY_LEVEL_DROP
    }

    /// Night-blue background that brightens with the level.
    pub fn background_color(&self) -> [f32; 3] {
        let intensity = BG_INTENSITY_BASE + self.state.current_level * BG_INTENSITY_SPAN;
        [
            intensity * BG_TINT[0],
            intensity * BG_TINT[1],
            intensity * BG_TINT[2],
        ]
    }
}
