// Particle fields: falling snow and the tree-top star glow.

use crate::core::constants::*;
use glam::{Mat3, Vec3};
use rand::prelude::*;

/// Recycled snow field. A flake that falls below the floor is respawned at
/// a random position on the ceiling, so the field loops indefinitely.
pub struct SnowField {
    pub positions: Vec<Vec3>,
    pub velocities: Vec<f32>,
    pub opacity: f32,
    rng: StdRng,
}

impl SnowField {
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut positions = Vec::with_capacity(SNOW_COUNT);
        let mut velocities = Vec::with_capacity(SNOW_COUNT);
        for _ in 0..SNOW_COUNT {
            positions.push(Vec3::new(
                (rng.gen::<f32>() - 0.5) * SNOW_SPREAD,
                rng.gen::<f32>() * SNOW_CEILING,
                (rng.gen::<f32>() - 0.5) * SNOW_SPREAD,
            ));
            velocities.push(SNOW_FALL_MIN + rng.gen::<f32>() * SNOW_FALL_SPAN);
        }
        Self {
            positions,
            velocities,
            opacity: 0.0,
            rng,
        }
    }

    /// Advance one frame. While the scene is dark (`level <= SNOW_MIN_LEVEL`)
    /// the positions freeze and only the opacity keeps tracking the level.
    pub fn update(&mut self, level: f32) {
        self.opacity = level * SNOW_OPACITY_SCALE;
        if level <= SNOW_MIN_LEVEL {
            return;
        }
        for i in 0..self.positions.len() {
            let v = self.velocities[i];
            let p = &mut self.positions[i];
            p.y -= v;
            p.x += (p.y * SNOW_SWAY_FREQ).sin() * SNOW_SWAY_AMP;
            if p.y < SNOW_FLOOR {
                p.y = SNOW_CEILING;
                p.x = (self.rng.gen::<f32>() - 0.5) * SNOW_SPREAD;
                p.z = (self.rng.gen::<f32>() - 0.5) * SNOW_SPREAD;
            }
        }
    }
}

/// Glowing star at the tree top: a central glow plus `STAR_RAY_COUNT` rays
/// fanned around Z, the whole group spinning around Y with a slight wobble.
/// Opacity index 0 is the glow, 1..=STAR_RAY_COUNT the rays.
pub struct StarGlow {
    pub rotation_y: f32,
    pub rotation_z: f32,
    pub opacities: [f32; STAR_RAY_COUNT + 1],
    pub position: Vec3,
}

impl Default for StarGlow {
    fn default() -> Self {
        Self {
            rotation_y: 0.0,
            rotation_z: 0.0,
            opacities: [0.0; STAR_RAY_COUNT + 1],
            position: Vec3::from_array(STAR_POSITION),
        }
    }
}

impl StarGlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, time: f32, level: f32) {
        self.rotation_y = time * STAR_SPIN_SPEED;
        self.rotation_z = (time * 2.0).sin() * STAR_TILT_AMP;
        for (i, opacity) in self.opacities.iter_mut().enumerate() {
            let flicker = 0.7 + 0.3 * (time * 4.0 + i as f32).sin();
            let base = if i == 0 {
                STAR_GLOW_BASE_OPACITY
            } else {
                STAR_RAY_BASE_OPACITY
            };
            *opacity = base * level * flicker;
        }
    }

    /// World-space endpoints of the rays under the current group rotation.
    pub fn ray_segments(&self) -> [(Vec3, Vec3); STAR_RAY_COUNT] {
        let group = Mat3::from_rotation_y(self.rotation_y) * Mat3::from_rotation_z(self.rotation_z);
        let half = STAR_RAY_LENGTH * 0.5;
        std::array::from_fn(|i| {
            let fan = i as f32 / STAR_RAY_COUNT as f32 * std::f32::consts::PI;
            let dir = group * (Mat3::from_rotation_z(fan) * Vec3::Y);
            (self.position + dir * half, self.position - dir * half)
        })
    }
}
