// Light painter: a single trail entity tracing a cone-spiral path.
//
// The trail is not a recorded-position history. Index 0 is moved to the
// new head each frame, and every following point lerps toward its
// already-updated predecessor with a factor that decays toward the tail.
// That recursive chain is what gives the trail its elastic follow motion.

use crate::core::constants::*;
use crate::core::state::lerp;
use glam::Vec3;
use rand::prelude::*;

/// Immutable spiral parameters, drawn once at creation.
#[derive(Clone, Copy, Debug)]
pub struct PathParams {
    pub radius_base: f32,
    pub height: f32,
    pub angle_offset: f32,
    pub speed: f32,
}

pub struct LightPainter {
    /// Head-to-tail chain of trail positions; fixed length.
    pub points: Vec<Vec3>,
    /// Dust cloud resampled each frame around the leading trail points.
    pub sparkles: Vec<Vec3>,
    pub color: [f32; 3],
    pub params: PathParams,
    pub progress: f32,
    pub opacity: f32,
    pub active: bool,
    /// Staggered-activation hint; stored but not consulted by `update`.
    pub delay_ms: f32,
    rng: StdRng,
}

impl LightPainter {
    /// Draw color and path parameters from `rng`, which also seeds this
    /// painter's own sparkle RNG so later draws stay independent.
    pub fn new(delay_ms: f32, rng: &mut StdRng) -> Self {
        let color = XMAS_PALETTE[rng.gen_range(0..XMAS_PALETTE.len())];
        let params = PathParams {
            radius_base: RADIUS_BASE_MIN + rng.gen::<f32>() * RADIUS_BASE_SPAN,
            height: HEIGHT_MIN + rng.gen::<f32>() * HEIGHT_SPAN,
            angle_offset: rng.gen::<f32>() * std::f32::consts::TAU,
            speed: SPEED_MIN + rng.gen::<f32>() * SPEED_SPAN,
        };
        Self {
            points: vec![Vec3::ZERO; TRAIL_POINTS],
            sparkles: vec![Vec3::ZERO; SPARKLES_PER_PAINTER],
            color,
            params,
            progress: 0.0,
            opacity: 0.0,
            active: false,
            delay_ms,
            rng: StdRng::seed_from_u64(rng.gen()),
        }
    }

    /// Idempotent: activating an active painter changes nothing.
    pub fn activate(&mut self) {
        self.active = true;
    }

    #[inline]
    pub fn sparkle_opacity(&self) -> f32 {
        self.opacity * SPARKLE_OPACITY_SCALE
    }

    /// Advance one frame. `time` is elapsed seconds, `global_level` the
    /// scene-wide beauty level.
    pub fn update(&mut self, time: f32, global_level: f32) {
        if !self.active {
            return;
        }

        let target_opacity = global_level * PAINTER_OPACITY_SCALE;
        self.opacity = lerp(self.opacity, target_opacity, OPACITY_LERP);
        if self.opacity < VISIBILITY_EPSILON {
            // Invisible: the opacity keeps easing, the geometry stays put.
            return;
        }

        self.progress = (time * self.params.speed).fract();
        self.points[0] = head_position(&self.params, time);

        let n = self.points.len();
        for i in 1..n {
            let factor = TAIL_LERP_BASE - (i as f32 / n as f32) * TAIL_LERP_SPAN;
            let prev = self.points[i - 1];
            self.points[i] = self.points[i].lerp(prev, factor);
        }

        for sparkle in &mut self.sparkles {
            let src = self.points[self.rng.gen_range(0..SPARKLE_SOURCE_POINTS)];
            let dx = (self.rng.gen::<f32>() - 0.5) * 2.0 * SPARKLE_JITTER;
            let dy = (self.rng.gen::<f32>() - 0.5) * 2.0 * SPARKLE_JITTER;
            let dz = (self.rng.gen::<f32>() - 0.5) * 2.0 * SPARKLE_JITTER;
            *sparkle = src + Vec3::new(dx, dy, dz);
        }
    }
}

/// Cone-spiral position for a given progress in [0, 1), without jitter:
/// radius shrinks linearly to zero, the angle advances `SPIRAL_TURNS` full
/// rotations, the height rises linearly to `params.height`.
pub fn spiral_position(params: &PathParams, progress: f32) -> Vec3 {
    let radius = params.radius_base * (1.0 - progress);
    let angle = params.angle_offset + progress * SPIRAL_TURNS * std::f32::consts::TAU;
    Vec3::new(
        angle.cos() * radius,
        progress * params.height,
        angle.sin() * radius,
    )
}

/// Head position at `time`: the spiral position plus sinusoidal jitter.
/// A pure function of `time` and the painter's parameters, so re-running
/// it with the same inputs yields identical positions.
pub fn head_position(params: &PathParams, time: f32) -> Vec3 {
    let progress = (time * params.speed).fract();
    let base = spiral_position(params, progress);
    base + Vec3::new(
        (time * JITTER_FREQ_XZ + params.angle_offset).sin() * JITTER_AMP_XZ,
        (time * JITTER_FREQ_Y).cos() * JITTER_AMP_Y,
        (time * JITTER_FREQ_XZ + params.angle_offset).cos() * JITTER_AMP_XZ,
    )
}
