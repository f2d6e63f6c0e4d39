// Host-side tests for the light painter trail entity.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod state {
        include!("../src/core/state.rs");
    }
    pub mod painter {
        include!("../src/core/painter.rs");
    }
}

use crate::core::constants::*;
use crate::core::painter::*;
use glam::Vec3;
use rand::{rngs::StdRng, SeedableRng};

fn fixed_params() -> PathParams {
    PathParams {
        radius_base: 10.0,
        height: 50.0,
        angle_offset: 0.0,
        speed: 0.01,
    }
}

fn make_painter(seed: u64) -> LightPainter {
    let mut rng = StdRng::seed_from_u64(seed);
    LightPainter::new(0.0, &mut rng)
}

#[test]
fn spiral_midpoint_has_half_radius_and_half_height() {
    // progress 0.5: radius 5, height 25, angle = 2 full turns (back to 0)
    let p = spiral_position(&fixed_params(), 0.5);
    assert!((p.x - 5.0).abs() < 1e-3);
    assert!((p.y - 25.0).abs() < 1e-3);
    assert!(p.z.abs() < 1e-3);
}

#[test]
fn spiral_starts_wide_and_low_ends_narrow_and_high() {
    let params = fixed_params();
    let start = spiral_position(&params, 0.0);
    assert!((start.x - params.radius_base).abs() < 1e-6);
    assert!(start.y.abs() < 1e-6);
    let near_tip = spiral_position(&params, 0.999);
    let tip_radius = (near_tip.x * near_tip.x + near_tip.z * near_tip.z).sqrt();
    assert!(tip_radius < 0.05);
    assert!((near_tip.y - 0.999 * params.height).abs() < 1e-3);
}

#[test]
fn head_position_is_deterministic_in_time() {
    let params = fixed_params();
    let a = head_position(&params, 123.456);
    let b = head_position(&params, 123.456);
    assert_eq!(a, b);
}

#[test]
fn head_jitter_stays_within_amplitude_bounds() {
    let params = fixed_params();
    for i in 0..500 {
        let t = i as f32 * 0.137;
        let d = head_position(&params, t) - spiral_position(&params, (t * params.speed).fract());
        assert!(d.x.abs() <= JITTER_AMP_XZ + 1e-5);
        assert!(d.y.abs() <= JITTER_AMP_Y + 1e-5);
        assert!(d.z.abs() <= JITTER_AMP_XZ + 1e-5);
    }
}

#[test]
fn new_painter_is_inactive_and_invisible() {
    let p = make_painter(7);
    assert!(!p.active);
    assert_eq!(p.opacity, 0.0);
    assert_eq!(p.points.len(), TRAIL_POINTS);
    assert_eq!(p.sparkles.len(), SPARKLES_PER_PAINTER);
}

#[test]
fn path_params_fall_inside_documented_ranges() {
    for seed in 0..50 {
        let p = make_painter(seed);
        assert!(p.params.radius_base >= RADIUS_BASE_MIN);
        assert!(p.params.radius_base <= RADIUS_BASE_MIN + RADIUS_BASE_SPAN);
        assert!(p.params.height >= HEIGHT_MIN);
        assert!(p.params.height <= HEIGHT_MIN + HEIGHT_SPAN);
        assert!(p.params.speed >= SPEED_MIN);
        assert!(p.params.speed <= SPEED_MIN + SPEED_SPAN);
        assert!(XMAS_PALETTE.contains(&p.color));
    }
}

#[test]
fn inactive_painter_ignores_updates() {
    let mut p = make_painter(1);
    p.update(10.0, 1.0);
    assert_eq!(p.opacity, 0.0);
    assert!(p.points.iter().all(|&v| v == Vec3::ZERO));
}

#[test]
fn activate_is_idempotent() {
    let mut p = make_painter(2);
    p.activate();
    p.activate();
    assert!(p.active);
}

#[test]
fn first_visible_update_places_head_on_path() {
    let mut p = make_painter(3);
    p.activate();
    let t = 42.0;
    p.update(t, 1.0);
    // opacity eased: lerp(0, 0.8, 0.05) = 0.04, above the epsilon
    assert!((p.opacity - PAINTER_OPACITY_SCALE * OPACITY_LERP).abs() < 1e-6);
    assert_eq!(p.points[0], head_position(&p.params, t));
    assert!((p.progress - (t * p.params.speed).fract()).abs() < 1e-6);
}

#[test]
fn invisible_painter_keeps_geometry_frozen() {
    let mut p = make_painter(4);
    p.activate();
    // Level zero: opacity target is zero, stays below the epsilon.
    p.update(42.0, 0.0);
    assert!(p.opacity < VISIBILITY_EPSILON);
    assert!(p.points.iter().all(|&v| v == Vec3::ZERO));
    assert!(p.sparkles.iter().all(|&v| v == Vec3::ZERO));
}

#[test]
fn tail_points_chase_their_predecessors() {
    let mut p = make_painter(5);
    p.activate();
    p.update(42.0, 1.0);
    // From an all-zero trail, point i moves a lerp fraction toward the
    // already-updated point i-1; verify the first link exactly.
    let n = p.points.len() as f32;
    let factor = TAIL_LERP_BASE - (1.0 / n) * TAIL_LERP_SPAN;
    let expected = p.points[0] * factor;
    assert!((p.points[1] - expected).length() < 1e-5);
    // The factor decays toward the tail, so later points move less.
    assert!(p.points[1].length() > p.points[2].length());
    assert!(p.points[2].length() > p.points[10].length());
}

#[test]
fn sparkles_cluster_around_leading_trail_points() {
    let mut p = make_painter(6);
    p.activate();
    for i in 0..20 {
        p.update(i as f32 * 0.016 + 30.0, 1.0);
    }
    let leading = &p.points[..SPARKLE_SOURCE_POINTS];
    for s in &p.sparkles {
        let near = leading.iter().any(|pt| {
            (s.x - pt.x).abs() <= SPARKLE_JITTER + 1e-4
                && (s.y - pt.y).abs() <= SPARKLE_JITTER + 1e-4
                && (s.z - pt.z).abs() <= SPARKLE_JITTER + 1e-4
        });
        assert!(near, "sparkle {s:?} is not near any leading trail point");
    }
}

#[test]
fn sparkle_opacity_is_scaled_down_from_trail_opacity() {
    let mut p = make_painter(8);
    p.activate();
    p.update(1.0, 1.0);
    assert!((p.sparkle_opacity() - p.opacity * SPARKLE_OPACITY_SCALE).abs() < 1e-7);
}
