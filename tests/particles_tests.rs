// Host-side tests for the snow field and the tree-top star.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod particles {
        include!("../src/core/particles.rs");
    }
}

use crate::core::constants::*;
use crate::core::particles::{SnowField, StarGlow};

#[test]
fn snow_spawns_inside_the_documented_volume() {
    let snow = SnowField::new(42);
    assert_eq!(snow.positions.len(), SNOW_COUNT);
    assert_eq!(snow.velocities.len(), SNOW_COUNT);
    for p in &snow.positions {
        assert!(p.x.abs() <= SNOW_SPREAD / 2.0);
        assert!(p.z.abs() <= SNOW_SPREAD / 2.0);
        assert!((0.0..SNOW_CEILING).contains(&p.y));
    }
    for v in &snow.velocities {
        assert!(*v >= SNOW_FALL_MIN);
        assert!(*v <= SNOW_FALL_MIN + SNOW_FALL_SPAN);
    }
}

#[test]
fn snow_freezes_while_the_scene_is_dark() {
    let mut snow = SnowField::new(1);
    let before = snow.positions.clone();
    snow.update(SNOW_MIN_LEVEL);
    assert_eq!(snow.positions, before);
    assert!((snow.opacity - SNOW_MIN_LEVEL * SNOW_OPACITY_SCALE).abs() < 1e-7);
}

#[test]
fn snow_falls_or_recycles_when_bright() {
    let mut snow = SnowField::new(2);
    let before: Vec<f32> = snow.positions.iter().map(|p| p.y).collect();
    let vels = snow.velocities.clone();
    snow.update(0.5);
    for i in 0..snow.positions.len() {
        let y = snow.positions[i].y;
        let fell = (y - (before[i] - vels[i])).abs() < 1e-5;
        let recycled = (y - SNOW_CEILING).abs() < 1e-5;
        assert!(fell || recycled);
    }
    assert!((snow.opacity - 0.25).abs() < 1e-6);
}

#[test]
fn snowflake_below_the_floor_respawns_at_the_ceiling() {
    let mut snow = SnowField::new(3);
    snow.positions[0].y = SNOW_FLOOR - 1.0;
    snow.update(1.0);
    let p = snow.positions[0];
    assert!((p.y - SNOW_CEILING).abs() < 1e-5);
    assert!(p.x.abs() <= SNOW_SPREAD / 2.0);
    assert!(p.z.abs() <= SNOW_SPREAD / 2.0);
}

#[test]
fn star_is_dark_at_level_zero() {
    let mut star = StarGlow::new();
    star.update(3.0, 0.0);
    assert!(star.opacities.iter().all(|&o| o == 0.0));
}

#[test]
fn star_flicker_stays_inside_its_band() {
    let mut star = StarGlow::new();
    for i in 0..500 {
        let t = i as f32 * 0.037;
        star.update(t, 1.0);
        let glow = star.opacities[0];
        assert!(glow >= STAR_GLOW_BASE_OPACITY * 0.4 - 1e-5);
        assert!(glow <= STAR_GLOW_BASE_OPACITY + 1e-5);
        for &ray in &star.opacities[1..] {
            assert!(ray >= STAR_RAY_BASE_OPACITY * 0.4 - 1e-5);
            assert!(ray <= STAR_RAY_BASE_OPACITY + 1e-5);
        }
    }
}

#[test]
fn star_opacity_scales_linearly_with_level() {
    let mut a = StarGlow::new();
    let mut b = StarGlow::new();
    a.update(1.0, 1.0);
    b.update(1.0, 0.5);
    for i in 0..a.opacities.len() {
        assert!((b.opacities[i] - a.opacities[i] * 0.5).abs() < 1e-6);
    }
}

#[test]
fn ray_segments_are_centered_on_the_star_with_fixed_length() {
    let mut star = StarGlow::new();
    star.update(2.5, 1.0);
    let segments = star.ray_segments();
    assert_eq!(segments.len(), STAR_RAY_COUNT);
    for (a, b) in segments {
        assert!(((a - b).length() - STAR_RAY_LENGTH).abs() < 1e-3);
        let mid = (a + b) * 0.5;
        assert!((mid - star.position).length() < 1e-3);
    }
}
