// Host-side tests for the frame-level scene aggregate.
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
    pub mod population {
        include!("../src/core/population.rs");
    }
    pub mod particles {
        include!("../src/core/particles.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
}

use crate::core::constants::*;
use crate::core::scene::Scene;

/// Simulate `frames` frames at ~60fps starting from `now_ms`, returning the
/// final timestamp.
fn run_frames(scene: &mut Scene, now_ms: &mut f64, frames: usize) {
    for _ in 0..frames {
        *now_ms += 16.0;
        scene.advance(*now_ms, (*now_ms / 1000.0) as f32);
    }
}

#[test]
fn level_stays_bounded_through_typing_and_silence() {
    let mut scene = Scene::new(42);
    let mut now = 0.0;
    for burst in 0..20 {
        for _ in 0..30 {
            scene.on_key(now);
            run_frames(&mut scene, &mut now, 2);
        }
        // Silence long enough for the timeout and some decay.
        now += 1000.0 * (burst as f64 + 1.0);
        run_frames(&mut scene, &mut now, 60);
        assert!((0.0..=1.0).contains(&scene.state.current_level));
    }
}

#[test]
fn same_seed_and_inputs_give_identical_scenes() {
    let mut a = Scene::new(7);
    let mut b = Scene::new(7);
    let mut now_a = 0.0;
    let mut now_b = 0.0;
    for _ in 0..100 {
        a.on_key(now_a);
        b.on_key(now_b);
        run_frames(&mut a, &mut now_a, 3);
        run_frames(&mut b, &mut now_b, 3);
    }
    assert_eq!(a.population.len(), b.population.len());
    assert_eq!(a.state.current_level, b.state.current_level);
    for (pa, pb) in a.population.painters.iter().zip(&b.population.painters) {
        assert_eq!(pa.points, pb.points);
        assert_eq!(pa.opacity, pb.opacity);
    }
}

#[test]
fn first_keystroke_hides_the_hint_for_good() {
    let mut scene = Scene::new(1);
    assert!(scene.flags.hint_visible);
    scene.on_key(0.0);
    assert!(!scene.flags.hint_visible);
    let mut now = 0.0;
    run_frames(&mut scene, &mut now, 600);
    assert!(!scene.flags.hint_visible);
}

#[test]
fn sustained_typing_eventually_shows_the_quote() {
    let mut scene = Scene::new(2);
    let mut now = 0.0;
    // Type steadily; the level climbs toward 1 and crosses the show level.
    for _ in 0..4000 {
        scene.on_key(now);
        run_frames(&mut scene, &mut now, 1);
        if scene.flags.quote_visible {
            break;
        }
    }
    assert!(scene.flags.quote_visible);
    assert!(scene.state.current_level >= QUOTE_SHOW_LEVEL);
    // Going quiet: the quote must survive the whole hysteresis band.
    while scene.state.current_level >= QUOTE_HIDE_LEVEL {
        run_frames(&mut scene, &mut now, 1);
        if scene.state.current_level >= QUOTE_HIDE_LEVEL {
            assert!(scene.flags.quote_visible);
        }
    }
    run_frames(&mut scene, &mut now, 1);
    assert!(!scene.flags.quote_visible);
}

#[test]
fn camera_rises_with_the_level_and_keeps_its_framing() {
    let mut scene = Scene::new(3);
    let cam = scene.camera(16.0 / 9.0);
    assert_eq!(cam.eye.z, CAMERA_Z);
    assert_eq!(cam.eye.y, CAMERA_BASE_Y);
    assert_eq!(cam.target.y, CAMERA_TARGET_Y);
    assert!((cam.fovy_radians - CAMERA_FOVY_DEG.to_radians()).abs() < 1e-6);

    let mut now = 0.0;
    for _ in 0..2000 {
        scene.on_key(now);
        run_frames(&mut scene, &mut now, 1);
    }
    let lifted = scene.camera(16.0 / 9.0);
    assert!(lifted.eye.y > CAMERA_BASE_Y);
    assert!(lifted.eye.y <= CAMERA_BASE_Y + CAMERA_LEVEL_LIFT + 1e-4);
}

#[test]
fn scene_spins_at_a_constant_rate() {
    let mut scene = Scene::new(4);
    scene.advance(16.0, 10.0);
    assert!((scene.rotation - 10.0 * SCENE_ROTATION_SPEED).abs() < 1e-6);
    scene.advance(32.0, 20.0);
    assert!((scene.rotation - 20.0 * SCENE_ROTATION_SPEED).abs() < 1e-6);
}

#[test]
fn fog_thins_and_background_brightens_with_the_level() {
    let mut scene = Scene::new(5);
    let dark_fog = scene.fog_density();
    let dark_bg = scene.background_color();
    assert!((dark_fog - FOG_DENSITY_BASE).abs() < 1e-7);

    let mut now = 0.0;
    for _ in 0..2000 {
        scene.on_key(now);
        run_frames(&mut scene, &mut now, 1);
    }
    assert!(scene.fog_density() < dark_fog);
    let bright_bg = scene.background_color();
    for c in 0..3 {
        assert!(bright_bg[c] > dark_bg[c]);
    }
    // Cool tint: blue leads, green trails.
    assert!(bright_bg[2] > bright_bg[0]);
    assert!(bright_bg[0] > bright_bg[1]);
}

#[test]
fn keystrokes_grow_the_painter_population_up_to_the_cap() {
    let mut scene = Scene::new(6);
    let mut now = 0.0;
    for _ in 0..5000 {
        scene.on_key(now);
        now += 16.0;
    }
    assert_eq!(scene.population.len(), MAX_PAINTERS);
}
