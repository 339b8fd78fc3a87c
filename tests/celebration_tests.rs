// Host-side tests for celebration schedules and confetti physics.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod card {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod confetti {
        include!("../src/core/confetti.rs");
    }
    pub mod celebration {
        include!("../src/core/celebration.rs");
    }
}

use card::celebration::*;
use card::confetti::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(2024)
}

#[test]
fn one_shot_has_three_waves_at_fixed_offsets() {
    let seq = one_shot_sequence();
    assert_eq!(wave_delays(&seq), vec![0, 300, 600]);
    let counts: Vec<u32> = seq.iter().map(|b| b.config.particle_count).collect();
    assert_eq!(counts, vec![150, 30, 20, 20]);
}

#[test]
fn one_shot_first_wave_uses_warm_palette() {
    let first = &one_shot_sequence()[0].config;
    assert_eq!(first.spread, 70.0);
    assert_eq!(first.origin, Origin { x: 0.5, y: 0.6 });
    assert_eq!(first.colors.len(), 4);
    assert_eq!(first.colors[0], Rgb::from_u32(0xff0000));
    assert_eq!(first.shapes.as_slice(), &[Shape::Square, Shape::Circle]);
}

#[test]
fn one_shot_last_wave_fires_from_both_edges_towards_center() {
    let seq = one_shot_sequence();
    let last: Vec<_> = seq.iter().filter(|b| b.delay_ms == 600).collect();
    assert_eq!(last.len(), 2);
    assert_eq!((last[0].config.angle, last[0].config.origin.x), (60.0, 0.0));
    assert_eq!((last[1].config.angle, last[1].config.origin.x), (120.0, 1.0));
    for b in &last {
        assert_eq!(b.config.shapes.as_slice(), &[Shape::Heart]);
        assert_eq!(b.config.spread, 55.0);
    }
}

#[test]
fn sustained_stream_fires_twenty_ticks_then_cancels() {
    let mut task = SustainedBurst::with_timing(0.0, 250.0, 5000.0);
    let mut r = rng();
    for k in 0..20 {
        let now = k as f64 * 250.0;
        match task.on_tick(now, &mut r) {
            StreamTick::Fire { time_left_ms, bursts } => {
                assert_eq!(time_left_ms, 5000.0 - now);
                assert_eq!(bursts[0].particle_count, bursts[1].particle_count);
            }
            StreamTick::Finished => panic!("stream stopped early at {now}ms"),
        }
    }
    assert_eq!(task.fired(), 20);
    assert_eq!(task.on_tick(5000.0, &mut r), StreamTick::Finished);
    assert!(task.is_finished());
    assert_eq!(task.on_tick(5250.0, &mut r), StreamTick::Finished);
    assert_eq!(task.fired(), 20);
}

#[test]
fn twentieth_tick_has_250ms_left_and_few_particles() {
    let mut task = SustainedBurst::with_timing(0.0, 250.0, 5000.0);
    let mut r = rng();
    match task.on_tick(4750.0, &mut r) {
        StreamTick::Fire { time_left_ms, bursts } => {
            assert_eq!(time_left_ms, 250.0);
            assert_eq!(bursts[0].particle_count, 2);
        }
        StreamTick::Finished => panic!("expected a burst"),
    }
}

#[test]
fn particle_count_decays_linearly() {
    let mut r = rng();
    let mut counts = Vec::new();
    for now in [0.0, 1250.0, 2500.0, 3750.0] {
        let mut task = SustainedBurst::with_timing(0.0, 250.0, 5000.0);
        if let StreamTick::Fire { bursts, .. } = task.on_tick(now, &mut r) {
            counts.push(bursts[0].particle_count);
        }
    }
    assert_eq!(counts, vec![50, 37, 25, 12]);
}

#[test]
fn stream_bursts_are_mirrored_left_and_right() {
    let mut task = SustainedBurst::new(1000.0);
    let mut r = rng();
    for i in 0..10 {
        let StreamTick::Fire { bursts, .. } = task.on_tick(1000.0 + i as f64 * 250.0, &mut r) else {
            panic!("stream ended early");
        };
        let [l, rgt] = &bursts;
        assert!((0.1..0.3).contains(&l.origin.x));
        assert!((0.7..0.9).contains(&rgt.origin.x));
        for b in &bursts {
            assert!(b.origin.y >= -0.2 && b.origin.y < 0.8);
            assert_eq!(b.spread, 360.0);
            assert_eq!(b.start_velocity, 30.0);
            assert_eq!(b.ticks, 60);
            assert_eq!(b.z_index, 100);
        }
    }
}

#[test]
fn cancelled_stream_stops_firing() {
    let mut task = SustainedBurst::new(0.0);
    task.cancel();
    assert_eq!(task.on_tick(10.0, &mut rng()), StreamTick::Finished);
}

#[test]
fn rgb_parses_long_and_short_hex() {
    assert_eq!(Rgb::parse("#ff69b4"), Some(Rgb { r: 255, g: 105, b: 180 }));
    assert_eq!(Rgb::parse("#fff"), Some(Rgb::WHITE));
    assert_eq!(Rgb::parse("ff69b4"), None);
    assert_eq!(Rgb::parse("#12345"), None);
    assert_eq!(palette(&["#ff0000", "nope", "#00ff00"]).len(), 2);
    assert_eq!(Rgb::from_u32(0xff0000).to_css(0.5), "rgba(255, 0, 0, 0.500)");
}

#[test]
fn fire_spawns_particles_at_origin() {
    let mut sys = ConfettiSystem::new(rng());
    let cfg = BurstConfig {
        particle_count: 40,
        origin: Origin { x: 0.25, y: 0.5 },
        ..Default::default()
    };
    assert_eq!(sys.fire(&cfg, 800.0, 600.0), 40);
    assert_eq!(sys.particles().len(), 40);
    for p in sys.particles() {
        assert_eq!((p.x, p.y), (200.0, 300.0));
        assert!(cfg.colors.contains(&p.color));
        assert!(cfg.shapes.contains(&p.shape));
    }
}

#[test]
fn particles_expire_after_their_tick_budget() {
    let mut sys = ConfettiSystem::new(rng());
    let cfg = BurstConfig {
        particle_count: 10,
        ticks: 60,
        ..Default::default()
    };
    sys.fire(&cfg, 100.0, 100.0);
    for _ in 0..59 {
        assert_eq!(sys.step(), 10);
    }
    assert_eq!(sys.step(), 0);
    assert!(sys.is_idle());
}

#[test]
fn particles_fade_and_slow_down() {
    let mut sys = ConfettiSystem::new(rng());
    sys.fire(&BurstConfig::default(), 1000.0, 1000.0);
    sys.step();
    let first: Vec<(f32, f32)> = sys.particles().iter().map(|p| (p.opacity(), p.velocity())).collect();
    for _ in 0..20 {
        sys.step();
    }
    for (p, (alpha0, v0)) in sys.particles().iter().zip(first) {
        assert!(p.opacity() < alpha0);
        assert!(p.velocity() < v0);
    }
}

#[test]
fn upward_burst_rises_then_falls() {
    let mut sys = ConfettiSystem::new(rng());
    let cfg = BurstConfig {
        particle_count: 20,
        spread: 10.0,
        start_velocity: 20.0,
        ..Default::default()
    };
    sys.fire(&cfg, 1000.0, 1000.0);
    for _ in 0..5 {
        sys.step();
    }
    assert!(sys.particles().iter().all(|p| p.y < 500.0), "should rise first");
    for _ in 0..150 {
        sys.step();
    }
    assert!(sys.particles().iter().all(|p| p.y > 500.0), "gravity wins eventually");
}

#[test]
fn empty_colors_and_shapes_fall_back() {
    let mut sys = ConfettiSystem::new(rng());
    let cfg = BurstConfig {
        particle_count: 3,
        colors: Default::default(),
        shapes: Default::default(),
        z_index: 7,
        ..Default::default()
    };
    sys.fire(&cfg, 10.0, 10.0);
    assert!(sys.particles().iter().all(|p| p.color == Rgb::WHITE && p.shape == Shape::Square));
    assert_eq!(sys.z_index(), 7);
}

#[test]
fn star_outline_alternates_radii() {
    let mut sys = ConfettiSystem::new(rng());
    sys.fire(&BurstConfig { particle_count: 1, ..Default::default() }, 0.0, 0.0);
    let p = &sys.particles()[0];
    for (i, [x, y]) in p.star().iter().enumerate() {
        let r = ((x - p.x).powi(2) + (y - p.y).powi(2)).sqrt();
        let expected = if i % 2 == 0 { 8.0 } else { 4.0 };
        assert!((r - expected).abs() < 1e-3);
    }
}

#[test]
fn colors_cycle_from_the_last_particle_down() {
    let mut sys = ConfettiSystem::new(rng());
    let cfg = one_shot_sequence()[0].config.clone();
    sys.fire(&cfg, 800.0, 600.0);
    let counts: Vec<usize> = cfg
        .colors
        .iter()
        .map(|c| sys.particles().iter().filter(|p| p.color == *c).count())
        .collect();
    assert_eq!(counts, vec![38, 38, 37, 37]);
    assert_eq!(sys.particles()[0].color, cfg.colors[149 % 4]);
    assert_eq!(sys.particles()[149].color, cfg.colors[0]);
}

#[test]
fn overlay_is_sized_in_css_pixels() {
    assert_eq!(overlay_size(1000.0, 800.0), (1000, 800));
    assert_eq!(overlay_size(1280.4, 719.6), (1280, 720));
    assert_eq!(overlay_size(0.0, 0.0), (1, 1));
}

#[test]
fn first_step_travels_css_scale_distances() {
    let (w, h) = overlay_size(1000.0, 800.0);
    let mut sys = ConfettiSystem::new(rng());
    let cfg = BurstConfig {
        particle_count: 30,
        ..Default::default()
    };
    sys.fire(&cfg, w as f32, h as f32);
    sys.step();
    for p in sys.particles() {
        let moved = ((p.x - 500.0).powi(2) + (p.y - 400.0).powi(2)).sqrt();
        // Launch speed is drawn from [0.5, 1.5) x start_velocity, plus gravity.
        assert!(moved >= 0.5 * cfg.start_velocity - 3.0, "moved {moved}");
        assert!(moved < 1.5 * cfg.start_velocity + 3.0, "moved {moved}");
    }
}
