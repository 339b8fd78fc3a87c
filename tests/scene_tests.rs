// Host-side tests for the heart field and camera.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod card {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
    pub mod camera {
        include!("../src/core/camera.rs");
    }
}

use card::camera::*;
use card::constants::*;
use card::scene::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn palette() -> Vec<[f32; 3]> {
    HEART_PALETTE.iter().map(|&c| hex_to_linear_rgb(c)).collect()
}

fn bounds() -> BoundingBox {
    BoundingBox::new(SCENE_EXTENTS[0], SCENE_EXTENTS[1], SCENE_EXTENTS[2])
}

fn field(seed: u64) -> HeartField {
    HeartField::initialize(HEART_COUNT, &palette(), bounds(), &mut StdRng::seed_from_u64(seed))
}

#[test]
fn initialize_creates_requested_count_within_ranges() {
    let f = field(7);
    assert_eq!(f.len(), 30);
    let pal = palette();
    for o in f.objects() {
        assert!(o.scale >= 1.0 && o.scale < 3.0, "scale {}", o.scale);
        assert!(o.rotation_speed >= 0.0 && o.rotation_speed < 0.01);
        assert!(o.float_amplitude >= 1.0 && o.float_amplitude < 3.0);
        assert!(bounds().contains(o.position), "{:?}", o.position);
        for a in o.rotation.to_array() {
            assert!((0.0..std::f32::consts::PI).contains(&a));
        }
        assert_eq!(o.original_y, o.position.y);
        assert!(pal.contains(&o.color));
    }
}

#[test]
fn initialize_is_deterministic_for_a_seed() {
    let a = field(42);
    let b = field(42);
    let c = field(43);
    let pos = |f: &HeartField| f.objects().iter().map(|o| o.position).collect::<Vec<_>>();
    assert_eq!(pos(&a), pos(&b));
    assert_ne!(pos(&a), pos(&c));
}

#[test]
fn empty_palette_falls_back_to_white() {
    let f = HeartField::initialize(5, &[], bounds(), &mut StdRng::seed_from_u64(1));
    assert!(f.objects().iter().all(|o| o.color == [1.0, 1.0, 1.0]));
}

#[test]
fn zero_count_builds_an_empty_field() {
    let f = HeartField::initialize(0, &palette(), bounds(), &mut StdRng::seed_from_u64(1));
    assert!(f.is_empty());
}

#[test]
fn tick_rotation_accumulates_but_height_does_not() {
    let mut f = field(3);
    let before: Vec<_> = f.objects().iter().map(|o| (o.rotation.y, o.rotation_speed)).collect();
    f.tick(1.25);
    let y_once: Vec<f32> = f.objects().iter().map(|o| o.position.y).collect();
    f.tick(1.25);
    for (i, o) in f.objects().iter().enumerate() {
        let (rot0, speed) = before[i];
        assert!((o.rotation.y - (rot0 + 2.0 * speed)).abs() < 1e-5);
        assert_eq!(o.position.y, y_once[i]);
    }
}

#[test]
fn tick_follows_float_formula() {
    let mut f = field(9);
    let t = 3.7_f32;
    f.tick(t);
    for o in f.objects() {
        let expected = o.original_y + (t + o.position.x).sin() * o.float_amplitude;
        assert!((o.position.y - expected).abs() < 1e-4);
        assert!((o.position.y - o.original_y).abs() <= o.float_amplitude + 1e-4);
    }
}

#[test]
fn tick_leaves_x_and_z_alone() {
    let mut f = field(11);
    let xz: Vec<_> = f.objects().iter().map(|o| (o.position.x, o.position.z)).collect();
    for i in 0..100 {
        f.tick(i as f32 * 0.016);
    }
    let after: Vec<_> = f.objects().iter().map(|o| (o.position.x, o.position.z)).collect();
    assert_eq!(xz, after);
}

#[test]
fn model_matrix_places_object() {
    let f = field(5);
    let o = &f.objects()[0];
    let origin = o.model_matrix().transform_point3(glam::Vec3::ZERO);
    assert!((origin - o.position).length() < 1e-4);
    let unit = o.model_matrix().transform_vector3(glam::Vec3::X).length();
    assert!((unit - o.scale).abs() < 1e-4);
}

#[test]
fn hex_colors_convert_to_linear() {
    assert_eq!(hex_to_linear_rgb(0x000000), [0.0, 0.0, 0.0]);
    let white = hex_to_linear_rgb(0xffffff);
    assert!(white.iter().all(|c| (c - 1.0).abs() < 1e-6));
    let [r, g, b] = hex_to_linear_rgb(0xff6b6b);
    assert!((r - 1.0).abs() < 1e-6);
    assert!(g > 0.13 && g < 0.16, "g = {g}");
    assert_eq!(g, b);
}

#[test]
fn camera_aspect_tracks_viewport() {
    let mut cam = Camera::for_viewport(1600.0, 900.0);
    assert!((cam.aspect - 16.0 / 9.0).abs() < 1e-6);
    assert!((cam.fovy_radians - 75f32.to_radians()).abs() < 1e-6);
    assert_eq!(cam.eye.z, 30.0);
    cam.set_viewport(500.0, 1000.0);
    assert!((cam.aspect - 0.5).abs() < 1e-6);
    cam.set_viewport(0.0, 0.0);
    assert!((cam.aspect - 0.5).abs() < 1e-6);
}

#[test]
fn origin_projects_to_screen_center() {
    let cam = Camera::for_viewport(800.0, 600.0);
    let clip = cam.view_projection() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}

#[test]
fn physical_size_scales_by_pixel_ratio() {
    assert_eq!(physical_size(800.0, 600.0, 2.0), (1600, 1200));
    assert_eq!(physical_size(0.0, 0.0, 1.0), (1, 1));
}
