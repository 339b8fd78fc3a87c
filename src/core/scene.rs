// Floating heart field: randomized placement and the per-frame float/spin
// update. Rendering lives elsewhere; this module only owns transforms.

use glam::{EulerRot, Mat4, Quat, Vec3};
use rand::Rng;
use std::f32::consts::PI;

use super::constants::{
    FLOAT_AMPLITUDE_MAX, FLOAT_AMPLITUDE_MIN, HEART_SCALE_MAX, HEART_SCALE_MIN,
    ROTATION_SPEED_MAX,
};

/// Axis-aligned box centered at the origin, described by its full size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub size: Vec3,
}

impl BoundingBox {
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            size: Vec3::new(width, height, depth),
        }
    }

    pub fn half_extents(&self) -> Vec3 {
        self.size * 0.5
    }

    pub fn contains(&self, p: Vec3) -> bool {
        let h = self.half_extents();
        p.x.abs() <= h.x && p.y.abs() <= h.y && p.z.abs() <= h.z
    }
}

/// One floating heart.
#[derive(Clone, Debug)]
pub struct DecorativeObject {
    pub position: Vec3,
    /// Euler angles, applied in XYZ order.
    pub rotation: Vec3,
    pub scale: f32,
    pub rotation_speed: f32,
    pub float_amplitude: f32,
    pub original_y: f32,
    /// Linear RGB.
    pub color: [f32; 3],
}

impl DecorativeObject {
    pub fn model_matrix(&self) -> Mat4 {
        let q = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), q, self.position)
    }
}

/// The fixed set of hearts animated for the lifetime of the page.
#[derive(Clone, Debug, Default)]
pub struct HeartField {
    objects: Vec<DecorativeObject>,
}

impl HeartField {
    /// Build `count` hearts with randomized transforms and palette colors.
    ///
    /// An empty palette yields white hearts.
    pub fn initialize<R: Rng + ?Sized>(
        count: usize,
        palette: &[[f32; 3]],
        bounds: BoundingBox,
        rng: &mut R,
    ) -> Self {
        let size = bounds.size;
        let objects = (0..count)
            .map(|_| {
                let position = Vec3::new(
                    (rng.gen::<f32>() - 0.5) * size.x,
                    (rng.gen::<f32>() - 0.5) * size.y,
                    (rng.gen::<f32>() - 0.5) * size.z,
                );
                let rotation = Vec3::new(
                    rng.gen_range(0.0..PI),
                    rng.gen_range(0.0..PI),
                    rng.gen_range(0.0..PI),
                );
                let scale = rng.gen_range(HEART_SCALE_MIN..HEART_SCALE_MAX);
                let color = if palette.is_empty() {
                    [1.0, 1.0, 1.0]
                } else {
                    palette[rng.gen_range(0..palette.len())]
                };
                DecorativeObject {
                    position,
                    rotation,
                    scale,
                    rotation_speed: rng.gen_range(0.0..ROTATION_SPEED_MAX),
                    float_amplitude: rng.gen_range(FLOAT_AMPLITUDE_MIN..FLOAT_AMPLITUDE_MAX),
                    original_y: position.y,
                    color,
                }
            })
            .collect();
        Self { objects }
    }

    /// Advance one frame: spin around Y and re-derive the float height.
    ///
    /// Rotation accumulates per call; height depends only on `elapsed`.
    pub fn tick(&mut self, elapsed: f32) {
        for o in self.objects.iter_mut() {
            o.rotation.y += o.rotation_speed;
            o.position.y = o.original_y + (elapsed + o.position.x).sin() * o.float_amplitude;
        }
    }

    pub fn objects(&self) -> &[DecorativeObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

/// Convert a 0xRRGGBB sRGB color to linear RGB.
pub fn hex_to_linear_rgb(hex: u32) -> [f32; 3] {
    let channel = |shift: u32| {
        let c = ((hex >> shift) & 0xff) as f32 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    [channel(16), channel(8), channel(0)]
}
