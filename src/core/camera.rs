// Perspective camera for the heart background.

use glam::{Mat4, Vec3};

use super::constants::{CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_Z};

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
    /// Camera on +Z looking at the origin, sized for a `width` x `height` viewport.
    pub fn for_viewport(width: f32, height: f32) -> Self {
        let mut cam = Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        };
        cam.set_viewport(width, height);
        cam
    }

    /// Recompute the aspect ratio. Degenerate sizes keep the previous aspect.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Physical backing-store size for a CSS viewport at a given pixel ratio.
#[inline]
pub fn physical_size(css_width: f64, css_height: f64, pixel_ratio: f64) -> (u32, u32) {
    let w = (css_width * pixel_ratio).round().max(1.0) as u32;
    let h = (css_height * pixel_ratio).round().max(1.0) as u32;
    (w, h)
}
