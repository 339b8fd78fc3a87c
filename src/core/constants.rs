// Shared tuning constants for the card: scene layout, wizard and celebrations.

// Scene layout
pub const HEART_COUNT: usize = 30;
pub const SCENE_EXTENTS: [f32; 3] = [60.0, 60.0, 50.0]; // full box size, centered at origin
pub const HEART_SCALE_MIN: f32 = 1.0;
pub const HEART_SCALE_MAX: f32 = 3.0;
pub const ROTATION_SPEED_MAX: f32 = 0.01; // radians per frame
pub const FLOAT_AMPLITUDE_MIN: f32 = 1.0;
pub const FLOAT_AMPLITUDE_MAX: f32 = 3.0;

// Wall-clock milliseconds are scaled by this to get the float phase
pub const FLOAT_TIME_SCALE: f64 = 0.0005;

// Heart colors as 0xRRGGBB (sRGB)
pub const HEART_PALETTE: [u32; 5] = [0xff6b6b, 0xf43f5e, 0xec4899, 0xf9a8d4, 0xdb2777];

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 30.0;

// Heart geometry
pub const HEART_CURVE_SEGMENTS: usize = 12;
pub const HEART_DEPTH: f32 = 0.2;

// Wizard
pub const TOTAL_STEPS: u32 = 5;

// One-shot celebration offsets (ms)
pub const ONE_SHOT_SECOND_WAVE_MS: u32 = 300;
pub const ONE_SHOT_THIRD_WAVE_MS: u32 = 600;

// Sustained celebration stream (ms)
pub const STREAM_PERIOD_MS: f64 = 250.0;
pub const STREAM_DURATION_MS: f64 = 5000.0;
pub const STREAM_PEAK_PARTICLES: f64 = 50.0;
