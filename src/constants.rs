// Page wiring and lighting constants for the web frontend.
//
// Element ids mirror the markup in `index.html`; lighting mirrors the
// ambient + directional rig the hearts were designed under.

// Mount point for the WebGPU canvas
pub const CANVAS_CONTAINER_ID: &str = "canvas-container";

// Wizard markup
pub const STEP_PANEL_SELECTOR: &str = ".step";
pub const ACTIVE_CLASS: &str = "active";
pub const PROGRESS_BAR_ID: &str = "progress-bar";

// Celebration controls; both default to the same button
pub const CONFETTI_BUTTON_ID: &str = "confetti-btn";
pub const STREAM_BUTTON_ID: &str = "confetti-btn";

// Audio cue elements
pub const CLICK_SOUND_ID: &str = "click-sound";
pub const CELEBRATION_SOUND_ID: &str = "birthday-audio";

// Synthesized fallback chimes (used when a cue element is missing)
pub const CLICK_CHIME_HZ: f32 = 880.0;
pub const CLICK_CHIME_SEC: f64 = 0.08;
pub const CELEBRATION_CHIME_HZ: f32 = 523.25;
pub const CELEBRATION_CHIME_SEC: f64 = 0.6;
pub const CHIME_GAIN: f32 = 0.2;

// Lighting
pub const AMBIENT_INTENSITY: f32 = 0.7;
pub const DIRECTIONAL_INTENSITY: f32 = 1.0;
pub const LIGHT_POSITION: [f32; 3] = [5.0, 5.0, 5.0];

// Material
pub const HEART_OPACITY: f32 = 0.9;
pub const HEART_SHININESS: f32 = 80.0;
pub const HEART_SPECULAR: [f32; 3] = [0.0056, 0.0056, 0.0056]; // 0x111111 in linear

// Confetti overlay canvas
pub const CONFETTI_CANVAS_ID: &str = "confetti-canvas";
