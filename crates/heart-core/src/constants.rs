//! Interaction, projection and animation tuning constants.
//!
//! Per-frame factors are expressed against a 60 Hz reference frame; the
//! controller scales them by the elapsed time so behavior does not depend on
//! the display refresh rate.

use glam::Vec3;

// Frame timing
pub const REFERENCE_FPS: f32 = 60.0;
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // longer gaps are treated as this

// Camera
pub const CAMERA_FOV_Y_DEG: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_START_Z: f32 = 8.5; // where the rendered camera starts before easing
pub const DESKTOP_DISTANCE: f32 = 8.5;
pub const MOBILE_DISTANCE: f32 = 14.0;
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0;

// Orbit limits
pub const PITCH_LIMIT: f32 = 1.4;
pub const MIN_DISTANCE: f32 = 3.5;
pub const MAX_DISTANCE: f32 = 25.0;
pub const INITIAL_PITCH: f32 = 0.08;

// Pointer mapping
pub const DRAG_RADIANS_PER_PX: f32 = 0.005;
pub const WHEEL_DISTANCE_PER_UNIT: f32 = 0.01;
pub const CLICK_SLOP_PX: f32 = 5.0; // max pointer travel for a click to count

// Per-frame dynamics
pub const AUTO_ROTATE_PER_FRAME: f32 = 0.0015;
pub const VELOCITY_DAMPING: f32 = 0.94;
pub const POSE_BLEND: f32 = 0.1;

// Heartbeat pulse
pub const PULSE_PHASE_PER_FRAME: f32 = 0.05;
pub const PULSE_AMPLITUDE: f32 = 0.03;

// Label placement
pub const FRONT_MARGIN: f32 = 0.5; // world z must be this far in front of the camera
pub const LABEL_NDC_BOUND: f32 = 0.9;

// Loaded model placement inside the model group
pub const MODEL_SCALE: f32 = 3.0;
pub const MODEL_OFFSET: Vec3 = Vec3::new(0.0, -1.0, 0.0);
pub const MODEL_ASSET_PATH: &str = "/models/heart.glb";

// Material and x-ray blending
pub const MATERIAL_ROUGHNESS: f32 = 0.3;
pub const MATERIAL_METALNESS: f32 = 0.1;
pub const SOLID_OPACITY: f32 = 1.0;
pub const XRAY_OPACITY: f32 = 0.2;
pub const OPACITY_BLEND: f32 = 0.1;
pub const DEPTH_WRITE_MIN_OPACITY: f32 = 0.95;

// Lighting (linear intensities, sRGB colors)
pub const AMBIENT_INTENSITY: f32 = 1.2;
pub const KEY_LIGHT: ([u8; 3], f32, Vec3) = ([0xff, 0xfa, 0xeb], 2.5, Vec3::new(-6.0, 8.0, 8.0));
pub const FILL_LIGHT: ([u8; 3], f32, Vec3) = ([0xbb, 0xee, 0xff], 1.8, Vec3::new(6.0, 2.0, 4.0));
pub const RIM_LIGHT: ([u8; 3], f32, Vec3) = ([0xff, 0xff, 0xff], 2.5, Vec3::new(2.0, 6.0, -8.0));
pub const TONE_EXPOSURE: f32 = 1.1;

// Loading screen simulation
pub const LOADING_TICK_MS: u64 = 80;
pub const LOADING_STEP_MIN: f32 = 5.0;
pub const LOADING_STEP_SPAN: f32 = 18.0;
