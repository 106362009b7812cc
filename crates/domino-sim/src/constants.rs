// Desktop simulator tuning. Units are metres and seconds.

// Handheld camera looking down at a table top
pub const CAMERA_EYE: [f32; 3] = [0.0, 0.4, 0.35];
pub const CAMERA_TARGET: [f32; 3] = [0.0, 0.0, 0.0];
pub const CAMERA_FOVY: f32 = std::f32::consts::FRAC_PI_3;
pub const CAMERA_ZNEAR: f32 = 0.01;
pub const CAMERA_ZFAR: f32 = 100.0;
pub const VIEWPORT_PX: [f32; 2] = [750.0, 1334.0]; // portrait phone screen

pub const GRAVITY: f32 = -9.81;

// Demo script
pub const DEFAULT_SEED: u64 = 2019;
pub const INITIAL_FLOOR_EXTENT: [f32; 2] = [0.2, 0.2]; // first detection
pub const GROWN_FLOOR_EXTENT: [f32; 2] = [0.8, 0.6]; // after tracking refines it
pub const DRAG_SAMPLE_STEP: f32 = 0.004; // world distance between pan samples
pub const DRAG_HALF_LENGTH: f32 = 0.15;
pub const DRAG_WAVE_AMPLITUDE: f32 = 0.04;
pub const SETTLE_SECONDS: f32 = 0.5; // let dominoes come to rest before start
pub const RUN_SECONDS: f32 = 4.0;

// A domino tipped further than this from upright counts as fallen
pub const TOPPLE_ANGLE_DEG: f32 = 45.0;
