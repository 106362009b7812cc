use glam::Vec3;

// Tuning constants shared by the placement controller and every host.
// Lengths are in metres, matching the tracking session's world units.

// Placement heuristic
pub const MIN_DOMINO_SPACING: f32 = 0.03; // horizontal gap required before the next domino
pub const SPAWN_HEIGHT_OFFSET: f32 = 0.03; // dominoes spawn this far above the hit point

// Domino body (thin along x, tall along y, long along z)
pub const DOMINO_WIDTH: f32 = 0.007;
pub const DOMINO_HEIGHT: f32 = 0.06;
pub const DOMINO_LENGTH: f32 = 0.03;
pub const DOMINO_MASS: f32 = 2.0;
pub const DOMINO_FRICTION: f32 = 0.8;

// Chain start
pub const START_IMPULSE: f32 = 0.7; // applied along the first domino's lateral axis

// Detected planes
pub const PLANE_COLLIDER_THICKNESS: f32 = 0.001;

// Scene
pub const PHYSICS_TIME_STEP: f32 = 1.0 / 200.0;
pub const DIRECTIONAL_LIGHT_INTENSITY: f32 = 500.0;
pub const DIRECTIONAL_LIGHT_PITCH: f32 = -std::f32::consts::FRAC_PI_3;
pub const AMBIENT_LIGHT_INTENSITY: f32 = 50.0;
pub const SHADOW_ALPHA: f32 = 0.5;

// Palette the domino colour is drawn from
pub const DOMINO_COLORS: [[f32; 3]; 8] = [
    [0.0, 1.0, 1.0], // cyan
    [0.0, 0.0, 1.0], // blue
    [1.0, 0.0, 0.0], // red
    [0.0, 1.0, 0.0], // green
    [0.5, 0.5, 0.5], // gray
    [1.0, 0.5, 0.0], // orange
    [1.0, 1.0, 0.0], // yellow
    [1.0, 0.0, 1.0], // magenta
];

#[inline]
pub fn domino_size() -> Vec3 {
    Vec3::new(DOMINO_WIDTH, DOMINO_HEIGHT, DOMINO_LENGTH)
}
