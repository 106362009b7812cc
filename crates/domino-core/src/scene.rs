//! Session and scene descriptions the core hands to the host.

use glam::{Quat, Vec3};

use crate::constants::{
    AMBIENT_LIGHT_INTENSITY, DIRECTIONAL_LIGHT_INTENSITY, DIRECTIONAL_LIGHT_PITCH,
    PHYSICS_TIME_STEP, SHADOW_ALPHA,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaneDetection {
    Horizontal,
    Disabled,
}

/// World-tracking configuration to (re)run the session with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub plane_detection: PlaneDetection,
}

impl SessionConfig {
    /// Configuration used while the view is on screen and the floor is
    /// still being discovered.
    pub fn world_tracking() -> Self {
        Self {
            plane_detection: PlaneDetection::Horizontal,
        }
    }

    /// Configuration used once placement begins: planes already found stay,
    /// but no new ones are detected and existing ones stop growing.
    pub fn frozen() -> Self {
        Self {
            plane_detection: PlaneDetection::Disabled,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShadowMode {
    Forward,
    Deferred,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DirectionalLight {
    pub intensity: f32,
    pub rotation: Quat,
    pub casts_shadow: bool,
    pub shadow_mode: ShadowMode,
    pub shadow_color_rgba: [f32; 4],
}

impl DirectionalLight {
    /// Direction the light travels in, world space.
    pub fn direction(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AmbientLight {
    pub intensity: f32,
}

/// A directional key light that casts soft shadows onto the invisible
/// plane surfaces plus a faint ambient fill.
#[derive(Clone, Debug, PartialEq)]
pub struct LightRig {
    pub directional: DirectionalLight,
    pub ambient: AmbientLight,
}

impl Default for LightRig {
    fn default() -> Self {
        Self {
            directional: DirectionalLight {
                intensity: DIRECTIONAL_LIGHT_INTENSITY,
                rotation: Quat::from_rotation_x(DIRECTIONAL_LIGHT_PITCH),
                casts_shadow: true,
                shadow_mode: ShadowMode::Deferred,
                shadow_color_rgba: [0.0, 0.0, 0.0, SHADOW_ALPHA],
            },
            ambient: AmbientLight {
                intensity: AMBIENT_LIGHT_INTENSITY,
            },
        }
    }
}

/// One-time scene setup applied when the app is created.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneSettings {
    /// Physics step in seconds; smaller steps keep thin dominoes stable.
    pub physics_time_step: f32,
    pub show_feature_points: bool,
    pub lights: LightRig,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            physics_time_step: PHYSICS_TIME_STEP,
            show_feature_points: true,
            lights: LightRig::default(),
        }
    }
}
