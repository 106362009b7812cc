//! Seams to the AR runtime.
//!
//! The demo owns no tracking, rendering or physics of its own. A host (the
//! phone's AR runtime, or the desktop simulator) implements these traits and
//! calls back into [`crate::DominoApp`] with gestures and anchor updates.

use std::fmt::Debug;

use glam::{Vec2, Vec3};

use crate::scene::{SceneSettings, SessionConfig};
use crate::state::{DominoSpec, PlaneGeometry, Pose};

pub trait TrackingHost {
    /// (Re)run the tracking session with `config`. Already detected planes
    /// survive a re-run.
    fn run_session(&mut self, config: &SessionConfig);

    fn pause_session(&mut self);

    /// World-space point on an existing tracked plane under `screen`, if any.
    fn hit_test(&mut self, screen: Vec2) -> Option<Vec3>;
}

pub trait SceneHost {
    /// Opaque handle to a dynamic rigid body owned by the host.
    type Body: Copy + PartialEq + Debug;
    /// Opaque handle to a plane's visual and static collider.
    type Plane: Debug;

    fn configure_scene(&mut self, settings: &SceneSettings);

    fn create_rigid_body(&mut self, spec: &DominoSpec, pose: Pose) -> Self::Body;

    /// Current world-space direction of the body's local +x axis.
    fn body_lateral_axis(&self, body: Self::Body) -> Option<Vec3>;

    fn apply_impulse(&mut self, body: Self::Body, impulse: Vec3);

    fn remove(&mut self, body: Self::Body);

    fn add_plane(&mut self, geometry: &PlaneGeometry) -> Self::Plane;

    fn update_plane(&mut self, plane: &Self::Plane, geometry: &PlaneGeometry);

    fn remove_plane(&mut self, plane: Self::Plane);
}

/// Everything the app needs from a host.
pub trait Host: TrackingHost + SceneHost {}

impl<T: TrackingHost + SceneHost> Host for T {}
