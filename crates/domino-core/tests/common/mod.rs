// Recording host shared by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;

use domino_core::{
    DominoSpec, PlaneGeometry, Pose, SceneHost, SceneSettings, SessionConfig, TrackingHost,
};
use glam::{Vec2, Vec3};

#[derive(Default)]
pub struct RecordingHost {
    /// Point returned by the next hit-tests; `None` simulates empty sky.
    pub surface: Option<Vec3>,
    pub hit_tests: Vec<Vec2>,
    pub sessions: Vec<SessionConfig>,
    pub pauses: usize,
    pub configured: Option<SceneSettings>,
    pub created: Vec<(u32, DominoSpec, Pose)>,
    pub alive: HashMap<u32, Pose>,
    pub impulses: Vec<(u32, Vec3)>,
    pub removed: Vec<u32>,
    pub planes: HashMap<u32, PlaneGeometry>,
    pub plane_updates: Vec<(u32, PlaneGeometry)>,
    pub removed_planes: Vec<u32>,
    next_id: u32,
}

impl RecordingHost {
    pub fn with_surface(p: Vec3) -> Self {
        Self {
            surface: Some(p),
            ..Default::default()
        }
    }

    pub fn pose_of(&self, body: u32) -> Pose {
        self.created
            .iter()
            .find(|(id, _, _)| *id == body)
            .map(|(_, _, pose)| *pose)
            .expect("body was created")
    }

    fn next(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }
}

impl TrackingHost for RecordingHost {
    fn run_session(&mut self, config: &SessionConfig) {
        self.sessions.push(*config);
    }

    fn pause_session(&mut self) {
        self.pauses += 1;
    }

    fn hit_test(&mut self, screen: Vec2) -> Option<Vec3> {
        self.hit_tests.push(screen);
        self.surface
    }
}

impl SceneHost for RecordingHost {
    type Body = u32;
    type Plane = u32;

    fn configure_scene(&mut self, settings: &SceneSettings) {
        self.configured = Some(settings.clone());
    }

    fn create_rigid_body(&mut self, spec: &DominoSpec, pose: Pose) -> u32 {
        let id = self.next();
        self.created.push((id, spec.clone(), pose));
        self.alive.insert(id, pose);
        id
    }

    fn body_lateral_axis(&self, body: u32) -> Option<Vec3> {
        self.alive.get(&body).map(|pose| pose.rotation * Vec3::X)
    }

    fn apply_impulse(&mut self, body: u32, impulse: Vec3) {
        self.impulses.push((body, impulse));
    }

    fn remove(&mut self, body: u32) {
        self.alive.remove(&body);
        self.removed.push(body);
    }

    fn add_plane(&mut self, geometry: &PlaneGeometry) -> u32 {
        let id = self.next();
        self.planes.insert(id, *geometry);
        id
    }

    fn update_plane(&mut self, plane: &u32, geometry: &PlaneGeometry) {
        self.planes.insert(*plane, *geometry);
        self.plane_updates.push((*plane, *geometry));
    }

    fn remove_plane(&mut self, plane: u32) {
        self.planes.remove(&plane);
        self.removed_planes.push(plane);
    }
}
