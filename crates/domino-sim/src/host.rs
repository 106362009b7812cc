//! Desktop stand-in for the phone's AR runtime.
//!
//! Tracking is analytic: a screen point is turned into a camera ray and
//! intersected with the rectangles of the planes the app registered.
//! Rigid bodies live in a Rapier world stepped at the app's configured rate.

use fnv::FnvHashMap;
use glam::{Quat, Vec2, Vec3};
use nalgebra::{Isometry3, Quaternion, Translation3, UnitQuaternion, Vector3};
use rapier3d::dynamics::{
    CCDSolver, ImpulseJointSet, IntegrationParameters, IslandManager, MultibodyJointSet,
    RigidBodyBuilder, RigidBodyHandle, RigidBodySet,
};
use rapier3d::geometry::{
    BroadPhaseMultiSap, ColliderBuilder, ColliderHandle, ColliderSet, NarrowPhase, SharedShape,
};
use rapier3d::pipeline::{PhysicsPipeline, QueryPipeline};
use smallvec::SmallVec;

use domino_core::{
    DominoSpec, LightRig, PlaneDetection, PlaneGeometry, Pose, SceneHost, SceneSettings,
    SessionConfig, TrackingHost,
};

use crate::camera::Camera;
use crate::constants::GRAVITY;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Stopped,
    Running(SessionConfig),
    Paused(SessionConfig),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlaneId(u32);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceHit {
    pub plane: PlaneId,
    /// Distance along the camera ray.
    pub distance: f32,
    pub point: Vec3,
}

struct SimPlane {
    body: RigidBodyHandle,
    collider: ColliderHandle,
    geometry: PlaneGeometry,
}

pub struct RapierHost {
    camera: Camera,
    session: SessionState,
    show_feature_points: bool,
    lights: Option<LightRig>,

    // Rapier components
    pipeline: PhysicsPipeline,
    gravity: Vector3<f32>,
    integration_params: IntegrationParameters,
    islands: IslandManager,
    broad_phase: BroadPhaseMultiSap,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    query_pipeline: QueryPipeline,

    planes: FnvHashMap<PlaneId, SimPlane>,
    next_plane: u32,
    dominoes: FnvHashMap<RigidBodyHandle, [f32; 3]>,
    sim_time: f32,
}

impl RapierHost {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            session: SessionState::Stopped,
            show_feature_points: false,
            lights: None,
            pipeline: PhysicsPipeline::new(),
            gravity: Vector3::new(0.0, GRAVITY, 0.0),
            integration_params: IntegrationParameters::default(),
            islands: IslandManager::new(),
            broad_phase: BroadPhaseMultiSap::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
            planes: FnvHashMap::default(),
            next_plane: 0,
            dominoes: FnvHashMap::default(),
            sim_time: 0.0,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    /// Whether the tracker would currently report new or growing planes.
    pub fn plane_detection_enabled(&self) -> bool {
        matches!(
            self.session,
            SessionState::Running(SessionConfig {
                plane_detection: PlaneDetection::Horizontal
            })
        )
    }

    pub fn lights(&self) -> Option<&LightRig> {
        self.lights.as_ref()
    }

    pub fn show_feature_points(&self) -> bool {
        self.show_feature_points
    }

    pub fn time_step(&self) -> f32 {
        self.integration_params.dt
    }

    pub fn sim_time(&self) -> f32 {
        self.sim_time
    }

    pub fn plane_count(&self) -> usize {
        self.planes.len()
    }

    pub fn domino_count(&self) -> usize {
        self.dominoes.len()
    }

    pub fn domino_color(&self, body: RigidBodyHandle) -> Option<[f32; 3]> {
        self.dominoes.get(&body).copied()
    }

    pub fn body_pose(&self, body: RigidBodyHandle) -> Option<Pose> {
        self.bodies.get(body).map(|rb| from_isometry(rb.position()))
    }

    /// Angle in degrees between the body's local up axis and world up.
    pub fn tilt_degrees(&self, body: RigidBodyHandle) -> Option<f32> {
        self.bodies.get(body).map(|rb| {
            let up = rb.rotation().transform_vector(&Vector3::y());
            up.y.clamp(-1.0, 1.0).acos().to_degrees()
        })
    }

    /// Every registered plane under `screen`, nearest first.
    pub fn hit_test_all(&self, screen: Vec2) -> SmallVec<[SurfaceHit; 4]> {
        let (origin, dir) = self.camera.screen_to_world_ray(screen);
        let mut hits: SmallVec<[SurfaceHit; 4]> = self
            .planes
            .iter()
            .filter_map(|(id, plane)| {
                ray_plane_rect(origin, dir, &plane.geometry).map(|(distance, point)| SurfaceHit {
                    plane: *id,
                    distance,
                    point,
                })
            })
            .collect();
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }

    /// Advance the world by one configured time step.
    pub fn step(&mut self) {
        self.pipeline.step(
            &self.gravity,
            &self.integration_params,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &(),
        );
        self.sim_time += self.integration_params.dt;
    }

    /// Step for roughly `seconds` of simulated time. Returns the step count.
    pub fn advance(&mut self, seconds: f32) -> usize {
        let dt = self.integration_params.dt;
        if !(dt > 0.0) || !seconds.is_finite() {
            return 0;
        }
        let steps = (seconds / dt).round().max(0.0) as usize;
        for _ in 0..steps {
            self.step();
        }
        steps
    }
}

impl TrackingHost for RapierHost {
    fn run_session(&mut self, config: &SessionConfig) {
        log::debug!("[sim] session running with {:?}", config.plane_detection);
        self.session = SessionState::Running(*config);
    }

    fn pause_session(&mut self) {
        if let SessionState::Running(config) = self.session {
            self.session = SessionState::Paused(config);
        }
    }

    fn hit_test(&mut self, screen: Vec2) -> Option<Vec3> {
        self.hit_test_all(screen).first().map(|hit| hit.point)
    }
}

impl SceneHost for RapierHost {
    type Body = RigidBodyHandle;
    type Plane = PlaneId;

    fn configure_scene(&mut self, settings: &SceneSettings) {
        self.integration_params.dt = settings.physics_time_step;
        self.show_feature_points = settings.show_feature_points;
        self.lights = Some(settings.lights.clone());
        log::info!(
            "[sim] physics step {:.4}s, key light {} toward {:?}",
            settings.physics_time_step,
            settings.lights.directional.intensity,
            settings.lights.directional.direction()
        );
    }

    fn create_rigid_body(&mut self, spec: &DominoSpec, pose: Pose) -> RigidBodyHandle {
        let body = RigidBodyBuilder::dynamic()
            .position(to_isometry(&pose))
            .build();
        let handle = self.bodies.insert(body);
        let half = spec.size * 0.5;
        let collider = ColliderBuilder::cuboid(half.x, half.y, half.z)
            .mass(spec.mass)
            .friction(spec.friction)
            .build();
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);
        self.dominoes.insert(handle, spec.color_rgb);
        handle
    }

    fn body_lateral_axis(&self, body: RigidBodyHandle) -> Option<Vec3> {
        self.bodies.get(body).map(|rb| {
            let right = rb.rotation().transform_vector(&Vector3::x());
            Vec3::new(right.x, right.y, right.z)
        })
    }

    fn apply_impulse(&mut self, body: RigidBodyHandle, impulse: Vec3) {
        match self.bodies.get_mut(body) {
            Some(rb) => rb.apply_impulse(Vector3::new(impulse.x, impulse.y, impulse.z), true),
            None => log::warn!("[sim] impulse on unknown body {:?}", body),
        }
    }

    fn remove(&mut self, body: RigidBodyHandle) {
        let removed = self.bodies.remove(
            body,
            &mut self.islands,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            true,
        );
        if removed.is_none() {
            log::warn!("[sim] remove of unknown body {:?}", body);
        }
        self.dominoes.remove(&body);
    }

    fn add_plane(&mut self, geometry: &PlaneGeometry) -> PlaneId {
        let body = self.bodies.insert(
            RigidBodyBuilder::fixed()
                .position(to_isometry(&geometry.world_pose()))
                .build(),
        );
        let half = geometry.collider_half_extents();
        let collider = self.colliders.insert_with_parent(
            ColliderBuilder::cuboid(half.x, half.y, half.z).build(),
            body,
            &mut self.bodies,
        );
        let id = PlaneId(self.next_plane);
        self.next_plane += 1;
        self.planes.insert(
            id,
            SimPlane {
                body,
                collider,
                geometry: *geometry,
            },
        );
        id
    }

    fn update_plane(&mut self, plane: &PlaneId, geometry: &PlaneGeometry) {
        let Some(sim_plane) = self.planes.get_mut(plane) else {
            log::warn!("[sim] update of unknown plane {:?}", plane);
            return;
        };
        if let Some(rb) = self.bodies.get_mut(sim_plane.body) {
            rb.set_position(to_isometry(&geometry.world_pose()), true);
        }
        if let Some(collider) = self.colliders.get_mut(sim_plane.collider) {
            let half = geometry.collider_half_extents();
            collider.set_shape(SharedShape::cuboid(half.x, half.y, half.z));
        }
        sim_plane.geometry = *geometry;
    }

    fn remove_plane(&mut self, plane: PlaneId) {
        let Some(sim_plane) = self.planes.remove(&plane) else {
            log::warn!("[sim] remove of unknown plane {:?}", plane);
            return;
        };
        self.bodies.remove(
            sim_plane.body,
            &mut self.islands,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            true,
        );
    }
}

/// Intersect a ray with the bounded rectangle of a detected plane.
///
/// Returns the distance along the ray and the world-space hit point.
pub fn ray_plane_rect(origin: Vec3, dir: Vec3, geometry: &PlaneGeometry) -> Option<(f32, Vec3)> {
    let pose = geometry.world_pose();
    let inv = pose.rotation.inverse();
    let o = inv * (origin - pose.position);
    let d = inv * dir;
    if d.y.abs() < 1e-6 {
        return None;
    }
    let t = -o.y / d.y;
    if t < 0.0 {
        return None;
    }
    let local = o + d * t;
    let half = geometry.extent * 0.5;
    (local.x.abs() <= half.x && local.z.abs() <= half.y).then_some((t, origin + dir * t))
}

fn to_isometry(pose: &Pose) -> Isometry3<f32> {
    let q = pose.rotation;
    Isometry3::from_parts(
        Translation3::new(pose.position.x, pose.position.y, pose.position.z),
        UnitQuaternion::from_quaternion(Quaternion::new(q.w, q.x, q.y, q.z)),
    )
}

fn from_isometry(iso: &Isometry3<f32>) -> Pose {
    let t = iso.translation.vector;
    let c = iso.rotation.quaternion().coords;
    Pose::new(Vec3::new(t.x, t.y, t.z), Quat::from_xyzw(c.x, c.y, c.z, c.w))
}
