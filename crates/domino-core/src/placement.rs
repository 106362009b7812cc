use glam::{Quat, Vec2, Vec3};
use rand::prelude::*;

use crate::constants::{DOMINO_COLORS, MIN_DOMINO_SPACING, SPAWN_HEIGHT_OFFSET, START_IMPULSE};
use crate::geometry::{bearing_degrees, planar_distance, project_horizontal};
use crate::host::{Host, SceneHost};
use crate::state::{DominoSpec, Pose};

#[derive(Clone, Debug)]
pub struct PlacementParams {
    pub min_spacing: f32,
    pub spawn_height_offset: f32,
    pub start_impulse: f32,
    /// Shape and material template; the colour is drawn from `palette`.
    pub domino: DominoSpec,
    pub palette: &'static [[f32; 3]],
}

impl Default for PlacementParams {
    fn default() -> Self {
        Self {
            min_spacing: MIN_DOMINO_SPACING,
            spawn_height_offset: SPAWN_HEIGHT_OFFSET,
            start_impulse: START_IMPULSE,
            domino: DominoSpec::default(),
            palette: &DOMINO_COLORS,
        }
    }
}

/// What a single drag event did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Placement {
    /// Hit-test found no tracked surface under the finger.
    NoSurface,
    /// First point of a sequence; remembered, nothing placed.
    Anchored,
    /// Still within `min_spacing` of the last domino.
    TooClose { distance: f32 },
    /// A domino was created and appended at `index`.
    Placed { index: usize },
}

/// Turns a stream of drag positions into evenly spaced dominoes facing
/// along the drag path.
pub struct PlacementController<B> {
    params: PlacementParams,
    last_position: Option<Vec3>,
    placed: Vec<B>,
    rng: StdRng,
}

impl<B: Copy> PlacementController<B> {
    pub fn new(params: PlacementParams, seed: u64) -> Self {
        Self {
            params,
            last_position: None,
            placed: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn params(&self) -> &PlacementParams {
        &self.params
    }

    pub fn last_position(&self) -> Option<Vec3> {
        self.last_position
    }

    /// Placed bodies in placement order.
    pub fn placed(&self) -> &[B] {
        &self.placed
    }

    pub fn len(&self) -> usize {
        self.placed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    /// Gesture entry point: hit-test `screen` and feed the surface point on.
    pub fn on_drag<H: Host<Body = B>>(&mut self, host: &mut H, screen: Vec2) -> Placement {
        match host.hit_test(screen) {
            Some(hit) => self.on_drag_continue(host, hit),
            None => Placement::NoSurface,
        }
    }

    pub fn on_drag_continue<H: SceneHost<Body = B>>(
        &mut self,
        host: &mut H,
        hit_point: Vec3,
    ) -> Placement {
        let Some(last) = self.last_position else {
            self.last_position = Some(hit_point);
            log::debug!("[place] anchored sequence at {:?}", hit_point);
            return Placement::Anchored;
        };

        let distance = planar_distance(last, hit_point);
        if distance < self.params.min_spacing {
            return Placement::TooClose { distance };
        }

        let bearing = bearing_degrees(project_horizontal(hit_point), project_horizontal(last));
        let angle = bearing * (std::f32::consts::PI / 180.0);
        let position = Vec3::new(
            hit_point.x,
            hit_point.y + self.params.spawn_height_offset,
            hit_point.z,
        );
        let pose = Pose::new(position, Quat::from_rotation_y(-angle));

        let spec = self.next_domino();
        let body = host.create_rigid_body(&spec, pose);
        self.placed.push(body);
        self.last_position = Some(hit_point);

        let index = self.placed.len() - 1;
        log::info!(
            "[place] domino {} at ({:.3}, {:.3}, {:.3}) bearing {:.1} deg",
            index,
            position.x,
            position.y,
            position.z,
            bearing
        );
        Placement::Placed { index }
    }

    /// Remove every placed domino and forget the sequence anchor.
    pub fn clear_all<H: SceneHost<Body = B>>(&mut self, host: &mut H) {
        let count = self.placed.len();
        for body in self.placed.drain(..) {
            host.remove(body);
        }
        self.last_position = None;
        log::info!("[clear] removed {} dominoes", count);
    }

    /// Knock over the first domino. Returns whether an impulse was issued.
    pub fn start<H: SceneHost<Body = B>>(&mut self, host: &mut H) -> bool {
        let Some(&first) = self.placed.first() else {
            return false;
        };
        let Some(axis) = host.body_lateral_axis(first) else {
            log::warn!("[start] host no longer knows the first domino");
            return false;
        };
        host.apply_impulse(first, axis * self.params.start_impulse);
        log::info!("[start] impulse {} along {:?}", self.params.start_impulse, axis);
        true
    }

    fn next_domino(&mut self) -> DominoSpec {
        let color_rgb = *self
            .params
            .palette
            .choose(&mut self.rng)
            .unwrap_or(&DOMINO_COLORS[0]);
        DominoSpec {
            color_rgb,
            ..self.params.domino.clone()
        }
    }
}
