//! Scripted end-to-end run: discover a floor, drag out a chain, knock it over.

use std::time::Duration;

use glam::{Vec2, Vec3};

use domino_core::{Anchor, AnchorId, DominoApp, Placement, PlacementParams, Pose, SceneSettings};

use crate::camera::Camera;
use crate::constants::{
    DEFAULT_SEED, DRAG_HALF_LENGTH, DRAG_SAMPLE_STEP, DRAG_WAVE_AMPLITUDE, GROWN_FLOOR_EXTENT,
    INITIAL_FLOOR_EXTENT, RUN_SECONDS, SETTLE_SECONDS, TOPPLE_ANGLE_DEG,
};
use crate::error::SimError;
use crate::host::RapierHost;

/// What the tracker reports about anchors.
#[derive(Clone, Debug)]
pub enum AnchorEvent {
    Added(Anchor),
    Updated(Anchor),
    Removed(AnchorId),
}

/// Forward a tracking event to the app the way the runtime would: once plane
/// detection is off, planes are neither discovered nor refined.
pub fn deliver(app: &mut DominoApp<RapierHost>, host: &mut RapierHost, event: &AnchorEvent) -> bool {
    match event {
        AnchorEvent::Removed(id) => {
            app.on_anchor_removed(host, id);
            true
        }
        _ if !host.plane_detection_enabled() => {
            log::debug!("[sim] plane detection off, dropping {:?}", event);
            false
        }
        AnchorEvent::Added(anchor) => {
            app.on_anchor_added(host, anchor);
            true
        }
        AnchorEvent::Updated(anchor) => {
            app.on_anchor_updated(host, anchor);
            true
        }
    }
}

/// Gently waving path across the floor, sampled every `step` metres along x.
/// Empty when `step` is not a positive distance.
pub fn wave_path(half_length: f32, amplitude: f32, step: f32) -> Vec<Vec3> {
    if !(step > 0.0) || !half_length.is_finite() {
        return Vec::new();
    }
    let samples = ((2.0 * half_length) / step).round() as usize;
    (0..=samples)
        .map(|i| {
            let x = -half_length + i as f32 * step;
            let phase = (x / half_length) * std::f32::consts::PI;
            Vec3::new(x, 0.0, amplitude * phase.sin())
        })
        .collect()
}

#[derive(Clone, Debug)]
pub struct DemoConfig {
    pub seed: u64,
    pub camera: Camera,
    pub initial_extent: Vec2,
    pub grown_extent: Vec2,
    /// World points the finger passes over, in drag order.
    pub path: Vec<Vec3>,
    pub settle_seconds: f32,
    pub run_seconds: f32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            camera: Camera::default(),
            initial_extent: Vec2::from(INITIAL_FLOOR_EXTENT),
            grown_extent: Vec2::from(GROWN_FLOOR_EXTENT),
            path: wave_path(DRAG_HALF_LENGTH, DRAG_WAVE_AMPLITUDE, DRAG_SAMPLE_STEP),
            settle_seconds: SETTLE_SECONDS,
            run_seconds: RUN_SECONDS,
        }
    }
}

#[derive(Clone, Debug)]
pub struct DemoReport {
    pub placed: usize,
    pub toppled: usize,
    pub surface_misses: usize,
    pub simulated_seconds: f32,
    pub wall_clock: Duration,
}

pub fn run_demo(config: &DemoConfig) -> Result<DemoReport, SimError> {
    let started = instant::Instant::now();
    let mut host = RapierHost::new(config.camera.clone());
    let mut app = DominoApp::new(
        &mut host,
        PlacementParams::default(),
        SceneSettings::default(),
        config.seed,
    );
    app.view_will_appear(&mut host);

    // The tracker finds a small patch of floor first, then refines it.
    let floor = Anchor::plane("floor", Pose::IDENTITY, Vec3::ZERO, config.initial_extent);
    deliver(&mut app, &mut host, &AnchorEvent::Added(floor.clone()));
    let grown = Anchor::plane("floor", Pose::IDENTITY, Vec3::ZERO, config.grown_extent);
    deliver(&mut app, &mut host, &AnchorEvent::Updated(grown));

    let mut surface_misses = 0;
    for point in &config.path {
        let placement = match host.camera().world_to_screen(*point) {
            Some(screen) => app.on_pan(&mut host, screen),
            None => Placement::NoSurface,
        };
        if placement == Placement::NoSurface {
            surface_misses += 1;
        }
    }

    let placed = app.controller().len();
    if placed == 0 {
        let hits = config.path.len() - surface_misses;
        return Err(if hits == 0 {
            SimError::NoSurface {
                samples: config.path.len(),
            }
        } else {
            SimError::NothingPlaced { hits }
        });
    }
    log::info!(
        "[sim] placed {} dominoes ({} pan samples off the surface)",
        placed,
        surface_misses
    );

    host.advance(config.settle_seconds);
    if !app.start(&mut host) {
        return Err(SimError::NotStarted);
    }
    host.advance(config.run_seconds);

    let toppled = app
        .controller()
        .placed()
        .iter()
        .filter(|body| {
            host.tilt_degrees(**body)
                .is_some_and(|tilt| tilt > TOPPLE_ANGLE_DEG)
        })
        .count();
    let simulated_seconds = host.sim_time();

    app.clear_all(&mut host);
    app.view_will_disappear(&mut host);

    Ok(DemoReport {
        placed,
        toppled,
        surface_misses,
        simulated_seconds,
        wall_clock: started.elapsed(),
    })
}
