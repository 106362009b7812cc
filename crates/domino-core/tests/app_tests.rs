mod common;

use common::RecordingHost;
use domino_core::{
    Anchor, AnchorId, DominoApp, Placement, PlacementParams, PlaneDetection, Pose,
    SceneSettings, SessionConfig,
};
use glam::{Vec2, Vec3};

fn app(host: &mut RecordingHost) -> DominoApp<RecordingHost> {
    DominoApp::new(host, PlacementParams::default(), SceneSettings::default(), 1)
}

#[test]
fn creation_configures_the_scene_once() {
    let mut host = RecordingHost::default();
    let app = app(&mut host);

    let settings = host.configured.as_ref().expect("scene configured");
    assert_eq!(settings, app.settings());
    assert!((settings.physics_time_step - 1.0 / 200.0).abs() < 1e-9);
    assert!(settings.show_feature_points);
    assert!(settings.lights.directional.casts_shadow);
    assert_eq!(settings.lights.directional.intensity, 500.0);
    assert_eq!(settings.lights.ambient.intensity, 50.0);
}

#[test]
fn view_lifecycle_runs_and_pauses_the_session() {
    let mut host = RecordingHost::default();
    let mut app = app(&mut host);

    app.view_will_appear(&mut host);
    app.view_will_disappear(&mut host);

    assert_eq!(host.sessions, vec![SessionConfig::world_tracking()]);
    assert_eq!(host.sessions[0].plane_detection, PlaneDetection::Horizontal);
    assert_eq!(host.pauses, 1);
}

#[test]
fn first_pan_freezes_plane_detection_once() {
    let mut host = RecordingHost::with_surface(Vec3::ZERO);
    let mut app = app(&mut host);
    app.view_will_appear(&mut host);

    for i in 0..10 {
        host.surface = Some(Vec3::new(i as f32 * 0.01, 0.0, 0.0));
        app.on_pan(&mut host, Vec2::new(100.0, 200.0));
    }

    assert!(app.detection_frozen());
    assert_eq!(
        host.sessions,
        vec![SessionConfig::world_tracking(), SessionConfig::frozen()]
    );

    // Coming back on screen re-enables detection until the next pan.
    app.view_will_appear(&mut host);
    assert!(!app.detection_frozen());
    app.on_pan(&mut host, Vec2::ZERO);
    assert_eq!(host.sessions.last(), Some(&SessionConfig::frozen()));
    assert_eq!(host.sessions.len(), 4);
}

#[test]
fn pan_off_the_surface_still_freezes_but_places_nothing() {
    let mut host = RecordingHost::default();
    let mut app = app(&mut host);

    assert_eq!(app.on_pan(&mut host, Vec2::ZERO), Placement::NoSurface);
    assert!(app.detection_frozen());
    assert!(app.controller().is_empty());
}

#[test]
fn anchor_callbacks_drive_the_plane_registry() {
    let mut host = RecordingHost::default();
    let mut app = app(&mut host);
    let anchor = Anchor::plane("floor", Pose::IDENTITY, Vec3::ZERO, Vec2::new(0.3, 0.3));

    app.on_anchor_added(&mut host, &anchor);
    let mut grown = anchor.clone();
    grown.kind = domino_core::AnchorKind::Plane {
        center: Vec3::new(0.1, 0.0, 0.0),
        extent: Vec2::new(0.8, 0.6),
    };
    app.on_anchor_updated(&mut host, &grown);

    assert_eq!(app.planes().len(), 1);
    assert_eq!(host.plane_updates.len(), 1);

    app.on_anchor_removed(&mut host, &AnchorId::from("floor"));
    assert!(app.planes().is_empty());
    assert!(host.planes.is_empty());
}

#[test]
fn full_session_places_starts_and_clears() {
    let mut host = RecordingHost::default();
    let mut app = app(&mut host);
    app.view_will_appear(&mut host);
    app.on_anchor_added(
        &mut host,
        &Anchor::plane("floor", Pose::IDENTITY, Vec3::ZERO, Vec2::new(1.0, 1.0)),
    );

    for i in 0..40 {
        host.surface = Some(Vec3::new(-0.3 + i as f32 * 0.015, 0.0, 0.0));
        app.on_pan(&mut host, Vec2::new(i as f32, 0.0));
    }
    let placed = app.controller().len();
    assert!(placed >= 10, "placed {placed}");

    assert!(app.start(&mut host));
    assert_eq!(host.impulses.len(), 1);
    assert_eq!(host.impulses[0].0, app.controller().placed()[0]);

    app.clear_all(&mut host);
    assert!(app.controller().is_empty());
    assert_eq!(app.controller().last_position(), None);
    assert_eq!(host.removed.len(), placed);
    assert!(!app.start(&mut host));
    assert_eq!(host.impulses.len(), 1);
}
