mod common;

use common::RecordingHost;
use domino_core::{Anchor, AnchorId, AnchorKind, PlaneRegistry, Pose};
use glam::{Quat, Vec2, Vec3};

fn floor(id: &str, extent: Vec2) -> Anchor {
    Anchor::plane(
        id,
        Pose::from_translation(Vec3::new(0.0, -0.8, -0.5)),
        Vec3::new(0.02, 0.0, -0.01),
        extent,
    )
}

#[test]
fn added_plane_is_registered_by_anchor_id() {
    let mut host = RecordingHost::default();
    let mut reg = PlaneRegistry::new();

    assert!(reg.on_plane_added(&mut host, &floor("A", Vec2::new(0.4, 0.3))));

    assert_eq!(reg.len(), 1);
    let handle = *reg.get(&AnchorId::from("A")).expect("registered");
    let geometry = host.planes[&handle];
    assert_eq!(geometry.extent, Vec2::new(0.4, 0.3));
    assert!((geometry.world_pose().position - Vec3::new(0.02, -0.8, -0.51)).length() < 1e-6);
    let half = geometry.collider_half_extents();
    assert!((half - Vec3::new(0.2, 0.0005, 0.15)).length() < 1e-6);
}

#[test]
fn non_plane_anchors_are_ignored() {
    let mut host = RecordingHost::default();
    let mut reg = PlaneRegistry::new();
    let anchor = Anchor {
        id: AnchorId::from("image"),
        pose: Pose::IDENTITY,
        kind: AnchorKind::Other,
    };

    assert!(!reg.on_plane_added(&mut host, &anchor));
    assert!(!reg.on_plane_updated(&mut host, &anchor));
    assert!(reg.is_empty());
    assert!(host.planes.is_empty());
}

#[test]
fn update_resizes_and_moves_the_stored_plane() {
    let mut host = RecordingHost::default();
    let mut reg = PlaneRegistry::new();
    reg.on_plane_added(&mut host, &floor("A", Vec2::new(0.4, 0.3)));
    let handle = *reg.get(&AnchorId::from("A")).expect("registered");

    let mut grown = floor("A", Vec2::new(1.2, 0.9));
    grown.pose.rotation = Quat::from_rotation_y(0.3);
    assert!(reg.on_plane_updated(&mut host, &grown));

    assert_eq!(host.planes.len(), 1);
    assert_eq!(host.plane_updates.len(), 1);
    assert_eq!(host.plane_updates[0].0, handle);
    assert_eq!(host.planes[&handle].extent, Vec2::new(1.2, 0.9));
    assert_eq!(host.planes[&handle].anchor_pose, grown.pose);
}

#[test]
fn update_for_unknown_anchor_is_ignored() {
    let mut host = RecordingHost::default();
    let mut reg = PlaneRegistry::<u32>::new();

    assert!(!reg.on_plane_updated(&mut host, &floor("ghost", Vec2::ONE)));
    assert!(host.plane_updates.is_empty());
}

#[test]
fn repeated_add_refreshes_instead_of_duplicating() {
    let mut host = RecordingHost::default();
    let mut reg = PlaneRegistry::new();
    reg.on_plane_added(&mut host, &floor("A", Vec2::new(0.4, 0.3)));
    reg.on_plane_added(&mut host, &floor("A", Vec2::new(0.5, 0.5)));

    assert_eq!(reg.len(), 1);
    assert_eq!(host.planes.len(), 1);
    assert_eq!(host.plane_updates.len(), 1);
}

#[test]
fn several_planes_are_tracked_independently() {
    let mut host = RecordingHost::default();
    let mut reg = PlaneRegistry::new();
    reg.on_plane_added(&mut host, &floor("A", Vec2::new(0.4, 0.3)));
    reg.on_plane_added(&mut host, &floor("B", Vec2::new(0.2, 0.2)));

    assert_eq!(reg.len(), 2);
    assert_ne!(reg.get(&AnchorId::from("A")), reg.get(&AnchorId::from("B")));
    assert_eq!(reg.iter().count(), 2);
}

#[test]
fn removal_forgets_the_plane() {
    let mut host = RecordingHost::default();
    let mut reg = PlaneRegistry::new();
    reg.on_plane_added(&mut host, &floor("A", Vec2::new(0.4, 0.3)));
    let handle = *reg.get(&AnchorId::from("A")).expect("registered");

    assert!(reg.on_plane_removed(&mut host, &AnchorId::from("A")));
    assert!(!reg.on_plane_removed(&mut host, &AnchorId::from("A")));

    assert!(reg.is_empty());
    assert_eq!(host.removed_planes, vec![handle]);
}
