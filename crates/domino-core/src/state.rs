//! Value types exchanged with the AR host.
//!
//! These types avoid referencing any platform API so that both the phone
//! runtime and the desktop simulator can consume them.

use std::fmt;

use glam::{Quat, Vec2, Vec3};

use crate::constants::{
    domino_size, DOMINO_COLORS, DOMINO_FRICTION, DOMINO_MASS, PLANE_COLLIDER_THICKNESS,
};

/// Rigid transform in tracking space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Pose {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    pub fn from_translation(position: Vec3) -> Self {
        Self::new(position, Quat::IDENTITY)
    }

    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        self.position + self.rotation * p
    }

    /// Compose `self` with a pose expressed in `self`'s local frame.
    pub fn then(&self, local: &Pose) -> Pose {
        Pose::new(
            self.transform_point(local.position),
            (self.rotation * local.rotation).normalize(),
        )
    }
}

/// Shape and material of one domino, handed to the host on creation.
#[derive(Clone, Debug, PartialEq)]
pub struct DominoSpec {
    /// Full box dimensions: width (x), height (y), length (z).
    pub size: Vec3,
    pub mass: f32,
    pub friction: f32,
    pub color_rgb: [f32; 3],
}

impl Default for DominoSpec {
    fn default() -> Self {
        Self {
            size: domino_size(),
            mass: DOMINO_MASS,
            friction: DOMINO_FRICTION,
            color_rgb: DOMINO_COLORS[0],
        }
    }
}

/// Host-assigned identifier of a tracking anchor.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AnchorId(pub String);

impl From<&str> for AnchorId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl fmt::Display for AnchorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AnchorKind {
    /// Horizontal plane: `center` is relative to the anchor pose, `extent`
    /// holds the width (x) and depth (z) of the detected rectangle.
    Plane { center: Vec3, extent: Vec2 },
    /// Any anchor the demo has no use for (images, faces, user anchors).
    Other,
}

/// Anchor as reported by the tracking session.
#[derive(Clone, Debug, PartialEq)]
pub struct Anchor {
    pub id: AnchorId,
    pub pose: Pose,
    pub kind: AnchorKind,
}

impl Anchor {
    pub fn plane(id: impl Into<AnchorId>, pose: Pose, center: Vec3, extent: Vec2) -> Self {
        Self {
            id: id.into(),
            pose,
            kind: AnchorKind::Plane { center, extent },
        }
    }

    pub fn plane_geometry(&self) -> Option<PlaneGeometry> {
        match self.kind {
            AnchorKind::Plane { center, extent } => Some(PlaneGeometry {
                anchor_pose: self.pose,
                center,
                extent,
            }),
            AnchorKind::Other => None,
        }
    }
}

/// Rectangle the host should show (as an invisible shadow catcher) and
/// collide against for one detected plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneGeometry {
    pub anchor_pose: Pose,
    pub center: Vec3,
    pub extent: Vec2,
}

impl PlaneGeometry {
    /// World pose of the rectangle's centre.
    pub fn world_pose(&self) -> Pose {
        self.anchor_pose.then(&Pose::from_translation(self.center))
    }

    /// Half extents of the thin static box standing in for the surface.
    pub fn collider_half_extents(&self) -> Vec3 {
        Vec3::new(
            self.extent.x * 0.5,
            PLANE_COLLIDER_THICKNESS * 0.5,
            self.extent.y * 0.5,
        )
    }
}
