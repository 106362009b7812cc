//! Horizontal-plane math used by the placement controller.
//!
//! Tracking space is y-up, so "horizontal" means the x/z plane. Bearings are
//! computed on 2D pairs produced by [`project_horizontal`].

use glam::{Vec2, Vec3};

/// Distance between two points once their height (y) is ignored.
#[inline]
pub fn planar_distance(p1: Vec3, p2: Vec3) -> f32 {
    (p1.x - p2.x).hypot(p1.z - p2.z)
}

/// Map a tracking-space point to the 2D (x, z) pair fed to [`bearing_degrees`].
#[inline]
pub fn project_horizontal(p: Vec3) -> Vec2 {
    Vec2::new(p.x, p.z)
}

/// Angle in degrees of the vector pointing from `end` to `start`, measured
/// from the +x axis.
///
/// The result lies in (-180, 180]. Coincident points yield 0.
pub fn bearing_degrees(start: Vec2, end: Vec2) -> f32 {
    let origin = start - end;
    // Either signed zero on the negative x axis is +180, never -180.
    if origin.y == 0.0 && origin.x < 0.0 {
        return 180.0;
    }
    let degrees = origin.y.atan2(origin.x) * (180.0 / std::f32::consts::PI);
    if degrees <= -180.0 {
        180.0
    } else {
        degrees.min(180.0)
    }
}
