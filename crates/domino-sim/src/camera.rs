use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::constants::{
    CAMERA_EYE, CAMERA_FOVY, CAMERA_TARGET, CAMERA_ZFAR, CAMERA_ZNEAR, VIEWPORT_PX,
};

/// Right-handed perspective camera standing in for the phone's tracked
/// camera. Screen coordinates are pixels with the origin at the top left.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
    pub viewport: Vec2,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::from(CAMERA_EYE),
            target: Vec3::from(CAMERA_TARGET),
            up: Vec3::Y,
            fovy_radians: CAMERA_FOVY,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
            viewport: Vec2::from(VIEWPORT_PX),
        }
    }
}

impl Camera {
    pub fn aspect(&self) -> f32 {
        self.viewport.x / self.viewport.y.max(1.0)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect(), self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// World-space ray through a screen pixel.
    ///
    /// Returns `(ray_origin, ray_direction)` with a normalised direction.
    pub fn screen_to_world_ray(&self, screen: Vec2) -> (Vec3, Vec3) {
        let ndc_x = (2.0 * screen.x / self.viewport.x) - 1.0;
        let ndc_y = 1.0 - (2.0 * screen.y / self.viewport.y);
        let inv = (self.projection_matrix() * self.view_matrix()).inverse();
        let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        let rd = (p1 - self.eye).normalize();
        (self.eye, rd)
    }

    /// Pixel a world point projects to, or `None` when it is behind the eye.
    pub fn world_to_screen(&self, p: Vec3) -> Option<Vec2> {
        let clip = self.projection_matrix() * self.view_matrix() * p.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.viewport.x,
            (1.0 - ndc.y) * 0.5 * self.viewport.y,
        ))
    }
}
