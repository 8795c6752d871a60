//! Perspective camera and the model group transform it looks at.

use crate::constants::{CAMERA_FAR, CAMERA_FOV_Y_DEG, CAMERA_NEAR};
use glam::{Mat4, Quat, Vec2, Vec3, Vec4};

/// Viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }

    /// Pixel coordinates (origin top-left) to normalized device coordinates.
    #[inline]
    pub fn px_to_ndc(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(
            (x / self.width.max(1.0)) * 2.0 - 1.0,
            -(y / self.height.max(1.0)) * 2.0 + 1.0,
        )
    }

    /// Normalized device coordinates to pixel coordinates (origin top-left).
    #[inline]
    pub fn ndc_to_px(&self, ndc: Vec2) -> Vec2 {
        Vec2::new(
            (ndc.x * 0.5 + 0.5) * self.width,
            (-(ndc.y * 0.5) + 0.5) * self.height,
        )
    }
}

/// Camera on the +Z axis looking down -Z at the model group.
#[derive(Clone, Copy, Debug)]
pub struct PerspectiveCamera {
    pub z: f32,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl PerspectiveCamera {
    pub fn new(z: f32, aspect: f32) -> Self {
        Self {
            z,
            aspect,
            fovy_radians: CAMERA_FOV_Y_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    #[inline]
    pub fn eye(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, self.z)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        let eye = self.eye();
        Mat4::look_at_rh(eye, eye - Vec3::Z, Vec3::Y)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space point to NDC. `None` when the point sits on or behind the
    /// eye plane.
    pub fn project(&self, world: Vec3) -> Option<Vec3> {
        let clip = self.view_projection() * world.extend(1.0);
        if clip.w <= f32::EPSILON {
            return None;
        }
        Some(clip.truncate() / clip.w)
    }

    /// World-space ray through an NDC position. Returns `(origin, direction)`.
    pub fn ray_through_ndc(&self, ndc: Vec2) -> (Vec3, Vec3) {
        let inv = self.view_projection().inverse();
        let far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let far = far.truncate() / far.w;
        let origin = self.eye();
        (origin, (far - origin).normalize())
    }
}

/// Rendered orientation and scale of the model group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScenePose {
    pub yaw: f32,
    pub pitch: f32,
    pub camera_z: f32,
    pub pulse: f32,
}

impl ScenePose {
    /// Rotation about X then Y, matching an XYZ Euler order.
    #[inline]
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_x(self.pitch) * Quat::from_rotation_y(self.yaw)
    }

    /// Group transform without the pulse scale.
    pub fn rotation_matrix(&self) -> Mat4 {
        Mat4::from_quat(self.rotation())
    }

    /// Full group transform, pulse scale included. This is what the mesh is
    /// drawn with and what picks are mapped back through.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(Vec3::splat(self.pulse), self.rotation(), Vec3::ZERO)
    }

    pub fn camera(&self, viewport: Viewport) -> PerspectiveCamera {
        PerspectiveCamera::new(self.camera_z, viewport.aspect())
    }
}
