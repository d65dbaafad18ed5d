//! Orbit camera for hosts without their own camera rig.
//!
//! The depth sorter only consumes a combined matrix, so any camera works;
//! this one is a convenience for demos and tests that orbit the cloud band.

use glam::{Mat4, Vec3};

/// Orbit camera producing the view-projection matrix the depth sorter
/// consumes.
#[derive(Clone, Copy, Debug)]
pub struct OrbitCamera {
    /// Horizontal rotation angle in radians.
    pub yaw: f32,
    /// Vertical rotation angle in radians.
    pub pitch: f32,
    /// Distance from the target point.
    pub distance: f32,
    /// Point the camera orbits around.
    pub target: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clip plane distance.
    pub near: f32,
    /// Far clip plane distance.
    pub far: f32,
}

impl OrbitCamera {
    /// Create a camera far enough out to frame a default-sized cloud band.
    pub fn new() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.3,
            distance: 300.0,
            target: Vec3::ZERO,
            fov_y: std::f32::consts::FRAC_PI_4,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 2000.0,
        }
    }

    /// The camera's world position.
    pub fn position(&self) -> Vec3 {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.target + Vec3::new(x, y, z)
    }

    /// View matrix looking at the target.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    /// Perspective projection with GL depth conventions.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y, self.aspect, self.near, self.far)
    }

    /// Combined matrix for the depth sorter and the host's shader.
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_respects_distance() {
        let camera = OrbitCamera::new();
        let to_target = camera.position() - camera.target;
        assert!((to_target.length() - camera.distance).abs() < 1e-3);
    }

    #[test]
    fn test_yaw_orbits_around_target() {
        let mut camera = OrbitCamera::new();
        let a = camera.position();
        camera.yaw = std::f32::consts::PI;
        let b = camera.position();
        // Opposite sides of the target, same height.
        assert!((a.y - b.y).abs() < 1e-3);
        assert!((a.x + b.x).abs() < 1e-3);
        assert!((a.z + b.z).abs() < 1e-3);
    }

    #[test]
    fn test_view_projection_pushes_target_into_depth() {
        let camera = OrbitCamera::new();
        let projected = camera.view_projection().project_point3(camera.target);
        // The target sits in front of the camera, inside the depth range.
        assert!(projected.z.is_finite());
        assert!(projected.z.abs() <= 1.0);
    }
}
