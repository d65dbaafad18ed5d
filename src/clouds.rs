//! Top-level cloud pipeline: generate once, update every frame.
//!
//! [`Clouds`] wires the three stages together in the only valid order:
//! generation at construction, then animate-before-sort inside every
//! [`Clouds::update`]. Hosts that need finer control can drive
//! [`CloudAnimator`] and [`DepthSorter`] directly; this type exists so the
//! common case is one call per frame.
//!
//! # Example
//!
//! ```ignore
//! use nimbus::{CloudAnimator, CloudFieldConfig, Clouds, FrameClock, OrbitCamera, Simplex3};
//!
//! let mut clouds = Clouds::generate(CloudFieldConfig::new(), &Simplex3::new(7))?
//!     .with_animator(CloudAnimator::new().with_bounce_range(10.0));
//! let mut clock = FrameClock::new();
//! let camera = OrbitCamera::new();
//!
//! // Per frame:
//! let (elapsed, _delta) = clock.tick();
//! clouds.update(elapsed, camera.view_projection());
//! // upload clouds.field().positions(), clouds.field().draw_order(),
//! // clouds.uniforms() to the renderer
//! # Ok::<(), nimbus::ConfigError>(())
//! ```

use crate::animation::CloudAnimator;
use crate::depth_sort::DepthSorter;
use crate::error::ConfigError;
use crate::field::{CloudField, CloudFieldConfig};
use crate::noise::NoiseSource;
use crate::visuals::{CloudUniforms, SpriteVisuals};
use glam::Mat4;

/// A generated cloud band plus its per-frame update machinery.
pub struct Clouds {
    field: CloudField,
    animator: CloudAnimator,
    visuals: SpriteVisuals,
    sorter: DepthSorter,
    uniforms: CloudUniforms,
}

impl Clouds {
    /// Generate the field and set up default animation and visuals.
    pub fn generate(
        config: CloudFieldConfig,
        noise: &impl NoiseSource,
    ) -> Result<Self, ConfigError> {
        let field = CloudField::generate(&config, noise)?;
        let animator = CloudAnimator::default();
        let visuals = SpriteVisuals::default();
        let uniforms = visuals.uniforms(0.0);
        Ok(Self {
            field,
            animator,
            visuals,
            sorter: DepthSorter::new(),
            uniforms,
        })
    }

    /// Replace the animator settings.
    pub fn with_animator(mut self, animator: CloudAnimator) -> Self {
        self.animator = animator;
        self
    }

    /// Replace the sprite visuals.
    pub fn with_visuals(mut self, visuals: SpriteVisuals) -> Self {
        self.visuals = visuals;
        self.uniforms = visuals.uniforms(self.uniforms.rotation_phase);
        self
    }

    /// Advance the cloud to `elapsed` seconds and re-sort for the camera.
    ///
    /// The animator runs before the sorter, so the ordering always reflects
    /// this frame's positions rather than last frame's.
    pub fn update(&mut self, elapsed: f32, view_proj: Mat4) {
        self.update_with_model(elapsed, view_proj, Mat4::IDENTITY);
    }

    /// [`Clouds::update`] for a cloud re-parented under a model transform.
    pub fn update_with_model(&mut self, elapsed: f32, view_proj: Mat4, model: Mat4) {
        self.animator.animate(&mut self.field, elapsed);
        self.sorter.sort(&mut self.field, view_proj * model);
        self.uniforms = self.visuals.uniforms(self.animator.rotation_phase(elapsed));
    }

    /// The generated point buffer.
    #[inline]
    pub fn field(&self) -> &CloudField {
        &self.field
    }

    /// The animator driving the bounce and rotation phase.
    #[inline]
    pub fn animator(&self) -> &CloudAnimator {
        &self.animator
    }

    /// The sprite visuals.
    #[inline]
    pub fn visuals(&self) -> &SpriteVisuals {
        &self.visuals
    }

    /// The uniform block for the latest frame.
    #[inline]
    pub fn uniforms(&self) -> CloudUniforms {
        self.uniforms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn test_clouds() -> Clouds {
        let config = CloudFieldConfig::new()
            .with_lattice(12, 3.0)
            .with_noise_divisor(18.0)
            .with_phase_seed(13);
        Clouds::generate(config, &|_p: Vec3| -0.2_f32).unwrap()
    }

    fn view_proj() -> Mat4 {
        let proj =
            Mat4::perspective_rh_gl(std::f32::consts::FRAC_PI_4, 16.0 / 9.0, 0.1, 1000.0);
        let view = Mat4::look_at_rh(Vec3::new(0.0, 20.0, 60.0), Vec3::ZERO, Vec3::Y);
        proj * view
    }

    #[test]
    fn test_update_keeps_buffers_consistent() {
        let mut clouds = test_clouds();
        let n = clouds.field().len();
        assert!(n > 0);

        for frame in 0..10 {
            clouds.update(frame as f32 * 0.016, view_proj());
            let field = clouds.field();
            assert_eq!(field.positions().len(), n);
            assert_eq!(field.colors().len(), n);
            assert_eq!(field.phases().len(), n);
            assert_eq!(field.draw_order().len(), n);
        }
    }

    #[test]
    fn test_update_advances_rotation_phase() {
        let mut clouds =
            test_clouds().with_animator(CloudAnimator::new().with_rotation_speed(0.15));
        clouds.update(10.0, view_proj());
        assert!((clouds.uniforms().rotation_phase - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_visuals_flow_into_uniforms() {
        let mut clouds =
            test_clouds().with_visuals(SpriteVisuals::new().with_point_size(64.0));
        clouds.update(1.0, view_proj());
        assert_eq!(clouds.uniforms().point_size, 64.0);
    }

    #[test]
    fn test_empty_field_updates_cleanly() {
        let config = CloudFieldConfig::new().with_lattice(4, 1.0);
        let mut clouds = Clouds::generate(config, &|_p: Vec3| f32::NAN).unwrap();
        assert!(clouds.field().is_empty());

        clouds.update(3.0, view_proj());
        assert!(clouds.field().draw_order().is_empty());
    }

    #[test]
    fn test_update_with_orbit_camera_and_clock() {
        use crate::camera::OrbitCamera;
        use crate::time::FrameClock;

        let mut clouds = test_clouds();
        let mut clock = FrameClock::new().with_fixed_delta(1.0 / 60.0);
        let mut camera = OrbitCamera::new();

        for _ in 0..5 {
            let (elapsed, _delta) = clock.tick();
            camera.yaw += 0.05;
            clouds.update(elapsed, camera.view_projection());
        }
        assert_eq!(clouds.field().draw_order().len(), clouds.field().len());
    }

    #[test]
    fn test_update_with_model_transform() {
        let mut clouds = test_clouds();
        let model = Mat4::from_translation(Vec3::new(0.0, 0.0, -50.0));
        clouds.update_with_model(1.0, view_proj(), model);

        let n = clouds.field().len();
        let mut seen = vec![false; n];
        for &i in clouds.field().draw_order() {
            assert!(!seen[i as usize]);
            seen[i as usize] = true;
        }
    }

    #[test]
    fn test_update_is_repeatable() {
        let mut clouds = test_clouds();
        clouds.update(5.0, view_proj());
        let positions = clouds.field().positions().to_vec();
        let order = clouds.field().draw_order().to_vec();

        clouds.update(5.0, view_proj());
        assert_eq!(clouds.field().positions(), &positions[..]);
        assert_eq!(clouds.field().draw_order(), &order[..]);
    }
}
