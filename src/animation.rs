//! Per-frame cloud motion.
//!
//! Every point bounces vertically on its own phase-scaled sinusoid, and a
//! single rotation phase drives sprite spin in the host's shader. Both are
//! pure functions of elapsed time, so an update can be repeated or replayed
//! without drift.

use crate::field::CloudField;
use glam::Vec3;

/// Animates a generated cloud field over time.
///
/// The per-point phase scales the bounce frequency, not its amplitude, so
/// every point stays within `bounce_range` of its base height while moving
/// out of sync with its neighbors.
#[derive(Clone, Copy, Debug)]
pub struct CloudAnimator {
    /// Angular speed of the vertical bounce, scaled per point by its phase.
    pub bounce_speed: f32,
    /// Peak vertical displacement in world units.
    pub bounce_range: f32,
    /// Speed of the sprite-rotation phase handed to the renderer.
    pub rotation_speed: f32,
}

impl Default for CloudAnimator {
    fn default() -> Self {
        Self {
            bounce_speed: 0.15,
            bounce_range: 10.0,
            rotation_speed: 0.15,
        }
    }
}

impl CloudAnimator {
    /// Create an animator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bounce angular speed.
    pub fn with_bounce_speed(mut self, speed: f32) -> Self {
        self.bounce_speed = speed;
        self
    }

    /// Set the peak vertical displacement.
    pub fn with_bounce_range(mut self, range: f32) -> Self {
        self.bounce_range = range;
        self
    }

    /// Set the sprite-rotation speed.
    pub fn with_rotation_speed(mut self, speed: f32) -> Self {
        self.rotation_speed = speed;
        self
    }

    /// Recompute every live position from its base position at `elapsed`
    /// seconds.
    ///
    /// Pure in `(base, phase, elapsed)`: calling twice with the same time
    /// writes the same positions, and point updates are independent of each
    /// other. No-op on an empty field. Must run before the frame's depth
    /// sort so the ordering reflects this frame's positions.
    pub fn animate(&self, field: &mut CloudField, elapsed: f32) {
        let iter = field
            .positions
            .iter_mut()
            .zip(&field.base_positions)
            .zip(&field.phases);
        for ((position, &base), &phase) in iter {
            let bounce = (elapsed * self.bounce_speed * phase).sin() * self.bounce_range;
            *position = Vec3::new(base.x, base.y + bounce, base.z);
        }
    }

    /// Global sprite-rotation phase for the frame at `elapsed` seconds.
    ///
    /// One scalar per frame, consumed as a shader uniform; there is no
    /// per-point rotation state.
    #[inline]
    pub fn rotation_phase(&self, elapsed: f32) -> f32 {
        elapsed * self.rotation_speed
    }
}
