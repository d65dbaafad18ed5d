//! Back-to-front ordering for alpha-blended points.
//!
//! Alpha blending composites correctly only when points are drawn farthest
//! first, so the draw order is re-sorted every frame against the current
//! camera. The sort key is the fully projected Z of each point, matching
//! renderers that run positions through the whole view-projection chain;
//! under the usual GL conventions a larger projected Z is farther away.
//!
//! The sorter owns its key scratch buffer, so steady-state frames compute
//! keys and sort without any per-point allocation.

use crate::field::CloudField;
use glam::{Mat4, Vec3};

/// Depth sorter with a reusable key buffer.
#[derive(Debug, Default)]
pub struct DepthSorter {
    keys: Vec<f32>,
}

impl DepthSorter {
    /// Create a sorter. The key buffer grows to the field size on first use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-sort a field's draw order for the given combined matrix.
    ///
    /// `view_proj` must already fold in the cloud's model transform if it
    /// has one. Runs unconditionally; there is no dirty tracking.
    pub fn sort(&mut self, field: &mut CloudField, view_proj: Mat4) {
        self.sort_indices(&field.positions, view_proj, &mut field.draw_order);
    }

    /// Stably sort `order` by descending projected depth of `positions`.
    ///
    /// `order` holds indices into `positions`. Equal keys keep their
    /// previous relative order, which prevents flicker when depths tie.
    /// Non-finite projections (a singular camera matrix, or w = 0 at the
    /// projection plane) are given the smallest possible key, so they sort
    /// to the end and the result is a valid permutation for any matrix.
    pub fn sort_indices(&mut self, positions: &[Vec3], matrix: Mat4, order: &mut [u32]) {
        debug_assert_eq!(positions.len(), order.len());

        self.keys.clear();
        self.keys.extend(positions.iter().map(|&p| {
            let z = matrix.project_point3(p).z;
            if z.is_finite() {
                z
            } else {
                f32::NEG_INFINITY
            }
        }));

        let keys = &self.keys;
        order.sort_by(|&a, &b| keys[b as usize].total_cmp(&keys[a as usize]));
    }
}
