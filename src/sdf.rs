//! Signed-distance helpers that carve the cloud band.
//!
//! The band is a torus lying in the XZ plane. The distance is negated so the
//! sign doubles as an occupancy test: positive means inside the band. The
//! magnitude is only approximate once noise is folded in, which is all the
//! generator needs.

use glam::{Vec2, Vec3};

/// Negated signed distance to a torus around the Y axis.
///
/// `ring_radius` is the distance from the origin to the ring's centerline,
/// `ring_depth` the band thickness. Returns a positive value inside the
/// band, peaking at `ring_depth` on the centerline.
#[inline]
pub fn torus(p: Vec3, ring_radius: f32, ring_depth: f32) -> f32 {
    let ring = Vec2::new(p.x, p.z).length() - ring_radius;
    -(Vec2::new(ring, p.y).length() - ring_depth)
}

/// Cloud density at a sampling-space position.
///
/// `noise_val` is the noise sample remapped to `[0, 1]`; it erodes the band
/// edge so the cloud surface is irregular rather than a clean donut.
#[inline]
pub fn density(p: Vec3, noise_val: f32, ring_radius: f32, ring_depth: f32) -> f32 {
    torus(p, ring_radius, ring_depth) - noise_val / 10.0
}
