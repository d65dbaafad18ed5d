//! 3D noise sources for density sampling.
//!
//! The field generator is parameterized over a [`NoiseSource`] so hosts can
//! plug in their own noise (or a constant function in tests). The built-in
//! [`Simplex3`] wraps the `noise` crate's OpenSimplex implementation, which
//! is smooth and artifact-free at the scales cloud bands are sampled at.
//!
//! # Example
//!
//! ```ignore
//! use nimbus::{NoiseSource, Simplex3, Vec3};
//!
//! let noise = Simplex3::new(7);
//! let n = noise.sample(Vec3::new(0.3, 0.1, -0.2)); // in [-1, 1]
//! ```

use glam::Vec3;
use noise::{NoiseFn, OpenSimplex};

/// A deterministic 3D noise function.
///
/// Implementations should return values in `[-1, 1]`. The generator tolerates
/// out-of-range and non-finite samples (non-finite samples drop the affected
/// lattice point), so a misbehaving source degrades the cloud instead of
/// breaking generation.
pub trait NoiseSource {
    /// Sample the noise at a position in normalized sampling space.
    fn sample(&self, p: Vec3) -> f32;
}

/// Any plain function of position is a usable noise source.
///
/// Handy for tests and for hosts that already own a noise routine.
impl<F: Fn(Vec3) -> f32> NoiseSource for F {
    fn sample(&self, p: Vec3) -> f32 {
        self(p)
    }
}

/// Seeded OpenSimplex noise.
pub struct Simplex3 {
    inner: OpenSimplex,
}

impl Simplex3 {
    /// Create a simplex source with the given seed.
    ///
    /// The same seed always produces the same field.
    pub fn new(seed: u32) -> Self {
        Self {
            inner: OpenSimplex::new(seed),
        }
    }
}

impl NoiseSource for Simplex3 {
    fn sample(&self, p: Vec3) -> f32 {
        self.inner.get([p.x as f64, p.y as f64, p.z as f64]) as f32
    }
}
