//! Cloud field generation and point buffers.
//!
//! A [`CloudField`] is carved once out of a fixed cubic lattice: every
//! lattice sample is mapped to world space, scored with the torus density
//! function, and kept when the score is positive. The retained points form
//! a fixed-length buffer; nothing is added or removed afterwards, only the
//! live positions move.
//!
//! # Example
//!
//! ```ignore
//! use nimbus::{CloudField, CloudFieldConfig, Simplex3};
//!
//! let field = CloudField::generate(
//!     &CloudFieldConfig::new()
//!         .with_lattice(72, 3.0)
//!         .with_ring(0.4, 0.15),
//!     &Simplex3::new(7),
//! )?;
//! println!("{} points retained", field.len());
//! # Ok::<(), nimbus::ConfigError>(())
//! ```

use crate::error::ConfigError;
use crate::noise::NoiseSource;
use crate::sdf;
use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Configuration for carving a cloud band out of the sample lattice.
///
/// Fixed at generation time; there is no runtime reconfiguration. The
/// defaults reproduce a wide, thin cloud ring centered on the origin.
#[derive(Clone, Debug)]
pub struct CloudFieldConfig {
    /// Samples per axis; the lattice holds `lattice_size^3` candidates.
    pub lattice_size: u32,
    /// World-space distance between neighboring samples.
    pub step: f32,
    /// World-space center of the lattice cube.
    pub center: Vec3,
    /// Divisor applied to world positions before noise and SDF evaluation.
    /// Controls noise frequency relative to world scale.
    pub noise_divisor: f32,
    /// Torus ring radius in sampling space.
    pub ring_radius: f32,
    /// Torus band thickness in sampling space.
    pub ring_depth: f32,
    /// Base grayscale brightness; the noise sample lifts each channel
    /// from here toward white.
    pub brightness: f32,
    /// Seed for the per-point phase RNG. `None` draws entropy from the OS,
    /// so two runs differ only in phases.
    pub phase_seed: Option<u64>,
}

impl Default for CloudFieldConfig {
    fn default() -> Self {
        Self {
            lattice_size: 72,
            step: 3.0,
            center: Vec3::ZERO,
            noise_divisor: 100.0,
            ring_radius: 0.4,
            ring_depth: 0.15,
            brightness: 0.9,
            phase_seed: None,
        }
    }
}

impl CloudFieldConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lattice resolution and sample spacing.
    pub fn with_lattice(mut self, size: u32, step: f32) -> Self {
        self.lattice_size = size;
        self.step = step;
        self
    }

    /// Set the world-space center of the lattice cube.
    pub fn with_center(mut self, center: Vec3) -> Self {
        self.center = center;
        self
    }

    /// Set the divisor mapping world space into sampling space.
    pub fn with_noise_divisor(mut self, divisor: f32) -> Self {
        self.noise_divisor = divisor;
        self
    }

    /// Set the torus ring radius and band thickness.
    pub fn with_ring(mut self, radius: f32, depth: f32) -> Self {
        self.ring_radius = radius;
        self.ring_depth = depth;
        self
    }

    /// Set the base grayscale brightness.
    pub fn with_brightness(mut self, brightness: f32) -> Self {
        self.brightness = brightness;
        self
    }

    /// Seed the per-point phase RNG for reproducible fields.
    pub fn with_phase_seed(mut self, seed: u64) -> Self {
        self.phase_seed = Some(seed);
        self
    }

    /// World-space extent of the lattice cube per axis.
    pub fn world_size(&self) -> f32 {
        self.lattice_size as f32 * self.step
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.lattice_size == 0 {
            return Err(ConfigError::ZeroLattice);
        }
        if !(self.step > 0.0) {
            return Err(ConfigError::NonPositiveStep(self.step));
        }
        if !(self.noise_divisor > 0.0) {
            return Err(ConfigError::NonPositiveDivisor(self.noise_divisor));
        }
        for (name, value) in [
            ("ring_radius", self.ring_radius),
            ("ring_depth", self.ring_depth),
            ("brightness", self.brightness),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite(name));
            }
        }
        if !self.center.is_finite() {
            return Err(ConfigError::NonFinite("center"));
        }
        Ok(())
    }
}

/// Interleaved per-point attributes for a renderer vertex buffer.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct CloudVertex {
    /// Current world position.
    pub position: [f32; 3],
    /// The point's phase, used by sprite shaders to desynchronize rotation.
    pub random: f32,
    /// RGBA tint; alpha carries the density-derived opacity.
    pub color: [f32; 4],
}

/// A generated cloud point buffer.
///
/// Storage is struct-of-arrays: base positions and colors are immutable
/// after generation, live positions are rewritten every frame by the
/// animator, and the draw order is rewritten every frame by the depth
/// sorter. All buffers share one length for the lifetime of the field.
#[derive(Debug)]
pub struct CloudField {
    pub(crate) base_positions: Vec<Vec3>,
    pub(crate) positions: Vec<Vec3>,
    pub(crate) colors: Vec<Vec4>,
    pub(crate) phases: Vec<f32>,
    pub(crate) draw_order: Vec<u32>,
}

impl CloudField {
    /// Carve a field out of the lattice described by `config`.
    ///
    /// Deterministic in positions and colors for a fixed noise source;
    /// phases come from an independent RNG unless `phase_seed` pins them.
    /// Retaining zero points is not an error: downstream stages treat an
    /// empty field as a no-op. Non-finite noise samples drop the affected
    /// lattice point rather than poisoning the density comparison.
    pub fn generate(
        config: &CloudFieldConfig,
        noise: &impl NoiseSource,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let n = config.lattice_size;
        let min = config.center - Vec3::splat(config.world_size() / 2.0);
        let mut rng = match config.phase_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        let mut base_positions = Vec::new();
        let mut colors = Vec::new();
        let mut phases = Vec::new();

        // Scan order is az/ay/ax, matching buffer insertion order. It has no
        // geometric meaning; neighbors in the buffer need not be neighbors
        // in space.
        for az in 0..n {
            for ay in 0..n {
                for ax in 0..n {
                    let p = min + Vec3::new(ax as f32, ay as f32, az as f32) * config.step;
                    let q = p / config.noise_divisor;

                    let raw = noise.sample(q);
                    if !raw.is_finite() {
                        continue;
                    }
                    let noise_val = (raw + 1.0) / 2.0;

                    let density =
                        sdf::density(q, noise_val, config.ring_radius, config.ring_depth);
                    if density > 0.0 {
                        base_positions.push(p);
                        let tint = config.brightness + noise_val * (1.0 - config.brightness);
                        let alpha = ((density + 1.0) / 2.0).clamp(0.0, 1.0);
                        colors.push(Vec4::new(tint, tint, tint, alpha));
                        phases.push(rng.gen::<f32>());
                    }
                }
            }
        }

        let count = base_positions.len();
        log::debug!(
            "cloud field retained {} of {} lattice samples",
            count,
            (n as u64).pow(3)
        );

        Ok(Self {
            positions: base_positions.clone(),
            base_positions,
            colors,
            phases,
            draw_order: (0..count as u32).collect(),
        })
    }

    /// Number of retained points.
    #[inline]
    pub fn len(&self) -> usize {
        self.base_positions.len()
    }

    /// Whether generation retained no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.base_positions.is_empty()
    }

    /// Current world positions, rewritten each frame by the animator.
    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Generation-time positions; the immutable source for animation.
    #[inline]
    pub fn base_positions(&self) -> &[Vec3] {
        &self.base_positions
    }

    /// Per-point RGBA tints.
    #[inline]
    pub fn colors(&self) -> &[Vec4] {
        &self.colors
    }

    /// Per-point random phases in `[0, 1)`.
    #[inline]
    pub fn phases(&self) -> &[f32] {
        &self.phases
    }

    /// Back-to-front index permutation from the latest sort.
    #[inline]
    pub fn draw_order(&self) -> &[u32] {
        &self.draw_order
    }

    /// Draw order as raw bytes, ready for an index buffer upload.
    pub fn draw_order_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.draw_order)
    }

    /// Assemble one point's interleaved vertex attributes.
    pub fn vertex(&self, index: usize) -> CloudVertex {
        CloudVertex {
            position: self.positions[index].to_array(),
            random: self.phases[index],
            color: self.colors[index].to_array(),
        }
    }

    /// Assemble the interleaved vertex buffer into `out`, reusing its
    /// allocation across frames.
    pub fn write_vertices(&self, out: &mut Vec<CloudVertex>) {
        out.clear();
        out.reserve(self.len());
        for i in 0..self.len() {
            out.push(self.vertex(i));
        }
    }
}
