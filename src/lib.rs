//! # Nimbus
//!
//! Procedural volumetric cloud point fields.
//!
//! Nimbus carves a torus-shaped cloud band out of a 3D sample lattice using
//! a signed-distance field perturbed by simplex noise, then keeps the
//! resulting point cloud alive frame to frame: a per-point bounce animation
//! and a back-to-front depth sort that keeps alpha-blended sprites
//! compositing correctly as the camera moves. Rendering itself stays on the
//! host side; nimbus produces the buffers a renderer consumes.
//!
//! ## Quick Start
//!
//! ```ignore
//! use nimbus::{CloudFieldConfig, Clouds, FrameClock, OrbitCamera, Simplex3};
//!
//! let mut clouds = Clouds::generate(
//!     CloudFieldConfig::new()
//!         .with_lattice(72, 3.0)
//!         .with_ring(0.4, 0.15),
//!     &Simplex3::new(7),
//! )?;
//!
//! let mut clock = FrameClock::new();
//! let camera = OrbitCamera::new();
//!
//! loop {
//!     let (elapsed, _delta) = clock.tick();
//!     clouds.update(elapsed, camera.view_projection());
//!
//!     let field = clouds.field();
//!     // Upload field.positions() and field.colors() as vertex attributes,
//!     // field.draw_order_bytes() as the index buffer, and
//!     // clouds.uniforms() as the shader uniform block.
//! }
//! # Ok::<(), nimbus::ConfigError>(())
//! ```
//!
//! ## Pipeline
//!
//! | Stage | Runs | Module |
//! |-------|------|--------|
//! | Field generation | once, at construction | [`field`] |
//! | Bounce animation | every frame | [`CloudAnimator`] |
//! | Depth sort | every frame, after animation | [`DepthSorter`] |
//!
//! Generation may be arbitrarily expensive; the per-frame stages allocate
//! nothing once warm. [`Clouds`] bundles the stages and enforces the
//! animate-before-sort ordering; drive the stages directly when the host
//! owns the frame loop structure.
//!
//! ## Inputs and outputs
//!
//! The core consumes a [`NoiseSource`] at generation time and a camera
//! view-projection matrix plus elapsed seconds each frame. It exposes
//! struct-of-arrays point buffers, an index permutation for back-to-front
//! drawing, and a small uniform block ([`CloudUniforms`]) with the
//! rotation phase and sprite parameters.

mod animation;
mod camera;
mod clouds;
mod depth_sort;
mod error;
pub mod field;
pub mod noise;
pub mod sdf;
mod time;
mod visuals;

pub use bytemuck;
pub use glam::{Mat4, Vec3, Vec4};

pub use animation::CloudAnimator;
pub use camera::OrbitCamera;
pub use clouds::Clouds;
pub use depth_sort::DepthSorter;
pub use error::ConfigError;
pub use field::{CloudField, CloudFieldConfig, CloudVertex};
pub use noise::{NoiseSource, Simplex3};
pub use time::FrameClock;
pub use visuals::{CloudUniforms, SpriteVisuals};
