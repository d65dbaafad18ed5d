//! Renderer-facing visual parameters.
//!
//! The crate does not render; it hands the host a small uniform block with
//! the per-frame values a point-sprite shader needs. Sprite texture and
//! shader source stay on the host side.

use bytemuck::{Pod, Zeroable};

/// Visual parameters for the cloud point sprites.
#[derive(Clone, Copy, Debug)]
pub struct SpriteVisuals {
    /// Point sprite size in pixels, before the renderer's distance
    /// attenuation.
    pub point_size: f32,
    /// Opacity multiplier applied to the sprite texture.
    pub opacity: f32,
}

impl Default for SpriteVisuals {
    fn default() -> Self {
        Self {
            point_size: 40.0,
            opacity: 0.4,
        }
    }
}

impl SpriteVisuals {
    /// Create sprite visuals with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sprite size in pixels.
    pub fn with_point_size(mut self, size: f32) -> Self {
        self.point_size = size;
        self
    }

    /// Set the texture opacity multiplier.
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Assemble the uniform block for one frame.
    pub fn uniforms(&self, rotation_phase: f32) -> CloudUniforms {
        CloudUniforms {
            rotation_phase,
            point_size: self.point_size,
            opacity: self.opacity,
            _pad: 0.0,
        }
    }
}

/// Per-frame uniform block consumed by the host's point-sprite shader.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct CloudUniforms {
    /// Global sprite-rotation phase, advanced by the animator.
    pub rotation_phase: f32,
    /// Point sprite size in pixels.
    pub point_size: f32,
    /// Texture opacity multiplier.
    pub opacity: f32,
    /// Keeps the block 16-byte sized for uniform buffer layouts.
    pub _pad: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_block_is_16_bytes() {
        assert_eq!(std::mem::size_of::<CloudUniforms>(), 16);
    }

    #[test]
    fn test_uniforms_carry_frame_values() {
        let visuals = SpriteVisuals::new().with_point_size(25.0).with_opacity(0.8);
        let uniforms = visuals.uniforms(1.5);
        assert_eq!(uniforms.rotation_phase, 1.5);
        assert_eq!(uniforms.point_size, 25.0);
        assert_eq!(uniforms.opacity, 0.8);
    }

    #[test]
    fn test_uniforms_castable_to_bytes() {
        let uniforms = SpriteVisuals::new().uniforms(0.0);
        let bytes: &[u8] = bytemuck::bytes_of(&uniforms);
        assert_eq!(bytes.len(), 16);
    }
}
