//! Renderer configuration.

use crate::scratch::{MAX_VERTICES_PER_ATTACHMENT, MIN_VERTICES_PER_ATTACHMENT};

/// Per-renderer settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RendererConfig {
    /// Depth offset the per-slot accumulator starts from.
    pub layer_spacing_base: f32,
    /// Depth step subtracted before each slot. `0.0` draws every slot on one plane.
    pub layer_spacing: f32,
    /// Also draw region quads facing away from the viewer.
    pub double_faced: bool,
    /// Outline every mesh triangle.
    pub wireframe: bool,
    /// Scratch buffer capacity, in vertices and in world-position floats.
    /// Never below [`MIN_VERTICES_PER_ATTACHMENT`] once a renderer uses it.
    pub max_vertices_per_attachment: usize,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self::flat()
    }
}

impl RendererConfig {
    /// Every slot on the origin plane. The usual 2D setup.
    pub const fn flat() -> Self {
        Self {
            layer_spacing_base: 0.0,
            layer_spacing: 0.0,
            double_faced: false,
            wireframe: false,
            max_vertices_per_attachment: MAX_VERTICES_PER_ATTACHMENT,
        }
    }

    /// Slots spread along Z, for a skeleton placed in a 3D scene.
    pub const fn layered() -> Self {
        Self {
            layer_spacing_base: -1.0,
            layer_spacing: 0.5,
            ..Self::flat()
        }
    }

    #[must_use]
    pub fn with_layer_spacing(mut self, base: f32, spacing: f32) -> Self {
        self.layer_spacing_base = base;
        self.layer_spacing = spacing;
        self
    }

    #[must_use]
    pub fn with_double_faced(mut self, double_faced: bool) -> Self {
        self.double_faced = double_faced;
        self
    }

    #[must_use]
    pub fn with_wireframe(mut self, wireframe: bool) -> Self {
        self.wireframe = wireframe;
        self
    }

    /// Raised to [`MIN_VERTICES_PER_ATTACHMENT`] if smaller.
    #[must_use]
    pub fn with_max_vertices(mut self, max_vertices: usize) -> Self {
        self.max_vertices_per_attachment = max_vertices.max(MIN_VERTICES_PER_ATTACHMENT);
        self
    }
}
