//! Immediate-mode drawing interface.
//!
//! Mirrors the classic begin/vertex/end style: a primitive is opened with
//! [`ImmediateBackend::begin`], fed vertices one at a time and closed with
//! [`ImmediateBackend::end`]. Texture, blend function and the matrix stack
//! are state that applies to every primitive submitted while it is set.

use marionette_core::TextureHandle;

use crate::blend::BlendFunction;

/// Primitive assembled from the vertices between `begin` and `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawMode {
    /// Every 2 vertices form a line segment.
    Lines,
    /// Every 3 vertices form a triangle.
    Triangles,
    /// Every 4 vertices form a quad.
    Quads,
}

impl DrawMode {
    /// Number of vertices per primitive.
    pub const fn vertices_per_primitive(self) -> usize {
        match self {
            DrawMode::Lines => 2,
            DrawMode::Triangles => 3,
            DrawMode::Quads => 4,
        }
    }
}

/// A single vertex submitted to an immediate-mode backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImmediateVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
    /// RGBA, nominally 0..=1.
    pub color: [f32; 4],
    pub normal: [f32; 3],
}

impl ImmediateVertex {
    /// Normal pointing at a viewer looking down -Z.
    pub const FORWARD: [f32; 3] = [0.0, 0.0, 1.0];
}

/// Immediate-mode 3D drawing backend.
///
/// Implementations: [`BatchingBackend`](crate::BatchingBackend) (folds
/// primitives into a vertex buffer) and
/// [`CommandRecorder`](crate::CommandRecorder) (records calls, for testing).
pub trait ImmediateBackend {
    /// Open a primitive batch.
    fn begin(&mut self, mode: DrawMode);
    /// Close the open primitive batch.
    fn end(&mut self);
    /// Append a vertex to the open primitive batch.
    fn vertex(&mut self, vertex: ImmediateVertex);

    /// Save the current transform.
    fn push_matrix(&mut self);
    /// Restore the last saved transform.
    fn pop_matrix(&mut self);

    /// Switch the blend function for following primitives.
    fn set_blend_mode(&mut self, blend: BlendFunction);
    /// Return to the backend's default blend function.
    fn end_blend_mode(&mut self);

    /// Bind a texture for following primitives.
    fn enable_texture(&mut self, texture: TextureHandle);
    /// Unbind the current texture.
    fn disable_texture(&mut self);

    /// Outline a triangle (debug wireframe).
    fn draw_triangle_lines(&mut self, points: [[f32; 3]; 3], color: [f32; 4]);
}
