//! Batching backend.
//!
//! Folds immediate-mode primitives into a single triangle-list vertex buffer
//! that a GPU API without immediate-mode quads can upload as is. Consecutive
//! primitives sharing a texture and blend function are merged into one
//! [`DrawBatch`]. Wireframe outlines go into a separate line list.

use glam::{Mat4, Vec3};
use marionette_core::TextureHandle;

use crate::blend::BlendFunction;
use crate::error::GraphicsError;
use crate::immediate::{DrawMode, ImmediateBackend, ImmediateVertex};

/// Quad corner order when split into two triangles.
const QUAD_TRIANGLES: [usize; 6] = [0, 1, 2, 2, 3, 0];

/// A batched vertex: position + uv + color.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SkeletonVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
    pub color: [f32; 4],
}

/// A line-list vertex: position + color.
///
/// Every pair of consecutive vertices forms one line segment.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

/// A run of triangles drawn with the same texture and blend function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawBatch {
    pub texture: Option<TextureHandle>,
    pub blend: BlendFunction,
    pub first_vertex: u32,
    pub vertex_count: u32,
}

/// Accumulated vertex data for a single frame.
#[derive(Debug, Default)]
pub struct FrameData {
    pub vertices: Vec<SkeletonVertex>,
    pub batches: Vec<DrawBatch>,
    pub lines: Vec<LineVertex>,
}

impl FrameData {
    fn clear(&mut self) {
        self.vertices.clear();
        self.batches.clear();
        self.lines.clear();
    }

    fn push_triangle_vertex(
        &mut self,
        vertex: SkeletonVertex,
        texture: Option<TextureHandle>,
        blend: BlendFunction,
    ) {
        let next = self.vertices.len() as u32;
        match self.batches.last_mut() {
            Some(batch)
                if batch.texture == texture
                    && batch.blend == blend
                    && batch.first_vertex + batch.vertex_count == next =>
            {
                batch.vertex_count += 1;
            }
            _ => self.batches.push(DrawBatch {
                texture,
                blend,
                first_vertex: next,
                vertex_count: 1,
            }),
        }
        self.vertices.push(vertex);
    }
}

/// Immediate-mode backend that produces batched vertex buffers.
#[derive(Debug)]
pub struct BatchingBackend {
    frame: FrameData,
    transform: Mat4,
    matrix_stack: Vec<Mat4>,
    blend: BlendFunction,
    texture: Option<TextureHandle>,
    pending: Option<(DrawMode, Vec<ImmediateVertex>)>,
}

impl Default for BatchingBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchingBackend {
    pub fn new() -> Self {
        Self {
            frame: FrameData::default(),
            transform: Mat4::IDENTITY,
            matrix_stack: Vec::new(),
            blend: BlendFunction::default(),
            texture: None,
            pending: None,
        }
    }

    /// Get the backend name.
    pub fn name(&self) -> &'static str {
        "Batching Backend"
    }

    /// Clear the previous frame's data and reset all state.
    pub fn begin_frame(&mut self) {
        self.frame.clear();
        self.transform = Mat4::IDENTITY;
        self.matrix_stack.clear();
        self.blend = BlendFunction::default();
        self.texture = None;
        self.pending = None;
    }

    /// Check that the frame was closed cleanly.
    ///
    /// Returns an error if a primitive is still open or matrices are still
    /// pushed. The data batched so far stays available either way.
    pub fn finish_frame(&mut self) -> Result<(), GraphicsError> {
        if let Some((mode, vertices)) = self.pending.take() {
            return Err(GraphicsError::UnbalancedState(format!(
                "{:?} primitive with {} vertices was never ended",
                mode,
                vertices.len()
            )));
        }
        if !self.matrix_stack.is_empty() {
            return Err(GraphicsError::UnbalancedState(format!(
                "{} matrices left pushed",
                self.matrix_stack.len()
            )));
        }
        log::trace!(
            "BatchingBackend: frame finished ({} vertices, {} batches, {} line vertices)",
            self.frame.vertices.len(),
            self.frame.batches.len(),
            self.frame.lines.len()
        );
        Ok(())
    }

    pub fn frame(&self) -> &FrameData {
        &self.frame
    }

    pub fn vertices(&self) -> &[SkeletonVertex] {
        &self.frame.vertices
    }

    pub fn batches(&self) -> &[DrawBatch] {
        &self.frame.batches
    }

    pub fn line_vertices(&self) -> &[LineVertex] {
        &self.frame.lines
    }

    /// Triangle vertices as raw bytes for buffer upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.frame.vertices)
    }

    /// Line vertices as raw bytes for buffer upload.
    pub fn line_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.frame.lines)
    }

    /// Current model transform.
    pub fn transform(&self) -> Mat4 {
        self.transform
    }

    /// Post-multiply the current transform by a translation.
    pub fn translate(&mut self, x: f32, y: f32, z: f32) {
        self.transform *= Mat4::from_translation(Vec3::new(x, y, z));
    }

    /// Post-multiply the current transform by `matrix`.
    pub fn mult_matrix(&mut self, matrix: Mat4) {
        self.transform *= matrix;
    }

    fn transform_point(&self, position: [f32; 3]) -> [f32; 3] {
        self.transform
            .transform_point3(Vec3::from_array(position))
            .to_array()
    }

    fn batched(&self, vertex: &ImmediateVertex) -> SkeletonVertex {
        SkeletonVertex {
            position: self.transform_point(vertex.position),
            uv: vertex.uv,
            color: vertex.color,
        }
    }

    fn push_line(&mut self, start: [f32; 3], end: [f32; 3], color: [f32; 4]) {
        let start = self.transform_point(start);
        let end = self.transform_point(end);
        self.frame.lines.push(LineVertex {
            position: start,
            color,
        });
        self.frame.lines.push(LineVertex {
            position: end,
            color,
        });
    }

    fn flush(&mut self, mode: DrawMode, vertices: Vec<ImmediateVertex>) {
        let per_primitive = mode.vertices_per_primitive();
        let leftover = vertices.len() % per_primitive;
        if leftover != 0 {
            log::warn!(
                "BatchingBackend: {:?} primitive ended with {} stray vertices; dropping them",
                mode,
                leftover
            );
        }

        for primitive in vertices.chunks_exact(per_primitive) {
            match mode {
                DrawMode::Lines => {
                    self.push_line(primitive[0].position, primitive[1].position, primitive[0].color)
                }
                DrawMode::Triangles => {
                    for vertex in primitive {
                        let batched = self.batched(vertex);
                        self.frame
                            .push_triangle_vertex(batched, self.texture, self.blend);
                    }
                }
                DrawMode::Quads => {
                    for &corner in &QUAD_TRIANGLES {
                        let batched = self.batched(&primitive[corner]);
                        self.frame
                            .push_triangle_vertex(batched, self.texture, self.blend);
                    }
                }
            }
        }
    }
}

impl ImmediateBackend for BatchingBackend {
    fn begin(&mut self, mode: DrawMode) {
        if let Some((open, _)) = &self.pending {
            log::warn!(
                "BatchingBackend: begin({:?}) while {:?} is still open; ignoring",
                mode,
                open
            );
            return;
        }
        self.pending = Some((mode, Vec::new()));
    }

    fn end(&mut self) {
        match self.pending.take() {
            Some((mode, vertices)) => self.flush(mode, vertices),
            None => log::warn!("BatchingBackend: end() without begin(); ignoring"),
        }
    }

    fn vertex(&mut self, vertex: ImmediateVertex) {
        match self.pending.as_mut() {
            Some((_, vertices)) => vertices.push(vertex),
            None => log::warn!("BatchingBackend: vertex outside begin/end; ignoring"),
        }
    }

    fn push_matrix(&mut self) {
        self.matrix_stack.push(self.transform);
    }

    fn pop_matrix(&mut self) {
        match self.matrix_stack.pop() {
            Some(matrix) => self.transform = matrix,
            None => log::warn!("BatchingBackend: pop_matrix() on empty stack; ignoring"),
        }
    }

    fn set_blend_mode(&mut self, blend: BlendFunction) {
        self.blend = blend;
    }

    fn end_blend_mode(&mut self) {
        self.blend = BlendFunction::default();
    }

    fn enable_texture(&mut self, texture: TextureHandle) {
        self.texture = Some(texture);
    }

    fn disable_texture(&mut self) {
        self.texture = None;
    }

    fn draw_triangle_lines(&mut self, points: [[f32; 3]; 3], color: [f32; 4]) {
        self.push_line(points[0], points[1], color);
        self.push_line(points[1], points[2], color);
        self.push_line(points[2], points[0], color);
    }
}
