//! Recording backend for testing and diagnostics.
//!
//! Doesn't draw anything. Every call is stored as a [`DrawCommand`] so tests
//! can assert on the exact call sequence, or on the primitives it produces
//! via [`CommandRecorder::primitives`].

use marionette_core::TextureHandle;

use crate::blend::BlendFunction;
use crate::immediate::{DrawMode, ImmediateBackend, ImmediateVertex};

/// Recorded immediate-mode call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Begin(DrawMode),
    End,
    Vertex(ImmediateVertex),
    PushMatrix,
    PopMatrix,
    SetBlendMode(BlendFunction),
    EndBlendMode,
    EnableTexture(TextureHandle),
    DisableTexture,
    TriangleLines {
        points: [[f32; 3]; 3],
        color: [f32; 4],
    },
}

/// A primitive batch reconstructed from the recorded calls, with the state
/// that was active when it was closed.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedPrimitive {
    pub mode: DrawMode,
    pub vertices: Vec<ImmediateVertex>,
    pub texture: Option<TextureHandle>,
    /// `None` when the backend default was active.
    pub blend: Option<BlendFunction>,
    pub matrix_depth: usize,
}

/// A backend that records draw calls. Does not require a GPU.
#[derive(Debug, Default)]
pub struct CommandRecorder {
    commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded commands.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Clear recorded commands.
    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// Replay the commands and collect every closed primitive batch.
    pub fn primitives(&self) -> Vec<RecordedPrimitive> {
        let mut primitives = Vec::new();
        let mut texture = None;
        let mut blend = None;
        let mut depth = 0usize;
        let mut open: Option<(DrawMode, Vec<ImmediateVertex>)> = None;

        for command in &self.commands {
            match command {
                DrawCommand::Begin(mode) => open = Some((*mode, Vec::new())),
                DrawCommand::Vertex(vertex) => {
                    if let Some((_, vertices)) = open.as_mut() {
                        vertices.push(*vertex);
                    }
                }
                DrawCommand::End => {
                    if let Some((mode, vertices)) = open.take() {
                        primitives.push(RecordedPrimitive {
                            mode,
                            vertices,
                            texture,
                            blend,
                            matrix_depth: depth,
                        });
                    }
                }
                DrawCommand::PushMatrix => depth += 1,
                DrawCommand::PopMatrix => depth = depth.saturating_sub(1),
                DrawCommand::SetBlendMode(function) => blend = Some(*function),
                DrawCommand::EndBlendMode => blend = None,
                DrawCommand::EnableTexture(handle) => texture = Some(*handle),
                DrawCommand::DisableTexture => texture = None,
                DrawCommand::TriangleLines { .. } => {}
            }
        }
        primitives
    }

    /// Every blend function that was set, in order.
    pub fn blend_changes(&self) -> Vec<BlendFunction> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::SetBlendMode(function) => Some(*function),
                _ => None,
            })
            .collect()
    }

    /// Every wireframe triangle outline, in order.
    pub fn triangle_outlines(&self) -> Vec<([[f32; 3]; 3], [f32; 4])> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::TriangleLines { points, color } => Some((*points, *color)),
                _ => None,
            })
            .collect()
    }

    fn record(&mut self, command: DrawCommand) {
        log::trace!("CommandRecorder: {:?}", command);
        self.commands.push(command);
    }
}

impl ImmediateBackend for CommandRecorder {
    fn begin(&mut self, mode: DrawMode) {
        self.record(DrawCommand::Begin(mode));
    }

    fn end(&mut self) {
        self.record(DrawCommand::End);
    }

    fn vertex(&mut self, vertex: ImmediateVertex) {
        self.record(DrawCommand::Vertex(vertex));
    }

    fn push_matrix(&mut self) {
        self.record(DrawCommand::PushMatrix);
    }

    fn pop_matrix(&mut self) {
        self.record(DrawCommand::PopMatrix);
    }

    fn set_blend_mode(&mut self, blend: BlendFunction) {
        self.record(DrawCommand::SetBlendMode(blend));
    }

    fn end_blend_mode(&mut self) {
        self.record(DrawCommand::EndBlendMode);
    }

    fn enable_texture(&mut self, texture: TextureHandle) {
        self.record(DrawCommand::EnableTexture(texture));
    }

    fn disable_texture(&mut self) {
        self.record(DrawCommand::DisableTexture);
    }

    fn draw_triangle_lines(&mut self, points: [[f32; 3]; 3], color: [f32; 4]) {
        self.record(DrawCommand::TriangleLines { points, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertex(x: f32) -> ImmediateVertex {
        ImmediateVertex {
            position: [x, 0.0, 0.0],
            uv: [0.0, 0.0],
            color: [1.0; 4],
            normal: ImmediateVertex::FORWARD,
        }
    }

    #[test]
    fn test_records_in_order() {
        let mut recorder = CommandRecorder::new();
        recorder.set_blend_mode(BlendFunction::Additive);
        recorder.begin(DrawMode::Triangles);
        recorder.vertex(vertex(1.0));
        recorder.end();
        recorder.end_blend_mode();

        assert_eq!(
            recorder.commands(),
            &[
                DrawCommand::SetBlendMode(BlendFunction::Additive),
                DrawCommand::Begin(DrawMode::Triangles),
                DrawCommand::Vertex(vertex(1.0)),
                DrawCommand::End,
                DrawCommand::EndBlendMode,
            ]
        );
    }

    #[test]
    fn test_primitives_capture_state() {
        let mut recorder = CommandRecorder::new();
        recorder.enable_texture(TextureHandle(4));
        recorder.set_blend_mode(BlendFunction::Multiplied);
        recorder.push_matrix();
        recorder.begin(DrawMode::Quads);
        for i in 0..4 {
            recorder.vertex(vertex(i as f32));
        }
        recorder.end();
        recorder.pop_matrix();
        recorder.disable_texture();
        recorder.end_blend_mode();
        recorder.begin(DrawMode::Lines);
        recorder.vertex(vertex(0.0));
        recorder.vertex(vertex(1.0));
        recorder.end();

        let primitives = recorder.primitives();
        assert_eq!(primitives.len(), 2);
        assert_eq!(primitives[0].mode, DrawMode::Quads);
        assert_eq!(primitives[0].vertices.len(), 4);
        assert_eq!(primitives[0].texture, Some(TextureHandle(4)));
        assert_eq!(primitives[0].blend, Some(BlendFunction::Multiplied));
        assert_eq!(primitives[0].matrix_depth, 1);
        assert_eq!(primitives[1].texture, None);
        assert_eq!(primitives[1].blend, None);
        assert_eq!(primitives[1].matrix_depth, 0);
    }

    #[test]
    fn test_blend_changes_and_outlines() {
        let mut recorder = CommandRecorder::new();
        recorder.set_blend_mode(BlendFunction::Alpha);
        recorder.draw_triangle_lines([[0.0; 3], [1.0; 3], [2.0; 3]], [1.0, 0.0, 0.0, 1.0]);
        recorder.set_blend_mode(BlendFunction::Additive);

        assert_eq!(
            recorder.blend_changes(),
            vec![BlendFunction::Alpha, BlendFunction::Additive]
        );
        assert_eq!(recorder.triangle_outlines().len(), 1);

        recorder.clear_commands();
        assert!(recorder.commands().is_empty());
    }
}
