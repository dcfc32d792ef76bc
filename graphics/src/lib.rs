//! # Marionette Graphics
//!
//! Immediate-mode drawing layer used by the Marionette skeleton renderer.
//!
//! ## Overview
//!
//! This crate provides:
//! - [`ImmediateBackend`] - begin/vertex/end drawing interface
//! - [`BlendFunction`] - concrete blend functions and their [`BlendState`]
//! - [`CommandRecorder`] - records calls, for tests and diagnostics
//! - [`BatchingBackend`] - folds primitives into uploadable vertex batches
//! - [`ImageTextureLoader`] - decodes atlas page images
//!
//! ## Example
//!
//! ```
//! use marionette_graphics::{BatchingBackend, DrawMode, ImmediateBackend, ImmediateVertex};
//!
//! let mut backend = BatchingBackend::new();
//! backend.begin_frame();
//! backend.begin(DrawMode::Triangles);
//! for position in [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]] {
//!     backend.vertex(ImmediateVertex {
//!         position,
//!         uv: [0.0, 0.0],
//!         color: [1.0; 4],
//!         normal: ImmediateVertex::FORWARD,
//!     });
//! }
//! backend.end();
//! assert_eq!(backend.vertices().len(), 3);
//! ```

pub mod backend;
pub mod blend;
pub mod error;
pub mod immediate;
pub mod texture;

pub use backend::{
    BatchingBackend, CommandRecorder, DrawBatch, DrawCommand, FrameData, LineVertex,
    RecordedPrimitive, SkeletonVertex,
};
pub use blend::{BlendComponent, BlendFactor, BlendFunction, BlendOperation, BlendState};
pub use error::GraphicsError;
pub use immediate::{DrawMode, ImmediateBackend, ImmediateVertex};
pub use texture::{CpuTexture, ImageTextureLoader};

/// Graphics library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the graphics subsystem.
pub fn init() {
    log::info!("Marionette Graphics v{} initialized", VERSION);
}
