//! Immediate-mode backend implementations.
//!
//! # Available Backends
//!
//! - [`CommandRecorder`]: records calls, for testing and diagnostics
//! - [`BatchingBackend`]: folds primitives into batched vertex buffers
//!
//! With the `wgpu-backend` feature, batched vertices and blend states convert
//! to their wgpu counterparts.

mod batching;
mod recorder;

#[cfg(feature = "wgpu-backend")]
pub mod wgpu_conversion;

pub use batching::{BatchingBackend, DrawBatch, FrameData, LineVertex, SkeletonVertex};
pub use recorder::{CommandRecorder, DrawCommand, RecordedPrimitive};
