//! # Marionette Render
//!
//! Draws 2D skeletons through an immediate-mode backend.
//!
//! ## Example
//!
//! ```
//! use marionette_core::{Bone, Skeleton, Slot};
//! use marionette_graphics::CommandRecorder;
//! use marionette_render::{RendererConfig, SkeletonRenderer};
//!
//! let skeleton = Skeleton::new(vec![Bone::identity("root")], vec![Slot::new("body", 0)]).unwrap();
//! let mut renderer = SkeletonRenderer::new(RendererConfig::layered());
//! let mut backend = CommandRecorder::new();
//!
//! let stats = renderer.draw_skeleton(&mut backend, &skeleton, glam::Vec3::ZERO, false);
//! assert_eq!(stats.slots, 1);
//! assert!(backend.primitives().is_empty());
//! ```

pub mod blend;
pub mod config;
pub mod renderer;
pub mod scratch;
pub mod tint;
pub mod winding;

pub use blend::resolve_blend;
pub use config::RendererConfig;
pub use renderer::{DrawStats, SkeletonRenderer};
pub use scratch::{
    MAX_VERTICES_PER_ATTACHMENT, MIN_VERTICES_PER_ATTACHMENT, ScratchBuffer, Vertex,
};
pub use tint::slot_tint;
pub use winding::Winding;

/// Render library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the render subsystem.
pub fn init() {
    log::info!("Marionette Render v{} initialized", VERSION);
}
