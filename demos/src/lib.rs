//! # Marionette Demos
//!
//! Headless demos driving the Marionette renderer.
//!
//! ## Available Demos
//!
//! - `skeleton_demo` - Animates a procedural skeleton through the batching backend

pub mod rig;

/// Demos library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
