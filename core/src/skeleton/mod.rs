//! Skeleton data consumed by renderers.
//!
//! These types mirror what a skeletal animation runtime exposes after it has
//! applied animations for the current frame:
//!
//! - [`Skeleton`] - bones, slots, draw order, global tint and scale
//! - [`Bone`] - world transform used to place attachment vertices
//! - [`Slot`] - tint, blend mode and active [`Attachment`]
//! - [`Attachment`] - region quads, meshes and non-renderable shapes

mod attachment;
mod bone;
mod slot;
mod types;

pub use attachment::{
    Attachment, BoundingBoxAttachment, MeshAttachment, PointAttachment, REGION_WORLD_VERTICES,
    RegionAttachment,
};
pub use bone::Bone;
pub use slot::Slot;
pub use types::Skeleton;
