//! # Marionette Core
//!
//! Data model for 2D skeletons rendered by Marionette: bones with world
//! transforms, slots, attachments, blend modes and texture atlases.

pub mod atlas;
pub mod blend;
pub mod color;
pub mod error;
pub mod skeleton;

pub use atlas::{
    Atlas, AtlasPage, AtlasPageDesc, AtlasRegion, TextureHandle, TextureInfo, TextureLoader,
};
pub use blend::BlendMode;
pub use color::Color;
pub use error::{SkeletonError, TextureLoadError};
pub use skeleton::{
    Attachment, Bone, BoundingBoxAttachment, MeshAttachment, PointAttachment, RegionAttachment,
    Skeleton, Slot,
};

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the core subsystem.
pub fn init() {
    log::info!("Marionette Core v{} initialized", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
