use std::path::Path;

use crate::error::TextureLoadError;

use super::types::{AtlasPageDesc, TextureHandle};

/// Result of loading a page texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureInfo {
    pub handle: TextureHandle,
    pub width: u32,
    pub height: u32,
}

/// Produces textures for atlas pages.
///
/// Called once per page when an [`Atlas`](super::Atlas) is loaded, never per
/// frame. The loader owns the textures; everything else only copies handles.
pub trait TextureLoader {
    /// Load the image at `path` for `page`.
    fn load(&mut self, page: &AtlasPageDesc, path: &Path) -> Result<TextureInfo, TextureLoadError>;

    /// Release a texture previously returned by [`load`](Self::load).
    fn unload(&mut self, handle: TextureHandle);
}
