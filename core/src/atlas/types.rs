use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{SkeletonError, TextureLoadError};

use super::loader::TextureLoader;

/// Opaque handle to a texture owned by a [`TextureLoader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

impl TextureHandle {
    /// Invalid/null texture handle.
    pub const INVALID: TextureHandle = TextureHandle(0);

    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

/// Description of an atlas page before its texture is loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct AtlasPageDesc {
    /// Page name as written in the atlas file.
    pub name: String,
    /// Image file, relative to the atlas directory.
    pub file: PathBuf,
    /// Whether the image stores premultiplied alpha.
    pub pma: bool,
}

impl AtlasPageDesc {
    pub fn new(name: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
            pma: false,
        }
    }

    #[must_use]
    pub fn with_pma(mut self, pma: bool) -> Self {
        self.pma = pma;
        self
    }
}

/// An atlas page whose texture has been loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct AtlasPage {
    pub name: String,
    pub texture: TextureHandle,
    pub width: u32,
    pub height: u32,
    /// Whether the texture's color channels are premultiplied by alpha.
    pub pma: bool,
}

/// A sub-rectangle of an atlas page.
///
/// UVs are normalized to the page. When `rotate` is set the image was packed
/// rotated 90 degrees and [`region_uvs`](Self::region_uvs) compensates.
#[derive(Debug, Clone, PartialEq)]
pub struct AtlasRegion {
    pub name: String,
    pub page: Arc<AtlasPage>,
    pub u: f32,
    pub v: f32,
    pub u2: f32,
    pub v2: f32,
    pub rotate: bool,
}

impl AtlasRegion {
    /// Texture of the page this region lives on.
    pub fn texture(&self) -> TextureHandle {
        self.page.texture
    }

    /// UVs for the four corners of a region quad, in the corner order
    /// bottom-left, upper-left, upper-right, bottom-right.
    pub fn region_uvs(&self) -> [f32; 8] {
        let (u, v, u2, v2) = (self.u, self.v, self.u2, self.v2);
        if self.rotate {
            [u2, v, u2, v2, u, v2, u, v]
        } else {
            [u, v2, u, v, u2, v, u2, v2]
        }
    }
}

/// A set of loaded atlas pages.
#[derive(Debug, Clone, Default)]
pub struct Atlas {
    pages: Vec<Arc<AtlasPage>>,
}

impl Atlas {
    /// Load every page texture through `loader`.
    ///
    /// The loader is called exactly once per page, in page order.
    pub fn load(
        pages: &[AtlasPageDesc],
        base_dir: &Path,
        loader: &mut dyn TextureLoader,
    ) -> Result<Self, TextureLoadError> {
        let mut loaded = Vec::with_capacity(pages.len());
        for desc in pages {
            let path = base_dir.join(&desc.file);
            let info = loader.load(desc, &path)?;
            log::debug!(
                "Loaded atlas page '{}' from {:?} ({}x{}, pma: {})",
                desc.name,
                path,
                info.width,
                info.height,
                desc.pma
            );
            loaded.push(Arc::new(AtlasPage {
                name: desc.name.clone(),
                texture: info.handle,
                width: info.width,
                height: info.height,
                pma: desc.pma,
            }));
        }
        Ok(Self { pages: loaded })
    }

    /// Build an atlas from already loaded pages.
    pub fn from_pages(pages: Vec<AtlasPage>) -> Self {
        Self {
            pages: pages.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn pages(&self) -> &[Arc<AtlasPage>] {
        &self.pages
    }

    pub fn page(&self, index: usize) -> Option<&Arc<AtlasPage>> {
        self.pages.get(index)
    }

    /// Create a region on page `page_index` covering `[u, u2] x [v, v2]`.
    pub fn create_region(
        &self,
        name: impl Into<String>,
        page_index: usize,
        uv: [f32; 4],
        rotate: bool,
    ) -> Result<AtlasRegion, SkeletonError> {
        let page = self
            .pages
            .get(page_index)
            .ok_or(SkeletonError::PageOutOfRange {
                index: page_index,
                page_count: self.pages.len(),
            })?;
        Ok(AtlasRegion {
            name: name.into(),
            page: Arc::clone(page),
            u: uv[0],
            v: uv[1],
            u2: uv[2],
            v2: uv[3],
            rotate,
        })
    }

    /// Release every page texture through `loader`.
    pub fn dispose(self, loader: &mut dyn TextureLoader) {
        for page in self.pages {
            loader.unload(page.texture);
        }
    }
}
