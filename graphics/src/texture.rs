//! Texture loading for atlas pages.

use std::collections::HashMap;
use std::path::Path;

use image::{DynamicImage, GenericImageView};
use marionette_core::{AtlasPageDesc, TextureHandle, TextureInfo, TextureLoadError, TextureLoader};

use crate::error::GraphicsError;

/// Decoded RGBA8 texture data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CpuTexture {
    pub width: u32,
    pub height: u32,
    /// Tightly packed RGBA8 rows.
    pub data: Vec<u8>,
}

impl CpuTexture {
    fn from_image(img: DynamicImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            data: img.to_rgba8().into_raw(),
        }
    }

    /// Create a solid color texture
    pub fn solid_color(color: [u8; 4]) -> Self {
        Self {
            width: 1,
            height: 1,
            data: color.to_vec(),
        }
    }

    /// Multiply every pixel's color channels by its alpha.
    pub fn premultiply_alpha(&mut self) {
        for pixel in self.data.chunks_exact_mut(4) {
            let alpha = u16::from(pixel[3]);
            for channel in &mut pixel[..3] {
                *channel = ((u16::from(*channel) * alpha + 127) / 255) as u8;
            }
        }
    }
}

/// A [`TextureLoader`] that decodes page images with the `image` crate and
/// keeps the pixels in memory.
#[derive(Debug)]
pub struct ImageTextureLoader {
    textures: HashMap<TextureHandle, CpuTexture>,
    next_handle: u32,
    premultiply: bool,
}

impl Default for ImageTextureLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageTextureLoader {
    pub fn new() -> Self {
        Self {
            textures: HashMap::new(),
            next_handle: 1,
            premultiply: false,
        }
    }

    /// Premultiply alpha on load for pages not already marked `pma`.
    #[must_use]
    pub fn with_premultiply(mut self, premultiply: bool) -> Self {
        self.premultiply = premultiply;
        self
    }

    /// Register already decoded pixels and return their handle.
    pub fn insert(&mut self, texture: CpuTexture) -> TextureHandle {
        let handle = TextureHandle(self.next_handle);
        self.next_handle += 1;
        log::trace!(
            "ImageTextureLoader: texture {:?} ({}x{})",
            handle,
            texture.width,
            texture.height
        );
        self.textures.insert(handle, texture);
        handle
    }

    /// Decode an encoded image (PNG, ...) from memory.
    pub fn load_from_memory(&mut self, bytes: &[u8]) -> Result<TextureInfo, GraphicsError> {
        let texture = CpuTexture::from_image(image::load_from_memory(bytes)?);
        Ok(self.register(texture))
    }

    /// Pixels of a loaded texture.
    pub fn texture(&self, handle: TextureHandle) -> Option<&CpuTexture> {
        self.textures.get(&handle)
    }

    /// Number of textures currently held.
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    fn register(&mut self, texture: CpuTexture) -> TextureInfo {
        let (width, height) = (texture.width, texture.height);
        TextureInfo {
            handle: self.insert(texture),
            width,
            height,
        }
    }
}

impl TextureLoader for ImageTextureLoader {
    fn load(&mut self, page: &AtlasPageDesc, path: &Path) -> Result<TextureInfo, TextureLoadError> {
        let img = image::open(path).map_err(|err| match err {
            image::ImageError::IoError(source) => TextureLoadError::Io {
                path: path.to_path_buf(),
                source,
            },
            other => TextureLoadError::Decode {
                path: path.to_path_buf(),
                source: Box::new(other),
            },
        })?;

        let mut texture = CpuTexture::from_image(img);
        if self.premultiply && !page.pma {
            texture.premultiply_alpha();
        }
        log::debug!(
            "Loaded page '{}' from {} ({}x{})",
            page.name,
            path.display(),
            texture.width,
            texture.height
        );
        Ok(self.register(texture))
    }

    fn unload(&mut self, handle: TextureHandle) {
        if self.textures.remove(&handle).is_none() {
            log::warn!("ImageTextureLoader: unload of unknown texture {:?}", handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{ImageFormat, Rgba, RgbaImage};

    use super::*;

    fn png_bytes(width: u32, height: u32, pixel: [u8; 4]) -> Vec<u8> {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, Rgba(pixel)));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_load_from_memory() {
        let mut loader = ImageTextureLoader::new();
        let info = loader.load_from_memory(&png_bytes(4, 2, [255, 0, 0, 255])).unwrap();

        assert_eq!(info.handle, TextureHandle(1));
        assert_eq!((info.width, info.height), (4, 2));
        let texture = loader.texture(info.handle).unwrap();
        assert_eq!(texture.data.len(), 4 * 2 * 4);
        assert_eq!(&texture.data[..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn test_handles_increase() {
        let mut loader = ImageTextureLoader::new();
        let a = loader.insert(CpuTexture::solid_color([0; 4]));
        let b = loader.insert(CpuTexture::solid_color([0; 4]));
        assert!(a.is_valid());
        assert!(b.0 > a.0);
        assert_eq!(loader.len(), 2);

        loader.unload(a);
        assert!(loader.texture(a).is_none());
        assert_eq!(loader.len(), 1);
    }

    #[test]
    fn test_garbage_bytes_fail() {
        let mut loader = ImageTextureLoader::new();
        let result = loader.load_from_memory(b"definitely not a png");
        assert!(matches!(result, Err(GraphicsError::ImageDecode(_))));
        assert!(loader.is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let mut loader = ImageTextureLoader::new();
        let page = AtlasPageDesc::new("page", "missing.png");
        let result = loader.load(&page, Path::new("/nonexistent/marionette/missing.png"));
        assert!(matches!(result, Err(TextureLoadError::Io { .. })));
    }

    #[test]
    fn test_load_file_with_premultiply() {
        let path = std::env::temp_dir().join("marionette_texture_premultiply.png");
        std::fs::write(&path, png_bytes(1, 1, [200, 100, 50, 128])).unwrap();

        let mut loader = ImageTextureLoader::new().with_premultiply(true);
        let info = loader.load(&AtlasPageDesc::new("page", "p.png"), &path).unwrap();
        assert_eq!(loader.texture(info.handle).unwrap().data, vec![100, 50, 25, 128]);

        // Pages already marked pma are left alone.
        let pma_page = AtlasPageDesc::new("page", "p.png").with_pma(true);
        let info = loader.load(&pma_page, &path).unwrap();
        assert_eq!(loader.texture(info.handle).unwrap().data, vec![200, 100, 50, 128]);

        let _ = std::fs::remove_file(&path);
    }
}
