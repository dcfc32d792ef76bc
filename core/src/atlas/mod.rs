//! Texture atlas pages and regions.
//!
//! An [`Atlas`] owns pages whose textures were produced by a
//! [`TextureLoader`]. Attachments reference an [`AtlasRegion`], which keeps
//! its page alive and exposes the page texture and premultiplied-alpha flag.

mod loader;
mod types;

pub use loader::{TextureInfo, TextureLoader};
pub use types::{Atlas, AtlasPage, AtlasPageDesc, AtlasRegion, TextureHandle};

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::*;
    use crate::error::{SkeletonError, TextureLoadError};

    #[derive(Default)]
    struct FakeLoader {
        loaded: Vec<PathBuf>,
        unloaded: Vec<TextureHandle>,
    }

    impl TextureLoader for FakeLoader {
        fn load(
            &mut self,
            _page: &AtlasPageDesc,
            path: &Path,
        ) -> Result<TextureInfo, TextureLoadError> {
            self.loaded.push(path.to_path_buf());
            Ok(TextureInfo {
                handle: TextureHandle(self.loaded.len() as u32),
                width: 64,
                height: 32,
            })
        }

        fn unload(&mut self, handle: TextureHandle) {
            self.unloaded.push(handle);
        }
    }

    fn page(name: &str, texture: u32) -> AtlasPage {
        AtlasPage {
            name: name.to_string(),
            texture: TextureHandle(texture),
            width: 256,
            height: 256,
            pma: false,
        }
    }

    #[test]
    fn test_load_calls_loader_once_per_page() {
        let mut loader = FakeLoader::default();
        let descs = [
            AtlasPageDesc::new("a", "a.png"),
            AtlasPageDesc::new("b", "b.png").with_pma(true),
        ];
        let atlas = Atlas::load(&descs, Path::new("assets"), &mut loader).unwrap();

        assert_eq!(
            loader.loaded,
            vec![PathBuf::from("assets/a.png"), PathBuf::from("assets/b.png")]
        );
        assert_eq!(atlas.pages().len(), 2);
        assert_eq!(atlas.pages()[1].texture, TextureHandle(2));
        assert!(atlas.pages()[1].pma);
        assert_eq!((atlas.pages()[0].width, atlas.pages()[0].height), (64, 32));

        atlas.dispose(&mut loader);
        assert_eq!(loader.unloaded, vec![TextureHandle(1), TextureHandle(2)]);
    }

    #[test]
    fn test_create_region() {
        let atlas = Atlas::from_pages(vec![page("main", 7)]);
        let region = atlas
            .create_region("head", 0, [0.0, 0.0, 0.5, 0.25], false)
            .unwrap();
        assert_eq!(region.texture(), TextureHandle(7));
        assert_eq!(
            region.region_uvs(),
            [0.0, 0.25, 0.0, 0.0, 0.5, 0.0, 0.5, 0.25]
        );
    }

    #[test]
    fn test_create_region_bad_page() {
        let atlas = Atlas::from_pages(vec![page("main", 1)]);
        let err = atlas
            .create_region("head", 3, [0.0, 0.0, 1.0, 1.0], false)
            .unwrap_err();
        assert_eq!(
            err,
            SkeletonError::PageOutOfRange {
                index: 3,
                page_count: 1
            }
        );
    }

    #[test]
    fn test_rotated_region_uvs() {
        let atlas = Atlas::from_pages(vec![page("main", 1)]);
        let region = atlas
            .create_region("arm", 0, [0.1, 0.2, 0.3, 0.4], true)
            .unwrap();
        assert_eq!(region.region_uvs(), [0.3, 0.2, 0.3, 0.4, 0.1, 0.4, 0.1, 0.2]);
    }

    #[test]
    fn test_invalid_handle() {
        assert!(!TextureHandle::INVALID.is_valid());
        assert!(TextureHandle(3).is_valid());
    }
}
