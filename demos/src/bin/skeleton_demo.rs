//! # Skeleton Demo
//!
//! Demonstrates:
//! - Building a skeleton with region, mesh and non-drawable attachments
//! - Posing bones per frame in place of an animation runtime
//! - Rendering through the batching backend and inspecting the batches
//! - Optional atlas page loading from a PNG
//!
//! ```bash
//! cargo run -p marionette-demos --bin skeleton_demo -- --frames 60 --wireframe
//! cargo run -p marionette-demos --bin skeleton_demo -- --mirror --texture page.png
//! ```

use std::error::Error;
use std::path::{Path, PathBuf};

use clap::Parser;
use glam::Vec3;
use marionette_core::{Atlas, AtlasPageDesc};
use marionette_demos::rig::{self, CapeShape};
use marionette_graphics::{BatchingBackend, CpuTexture, ImageTextureLoader};
use marionette_render::{MAX_VERTICES_PER_ATTACHMENT, RendererConfig, SkeletonRenderer};

/// Marionette skeleton demo arguments.
#[derive(Parser, Debug)]
#[command(
    name = "skeleton_demo",
    about = "Render a procedural skeleton through the batching backend",
    version
)]
struct Args {
    /// Number of frames to render.
    #[arg(long, default_value = "3")]
    frames: u32,

    /// Treat the atlas page as premultiplied alpha.
    #[arg(long)]
    pma: bool,

    /// Also draw the back face of region quads.
    #[arg(long)]
    double_faced: bool,

    /// Outline mesh triangles.
    #[arg(long)]
    wireframe: bool,

    /// Depth step between consecutive slots (0 keeps everything on one plane).
    #[arg(long, default_value = "0.0", allow_negative_numbers = true)]
    layer_spacing: f32,

    /// Depth the first slot steps back from.
    #[arg(long, default_value = "0.0", allow_negative_numbers = true)]
    layer_spacing_base: f32,

    /// Mirror the skeleton horizontally.
    #[arg(long)]
    mirror: bool,

    /// Scratch buffer capacity; larger attachments are skipped.
    #[arg(long, default_value_t = MAX_VERTICES_PER_ATTACHMENT)]
    max_vertices: usize,

    /// Cape mesh columns (rows are half as many).
    #[arg(long, default_value = "8", value_parser = clap::value_parser!(u16).range(1..=64))]
    cape_columns: u16,

    /// PNG to use as the atlas page.
    #[arg(long)]
    texture: Option<PathBuf>,
}

impl Args {
    fn renderer_config(&self) -> RendererConfig {
        RendererConfig::flat()
            .with_layer_spacing(self.layer_spacing_base, self.layer_spacing)
            .with_double_faced(self.double_faced)
            .with_wireframe(self.wireframe)
            .with_max_vertices(self.max_vertices)
    }

    fn cape_shape(&self) -> CapeShape {
        CapeShape {
            columns: self.cape_columns,
            rows: (self.cape_columns / 2).max(1),
            ..CapeShape::default()
        }
    }
}

fn load_atlas(
    texture: Option<&Path>,
    pma: bool,
    loader: &mut ImageTextureLoader,
) -> Result<Atlas, Box<dyn Error>> {
    let Some(path) = texture else {
        let white = loader.insert(CpuTexture::solid_color([255; 4]));
        return Ok(rig::placeholder_atlas(white, pma));
    };
    let file = path.file_name().ok_or("texture path has no file name")?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let page = AtlasPageDesc::new("page", file).with_pma(pma);
    Ok(Atlas::load(&[page], base_dir, loader)?)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    log::info!("Starting Marionette Skeleton Demo");
    marionette_core::init();
    marionette_graphics::init();
    marionette_render::init();

    let mut loader = ImageTextureLoader::new();
    let atlas = load_atlas(args.texture.as_deref(), args.pma, &mut loader)?;

    let mut skeleton = rig::build_skeleton(&atlas, args.cape_shape())?;
    if args.mirror {
        skeleton.scale_x = -1.0;
    }
    let glow = skeleton
        .find_slot("glow")
        .and_then(|index| skeleton.slot(index))
        .and_then(|slot| slot.attachment.clone());

    let mut renderer = SkeletonRenderer::new(args.renderer_config());
    let mut backend = BatchingBackend::new();
    log::info!("Renderer config: {:?}", renderer.config());

    for frame in 0..args.frames {
        rig::pose(&mut skeleton, frame);
        if let Some(glow) = &glow {
            rig::toggle_glow(&mut skeleton, glow, frame);
        }

        backend.begin_frame();
        let stats = renderer.draw_skeleton(&mut backend, &skeleton, Vec3::ZERO, args.pma);
        backend.finish_frame()?;

        log::info!(
            "Frame {}: {} drawn, {} skipped ({} oversized), {} triangles",
            frame,
            stats.drawn(),
            stats.skipped(),
            stats.skipped_oversized,
            stats.triangles
        );
        for batch in backend.batches() {
            log::debug!(
                "  batch: texture {:?}, {:?}, vertices {}..{}",
                batch.texture,
                batch.blend,
                batch.first_vertex,
                batch.first_vertex + batch.vertex_count
            );
        }
        log::info!(
            "  {} batches, {} vertices ({} bytes), {} line vertices",
            backend.batches().len(),
            backend.vertices().len(),
            backend.vertex_bytes().len(),
            backend.line_vertices().len()
        );
    }

    atlas.dispose(&mut loader);
    Ok(())
}
