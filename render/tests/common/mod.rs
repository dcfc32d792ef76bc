//! Shared fixtures for renderer integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use marionette_core::{
    AtlasPage, AtlasRegion, Attachment, Bone, BoundingBoxAttachment, MeshAttachment,
    RegionAttachment, Skeleton, Slot, TextureHandle,
};
use marionette_graphics::{CommandRecorder, DrawCommand, RecordedPrimitive};

/// Texture every fixture region lives on.
pub const PAGE_TEXTURE: TextureHandle = TextureHandle(7);

pub fn page() -> Arc<AtlasPage> {
    Arc::new(AtlasPage {
        name: "fixture.png".to_string(),
        texture: PAGE_TEXTURE,
        width: 64,
        height: 64,
        pma: false,
    })
}

pub fn atlas_region() -> AtlasRegion {
    AtlasRegion {
        name: "fixture".to_string(),
        page: page(),
        u: 0.0,
        v: 0.0,
        u2: 1.0,
        v2: 1.0,
        rotate: false,
    }
}

/// The 10x10 square from the single-quad scenario: corners
/// (0,0), (10,0), (10,10), (0,10) with UVs (0,0), (1,0), (1,1), (0,1).
pub fn square_region(name: &str) -> RegionAttachment {
    RegionAttachment::new(
        name,
        atlas_region(),
        [0.0, 0.0, 10.0, 0.0, 10.0, 10.0, 0.0, 10.0],
        [0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0],
    )
}

/// A region centered on its bone, corners in bottom-left, upper-left,
/// upper-right, bottom-right order.
pub fn centered_region(name: &str) -> RegionAttachment {
    RegionAttachment::from_size(name, atlas_region(), 4.0, 2.0)
}

/// A mesh of `triangle_count` triangles over 3 shared vertices.
pub fn triangle_mesh(name: &str, triangle_count: usize) -> MeshAttachment {
    MeshAttachment::new(
        name,
        atlas_region(),
        vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0],
        vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0],
        [0u16, 1, 2].repeat(triangle_count),
    )
    .unwrap()
}

/// A 2-triangle quad mesh.
pub fn quad_mesh(name: &str) -> MeshAttachment {
    MeshAttachment::new(
        name,
        atlas_region(),
        vec![0.0, 0.0, 2.0, 0.0, 2.0, 2.0, 0.0, 2.0],
        vec![0.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0],
        vec![0, 1, 2, 2, 3, 0],
    )
    .unwrap()
}

/// A mesh with `float_count / 2` vertices and a single triangle.
pub fn wide_mesh(name: &str, float_count: usize) -> MeshAttachment {
    MeshAttachment::new(
        name,
        atlas_region(),
        vec![0.5; float_count],
        vec![0.5; float_count],
        vec![0, 1, 2],
    )
    .unwrap()
}

pub fn bounding_box(name: &str) -> Attachment {
    Attachment::BoundingBox(BoundingBoxAttachment {
        name: name.to_string(),
        vertices: vec![0.0, 0.0, 1.0, 0.0, 1.0, 1.0],
    })
}

/// A skeleton with one identity root bone and the given slots.
pub fn skeleton(slots: Vec<Slot>) -> Skeleton {
    Skeleton::new(vec![Bone::identity("root")], slots).unwrap()
}

pub fn positions(primitive: &RecordedPrimitive) -> Vec<[f32; 3]> {
    primitive.vertices.iter().map(|v| v.position).collect()
}

pub fn uvs(primitive: &RecordedPrimitive) -> Vec<[f32; 2]> {
    primitive.vertices.iter().map(|v| v.uv).collect()
}

/// Z component of the geometric normal of the first three vertices.
pub fn facing(primitive: &RecordedPrimitive) -> f32 {
    let [a, b, c] = [
        primitive.vertices[0].position,
        primitive.vertices[1].position,
        primitive.vertices[2].position,
    ];
    let (ux, uy) = (b[0] - a[0], b[1] - a[1]);
    let (vx, vy) = (c[0] - a[0], c[1] - a[1]);
    ux * vy - uy * vx
}

/// Number of recorded commands that are not blend state changes.
pub fn drawing_commands(recorder: &CommandRecorder) -> usize {
    recorder
        .commands()
        .iter()
        .filter(|command| {
            !matches!(
                command,
                DrawCommand::SetBlendMode(_) | DrawCommand::EndBlendMode
            )
        })
        .count()
}
