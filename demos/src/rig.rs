//! Procedural demo skeleton.
//!
//! A small character built in code: a torso region, a cape mesh hanging from
//! the root, an additive glow on a swinging arm and a hitbox that is never
//! drawn. [`pose`] stands in for the animation runtime by writing bone world
//! transforms for a given frame.

use marionette_core::{
    Atlas, AtlasPage, AtlasRegion, Attachment, BlendMode, Bone, BoundingBoxAttachment, Color,
    MeshAttachment, RegionAttachment, Skeleton, SkeletonError, Slot, TextureHandle,
};

pub const ROOT: usize = 0;
pub const TORSO: usize = 1;
pub const ARM: usize = 2;

/// Degrees the arm swings per frame.
const ARM_SWING_PER_FRAME: f32 = 6.0;

/// Shape of the generated cape mesh.
#[derive(Debug, Clone, Copy)]
pub struct CapeShape {
    pub columns: u16,
    pub rows: u16,
    pub width: f32,
    pub height: f32,
}

impl Default for CapeShape {
    fn default() -> Self {
        Self {
            columns: 8,
            rows: 4,
            width: 40.0,
            height: 60.0,
        }
    }
}

/// A one-page atlas over an already resident 1x1 `texture`.
pub fn placeholder_atlas(texture: TextureHandle, pma: bool) -> Atlas {
    Atlas::from_pages(vec![AtlasPage {
        name: "placeholder".to_string(),
        texture,
        width: 1,
        height: 1,
        pma,
    }])
}

/// A grid mesh of `columns` x `rows` cells hanging down from its bone.
///
/// Fails when the grid has more vertices than 16-bit triangle indices can
/// address.
pub fn cape_mesh(
    region: AtlasRegion,
    shape: CapeShape,
) -> Result<MeshAttachment, SkeletonError> {
    let columns = shape.columns.max(1);
    let rows = shape.rows.max(1);
    let stride = usize::from(columns) + 1;
    let vertex_count = stride * (usize::from(rows) + 1);
    if vertex_count > usize::from(u16::MAX) + 1 {
        return Err(SkeletonError::MalformedAttachment {
            name: "cape".to_string(),
            reason: format!("{vertex_count} vertices exceed 16-bit triangle indices"),
        });
    }

    let mut vertices = Vec::new();
    let mut uvs = Vec::new();
    for row in 0..=rows {
        for column in 0..=columns {
            let s = f32::from(column) / f32::from(columns);
            let t = f32::from(row) / f32::from(rows);
            vertices.push((s - 0.5) * shape.width);
            vertices.push(-t * shape.height);
            uvs.push(region.u + (region.u2 - region.u) * s);
            uvs.push(region.v + (region.v2 - region.v) * t);
        }
    }

    let mut triangles = Vec::new();
    for row in 0..usize::from(rows) {
        for column in 0..usize::from(columns) {
            let top_left = row * stride + column;
            let bottom_left = top_left + stride;
            for index in [
                top_left,
                bottom_left,
                top_left + 1,
                top_left + 1,
                bottom_left,
                bottom_left + 1,
            ] {
                // Below `vertex_count`, which fits in u16 indices.
                triangles.push(index as u16);
            }
        }
    }

    MeshAttachment::new("cape", region, vertices, uvs, triangles)
}

/// Build the demo skeleton on the first page of `atlas`.
pub fn build_skeleton(atlas: &Atlas, cape: CapeShape) -> Result<Skeleton, SkeletonError> {
    let body = atlas.create_region("body", 0, [0.0, 0.0, 0.5, 0.5], false)?;
    let cloth = atlas.create_region("cloth", 0, [0.5, 0.0, 1.0, 0.5], false)?;
    let glow = atlas.create_region("glow", 0, [0.0, 0.5, 0.25, 0.75], true)?;

    let bones = vec![
        Bone::identity("root"),
        Bone::identity("torso"),
        Bone::identity("arm"),
    ];
    let slots = vec![
        Slot::new("cape", ROOT).with_attachment(cape_mesh(cloth, cape)?),
        Slot::new("body", TORSO)
            .with_attachment(RegionAttachment::from_size("body", body, 32.0, 48.0)),
        Slot::new("glow", ARM)
            .with_blend_mode(BlendMode::Additive)
            .with_color(Color::new(1.0, 0.8, 0.4, 0.75))
            .with_attachment(RegionAttachment::from_size("glow", glow, 16.0, 16.0)),
        Slot::new("hitbox", TORSO).with_attachment(Attachment::BoundingBox(
            BoundingBoxAttachment {
                name: "hitbox".to_string(),
                vertices: vec![-16.0, -24.0, 16.0, -24.0, 16.0, 24.0, -16.0, 24.0],
            },
        )),
        Slot::new("shadow", ROOT),
    ];
    Skeleton::new(bones, slots)
}

/// Write bone world transforms for `frame`, honoring the skeleton's scale.
pub fn pose(skeleton: &mut Skeleton, frame: u32) {
    let (scale_x, scale_y) = (skeleton.scale_x, skeleton.scale_y);
    // A mirrored skeleton turns the other way.
    let turn = if scale_x * scale_y < 0.0 { -1.0 } else { 1.0 };
    let swing = (frame as f32 * ARM_SWING_PER_FRAME).to_radians().sin() * 45.0;

    let local = [
        (ROOT, 0.0, 0.0, 0.0),
        (TORSO, 0.0, 24.0, 0.0),
        (ARM, 20.0, 30.0, swing),
    ];
    for (index, x, y, rotation) in local {
        if let Some(bone) = skeleton.bone_mut(index) {
            bone.set_world_transform(x * scale_x, y * scale_y, rotation * turn, scale_x, scale_y);
        }
    }
}

/// Hide the glow on every other 30-frame stretch.
pub fn toggle_glow(skeleton: &mut Skeleton, glow: &Attachment, frame: u32) {
    let Some(slot) = skeleton.find_slot("glow") else {
        return;
    };
    let visible = (frame / 30) % 2 == 0;
    let attachment = visible.then(|| glow.clone());
    if let Err(err) = skeleton.set_attachment(slot, attachment) {
        log::warn!("Failed to toggle glow: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use marionette_graphics::{CpuTexture, ImageTextureLoader};

    use super::*;

    fn atlas() -> Atlas {
        placeholder_atlas(TextureHandle(1), false)
    }

    #[test]
    fn test_cape_mesh_grid() {
        let region = atlas().create_region("cloth", 0, [0.0, 0.0, 1.0, 1.0], false).unwrap();
        let mesh = cape_mesh(
            region,
            CapeShape {
                columns: 2,
                rows: 1,
                width: 2.0,
                height: 1.0,
            },
        )
        .unwrap();

        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.triangle_count(), 4);
        assert_eq!(&mesh.vertices[..6], &[-1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        assert_eq!(&mesh.uvs[6..8], &[0.0, 1.0]);
    }

    #[test]
    fn test_cape_mesh_too_large_for_u16_indices() {
        let region = atlas().create_region("cloth", 0, [0.0, 0.0, 1.0, 1.0], false).unwrap();
        let result = cape_mesh(
            region,
            CapeShape {
                columns: 400,
                rows: 400,
                ..CapeShape::default()
            },
        );
        assert!(matches!(
            result,
            Err(SkeletonError::MalformedAttachment { ref name, .. }) if name == "cape"
        ));
    }

    #[test]
    fn test_cape_mesh_largest_grid() {
        // 256 x 256 vertices: the last index is exactly u16::MAX.
        let region = atlas().create_region("cloth", 0, [0.0, 0.0, 1.0, 1.0], false).unwrap();
        let mesh = cape_mesh(
            region,
            CapeShape {
                columns: 255,
                rows: 255,
                ..CapeShape::default()
            },
        )
        .unwrap();
        assert_eq!(mesh.vertex_count(), 65536);
        assert_eq!(mesh.triangles.iter().max(), Some(&u16::MAX));
    }

    #[test]
    fn test_placeholder_page_is_disposed() {
        let mut loader = ImageTextureLoader::new();
        let white = loader.insert(CpuTexture::solid_color([255; 4]));
        let atlas = placeholder_atlas(white, true);
        assert_eq!(atlas.pages()[0].texture, white);
        assert!(atlas.pages()[0].pma);

        atlas.dispose(&mut loader);
        assert!(loader.is_empty());
    }

    #[test]
    fn test_build_skeleton() {
        let skeleton = build_skeleton(&atlas(), CapeShape::default()).unwrap();
        assert_eq!(skeleton.bones().len(), 3);
        assert_eq!(skeleton.slots().len(), 5);
        assert_eq!(skeleton.find_slot("glow"), Some(2));
    }

    #[test]
    fn test_pose_mirrors_bones() {
        let mut skeleton = build_skeleton(&atlas(), CapeShape::default())
            .unwrap()
            .with_scale(-1.0, 1.0);
        pose(&mut skeleton, 0);

        let torso = skeleton.bone(TORSO).unwrap();
        assert_eq!(torso.a, -1.0);
        assert_eq!(torso.world_y, 24.0);
        let arm = skeleton.bone(ARM).unwrap();
        assert_eq!(arm.world_x, -20.0);
    }

    #[test]
    fn test_toggle_glow() {
        let mut skeleton = build_skeleton(&atlas(), CapeShape::default()).unwrap();
        let glow = skeleton.slot(2).unwrap().attachment.clone().unwrap();

        toggle_glow(&mut skeleton, &glow, 30);
        assert!(skeleton.slot(2).unwrap().attachment.is_none());
        toggle_glow(&mut skeleton, &glow, 60);
        assert_eq!(skeleton.slot(2).unwrap().attachment.as_ref(), Some(&glow));
    }
}
