use crate::atlas::AtlasRegion;
use crate::error::SkeletonError;

use super::bone::Bone;

/// Number of floats in a region attachment's world vertices (4 corners).
pub const REGION_WORLD_VERTICES: usize = 8;

/// A drawable or non-drawable shape bound to a slot.
#[derive(Debug, Clone, PartialEq)]
pub enum Attachment {
    /// Textured quad.
    Region(RegionAttachment),
    /// Textured triangle mesh.
    Mesh(MeshAttachment),
    /// Polygon used for hit testing. Not rendered.
    BoundingBox(BoundingBoxAttachment),
    /// Single point with rotation. Not rendered.
    Point(PointAttachment),
}

impl Attachment {
    pub fn name(&self) -> &str {
        match self {
            Attachment::Region(region) => &region.name,
            Attachment::Mesh(mesh) => &mesh.name,
            Attachment::BoundingBox(bbox) => &bbox.name,
            Attachment::Point(point) => &point.name,
        }
    }

    /// Short lowercase name of the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Attachment::Region(_) => "region",
            Attachment::Mesh(_) => "mesh",
            Attachment::BoundingBox(_) => "bounding box",
            Attachment::Point(_) => "point",
        }
    }
}

impl From<RegionAttachment> for Attachment {
    fn from(region: RegionAttachment) -> Self {
        Attachment::Region(region)
    }
}

impl From<MeshAttachment> for Attachment {
    fn from(mesh: MeshAttachment) -> Self {
        Attachment::Mesh(mesh)
    }
}

/// A textured quad.
///
/// `offsets` and `uvs` hold the four corners as interleaved `x, y` pairs in
/// bone space, ordered bottom-left, upper-left, upper-right, bottom-right.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionAttachment {
    pub name: String,
    pub region: AtlasRegion,
    pub offsets: [f32; 8],
    pub uvs: [f32; 8],
}

impl RegionAttachment {
    pub fn new(name: impl Into<String>, region: AtlasRegion, offsets: [f32; 8], uvs: [f32; 8]) -> Self {
        Self {
            name: name.into(),
            region,
            offsets,
            uvs,
        }
    }

    /// A `width` x `height` quad centered on its bone, using the region's UVs.
    pub fn from_size(name: impl Into<String>, region: AtlasRegion, width: f32, height: f32) -> Self {
        let (hw, hh) = (width * 0.5, height * 0.5);
        let uvs = region.region_uvs();
        Self::new(name, region, [-hw, -hh, -hw, hh, hw, hh, hw, -hh], uvs)
    }

    /// Write the 4 world-space corners into `world[..8]`.
    ///
    /// # Panics
    ///
    /// Panics if `world` holds fewer than 8 floats.
    pub fn compute_world_vertices(&self, bone: &Bone, world: &mut [f32]) {
        bone.transform_points(&self.offsets, &mut world[..REGION_WORLD_VERTICES]);
    }
}

/// A textured triangle mesh with unweighted vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshAttachment {
    pub name: String,
    pub region: AtlasRegion,
    /// Bone-space positions as interleaved `x, y` pairs.
    pub vertices: Vec<f32>,
    /// Texture coordinates, one `u, v` pair per vertex.
    pub uvs: Vec<f32>,
    /// Vertex indices, three per triangle.
    pub triangles: Vec<u16>,
}

impl MeshAttachment {
    /// Build a mesh, checking that the arrays agree with each other.
    pub fn new(
        name: impl Into<String>,
        region: AtlasRegion,
        vertices: Vec<f32>,
        uvs: Vec<f32>,
        triangles: Vec<u16>,
    ) -> Result<Self, SkeletonError> {
        let name = name.into();
        let malformed = |reason: String| SkeletonError::MalformedAttachment {
            name: name.clone(),
            reason,
        };
        if vertices.len() % 2 != 0 {
            return Err(malformed(format!(
                "odd vertex float count {}",
                vertices.len()
            )));
        }
        if uvs.len() != vertices.len() {
            return Err(malformed(format!(
                "{} uv floats for {} vertex floats",
                uvs.len(),
                vertices.len()
            )));
        }
        if triangles.len() % 3 != 0 {
            return Err(malformed(format!(
                "triangle index count {} is not a multiple of 3",
                triangles.len()
            )));
        }
        let vertex_count = vertices.len() / 2;
        if let Some(&index) = triangles.iter().find(|&&i| usize::from(i) >= vertex_count) {
            return Err(malformed(format!(
                "triangle index {index} out of range (vertex count: {vertex_count})"
            )));
        }
        Ok(Self {
            name,
            region,
            vertices,
            uvs,
            triangles,
        })
    }

    /// Number of floats written by [`compute_world_vertices`](Self::compute_world_vertices).
    pub fn world_vertices_length(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 2
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Write the world-space vertices into `world[..world_vertices_length()]`.
    ///
    /// # Panics
    ///
    /// Panics if `world` is shorter than [`world_vertices_length`](Self::world_vertices_length).
    pub fn compute_world_vertices(&self, bone: &Bone, world: &mut [f32]) {
        bone.transform_points(&self.vertices, &mut world[..self.vertices.len()]);
    }
}

/// A polygon in bone space used for hit testing.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundingBoxAttachment {
    pub name: String,
    pub vertices: Vec<f32>,
}

/// A point with a rotation, used to anchor effects.
#[derive(Debug, Clone, PartialEq)]
pub struct PointAttachment {
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
}
