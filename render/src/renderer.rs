//! Skeleton renderer.
//!
//! Walks a skeleton's draw order and submits every renderable attachment to
//! an [`ImmediateBackend`], one slot at a time:
//!
//! 1. The depth offset steps back by `layer_spacing` per slot (empty or not).
//! 2. The attachment's world positions are computed into the scratch buffer
//!    and expanded into tinted vertices.
//! 3. The blend function is reset, then set from the slot's blend mode.
//! 4. Region quads or mesh triangles are submitted with the page texture bound.
//! 5. The blend function is reset again.
//!
//! Attachments that cannot be drawn are skipped and counted in [`DrawStats`].

use glam::Vec3;
use marionette_core::{
    Attachment, Bone, Color, MeshAttachment, RegionAttachment, Skeleton, Slot,
    skeleton::REGION_WORLD_VERTICES,
};
use marionette_graphics::{DrawMode, ImmediateBackend, ImmediateVertex};

use crate::blend::resolve_blend;
use crate::config::RendererConfig;
use crate::scratch::{MIN_VERTICES_PER_ATTACHMENT, ScratchBuffer, Vertex};
use crate::tint::slot_tint;
use crate::winding::{REGION_CORNERS, Winding};

/// Wireframe color of a mesh's first triangle.
const FIRST_TRIANGLE_COLOR: Color = Color::RED;
/// Wireframe color of the remaining triangles.
const TRIANGLE_COLOR: Color = Color::GREEN;

/// Counters for one [`SkeletonRenderer::draw_skeleton`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawStats {
    /// Slots visited in draw order, including empty ones.
    pub slots: usize,
    pub regions: usize,
    pub meshes: usize,
    /// Mesh triangles submitted.
    pub triangles: usize,
    /// Attachments larger than the scratch buffer.
    pub skipped_oversized: usize,
    /// Bounding boxes, points and other non-drawable attachments.
    pub skipped_unsupported: usize,
    /// Attachments whose geometry or bone reference is inconsistent.
    pub skipped_malformed: usize,
}

impl DrawStats {
    /// Attachments that were submitted.
    pub fn drawn(&self) -> usize {
        self.regions + self.meshes
    }

    /// Attachments that were present but not submitted.
    pub fn skipped(&self) -> usize {
        self.skipped_oversized + self.skipped_unsupported + self.skipped_malformed
    }
}

/// Outcome of preparing one attachment.
enum Prepared {
    Region(Winding),
    Mesh,
    /// Mesh too large for the scratch buffer. Produces no backend calls at all.
    Oversized,
    Skipped,
}

/// Draws skeletons through an immediate-mode backend.
#[derive(Debug)]
pub struct SkeletonRenderer {
    config: RendererConfig,
    scratch: ScratchBuffer,
}

impl Default for SkeletonRenderer {
    fn default() -> Self {
        Self::new(RendererConfig::default())
    }
}

impl SkeletonRenderer {
    pub fn new(config: RendererConfig) -> Self {
        Self {
            scratch: ScratchBuffer::new(scratch_capacity(&config)),
            config,
        }
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Replace the configuration. The scratch buffer is reallocated only if
    /// its capacity changes.
    pub fn set_config(&mut self, config: RendererConfig) {
        let capacity = scratch_capacity(&config);
        if capacity != self.scratch.capacity() {
            log::debug!(
                "Resizing scratch buffer: {} -> {} vertices",
                self.scratch.capacity(),
                capacity
            );
            self.scratch = ScratchBuffer::new(capacity);
        }
        self.config = config;
    }

    /// Draw `skeleton` with its local origin at `origin`.
    ///
    /// Bone world transforms must already be up to date.
    /// `premultiplied_alpha` tells whether the page textures store
    /// premultiplied colors.
    pub fn draw_skeleton<B: ImmediateBackend + ?Sized>(
        &mut self,
        backend: &mut B,
        skeleton: &Skeleton,
        origin: Vec3,
        premultiplied_alpha: bool,
    ) -> DrawStats {
        let mut stats = DrawStats::default();
        let mut z_offset = self.config.layer_spacing_base;

        for slot in skeleton.draw_order() {
            stats.slots += 1;
            z_offset -= self.config.layer_spacing;

            let Some(attachment) = slot.attachment.as_ref() else {
                continue;
            };

            let tint = slot_tint(skeleton.color, slot.color, premultiplied_alpha);
            let prepared = match attachment {
                Attachment::Region(region) => {
                    self.prepare_region(skeleton, slot, region, tint, &mut stats)
                }
                Attachment::Mesh(mesh) => self.prepare_mesh(skeleton, slot, mesh, tint, &mut stats),
                other => {
                    log::trace!(
                        "Slot '{}': {} attachment '{}' is not drawable",
                        slot.name,
                        other.kind(),
                        other.name()
                    );
                    stats.skipped_unsupported += 1;
                    Prepared::Skipped
                }
            };

            match (prepared, attachment) {
                (Prepared::Region(winding), Attachment::Region(region)) => {
                    begin_blend(backend, slot, premultiplied_alpha);
                    self.submit_region(backend, region, winding, origin, z_offset);
                    stats.regions += 1;
                }
                (Prepared::Mesh, Attachment::Mesh(mesh)) => {
                    begin_blend(backend, slot, premultiplied_alpha);
                    stats.triangles += self.submit_mesh(backend, mesh, origin, z_offset);
                    stats.meshes += 1;
                }
                (Prepared::Oversized, _) => continue,
                _ => {}
            }
            backend.end_blend_mode();
        }

        log::trace!(
            "Skeleton drawn: {} slots, {} regions, {} meshes ({} triangles), {} skipped",
            stats.slots,
            stats.regions,
            stats.meshes,
            stats.triangles,
            stats.skipped()
        );
        stats
    }

    fn slot_bone<'a>(
        skeleton: &'a Skeleton,
        slot: &Slot,
        stats: &mut DrawStats,
    ) -> Option<&'a Bone> {
        let bone = skeleton.slot_bone(slot);
        if bone.is_none() {
            log::warn!(
                "Slot '{}' references missing bone {}; skipping",
                slot.name,
                slot.bone
            );
            stats.skipped_malformed += 1;
        }
        bone
    }

    fn prepare_region(
        &mut self,
        skeleton: &Skeleton,
        slot: &Slot,
        region: &RegionAttachment,
        tint: Color,
        stats: &mut DrawStats,
    ) -> Prepared {
        let Some(bone) = Self::slot_bone(skeleton, slot, stats) else {
            return Prepared::Skipped;
        };

        region.compute_world_vertices(bone, self.scratch.world_mut(REGION_WORLD_VERTICES));
        self.scratch.emit(REGION_CORNERS, &region.uvs, tint);
        Prepared::Region(Winding::from_scale(skeleton.scale_x, skeleton.scale_y))
    }

    fn prepare_mesh(
        &mut self,
        skeleton: &Skeleton,
        slot: &Slot,
        mesh: &MeshAttachment,
        tint: Color,
        stats: &mut DrawStats,
    ) -> Prepared {
        let world_length = mesh.world_vertices_length();
        if !self.scratch.fits(world_length, mesh.triangles.len()) {
            log::debug!(
                "Mesh '{}' ({} floats, {} indices) exceeds the {}-vertex scratch buffer; skipping",
                mesh.name,
                world_length,
                mesh.triangles.len(),
                self.scratch.capacity()
            );
            stats.skipped_oversized += 1;
            return Prepared::Oversized;
        }
        if let Some(reason) = mesh_defect(mesh) {
            log::warn!("Mesh '{}' is malformed ({}); skipping", mesh.name, reason);
            stats.skipped_malformed += 1;
            return Prepared::Skipped;
        }
        let Some(bone) = Self::slot_bone(skeleton, slot, stats) else {
            return Prepared::Skipped;
        };

        mesh.compute_world_vertices(bone, self.scratch.world_mut(world_length));
        self.scratch.emit(
            mesh.triangles.iter().map(|&index| usize::from(index)),
            &mesh.uvs,
            tint,
        );
        Prepared::Mesh
    }

    fn submit_region<B: ImmediateBackend + ?Sized>(
        &self,
        backend: &mut B,
        region: &RegionAttachment,
        winding: Winding,
        origin: Vec3,
        z_offset: f32,
    ) {
        let vertices = self.scratch.vertices();
        let order = winding.order();

        backend.enable_texture(region.region.texture());
        backend.push_matrix();

        backend.begin(DrawMode::Quads);
        for &i in order {
            backend.vertex(immediate(&vertices[i], origin, origin.z + z_offset));
        }
        backend.end();

        if self.config.double_faced {
            backend.begin(DrawMode::Quads);
            for &i in order.iter().rev() {
                backend.vertex(immediate(&vertices[i], origin, origin.z - z_offset));
            }
            backend.end();
        }

        backend.pop_matrix();
        backend.disable_texture();
    }

    /// Returns the number of triangles submitted.
    fn submit_mesh<B: ImmediateBackend + ?Sized>(
        &self,
        backend: &mut B,
        mesh: &MeshAttachment,
        origin: Vec3,
        z_offset: f32,
    ) -> usize {
        let z = origin.z + z_offset;
        let triangles = self.scratch.vertices().chunks_exact(3);
        let count = triangles.len();

        backend.enable_texture(mesh.region.texture());
        backend.push_matrix();
        for (i, triangle) in triangles.enumerate() {
            backend.begin(DrawMode::Triangles);
            for vertex in triangle.iter().rev() {
                backend.vertex(immediate(vertex, origin, z));
            }
            backend.end();

            if self.config.wireframe {
                let color = if i == 0 {
                    FIRST_TRIANGLE_COLOR
                } else {
                    TRIANGLE_COLOR
                };
                backend.draw_triangle_lines(
                    [
                        position(&triangle[0], origin, z),
                        position(&triangle[1], origin, z),
                        position(&triangle[2], origin, z),
                    ],
                    color.to_array(),
                );
            }
        }
        backend.pop_matrix();
        backend.disable_texture();
        count
    }
}

/// Scratch capacity for `config`, raised so a region quad always fits.
fn scratch_capacity(config: &RendererConfig) -> usize {
    config
        .max_vertices_per_attachment
        .max(MIN_VERTICES_PER_ATTACHMENT)
}

fn begin_blend<B: ImmediateBackend + ?Sized>(backend: &mut B, slot: &Slot, pma: bool) {
    backend.end_blend_mode();
    backend.set_blend_mode(resolve_blend(slot.blend_mode, pma));
}

/// Why a mesh cannot be expanded, if it cannot.
fn mesh_defect(mesh: &MeshAttachment) -> Option<String> {
    if mesh.vertices.len() % 2 != 0 {
        return Some(format!("odd vertex float count {}", mesh.vertices.len()));
    }
    if mesh.uvs.len() < mesh.vertices.len() {
        return Some(format!(
            "{} uv floats for {} vertex floats",
            mesh.uvs.len(),
            mesh.vertices.len()
        ));
    }
    if mesh.triangles.len() % 3 != 0 {
        return Some(format!(
            "triangle index count {} is not a multiple of 3",
            mesh.triangles.len()
        ));
    }
    let vertex_count = mesh.vertex_count();
    mesh.triangles
        .iter()
        .find(|&&index| usize::from(index) >= vertex_count)
        .map(|index| format!("triangle index {index} out of range (vertex count: {vertex_count})"))
}

fn position(vertex: &Vertex, origin: Vec3, z: f32) -> [f32; 3] {
    [origin.x + vertex.x, origin.y + vertex.y, z]
}

fn immediate(vertex: &Vertex, origin: Vec3, z: f32) -> ImmediateVertex {
    ImmediateVertex {
        position: position(vertex, origin, z),
        uv: [vertex.u, vertex.v],
        color: vertex.color(),
        normal: ImmediateVertex::FORWARD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_totals() {
        let stats = DrawStats {
            slots: 5,
            regions: 2,
            meshes: 1,
            triangles: 4,
            skipped_oversized: 1,
            skipped_unsupported: 2,
            skipped_malformed: 0,
        };
        assert_eq!(stats.drawn(), 3);
        assert_eq!(stats.skipped(), 3);
    }

    #[test]
    fn test_set_config_keeps_scratch_when_capacity_unchanged() {
        let mut renderer = SkeletonRenderer::default();
        renderer.set_config(RendererConfig::layered());
        assert_eq!(renderer.scratch.capacity(), 2048);
        assert_eq!(renderer.config().layer_spacing, 0.5);

        renderer.set_config(RendererConfig::layered().with_max_vertices(16));
        assert_eq!(renderer.scratch.capacity(), 16);
    }

    #[test]
    fn test_scratch_capacity_has_room_for_a_region() {
        let config = RendererConfig {
            max_vertices_per_attachment: 2,
            ..RendererConfig::flat()
        };
        let renderer = SkeletonRenderer::new(config);
        assert_eq!(renderer.scratch.capacity(), MIN_VERTICES_PER_ATTACHMENT);
    }
}
