//! Fixed-capacity scratch storage for one attachment at a time.
//!
//! Allocated once per renderer. Contents are only meaningful between filling
//! them for an attachment and submitting that attachment.

use marionette_core::{Color, skeleton::REGION_WORLD_VERTICES};

/// Default scratch capacity.
pub const MAX_VERTICES_PER_ATTACHMENT: usize = 2048;

/// Smallest capacity a renderer accepts: one region quad always fits.
pub const MIN_VERTICES_PER_ATTACHMENT: usize = REGION_WORLD_VERTICES;

/// A vertex assembled for submission: 2D position, UV and tint.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
    pub u: f32,
    pub v: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Vertex {
    pub fn color(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[derive(Debug)]
pub struct ScratchBuffer {
    world: Box<[f32]>,
    vertices: Vec<Vertex>,
}

impl ScratchBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            world: vec![0.0; capacity].into_boxed_slice(),
            vertices: Vec::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.world.len()
    }

    /// Whether an attachment with `world_floats` positions and
    /// `vertex_count` emitted vertices fits.
    pub fn fits(&self, world_floats: usize, vertex_count: usize) -> bool {
        world_floats <= self.capacity() && vertex_count <= self.capacity()
    }

    /// World-position storage for the next attachment, `len` floats long.
    ///
    /// # Panics
    ///
    /// Panics if `len` exceeds the capacity. Check [`fits`](Self::fits) first.
    pub fn world_mut(&mut self, len: usize) -> &mut [f32] {
        &mut self.world[..len]
    }

    /// Replace the vertices with one vertex per entry of `indices`, taking
    /// position `index * 2` from the world storage and UV `index * 2` from
    /// `uvs`.
    pub fn emit(&mut self, indices: impl IntoIterator<Item = usize>, uvs: &[f32], tint: Color) {
        self.vertices.clear();
        for index in indices {
            let at = index * 2;
            debug_assert!(self.vertices.len() < self.capacity());
            self.vertices.push(Vertex {
                x: self.world[at],
                y: self.world[at + 1],
                u: uvs[at],
                v: uvs[at + 1],
                r: tint.r,
                g: tint.g,
                b: tint.b,
                a: tint.a,
            });
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_reads_pairs() {
        let mut scratch = ScratchBuffer::new(8);
        scratch
            .world_mut(4)
            .copy_from_slice(&[1.0, 2.0, 3.0, 4.0]);
        let uvs = [0.0, 0.5, 1.0, 0.25];
        let tint = Color::new(0.5, 0.5, 0.5, 1.0);

        scratch.emit([1, 0, 1], &uvs, tint);

        let vertices = scratch.vertices();
        assert_eq!(vertices.len(), 3);
        assert_eq!((vertices[0].x, vertices[0].y), (3.0, 4.0));
        assert_eq!((vertices[0].u, vertices[0].v), (1.0, 0.25));
        assert_eq!((vertices[1].x, vertices[1].y), (1.0, 2.0));
        assert_eq!(vertices[2].color(), [0.5, 0.5, 0.5, 1.0]);
    }

    #[test]
    fn test_emit_replaces_previous_attachment() {
        let mut scratch = ScratchBuffer::new(8);
        scratch.world_mut(2).copy_from_slice(&[0.0, 0.0]);
        scratch.emit([0, 0, 0, 0], &[0.0, 0.0], Color::WHITE);
        scratch.emit([0], &[0.0, 0.0], Color::WHITE);
        assert_eq!(scratch.vertices().len(), 1);
    }

    #[test]
    fn test_fits() {
        let scratch = ScratchBuffer::new(MAX_VERTICES_PER_ATTACHMENT);
        assert!(scratch.fits(2048, 2048));
        assert!(!scratch.fits(2050, 3));
        assert!(!scratch.fits(8, 2049));
    }
}
