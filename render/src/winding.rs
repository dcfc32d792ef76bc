//! Region quad corner selection.
//!
//! A region is expanded into 6 vertices, two triangles over its 4 corners.
//! Four of those are then picked as the quad to submit, in an order that
//! depends on whether the skeleton is mirrored.

/// Corner emitted at each of the 6 region vertices.
pub const REGION_CORNERS: [usize; 6] = [0, 1, 2, 2, 3, 0];

/// Quad vertex order used when the skeleton is mirrored on exactly one axis.
pub const NORMAL: [usize; 4] = [0, 1, 2, 4];

/// Quad vertex order used otherwise.
pub const REVERSE: [usize; 4] = [4, 2, 1, 0];

/// Which 4 of the 6 region vertices make up the quad, and in which order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    Normal,
    Reverse,
}

impl Winding {
    /// `Normal` when `scale_x * scale_y` is negative. A zero product counts as
    /// not mirrored.
    pub fn from_scale(scale_x: f32, scale_y: f32) -> Self {
        if scale_x * scale_y < 0.0 {
            Winding::Normal
        } else {
            Winding::Reverse
        }
    }

    pub const fn order(self) -> &'static [usize; 4] {
        match self {
            Winding::Normal => &NORMAL,
            Winding::Reverse => &REVERSE,
        }
    }
}
