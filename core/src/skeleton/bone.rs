/// A bone with its world transform.
///
/// The world transform is the 2x3 affine matrix `[a b world_x; c d world_y]`
/// computed by the animation runtime each frame. Attachments read it to place
/// their vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Bone {
    pub name: String,
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub world_x: f32,
    pub world_y: f32,
}

impl Bone {
    /// A bone at the origin with no rotation or scale.
    pub fn identity(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            world_x: 0.0,
            world_y: 0.0,
        }
    }

    /// A bone placed at `(x, y)`, rotated by `rotation` degrees and scaled.
    pub fn from_transform(
        name: impl Into<String>,
        x: f32,
        y: f32,
        rotation: f32,
        scale_x: f32,
        scale_y: f32,
    ) -> Self {
        let mut bone = Self::identity(name);
        bone.set_world_transform(x, y, rotation, scale_x, scale_y);
        bone
    }

    /// Overwrite the world transform from translation, rotation (degrees) and scale.
    pub fn set_world_transform(&mut self, x: f32, y: f32, rotation: f32, scale_x: f32, scale_y: f32) {
        let (sin, cos) = rotation.to_radians().sin_cos();
        self.a = cos * scale_x;
        self.b = -sin * scale_y;
        self.c = sin * scale_x;
        self.d = cos * scale_y;
        self.world_x = x;
        self.world_y = y;
    }

    /// Transform a point from bone space to world space.
    #[inline]
    pub fn transform_point(&self, x: f32, y: f32) -> [f32; 2] {
        [
            x * self.a + y * self.b + self.world_x,
            x * self.c + y * self.d + self.world_y,
        ]
    }

    /// Transform interleaved `x, y` pairs from `local` into `world`.
    ///
    /// Writes `local.len()` floats; `world` must be at least that long.
    pub(crate) fn transform_points(&self, local: &[f32], world: &mut [f32]) {
        for (src, dst) in local.chunks_exact(2).zip(world.chunks_exact_mut(2)) {
            let [x, y] = self.transform_point(src[0], src[1]);
            dst[0] = x;
            dst[1] = y;
        }
    }
}
