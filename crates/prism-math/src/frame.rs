//! Orthonormal shading frames.
//!
//! A [`ShadingFrame`] is built from a single normal `w` and completes it
//! to a right-handed basis `(u, v, w)`. It converts directions between the
//! local frame, where the normal is +Z, and world space.

use crate::{Mat4, Vec3};

/// Above this `|w.x|` the world X axis is too close to the normal and the
/// world Y axis is used as the reference instead.
const REFERENCE_SWITCH: f32 = 0.9;

/// Right-handed orthonormal basis `(u, v, w)` around a normal `w`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShadingFrame {
    /// Tangent.
    pub u: Vec3,
    /// Bitangent.
    pub v: Vec3,
    /// Normal.
    pub w: Vec3,
}

impl ShadingFrame {
    /// Builds a frame around the normal `n`, which is normalized first.
    ///
    /// The reference axis is world Y when `|w.x| > 0.9`, world X otherwise,
    /// so it is never near-parallel to `w`. A zero normal yields NaN axes.
    ///
    /// ```rust
    /// use prism_math::{ShadingFrame, Vec3};
    ///
    /// let frame = ShadingFrame::from_normal(Vec3::Z);
    /// assert_eq!(frame.to_world(Vec3::Z), Vec3::Z);
    /// ```
    pub fn from_normal(n: Vec3) -> Self {
        let w = n.normalize();
        let reference = if w.x.abs() > REFERENCE_SWITCH {
            Vec3::Y
        } else {
            Vec3::X
        };
        let u = reference.cross(w).normalize();
        let v = w.cross(u);
        Self { u, v, w }
    }

    /// Local direction to world: `u * l.x + v * l.y + w * l.z`.
    #[inline]
    pub fn to_world(&self, local: Vec3) -> Vec3 {
        self.u * local.x + self.v * local.y + self.w * local.z
    }

    /// World direction to local: projections onto `u`, `v`, `w`.
    #[inline]
    pub fn to_local(&self, world: Vec3) -> Vec3 {
        Vec3::new(world.dot(self.u), world.dot(self.v), world.dot(self.w))
    }

    /// Local-to-world matrix placing the frame at `position`.
    ///
    /// The basis vectors become the first three columns. The normal `w` is
    /// the local Z column.
    pub fn to_mat4(&self, position: Vec3) -> Mat4 {
        Mat4::from_basis(self.u, self.v, self.w, position)
    }
}

impl From<Vec3> for ShadingFrame {
    #[inline]
    fn from(n: Vec3) -> Self {
        Self::from_normal(n)
    }
}
