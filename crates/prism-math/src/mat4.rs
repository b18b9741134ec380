//! 4x4 matrix type for spatial transforms, cameras and projections.
//!
//! [`Mat4`] carries world, view and projection transforms from the render
//! loop to the constant buffer.
//!
//! # Convention
//!
//! Matrices are stored in **row-major** order and use **column vectors**:
//!
//! ```text
//! | m0  m1  m2  m3  |   | x |
//! | m4  m5  m6  m7  | * | y |
//! | m8  m9  m10 m11 |   | z |
//! | m12 m13 m14 m15 |   | 1 |
//! ```
//!
//! Translation lives in the last column (`m3`, `m7`, `m11`), and `a * b`
//! applies `b` first. [`Mat4::perspective`] is the one exception: it is
//! emitted transposed, see its docs.
//!
//! # Storage
//!
//! A single `[f32; 16]` backs both views. Index with `m[i]` for the flat
//! layout or `m[(row, col)]` for the grid; [`Mat4::rows`] borrows the same
//! memory as `[[f32; 4]; 4]`.
//!
//! # Usage
//!
//! ```rust
//! use prism_math::{Mat4, Vec3};
//!
//! let model = Mat4::translation(Vec3::new(0.0, 1.0, 0.0)) * Mat4::scaling(Vec3::splat(2.0));
//! let p = model.mul_point(Vec3::new(1.0, 1.0, 1.0));
//! assert_eq!(p, Vec3::new(2.0, 3.0, 2.0));
//!
//! let inv = model.invert()?;
//! assert!(inv.mul_point(p).abs_diff_eq(Vec3::new(1.0, 1.0, 1.0), 1e-6));
//! # Ok::<(), prism_core::Error>(())
//! ```

use std::fmt;
use std::ops::{Index, IndexMut, Mul};

use bytemuck::{Pod, Zeroable};
use prism_core::{Error, Result};

use crate::{HomogeneousVector, Vec3, Vec4};

/// A 4x4 row-major matrix.
///
/// Any 16 floats form a valid `Mat4`. The default value is the identity.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Mat4 {
    /// Elements in row-major order.
    pub m: [f32; 16],
}

impl Mat4 {
    /// Zero matrix.
    pub const ZERO: Self = Self { m: [0.0; 16] };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        m: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    /// Creates a matrix from 16 values given row by row.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    #[rustfmt::skip]
    pub const fn new(
        m00: f32, m01: f32, m02: f32, m03: f32,
        m10: f32, m11: f32, m12: f32, m13: f32,
        m20: f32, m21: f32, m22: f32, m23: f32,
        m30: f32, m31: f32, m32: f32, m33: f32,
    ) -> Self {
        Self {
            m: [
                m00, m01, m02, m03, //
                m10, m11, m12, m13, //
                m20, m21, m22, m23, //
                m30, m31, m32, m33,
            ],
        }
    }

    /// Creates a matrix from a flat row-major array.
    #[inline]
    pub const fn from_array(m: [f32; 16]) -> Self {
        Self { m }
    }

    /// Creates a matrix from row arrays.
    #[inline]
    pub fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        Self {
            m: bytemuck::cast(rows),
        }
    }

    /// Pure translation.
    #[inline]
    pub fn translation(v: Vec3) -> Self {
        let mut mat = Self::IDENTITY;
        mat[(0, 3)] = v.x;
        mat[(1, 3)] = v.y;
        mat[(2, 3)] = v.z;
        mat
    }

    /// Pure (non-uniform) scale.
    #[inline]
    pub fn scaling(v: Vec3) -> Self {
        let mut mat = Self::IDENTITY;
        mat.m[0] = v.x;
        mat.m[5] = v.y;
        mat.m[10] = v.z;
        mat
    }

    /// Rotation about the X axis by `angle` radians.
    ///
    /// Right-handed: positive angles turn counter-clockwise when looking
    /// from +X toward the origin. Like the other rotation factories this
    /// builds a fresh matrix; compose rotations with `*`.
    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let mut rot = Self::IDENTITY;
        rot.m[5] = c;
        rot.m[6] = -s;
        rot.m[9] = s;
        rot.m[10] = c;
        rot
    }

    /// Rotation about the Y axis by `angle` radians.
    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let mut rot = Self::IDENTITY;
        rot.m[0] = c;
        rot.m[2] = s;
        rot.m[8] = -s;
        rot.m[10] = c;
        rot
    }

    /// Rotation about the Z axis by `angle` radians.
    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        let mut rot = Self::IDENTITY;
        rot.m[0] = c;
        rot.m[1] = -s;
        rot.m[4] = s;
        rot.m[5] = c;
        rot
    }

    /// World matrix from an orthonormal basis and a position.
    ///
    /// `u`, `n` and `v` become the first three columns, `p` the translation.
    #[rustfmt::skip]
    pub fn from_basis(u: Vec3, n: Vec3, v: Vec3, p: Vec3) -> Self {
        Self::new(
            u.x, n.x, v.x, p.x, //
            u.y, n.y, v.y, p.y, //
            u.z, n.z, v.z, p.z, //
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Right-handed view matrix for a camera at `from` looking at `to`.
    ///
    /// The rows are the camera basis `(right, true_up, forward)` where
    /// `forward` points from the target back to the eye, so the camera looks
    /// down `-forward` in view space. The translation column moves `from` to
    /// the origin.
    ///
    /// `up` must not be parallel to `from - to`, and `from != to`; both
    /// cases normalize a zero vector.
    ///
    /// ```rust
    /// use prism_math::{Mat4, Vec3};
    ///
    /// let view = Mat4::look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
    /// assert_eq!(view.mul_point(Vec3::ZERO), Vec3::new(0.0, 0.0, -5.0));
    /// ```
    #[rustfmt::skip]
    pub fn look_at(from: Vec3, to: Vec3, up: Vec3) -> Self {
        let forward = (from - to).normalize();
        let right = up.cross(forward).normalize();
        let true_up = forward.cross(right);

        Self::new(
            right.x, right.y, right.z, -from.dot(right), //
            true_up.x, true_up.y, true_up.z, -from.dot(true_up), //
            forward.x, forward.y, forward.z, -from.dot(forward), //
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Right-handed perspective projection, stored transposed.
    ///
    /// `fov_y` is the vertical field of view in radians. Every entry starts at
    /// zero, then:
    ///
    /// ```text
    /// m0  = 1 / (aspect * tan(fov_y / 2))
    /// m5  = 1 / tan(fov_y / 2)
    /// m10 = -(far + near) / (far - near)
    /// m11 = -1
    /// m14 = -2 * far * near / (far - near)
    /// ```
    ///
    /// The clip-w coefficient sits in the last *column*, so this is the
    /// transpose of the column-vector projection the rest of this type uses.
    /// It is the layout a shader reading constants column-major expects. For
    /// CPU-side projection, and for [`MatrixBlock`](crate::gpu::MatrixBlock)
    /// which stores every matrix in the column-vector layout, take
    /// `perspective(..).transpose()`. That maps `z = -near` to NDC -1 and
    /// `z = -far` to NDC +1.
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let tan_half_fovy = (fov_y / 2.0).tan();

        let mut result = Self::ZERO;
        result.m[0] = 1.0 / (aspect * tan_half_fovy);
        result.m[5] = 1.0 / tan_half_fovy;
        result.m[10] = -(far + near) / (far - near);
        result.m[11] = -1.0;
        result.m[14] = -(2.0 * far * near) / (far - near);
        result
    }

    /// Returns the transpose of this matrix.
    #[rustfmt::skip]
    pub fn transpose(&self) -> Self {
        let m = &self.m;
        Self::new(
            m[0], m[4], m[8], m[12], //
            m[1], m[5], m[9], m[13], //
            m[2], m[6], m[10], m[14], //
            m[3], m[7], m[11], m[15],
        )
    }

    /// Unscaled adjugate (transposed cofactor matrix), row-major.
    #[rustfmt::skip]
    fn adjugate(&self) -> [f32; 16] {
        let m = &self.m;
        let mut inv = [0.0f32; 16];

        inv[0] = m[5] * m[10] * m[15] - m[5] * m[11] * m[14] - m[9] * m[6] * m[15]
            + m[9] * m[7] * m[14] + m[13] * m[6] * m[11] - m[13] * m[7] * m[10];
        inv[4] = -m[4] * m[10] * m[15] + m[4] * m[11] * m[14] + m[8] * m[6] * m[15]
            - m[8] * m[7] * m[14] - m[12] * m[6] * m[11] + m[12] * m[7] * m[10];
        inv[8] = m[4] * m[9] * m[15] - m[4] * m[11] * m[13] - m[8] * m[5] * m[15]
            + m[8] * m[7] * m[13] + m[12] * m[5] * m[11] - m[12] * m[7] * m[9];
        inv[12] = -m[4] * m[9] * m[14] + m[4] * m[10] * m[13] + m[8] * m[5] * m[14]
            - m[8] * m[6] * m[13] - m[12] * m[5] * m[10] + m[12] * m[6] * m[9];

        inv[1] = -m[1] * m[10] * m[15] + m[1] * m[11] * m[14] + m[9] * m[2] * m[15]
            - m[9] * m[3] * m[14] - m[13] * m[2] * m[11] + m[13] * m[3] * m[10];
        inv[5] = m[0] * m[10] * m[15] - m[0] * m[11] * m[14] - m[8] * m[2] * m[15]
            + m[8] * m[3] * m[14] + m[12] * m[2] * m[11] - m[12] * m[3] * m[10];
        inv[9] = -m[0] * m[9] * m[15] + m[0] * m[11] * m[13] + m[8] * m[1] * m[15]
            - m[8] * m[3] * m[13] - m[12] * m[1] * m[11] + m[12] * m[3] * m[9];
        inv[13] = m[0] * m[9] * m[14] - m[0] * m[10] * m[13] - m[8] * m[1] * m[14]
            + m[8] * m[2] * m[13] + m[12] * m[1] * m[10] - m[12] * m[2] * m[9];

        inv[2] = m[1] * m[6] * m[15] - m[1] * m[7] * m[14] - m[5] * m[2] * m[15]
            + m[5] * m[3] * m[14] + m[13] * m[2] * m[7] - m[13] * m[3] * m[6];
        inv[6] = -m[0] * m[6] * m[15] + m[0] * m[7] * m[14] + m[4] * m[2] * m[15]
            - m[4] * m[3] * m[14] - m[12] * m[2] * m[7] + m[12] * m[3] * m[6];
        inv[10] = m[0] * m[5] * m[15] - m[0] * m[7] * m[13] - m[4] * m[1] * m[15]
            + m[4] * m[3] * m[13] + m[12] * m[1] * m[7] - m[12] * m[3] * m[5];
        inv[14] = -m[0] * m[5] * m[14] + m[0] * m[6] * m[13] + m[4] * m[1] * m[14]
            - m[4] * m[2] * m[13] - m[12] * m[1] * m[6] + m[12] * m[2] * m[5];

        inv[3] = -m[1] * m[6] * m[11] + m[1] * m[7] * m[10] + m[5] * m[2] * m[11]
            - m[5] * m[3] * m[10] - m[9] * m[2] * m[7] + m[9] * m[3] * m[6];
        inv[7] = m[0] * m[6] * m[11] - m[0] * m[7] * m[10] - m[4] * m[2] * m[11]
            + m[4] * m[3] * m[10] + m[8] * m[2] * m[7] - m[8] * m[3] * m[6];
        inv[11] = -m[0] * m[5] * m[11] + m[0] * m[7] * m[9] + m[4] * m[1] * m[11]
            - m[4] * m[3] * m[9] - m[8] * m[1] * m[7] + m[8] * m[3] * m[5];
        inv[15] = m[0] * m[5] * m[10] - m[0] * m[6] * m[9] - m[4] * m[1] * m[10]
            + m[4] * m[2] * m[9] + m[8] * m[1] * m[6] - m[8] * m[2] * m[5];

        inv
    }

    /// Computes the determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> f32 {
        let adj = self.adjugate();
        Self::first_row_determinant(&self.m, &adj)
    }

    #[inline]
    fn first_row_determinant(m: &[f32; 16], adj: &[f32; 16]) -> f32 {
        m[0] * adj[0] + m[1] * adj[4] + m[2] * adj[8] + m[3] * adj[12]
    }

    /// Computes the inverse by adjugate / determinant.
    ///
    /// # Errors
    ///
    /// [`Error::SingularMatrix`] when the determinant is exactly zero. There
    /// is no tolerance band, so nearly singular matrices invert to very
    /// large values.
    ///
    /// ```rust
    /// use prism_math::{Mat4, Vec3};
    ///
    /// let flat = Mat4::scaling(Vec3::new(1.0, 1.0, 0.0));
    /// assert!(flat.invert().is_err());
    /// ```
    pub fn invert(&self) -> Result<Self> {
        let mut inv = self.adjugate();
        let det = Self::first_row_determinant(&self.m, &inv);
        if det == 0.0 {
            return Err(Error::singular_matrix(det));
        }

        let inv_det = 1.0 / det;
        for v in inv.iter_mut() {
            *v *= inv_det;
        }
        Ok(Self { m: inv })
    }

    /// Multiplies two matrices: `self * other`.
    pub fn mul_mat(&self, other: &Self) -> Self {
        let a = &self.m;
        let b = &other.m;
        let mut result = Self::ZERO;
        for row in 0..4 {
            for col in 0..4 {
                result.m[row * 4 + col] = a[row * 4] * b[col]
                    + a[row * 4 + 1] * b[4 + col]
                    + a[row * 4 + 2] * b[8 + col]
                    + a[row * 4 + 3] * b[12 + col];
            }
        }
        result
    }

    /// Returns true when the last row is anything other than `(0, 0, 0, 1)`.
    ///
    /// A projective matrix whose last row happens to be `(0, 0, 0, 1)` is
    /// reported as affine.
    #[inline]
    pub fn is_projective(&self) -> bool {
        self.m[12] != 0.0 || self.m[13] != 0.0 || self.m[14] != 0.0 || self.m[15] != 1.0
    }

    /// Transforms a point (implicit `w = 1`).
    ///
    /// For projective matrices (see [`Mat4::is_projective`]) the result is
    /// divided by the computed `w`. A `w` of zero is not checked and yields
    /// non-finite components; use [`Mat4::mul_vec4`] and
    /// [`HomogeneousVector::perspective_divide`] when that matters.
    pub fn mul_point(&self, v: Vec3) -> Vec3 {
        let m = &self.m;
        let p = Vec3::new(
            v.x * m[0] + v.y * m[1] + v.z * m[2] + m[3],
            v.x * m[4] + v.y * m[5] + v.z * m[6] + m[7],
            v.x * m[8] + v.y * m[9] + v.z * m[10] + m[11],
        );
        if self.is_projective() {
            let w = m[12] * v.x + m[13] * v.y + m[14] * v.z + m[15];
            p * (1.0 / w)
        } else {
            p
        }
    }

    /// Transforms a direction by the upper-left 3x3 block only.
    ///
    /// Translation is ignored. Suitable for directions and, under rotation
    /// and uniform scale, normals.
    pub fn mul_vec(&self, v: Vec3) -> Vec3 {
        let m = &self.m;
        Vec3::new(
            v.x * m[0] + v.y * m[1] + v.z * m[2],
            v.x * m[4] + v.y * m[5] + v.z * m[6],
            v.x * m[8] + v.y * m[9] + v.z * m[10],
        )
    }

    /// Full 4x4 product with a column vector, no divide.
    pub fn mul_vec4(&self, v: Vec4) -> Vec4 {
        let m = &self.m;
        Vec4::new(
            m[0] * v.x + m[1] * v.y + m[2] * v.z + m[3] * v.w,
            m[4] * v.x + m[5] * v.y + m[6] * v.z + m[7] * v.w,
            m[8] * v.x + m[9] * v.y + m[10] * v.z + m[11] * v.w,
            m[12] * v.x + m[13] * v.y + m[14] * v.z + m[15] * v.w,
        )
    }

    /// Flat row-major view of the storage, ready for upload.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.m
    }

    /// Borrows the flat row-major storage.
    #[inline]
    pub fn as_array(&self) -> &[f32; 16] {
        &self.m
    }

    /// Flat row-major array.
    #[inline]
    pub const fn to_array(&self) -> [f32; 16] {
        self.m
    }

    /// Flat column-major array, the transpose of the storage order.
    #[inline]
    pub fn to_cols_array(&self) -> [f32; 16] {
        self.transpose().m
    }

    /// Element at `(row, col)`.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.m[row * 4 + col]
    }

    /// Grid view of the same storage, indexed `[row][col]`.
    #[inline]
    pub fn rows(&self) -> &[[f32; 4]; 4] {
        bytemuck::cast_ref(&self.m)
    }

    /// Mutable grid view of the same storage.
    #[inline]
    pub fn rows_mut(&mut self) -> &mut [[f32; 4]; 4] {
        bytemuck::cast_mut(&mut self.m)
    }

    /// Returns a row as Vec4.
    #[inline]
    pub fn row(&self, i: usize) -> Vec4 {
        Vec4::from_array(self.rows()[i])
    }

    /// Returns a column as Vec4.
    #[inline]
    pub fn col(&self, i: usize) -> Vec4 {
        Vec4::new(self.m[i], self.m[4 + i], self.m[8 + i], self.m[12 + i])
    }

    /// Returns true if all elements are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.m.iter().all(|x| x.is_finite())
    }

    /// Returns true if every element is within `eps` of `other`'s.
    pub fn abs_diff_eq(&self, other: &Self, eps: f32) -> bool {
        self.m
            .iter()
            .zip(other.m.iter())
            .all(|(a, b)| (a - b).abs() <= eps)
    }

    /// Converts to glam Mat4 (column-major).
    #[inline]
    pub fn to_glam(&self) -> glam::Mat4 {
        // glam is column-major, which is our transpose
        glam::Mat4::from_cols_array(&self.transpose().m)
    }

    /// Creates from glam Mat4.
    #[inline]
    pub fn from_glam(m: glam::Mat4) -> Self {
        Self::from_array(m.to_cols_array()).transpose()
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "[{:>10.5} {:>10.5} {:>10.5} {:>10.5}]",
                row[0], row[1], row[2], row[3]
            )?;
        }
        Ok(())
    }
}

// Mat4 * Mat4
impl Mul for Mat4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

// Mat4 * Vec4
impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    #[inline]
    fn mul(self, rhs: Vec4) -> Vec4 {
        self.mul_vec4(rhs)
    }
}

impl Mul<HomogeneousVector> for Mat4 {
    type Output = HomogeneousVector;

    #[inline]
    fn mul(self, rhs: HomogeneousVector) -> HomogeneousVector {
        HomogeneousVector(self.mul_vec4(rhs.0))
    }
}

// Flat access: m[i]
impl Index<usize> for Mat4 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.m[i]
    }
}

impl IndexMut<usize> for Mat4 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        &mut self.m[i]
    }
}

// Grid access: m[(row, col)]
impl Index<(usize, usize)> for Mat4 {
    type Output = f32;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        &self.rows()[row][col]
    }
}

impl IndexMut<(usize, usize)> for Mat4 {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        &mut self.rows_mut()[row][col]
    }
}

impl From<[f32; 16]> for Mat4 {
    #[inline]
    fn from(m: [f32; 16]) -> Self {
        Self::from_array(m)
    }
}

impl From<glam::Mat4> for Mat4 {
    #[inline]
    fn from(m: glam::Mat4) -> Self {
        Self::from_glam(m)
    }
}
