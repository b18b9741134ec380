//! Quaternions for rotations and rotation blending.
//!
//! [`Quat`] stores `(x, y, z, w)` with the vector part first and the scalar
//! part last, matching the shader-side float4 layout.
//!
//! # Conventions
//!
//! - `a * b` is the Hamilton product; as a rotation it applies `b` first.
//! - `q` and `-q` encode the same rotation.
//! - [`Quat::slerp`] and [`Quat::to_mat4`] expect near-unit magnitude.
//!   `slerp` normalizes its inputs, `to_mat4` does not.
//!
//! # Usage
//!
//! ```rust
//! use prism_math::{Quat, Vec3};
//! use std::f32::consts::FRAC_PI_2;
//!
//! let a = Quat::IDENTITY;
//! let b = Quat::from_axis_angle(Vec3::Z, FRAC_PI_2);
//! let half = a.slerp(b, 0.5);
//!
//! let v = half.rotate(Vec3::X);
//! let s = std::f32::consts::FRAC_1_SQRT_2;
//! assert!(v.abs_diff_eq(Vec3::new(s, s, 0.0), 1e-6));
//! ```

use std::ops::{Add, Mul, Neg, Sub};

use bytemuck::{Pod, Zeroable};

use crate::{Mat4, Vec3};

/// Above this dot product two quaternions are close enough that SLERP
/// degenerates to normalized linear interpolation.
pub const SLERP_DOT_THRESHOLD: f32 = 0.9995;

/// A quaternion `x i + y j + z k + w`.
///
/// The default value is the identity rotation `(0, 0, 0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Quat {
    /// i component
    pub x: f32,
    /// j component
    pub y: f32,
    /// k component
    pub z: f32,
    /// Scalar component
    pub w: f32,
}

impl Quat {
    /// Identity rotation.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a quaternion from raw components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Rotation of `angle` radians about `axis`.
    ///
    /// `axis` must be unit length.
    #[inline]
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let (s, c) = (angle * 0.5).sin_cos();
        Self::new(axis.x * s, axis.y * s, axis.z * s, c)
    }

    /// Components as `[x, y, z, w]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Vector part `(x, y, z)`.
    #[inline]
    pub const fn xyz(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// 4D dot product.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Magnitude.
    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Normalizes in place.
    ///
    /// A zero quaternion is left unchanged rather than filled with NaN.
    #[inline]
    pub fn normalize(&mut self) {
        let magnitude = self.length();
        if magnitude > 0.0 {
            *self = *self * (1.0 / magnitude);
        }
    }

    /// Returns a normalized copy. Zero stays zero.
    #[inline]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Conjugate `(-x, -y, -z, w)`; the inverse rotation for unit quaternions.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Spherical linear interpolation from `self` (t = 0) to `end` (t = 1).
    ///
    /// Both inputs are normalized first. When their dot product is negative
    /// `end` is negated so the blend follows the shorter arc; the result at
    /// `t = 1` may therefore be `-end`, which is the same rotation.
    ///
    /// Above [`SLERP_DOT_THRESHOLD`] the blend falls back to linear
    /// interpolation plus renormalization, avoiding a division by a
    /// vanishing `sin(theta)`.
    pub fn slerp(self, end: Self, t: f32) -> Self {
        let start = self.normalized();
        let mut end = end.normalized();

        let mut dot = start.dot(end);
        if dot < 0.0 {
            end = -end;
            dot = -dot;
        }

        if dot > SLERP_DOT_THRESHOLD {
            return (start + (end - start) * t).normalized();
        }

        let theta = dot.acos();
        let sin_theta = theta.sin();
        let s0 = ((1.0 - t) * theta).sin() / sin_theta;
        let s1 = (t * theta).sin() / sin_theta;
        start * s0 + end * s1
    }

    /// Rotation matrix for this quaternion.
    ///
    /// Uses the standard formula without normalizing; a non-unit quaternion
    /// produces a matrix that also scales and shears.
    #[rustfmt::skip]
    pub fn to_mat4(self) -> Mat4 {
        let Self { x, y, z, w } = self;
        let (xx, xy, xz) = (x * x, x * y, x * z);
        let (yy, yz, zz) = (y * y, y * z, z * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);

        Mat4::new(
            1.0 - 2.0 * (yy + zz), 2.0 * (xy - wz), 2.0 * (xz + wy), 0.0, //
            2.0 * (xy + wz), 1.0 - 2.0 * (xx + zz), 2.0 * (yz - wx), 0.0, //
            2.0 * (xz - wy), 2.0 * (yz + wx), 1.0 - 2.0 * (xx + yy), 0.0, //
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Rotates a vector by this (unit) quaternion.
    #[inline]
    pub fn rotate(self, v: Vec3) -> Vec3 {
        self.to_mat4().mul_vec(v)
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.to_array().iter().all(|c| c.is_finite())
    }

    /// Returns true if each component is within `eps` of `other`'s.
    #[inline]
    pub fn abs_diff_eq(self, other: Self, eps: f32) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| (a - b).abs() <= eps)
    }

    /// Converts to glam Quat.
    #[inline]
    pub fn to_glam(self) -> glam::Quat {
        glam::Quat::from_xyzw(self.x, self.y, self.z, self.w)
    }

    /// Creates from glam Quat.
    #[inline]
    pub fn from_glam(q: glam::Quat) -> Self {
        Self::new(q.x, q.y, q.z, q.w)
    }
}

impl Default for Quat {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Add for Quat {
    type Output = Self;

    #[inline]
    fn add(self, q: Self) -> Self {
        Self::new(self.x + q.x, self.y + q.y, self.z + q.z, self.w + q.w)
    }
}

impl Sub for Quat {
    type Output = Self;

    #[inline]
    fn sub(self, q: Self) -> Self {
        Self::new(self.x - q.x, self.y - q.y, self.z - q.z, self.w - q.w)
    }
}

// Hamilton product
impl Mul for Quat {
    type Output = Self;

    #[inline]
    fn mul(self, q: Self) -> Self {
        let Self { x, y, z, w } = self;
        Self::new(
            w * q.x + x * q.w + y * q.z - z * q.y,
            w * q.y - x * q.z + y * q.w + z * q.x,
            w * q.z + x * q.y - y * q.x + z * q.w,
            w * q.w - x * q.x - y * q.y - z * q.z,
        )
    }
}

impl Mul<f32> for Quat {
    type Output = Self;

    #[inline]
    fn mul(self, s: f32) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s, self.w * s)
    }
}

impl Neg for Quat {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl From<glam::Quat> for Quat {
    #[inline]
    fn from(q: glam::Quat) -> Self {
        Self::from_glam(q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_quat_default_is_identity() {
        assert_eq!(Quat::default(), Quat::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(Quat::IDENTITY.to_mat4(), Mat4::IDENTITY);
    }

    #[test]
    fn test_quat_hamilton_product() {
        let i = Quat::new(1.0, 0.0, 0.0, 0.0);
        let j = Quat::new(0.0, 1.0, 0.0, 0.0);
        let k = Quat::new(0.0, 0.0, 1.0, 0.0);
        assert_eq!(i * j, k);
        assert_eq!(j * i, -k);
        assert_eq!(i * i, Quat::new(0.0, 0.0, 0.0, -1.0));
    }

    #[test]
    fn test_quat_product_is_not_commutative() {
        let a = Quat::from_axis_angle(Vec3::X, 0.5);
        let b = Quat::from_axis_angle(Vec3::Y, 0.5);
        assert!(!(a * b).abs_diff_eq(b * a, 1e-4));
    }

    #[test]
    fn test_quat_normalize() {
        let mut q = Quat::new(0.0, 0.0, 3.0, 4.0);
        q.normalize();
        assert!((q.length() - 1.0).abs() < 1e-6);

        let mut zero = Quat::new(0.0, 0.0, 0.0, 0.0);
        zero.normalize();
        assert_eq!(zero, Quat::new(0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_quat_to_mat4_matches_rotation_factory() {
        let q = Quat::from_axis_angle(Vec3::Z, 0.8);
        assert!(q.to_mat4().abs_diff_eq(&Mat4::rotation_z(0.8), 1e-6));
        let q = Quat::from_axis_angle(Vec3::X, -1.1);
        assert!(q.to_mat4().abs_diff_eq(&Mat4::rotation_x(-1.1), 1e-6));
    }

    #[test]
    fn test_slerp_endpoints() {
        let a = Quat::from_axis_angle(Vec3::Y, 0.2);
        let b = Quat::from_axis_angle(Vec3::Y, 1.7);
        assert!(a.slerp(b, 0.0).abs_diff_eq(a, 1e-6));
        assert!(a.slerp(b, 1.0).abs_diff_eq(b, 1e-6));
    }

    #[test]
    fn test_slerp_midpoint_angle() {
        let a = Quat::IDENTITY;
        let b = Quat::from_axis_angle(Vec3::Z, FRAC_PI_2);
        let mid = a.slerp(b, 0.5);
        let expected = Quat::from_axis_angle(Vec3::Z, FRAC_PI_2 / 2.0);
        assert!(mid.abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn test_slerp_takes_short_arc() {
        let a = Quat::from_axis_angle(Vec3::Z, 0.1);
        let b = -Quat::from_axis_angle(Vec3::Z, 0.3);
        // b is the same rotation as +0.3 but on the far hemisphere
        let end = a.slerp(b, 1.0);
        assert!(end.abs_diff_eq(-b, 1e-6));
        let mid = a.slerp(b, 0.5);
        assert!(mid.abs_diff_eq(Quat::from_axis_angle(Vec3::Z, 0.2), 1e-5));
    }

    #[test]
    fn test_slerp_near_parallel_uses_lerp() {
        let a = Quat::from_axis_angle(Vec3::X, 0.0);
        let b = Quat::from_axis_angle(Vec3::X, 1e-3);
        let q = a.slerp(b, 0.5);
        assert!(q.is_finite());
        let lerped = (a + (b - a) * 0.5).normalized();
        assert!(q.abs_diff_eq(lerped, 1e-6));
        assert!(q.abs_diff_eq(Quat::from_axis_angle(Vec3::X, 5e-4), 1e-6));
    }

    #[test]
    fn test_slerp_identical_inputs() {
        let a = Quat::from_axis_angle(Vec3::Y, PI / 3.0);
        let q = a.slerp(a, 0.37);
        assert!(q.is_finite());
        assert!(q.abs_diff_eq(a, 1e-6));
    }

    #[test]
    fn test_quat_glam_agreement() {
        let a = Quat::from_axis_angle(Vec3::new(0.0, 0.6, 0.8), 1.2);
        let b = Quat::from_axis_angle(Vec3::X, -0.4);
        let ours = a * b;
        let theirs = Quat::from_glam(a.to_glam() * b.to_glam());
        assert!(ours.abs_diff_eq(theirs, 1e-6));

        let m = Mat4::from_glam(glam::Mat4::from_quat(a.to_glam()));
        assert!(a.to_mat4().abs_diff_eq(&m, 1e-6));
    }
}
