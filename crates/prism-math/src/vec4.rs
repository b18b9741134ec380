//! 4D vectors and homogeneous coordinates.
//!
//! [`Vec4`] is the plain four-component vector used for clip-space math.
//! [`HomogeneousVector`] wraps one and adds the perspective divide that takes
//! a clip-space point to normalized device coordinates.
//!
//! # Homogeneous Convention
//!
//! ```text
//! w == 0  direction (point at infinity)
//! w != 0  point; (x/w, y/w, z/w) is its cartesian position
//! ```
//!
//! # Usage
//!
//! ```rust
//! use prism_math::HomogeneousVector;
//!
//! let mut clip = HomogeneousVector::new(2.0, 4.0, 6.0, 2.0);
//! clip.perspective_divide()?;
//! assert_eq!(clip.to_array(), [1.0, 2.0, 3.0, 1.0]);
//! # Ok::<(), prism_core::Error>(())
//! ```

use std::ops::{Add, Deref, DerefMut, Div, Index, IndexMut, Mul, Neg, Sub};

use bytemuck::{Pod, Zeroable};
use prism_core::{Error, Result};

use crate::Vec3;

/// A 4D vector.
///
/// Components are addressable by name (`.x` .. `.w`) or by index `[0]..[3]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec4 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
    /// W component
    pub w: f32,
}

impl Vec4 {
    /// Zero vector (0, 0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a new vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Extends a [`Vec3`] with the given `w`.
    #[inline]
    pub const fn from_vec3(v: Vec3, w: f32) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    /// Creates from an array.
    #[inline]
    pub const fn from_array(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Converts to an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Borrows the components as an ordered array.
    #[inline]
    pub fn as_array(&self) -> &[f32; 4] {
        bytemuck::cast_ref(self)
    }

    /// Drops `w` without dividing.
    #[inline]
    pub const fn xyz(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Dot product over all four components.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Euclidean length over all four components.
    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Divides all four components by the length.
    ///
    /// Zero length yields NaN components.
    #[inline]
    pub fn normalize(self) -> Self {
        self / self.length()
    }

    /// Linear interpolation between self and other.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }

    /// Returns true if all components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.as_array().iter().all(|c| c.is_finite())
    }
}

impl Index<usize> for Vec4 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        &self.as_array()[i]
    }
}

impl IndexMut<usize> for Vec4 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        let arr: &mut [f32; 4] = bytemuck::cast_mut(self);
        &mut arr[i]
    }
}

impl Add for Vec4 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        )
    }
}

impl Sub for Vec4 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.w - rhs.w,
        )
    }
}

impl Mul<f32> for Vec4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

// Unchecked: dividing by zero yields infinities.
impl Div<f32> for Vec4 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs, self.w / rhs)
    }
}

impl Neg for Vec4 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl From<[f32; 4]> for Vec4 {
    #[inline]
    fn from(a: [f32; 4]) -> Self {
        Self::from_array(a)
    }
}

impl From<Vec4> for [f32; 4] {
    #[inline]
    fn from(v: Vec4) -> [f32; 4] {
        v.to_array()
    }
}

/// A point or direction in homogeneous (clip) space.
///
/// Dereferences to [`Vec4`], so all vector operations are available. The only
/// addition is [`HomogeneousVector::perspective_divide`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[repr(transparent)]
pub struct HomogeneousVector(pub Vec4);

impl HomogeneousVector {
    /// Creates a new homogeneous vector.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self(Vec4::new(x, y, z, w))
    }

    /// A point: `(p, 1)`.
    #[inline]
    pub const fn point(p: Vec3) -> Self {
        Self(Vec4::from_vec3(p, 1.0))
    }

    /// A direction: `(d, 0)`.
    #[inline]
    pub const fn direction(d: Vec3) -> Self {
        Self(Vec4::from_vec3(d, 0.0))
    }

    /// Divides x, y and z by w and sets w to 1.
    ///
    /// Converts a clip-space point to normalized device coordinates.
    ///
    /// # Errors
    ///
    /// [`Error::DegeneratePerspectiveDivide`] when `w == 0`. The vector is
    /// left untouched in that case.
    pub fn perspective_divide(&mut self) -> Result<()> {
        let w = self.0.w;
        if w == 0.0 {
            return Err(Error::DegeneratePerspectiveDivide);
        }
        self.0 = Vec4::new(self.0.x / w, self.0.y / w, self.0.z / w, 1.0);
        Ok(())
    }

    /// Consuming form of [`HomogeneousVector::perspective_divide`] that
    /// returns the cartesian point.
    pub fn to_cartesian(mut self) -> Result<Vec3> {
        self.perspective_divide()?;
        Ok(self.0.xyz())
    }
}

impl Deref for HomogeneousVector {
    type Target = Vec4;

    #[inline]
    fn deref(&self) -> &Vec4 {
        &self.0
    }
}

impl DerefMut for HomogeneousVector {
    #[inline]
    fn deref_mut(&mut self) -> &mut Vec4 {
        &mut self.0
    }
}

// Uniform division of all four components, no w == 0 check.
impl Div<f32> for HomogeneousVector {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self {
        Self(self.0 / rhs)
    }
}

impl From<Vec4> for HomogeneousVector {
    #[inline]
    fn from(v: Vec4) -> Self {
        Self(v)
    }
}

impl From<HomogeneousVector> for Vec4 {
    #[inline]
    fn from(v: HomogeneousVector) -> Vec4 {
        v.0
    }
}
