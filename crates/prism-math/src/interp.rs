//! Interpolation helpers.
//!
//! Scalar helpers ([`lerp`], [`inverse_lerp`], [`remap`], [`clamp`],
//! [`saturate`]) plus the [`Lerp`] trait, which gives every value type of this
//! crate the same `a + (b - a) * t` blend. Rotations interpolate with
//! [`Quat::slerp`](crate::Quat::slerp) instead.
//!
//! # Usage
//!
//! ```rust
//! use prism_math::{Lerp, Vec3, lerp, remap};
//!
//! assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
//! assert_eq!(Vec3::ZERO.lerp_to(Vec3::ONE, 0.5), Vec3::splat(0.5));
//! assert_eq!(remap(0.5, 0.0, 1.0, 0.0, 100.0), 50.0);
//! ```

use prism_core::Colour;

use crate::{Vec3, Vec4};

/// Linear interpolation between two values.
///
/// Returns `a` at `t = 0` and `b` at `t = 1`. Outside [0, 1] the result is
/// extrapolated.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Inverse of [`lerp`]: the `t` at which `value` sits between `a` and `b`.
///
/// A collapsed range (`a == b`) returns 0.
///
/// ```rust
/// use prism_math::inverse_lerp;
///
/// assert_eq!(inverse_lerp(0.0, 10.0, 5.0), 0.5);
/// assert_eq!(inverse_lerp(3.0, 3.0, 7.0), 0.0);
/// ```
#[inline]
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if (b - a).abs() < 1e-10 {
        0.0
    } else {
        (value - a) / (b - a)
    }
}

/// Maps `value` from `[in_min, in_max]` to `[out_min, out_max]`.
#[inline]
pub fn remap(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    lerp(out_min, out_max, inverse_lerp(in_min, in_max, value))
}

/// Clamps a value to `[min, max]`.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Clamps a value to `[0, 1]`.
#[inline]
pub fn saturate(value: f32) -> f32 {
    clamp(value, 0.0, 1.0)
}

/// Linear blend between two values of the same type.
///
/// Implementations compute `self + (other - self) * t` component-wise.
pub trait Lerp: Copy {
    /// Blends from `self` toward `other` by `t`.
    fn lerp_to(self, other: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp_to(self, other: Self, t: f32) -> Self {
        lerp(self, other, t)
    }
}

impl Lerp for Vec3 {
    #[inline]
    fn lerp_to(self, other: Self, t: f32) -> Self {
        self.lerp(other, t)
    }
}

impl Lerp for Vec4 {
    #[inline]
    fn lerp_to(self, other: Self, t: f32) -> Self {
        self.lerp(other, t)
    }
}

impl Lerp for Colour {
    #[inline]
    fn lerp_to(self, other: Self, t: f32) -> Self {
        self.lerp(other, t)
    }
}

/// Evenly spaced samples from `a` to `b`, both ends included.
///
/// `steps` is the number of intervals, so `steps + 1` values are produced.
/// Zero steps yields just `a`.
///
/// ```rust
/// use prism_math::interp::samples;
///
/// let xs: Vec<f32> = samples(0.0_f32, 1.0, 4).collect();
/// assert_eq!(xs, [0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn samples<T: Lerp>(a: T, b: T, steps: usize) -> impl Iterator<Item = T> {
    (0..=steps).map(move |i| {
        let t = if steps == 0 {
            0.0
        } else {
            i as f32 / steps as f32
        };
        a.lerp_to(b, t)
    })
}
