//! Spherical coordinates.
//!
//! ```text
//! theta  polar angle measured from +Z, in [0, pi]
//! phi    azimuth in the XY plane measured from +X, in (-pi, pi]
//! r      radius, >= 0
//! ```
//!
//! Used for orbiting cameras and for sampling directions on the sphere.

use crate::Vec3;

/// A point in spherical coordinates `(theta, phi, r)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spherical {
    /// Polar angle from the +Z axis (radians).
    pub theta: f32,
    /// Azimuthal angle in the XY plane (radians).
    pub phi: f32,
    /// Radius.
    pub r: f32,
}

impl Spherical {
    /// Creates spherical coordinates from angles and radius.
    #[inline]
    pub const fn new(theta: f32, phi: f32, r: f32) -> Self {
        Self { theta, phi, r }
    }

    /// Point on the unit sphere.
    #[inline]
    pub const fn unit(theta: f32, phi: f32) -> Self {
        Self::new(theta, phi, 1.0)
    }

    /// Converts cartesian `(x, y, z)` to spherical.
    ///
    /// The origin is degenerate: `acos(0 / 0)` makes `theta` NaN. Not guarded.
    ///
    /// ```rust
    /// use prism_math::Spherical;
    ///
    /// let s = Spherical::from_cartesian(0.0, 0.0, 2.0);
    /// assert_eq!(s, Spherical::new(0.0, 0.0, 2.0));
    /// ```
    pub fn from_cartesian(x: f32, y: f32, z: f32) -> Self {
        let r = (x * x + y * y + z * z).sqrt();
        let theta = (z / r).acos();
        let phi = y.atan2(x);
        Self::new(theta, phi, r)
    }

    /// Converts a cartesian vector to spherical.
    #[inline]
    pub fn from_vec3(v: Vec3) -> Self {
        Self::from_cartesian(v.x, v.y, v.z)
    }

    /// Same as [`Spherical::to_cartesian`].
    #[inline]
    pub fn to_vec3(&self) -> Vec3 {
        self.to_cartesian()
    }

    /// Converts back to cartesian coordinates.
    pub fn to_cartesian(&self) -> Vec3 {
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        Vec3::new(
            self.r * sin_theta * cos_phi,
            self.r * sin_theta * sin_phi,
            self.r * cos_theta,
        )
    }
}

impl Default for Spherical {
    /// The +Z pole of the unit sphere.
    #[inline]
    fn default() -> Self {
        Self::unit(0.0, 0.0)
    }
}

impl From<Vec3> for Spherical {
    #[inline]
    fn from(v: Vec3) -> Self {
        Self::from_vec3(v)
    }
}

impl From<Spherical> for Vec3 {
    #[inline]
    fn from(s: Spherical) -> Vec3 {
        s.to_cartesian()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_default_radius() {
        let s = Spherical::default();
        assert_eq!(s.r, 1.0);
        assert_eq!(s.to_cartesian(), Vec3::Z);
    }

    #[test]
    fn test_axes() {
        let x = Spherical::from_cartesian(1.0, 0.0, 0.0);
        assert!((x.theta - FRAC_PI_2).abs() < 1e-6);
        assert_eq!(x.phi, 0.0);

        let y = Spherical::from_cartesian(0.0, 3.0, 0.0);
        assert!((y.phi - FRAC_PI_2).abs() < 1e-6);
        assert_eq!(y.r, 3.0);

        let down = Spherical::from_cartesian(0.0, 0.0, -1.0);
        assert!((down.theta - PI).abs() < 1e-6);
    }

    #[test]
    fn test_round_trip() {
        let points = [
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-4.0, 0.5, -0.25),
            Vec3::new(0.0, -7.0, 1e-3),
            Vec3::new(0.01, 0.02, -0.03),
        ];
        for p in points {
            let back = Spherical::from_vec3(p).to_cartesian();
            let tol = 1e-5 * p.length().max(1.0);
            assert!(back.abs_diff_eq(p, tol), "{p:?} -> {back:?}");
        }
    }

    #[test]
    fn test_origin_is_degenerate() {
        let s = Spherical::from_cartesian(0.0, 0.0, 0.0);
        assert_eq!(s.r, 0.0);
        assert!(s.theta.is_nan());
    }
}
