//! Perspective camera.
//!
//! [`Camera`] holds the per-frame camera state of the render loop and builds
//! the view and projection matrices from it. [`Camera::project`] runs the
//! whole point pipeline:
//!
//! ```text
//! world --view--> eye --projection^T--> clip --divide--> NDC --viewport--> pixels
//! ```

use prism_core::Result;

use crate::{HomogeneousVector, Mat4, Spherical, Vec3, Viewport};

/// A look-at camera with a symmetric perspective frustum.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Camera {
    /// Eye position in world space.
    pub position: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    /// Approximate up direction, must not be parallel to the view direction.
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Width over height.
    pub aspect: f32,
    /// Near clip distance, > 0.
    pub near: f32,
    /// Far clip distance, > near.
    pub far: f32,
}

impl Camera {
    /// Camera at `position` looking at `target`, default lens.
    pub fn looking_at(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            target,
            ..Self::default()
        }
    }

    /// Camera orbiting `target`, placed at `target + orbit`.
    ///
    /// ```rust
    /// use prism_math::{Camera, Spherical, Vec3};
    ///
    /// let cam = Camera::orbiting(Vec3::ZERO, Spherical::new(0.0, 0.0, 5.0));
    /// assert_eq!(cam.position, Vec3::new(0.0, 0.0, 5.0));
    /// ```
    pub fn orbiting(target: Vec3, orbit: Spherical) -> Self {
        Self::looking_at(target + orbit.to_cartesian(), target)
    }

    /// Matches the aspect ratio to a viewport.
    pub fn with_viewport(mut self, viewport: &Viewport) -> Self {
        self.aspect = viewport.aspect();
        self
    }

    /// World-to-view matrix.
    #[inline]
    pub fn view(&self) -> Mat4 {
        Mat4::look_at(self.position, self.target, self.up)
    }

    /// Projection matrix, transposed, see [`Mat4::perspective`].
    #[inline]
    pub fn projection(&self) -> Mat4 {
        Mat4::perspective(self.fov_y, self.aspect, self.near, self.far)
    }

    /// World-to-clip matrix for CPU-side use.
    pub fn clip_from_world(&self) -> Mat4 {
        self.projection().transpose() * self.view()
    }

    /// Projects a world-space point to pixel coordinates.
    ///
    /// The returned `z` is NDC depth: -1 on the near plane, +1 on the far
    /// plane.
    ///
    /// # Errors
    ///
    /// [`prism_core::Error::DegeneratePerspectiveDivide`] when the point lies
    /// in the camera plane (clip `w == 0`).
    pub fn project(&self, point: Vec3, viewport: &Viewport) -> Result<Vec3> {
        let clip = self.clip_from_world() * HomogeneousVector::point(point);
        let ndc = clip.to_cartesian()?;
        Ok(viewport.ndc_to_screen(ndc))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y: std::f32::consts::FRAC_PI_4,
            aspect: 800.0 / 600.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_core::Error;

    #[test]
    fn test_default_camera() {
        let cam = Camera::default();
        assert_eq!(cam.position, Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(cam.up, Vec3::Y);
        assert_eq!(cam.near, 0.1);
        assert_eq!(cam.far, 100.0);
    }

    #[test]
    fn test_target_projects_to_centre() {
        let cam = Camera::default();
        let s = cam.project(Vec3::ZERO, &Viewport::default()).unwrap();
        assert!((s.x - 400.0).abs() < 1e-3);
        assert!((s.y - 300.0).abs() < 1e-3);
        assert!(s.z > -1.0 && s.z < 1.0);
    }

    #[test]
    fn test_up_is_screen_up() {
        let cam = Camera::default();
        let vp = Viewport::default();
        let above = cam.project(Vec3::new(0.0, 1.0, 0.0), &vp).unwrap();
        let right = cam.project(Vec3::new(1.0, 0.0, 0.0), &vp).unwrap();
        assert!(above.y < 300.0);
        assert!(right.x > 400.0);
    }

    #[test]
    fn test_clip_planes() {
        let cam = Camera::default();
        let vp = Viewport::default();
        let near = cam.project(Vec3::new(0.0, 0.0, 4.9), &vp).unwrap();
        let far = cam.project(Vec3::new(0.0, 0.0, -95.0), &vp).unwrap();
        assert!((near.z + 1.0).abs() < 1e-3);
        assert!((far.z - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_point_in_camera_plane() {
        let cam = Camera::default();
        let err = cam
            .project(Vec3::new(1.0, 0.0, 5.0), &Viewport::default())
            .unwrap_err();
        assert_eq!(err, Error::DegeneratePerspectiveDivide);
    }

    #[test]
    fn test_orbiting_matches_looking_at() {
        let orbit = Spherical::from_cartesian(3.0, 4.0, 0.0);
        let cam = Camera::orbiting(Vec3::ONE, orbit);
        assert!(cam.position.abs_diff_eq(Vec3::new(4.0, 5.0, 1.0), 1e-5));
        assert_eq!(cam.target, Vec3::ONE);
    }

    #[test]
    fn test_with_viewport() {
        let cam = Camera::default().with_viewport(&Viewport::new(1920, 1080));
        assert!((cam.aspect - 16.0 / 9.0).abs() < 1e-6);
    }
}
