//! Screen-space viewport mapping.

use crate::Vec3;

/// Render target size in pixels.
///
/// Maps normalized device coordinates to pixel coordinates with the origin in
/// the top-left corner and y pointing down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Creates a viewport.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height.
    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// NDC to pixels: `((x + 1) * w / 2, (1 - y) * h / 2, z)`.
    ///
    /// Depth passes through unchanged.
    ///
    /// ```rust
    /// use prism_math::{Vec3, Viewport};
    ///
    /// let vp = Viewport::new(800, 600);
    /// assert_eq!(vp.ndc_to_screen(Vec3::new(-1.0, 1.0, 0.5)), Vec3::new(0.0, 0.0, 0.5));
    /// ```
    pub fn ndc_to_screen(&self, ndc: Vec3) -> Vec3 {
        let w = self.width as f32;
        let h = self.height as f32;
        Vec3::new((ndc.x + 1.0) * w * 0.5, (1.0 - ndc.y) * h * 0.5, ndc.z)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800, 600)
    }
}
