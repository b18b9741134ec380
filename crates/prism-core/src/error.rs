//! Error types for prism math operations.
//!
//! The transform kernel is built from pure functions, so very few operations
//! can fail. The ones that can are the ones that would otherwise divide by an
//! exact zero and hand back a meaningless result:
//!
//! - Matrix inversion with a zero determinant
//! - Perspective divide of a homogeneous point with `w == 0`
//!
//! Everything else (normalizing a zero vector, spherical coordinates at the
//! origin) is silent numerical degeneracy and is documented on the method
//! instead of being reported here.
//!
//! # Usage
//!
//! ```rust
//! use prism_core::{Error, Result};
//!
//! fn reciprocal_det(det: f32) -> Result<f32> {
//!     if det == 0.0 {
//!         return Err(Error::singular_matrix(det));
//!     }
//!     Ok(1.0 / det)
//! }
//!
//! assert!(reciprocal_det(0.0).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - `prism_math::Mat4::invert`
//! - `prism_math::HomogeneousVector::perspective_divide`
//! - `prism_math::Camera::project`

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the transform kernel.
///
/// None of these are transient: they signal that a caller fed the kernel an
/// input with no finite answer. Nothing in the kernel retries.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// Matrix has an exactly-zero determinant and cannot be inverted.
    ///
    /// There is no tolerance band: a determinant of `1e-30` still inverts.
    /// Callers that need near-singular detection check
    /// `Mat4::determinant` themselves.
    #[error("matrix is singular and cannot be inverted (determinant = {determinant})")]
    SingularMatrix {
        /// Determinant computed from the first-row cofactor expansion
        determinant: f32,
    },

    /// Homogeneous point has `w == 0` and lies at infinity.
    ///
    /// Usually means a direction (not a point) reached the divide stage, or
    /// the projection matrix upstream is wrong.
    #[error("perspective divide with w = 0: point at infinity has no cartesian equivalent")]
    DegeneratePerspectiveDivide,
}

impl Error {
    /// Creates an [`Error::SingularMatrix`] error.
    #[inline]
    pub fn singular_matrix(determinant: f32) -> Self {
        Self::SingularMatrix { determinant }
    }

    /// Returns `true` if this is a matrix inversion failure.
    #[inline]
    pub fn is_singular(&self) -> bool {
        matches!(self, Self::SingularMatrix { .. })
    }

    /// Returns `true` if this is a perspective divide failure.
    #[inline]
    pub fn is_degenerate_divide(&self) -> bool {
        matches!(self, Self::DegeneratePerspectiveDivide)
    }
}
