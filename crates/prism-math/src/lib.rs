//! # prism-math
//!
//! Spatial transform and rotation kernel for a real-time renderer.
//!
//! - [`Vec3`], [`Vec4`] - positions, directions and clip-space values
//! - [`HomogeneousVector`] - clip-space points with the perspective divide
//! - [`Mat4`] - translation, scale, rotation, look-at, projection, inversion
//! - [`Quat`] - rotation composition, SLERP, matrix conversion
//! - [`Spherical`] - polar/azimuth/radius conversion
//! - [`ShadingFrame`] - orthonormal basis around a surface normal
//! - [`Camera`], [`Viewport`] - per-frame camera state and the pixel mapping
//! - [`gpu`] - `#[repr(C)]` blocks ready for buffer upload
//!
//! # Design
//!
//! All matrix operations assume **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! so `a * b` applies `b` first. [`Mat4::perspective`] is emitted transposed;
//! [`Camera::clip_from_world`] and [`gpu::MatrixBlock`] transpose it back so
//! every derived matrix shares the convention.
//!
//! Every type is a small `Copy` value. Numerical degeneracy (normalizing a
//! zero vector, a zero quaternion, the spherical origin) is not checked and
//! yields non-finite values. The two checked failures, singular inversion and
//! a `w == 0` perspective divide, return [`Error`].
//!
//! # Usage
//!
//! ```rust
//! use prism_math::{Camera, Mat4, Quat, Vec3, Viewport};
//!
//! let spin = Quat::from_axis_angle(Vec3::Y, 0.5).to_mat4();
//! let world = Mat4::translation(Vec3::new(0.0, 0.0, -1.0)) * spin;
//!
//! let camera = Camera::default();
//! let pixel = camera.project(world.mul_point(Vec3::ZERO), &Viewport::default())?;
//! assert!(pixel.x > 399.0 && pixel.x < 401.0);
//! # Ok::<(), prism_math::Error>(())
//! ```
//!
//! # Dependencies
//!
//! - [`prism_core`] - error type and [`Colour`]
//! - [`bytemuck`] - `Pod` views for upload
//! - [`glam`] - conversions for interop and reference testing
//!
//! # Feature Flags
//!
//! - `serde` - `Serialize`/`Deserialize` for vectors, quaternions, camera
//!   and viewport

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod camera;
mod frame;
mod mat4;
mod quat;
mod spherical;
mod vec3;
mod vec4;
mod viewport;

pub mod gpu;
pub mod interp;

pub use camera::Camera;
pub use frame::ShadingFrame;
pub use interp::{Lerp, clamp, inverse_lerp, lerp, remap, saturate};
pub use mat4::Mat4;
pub use quat::{Quat, SLERP_DOT_THRESHOLD};
pub use spherical::Spherical;
pub use vec3::Vec3;
pub use vec4::{HomogeneousVector, Vec4};
pub use viewport::Viewport;

pub use prism_core::{Colour, Error, Result};
