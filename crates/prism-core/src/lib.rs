//! # prism-core
//!
//! Core types shared by the prism rendering demo crates.
//!
//! - [`Error`], [`Result`] - Failure modes of the transform kernel
//! - [`Colour`] - Linear RGBA colour with unclamped arithmetic
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. The other prism crates build on it:
//!
//! ```text
//! prism-core (this crate)
//!    ^
//!    |
//!    +-- prism-math (vectors, matrices, quaternions, camera)
//!    +-- prism-cli (command-line driver)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization for [`Colour`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod colour;
pub mod error;

pub use colour::Colour;
pub use error::{Error, Result};

/// Prelude module for convenient imports.
///
/// ```
/// use prism_core::prelude::*;
///
/// let c = Colour::WHITE;
/// let r: Result<Colour> = Ok(c);
/// assert!(r.is_ok());
/// ```
pub mod prelude {
    pub use crate::colour::Colour;
    pub use crate::error::{Error, Result};
}
