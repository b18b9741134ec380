//! Linear RGBA colour.
//!
//! [`Colour`] is a plain four-channel value used for vertex colours, clear
//! colours and light accumulation. All arithmetic is linear and per-channel:
//!
//! - No gamma encoding or decoding
//! - No clamping, so values above 1.0 are legal (HDR accumulation)
//! - Alpha takes part in every operation like the other channels
//!
//! # Usage
//!
//! ```
//! use prism_core::Colour;
//!
//! let light = Colour::new(1.0, 0.9, 0.8, 1.0);
//! let albedo = Colour::new(0.5, 0.5, 0.5, 1.0);
//!
//! // Tinting: channel-wise product
//! let lit = albedo * light;
//! assert_eq!(lit.r, 0.5);
//!
//! // Brightness scaling may exceed 1.0
//! let bright = lit * 4.0;
//! assert_eq!(bright.r, 2.0);
//! ```
//!
//! # Memory Layout
//!
//! `#[repr(C)]` and [`bytemuck::Pod`], laid out as `[R, G, B, A]`, so a
//! colour can sit directly in a vertex or constant buffer.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign};

use bytemuck::{Pod, Zeroable};

/// A linear RGBA colour with `f32` channels.
///
/// Conceptually each channel is in [0, 1] but nothing enforces it.
/// The default colour is opaque black.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Colour {
    /// Red channel value.
    pub r: f32,
    /// Green channel value.
    pub g: f32,
    /// Blue channel value.
    pub b: f32,
    /// Alpha channel value.
    pub a: f32,
}

impl Colour {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Opaque red.
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 1.0);
    /// Opaque green.
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0, 1.0);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0, 1.0);
    /// All channels zero, including alpha.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a new colour from four channels.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque colour (alpha = 1.0).
    #[inline]
    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Create from 8-bit channels, mapping 0..=255 to 0.0..=1.0.
    ///
    /// ```
    /// use prism_core::Colour;
    ///
    /// let c = Colour::from_u8(255, 0, 51, 255);
    /// assert_eq!(c, Colour::new(1.0, 0.0, 0.2, 1.0));
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// Get channel values as an array.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from an array.
    #[inline]
    pub const fn from_array(arr: [f32; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Apply a function to all channels including alpha.
    #[inline]
    pub fn map<F: Fn(f32) -> f32>(self, f: F) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b), f(self.a))
    }

    /// Linear interpolation between two colours.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self * (1.0 - t) + other * t
    }
}

impl Default for Colour {
    #[inline]
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGBA({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl From<[f32; 4]> for Colour {
    #[inline]
    fn from(arr: [f32; 4]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Colour> for [f32; 4] {
    #[inline]
    fn from(c: Colour) -> [f32; 4] {
        c.to_array()
    }
}

// ============================================================================
// Arithmetic Operations
// ============================================================================

impl Add for Colour {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(
            self.r + rhs.r,
            self.g + rhs.g,
            self.b + rhs.b,
            self.a + rhs.a,
        )
    }
}

impl AddAssign for Colour {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

// Colour * Colour: light filtering / tinting
impl Mul for Colour {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(
            self.r * rhs.r,
            self.g * rhs.g,
            self.b * rhs.b,
            self.a * rhs.a,
        )
    }
}

impl MulAssign for Colour {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<f32> for Colour {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Self::new(self.r * rhs, self.g * rhs, self.b * rhs, self.a * rhs)
    }
}

impl Mul<Colour> for f32 {
    type Output = Colour;

    #[inline]
    fn mul(self, rhs: Colour) -> Colour {
        rhs * self
    }
}

impl MulAssign<f32> for Colour {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl Div<f32> for Colour {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f32) -> Self::Output {
        Self::new(self.r / rhs, self.g / rhs, self.b / rhs, self.a / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_opaque_black() {
        assert_eq!(Colour::default(), Colour::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_from_u8() {
        let c = Colour::from_u8(0, 255, 0, 255);
        assert_eq!(c, Colour::GREEN);
        assert!((Colour::from_u8(128, 0, 0, 0).r - 0.502).abs() < 0.001);
    }

    #[test]
    fn test_add_accumulates_past_one() {
        let c = Colour::WHITE + Colour::WHITE;
        assert_eq!(c, Colour::new(2.0, 2.0, 2.0, 2.0));
    }

    #[test]
    fn test_channel_multiply() {
        let filter = Colour::new(1.0, 0.5, 0.0, 1.0);
        let c = Colour::WHITE * filter;
        assert_eq!(c, filter);
        assert_eq!(Colour::RED * Colour::BLUE, Colour::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_scalar_ops() {
        let c = Colour::new(0.2, 0.4, 0.6, 1.0);
        assert_eq!(c * 2.0, Colour::new(0.4, 0.8, 1.2, 2.0));
        assert_eq!(2.0 * c, c * 2.0);
        assert_eq!((c * 2.0) / 2.0, c);
    }

    #[test]
    fn test_divide_by_zero_is_unchecked() {
        let c = Colour::WHITE / 0.0;
        assert!(c.r.is_infinite());
    }

    #[test]
    fn test_lerp() {
        let mid = Colour::BLACK.lerp(Colour::WHITE, 0.5);
        assert_eq!(mid, Colour::new(0.5, 0.5, 0.5, 1.0));
    }

    #[test]
    fn test_bytes_layout() {
        let c = Colour::new(1.0, 2.0, 3.0, 4.0);
        let floats: &[f32] = bytemuck::cast_slice(bytemuck::bytes_of(&c));
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_debug_and_display() {
        let c = Colour::new(1.0, 0.5, 0.25, 1.0);
        let debug = "Colour { r: 1.0, g: 0.5, b: 0.25, a: 1.0 }";
        assert_eq!(format!("{:?}", c), debug);
        assert_eq!(c.to_string(), "RGBA(1, 0.5, 0.25, 1)");
    }
}
