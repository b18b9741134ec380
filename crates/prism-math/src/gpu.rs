//! Plain-old-data blocks for constant and vertex buffers.
//!
//! Every type here is `#[repr(C)]` and [`Pod`], so a value can be handed to a
//! buffer upload as raw bytes with no conversion step.
//!
//! ```rust
//! use prism_math::gpu::MatrixBlock;
//!
//! let block = MatrixBlock::default();
//! assert_eq!(block.as_bytes().len(), 3 * 16 * 4);
//! ```

use bytemuck::{Pod, Zeroable};
use prism_core::Colour;

use crate::{Camera, Mat4, Vec3};

/// World, view and projection matrices laid out for a constant buffer.
///
/// All three share the kernel convention (row-major, column vectors), so
/// `proj * view * world` is [`Camera::clip_from_world`] for `world = I`.
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct MatrixBlock {
    /// Object-to-world.
    pub world: Mat4,
    /// World-to-view.
    pub view: Mat4,
    /// View-to-clip, column-vector layout like `world` and `view`.
    pub proj: Mat4,
}

impl MatrixBlock {
    /// Block for an object drawn through `camera`.
    pub fn new(world: Mat4, camera: &Camera) -> Self {
        Self {
            world,
            view: camera.view(),
            proj: camera.projection().transpose(),
        }
    }

    /// Recomputes view and projection, keeping the world matrix.
    pub fn update_camera(&mut self, camera: &Camera) {
        self.view = camera.view();
        self.proj = camera.projection().transpose();
    }

    /// Raw bytes for upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl Default for MatrixBlock {
    fn default() -> Self {
        Self {
            world: Mat4::IDENTITY,
            view: Mat4::IDENTITY,
            proj: Mat4::IDENTITY,
        }
    }
}

/// Position plus vertex colour, 28 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Vertex {
    /// Object-space position.
    pub position: Vec3,
    /// Linear RGBA colour.
    pub colour: Colour,
}

impl Vertex {
    /// Creates a vertex.
    #[inline]
    pub const fn new(position: Vec3, colour: Colour) -> Self {
        Self { position, colour }
    }

    /// Raw bytes for upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Reinterprets a vertex slice as bytes.
    #[inline]
    pub fn slice_as_bytes(vertices: &[Vertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}
