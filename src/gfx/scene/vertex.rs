//! # Vertex Data Structures
//!
//! GPU-compatible vertex layout shared by loaded meshes and procedural
//! primitives.

/// A 3D vertex with position and normal data.
///
/// `#[repr(C)]` plus `Pod` lets the render layer upload a mesh's vertices
/// with a single `bytemuck::cast_slice`.
///
/// # Examples
///
/// ```
/// use stage_layout::gfx::scene::vertex::Vertex3D;
///
/// let vertex = Vertex3D {
///     position: [0.0, 1.0, 0.0],
///     normal: [0.0, 1.0, 0.0],
/// };
/// assert_eq!(bytemuck::bytes_of(&vertex).len(), 24);
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex3D {
    /// 3D position coordinates [x, y, z]
    pub position: [f32; 3],
    /// 3D normal vector [nx, ny, nz]
    pub normal: [f32; 3],
}
