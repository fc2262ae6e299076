//! # Procedural Geometry Generation
//!
//! This module provides the unit-sized primitives the editor needs for its
//! visualization helpers (selection boxes, corner markers) and the
//! [`PrimitiveBuilder`] seam through which bounding-volume code requests them.
//!
//! ## Supported Primitives
//!
//! - **Cube**: Unit cube centered at the origin (side length 1)
//! - **Sphere**: UV sphere with configurable radius and resolution
//!
//! ## Usage
//!
//! ```rust
//! use stage_layout::gfx::geometry::{generate_cube, generate_sphere, MeshPrimitives, PrimitiveBuilder};
//!
//! let cube_data = generate_cube();
//! let sphere_data = generate_sphere(0.5, 16, 8);
//!
//! let unit_box = MeshPrimitives::default().build_unit_box();
//! assert_eq!(unit_box.triangle_count(), 12);
//! ```

pub mod primitives;

pub use primitives::*;

use crate::gfx::scene::object::Mesh;

/// Represents generated geometry data
#[derive(Debug, Clone)]
pub struct GeometryData {
    /// Vertex positions (x, y, z)
    pub vertices: Vec<[f32; 3]>,
    /// Texture coordinates (u, v)
    pub tex_coords: Vec<[f32; 2]>,
    /// Normal vectors (x, y, z)
    pub normals: Vec<[f32; 3]>,
    /// Triangle indices (counter-clockwise winding)
    pub indices: Vec<u32>,
}

impl GeometryData {
    /// Create a new empty geometry data structure
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            tex_coords: Vec::new(),
            normals: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Get the number of vertices in this geometry
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles in this geometry
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Convert into a scene [`Mesh`], generating normals when none were provided.
    pub fn to_mesh(&self) -> Mesh {
        let positions: Vec<f32> = self.vertices.iter().flatten().copied().collect();
        let normals = if self.normals.len() == self.vertices.len() {
            self.normals.iter().flatten().copied().collect()
        } else {
            Mesh::calculate_face_normals(&positions, &self.indices)
        };

        Mesh::new(positions, normals, self.indices.clone())
    }
}

impl Default for GeometryData {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the unit-sized primitives used for selection and corner visuals.
///
/// Callers scale and position the returned renderables themselves, so an
/// implementation only ever needs to produce one box and one sphere shape.
pub trait PrimitiveBuilder {
    type Renderable;

    /// A box spanning `-0.5..0.5` on every axis.
    fn build_unit_box(&self) -> Self::Renderable;

    /// A sphere of diameter 1 centered at the origin.
    fn build_unit_sphere(&self) -> Self::Renderable;
}

/// [`PrimitiveBuilder`] producing procedural [`GeometryData`].
#[derive(Debug, Clone, Copy)]
pub struct MeshPrimitives {
    pub sphere_segments: u32,
    pub sphere_rings: u32,
}

impl Default for MeshPrimitives {
    fn default() -> Self {
        Self {
            sphere_segments: 16,
            sphere_rings: 8,
        }
    }
}

impl PrimitiveBuilder for MeshPrimitives {
    type Renderable = GeometryData;

    fn build_unit_box(&self) -> GeometryData {
        generate_cube()
    }

    fn build_unit_sphere(&self) -> GeometryData {
        generate_sphere(0.5, self.sphere_segments, self.sphere_rings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_primitives_fit_unit_box() {
        let builder = MeshPrimitives::default();
        for data in [builder.build_unit_box(), builder.build_unit_sphere()] {
            for v in &data.vertices {
                for c in v {
                    assert!(c.abs() <= 0.5 + 1e-5);
                }
            }
        }
    }

    #[test]
    fn test_to_mesh_keeps_counts() {
        let mesh = generate_cube().to_mesh();
        assert_eq!(mesh.vertices().len(), 24);
        assert_eq!(mesh.index_count(), 36);
    }
}
