//! # Scene Objects
//!
//! [`Object`] is a plain data struct: a name, some meshes and a transform.
//! Bounding-volume and arrangement code reach it only through the
//! [`GeometryProvider`] and [`TransformSink`] traits.

use cgmath::{Deg, Matrix4, Quaternion, Rotation3, Vector3};

use super::transform::{Transform, TransformSink};
use super::vertex::Vertex3D;
use crate::error::Result;
use crate::gfx::bounds::{tracker, Aabb, BoundingVolume, GeometryProvider};

pub struct Mesh {
    vertices: Vec<Vertex3D>,
    indices: Vec<u32>,
}

impl Mesh {
    pub fn new(positions: Vec<f32>, normals: Vec<f32>, indices: Vec<u32>) -> Self {
        let vertices = positions
            .chunks_exact(3)
            .enumerate()
            .map(|(i, p)| Vertex3D {
                position: [p[0], p[1], p[2]],
                normal: normals
                    .get(i * 3..i * 3 + 3)
                    .map(|n| [n[0], n[1], n[2]])
                    .unwrap_or([0.0, 1.0, 0.0]),
            })
            .collect();

        Self { vertices, indices }
    }

    pub fn vertices(&self) -> &[Vertex3D] {
        &self.vertices
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Bounds of the vertex positions in mesh space.
    pub fn local_bounds(&self) -> Option<Aabb> {
        Aabb::from_points(
            self.vertices
                .iter()
                .map(|v| Vector3::new(v.position[0], v.position[1], v.position[2])),
        )
    }

    /// Averaged face normals for meshes whose source had none.
    pub fn calculate_face_normals(positions: &[f32], indices: &[u32]) -> Vec<f32> {
        let vertex_count = positions.len() / 3;
        let mut normals = vec![0.0; positions.len()];
        let vertex = |i: usize| {
            Vector3::new(positions[i * 3], positions[i * 3 + 1], positions[i * 3 + 2])
        };

        for triangle in indices.chunks_exact(3) {
            let [i0, i1, i2] = [triangle[0], triangle[1], triangle[2]].map(|i| i as usize);
            if i0.max(i1).max(i2) >= vertex_count {
                continue;
            }

            let face_normal = (vertex(i1) - vertex(i0)).cross(vertex(i2) - vertex(i0));
            for idx in [i0, i1, i2] {
                normals[idx * 3] += face_normal.x;
                normals[idx * 3 + 1] += face_normal.y;
                normals[idx * 3 + 2] += face_normal.z;
            }
        }

        for n in normals.chunks_exact_mut(3) {
            let length = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            if length > 0.0 {
                n.iter_mut().for_each(|c| *c /= length);
            }
        }

        normals
    }
}

pub struct Object {
    pub name: String,
    pub meshes: Vec<Mesh>,
    pub visible: bool,
    transform: Transform,
    /// World volume as of the last recompute; cleared by any transform change
    bounds: Option<BoundingVolume>,
}

impl Object {
    /// Create a new Object with identity transformation
    pub fn new(name: impl Into<String>, meshes: Vec<Mesh>) -> Self {
        Self {
            name: name.into(),
            meshes,
            visible: true,
            transform: Transform::identity(),
            bounds: None,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Replace the transform wholesale, invalidating cached bounds.
    pub fn apply_transform(&mut self, transform: Transform) {
        self.transform = transform;
        self.bounds = None;
    }

    pub fn set_translation(&mut self, translation: Vector3<f32>) {
        let mut transform = self.transform;
        transform.translation = translation;
        self.apply_transform(transform);
    }

    /// Apply rotation around Y axis
    pub fn rotate_y(&mut self, angle: Deg<f32>) {
        let mut transform = self.transform;
        transform.rotation = Quaternion::from_angle_y(angle) * transform.rotation;
        self.apply_transform(transform);
    }

    /// World bounds, or `None` if the transform changed since the last
    /// [`Object::recalculate_bounds`].
    pub fn bounds(&self) -> Option<&BoundingVolume> {
        self.bounds.as_ref()
    }

    /// Recompute and cache the world bounding volume.
    pub fn recalculate_bounds(&mut self) -> Result<BoundingVolume> {
        let volume = tracker::recalculate(&*self)?;
        self.bounds = Some(volume);
        Ok(volume)
    }

    pub fn vertex_count(&self) -> usize {
        self.meshes.iter().map(|m| m.vertices().len()).sum()
    }

    pub fn triangle_count(&self) -> usize {
        self.meshes.iter().map(|m| m.index_count() / 3).sum()
    }
}

impl GeometryProvider for Object {
    fn name(&self) -> &str {
        &self.name
    }

    fn local_bounding_box(&self) -> Option<Aabb> {
        self.meshes
            .iter()
            .filter_map(Mesh::local_bounds)
            .reduce(Aabb::union)
    }
}

impl TransformSink for Object {
    fn world_transform(&self) -> Matrix4<f32> {
        self.transform.matrix()
    }

    fn set_transform(
        &mut self,
        translation: Vector3<f32>,
        rotation: Option<Quaternion<f32>>,
        scale: Vector3<f32>,
    ) {
        self.apply_transform(Transform {
            translation,
            rotation: rotation.unwrap_or_else(|| Transform::identity().rotation),
            scale,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::generate_cube;

    #[test]
    fn test_mesh_from_flat_arrays() {
        let mesh = Mesh::new(
            vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 2.0, 0.0],
            vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0],
            vec![0, 1, 2],
        );
        assert_eq!(mesh.vertices().len(), 3);
        let bounds = mesh.local_bounds().unwrap();
        assert_eq!(bounds.max, Vector3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn test_face_normals_point_out_of_ccw_triangle() {
        let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
        let normals = Mesh::calculate_face_normals(&positions, &[0, 1, 2]);
        assert_eq!(normals, vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_local_bounds_span_all_meshes() {
        let low = Mesh::new(vec![-1.0, -1.0, -1.0, 0.0, 0.0, 0.0], Vec::new(), Vec::new());
        let high = Mesh::new(vec![2.0, 3.0, 4.0], Vec::new(), Vec::new());
        let object = Object::new("pair", vec![low, high]);

        let aabb = object.local_bounding_box().unwrap();
        assert_eq!(aabb.min, Vector3::new(-1.0, -1.0, -1.0));
        assert_eq!(aabb.max, Vector3::new(2.0, 3.0, 4.0));
        assert!(object.mesh_present());
    }

    #[test]
    fn test_empty_meshes_are_not_geometry() {
        let object = Object::new("empty", vec![Mesh::new(Vec::new(), Vec::new(), Vec::new())]);
        assert!(!object.mesh_present());
    }

    #[test]
    fn test_transform_change_invalidates_bounds() {
        let mut object = Object::new("cube", vec![generate_cube().to_mesh()]);
        assert!(object.bounds().is_none());

        object.recalculate_bounds().unwrap();
        assert!(object.bounds().is_some());

        object.set_translation(Vector3::new(1.0, 0.0, 0.0));
        assert!(object.bounds().is_none());

        let volume = object.recalculate_bounds().unwrap();
        assert_eq!(volume.center, Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(object.bounds(), Some(&volume));
    }

    #[test]
    fn test_set_transform_is_atomic() {
        let mut object = Object::new("cube", vec![generate_cube().to_mesh()]);
        object.rotate_y(Deg(30.0));
        object.set_transform(Vector3::new(0.0, 1.0, 0.0), None, Vector3::new(2.0, 2.0, 2.0));

        let transform = object.transform();
        assert_eq!(transform.translation, Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(transform.rotation, Transform::identity().rotation);
        assert_eq!(transform.scale, Vector3::new(2.0, 2.0, 2.0));

        object.reset_transform();
        assert_eq!(*object.transform(), Transform::identity());
    }
}
