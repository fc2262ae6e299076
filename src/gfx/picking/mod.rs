//! # Object Picking System
//!
//! Mouse ray-casting against the objects' world bounding volumes.
//!
//! ## How it works
//!
//! 1. **Mouse to Ray**: Convert mouse coordinates to a 3D ray in world space
//! 2. **Ray-Volume Intersection**: Test the ray against each object's cached
//!    world [`BoundingVolume`](crate::gfx::bounds::BoundingVolume)
//! 3. **Selection**: Return the closest intersected object
//!
//! Objects whose bounds are stale (transform changed since the last
//! recompute) or that are hidden are skipped; call
//! [`Scene::arrange`](crate::gfx::scene::Scene::arrange) or
//! [`Object::recalculate_bounds`] first.

use cgmath::{InnerSpace, Matrix4, SquareMatrix, Vector3, Vector4};

use crate::gfx::scene::object::Object;

/// A 3D ray for intersection testing
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Ray origin point in world space
    pub origin: Vector3<f32>,
    /// Ray direction (normalized)
    pub direction: Vector3<f32>,
}

impl Ray {
    pub fn new(origin: Vector3<f32>, direction: Vector3<f32>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Get a point along the ray at distance t
    pub fn point_at(&self, t: f32) -> Vector3<f32> {
        self.origin + self.direction * t
    }
}

/// Result of an object picking operation
#[derive(Debug, Clone)]
pub struct PickResult {
    /// Index of the picked object
    pub object_index: usize,
    /// Distance from the ray origin to the intersection point
    pub distance: f32,
    /// World space intersection point
    pub intersection_point: Vector3<f32>,
}

/// Convert screen coordinates to a world-space ray.
///
/// `view_proj` is the camera's projection * view matrix. Returns `None` when
/// it is not invertible.
pub fn screen_to_ray(
    screen_pos: (f32, f32),
    screen_size: (f32, f32),
    view_proj: &Matrix4<f32>,
) -> Option<Ray> {
    let (mouse_x, mouse_y) = screen_pos;
    let (screen_width, screen_height) = screen_size;

    // Normalized device coordinates (-1 to 1), Y flipped
    let ndc_x = (2.0 * mouse_x) / screen_width - 1.0;
    let ndc_y = 1.0 - (2.0 * mouse_y) / screen_height;

    let inv_view_proj = view_proj.invert()?;
    let unproject = |z: f32| {
        let p = inv_view_proj * Vector4::new(ndc_x, ndc_y, z, 1.0);
        Vector3::new(p.x / p.w, p.y / p.w, p.z / p.w)
    };

    let near = unproject(-1.0);
    let far = unproject(1.0);
    Some(Ray::new(near, far - near))
}

/// Closest visible object hit by `ray`.
pub fn pick_object(ray: &Ray, objects: &[Object]) -> Option<PickResult> {
    objects
        .iter()
        .enumerate()
        .filter(|(_, object)| object.visible)
        .filter_map(|(i, object)| {
            let distance = object.bounds()?.aabb().intersect_ray(ray)?;
            Some(PickResult {
                object_index: i,
                distance,
                intersection_point: ray.point_at(distance),
            })
        })
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
}
