//! # Bounding Volumes
//!
//! Axis-aligned bounding boxes and the derived geometry the editor uses for
//! picking and visualization.
//!
//! ## Key Components
//!
//! - [`Aabb`] - raw min/max box with transform and ray tests
//! - [`BoundingVolume`] - an [`Aabb`] plus center, dimensions and largest dimension
//! - [`GeometryProvider`] - the seam through which local mesh bounds are read
//! - [`tracker`] - recompute world volumes and enumerate corners
//! - [`selection`] - selection boxes and corner markers built from a volume
//!
//! ## Corner Ordering
//!
//! Corners are indexed by a 3-bit pattern `b2 b1 b0`: bit 0 picks `max.x`,
//! bit 1 picks `max.y`, bit 2 picks `max.z`, and a clear bit picks the `min`
//! component. Index 0 is therefore `min` and index 7 is `max`.

pub mod selection;
pub mod tracker;

pub use selection::{corner_markers, BoxInstanceData, CornerMarker, SelectionBox};
pub use tracker::{center, corners, local_volume, recalculate, selection_box_instance};

use cgmath::{ElementWise, Matrix4, Vector3, Vector4};

use crate::gfx::picking::Ray;

/// RGBA color in the 0-1 range.
pub type Color = [f32; 4];

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box
    pub min: Vector3<f32>,
    /// Maximum corner of the bounding box
    pub max: Vector3<f32>,
}

impl Aabb {
    pub fn new(min: Vector3<f32>, max: Vector3<f32>) -> Self {
        Self { min, max }
    }

    /// Create AABB from a set of vertices. Returns `None` for an empty slice.
    pub fn from_vertices(vertices: &[[f32; 3]]) -> Option<Self> {
        Self::from_points(vertices.iter().map(|v| Vector3::new(v[0], v[1], v[2])))
    }

    /// Smallest box containing every finite point. Points with a NaN or
    /// infinite component are skipped; returns `None` when none are left.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vector3<f32>>,
    {
        let mut points = points
            .into_iter()
            .filter(|p| p.x.is_finite() && p.y.is_finite() && p.z.is_finite());
        let first = points.next()?;
        Some(points.fold(Self::new(first, first), |aabb, p| aabb.expanded_to(p)))
    }

    /// Grow the box to include `point`.
    pub fn expanded_to(self, point: Vector3<f32>) -> Self {
        Self {
            min: Vector3::new(
                self.min.x.min(point.x),
                self.min.y.min(point.y),
                self.min.z.min(point.z),
            ),
            max: Vector3::new(
                self.max.x.max(point.x),
                self.max.y.max(point.y),
                self.max.z.max(point.z),
            ),
        }
    }

    /// Smallest box containing both boxes.
    pub fn union(self, other: Aabb) -> Self {
        self.expanded_to(other.min).expanded_to(other.max)
    }

    /// The 8 corners in `b2 b1 b0` bit order (see module docs).
    pub fn corners(&self) -> [Vector3<f32>; 8] {
        std::array::from_fn(|i| {
            Vector3::new(
                if i & 0b001 != 0 { self.max.x } else { self.min.x },
                if i & 0b010 != 0 { self.max.y } else { self.min.y },
                if i & 0b100 != 0 { self.max.z } else { self.min.z },
            )
        })
    }

    /// Apply a transformation matrix to the AABB
    ///
    /// All 8 corners are transformed and re-bounded, so rotated boxes grow to
    /// stay axis-aligned.
    pub fn transform(&self, matrix: &Matrix4<f32>) -> Self {
        let transformed = self.corners().map(|corner| {
            let p = matrix * Vector4::new(corner.x, corner.y, corner.z, 1.0);
            Vector3::new(p.x / p.w, p.y / p.w, p.z / p.w)
        });

        let mut aabb = Self::new(transformed[0], transformed[0]);
        for p in &transformed[1..] {
            aabb = aabb.expanded_to(*p);
        }
        aabb
    }

    /// Test ray-AABB intersection
    /// Returns the distance to intersection point, or None if no intersection
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        let inv_dir = Vector3::new(
            1.0 / ray.direction.x,
            1.0 / ray.direction.y,
            1.0 / ray.direction.z,
        );

        let t_min = (self.min - ray.origin).mul_element_wise(inv_dir);
        let t_max = (self.max - ray.origin).mul_element_wise(inv_dir);

        let t1 = Vector3::new(
            t_min.x.min(t_max.x),
            t_min.y.min(t_max.y),
            t_min.z.min(t_max.z),
        );
        let t2 = Vector3::new(
            t_min.x.max(t_max.x),
            t_min.y.max(t_max.y),
            t_min.z.max(t_max.z),
        );

        let t_near = t1.x.max(t1.y.max(t1.z));
        let t_far = t2.x.min(t2.y.min(t2.z));

        if t_near <= t_far && t_far >= 0.0 {
            Some(if t_near >= 0.0 { t_near } else { t_far })
        } else {
            None
        }
    }
}

/// World-space bounds of one object plus the values derived from them.
///
/// Always built whole by [`BoundingVolume::from_aabb`]; there is no way to
/// update one field without the others.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingVolume {
    pub min: Vector3<f32>,
    pub max: Vector3<f32>,
    /// `(min + max) / 2`
    pub center: Vector3<f32>,
    /// `max - min`, never negative
    pub dimensions: Vector3<f32>,
    /// Largest component of `dimensions`
    pub max_dimension: f32,
}

impl BoundingVolume {
    /// Derive a volume from a box, ordering each axis so `min <= max`.
    pub fn from_aabb(aabb: Aabb) -> Self {
        let min = Vector3::new(
            aabb.min.x.min(aabb.max.x),
            aabb.min.y.min(aabb.max.y),
            aabb.min.z.min(aabb.max.z),
        );
        let max = Vector3::new(
            aabb.min.x.max(aabb.max.x),
            aabb.min.y.max(aabb.max.y),
            aabb.min.z.max(aabb.max.z),
        );
        let dimensions = max - min;

        Self {
            min,
            max,
            center: (min + max) * 0.5,
            dimensions,
            max_dimension: dimensions.x.max(dimensions.y).max(dimensions.z),
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.min, self.max)
    }

    /// True when the volume has no usable size: a zero, NaN or infinite
    /// largest dimension. Such a volume cannot define or be scaled to a
    /// unit size.
    pub fn is_degenerate(&self) -> bool {
        !(self.max_dimension > 0.0 && self.max_dimension.is_finite())
    }
}

/// Read access to an object's renderable geometry in its own local space.
pub trait GeometryProvider {
    /// Display name used in errors and logs.
    fn name(&self) -> &str;

    /// Bounds of all mesh vertices before any transform, or `None` when the
    /// object has no vertices at all.
    fn local_bounding_box(&self) -> Option<Aabb>;

    fn mesh_present(&self) -> bool {
        self.local_bounding_box().is_some()
    }
}
