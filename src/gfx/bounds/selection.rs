//! Selection boxes and corner markers derived from a [`BoundingVolume`].

use bytemuck::{Pod, Zeroable};
use cgmath::{Matrix4, Vector3};

use super::{tracker, BoundingVolume, Color};
use crate::gfx::geometry::PrimitiveBuilder;

/// A unit box placed over an object's bounding volume.
#[derive(Debug, Clone)]
pub struct SelectionBox<R> {
    pub renderable: R,
    /// Unit box to world: translate to `center`, scale to `dimensions`
    pub transform: Matrix4<f32>,
    pub center: Vector3<f32>,
    pub dimensions: Vector3<f32>,
    /// Color when this is the current selection
    pub primary: Color,
    /// Color when this is one of several other selected objects
    pub secondary: Color,
}

impl<R> SelectionBox<R> {
    pub fn color(&self, current: bool) -> Color {
        if current {
            self.primary
        } else {
            self.secondary
        }
    }

    /// Per-instance data for drawing many selection boxes in one call.
    pub fn instance_data(&self, current: bool) -> BoxInstanceData {
        BoxInstanceData::new(self.center, self.dimensions, self.color(current))
    }
}

/// Instance data for one box
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct BoxInstanceData {
    /// World center [x, y, z, 1]
    pub center: [f32; 4],
    /// Full extent [x, y, z, 0]
    pub extent: [f32; 4],
    /// Color [r, g, b, a]
    pub color: [f32; 4],
}

impl BoxInstanceData {
    pub fn new(center: Vector3<f32>, extent: Vector3<f32>, color: Color) -> Self {
        Self {
            center: [center.x, center.y, center.z, 1.0],
            extent: [extent.x, extent.y, extent.z, 0.0],
            color,
        }
    }
}

/// A small sphere sitting on one corner of a bounding volume.
#[derive(Debug, Clone)]
pub struct CornerMarker<R> {
    /// Corner index in `b2 b1 b0` order, see [`tracker::corners`]
    pub index: usize,
    pub position: Vector3<f32>,
    pub radius: f32,
    pub renderable: R,
    pub transform: Matrix4<f32>,
}

/// One marker per corner, in the same order as [`tracker::corners`].
///
/// Marker radius is `radius_ratio * volume.max_dimension`.
pub fn corner_markers<B>(
    volume: &BoundingVolume,
    radius_ratio: f32,
    builder: &B,
) -> [CornerMarker<B::Renderable>; 8]
where
    B: PrimitiveBuilder,
{
    let radius = volume.max_dimension * radius_ratio;
    let positions = tracker::corners(volume);

    std::array::from_fn(|index| {
        let position = positions[index];
        CornerMarker {
            index,
            position,
            radius,
            renderable: builder.build_unit_sphere(),
            // Unit sphere has diameter 1
            transform: Matrix4::from_translation(position) * Matrix4::from_scale(radius * 2.0),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::bounds::Aabb;
    use crate::gfx::geometry::MeshPrimitives;

    fn volume() -> BoundingVolume {
        BoundingVolume::from_aabb(Aabb::new(
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(10.0, 2.0, 4.0),
        ))
    }

    #[test]
    fn test_selection_colors() {
        let selection = tracker::selection_box_instance(
            &volume(),
            [1.0, 0.0, 0.0, 1.0],
            [0.0, 0.0, 1.0, 1.0],
            &MeshPrimitives::default(),
        );
        assert_eq!(selection.color(true), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(selection.color(false), [0.0, 0.0, 1.0, 1.0]);

        let instance = selection.instance_data(false);
        assert_eq!(instance.center, [5.0, 1.0, 2.0, 1.0]);
        assert_eq!(instance.extent, [10.0, 2.0, 4.0, 0.0]);
        assert_eq!(instance.color, [0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_instance_data_layout() {
        let instances = [BoxInstanceData::zeroed(); 3];
        let bytes: &[u8] = bytemuck::cast_slice(&instances);
        assert_eq!(bytes.len(), 3 * 48);
    }

    #[test]
    fn test_corner_markers_follow_corner_order() {
        let volume = volume();
        let markers = corner_markers(&volume, 0.05, &MeshPrimitives::default());
        let expected = tracker::corners(&volume);

        for (i, marker) in markers.iter().enumerate() {
            assert_eq!(marker.index, i);
            assert_eq!(marker.position, expected[i]);
            assert!((marker.radius - 0.5).abs() < 1e-6);
        }
        assert_eq!(markers[0].position, volume.min);
        assert_eq!(markers[7].position, volume.max);
    }
}
