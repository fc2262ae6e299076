//! # Bounding Volume Tracker
//!
//! Free functions that measure objects and derive secondary geometry from the
//! result. Every call builds a fresh [`BoundingVolume`]; nothing here keeps
//! state between calls, so a volume returned earlier is never changed by a
//! later computation.

use cgmath::{Matrix4, Vector3};

use super::{Aabb, BoundingVolume, Color, GeometryProvider, SelectionBox};
use crate::error::{LayoutError, Result};
use crate::gfx::geometry::PrimitiveBuilder;
use crate::gfx::scene::transform::TransformSink;

/// Recompute an object's world-space bounding volume from its mesh bounds
/// and current transform.
///
/// Must be called again after any transform or geometry change; a volume
/// computed before the change no longer describes the object.
///
/// # Errors
///
/// [`LayoutError::NoGeometry`] when the object has no mesh data.
pub fn recalculate<T>(object: &T) -> Result<BoundingVolume>
where
    T: GeometryProvider + TransformSink,
{
    let local = local_aabb(object)?;
    Ok(BoundingVolume::from_aabb(
        local.transform(&object.world_transform()),
    ))
}

/// Bounding volume of the object as if its transform were identity.
///
/// # Errors
///
/// [`LayoutError::NoGeometry`] when the object has no mesh data.
pub fn local_volume<T>(object: &T) -> Result<BoundingVolume>
where
    T: GeometryProvider + ?Sized,
{
    local_aabb(object).map(BoundingVolume::from_aabb)
}

fn local_aabb<T>(object: &T) -> Result<Aabb>
where
    T: GeometryProvider + ?Sized,
{
    object.local_bounding_box().ok_or_else(|| LayoutError::NoGeometry {
        name: object.name().to_string(),
    })
}

/// Midpoint of the volume.
pub fn center(volume: &BoundingVolume) -> Vector3<f32> {
    (volume.min + volume.max) * 0.5
}

/// All 8 corners, indexed by the `b2 b1 b0` bit pattern (set bit = max).
///
/// Index 0 is `volume.min` and index 7 is `volume.max`. Corner widgets in the
/// UI rely on this exact order.
pub fn corners(volume: &BoundingVolume) -> [Vector3<f32>; 8] {
    volume.aabb().corners()
}

/// A unit box from `builder`, scaled to the volume's dimensions and moved to
/// its center.
///
/// `primary` and `secondary` let a multi-select UI color the current object
/// differently from the rest.
pub fn selection_box_instance<B>(
    volume: &BoundingVolume,
    primary: Color,
    secondary: Color,
    builder: &B,
) -> SelectionBox<B::Renderable>
where
    B: PrimitiveBuilder,
{
    let d = volume.dimensions;
    let transform = Matrix4::from_translation(volume.center)
        * Matrix4::from_nonuniform_scale(d.x, d.y, d.z);

    SelectionBox {
        renderable: builder.build_unit_box(),
        transform,
        center: volume.center,
        dimensions: d,
        primary,
        secondary,
    }
}
