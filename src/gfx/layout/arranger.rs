//! # Spiral Arranger
//!
//! Lays out a collection of objects on the ground plane without overlap.
//!
//! Every object is measured in its own local space first. The largest single
//! dimension across the collection becomes the *unit size*; smaller objects
//! are scaled up to match it (never down), and each object is then centered
//! on the next cell of a [square spiral](super::spiral) with its bounding-box
//! bottom resting on `y = 0`. Cells are `cell_gap * unit_size` apart, so
//! adjacent objects never touch.

use cgmath::Vector3;
use log::{debug, info, warn};

use super::spiral::SpiralCell;
use crate::config::ArrangeConfig;
use crate::error::{ArrangeWarning, Result};
use crate::gfx::bounds::{tracker, BoundingVolume, GeometryProvider};
use crate::gfx::scene::transform::TransformSink;

/// Where one object ended up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub cell: SpiralCell,
    /// Uniform scale applied to the object
    pub factor: f32,
    /// Translation applied to the object's pivot
    pub translation: Vector3<f32>,
    /// World volume recomputed after placement
    pub volume: BoundingVolume,
}

/// Result of arranging a whole collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrangement {
    /// Largest local dimension across all objects; 0 when empty
    pub unit_size: f32,
    /// Extent of the occupied spiral in world units
    pub overall_size: f32,
    /// Next free cell, used as the cursor for later insertions
    pub cell: SpiralCell,
    pub cell_gap: f32,
    pub keep_original_scale: bool,
    /// One entry per object, in input order
    pub placements: Vec<Placement>,
    pub warnings: Vec<ArrangeWarning>,
}

impl Arrangement {
    fn empty(config: &ArrangeConfig) -> Self {
        Self {
            unit_size: 0.0,
            overall_size: 0.0,
            cell: SpiralCell::ORIGIN,
            cell_gap: config.cell_gap,
            keep_original_scale: config.keep_original_scale,
            placements: Vec::new(),
            warnings: vec![ArrangeWarning::EmptyCollection],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// World-space center of a cell on the ground plane.
    pub fn cell_origin(&self, cell: SpiralCell) -> Vector3<f32> {
        cell_origin(cell, self.cell_gap, self.unit_size)
    }
}

/// Arrange `objects` with the default cell gap.
///
/// Objects are placed in slice order; the order decides which spiral cell
/// each one gets.
///
/// # Errors
///
/// [`LayoutError::NoGeometry`](crate::error::LayoutError::NoGeometry) if any
/// object has no mesh data. All objects are measured before the first one is
/// moved, so on error no transform has changed.
pub fn arrange<T>(objects: &mut [T], keep_original_scale: bool) -> Result<Arrangement>
where
    T: GeometryProvider + TransformSink,
{
    arrange_with(
        objects,
        &ArrangeConfig::default().with_keep_original_scale(keep_original_scale),
    )
}

/// Arrange `objects` using an explicit configuration.
pub fn arrange_with<T>(objects: &mut [T], config: &ArrangeConfig) -> Result<Arrangement>
where
    T: GeometryProvider + TransformSink,
{
    let volumes = objects
        .iter()
        .map(|object| tracker::local_volume(object))
        .collect::<Result<Vec<_>>>()?;

    if objects.is_empty() {
        debug!("arrange called with no objects");
        return Ok(Arrangement::empty(config));
    }

    let unit_size = volumes
        .iter()
        .filter(|v| !v.is_degenerate())
        .map(|v| v.max_dimension)
        .fold(0.0f32, f32::max);

    let mut warnings = Vec::new();
    let mut cell = SpiralCell::ORIGIN;
    let mut placements = Vec::with_capacity(objects.len());

    for (index, (object, volume)) in objects.iter_mut().zip(&volumes).enumerate() {
        if volume.is_degenerate() {
            warn!(
                "object {} ('{}') has no usable size ({}), placing it unscaled",
                index,
                object.name(),
                volume.max_dimension
            );
            warnings.push(ArrangeWarning::DegenerateSize {
                index,
                name: object.name().to_string(),
            });
        }

        let factor = scale_factor(volume, unit_size, config.keep_original_scale);
        let translation = place(object, volume, cell, factor, config.cell_gap, unit_size);
        debug!(
            "placed '{}' at cell ({}, {}) scale {:.3}",
            object.name(),
            cell.x,
            cell.y,
            factor
        );

        placements.push((cell, factor, translation));
        cell = cell.next();
    }

    // Transforms changed: every world volume must be rebuilt
    let placements = objects
        .iter()
        .zip(placements)
        .map(|(object, (cell, factor, translation))| {
            Ok(Placement {
                cell,
                factor,
                translation,
                volume: tracker::recalculate(object)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let arrangement = Arrangement {
        unit_size,
        overall_size: overall_size(cell, unit_size),
        cell,
        cell_gap: config.cell_gap,
        keep_original_scale: config.keep_original_scale,
        placements,
        warnings,
    };

    info!(
        "arranged {} objects: unit size {:.3}, overall size {:.3}",
        arrangement.placements.len(),
        arrangement.unit_size,
        arrangement.overall_size
    );

    Ok(arrangement)
}

/// Place one more object at the arrangement's cursor without moving the
/// others.
///
/// Returns `Ok(None)` and leaves the object untouched when its local size is
/// larger than the current unit size (or nothing has been arranged yet); the
/// caller has to re-arrange everything in that case.
pub fn place_next<T>(object: &mut T, arrangement: &mut Arrangement) -> Result<Option<Placement>>
where
    T: GeometryProvider + TransformSink,
{
    let volume = tracker::local_volume(&*object)?;
    if arrangement.is_empty() || volume.max_dimension > arrangement.unit_size {
        return Ok(None);
    }

    let index = arrangement.placements.len();
    if volume.is_degenerate() {
        warn!(
            "object {} ('{}') has no usable size ({}), placing it unscaled",
            index,
            object.name(),
            volume.max_dimension
        );
        arrangement.warnings.push(ArrangeWarning::DegenerateSize {
            index,
            name: object.name().to_string(),
        });
    }

    let cell = arrangement.cell;
    let factor = scale_factor(&volume, arrangement.unit_size, arrangement.keep_original_scale);
    let translation = place(
        object,
        &volume,
        cell,
        factor,
        arrangement.cell_gap,
        arrangement.unit_size,
    );

    let placement = Placement {
        cell,
        factor,
        translation,
        volume: tracker::recalculate(&*object)?,
    };

    arrangement.cell = cell.next();
    arrangement.overall_size = overall_size(arrangement.cell, arrangement.unit_size);
    arrangement.placements.push(placement);
    debug!("inserted '{}' at cell ({}, {})", object.name(), cell.x, cell.y);

    Ok(Some(placement))
}

/// Uniform scale for one object: 1 when keeping original scale, when the
/// object already defines the unit size, or when its size is zero or not
/// finite; otherwise `unit_size / max_dimension`.
pub fn scale_factor(volume: &BoundingVolume, unit_size: f32, keep_original_scale: bool) -> f32 {
    if keep_original_scale || volume.max_dimension == unit_size || volume.is_degenerate() {
        1.0
    } else {
        unit_size / volume.max_dimension
    }
}

/// Ground-plane position of a cell's center.
pub fn cell_origin(cell: SpiralCell, cell_gap: f32, unit_size: f32) -> Vector3<f32> {
    let pitch = cell_gap * unit_size;
    Vector3::new(cell.x as f32 * pitch, 0.0, cell.y as f32 * pitch)
}

/// `max(|x|, |y|) * unit_size` of the cursor, falling back to `unit_size`
/// when that is zero.
pub fn overall_size(cursor: SpiralCell, unit_size: f32) -> f32 {
    let size = cursor.ring() as f32 * unit_size;
    if size == 0.0 {
        unit_size
    } else {
        size
    }
}

/// Write the combined translation + scale for one object.
///
/// `volume` is the object's local (identity-transform) volume. The pivot is
/// offset so the scaled box is centered over the cell and sits on `y = 0`.
/// The written translation is always finite.
fn place<T>(
    object: &mut T,
    volume: &BoundingVolume,
    cell: SpiralCell,
    factor: f32,
    cell_gap: f32,
    unit_size: f32,
) -> Vector3<f32>
where
    T: TransformSink + ?Sized,
{
    let mut offset =
        volume.center * factor - Vector3::new(0.0, factor * volume.dimensions.y / 2.0, 0.0);
    if !(offset.x.is_finite() && offset.y.is_finite() && offset.z.is_finite()) {
        // Unbounded box: leave the pivot on the cell origin
        offset = Vector3::new(0.0, 0.0, 0.0);
    }
    let translation = cell_origin(cell, cell_gap, unit_size) - offset;

    object.set_transform(translation, None, Vector3::new(factor, factor, factor));
    translation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LayoutError;
    use crate::gfx::geometry::GeometryData;
    use crate::gfx::scene::object::{Mesh, Object};
    use crate::gfx::scene::transform::Transform;
    use cgmath::{Deg, InnerSpace};
    use rand::Rng;

    const EPS: f32 = 1e-4;

    /// A box-shaped object spanning `min..max` in local space.
    fn box_object(name: &str, min: [f32; 3], max: [f32; 3]) -> Object {
        let mut data = GeometryData::new();
        for i in 0..8 {
            data.vertices.push([
                if i & 1 != 0 { max[0] } else { min[0] },
                if i & 2 != 0 { max[1] } else { min[1] },
                if i & 4 != 0 { max[2] } else { min[2] },
            ]);
        }
        Object::new(name, vec![data.to_mesh()])
    }

    fn cube(name: &str, size: f32) -> Object {
        let h = size / 2.0;
        box_object(name, [-h, -h, -h], [h, h, h])
    }

    fn xz_distance(a: &BoundingVolume, b: &BoundingVolume) -> f32 {
        Vector3::new(a.center.x - b.center.x, 0.0, a.center.z - b.center.z).magnitude()
    }

    #[test]
    fn test_empty_input() {
        let mut objects: Vec<Object> = Vec::new();
        let arrangement = arrange(&mut objects, false).unwrap();

        assert_eq!(arrangement.unit_size, 0.0);
        assert_eq!(arrangement.overall_size, 0.0);
        assert_eq!(arrangement.cell, SpiralCell::ORIGIN);
        assert!(arrangement.placements.is_empty());
        assert_eq!(arrangement.warnings, vec![ArrangeWarning::EmptyCollection]);
    }

    #[test]
    fn test_single_object() {
        // Pivot deliberately far from the box center
        let mut objects = vec![box_object("offset", [3.0, 5.0, -7.0], [5.0, 6.0, -6.0])];
        let arrangement = arrange(&mut objects, false).unwrap();

        assert_eq!(arrangement.unit_size, 2.0);
        assert_eq!(arrangement.overall_size, arrangement.unit_size);
        assert_eq!(arrangement.cell, SpiralCell::new(1, 0));

        let volume = objects[0].recalculate_bounds().unwrap();
        assert!(volume.center.x.abs() < EPS);
        assert!(volume.center.z.abs() < EPS);
        assert!(volume.min.y.abs() < EPS);
        assert_eq!(arrangement.placements[0].factor, 1.0);
    }

    #[test]
    fn test_overall_size_follows_cursor_ring() {
        let mut objects: Vec<_> = (0..9).map(|i| cube(&format!("c{}", i), 1.0)).collect();
        let arrangement = arrange(&mut objects, false).unwrap();

        // Nine cells fill rings 0 and 1; the cursor is on ring 2
        assert_eq!(arrangement.cell, SpiralCell::new(2, -1));
        assert_eq!(arrangement.overall_size, 2.0);
    }

    #[test]
    fn test_identical_sizes_keep_unit_scale() {
        let mut objects: Vec<_> = (0..4).map(|i| cube(&format!("c{}", i), 3.0)).collect();
        let arrangement = arrange(&mut objects, false).unwrap();

        for placement in &arrangement.placements {
            assert_eq!(placement.factor, 1.0);
        }
        // Neighbouring cells are 1.1 units apart
        let d = xz_distance(
            &arrangement.placements[0].volume,
            &arrangement.placements[1].volume,
        );
        assert!((d - 3.3).abs() < EPS);
    }

    #[test]
    fn test_scale_up_only() {
        let mut objects = vec![cube("small", 1.0), cube("big", 4.0), cube("medium", 2.0)];
        let arrangement = arrange(&mut objects, false).unwrap();

        let factors: Vec<f32> = arrangement.placements.iter().map(|p| p.factor).collect();
        assert_eq!(factors, vec![4.0, 1.0, 2.0]);
        for placement in &arrangement.placements {
            assert!((placement.volume.max_dimension - 4.0).abs() < EPS);
        }
    }

    #[test]
    fn test_keep_original_scale() {
        let mut objects = vec![cube("small", 1.0), cube("big", 4.0)];
        let arrangement = arrange(&mut objects, true).unwrap();

        assert!(arrangement.placements.iter().all(|p| p.factor == 1.0));
        assert!((arrangement.placements[0].volume.max_dimension - 1.0).abs() < EPS);
        assert!(arrangement.placements[0].volume.min.y.abs() < EPS);
    }

    #[test]
    fn test_rearrange_is_stable() {
        let mut objects = vec![cube("a", 1.0), cube("b", 2.5)];
        objects[0].rotate_y(Deg(45.0));

        let first = arrange(&mut objects, false).unwrap();
        let second = arrange(&mut objects, false).unwrap();
        assert_eq!(first.unit_size, second.unit_size);
        for (a, b) in first.placements.iter().zip(&second.placements) {
            assert_eq!(a.translation, b.translation);
            assert_eq!(a.factor, b.factor);
        }
    }

    #[test]
    fn test_no_geometry_aborts_before_moving_anything() {
        let mut objects = vec![cube("ok", 1.0), Object::new("anim", Vec::<Mesh>::new())];
        objects[0].set_translation(Vector3::new(9.0, 9.0, 9.0));

        match arrange(&mut objects, false) {
            Err(LayoutError::NoGeometry { name }) => assert_eq!(name, "anim"),
            other => panic!("expected NoGeometry, got {:?}", other.map(|a| a.unit_size)),
        }
        assert_eq!(objects[0].transform().translation, Vector3::new(9.0, 9.0, 9.0));
    }

    #[test]
    fn test_degenerate_size_does_not_produce_nan() {
        let mut objects = vec![
            box_object("point", [1.0, 1.0, 1.0], [1.0, 1.0, 1.0]),
            cube("cube", 2.0),
        ];
        let arrangement = arrange(&mut objects, false).unwrap();

        let point = &arrangement.placements[0];
        assert_eq!(point.factor, 1.0);
        assert!(point.translation.x.is_finite());
        assert!(point.translation.y.is_finite());
        assert_eq!(
            arrangement.warnings,
            vec![ArrangeWarning::DegenerateSize {
                index: 0,
                name: "point".to_string()
            }]
        );
    }

    #[test]
    fn test_unbounded_size_never_reaches_transforms() {
        let mut objects = vec![
            cube("cube", 2.0),
            box_object("huge", [-f32::MAX, -1.0, -1.0], [f32::MAX, 1.0, 1.0]),
        ];
        let arrangement = arrange(&mut objects, false).unwrap();

        // The unbounded object neither defines the unit size nor gets scaled
        assert_eq!(arrangement.unit_size, 2.0);
        assert_eq!(arrangement.placements[1].factor, 1.0);
        assert_eq!(
            arrangement.warnings,
            vec![ArrangeWarning::DegenerateSize {
                index: 1,
                name: "huge".to_string()
            }]
        );
        for object in &objects {
            let t = object.transform().translation;
            assert!(t.x.is_finite() && t.y.is_finite() && t.z.is_finite());
        }
        // Still centered over its cell and resting on the ground
        assert_eq!(
            objects[1].transform().translation,
            arrangement.cell_origin(SpiralCell::new(1, 0)) + Vector3::new(0.0, 1.0, 0.0)
        );
    }

    #[test]
    fn test_nan_vertices_are_not_measured() {
        let mut data = GeometryData::new();
        data.vertices.push([f32::NAN; 3]);
        let mut objects = vec![cube("cube", 1.0), Object::new("nan", vec![data.to_mesh()])];

        assert!(matches!(
            arrange(&mut objects, false),
            Err(LayoutError::NoGeometry { .. })
        ));
        assert_eq!(*objects[0].transform(), Transform::identity());
    }

    #[test]
    fn test_random_collections_hold_layout_properties() {
        let mut rng = rand::rng();

        for _ in 0..20 {
            let count = rng.random_range(1..30);
            let mut objects: Vec<_> = (0..count)
                .map(|i| {
                    let min = [
                        rng.random_range(-5.0..5.0),
                        rng.random_range(-5.0..5.0),
                        rng.random_range(-5.0..5.0),
                    ];
                    let size = [
                        rng.random_range(0.1..4.0),
                        rng.random_range(0.1..4.0),
                        rng.random_range(0.1..4.0),
                    ];
                    box_object(
                        &format!("obj{}", i),
                        min,
                        [min[0] + size[0], min[1] + size[1], min[2] + size[2]],
                    )
                })
                .collect();

            let arrangement = arrange(&mut objects, false).unwrap();
            let unit = arrangement.unit_size;
            let tolerance = EPS * unit.max(1.0) * 10.0;

            for (i, a) in arrangement.placements.iter().enumerate() {
                // Ground alignment
                assert!(a.volume.min.y.abs() < tolerance, "min.y = {}", a.volume.min.y);
                // Scale up only
                assert!(a.factor >= 1.0);

                for b in &arrangement.placements[i + 1..] {
                    assert!(xz_distance(&a.volume, &b.volume) >= 1.1 * unit - tolerance);
                }
            }

            // Exactly the objects defining the unit size keep factor 1
            for (object, placement) in objects.iter().zip(&arrangement.placements) {
                let local = tracker::local_volume(object).unwrap();
                assert_eq!(placement.factor == 1.0, local.max_dimension == unit);
            }
        }
    }

    #[test]
    fn test_place_next_uses_cursor() {
        let mut objects = vec![cube("a", 2.0), cube("b", 2.0)];
        let mut arrangement = arrange(&mut objects, false).unwrap();
        assert_eq!(arrangement.cell, SpiralCell::new(1, 1));

        let mut newcomer = cube("c", 1.0);
        let placement = place_next(&mut newcomer, &mut arrangement).unwrap().unwrap();

        assert_eq!(placement.cell, SpiralCell::new(1, 1));
        assert_eq!(placement.factor, 2.0);
        assert_eq!(arrangement.cell, SpiralCell::new(0, 1));
        assert_eq!(arrangement.placements.len(), 3);
        assert!((placement.volume.center.x - 2.2).abs() < EPS);
        assert!((placement.volume.center.z - 2.2).abs() < EPS);
        assert!(placement.volume.min.y.abs() < EPS);
    }

    #[test]
    fn test_place_next_rejects_larger_object() {
        let mut objects = vec![cube("a", 1.0)];
        let mut arrangement = arrange(&mut objects, false).unwrap();

        let mut giant = cube("giant", 5.0);
        assert!(place_next(&mut giant, &mut arrangement).unwrap().is_none());
        assert_eq!(arrangement.placements.len(), 1);
        assert_eq!(*giant.transform(), Transform::identity());
    }

    #[test]
    fn test_overall_size_fallback() {
        assert_eq!(overall_size(SpiralCell::ORIGIN, 3.0), 3.0);
        assert_eq!(overall_size(SpiralCell::new(-2, 1), 3.0), 6.0);
    }
}
