//! Ground grid and lights that follow the arranged scene's extent.
//!
//! These are owned by the [`Scene`](crate::gfx::scene::Scene) and rebuilt
//! every time the layout changes.

use cgmath::Vector3;

/// Grid lines on `y = 0` drawn along spiral cell boundaries.
#[derive(Debug, Clone, PartialEq)]
pub struct GroundGrid {
    /// Distance between adjacent lines (one spiral cell)
    pub spacing: f32,
    /// Lines run from `-half_extent` to `half_extent` on both axes
    pub half_extent: f32,
    pub lines: Vec<[Vector3<f32>; 2]>,
}

impl GroundGrid {
    /// Grid covering every spiral ring up to `overall_size / unit_size`.
    pub fn new(unit_size: f32, overall_size: f32, cell_gap: f32) -> Self {
        let spacing = unit_size * cell_gap;
        if spacing <= 0.0 || !spacing.is_finite() {
            return Self {
                spacing: 0.0,
                half_extent: 0.0,
                lines: Vec::new(),
            };
        }

        let rings = (overall_size / unit_size).round().max(1.0) as u32;
        let half_extent = (rings as f32 + 0.5) * spacing;
        let mut lines = Vec::new();

        for k in 0..=(2 * rings + 1) {
            let offset = -half_extent + k as f32 * spacing;
            lines.push([
                Vector3::new(offset, 0.0, -half_extent),
                Vector3::new(offset, 0.0, half_extent),
            ]);
            lines.push([
                Vector3::new(-half_extent, 0.0, offset),
                Vector3::new(half_extent, 0.0, offset),
            ]);
        }

        Self {
            spacing,
            half_extent,
            lines,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vector3<f32>,
    pub color: [f32; 3],
    pub intensity: f32,
}

/// Key and fill lights placed relative to the scene size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightRig {
    pub key: Light,
    pub fill: Light,
    pub ambient: [f32; 3],
}

impl LightRig {
    pub fn new(overall_size: f32) -> Self {
        let s = overall_size.max(f32::EPSILON);
        Self {
            key: Light {
                position: Vector3::new(s, s * 2.0, s),
                color: [1.0, 0.98, 0.92],
                intensity: 1.0,
            },
            fill: Light {
                position: Vector3::new(-s, s, -s * 0.5),
                color: [0.8, 0.85, 1.0],
                intensity: 0.4,
            },
            ambient: [0.15, 0.15, 0.18],
        }
    }
}

/// Everything besides the objects themselves that depends on the layout.
#[derive(Debug, Clone, PartialEq)]
pub struct StageHelpers {
    pub grid: GroundGrid,
    pub lights: LightRig,
}

impl StageHelpers {
    pub fn new(unit_size: f32, overall_size: f32, cell_gap: f32) -> Self {
        Self {
            grid: GroundGrid::new(unit_size, overall_size, cell_gap),
            lights: LightRig::new(overall_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_single_ring() {
        let grid = GroundGrid::new(1.0, 1.0, 1.1);
        assert!((grid.spacing - 1.1).abs() < 1e-6);
        assert!((grid.half_extent - 1.65).abs() < 1e-5);
        // 4 lines per axis
        assert_eq!(grid.lines.len(), 8);

        for [a, b] in &grid.lines {
            assert_eq!(a.y, 0.0);
            assert_eq!(b.y, 0.0);
        }
        // Last line lands on the far edge
        let [a, _] = grid.lines[grid.lines.len() - 2];
        assert!((a.x - grid.half_extent).abs() < 1e-5);
    }

    #[test]
    fn test_grid_grows_with_rings() {
        let grid = GroundGrid::new(2.0, 6.0, 1.1);
        assert_eq!(grid.lines.len(), 2 * 8);
        assert!((grid.half_extent - 3.5 * 2.2).abs() < 1e-4);
    }

    #[test]
    fn test_empty_grid() {
        assert!(GroundGrid::new(0.0, 0.0, 1.1).lines.is_empty());
    }

    #[test]
    fn test_lights_scale_with_scene() {
        let small = LightRig::new(1.0);
        let large = LightRig::new(10.0);
        assert_eq!(large.key.position, small.key.position * 10.0);
        assert!(large.key.position.y > 0.0);
    }
}
