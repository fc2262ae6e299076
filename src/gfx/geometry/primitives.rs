//! # Primitive Shape Generation
//!
//! Unit cube and UV sphere generation. Both shapes carry outward normals and
//! texture coordinates.

use super::GeometryData;
use std::f32::consts::PI;

/// Generate a unit cube centered at the origin
///
/// Returns a cube with vertices from -0.5 to 0.5 on all axes. Every face has
/// its own four vertices so normals stay flat, and UVs run 0 to 1 per face.
pub fn generate_cube() -> GeometryData {
    let mut data = GeometryData::new();

    // (normal, u axis, v axis) per face; u x v == normal keeps winding CCW
    let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
    ];
    let quad = [[0.0f32, 0.0f32], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

    for (normal, u_axis, v_axis) in faces {
        let base = data.vertices.len() as u32;
        for [u, v] in quad {
            let position = [0, 1, 2].map(|i| {
                0.5 * normal[i] + (u - 0.5) * u_axis[i] + (v - 0.5) * v_axis[i]
            });
            data.vertices.push(position);
            data.normals.push(normal);
            data.tex_coords.push([u, v]);
        }
        data.indices
            .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }

    data
}

/// Generate a UV sphere centered at the origin.
///
/// Rings run from the north pole (`+y`) to the south pole. Each ring repeats
/// its first vertex at `u = 1` so the texture seam stays sharp. Resolution is
/// clamped to at least 3 segments and 2 rings.
pub fn generate_sphere(
    radius: f32,
    longitude_segments: u32,
    latitude_segments: u32,
) -> GeometryData {
    let segments = longitude_segments.max(3);
    let rings = latitude_segments.max(2);
    let stride = segments + 1;
    let mut data = GeometryData::new();

    for ring in 0..=rings {
        let v = ring as f32 / rings as f32;
        let (sin_theta, cos_theta) = (v * PI).sin_cos();

        for segment in 0..=segments {
            let u = segment as f32 / segments as f32;
            let (sin_phi, cos_phi) = (u * 2.0 * PI).sin_cos();
            let normal = [sin_theta * cos_phi, cos_theta, sin_theta * sin_phi];

            data.vertices.push(normal.map(|c| c * radius));
            data.normals.push(normal);
            data.tex_coords.push([u, v]);
        }
    }

    for ring in 0..rings {
        for segment in 0..segments {
            let top = ring * stride + segment;
            let bottom = top + stride;
            data.indices
                .extend_from_slice(&[top, bottom, top + 1, bottom, bottom + 1, top + 1]);
        }
    }

    data
}
