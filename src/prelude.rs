//! # Stage Layout Prelude
//!
//! Commonly used types in one import:
//!
//! ```rust
//! use stage_layout::prelude::*;
//! ```

pub use crate::config::{ArrangeConfig, SceneConfig};
pub use crate::error::{ArrangeWarning, LayoutError};

pub use crate::gfx::bounds::{
    corner_markers, corners, recalculate, selection_box_instance, Aabb, BoundingVolume, Color,
    GeometryProvider, SelectionBox,
};
pub use crate::gfx::geometry::{
    generate_cube, generate_sphere, GeometryData, MeshPrimitives, PrimitiveBuilder,
};
pub use crate::gfx::layout::{arrange, arrange_with, Arrangement, Placement, SpiralCell};
pub use crate::gfx::picking::{pick_object, screen_to_ray, Ray};
pub use crate::gfx::scene::{Object, Scene, Transform, TransformSink};

// Re-export common external dependencies
pub use cgmath::{Matrix4, Vector3};
