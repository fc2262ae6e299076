//! # Graphics Module
//!
//! Geometry-side building blocks of the editor: bounding volumes, scene
//! objects, layout and picking. Nothing here talks to a GPU; the render layer
//! consumes the transforms, volumes and instance data produced here.
//!
//! ## Architecture Overview
//!
//! - **Bounds** ([`bounds`]) - AABBs, bounding volumes, corners and selection boxes
//! - **Geometry** ([`geometry`]) - unit primitives and the primitive-builder seam
//! - **Layout** ([`layout`]) - spiral arrangement, grid and lights
//! - **Picking** ([`picking`]) - screen rays and closest-hit selection
//! - **Scene** ([`scene`]) - objects, transforms and the scene container
//!
//! ## Data Flow
//!
//! ```text
//! load object -> local bounds -> unit size -> spiral cell + scale
//!             -> world bounds -> selection boxes / grid / lights
//! ```

pub mod bounds;
pub mod geometry;
pub mod layout;
pub mod picking;
pub mod scene;

// Re-export commonly used types
pub use bounds::{Aabb, BoundingVolume, GeometryProvider};
pub use layout::{arrange, Arrangement, SpiralCell};
pub use scene::{Object, Scene};
