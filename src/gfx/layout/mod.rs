//! # Scene Layout
//!
//! Deterministic placement of loaded objects on the ground plane.
//!
//! - [`spiral`] - the square-spiral cell sequence
//! - [`arranger`] - unit-size normalization and placement along the spiral
//! - [`helpers`] - ground grid and lights sized to the resulting layout
//!
//! ## Usage
//!
//! ```rust
//! use stage_layout::gfx::geometry::generate_cube;
//! use stage_layout::gfx::layout::arrange;
//! use stage_layout::gfx::scene::Object;
//!
//! let mut objects = vec![
//!     Object::new("a", vec![generate_cube().to_mesh()]),
//!     Object::new("b", vec![generate_cube().to_mesh()]),
//! ];
//! let arrangement = arrange(&mut objects, false).unwrap();
//! assert_eq!(arrangement.unit_size, 1.0);
//! assert_eq!(arrangement.overall_size, 1.0);
//! ```

pub mod arranger;
pub mod helpers;
pub mod spiral;

pub use arranger::{arrange, arrange_with, place_next, Arrangement, Placement};
pub use helpers::{GroundGrid, Light, LightRig, StageHelpers};
pub use spiral::{SpiralCell, SpiralWalk};
