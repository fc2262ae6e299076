// src/lib.rs
//! Stage Layout
//!
//! Bounding-volume tracking and deterministic, overlap-free spiral
//! arrangement of 3D models for scene editors.
//!
//! ```rust
//! use stage_layout::prelude::*;
//!
//! let mut scene = Scene::new(SceneConfig::default());
//! scene.add_object_from_geometry("ball", &generate_sphere(0.5, 16, 8)).unwrap();
//! scene.add_object_from_geometry("box", &generate_cube()).unwrap();
//!
//! let (unit_size, overall_size) = scene.framing();
//! assert!(unit_size > 0.0 && overall_size >= unit_size);
//! ```

pub mod config;
pub mod error;
pub mod gfx;
pub mod prelude;

pub use error::{LayoutError, Result};
