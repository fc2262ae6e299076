//! # Scene Management Module
//!
//! The editor's scene: loaded objects, their arrangement, selection state and
//! the layout-dependent helpers (grid, lights).
//!
//! ## Key Components
//!
//! - [`Scene`] - owns objects, selection and helpers; entry point for arranging
//! - [`Object`] - named meshes plus a transform
//! - [`Transform`] / [`TransformSink`] - decomposed transform and the write seam
//! - [`Vertex3D`] - GPU-compatible vertex layout
//!
//! ## Usage
//!
//! ```rust
//! use stage_layout::config::SceneConfig;
//! use stage_layout::gfx::geometry::generate_cube;
//! use stage_layout::gfx::scene::Scene;
//!
//! let mut scene = Scene::new(SceneConfig::default());
//! scene.add_object_from_geometry("crate", &generate_cube()).unwrap();
//! scene.add_object_from_geometry("crate", &generate_cube()).unwrap();
//!
//! assert_eq!(scene.get_object_names(), vec!["crate", "crate (1)"]);
//! assert_eq!(scene.framing(), (1.0, 1.0));
//! ```

pub mod object;
pub mod scene;
pub mod transform;
pub mod vertex;

// Re-export main types
pub use object::{Mesh, Object};
pub use scene::{Scene, SceneStatistics};
pub use transform::{Transform, TransformSink};
pub use vertex::Vertex3D;
