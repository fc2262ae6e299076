//! # Error Types
//!
//! Errors surfaced synchronously by bounding-volume tracking, arrangement and
//! model loading. Nothing in this crate retries: every failure here is
//! deterministic for a given input.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while measuring, arranging or loading objects.
#[derive(Error, Debug)]
pub enum LayoutError {
    /// The object has no renderable geometry (e.g. an animation-only asset).
    ///
    /// Callers should reject the asset rather than display a zero-size box.
    #[error("object '{name}' has no mesh geometry")]
    NoGeometry { name: String },

    /// The model file could not be parsed.
    #[error("failed to load model '{}': {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: tobj::LoadError,
    },

    /// An object index did not refer to an object in the scene.
    #[error("object index {0} is out of range")]
    ObjectIndex(usize),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Non-fatal conditions noticed while arranging.
///
/// These are recorded on the [`Arrangement`](crate::gfx::layout::Arrangement)
/// and logged; they never abort the operation.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrangeWarning {
    /// `arrange` was called with no objects; the result is all zeros.
    EmptyCollection,
    /// The object's largest dimension is zero, so it was placed with a scale
    /// factor of 1 instead of dividing by zero.
    DegenerateSize { index: usize, name: String },
}

impl std::fmt::Display for ArrangeWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArrangeWarning::EmptyCollection => write!(f, "nothing to arrange"),
            ArrangeWarning::DegenerateSize { index, name } => {
                write!(f, "object {} ('{}') has zero size", index, name)
            }
        }
    }
}
