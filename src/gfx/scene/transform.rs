//! # Object Transforms
//!
//! Decomposed translation / rotation / scale transform and the
//! [`TransformSink`] seam the arranger writes through.

use cgmath::{Matrix4, Quaternion, Vector3};

/// An affine transform stored as its components.
///
/// Keeping the parts separate lets property inspectors show and edit each
/// field directly; [`Transform::matrix`] composes them as `T * R * S`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vector3<f32>,
    pub rotation: Quaternion<f32>,
    pub scale: Vector3<f32>,
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            translation: Vector3::new(0.0, 0.0, 0.0),
            rotation: Quaternion::new(1.0, 0.0, 0.0, 0.0),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }

    /// Translation combined with a uniform scale and no rotation.
    pub fn from_translation_scale(translation: Vector3<f32>, scale: f32) -> Self {
        Self {
            translation,
            rotation: Quaternion::new(1.0, 0.0, 0.0, 0.0),
            scale: Vector3::new(scale, scale, scale),
        }
    }

    pub fn matrix(&self) -> Matrix4<f32> {
        let t = Matrix4::from_translation(self.translation);
        let r = Matrix4::from(self.rotation);
        let s = Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z);
        t * r * s // Order matters: T * R * S
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Something whose world transform can be read and replaced.
///
/// `set_transform` replaces translation, rotation and scale in one call; an
/// implementation must never expose a state where only some of them changed.
pub trait TransformSink {
    fn world_transform(&self) -> Matrix4<f32>;

    /// Replace the whole transform. `None` rotation means "no rotation".
    fn set_transform(
        &mut self,
        translation: Vector3<f32>,
        rotation: Option<Quaternion<f32>>,
        scale: Vector3<f32>,
    );

    fn reset_transform(&mut self) {
        self.set_transform(Vector3::new(0.0, 0.0, 0.0), None, Vector3::new(1.0, 1.0, 1.0));
    }
}
