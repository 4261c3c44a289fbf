//! Model transforms assembled from an ordered list of elementary steps.
//!
//! Steps are folded left to right, every step right-multiplying the accumulated matrix. With
//! column vectors this means a point is transformed by the *last* step first: in
//! `TransformBuilder::new().rotate(a, axis).translate(t)` the point is translated by `t` and the
//! translated point is then rotated.

use super::transforms;
use nalgebra::{Matrix4, Vector3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformStep {
    Translate(Vector3<f32>),
    /// Angle in radians.
    Rotate { angle: f32, axis: Vector3<f32> },
    Scale(Vector3<f32>),
}

impl TransformStep {
    pub fn matrix(&self) -> Matrix4<f32> {
        match *self {
            TransformStep::Translate(vector) => transforms::translate(vector),
            TransformStep::Rotate { angle, axis } => transforms::rotate_axis(axis, angle),
            TransformStep::Scale(factors) => transforms::scale(factors.x, factors.y, factors.z),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransformBuilder {
    steps: Vec<TransformStep>,
}

impl TransformBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(mut self) -> Self {
        self.steps.clear();
        self
    }

    pub fn translate(self, vector: Vector3<f32>) -> Self {
        self.step(TransformStep::Translate(vector))
    }

    pub fn rotate(self, angle: f32, axis: Vector3<f32>) -> Self {
        self.step(TransformStep::Rotate { angle, axis })
    }

    pub fn scale(self, sx: f32, sy: f32, sz: f32) -> Self {
        self.step(TransformStep::Scale(Vector3::new(sx, sy, sz)))
    }

    pub fn step(mut self, step: TransformStep) -> Self {
        self.steps.push(step);
        self
    }

    pub fn steps(&self) -> &[TransformStep] {
        &self.steps
    }

    pub fn build(&self) -> Matrix4<f32> {
        self.steps
            .iter()
            .fold(Matrix4::identity(), |matrix, step| matrix * step.matrix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Point3;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn empty_builder_is_identity() {
        assert_eq!(TransformBuilder::new().build(), Matrix4::identity());
    }

    #[test]
    fn rotate_then_translate_translates_first() {
        let transform = TransformBuilder::new()
            .rotate(FRAC_PI_2, Vector3::y())
            .translate(Vector3::new(1.0, 0.0, 0.0))
            .build();

        assert_relative_eq!(
            transform.transform_point(&Point3::origin()),
            Point3::new(0.0, 0.0, -1.0),
            epsilon = 1e-6
        );
    }

    #[test]
    fn translate_then_rotate_rotates_first() {
        let transform = TransformBuilder::new()
            .translate(Vector3::new(1.0, 0.0, 0.0))
            .rotate(FRAC_PI_2, Vector3::y())
            .build();

        assert_relative_eq!(
            transform.transform_point(&Point3::origin()),
            Point3::new(1.0, 0.0, 0.0),
            epsilon = 1e-6
        );
    }

    #[test]
    fn scale_is_applied_before_earlier_rotation() {
        let transform = TransformBuilder::new()
            .rotate(FRAC_PI_2, Vector3::z())
            .scale(2.0, 1.0, 1.0)
            .build();

        assert_relative_eq!(
            transform.transform_point(&Point3::new(1.0, 0.0, 0.0)),
            Point3::new(0.0, 2.0, 0.0),
            epsilon = 1e-6
        );
    }

    #[test]
    fn reset_discards_previous_steps() {
        let builder = TransformBuilder::new()
            .translate(Vector3::new(4.0, 5.0, 6.0))
            .reset()
            .scale(2.0, 2.0, 2.0);

        assert_eq!(builder.steps().len(), 1);
        assert_relative_eq!(builder.build(), transforms::scale(2.0, 2.0, 2.0));
    }
}
