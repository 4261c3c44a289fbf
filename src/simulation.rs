//! Animation state of the two bodies and the model transforms derived from it.
//!
//! Angles are stored in degrees, as they are presented in the control panel. Transforms are
//! rebuilt from these parameters every frame, nothing accumulates in matrices.

use crate::math::{affine::builder::TransformBuilder, angle};
use nalgebra::{Matrix4, Vector3};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Light {
    pub direction: Vector3<f32>,
    pub color: Vector3<f32>,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            direction: Vector3::new(1.0, 1.0, 1.0),
            color: Vector3::new(1.0, 1.0, 1.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimaryBody {
    pub radius: f32,
    pub angle: f32,
    /// Degrees per second.
    pub rotation_speed: f32,
    pub show_axis: bool,
}

impl Default for PrimaryBody {
    fn default() -> Self {
        Self {
            radius: 1.0,
            angle: 0.0,
            rotation_speed: 1.35 * 90.0,
            show_axis: true,
        }
    }
}

/// Ellipse in the XZ plane, tilted by `pitch` around X and then by `roll` around Z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Orbit {
    pub radius_x: f32,
    pub radius_z: f32,
    /// Degrees.
    pub pitch: f32,
    /// Degrees.
    pub roll: f32,
    /// Radians, unbounded.
    pub phase: f32,
    /// Radians per second.
    pub traverse_speed: f32,
    pub visible: bool,
}

impl Orbit {
    fn tilt(&self) -> TransformBuilder {
        TransformBuilder::new()
            .rotate(self.pitch.to_radians(), Vector3::x())
            .rotate(self.roll.to_radians(), Vector3::z())
    }

    /// Position on the untilted ellipse at the current phase.
    pub fn offset(&self) -> Vector3<f32> {
        Vector3::new(
            self.radius_x * self.phase.sin(),
            0.0,
            self.radius_z * self.phase.cos(),
        )
    }

    /// Maps the unit circle onto the tilted ellipse.
    pub fn transform(&self) -> Matrix4<f32> {
        self.tilt().scale(self.radius_x, 1.0, self.radius_z).build()
    }
}

impl Default for Orbit {
    fn default() -> Self {
        Self {
            radius_x: 7.0,
            radius_z: 3.0,
            pitch: 11.0,
            roll: 18.0,
            phase: 0.0,
            traverse_speed: 1.0,
            visible: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Satellite {
    pub radius: f32,
    pub angle: f32,
    /// Degrees per second.
    pub rotation_speed: f32,
    pub rotation_axis: Vector3<f32>,
    pub show_axis: bool,
    pub orbit: Orbit,
}

impl Default for Satellite {
    fn default() -> Self {
        Self {
            radius: 0.5,
            angle: 0.0,
            rotation_speed: 11.0 * 90.0,
            rotation_axis: Vector3::new(0.5, 1.0, 0.05),
            show_axis: true,
            orbit: Orbit::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneState {
    pub primary: PrimaryBody,
    pub satellite: Satellite,
    pub light: Light,
    pub ignore_textures: bool,
}

impl SceneState {
    pub fn advance(&mut self, delta_time: f32) {
        self.primary.angle =
            angle::wrap_degrees(self.primary.angle + delta_time * self.primary.rotation_speed);
        self.satellite.angle = angle::wrap_degrees(
            self.satellite.angle + delta_time * self.satellite.rotation_speed,
        );
        self.satellite.orbit.phase += delta_time * self.satellite.orbit.traverse_speed;
    }

    pub fn primary_transform(&self) -> Matrix4<f32> {
        TransformBuilder::new()
            .rotate(self.primary.angle.to_radians(), Vector3::y())
            .build()
    }

    /// Satellite center on the untilted orbit.
    pub fn satellite_offset(&self) -> Vector3<f32> {
        self.satellite.orbit.offset()
    }

    pub fn orbit_transform(&self) -> Matrix4<f32> {
        self.satellite.orbit.transform()
    }

    /// Tilts the orbit, moves the satellite along it and spins it around its own axis. The spin
    /// is the innermost step so it never moves the satellite's center.
    pub fn satellite_transform(&self) -> Matrix4<f32> {
        let orbit = &self.satellite.orbit;
        let offset = self.satellite_offset();

        orbit
            .tilt()
            .translate(Vector3::new(offset.x, 0.0, 0.0))
            .translate(Vector3::new(0.0, 0.0, offset.z))
            .rotate(
                self.satellite.angle.to_radians(),
                self.satellite.rotation_axis,
            )
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Point3;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn angles_stay_wrapped_after_many_steps() {
        let mut state = SceneState::default();
        state.primary.rotation_speed = 3600.0;
        state.satellite.rotation_speed = 1234.5;

        for step in 0..2000 {
            state.advance(0.001 + (step % 7) as f32 * 0.37);

            assert!((0.0..360.0).contains(&state.primary.angle));
            assert!((0.0..360.0).contains(&state.satellite.angle));
        }
    }

    #[test]
    fn single_large_step_still_wraps() {
        let mut state = SceneState::default();
        state.advance(1000.0);

        assert!((0.0..360.0).contains(&state.primary.angle));
        assert_relative_eq!(state.primary.angle, (121.5f32 * 1000.0) % 360.0, epsilon = 1e-2);
    }

    #[test]
    fn phase_is_not_wrapped() {
        let mut state = SceneState::default();
        state.satellite.orbit.traverse_speed = 5.0;

        for _ in 0..10 {
            state.advance(1.0);
        }

        assert_relative_eq!(state.satellite.orbit.phase, 50.0, epsilon = 1e-4);
    }

    #[test]
    fn quarter_phase_puts_satellite_on_major_axis() {
        let mut state = SceneState::default();
        state.satellite.orbit = Orbit {
            radius_x: 7.0,
            radius_z: 3.0,
            traverse_speed: 1.0,
            phase: 0.0,
            ..Orbit::default()
        };

        state.advance(FRAC_PI_2);

        assert_relative_eq!(
            state.satellite.orbit.offset(),
            Vector3::new(7.0, 0.0, 0.0),
            epsilon = 1e-5
        );
    }

    #[test]
    fn satellite_center_lies_on_orbit_path() {
        let mut state = SceneState::default();

        for _ in 0..25 {
            state.advance(0.13);

            let phase = state.satellite.orbit.phase;
            let center = state.satellite_transform().transform_point(&Point3::origin());
            let on_path = state
                .orbit_transform()
                .transform_point(&Point3::new(phase.sin(), 0.0, phase.cos()));

            assert_relative_eq!(center, on_path, epsilon = 1e-4);
        }
    }

    #[test]
    fn spin_does_not_move_satellite() {
        let mut state = SceneState::default();
        let center = state.satellite_transform().transform_point(&Point3::origin());

        state.satellite.angle = 123.0;
        let spun = state.satellite_transform().transform_point(&Point3::origin());

        assert_relative_eq!(center, spun, epsilon = 1e-5);
    }

    #[test]
    fn untilted_orbit_is_axis_aligned_ellipse() {
        let mut state = SceneState::default();
        state.satellite.orbit.pitch = 0.0;
        state.satellite.orbit.roll = 0.0;

        let transform = state.orbit_transform();

        assert_relative_eq!(
            transform.transform_point(&Point3::new(1.0, 0.0, 0.0)),
            Point3::new(7.0, 0.0, 0.0)
        );
        assert_relative_eq!(
            transform.transform_point(&Point3::new(0.0, 0.0, 1.0)),
            Point3::new(0.0, 0.0, 3.0)
        );
    }

    #[test]
    fn primary_spins_around_world_up() {
        let mut state = SceneState::default();
        state.primary.angle = 90.0;

        let transform = state.primary_transform();

        assert_relative_eq!(
            transform.transform_point(&Point3::new(1.0, 0.0, 0.0)),
            Point3::new(0.0, 0.0, -1.0),
            epsilon = 1e-6
        );
        assert_relative_eq!(
            transform.transform_point(&Point3::new(0.0, 2.0, 0.0)),
            Point3::new(0.0, 2.0, 0.0),
            epsilon = 1e-6
        );
    }

    #[test]
    fn same_steps_give_same_scene() {
        let mut first = SceneState::default();
        let mut second = SceneState::default();

        for delta_time in [0.016, 0.033, 0.5, 0.001] {
            first.advance(delta_time);
            second.advance(delta_time);
        }

        assert_eq!(first, second);
        assert_eq!(first.satellite_transform(), second.satellite_transform());
    }
}
