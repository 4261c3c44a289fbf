use crate::{
    constants::{WINDOW_HEIGHT, WINDOW_WIDTH},
    math::{affine::transforms, angle},
    mouse::MouseState,
    window::Window,
};
use glutin::dpi::PhysicalSize;
use nalgebra::{Matrix3, Matrix4, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Camera circling the origin, controlled by spherical parameters.
///
/// The stored parameters may hold out-of-range values after user input. All derived quantities
/// are computed from [`OrbitCamera::normalized`] and never touch the stored state; call
/// [`OrbitCamera::normalize`] to write the clamped values back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitCamera {
    /// Degrees above the horizon.
    pub pitch: f32,
    /// Degrees around the vertical axis.
    pub yaw: f32,
    pub distance: f32,
    /// Vertical field of view in radians.
    pub fov: f32,
    pub near_plane: f32,
    pub far_plane: f32,
    #[serde(skip, default = "default_aspect_ratio")]
    pub aspect_ratio: f32,
}

fn default_aspect_ratio() -> f32 {
    WINDOW_WIDTH as f32 / WINDOW_HEIGHT as f32
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraBasis {
    pub forward: Vector3<f32>,
    pub right: Vector3<f32>,
    pub up: Vector3<f32>,
}

impl OrbitCamera {
    pub const MIN_DISTANCE: f32 = 1.0;
    pub const MAX_DISTANCE: f32 = 30.0;
    pub const MAX_PITCH: f32 = 0.9 * 90.0;

    const ROTATION_SPEED: f32 = 0.1;
    const SCROLL_SPEED: f32 = 0.75;

    pub fn new(pitch: f32, yaw: f32, distance: f32, fov: f32) -> Self {
        Self {
            pitch,
            yaw,
            distance,
            fov,
            near_plane: 0.1,
            far_plane: 100.0,
            aspect_ratio: default_aspect_ratio(),
        }
    }

    pub fn world_up() -> Vector3<f32> {
        Vector3::y()
    }

    pub fn normalized(&self) -> Self {
        Self {
            distance: self.distance.clamp(Self::MIN_DISTANCE, Self::MAX_DISTANCE),
            pitch: self.pitch.clamp(-Self::MAX_PITCH, Self::MAX_PITCH),
            yaw: angle::wrap_degrees(self.yaw),
            ..*self
        }
    }

    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Unit vector from the eye towards the origin.
    pub fn direction(&self) -> Vector3<f32> {
        let normalized = self.normalized();
        let pitch = normalized.pitch.to_radians();
        let yaw = normalized.yaw.to_radians();

        Vector3::new(pitch.cos() * yaw.cos(), pitch.sin(), pitch.cos() * yaw.sin()).normalize()
    }

    pub fn basis(&self) -> CameraBasis {
        let forward = self.direction();
        let right = Self::world_up().cross(&forward).normalize();
        let up = forward.cross(&right);

        CameraBasis { forward, right, up }
    }

    pub fn position(&self) -> Point3<f32> {
        Point3::from(-self.direction() * self.normalized().distance)
    }

    pub fn view_transform(&self) -> Matrix4<f32> {
        let basis = self.basis();
        let position = self.position();

        transforms::look_at(position + basis.forward, position, basis.up)
    }

    /// View transform without its translation, for geometry that has to stay put when the
    /// camera moves.
    pub fn sky_view_transform(&self) -> Matrix4<f32> {
        let rotation: Matrix3<f32> = self.view_transform().fixed_view::<3, 3>(0, 0).into_owned();
        rotation.to_homogeneous()
    }

    pub fn projection_transform(&self) -> Matrix4<f32> {
        transforms::projection(
            self.fov,
            self.aspect_ratio,
            self.near_plane,
            self.far_plane,
        )
    }

    pub fn set_viewport(&mut self, size: PhysicalSize<u32>) {
        if size.width > 0 && size.height > 0 {
            self.aspect_ratio = size.width as f32 / size.height as f32;
        }
    }

    /// Pointer movement in pixels while dragging.
    pub fn apply_drag(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * Self::ROTATION_SPEED;
        self.pitch -= dy * Self::ROTATION_SPEED;
        self.normalize();
    }

    /// Scroll wheel movement in lines, positive away from the user.
    pub fn apply_scroll(&mut self, delta: f32) {
        self.distance -= delta * Self::SCROLL_SPEED;
        self.normalize();
    }

    pub fn update_from_mouse(&mut self, mouse: &mut MouseState, window: &Window) -> bool {
        let mouse_delta = mouse.take_position_delta();
        let scroll_delta = mouse.take_scroll_delta();

        if window.imgui_using_mouse() {
            return false;
        }

        let mut changed = false;

        if mouse.is_left_button_down() && (mouse_delta.x != 0.0 || mouse_delta.y != 0.0) {
            self.apply_drag(mouse_delta.x as f32, mouse_delta.y as f32);
            changed = true;
        }

        if scroll_delta != 0.0 {
            self.apply_scroll(scroll_delta);
            changed = true;
        }

        changed
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(-25.0, 275.0, 16.0, std::f32::consts::FRAC_PI_4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn normalization_clamps_and_wraps() {
        let camera = OrbitCamera::new(120.0, -30.0, 0.2, 1.0).normalized();

        assert_relative_eq!(camera.pitch, OrbitCamera::MAX_PITCH);
        assert_relative_eq!(camera.yaw, 330.0);
        assert_relative_eq!(camera.distance, OrbitCamera::MIN_DISTANCE);

        let camera = OrbitCamera::new(-200.0, 1080.0, 99.0, 1.0).normalized();

        assert_relative_eq!(camera.pitch, -OrbitCamera::MAX_PITCH);
        assert_relative_eq!(camera.yaw, 0.0);
        assert_relative_eq!(camera.distance, OrbitCamera::MAX_DISTANCE);
    }

    #[test]
    fn normalized_parameters_always_in_range() {
        for pitch in [-1000.0f32, -81.5, -3.0, 0.0, 80.9, 81.0, 500.0] {
            for yaw in [-725.0f32, -0.25, 0.0, 359.9, 360.0, 9999.0] {
                for distance in [-5.0f32, 0.0, 1.0, 15.0, 30.0, 31.0] {
                    let camera = OrbitCamera::new(pitch, yaw, distance, 1.0).normalized();

                    assert!((-81.0..=81.0).contains(&camera.pitch));
                    assert!((0.0..360.0).contains(&camera.yaw));
                    assert!((1.0..=30.0).contains(&camera.distance));

                    let turns = (yaw - camera.yaw) / 360.0;
                    assert_relative_eq!(turns, turns.round(), epsilon = 1e-3);
                }
            }
        }
    }

    #[test]
    fn derived_values_do_not_mutate_camera() {
        let camera = OrbitCamera::new(100.0, 400.0, 50.0, 1.0);
        let copy = camera;

        let _ = camera.view_transform();
        let _ = camera.position();

        assert_eq!(camera, copy);
    }

    #[test]
    fn normalize_writes_back_clamped_values() {
        let mut camera = OrbitCamera::new(100.0, 400.0, 50.0, 1.0);
        camera.normalize();

        assert_eq!(camera, OrbitCamera::new(100.0, 400.0, 50.0, 1.0).normalized());
    }

    #[test]
    fn eye_sits_at_distance_looking_at_origin() {
        let camera = OrbitCamera::default();
        let position = camera.position();

        assert_relative_eq!(position.coords.norm(), 16.0, epsilon = 1e-4);

        let origin_in_view = camera.view_transform().transform_point(&Point3::origin());
        assert_relative_eq!(origin_in_view.x, 0.0, epsilon = 1e-4);
        assert_relative_eq!(origin_in_view.y, 0.0, epsilon = 1e-4);
        assert_relative_eq!(origin_in_view.z, -16.0, epsilon = 1e-4);
    }

    #[test]
    fn level_camera_looks_along_x_at_zero_yaw() {
        let camera = OrbitCamera::new(0.0, 0.0, 10.0, 1.0);

        assert_relative_eq!(camera.direction(), Vector3::x(), epsilon = 1e-6);
        assert_relative_eq!(camera.position(), Point3::new(-10.0, 0.0, 0.0), epsilon = 1e-5);
    }

    #[test]
    fn basis_is_orthonormal_with_positive_up() {
        let basis = OrbitCamera::new(-25.0, 275.0, 16.0, 1.0).basis();

        assert_relative_eq!(basis.right.dot(&basis.forward), 0.0, epsilon = 1e-6);
        assert_relative_eq!(basis.up.dot(&basis.forward), 0.0, epsilon = 1e-6);
        assert_relative_eq!(basis.right.cross(&basis.up), basis.forward, epsilon = 1e-5);
        assert!(basis.up.y > 0.0);
    }

    #[test]
    fn sky_view_has_no_translation() {
        let camera = OrbitCamera::default();
        let sky = camera.sky_view_transform();
        let view = camera.view_transform();

        assert_relative_eq!(sky.fixed_view::<3, 1>(0, 3).norm(), 0.0);
        assert_relative_eq!(
            sky.fixed_view::<3, 3>(0, 0).into_owned(),
            view.fixed_view::<3, 3>(0, 0).into_owned()
        );
        assert_relative_eq!(sky[(3, 3)], 1.0);
    }

    #[test]
    fn drag_and_scroll_are_clamped() {
        let mut camera = OrbitCamera::default();

        camera.apply_drag(50.0, -10_000.0);
        assert_relative_eq!(camera.yaw, 280.0, epsilon = 1e-4);
        assert_relative_eq!(camera.pitch, OrbitCamera::MAX_PITCH);

        camera.apply_scroll(100.0);
        assert_relative_eq!(camera.distance, OrbitCamera::MIN_DISTANCE);

        camera.apply_scroll(-4.0);
        assert_relative_eq!(camera.distance, 4.0);
    }

    #[test]
    fn viewport_sets_aspect_ratio_and_ignores_empty_sizes() {
        let mut camera = OrbitCamera::default();

        camera.set_viewport(PhysicalSize::new(800, 400));
        assert_relative_eq!(camera.aspect_ratio, 2.0);

        camera.set_viewport(PhysicalSize::new(0, 400));
        assert_relative_eq!(camera.aspect_ratio, 2.0);
    }
}
