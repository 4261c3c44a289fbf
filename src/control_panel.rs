use nalgebra::Vector3;
use twobody::{
    camera::OrbitCamera,
    simulation::{Orbit, SceneState},
};

const WINDOW_SIZE: [f32; 2] = [445.0, 645.0];
const SIZE_RANGE: (f32, f32) = (0.1, 10.0);
const ANGLE_RANGE: (f32, f32) = (0.0, 360.0);
const ROTATION_SPEED_RANGE: (f32, f32) = (0.0, 20.0 * 180.0);
const TRAVERSE_SPEED_RANGE: (f32, f32) = (0.0, 5.0);
const ORBIT_RADIUS_RANGE: (f32, f32) = (1.0, 20.0);
const ORBIT_TILT_RANGE: (f32, f32) = (0.0, 180.0);
const UNIT_DRAG_SPEED: f32 = 0.01;

pub struct ControlPanel {
    visible: bool,
}

impl ControlPanel {
    pub fn new() -> Self {
        Self { visible: true }
    }

    pub fn build_ui(&mut self, ui: &imgui::Ui, camera: &mut OrbitCamera, state: &mut SceneState) {
        if !self.visible {
            return;
        }

        let mut visible = self.visible;
        ui.window("Scene settings")
            .size(WINDOW_SIZE, imgui::Condition::Once)
            .position([0.0, 0.0], imgui::Condition::FirstUseEver)
            .opened(&mut visible)
            .build(|| {
                let framerate = ui.io().framerate;
                ui.text(format!(
                    "Application average {:.3} ms/frame ({:.1} FPS)",
                    1000.0 / framerate,
                    framerate
                ));

                ui.checkbox("Ignore textures", &mut state.ignore_textures);
                drag_unit_vector(ui, "Light direction", &mut state.light.direction);

                let mut light_color: [f32; 3] = state.light.color.into();
                if ui.color_edit3("Light color", &mut light_color) {
                    state.light.color = Vector3::from(light_color);
                }

                self.camera_control(ui, camera);
                self.primary_control(ui, state);
                self.satellite_control(ui, state);
            });
        self.visible = visible;

        camera.normalize();
    }

    fn camera_control(&self, ui: &imgui::Ui, camera: &mut OrbitCamera) {
        if !ui.collapsing_header("Camera", imgui::TreeNodeFlags::DEFAULT_OPEN) {
            return;
        }

        let _token = ui.push_id("camera");
        ui.slider(
            "Camera pitch",
            -OrbitCamera::MAX_PITCH,
            OrbitCamera::MAX_PITCH,
            &mut camera.pitch,
        );
        ui.slider("Camera yaw", ANGLE_RANGE.0, ANGLE_RANGE.1, &mut camera.yaw);
        ui.text("Drag scene holding LMB to rotate camera");

        ui.slider(
            "Camera distance",
            OrbitCamera::MIN_DISTANCE,
            OrbitCamera::MAX_DISTANCE,
            &mut camera.distance,
        );
        ui.text("Use mouse scroll to adjust camera distance");
    }

    fn primary_control(&self, ui: &imgui::Ui, state: &mut SceneState) {
        if !ui.collapsing_header("Earth", imgui::TreeNodeFlags::empty()) {
            return;
        }

        let _token = ui.push_id("primary");
        let primary = &mut state.primary;
        ui.slider("Earth size", SIZE_RANGE.0, SIZE_RANGE.1, &mut primary.radius);
        ui.slider("Earth angle", ANGLE_RANGE.0, ANGLE_RANGE.1, &mut primary.angle);
        ui.slider(
            "Earth rotation speed",
            ROTATION_SPEED_RANGE.0,
            ROTATION_SPEED_RANGE.1,
            &mut primary.rotation_speed,
        );
        ui.checkbox("Show Earth axis", &mut primary.show_axis);
    }

    fn satellite_control(&self, ui: &imgui::Ui, state: &mut SceneState) {
        if !ui.collapsing_header("Moon", imgui::TreeNodeFlags::empty()) {
            return;
        }

        let _token = ui.push_id("satellite");
        let satellite = &mut state.satellite;
        ui.slider("Moon size", SIZE_RANGE.0, SIZE_RANGE.1, &mut satellite.radius);
        ui.slider("Moon angle", ANGLE_RANGE.0, ANGLE_RANGE.1, &mut satellite.angle);
        ui.slider(
            "Moon rotation speed",
            ROTATION_SPEED_RANGE.0,
            ROTATION_SPEED_RANGE.1,
            &mut satellite.rotation_speed,
        );

        self.orbit_control(ui, &mut satellite.orbit);

        ui.checkbox("Show Moon axis", &mut satellite.show_axis);
        drag_unit_vector(ui, "Moon axis", &mut satellite.rotation_axis);
    }

    fn orbit_control(&self, ui: &imgui::Ui, orbit: &mut Orbit) {
        ui.slider(
            "Moon traverse speed",
            TRAVERSE_SPEED_RANGE.0,
            TRAVERSE_SPEED_RANGE.1,
            &mut orbit.traverse_speed,
        );

        ui.checkbox("Show Moon orbit", &mut orbit.visible);
        ui.slider(
            "Orbit radius X",
            ORBIT_RADIUS_RANGE.0,
            ORBIT_RADIUS_RANGE.1,
            &mut orbit.radius_x,
        );
        ui.slider(
            "Orbit radius Z",
            ORBIT_RADIUS_RANGE.0,
            ORBIT_RADIUS_RANGE.1,
            &mut orbit.radius_z,
        );
        ui.slider(
            "Orbit pitch",
            ORBIT_TILT_RANGE.0,
            ORBIT_TILT_RANGE.1,
            &mut orbit.pitch,
        );
        ui.slider(
            "Orbit roll",
            ORBIT_TILT_RANGE.0,
            ORBIT_TILT_RANGE.1,
            &mut orbit.roll,
        );
    }
}

fn drag_unit_vector(ui: &imgui::Ui, label: &str, vector: &mut Vector3<f32>) {
    let mut values: [f32; 3] = (*vector).into();

    if imgui::Drag::new(label)
        .range(-1.0, 1.0)
        .speed(UNIT_DRAG_SPEED)
        .build_array(ui, &mut values)
    {
        *vector = Vector3::from(values);
    }
}
