use crate::{
    camera::OrbitCamera,
    config::Tessellation,
    entities::{
        polyline::PolyLine,
        primitive::Primitive,
        skybox::SkyBox,
        sphere::{Sphere, SphereLighting},
    },
    error::Result,
    primitives::color::ColorAlpha,
    render::{
        registry::{PrimitiveKind, SharedResourceRegistry},
        shared::SharedRenderResource,
    },
    resources::{ResourceDir, SceneTextures},
    simulation::SceneState,
};
use nalgebra::Matrix4;

/// Everything the scene can put on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneItem {
    Sky,
    PrimaryAxis,
    SatelliteAxis,
    Orbit,
    Primary,
    Satellite,
}

impl SceneItem {
    pub fn kind(self) -> PrimitiveKind {
        match self {
            SceneItem::Sky => PrimitiveKind::SkyBox,
            SceneItem::PrimaryAxis | SceneItem::SatelliteAxis | SceneItem::Orbit => {
                PrimitiveKind::PolyLine
            }
            SceneItem::Primary | SceneItem::Satellite => PrimitiveKind::Sphere,
        }
    }
}

/// One step of a frame's draw plan. `transform` is the view-projection matrix the item is drawn
/// with; the sky gets one without camera translation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCommand {
    pub item: SceneItem,
    pub transform: Matrix4<f32>,
}

pub struct Scene {
    sky: SkyBox,
    primary: Sphere,
    satellite: Sphere,
    primary_axis: PolyLine,
    satellite_axis: PolyLine,
    orbit: PolyLine,
    registry: SharedResourceRegistry<SharedRenderResource>,
}

impl Scene {
    /// Builds the scene objects. No GPU work happens until [`Scene::prepare`].
    pub fn new(textures: SceneTextures, tessellation: &Tessellation, state: &SceneState) -> Self {
        let mut scene = Self {
            sky: SkyBox::new(textures.sky),
            primary: Sphere::new(state.primary.radius, textures.primary),
            satellite: Sphere::new(state.satellite.radius, textures.satellite),
            primary_axis: PolyLine::new(Vec::new(), ColorAlpha::light_red()),
            satellite_axis: PolyLine::new(Vec::new(), ColorAlpha::light_red()),
            orbit: PolyLine::circle(tessellation.orbit_points, ColorAlpha::light_blue()),
            registry: SharedResourceRegistry::new(),
        };

        scene.update(state);
        scene
    }

    /// Creates the shared resources of every primitive kind the scene uses. Calling it again is
    /// a no-op.
    pub fn prepare(
        &mut self,
        gl: &glow::Context,
        resources: &ResourceDir,
        tessellation: &Tessellation,
    ) -> Result<()> {
        self.registry
            .ensure_prepared::<SkyBox>(gl, resources, tessellation)?;
        self.registry
            .ensure_prepared::<PolyLine>(gl, resources, tessellation)?;
        self.registry
            .ensure_prepared::<Sphere>(gl, resources, tessellation)?;
        Ok(())
    }

    pub fn is_prepared(&self) -> bool {
        prepared_kinds()
            .into_iter()
            .all(|kind| self.registry.is_prepared(kind))
    }

    /// Rebuilds every model transform from `state`.
    pub fn update(&mut self, state: &SceneState) {
        self.primary.radius = state.primary.radius;
        self.primary.model_transform = state.primary_transform();

        self.satellite.radius = state.satellite.radius;
        self.satellite.model_transform = state.satellite_transform();

        self.primary_axis.model_transform = self.primary.model_transform;
        self.primary_axis.vertices = self.primary.axis_segment(&OrbitCamera::world_up());

        self.satellite_axis.model_transform = self.satellite.model_transform;
        self.satellite_axis.vertices = self
            .satellite
            .axis_segment(&state.satellite.rotation_axis);

        self.orbit.model_transform = state.orbit_transform();
    }

    /// Ordered draw plan for one frame: sky first, then visible lines, then the bodies.
    pub fn draw_commands(&self, camera: &OrbitCamera, state: &SceneState) -> Vec<DrawCommand> {
        let projection = camera.projection_transform();
        let view_projection = projection * camera.view_transform();

        let mut commands = vec![DrawCommand {
            item: SceneItem::Sky,
            transform: projection * camera.sky_view_transform(),
        }];

        let lines = [
            (SceneItem::PrimaryAxis, state.primary.show_axis),
            (SceneItem::SatelliteAxis, state.satellite.show_axis),
            (SceneItem::Orbit, state.satellite.orbit.visible),
        ];

        commands.extend(
            lines
                .into_iter()
                .filter(|&(_, visible)| visible)
                .map(|(item, _)| item)
                .chain([SceneItem::Primary, SceneItem::Satellite])
                .map(|item| DrawCommand {
                    item,
                    transform: view_projection,
                }),
        );

        commands
    }

    /// Executes the draw plan. Items whose kind has not been prepared are skipped.
    pub fn draw(&self, gl: &glow::Context, camera: &OrbitCamera, state: &SceneState) {
        let lighting = SphereLighting {
            camera_position: camera.position(),
            light: state.light,
            ignore_textures: state.ignore_textures,
        };

        for command in self.draw_commands(camera, state) {
            let Some(resource) = self.registry.get(command.item.kind()) else {
                log::debug!("Skipping {:?}, its resources are not prepared", command.item);
                continue;
            };

            match command.item {
                SceneItem::Sky => self.sky.draw(gl, resource, &command.transform),
                SceneItem::PrimaryAxis => {
                    self.primary_axis.draw(gl, resource, &command.transform)
                }
                SceneItem::SatelliteAxis => {
                    self.satellite_axis.draw(gl, resource, &command.transform)
                }
                SceneItem::Orbit => self.orbit.draw(gl, resource, &command.transform),
                SceneItem::Primary => {
                    self.primary
                        .draw(gl, resource, &command.transform, &lighting)
                }
                SceneItem::Satellite => {
                    self.satellite
                        .draw(gl, resource, &command.transform, &lighting)
                }
            }
        }
    }

    pub fn primary(&self) -> &Sphere {
        &self.primary
    }

    pub fn satellite(&self) -> &Sphere {
        &self.satellite
    }

    pub fn orbit(&self) -> &PolyLine {
        &self.orbit
    }

    pub fn primary_axis(&self) -> &PolyLine {
        &self.primary_axis
    }

    pub fn satellite_axis(&self) -> &PolyLine {
        &self.satellite_axis
    }
}

/// Kinds that [`Scene::prepare`] creates, in preparation order.
pub fn prepared_kinds() -> [PrimitiveKind; 3] {
    [SkyBox::KIND, PolyLine::KIND, Sphere::KIND]
}
