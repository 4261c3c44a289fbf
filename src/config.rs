use crate::{
    camera::OrbitCamera,
    constants::{
        ORBIT_POINTS, RESOURCE_CANDIDATES, SPHERE_MERIDIANS, SPHERE_PARALLELS, WINDOW_HEIGHT,
        WINDOW_TITLE, WINDOW_WIDTH,
    },
    error::{Error, Result},
    math::geometry::sphere::UvSphere,
    simulation::SceneState,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: String::from(WINDOW_TITLE),
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            vsync: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceConfig {
    /// Directories searched in order for shaders and textures.
    pub candidates: Vec<PathBuf>,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            candidates: RESOURCE_CANDIDATES.iter().map(PathBuf::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tessellation {
    pub parallels: u32,
    pub meridians: u32,
    pub orbit_points: usize,
}

impl Tessellation {
    pub fn sphere(&self) -> Result<UvSphere> {
        UvSphere::new(self.parallels, self.meridians)
    }
}

impl Default for Tessellation {
    fn default() -> Self {
        Self {
            parallels: SPHERE_PARALLELS,
            meridians: SPHERE_MERIDIANS,
            orbit_points: ORBIT_POINTS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub resources: ResourceConfig,
    pub tessellation: Tessellation,
    pub camera: OrbitCamera,
    pub scene: SceneState,
}

impl AppConfig {
    /// Reads the configuration at `path`, falling back to defaults when there is no such file.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(json) => {
                let config = Self::from_json(&json, path)?;
                log::info!("Loaded configuration from {}", path.display());
                Ok(config)
            }
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No {} found, using default configuration", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(Error::FileRead {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn from_json(json: &str, path: &Path) -> Result<Self> {
        let mut config: Self = serde_json::from_str(json).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;

        config.camera.normalize();
        config.tessellation.sphere()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn empty_object_gives_defaults() {
        let config = AppConfig::from_json("{}", Path::new("twobody.json")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let json = r#"{
            "camera": { "distance": 50.0, "yaw": -90.0 },
            "scene": { "satellite": { "orbit": { "radius_x": 10.0 } } },
            "tessellation": { "parallels": 12 }
        }"#;

        let config = AppConfig::from_json(json, Path::new("twobody.json")).unwrap();

        assert_relative_eq!(config.camera.distance, OrbitCamera::MAX_DISTANCE);
        assert_relative_eq!(config.camera.yaw, 270.0);
        assert_relative_eq!(config.camera.pitch, -25.0);
        assert_relative_eq!(config.scene.satellite.orbit.radius_x, 10.0);
        assert_relative_eq!(config.scene.satellite.orbit.radius_z, 3.0);
        assert_eq!(config.tessellation.parallels, 12);
        assert_eq!(config.tessellation.meridians, SPHERE_MERIDIANS);
    }

    #[test]
    fn malformed_json_is_config_error() {
        let result = AppConfig::from_json("{ camera: ", Path::new("broken.json"));
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn coarse_tessellation_is_rejected() {
        let result = AppConfig::from_json(
            r#"{ "tessellation": { "meridians": 2 } }"#,
            Path::new("twobody.json"),
        );
        assert!(matches!(result, Err(Error::InvalidTessellation { .. })));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_or_default(&dir.path().join("none.json")).unwrap();

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn vectors_are_read_as_arrays() {
        let json = r#"{ "scene": { "light": { "direction": [0.0, -1.0, 0.5] } } }"#;
        let config = AppConfig::from_json(json, Path::new("twobody.json")).unwrap();

        assert_relative_eq!(config.scene.light.direction.y, -1.0);
        assert_relative_eq!(config.scene.light.color.x, 1.0);
    }
}
