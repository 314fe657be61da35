use serde::Deserialize;
use std::path::Path;

use crate::camera::Camera;
use crate::color::Color;
use crate::error::SceneError;
use crate::material::Material;
use crate::object::{Object, Sphere};
use crate::render::RenderSettings;
use crate::scene::Scene;
use crate::tracer::DEFAULT_MAX_DEPTH;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid scene: {0}")]
    Scene(#[from] SceneError),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f64; 3],
    pub look_at: [f64; 3],
    pub up: [f64; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0., 0., 0.],
            look_at: [0., 0., 1.],
            up: [0., 1., 0.],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SphereConfig {
    pub center: [f64; 3],
    pub radius: f64,
    pub color: Color,
    #[serde(default)]
    pub reflective: bool,
    #[serde(default)]
    pub reflectivity: f64,
}

impl SphereConfig {
    fn diffuse(center: [f64; 3], radius: f64, color: [u8; 3]) -> Self {
        Self {
            center,
            radius,
            color: color.into(),
            reflective: false,
            reflectivity: 0.,
        }
    }

    fn mirror(center: [f64; 3], radius: f64, color: [u8; 3], reflectivity: f64) -> Self {
        Self {
            reflective: true,
            reflectivity,
            ..Self::diffuse(center, radius, color)
        }
    }

    pub fn build(&self) -> Result<Sphere, SceneError> {
        let material = if self.reflective {
            Material::reflective(self.color, self.reflectivity)
        } else {
            Material::diffuse(self.color)
        };

        Sphere::new(self.center.into(), self.radius, material)
    }
}

/// Everything a render pass needs, as read from YAML. Missing keys fall back
/// to the built-in demo scene.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: usize,
    pub height: usize,
    pub max_depth: i32,
    pub light_direction: [f64; 3],
    pub camera: CameraConfig,
    pub spheres: Vec<SphereConfig>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            max_depth: DEFAULT_MAX_DEPTH,
            light_direction: [-1., -1., 1.],
            camera: CameraConfig::default(),
            spheres: vec![
                SphereConfig::diffuse([0., 0., 500.], 100., [255, 0, 0]),
                SphereConfig::mirror([-220., 40., 600.], 90., [200, 200, 220], 0.7),
                SphereConfig::diffuse([200., -30., 420.], 60., [40, 200, 80]),
                SphereConfig::mirror([60., 160., 700.], 80., [230, 200, 60], 0.4),
                SphereConfig::diffuse([0., -10_100., 500.], 10_000., [120, 120, 140]),
            ],
        }
    }
}

impl RenderConfig {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let config: RenderConfig = serde_yaml::from_str(&content)?;

        log::info!(
            "loaded {} spheres from {}",
            config.spheres.len(),
            path.display()
        );
        Ok(config)
    }

    pub fn settings(&self) -> Result<RenderSettings, SceneError> {
        Ok(RenderSettings::new(self.width, self.height, self.light_direction.into())?
            .with_max_depth(self.max_depth))
    }

    pub fn camera(&self) -> Result<Camera, SceneError> {
        let c = &self.camera;
        Camera::new(c.position.into(), c.look_at.into(), c.up.into())
    }

    pub fn scene(&self) -> Result<Scene, SceneError> {
        self.spheres
            .iter()
            .map(|s| s.build().map(|s| Box::new(s) as Box<dyn Object>))
            .collect()
    }
}
