//! Camera configuration files.
//!
//! A config is a small YAML document. Every field is optional and falls back
//! to [`Camera::default`] / [`Viewport::default`]:
//!
//! ```yaml
//! position: [0.0, 2.0, 8.0]
//! target: [0.0, 0.0, 0.0]
//! up: [0.0, 1.0, 0.0]
//! fov_deg: 60.0
//! near: 0.1
//! far: 250.0
//! viewport:
//!   width: 1920
//!   height: 1080
//! ```
//!
//! When `aspect` is omitted and a viewport is given, the aspect ratio follows
//! the viewport.

use std::path::{Path, PathBuf};

use prism_math::{Camera, Vec3, Viewport};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Result type for config loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors from reading or validating a camera config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error reading the file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Config file not found.
    #[error("camera config not found: {path}")]
    NotFound {
        /// Path that was searched.
        path: PathBuf,
    },

    /// A field is out of range.
    #[error("invalid camera config: {reason}")]
    Invalid {
        /// What is wrong.
        reason: String,
    },
}

impl ConfigError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid {
            reason: reason.into(),
        }
    }
}

/// Camera plus the viewport it renders to.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraConfig {
    /// Resolved camera.
    pub camera: Camera,
    /// Target viewport.
    pub viewport: Viewport,
}

impl CameraConfig {
    /// Loads a config from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }

        debug!(path = %path.display(), "Loading camera config");
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parses a config from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        // an empty document is all defaults
        let raw: RawCameraConfig = if yaml.trim().is_empty() {
            RawCameraConfig::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        Self::from_raw(raw)
    }

    /// Loads `path` when given, otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> ConfigResult<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => {
                debug!("No camera config given, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn from_raw(raw: RawCameraConfig) -> ConfigResult<Self> {
        let defaults = Camera::default();

        let viewport = match raw.viewport {
            Some(v) => Viewport::new(v.width, v.height),
            None => Viewport::default(),
        };
        if viewport.width == 0 || viewport.height == 0 {
            return Err(ConfigError::invalid(format!(
                "viewport must be non-empty, got {}x{}",
                viewport.width, viewport.height
            )));
        }

        let aspect = match (raw.aspect, raw.viewport) {
            (Some(a), _) => a,
            (None, Some(_)) => viewport.aspect(),
            (None, None) => defaults.aspect,
        };

        let camera = Camera {
            position: raw.position.map(Vec3::from).unwrap_or(defaults.position),
            target: raw.target.map(Vec3::from).unwrap_or(defaults.target),
            up: raw.up.map(Vec3::from).unwrap_or(defaults.up),
            fov_y: raw.fov_deg.map(f32::to_radians).unwrap_or(defaults.fov_y),
            aspect,
            near: raw.near.unwrap_or(defaults.near),
            far: raw.far.unwrap_or(defaults.far),
        };
        validate(&camera)?;

        debug!(
            position = ?camera.position.to_array(),
            target = ?camera.target.to_array(),
            fov_y = camera.fov_y,
            aspect = camera.aspect,
            "Camera config resolved"
        );
        Ok(Self { camera, viewport })
    }
}

fn validate(camera: &Camera) -> ConfigResult<()> {
    if !(camera.near > 0.0) {
        return Err(ConfigError::invalid(format!(
            "near must be positive, got {}",
            camera.near
        )));
    }
    if !(camera.far > camera.near) {
        return Err(ConfigError::invalid(format!(
            "far ({}) must be greater than near ({})",
            camera.far, camera.near
        )));
    }
    if !(camera.fov_y > 0.0 && camera.fov_y < std::f32::consts::PI) {
        return Err(ConfigError::invalid(format!(
            "fov_deg must be in (0, 180), got {}",
            camera.fov_y.to_degrees()
        )));
    }
    if !(camera.aspect > 0.0) {
        return Err(ConfigError::invalid(format!(
            "aspect must be positive, got {}",
            camera.aspect
        )));
    }

    let forward = camera.position - camera.target;
    if forward.length_squared() == 0.0 {
        return Err(ConfigError::invalid("position and target coincide"));
    }
    if forward.cross(camera.up).length_squared() == 0.0 {
        return Err(ConfigError::invalid("up is parallel to the view direction"));
    }
    Ok(())
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCameraConfig {
    position: Option<[f32; 3]>,
    target: Option<[f32; 3]>,
    up: Option<[f32; 3]>,
    fov_deg: Option<f32>,
    aspect: Option<f32>,
    near: Option<f32>,
    far: Option<f32>,
    viewport: Option<RawViewport>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct RawViewport {
    width: u32,
    height: u32,
}
