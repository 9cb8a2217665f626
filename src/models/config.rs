use equirect_resample::{ResampleStrategy, DEFAULT_MAX_STRETCH};
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};

/// Environment variable naming a config file when `--config` is absent
pub const CONFIG_ENV: &str = "PANORAMA_CONFIG";

/// Defaults for a run, loaded from an optional YAML file.
///
/// Command-line flags override every field.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PanoramaConfig {
    /// Resampling strategy name (`nearest`, `box` or `geodesic`)
    #[serde(default, deserialize_with = "deserialize_strategy")]
    pub strategy: ResampleStrategy,

    /// Where the downsampled image is written
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Cap on the geodesic kernel's horizontal stretch near the poles
    #[serde(default = "default_max_stretch")]
    pub max_stretch: f32,
}

fn default_output() -> PathBuf {
    PathBuf::from("output.ppm")
}

fn default_max_stretch() -> f32 {
    DEFAULT_MAX_STRETCH
}

fn deserialize_strategy<'de, D>(deserializer: D) -> Result<ResampleStrategy, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    name.parse().map_err(serde::de::Error::custom)
}

impl PanoramaConfig {
    /// Load configuration from `path`, or from [`CONFIG_ENV`] when `path` is
    /// `None`. A missing or unreadable file falls back to defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match std::env::var_os(CONFIG_ENV) {
                Some(path) => PathBuf::from(path),
                None => return Self::default(),
            },
        };

        match std::fs::read_to_string(&path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        strategy = %config.strategy,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), %e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), %e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }
}

impl Default for PanoramaConfig {
    fn default() -> Self {
        Self {
            strategy: ResampleStrategy::default(),
            output: default_output(),
            max_stretch: DEFAULT_MAX_STRETCH,
        }
    }
}
