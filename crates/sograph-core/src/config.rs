//! Configuration for sograph
//!
//! Configuration is read from `config.toml`, located by (in order):
//! an explicit path, `$SOGRAPH_CONFIG_DIR/config.toml`, or
//! `<platform config dir>/sograph/config.toml`. A missing file yields defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GraphError, Result};

pub use types::{Config, GraphConfig, CONFIG_FORMAT_VERSION};

const CONFIG_DIR: &str = "sograph";
const CONFIG_FILE: &str = "config.toml";
pub const CONFIG_DIR_ENV_VAR: &str = "SOGRAPH_CONFIG_DIR";

impl Config {
    /// Resolve the default config path
    pub fn default_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    GraphError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the config from `explicit` if given, else from the default path.
    ///
    /// An explicit path must exist; the default path may be absent.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let path = match Self::default_path() {
            Ok(path) => path,
            Err(e) => {
                tracing::debug!(error = %e, "no config directory, using defaults");
                return Ok(Self::default());
            }
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "config not found, using defaults");
            return Ok(Self::default());
        }

        Self::load(&path)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            GraphError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: Config = toml::from_str(&content)?;

        if config.version > CONFIG_FORMAT_VERSION {
            tracing::warn!(
                version = config.version,
                supported = CONFIG_FORMAT_VERSION,
                "config written by a newer sograph"
            );
        }

        tracing::debug!(
            path = %path.display(),
            policy = %config.graph.readd_policy,
            "loaded config"
        );
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ReaddPolicy;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.version, CONFIG_FORMAT_VERSION);
        assert_eq!(config.graph.readd_policy, ReaddPolicy::Replace);
        assert_eq!(config.graph.default_weight, 0.0);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.graph.readd_policy = ReaddPolicy::Reject;
        config.graph.default_weight = 2.5;
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[graph]\nreadd_policy = \"keep\"\n").unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.version, CONFIG_FORMAT_VERSION);
        assert_eq!(loaded.graph.readd_policy, ReaddPolicy::Keep);
        assert_eq!(loaded.graph.default_weight, 0.0);
    }

    #[test]
    fn test_unknown_policy_is_toml_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[graph]\nreadd_policy = \"merge\"\n").unwrap();

        assert!(matches!(Config::load(&path), Err(GraphError::Toml(_))));
    }

    #[test]
    fn test_explicit_missing_path_fails() {
        let dir = tempdir().unwrap();
        let result = Config::discover(Some(&dir.path().join("nope.toml")));
        assert!(matches!(result, Err(GraphError::Other(_))));
    }
}
