use crate::quantity::error::QuantityError;
use crate::quantity::types::{MeasurementSystem, ScaleFactor};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Rendering defaults, usually read from `portion.toml`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // Target system for conversion; none means scale only
    #[serde(default)]
    pub measurement_system: Option<MeasurementSystem>,

    #[serde(default)]
    pub original_servings: Option<f64>,

    #[serde(default)]
    pub desired_servings: Option<f64>,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Load `path`, falling back to [`Config::empty`] when it is missing or
    /// unreadable. A file that reads but does not parse is still an error.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::empty());
        }
        match Self::load_from_file(path) {
            Err(ConfigError::Io { path, source }) => {
                warn!(%path, error = %source, "config file unreadable, using defaults");
                Ok(Self::empty())
            }
            other => other,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Scale factor implied by the servings settings.
    ///
    /// A missing side defaults to the other one, so a lone `original_servings`
    /// still gets validated but scales by 1.
    pub fn scale_factor(&self) -> Result<ScaleFactor, QuantityError> {
        let original = self.original_servings.or(self.desired_servings);
        let desired = self.desired_servings.or(original);
        match (desired, original) {
            (Some(desired), Some(original)) => ScaleFactor::from_servings(desired, original),
            _ => Ok(ScaleFactor::identity()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config() {
        let config = Config::load_from_str("").unwrap();
        assert_eq!(config, Config::empty());
        assert_eq!(config.scale_factor().unwrap(), ScaleFactor::identity());
    }

    #[test]
    fn test_load_from_str() {
        let config = Config::load_from_str(
            r#"
measurement_system = "metric"
original_servings = 4
desired_servings = 6
"#,
        )
        .unwrap();
        assert_eq!(config.measurement_system, Some(MeasurementSystem::Metric));
        assert_eq!(config.scale_factor().unwrap().value(), 1.5);
    }

    #[test]
    fn test_bad_system_is_parse_error() {
        let result = Config::load_from_str(r#"measurement_system = "nautical""#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_one_sided_servings() {
        let config = Config {
            original_servings: Some(4.0),
            ..Config::default()
        };
        assert_eq!(config.scale_factor().unwrap().value(), 1.0);

        let config = Config {
            desired_servings: Some(0.0),
            ..Config::default()
        };
        assert!(config.scale_factor().is_err());
    }

    #[test]
    fn test_zero_servings_rejected() {
        let config = Config {
            original_servings: Some(0.0),
            desired_servings: Some(4.0),
            ..Config::default()
        };
        assert!(matches!(
            config.scale_factor(),
            Err(QuantityError::InvalidServings { .. })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "measurement_system = \"imperial\"").unwrap();
        writeln!(file, "desired_servings = 2").unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.measurement_system, Some(MeasurementSystem::Imperial));
        assert_eq!(config.desired_servings, Some(2.0));
    }

    #[test]
    fn test_load_or_empty_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_empty(dir.path().join("portion.toml")).unwrap();
        assert_eq!(config, Config::empty());

        let err = Config::load_from_file(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_or_empty_unreadable_file() {
        // A directory exists but cannot be read as a file
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Config::load_from_file(dir.path()),
            Err(ConfigError::Io { .. })
        ));
        let config = Config::load_or_empty(dir.path()).unwrap();
        assert_eq!(config, Config::empty());
    }

    #[test]
    fn test_load_or_empty_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "desired_servings = [").unwrap();
        assert!(matches!(
            Config::load_or_empty(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_system_aliases() {
        let config = Config::load_from_str(r#"measurement_system = "us""#).unwrap();
        assert_eq!(config.measurement_system, Some(MeasurementSystem::Imperial));
        let config = Config::load_from_str(r#"measurement_system = "customary""#).unwrap();
        assert_eq!(config.measurement_system, Some(MeasurementSystem::Imperial));
        let config = Config::load_from_str(r#"measurement_system = "si""#).unwrap();
        assert_eq!(config.measurement_system, Some(MeasurementSystem::Metric));
    }
}
