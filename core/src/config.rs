//! Parser and help settings loadable from YAML.
//!
//! Every field has a default, so a partial file (or an empty mapping) is
//! valid.
//!
//! # Example YAML
//!
//! ```yaml
//! parse:
//!   skip_first_n: 1
//! help:
//!   min_width: 30
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigResult;
use crate::help::HelpConfig;
use crate::parser::ParseConfig;

/// Top-level settings for parsing and help rendering.
///
/// # Examples
///
/// ```
/// use argp_core::ArgpConfig;
///
/// let config: ArgpConfig = serde_yaml::from_str("help:\n  min_width: 30\n").unwrap();
/// assert_eq!(config.help.min_width, 30);
/// assert_eq!(config.parse.skip_first_n, 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArgpConfig {
    /// Parse driver settings.
    pub parse: ParseConfig,
    /// Help renderer settings.
    pub help: HelpConfig,
}

impl ArgpConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::ConfigError::IoError) if the file cannot be
    /// read, or [`YamlError`](crate::ConfigError::YamlError) if parsing
    /// fails.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](crate::ConfigError::IoError) if the file cannot be
    /// written, or [`YamlError`](crate::ConfigError::YamlError) if
    /// serialization fails.
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_mapping_uses_defaults() {
        let config: ArgpConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, ArgpConfig::default());
        assert_eq!(config.help.min_width, 25);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("argp.yaml");
        let config = ArgpConfig {
            parse: ParseConfig { skip_first_n: 0 },
            help: HelpConfig { min_width: 40 },
        };

        config.save(&path).unwrap();
        assert_eq!(ArgpConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ArgpConfig::load(dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, crate::ConfigError::IoError(_)));
    }

    #[test]
    fn test_load_malformed_yaml_is_yaml_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        std::fs::write(&path, "help: [unclosed").unwrap();

        let err = ArgpConfig::load(&path).unwrap_err();
        assert!(matches!(err, crate::ConfigError::YamlError(_)));
    }
}
