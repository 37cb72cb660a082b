//! Config file loading and saving.
//!
//! The config file is a YAML mapping whose keys mirror the [`Config`]
//! fields. A missing or unreadable file is the normal first-run case, so
//! [`ConfigLoader::load_or_empty`] turns every failure into an empty layer
//! plus a warning.

use std::fs;
use std::path::Path;

use crate::config::schema::{Config, ConfigLayer};
use crate::error::{Error, Result};
use crate::logging::Logger;

/// Loads and saves the YAML config file.
///
/// # Examples
///
/// ```no_run
/// use cvpr::config::ConfigLoader;
/// use std::path::Path;
///
/// let layer = ConfigLoader::load_file(Path::new("./cv-pull-request.yaml")).unwrap();
/// println!("stored version: {:?}", layer.version);
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and parse a YAML config file.
    ///
    /// An empty (or whitespace-only) file yields an empty layer.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<ConfigLayer> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        if contents.trim().is_empty() {
            return Ok(ConfigLayer::default());
        }

        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Load a config file, treating any failure as "no stored config".
    pub fn load_or_empty(path: &Path, logger: &Logger) -> ConfigLayer {
        logger.status(&format!("Reading config file {}...", path.display()));

        match Self::load_file(path) {
            Ok(layer) => layer,
            Err(e) => {
                log::debug!("config file {} not loaded: {e}", path.display());
                logger.debug(&format!("{}: {e}", path.display()));
                logger.warn(&format!(
                    "Couldn't load file {}, using default values...",
                    path.display()
                ));
                ConfigLayer::default()
            }
        }
    }

    /// Serialize a configuration to YAML.
    ///
    /// The per-run `date` and `debug` fields are never included.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(config: &Config) -> Result<String> {
        Ok(serde_yaml::to_string(config)?)
    }

    /// Write a configuration to a YAML file, replacing its contents.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(path: &Path, config: &Config) -> Result<()> {
        let yaml = Self::to_yaml(config)?;
        fs::write(path, yaml)?;
        Ok(())
    }
}
