//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading demurrage
//! tariffs from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{Tariff, TariffFile};

/// Loads and provides access to a demurrage tariff.
///
/// The tariff file lists free days per container type and a tier list per
/// container type and size:
///
/// ```text
/// free_days:
///   FULL: 10
///   ...
/// rates:
///   FULL:
///     "20":
///       - { start: 10, end: 20, rate: 3 }
///       - { start: 20, end: 30, rate: 5 }
///       - { start: 30, rate: 7 }
/// ```
///
/// Size keys must be quoted so YAML reads them as strings.
///
/// # Example
///
/// ```no_run
/// use demurrage_engine::config::ConfigLoader;
/// use demurrage_engine::models::ContainerType;
///
/// let loader = ConfigLoader::load("./config/tariff.yaml").unwrap();
/// println!("FULL free days: {}", loader.tariff().free_days(ContainerType::Full));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    tariff: Tariff,
}

impl ConfigLoader {
    /// Loads a tariff from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file is not valid YAML for a tariff (`ConfigParseError`)
    /// - The tariff is incomplete or malformed
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let file = Self::load_yaml::<TariffFile>(path)?;
        let tariff = Tariff::from_file(file)?;

        info!(path = %path.display(), "Loaded tariff");
        Ok(Self { tariff })
    }

    /// Parses a tariff from YAML text.
    ///
    /// # Example
    ///
    /// ```
    /// use demurrage_engine::config::ConfigLoader;
    ///
    /// let yaml = std::fs::read_to_string("config/tariff.yaml").unwrap();
    /// let loader = ConfigLoader::from_yaml_str(&yaml)?;
    /// # Ok::<(), demurrage_engine::error::EngineError>(())
    /// ```
    pub fn from_yaml_str(yaml: &str) -> EngineResult<Self> {
        let file = Self::parse_yaml::<TariffFile>(yaml, "<inline>")?;
        let tariff = Tariff::from_file(file)?;
        Ok(Self { tariff })
    }

    /// Uses the built-in standard tariff.
    pub fn standard() -> Self {
        Self {
            tariff: Tariff::standard().clone(),
        }
    }

    /// Returns the loaded tariff.
    pub fn tariff(&self) -> &Tariff {
        &self.tariff
    }

    /// Consumes the loader and returns the tariff.
    pub fn into_tariff(self) -> Tariff {
        self.tariff
    }

    /// Renders the loaded tariff back to YAML.
    pub fn to_yaml(&self) -> EngineResult<String> {
        serde_yaml::to_string(&self.tariff.to_file()).map_err(|e| EngineError::ConfigParseError {
            path: "<tariff>".to_string(),
            message: e.to_string(),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse_yaml(&content, &path_str)
    }

    fn parse_yaml<T: serde::de::DeserializeOwned>(content: &str, path: &str) -> EngineResult<T> {
        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }
}
