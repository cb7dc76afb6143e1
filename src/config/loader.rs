//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading pricing
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::centroids::{CentroidTable, CentroidsConfig};
use super::types::{PricingConfig, ShippingConfig};

/// Name of the required rate card file.
pub const PRICING_FILE: &str = "pricing.yaml";
/// Name of the optional centroid override file.
pub const CENTROIDS_FILE: &str = "centroids.yaml";

/// Loads and provides access to shipping configuration.
///
/// # Directory Structure
///
/// ```text
/// config/northstar/
/// ├── pricing.yaml     # DIM divisor, discount rate, rate card, handling fees
/// └── centroids.yaml   # Optional: extra or corrected ZIP centroids
/// ```
///
/// Entries in `centroids.yaml` are merged over the built-in table.
///
/// # Example
///
/// ```no_run
/// use shipping_quote::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/northstar")?;
/// println!("{} known ZIP codes", loader.config().centroids().len());
/// # Ok::<(), shipping_quote::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ShippingConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Fails if `pricing.yaml` is missing, if any present file contains
    /// invalid YAML, or if the rate card violates a pricing invariant.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let pricing = Self::load_yaml::<PricingConfig>(&path.join(PRICING_FILE))?;

        let centroids_path = path.join(CENTROIDS_FILE);
        let centroids = if centroids_path.exists() {
            let overrides = Self::load_yaml::<CentroidsConfig>(&centroids_path)?;
            debug!(
                path = %centroids_path.display(),
                entries = overrides.centroids.len(),
                "Merging centroid overrides"
            );
            CentroidTable::builtin().merged_with(overrides.centroids)
        } else {
            CentroidTable::builtin().clone()
        };

        let config = ShippingConfig::new(pricing, centroids)?;
        Ok(Self { config })
    }

    /// Returns a loader holding the built-in configuration.
    pub fn builtin() -> Self {
        Self {
            config: ShippingConfig::default(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ShippingConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> ShippingConfig {
        self.config
    }
}
