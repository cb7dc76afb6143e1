//! Configuration loading and management for the Shipping Quote Engine.
//!
//! This module provides the pricing constants, the postal code centroid
//! table, and functionality to load both from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use shipping_quote::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/northstar").unwrap();
//! println!("DIM divisor: {}", loader.config().pricing().dim_divisor_cm3_per_kg);
//! ```

mod centroids;
mod loader;
mod types;

pub use centroids::{CentroidTable, CentroidsConfig};
pub use loader::{CENTROIDS_FILE, ConfigLoader, PRICING_FILE};
pub use types::{HandlingConfig, ModeRate, ModeRates, PricingConfig, ShippingConfig};
