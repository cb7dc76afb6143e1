//! Application state for the Shipping Quote Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ShippingConfig;

/// Shared application state.
///
/// Holds the immutable pricing configuration and centroid table, shared by
/// every request without locking.
#[derive(Clone)]
pub struct AppState {
    /// The loaded shipping configuration.
    config: Arc<ShippingConfig>,
}

impl AppState {
    /// Creates a new application state with the given configuration.
    pub fn new(config: ShippingConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration.
    pub fn config(&self) -> &ShippingConfig {
        &self.config
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ShippingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_configuration() {
        let state = AppState::default();
        let clone = state.clone();
        assert!(std::ptr::eq(state.config(), clone.config()));
    }
}
