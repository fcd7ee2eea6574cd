//! Feed configuration loaded via OrthoConfig.
//!
//! Values come from `FEED_*` environment variables and configuration files;
//! every field falls back to a default when absent.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::{DEFAULT_PAGE_SIZE, FeatureName, FeatureNameValidationError};

const DEFAULT_FEATURE_NAME: &str = "Feed";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
const DEFAULT_ENABLE_LOGGING: bool = true;

/// Settings controlling how the feed pipeline is wired.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "FEED")]
pub struct FeedSettings {
    /// Number of posts requested per snapshot.
    pub page_size: Option<usize>,
    /// Install the JSON log subscriber.
    pub enable_logging: Option<bool>,
    /// Feature label used in UI headers.
    pub feature_name: Option<String>,
    /// Base URL of the JSON API; in-memory fixtures are used when absent.
    pub api_base_url: Option<String>,
    /// Per-request timeout for the HTTP adapters, in seconds.
    pub request_timeout_secs: Option<u64>,
    /// Seed for generated demo users; the fixture factory is used when absent.
    pub example_seed: Option<u64>,
}

impl FeedSettings {
    /// Return the configured page size, falling back to the default.
    pub fn page_size(&self) -> usize {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// Return whether logging is enabled, defaulting to `true`.
    pub fn enable_logging(&self) -> bool {
        self.enable_logging.unwrap_or(DEFAULT_ENABLE_LOGGING)
    }

    /// Return the validated feature name, falling back to the default.
    ///
    /// # Errors
    ///
    /// Returns [`FeatureNameValidationError`] when the configured name is
    /// invalid.
    pub fn feature_name(&self) -> Result<FeatureName, FeatureNameValidationError> {
        FeatureName::new(
            self.feature_name
                .as_deref()
                .unwrap_or(DEFAULT_FEATURE_NAME),
        )
    }

    /// Return the HTTP request timeout, falling back to the default.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }
}
