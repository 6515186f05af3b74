//! Configuration types.

use serde::{Deserialize, Serialize};

/// Default number of records per page when a request carries no `limit`.
pub const DEFAULT_MAX_RESULTS_PER_PAGE: u64 = 1000;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagelinksConfig {
    /// API surface configuration.
    pub api: ApiConfig,
}

impl PagelinksConfig {
    /// Page size used when a request does not name a `limit`.
    pub fn default_page_limit(&self) -> u64 {
        self.api.max_results_per_page
    }
}

/// API surface configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Maximum records returned per page, used as the default `limit`.
    pub max_results_per_page: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            max_results_per_page: DEFAULT_MAX_RESULTS_PER_PAGE,
        }
    }
}
