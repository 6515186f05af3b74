//! Environment variable handling.

use crate::types::PagelinksConfig;
use std::env;
use thiserror::Error;

/// Environment variable errors.
#[derive(Debug, Error)]
pub enum EnvError {
    #[error("invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("failed to load .env file: {0}")]
    DotenvError(#[from] dotenvy::Error),
}

/// Environment variable names.
pub mod vars {
    // Configuration
    pub const PAGELINKS_CONFIG: &str = "PAGELINKS_CONFIG";
    pub const PAGELINKS_DEFAULT_PAGE_LIMIT: &str = "PAGELINKS_DEFAULT_PAGE_LIMIT";

    // Logging
    pub const PAGELINKS_LOG_LEVEL: &str = "PAGELINKS_LOG_LEVEL";
    pub const PAGELINKS_LOG_FORMAT: &str = "PAGELINKS_LOG_FORMAT";
    pub const RUST_LOG: &str = "RUST_LOG";
}

/// Environment configuration.
pub struct Environment {
    _guard: (),
}

impl Environment {
    /// Initialize environment from .env files.
    pub fn init() -> Result<Self, EnvError> {
        // Later files override earlier ones
        let _ = dotenvy::from_filename(".env");
        let _ = dotenvy::from_filename_override(".env.local");

        Ok(Self { _guard: () })
    }

    /// Get an optional string variable.
    pub fn get(var: &str) -> Option<String> {
        env::var(var).ok()
    }

    /// Get a variable with a default value.
    pub fn get_or(var: &str, default: &str) -> String {
        env::var(var).unwrap_or_else(|_| default.to_string())
    }

    /// Get an integer variable.
    pub fn get_int<T: std::str::FromStr>(var: &str) -> Result<Option<T>, EnvError> {
        match env::var(var) {
            Ok(v) => v.trim().parse().map(Some).map_err(|_| EnvError::InvalidValue {
                var: var.to_string(),
                message: "expected integer".to_string(),
            }),
            Err(_) => Ok(None),
        }
    }
}

impl PagelinksConfig {
    /// Apply overrides from the process environment.
    ///
    /// `PAGELINKS_DEFAULT_PAGE_LIMIT` replaces `api.max_results_per_page`
    /// and must be a positive integer.
    pub fn apply_env(&mut self) -> Result<(), EnvError> {
        if let Some(limit) = Environment::get_int::<u64>(vars::PAGELINKS_DEFAULT_PAGE_LIMIT)? {
            if limit == 0 {
                return Err(EnvError::InvalidValue {
                    var: vars::PAGELINKS_DEFAULT_PAGE_LIMIT.to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
            self.api.max_results_per_page = limit;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_default() {
        let val = Environment::get_or("PAGELINKS_NONEXISTENT_VAR_12345", "default");
        assert_eq!(val, "default");
    }

    #[test]
    fn test_integer_parsing() {
        env::set_var("PAGELINKS_TEST_INT", "42");
        let val: Result<Option<i32>, _> = Environment::get_int("PAGELINKS_TEST_INT");
        assert_eq!(val.unwrap(), Some(42));

        env::set_var("PAGELINKS_TEST_INT", "invalid");
        let val: Result<Option<i32>, _> = Environment::get_int("PAGELINKS_TEST_INT");
        assert!(val.is_err());

        env::remove_var("PAGELINKS_TEST_INT");
        let val: Result<Option<i32>, _> = Environment::get_int("PAGELINKS_TEST_INT");
        assert_eq!(val.unwrap(), None);
    }

    // Both cases share one variable, so they run in a single test.
    #[test]
    fn test_apply_env_overrides_page_limit() {
        env::set_var(vars::PAGELINKS_DEFAULT_PAGE_LIMIT, "25");
        let mut config = PagelinksConfig::default();
        config.apply_env().unwrap();
        assert_eq!(config.default_page_limit(), 25);

        env::set_var(vars::PAGELINKS_DEFAULT_PAGE_LIMIT, "0");
        let mut config = PagelinksConfig::default();
        assert!(matches!(
            config.apply_env(),
            Err(EnvError::InvalidValue { .. })
        ));
        assert_eq!(config.default_page_limit(), 1000);

        env::remove_var(vars::PAGELINKS_DEFAULT_PAGE_LIMIT);
    }

    #[test]
    fn test_environment_init() {
        let result = Environment::init();
        assert!(result.is_ok());
    }
}
