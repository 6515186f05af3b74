//! CLI error handling.

use std::io;

use pagelinks_common_config::{ConfigError, EnvError};
use pagelinks_core::PagingError;
use thiserror::Error;

use crate::Exit;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("{message}")]
    Io {
        message: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid paging request: {0}")]
    Paging(#[from] PagingError),

    #[error("{message}")]
    Validation { message: String },
}

impl CliError {
    /// Get the error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config { .. } => "E001",
            Self::Io { .. } => "E002",
            Self::Paging(_) => "E003",
            Self::Validation { .. } => "E004",
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> Exit {
        match self {
            Self::Config { .. } => Exit::ConfigError,
            Self::Io { .. } => Exit::IoError,
            Self::Paging(_) => Exit::ValidationError,
            Self::Validation { .. } => Exit::GeneralError,
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Validation {
            message: format!("failed to encode JSON: {err}"),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config {
            message: format!("Configuration error: {err}"),
            source: Some(Box::new(err)),
        }
    }
}

impl From<EnvError> for CliError {
    fn from(err: EnvError) -> Self {
        Self::Config {
            message: format!("Environment error: {err}"),
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paging_error_maps_to_validation_exit() {
        let err = CliError::from(PagingError::zero_limit());
        assert_eq!(err.code(), "E003");
        assert_eq!(err.exit_code() as u8, 5);
        assert!(err.to_string().contains("Limit must be greater than zero"));
    }

    #[test]
    fn test_config_error_maps_to_config_exit() {
        let err = CliError::from(ConfigError::ValidationError {
            message: "api.max_results_per_page must be greater than 0".into(),
        });
        assert_eq!(err.exit_code() as u8, 2);
        assert!(err.to_string().starts_with("Configuration error"));
    }
}
