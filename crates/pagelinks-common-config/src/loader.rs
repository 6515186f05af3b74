//! Configuration file loading and parsing.

use crate::types::PagelinksConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Directory, relative to the project root, holding the config file.
pub const CONFIG_DIR: &str = ".pagelinks";

/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.yaml";

/// Config loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read config: {source}")]
    ReadError {
        #[from]
        source: std::io::Error,
    },

    #[error(
        "invalid YAML at line {}: {message}",
        line.map(|l| l.to_string()).unwrap_or_else(|| "unknown".to_string())
    )]
    ParseError { line: Option<usize>, message: String },

    #[error("validation error: {message}")]
    ValidationError { message: String },

    #[error("environment variable not found: {var}")]
    EnvVarNotFound { var: String },
}

/// Configuration loader.
pub struct ConfigLoader {
    base_path: PathBuf,
}

impl ConfigLoader {
    /// Create a loader for the given project directory.
    pub fn new(project_dir: impl AsRef<Path>) -> Self {
        Self {
            base_path: project_dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the project config file.
    pub fn config_path(&self) -> PathBuf {
        self.base_path.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Load configuration from `.pagelinks/config.yaml`.
    ///
    /// A missing file is not an error; defaults are returned instead.
    pub fn load(&self) -> Result<PagelinksConfig, ConfigError> {
        let config_path = self.config_path();

        if !config_path.exists() {
            debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(PagelinksConfig::default());
        }

        self.load_file(&config_path)
    }

    /// Load configuration from an explicit file path.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<PagelinksConfig, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }

        debug!(path = %path.display(), "Loading config file");
        let contents = std::fs::read_to_string(path)?;
        let expanded = self.expand_env_vars(&contents)?;

        let config: PagelinksConfig = serde_yaml::from_str(&expanded)
            .map_err(|e| ConfigError::ParseError {
                line: e.location().map(|l| l.line()),
                message: e.to_string(),
            })?;

        self.validate(&config)?;
        Ok(config)
    }

    /// Expand environment variables in the form `${VAR}` or `${VAR:-default}`.
    fn expand_env_vars(&self, content: &str) -> Result<String, ConfigError> {
        let re = regex::Regex::new(r"\$\{([^}:]+)(?::-([^}]*))?\}").map_err(|e| {
            ConfigError::ParseError {
                line: None,
                message: e.to_string(),
            }
        })?;

        let mut result = content.to_string();
        for cap in re.captures_iter(content) {
            let full_match = &cap[0];
            let var_name = &cap[1];
            let default = cap.get(2).map(|m| m.as_str());

            let value = match std::env::var(var_name) {
                Ok(v) => v,
                Err(_) => match default {
                    Some(d) => d.to_string(),
                    None => {
                        return Err(ConfigError::EnvVarNotFound {
                            var: var_name.to_string(),
                        })
                    }
                },
            };

            result = result.replace(full_match, &value);
        }

        Ok(result)
    }

    /// Validate configuration values.
    pub fn validate(&self, config: &PagelinksConfig) -> Result<(), ConfigError> {
        if config.api.max_results_per_page == 0 {
            return Err(ConfigError::ValidationError {
                message: "api.max_results_per_page must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    /// Save configuration to file.
    pub fn save(&self, config: &PagelinksConfig) -> Result<(), ConfigError> {
        let config_dir = self.base_path.join(CONFIG_DIR);
        std::fs::create_dir_all(&config_dir)?;

        let yaml = serde_yaml::to_string(config)
            .map_err(|e| ConfigError::ParseError {
                line: None,
                message: e.to_string(),
            })?;

        std::fs::write(config_dir.join(CONFIG_FILE), yaml)?;
        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new(std::env::current_dir().unwrap_or_default())
    }
}
