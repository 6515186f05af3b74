//! Configuration types for pagelinks.
//!
//! This crate provides the configuration used by pagelinks consumers,
//! read from `.pagelinks/config.yaml` files and the process environment.
//! The page-link builder itself never reads configuration; callers resolve
//! the default page limit here once and pass it in.

pub mod types;
pub mod loader;
pub mod env;


pub use types::*;
pub use loader::*;
pub use env::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_sensible_values() {
        let config = PagelinksConfig::default();

        assert_eq!(config.api.max_results_per_page, 1000);
        assert_eq!(config.default_page_limit(), 1000);
    }

    #[test]
    fn test_config_serializes_to_yaml() {
        let config = PagelinksConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();

        assert!(yaml.contains("api:"));
        assert!(yaml.contains("max_results_per_page: 1000"));
    }

    #[test]
    fn test_partial_configs_merge_with_defaults() {
        let partial_yaml = r#"
api:
  max_results_per_page: 50
"#;

        let config: PagelinksConfig = serde_yaml::from_str(partial_yaml).unwrap();

        assert_eq!(config.api.max_results_per_page, 50);
        assert_eq!(config.default_page_limit(), 50);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: PagelinksConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.default_page_limit(), 1000);
    }
}
