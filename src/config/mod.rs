use crate::utils::error::{KitError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "solid-kit")]
#[command(about = "Fetches a JSON feed and persists it locally")]
pub struct SyncConfig {
    #[arg(long, default_value = "https://jsonplaceholder.typicode.com/posts")]
    pub feed_url: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value = "feed.json")]
    pub output_file: String,

    #[arg(long, help = "Enable verbose output")]
    #[serde(default)]
    pub verbose: bool,

    #[arg(long, help = "Load configuration from a TOML file instead of flags")]
    #[serde(skip)]
    pub config: Option<String>,
}

impl SyncConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(KitError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| KitError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    // Replaces ${VAR_NAME} with the environment value; unset variables
    // are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }
}

impl Validate for SyncConfig {
    fn validate(&self) -> Result<()> {
        validate_url("feed_url", &self.feed_url)?;
        validate_path("output_path", &self.output_path)?;
        validate_non_empty_string("output_file", &self.output_file)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_toml_str() {
        let config = SyncConfig::from_toml_str(
            r#"
            feed_url = "https://example.com/posts"
            output_path = "./output"
            output_file = "feed.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.feed_url, "https://example.com/posts");
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml_str_substitutes_env_vars() {
        std::env::set_var("SOLID_KIT_TEST_FEED", "https://example.com/env-feed");

        let config = SyncConfig::from_toml_str(
            r#"
            feed_url = "${SOLID_KIT_TEST_FEED}"
            output_path = "./output"
            output_file = "feed.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.feed_url, "https://example.com/env-feed");
    }

    #[test]
    fn test_invalid_toml_is_a_config_error() {
        let result = SyncConfig::from_toml_str("feed_url = ");
        assert!(matches!(result, Err(KitError::ConfigError { .. })));
    }

    #[test]
    fn test_validate_rejects_bad_feed_url() {
        let config = SyncConfig::from_toml_str(
            r#"
            feed_url = "ftp://example.com/posts"
            output_path = "./output"
            output_file = "feed.json"
            "#,
        )
        .unwrap();

        assert!(config.validate().is_err());
    }
}
