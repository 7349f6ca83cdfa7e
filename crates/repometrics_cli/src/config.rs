//! Configuration file support for repometrics.
//!
//! Configuration is loaded with the following precedence (highest to lowest):
//! 1. Environment variables (prefixed with `REPOMETRICS_`, e.g.,
//!    `REPOMETRICS_GITHUB_TOKEN`)
//! 2. Local config file (./repometrics.toml)
//! 3. XDG config file (~/.config/repometrics/config.toml)
//! 4. Built-in defaults
//!
//! Example config file:
//! ```toml
//! [github]
//! token = "ghp_..."  # or use REPOMETRICS_GITHUB_TOKEN / GITHUB_TOKEN env vars
//! host = "https://api.github.com"  # optional, for GitHub Enterprise instances
//! ```

use std::path::PathBuf;

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::Deserialize;

use repometrics::DEFAULT_API_URL;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// GitHub configuration.
    pub github: GitHubConfig,
}

/// GitHub configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// GitHub API token. A missing token is fine; requests just run under
    /// the lower unauthenticated rate limit.
    pub token: Option<String>,
    /// GitHub API base URL (e.g., "https://api.github.com" or a GitHub
    /// Enterprise instance).
    pub host: Option<String>,
}

impl Config {
    /// Load configuration using the config crate's layered approach.
    pub fn load() -> Self {
        let mut builder = ConfigBuilder::builder();

        // Add XDG config file if it exists
        if let Some(proj_dirs) = ProjectDirs::from("", "", "repometrics") {
            let xdg_config = proj_dirs.config_dir().join("config.toml");
            if xdg_config.exists() {
                tracing::debug!("Loading config from {:?}", xdg_config);
                builder = builder.add_source(
                    File::from(xdg_config)
                        .format(FileFormat::Toml)
                        .required(false),
                );
            }
        }

        // Add local config file (higher priority than XDG)
        let local_config = PathBuf::from("repometrics.toml");
        if local_config.exists() {
            tracing::debug!("Loading config from ./repometrics.toml");
            builder = builder.add_source(
                File::from(local_config)
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        // Add REPOMETRICS_ prefixed environment variables
        // e.g., REPOMETRICS_GITHUB_TOKEN -> github.token
        builder = builder.add_source(
            Environment::with_prefix("REPOMETRICS")
                .separator("_")
                .try_parsing(true),
        );

        match builder.build() {
            Ok(settings) => match settings.try_deserialize::<Config>() {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Failed to deserialize config: {}", e);
                    Config::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to build config: {}", e);
                Config::default()
            }
        }
    }

    /// Get the GitHub token, falling back to the plain `GITHUB_TOKEN`
    /// environment variable.
    pub fn github_token(&self) -> Option<String> {
        self.github
            .token
            .clone()
            .or_else(|| std::env::var("GITHUB_TOKEN").ok())
    }

    /// Get the GitHub API base URL.
    pub fn github_api_url(&self) -> String {
        self.github
            .host
            .clone()
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    /// Get the default config file path.
    #[allow(dead_code)]
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "repometrics").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.github.token.is_none());
        assert!(config.github.host.is_none());
        assert_eq!(config.github_api_url(), DEFAULT_API_URL);
    }

    #[test]
    fn test_config_from_toml_string() {
        let toml_content = r#"
            [github]
            token = "ghp_test123"
            host = "https://github.example.com/api/v3"
        "#;

        let settings = ConfigBuilder::builder()
            .add_source(config::File::from_str(toml_content, FileFormat::Toml))
            .build()
            .unwrap();

        let config: Config = settings.try_deserialize().unwrap();

        assert_eq!(config.github.token, Some("ghp_test123".to_string()));
        assert_eq!(
            config.github_api_url(),
            "https://github.example.com/api/v3"
        );
    }

    #[test]
    fn test_config_merging_order() {
        let base_toml = r#"
            [github]
            token = "base-token"
            host = "https://api.github.com"
        "#;

        let override_toml = r#"
            [github]
            token = "override-token"
        "#;

        let settings = ConfigBuilder::builder()
            .add_source(config::File::from_str(base_toml, FileFormat::Toml))
            .add_source(config::File::from_str(override_toml, FileFormat::Toml))
            .build()
            .unwrap();

        let config: Config = settings.try_deserialize().unwrap();

        assert_eq!(config.github.token, Some("override-token".to_string()));
        // host stays from the base layer (not overridden)
        assert_eq!(config.github.host, Some("https://api.github.com".to_string()));
    }

    #[test]
    fn test_config_unknown_fields_ignored() {
        let toml_content = r#"
            [github]
            token = "t"
            unknown_field = "should be ignored"
        "#;

        let settings = ConfigBuilder::builder()
            .add_source(config::File::from_str(toml_content, FileFormat::Toml))
            .build()
            .unwrap();

        let config: Config = settings.try_deserialize().unwrap();
        assert_eq!(config.github.token, Some("t".to_string()));
    }

    #[test]
    fn test_default_config_path_names_repometrics() {
        let path = Config::default_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("repometrics"));
    }
}
