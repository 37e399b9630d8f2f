//! Configuration file support for the gitmirror CLI.
//!
//! Configuration is loaded with the following precedence (highest to
//! lowest):
//! 1. CLI flags
//! 2. Environment variables (prefixed with `GITMIRROR_`)
//! 3. Config file (~/.config/gitmirror/config.toml or ./gitmirror.toml)
//! 4. Built-in defaults
//!
//! Example config file:
//! ```toml
//! [database]
//! url = "sqlite:///home/me/.local/state/gitmirror/mirror.db"
//!
//! [github]
//! token = "ghp_..."  # or use GITMIRROR_GITHUB_TOKEN
//!
//! [sync]
//! per_page = 100
//! ```

use std::path::PathBuf;

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Database configuration.
    pub database: DatabaseConfig,
    /// GitHub configuration.
    pub github: GitHubConfig,
    /// Default sync options.
    pub sync: SyncConfig,
}

/// Database configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database connection URL. Defaults to a SQLite file in the XDG state
    /// directory when not specified.
    pub url: Option<String>,
}

/// GitHub configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// GitHub personal access token used by `connect`.
    pub token: Option<String>,
}

/// Default sync options.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Page size requested from upstream listings.
    pub per_page: u32,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self { per_page: 100 }
    }
}

impl Config {
    /// Load configuration from files and environment.
    pub fn load() -> Self {
        let mut builder = ConfigBuilder::builder();

        if let Some(proj_dirs) = ProjectDirs::from("", "", "gitmirror") {
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

        let local_config = PathBuf::from("gitmirror.toml");
        if local_config.exists() {
            tracing::debug!("Loading config from ./gitmirror.toml");
            builder = builder.add_source(
                File::from(local_config)
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        builder = builder.add_source(
            Environment::with_prefix("GITMIRROR")
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

    /// Get the database URL, falling back to the default state directory.
    pub fn database_url(&self) -> Option<String> {
        self.database.url.clone().or_else(|| {
            Self::default_state_dir().map(|state_dir| {
                let db_path = state_dir.join("mirror.db");
                format!("sqlite://{}?mode=rwc", db_path.display())
            })
        })
    }

    /// Get the GitHub token, if configured.
    pub fn github_token(&self) -> Option<String> {
        self.github.token.clone()
    }

    /// Get the default state directory path.
    ///
    /// On Linux this is `$XDG_STATE_HOME/gitmirror` or
    /// `~/.local/state/gitmirror`; elsewhere it falls back to the data
    /// directory.
    pub fn default_state_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "gitmirror").map(|dirs| {
            dirs.state_dir()
                .map(|p| p.to_path_buf())
                .unwrap_or_else(|| dirs.data_dir().to_path_buf())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(config.database.url.is_none());
        assert!(config.github.token.is_none());
        assert_eq!(config.sync.per_page, 100);
    }

    #[test]
    fn parses_full_toml() {
        let toml_content = r#"
            [database]
            url = "sqlite:///tmp/test.db"

            [github]
            token = "ghp_test123"

            [sync]
            per_page = 50
        "#;

        let settings = ConfigBuilder::builder()
            .add_source(config::File::from_str(toml_content, FileFormat::Toml))
            .build()
            .unwrap();

        let config: Config = settings.try_deserialize().unwrap();

        assert_eq!(
            config.database.url,
            Some("sqlite:///tmp/test.db".to_string())
        );
        assert_eq!(config.github_token(), Some("ghp_test123".to_string()));
        assert_eq!(config.sync.per_page, 50);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let toml_content = r#"
            [github]
            token = "ghp_only_token"
        "#;

        let settings = ConfigBuilder::builder()
            .add_source(config::File::from_str(toml_content, FileFormat::Toml))
            .build()
            .unwrap();

        let config: Config = settings.try_deserialize().unwrap();

        assert_eq!(config.github_token(), Some("ghp_only_token".to_string()));
        assert_eq!(config.sync.per_page, 100);
        assert!(config.database.url.is_none());
    }

    #[test]
    fn database_url_defaults_to_state_dir() {
        let config = Config::default();
        let url = config.database_url().unwrap();
        assert!(url.starts_with("sqlite://"));
        assert!(url.contains("mirror.db"));
        assert!(url.ends_with("?mode=rwc"));
    }

    #[test]
    fn database_url_respects_configured_value() {
        let toml_content = r#"
            [database]
            url = "sqlite:///somewhere/else.db"
        "#;

        let settings = ConfigBuilder::builder()
            .add_source(config::File::from_str(toml_content, FileFormat::Toml))
            .build()
            .unwrap();

        let config: Config = settings.try_deserialize().unwrap();
        assert_eq!(
            config.database_url(),
            Some("sqlite:///somewhere/else.db".to_string())
        );
    }
}
