//! Configuration management for Quill.
//!
//! Parses `quill.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `server.host`
//! - `notion.token`
//! - `notion.database_id`
//! - `mail.smtp_host`
//! - `mail.username`
//! - `mail.password`
//! - `mail.from_address`
//! - `mail.to_address`

mod expand;

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override cache enabled flag.
    pub cache_enabled: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "quill.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Notion configuration. Required by the serve and check commands;
    /// validated through [`Config::require_notion`].
    pub notion: Option<NotionConfig>,
    /// Response cache configuration.
    pub cache: CacheConfig,
    /// CORS configuration.
    pub cors: CorsConfig,
    /// Contact-form mail configuration (optional section).
    pub mail: Option<MailConfig>,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7900,
        }
    }
}

/// Notion configuration.
#[derive(Debug, Deserialize)]
pub struct NotionConfig {
    /// Integration token.
    pub token: String,
    /// Blog database ID.
    pub database_id: String,
    /// Notion-Version header value.
    #[serde(default = "default_api_version")]
    pub api_version: String,
}

fn default_api_version() -> String {
    "2022-06-28".to_owned()
}

impl NotionConfig {
    /// Validate that all required fields are properly set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any field is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.token, "notion.token")?;
        require_non_empty(&self.database_id, "notion.database_id")?;
        require_non_empty(&self.api_version, "notion.api_version")?;
        Ok(())
    }
}

/// Response cache configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Whether response caching is enabled.
    pub enabled: bool,
    /// Default TTL in seconds for entries stored without an explicit TTL.
    pub default_ttl: u64,
    /// TTL in seconds for the posts listing.
    pub posts_ttl: u64,
    /// TTL in seconds for individual posts.
    pub post_ttl: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            default_ttl: 300,
            posts_ttl: 300,
            post_ttl: 600,
        }
    }
}

/// CORS configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Origins allowed to call the API.
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:3000".to_owned()],
        }
    }
}

/// Contact-form mail configuration.
#[derive(Debug, Deserialize)]
pub struct MailConfig {
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port.
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    /// SMTP username (optional; anonymous relay when absent).
    #[serde(default)]
    pub username: Option<String>,
    /// SMTP password.
    #[serde(default)]
    pub password: Option<String>,
    /// Transport encryption: "starttls" (default), "tls" or "none".
    #[serde(default = "default_encryption")]
    pub encryption: String,
    /// Sender address.
    pub from_address: String,
    /// Recipient address for contact submissions.
    pub to_address: String,
}

fn default_smtp_port() -> u16 {
    587
}

fn default_encryption() -> String {
    "starttls".to_owned()
}

impl MailConfig {
    /// Validate that all required fields are properly set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any field is empty or the
    /// encryption mode is unrecognized.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.smtp_host, "mail.smtp_host")?;
        require_non_empty(&self.from_address, "mail.from_address")?;
        require_non_empty(&self.to_address, "mail.to_address")?;

        if !matches!(self.encryption.as_str(), "starttls" | "tls" | "none") {
            return Err(ConfigError::Validation(format!(
                "mail.encryption must be \"starttls\", \"tls\" or \"none\", got \"{}\"",
                self.encryption
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g. "`notion.token`").
        field: String,
        /// Error message (e.g. "${`NOTION_TOKEN`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `quill.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to
    /// take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(cache_enabled) = settings.cache_enabled {
            self.cache.enabled = cache_enabled;
        }
    }

    /// Get validated Notion configuration.
    ///
    /// Returns the Notion config if the `[notion]` section is present and
    /// all fields are valid. Use this instead of accessing the `notion`
    /// field directly when the command requires the upstream store.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the section is missing or invalid.
    pub fn require_notion(&self) -> Result<&NotionConfig, ConfigError> {
        let notion = self
            .notion
            .as_ref()
            .ok_or_else(|| ConfigError::Validation("[notion] section required in config".into()))?;
        notion.validate()?;
        Ok(notion)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before validation
        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Expand environment variable references in string fields.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand(&self.server.host, "server.host")?;

        if let Some(notion) = &mut self.notion {
            notion.token = expand::expand(&notion.token, "notion.token")?;
            notion.database_id = expand::expand(&notion.database_id, "notion.database_id")?;
        }

        if let Some(mail) = &mut self.mail {
            mail.smtp_host = expand::expand(&mail.smtp_host, "mail.smtp_host")?;
            if let Some(username) = &mail.username {
                mail.username = Some(expand::expand(username, "mail.username")?);
            }
            if let Some(password) = &mail.password {
                mail.password = Some(expand::expand(password, "mail.password")?);
            }
            mail.from_address = expand::expand(&mail.from_address, "mail.from_address")?;
            mail.to_address = expand::expand(&mail.to_address, "mail.to_address")?;
        }

        Ok(())
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file. The `[notion]` section
    /// is validated lazily by [`Config::require_notion`] so that commands
    /// which don't touch the store can run without it.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;

        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port must be non-zero".to_owned(),
            ));
        }

        if self.cors.allowed_origins.is_empty() {
            return Err(ConfigError::Validation(
                "cors.allowed_origins cannot be empty".to_owned(),
            ));
        }

        if let Some(mail) = &self.mail {
            mail.validate()?;
        }

        Ok(())
    }
}
