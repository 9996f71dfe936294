//! `quill serve` command implementation.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use quill_config::{CliSettings, Config};
use quill_mailer::Mailer;
use quill_notion::NotionClient;
use quill_server::{run_server, server_config_from_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover quill.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose output (request and upstream logging).
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable response caching (default: enabled).
    #[arg(long)]
    cache: Option<bool>,

    /// Disable response caching.
    #[arg(long, conflicts_with = "cache")]
    no_cache: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        // Build CLI settings from args
        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            cache_enabled: self.no_cache.then_some(false).or(self.cache),
        };

        // Load config
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let notion = config.require_notion()?;

        let source = Arc::new(NotionClient::new(
            &notion.token,
            &notion.database_id,
            &notion.api_version,
        ));

        let mailer = match &config.mail {
            Some(mail) => Some(Mailer::new(
                &mail.smtp_host,
                mail.smtp_port,
                mail.username.as_deref(),
                mail.password.as_deref(),
                &mail.encryption,
                mail.from_address.clone(),
                mail.to_address.clone(),
            )?),
            None => None,
        };

        // Print startup info
        output.info(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!("Database: {}", notion.database_id));

        if config.cache.enabled {
            output.info(&format!(
                "Cache: posts list {}s, posts {}s",
                config.cache.posts_ttl, config.cache.post_ttl
            ));
        } else {
            output.info("Cache: disabled");
        }

        if config.mail.is_some() {
            output.info("Contact relay: enabled");
        } else {
            output.info("Contact relay: disabled (no [mail] section in config)");
        }

        // Build server config and run
        let server_config = server_config_from_config(&config, version.to_owned());
        run_server(server_config, source, mailer)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }
}
