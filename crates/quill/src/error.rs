//! CLI error types.

use quill_config::ConfigError;
use quill_mailer::MailError;
use quill_notion::NotionError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Notion(#[from] NotionError),

    #[error("{0}")]
    Mail(#[from] MailError),

    #[error("{0}")]
    Server(String),
}
