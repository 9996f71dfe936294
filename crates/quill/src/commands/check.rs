//! `quill check` command implementation.
//!
//! Exercises the full read path once (config, store query, extraction)
//! and reports what a fresh deployment would actually serve.

use std::path::PathBuf;

use clap::Args;
use quill_config::Config;
use quill_content::summarize;
use quill_notion::{ContentSource, NotionClient};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover quill.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error when configuration is invalid or the store is
    /// unreachable.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        output.info("Checking configuration...");
        let config = Config::load(self.config.as_deref(), None)?;
        let notion = config.require_notion()?;
        output.success("Configuration valid");

        output.info("Querying database...");
        let client = NotionClient::new(&notion.token, &notion.database_id, &notion.api_version);
        let pages = client.query_published_pages()?;
        output.success(&format!("Found {} published pages", pages.len()));

        match pages.first() {
            Some(page) => {
                let summary = summarize(page);
                output.highlight("First post:");
                output.info(&format!("  Title:     {}", summary.title));
                output.info(&format!("  Slug:      {}", summary.slug));
                output.info(&format!("  Date:      {}", summary.date));
                output.info(&format!("  Excerpt:   {}", summary.excerpt));
                output.info(&format!("  Published: {}", summary.published));
            }
            None => {
                output.info("No published pages found (check the Published property)");
            }
        }

        output.success("Notion integration is working");
        Ok(())
    }
}
