//! Notion REST API client.
//!
//! Sync HTTP client for the Notion API with bearer-token authentication.
//! Pagination is followed internally; callers always receive complete,
//! store-ordered result sets.

mod blocks;
mod query;

use std::time::Duration;

use ureq::Agent;

use crate::error::NotionError;
use crate::source::ContentSource;
use crate::types::{Block, Page};

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Default Notion API base URL.
const DEFAULT_BASE_URL: &str = "https://api.notion.com";

/// Notion REST API client.
pub struct NotionClient {
    agent: Agent,
    base_url: String,
    token: String,
    api_version: String,
    database_id: String,
}

impl NotionClient {
    /// Create a client for the given integration token and database.
    ///
    /// # Arguments
    /// * `token` - Notion integration token
    /// * `database_id` - ID of the blog database
    /// * `api_version` - Notion-Version header value (e.g. "2022-06-28")
    #[must_use]
    pub fn new(token: &str, database_id: &str, api_version: &str) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, token, database_id, api_version)
    }

    /// Create a client against a non-default API base URL.
    #[must_use]
    pub fn with_base_url(
        base_url: &str,
        token: &str,
        database_id: &str,
        api_version: &str,
    ) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
            token: token.to_owned(),
            api_version: api_version.to_owned(),
            database_id: database_id.to_owned(),
        }
    }

    /// Get the API base URL.
    fn api_url(&self) -> String {
        format!("{}/v1", self.base_url)
    }

    /// Get the Authorization header value.
    fn auth_header(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl ContentSource for NotionClient {
    fn query_published_pages(&self) -> Result<Vec<Page>, NotionError> {
        self.query_database()
    }

    fn list_block_children(&self, block_id: &str) -> Result<Vec<Block>, NotionError> {
        self.block_children(block_id)
    }
}
