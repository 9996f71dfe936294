//! Block children operation.

use tracing::info;

use super::NotionClient;
use crate::error::NotionError;
use crate::types::{Block, Paginated};

/// Page size for block children requests (API maximum).
const CHILDREN_PAGE_SIZE: u32 = 100;

impl NotionClient {
    /// List the direct children of a page or block, in store-native order.
    ///
    /// Follows cursor pagination; children of children are not fetched
    /// (callers issue further calls for nested collections like tables).
    pub(crate) fn block_children(&self, block_id: &str) -> Result<Vec<Block>, NotionError> {
        let base = format!("{}/blocks/{}/children", self.api_url(), block_id);

        let mut blocks = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let mut url = format!("{base}?page_size={CHILDREN_PAGE_SIZE}");
            if let Some(cursor) = &cursor {
                url.push_str("&start_cursor=");
                url.push_str(cursor);
            }

            info!("Listing children of block {}", block_id);

            let response = self
                .agent
                .get(&url)
                .header("Authorization", &self.auth_header())
                .header("Notion-Version", &self.api_version)
                .header("Accept", "application/json")
                .call()?;

            let status = response.status().as_u16();
            let mut body_reader = response.into_body();

            if status >= 400 {
                let error_body = body_reader
                    .read_to_string()
                    .unwrap_or_else(|_| "(unable to read error body)".to_owned());
                return Err(NotionError::HttpResponse {
                    status,
                    body: error_body,
                });
            }

            let batch: Paginated<Block> = body_reader.read_json()?;
            blocks.extend(batch.results);

            if !batch.has_more {
                break;
            }
            match batch.next_cursor {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        Ok(blocks)
    }
}
