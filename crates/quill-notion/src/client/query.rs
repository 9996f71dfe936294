//! Database query operation.

use serde_json::json;
use tracing::info;

use super::NotionClient;
use crate::error::NotionError;
use crate::types::{Page, Paginated};

/// Checkbox property that gates publishing.
const PUBLISHED_PROPERTY: &str = "Published";

/// Date property used for ordering.
const DATE_PROPERTY: &str = "Date";

impl NotionClient {
    /// Query the database for published pages, newest first.
    ///
    /// Applies the fixed filter (`Published == true`) and sort (`Date`
    /// descending) at the API, then follows cursor pagination until the
    /// result set is complete. Order is exactly as returned by the store.
    pub(crate) fn query_database(&self) -> Result<Vec<Page>, NotionError> {
        let url = format!("{}/databases/{}/query", self.api_url(), self.database_id);

        let mut pages = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let mut payload = json!({
                "filter": {
                    "property": PUBLISHED_PROPERTY,
                    "checkbox": {"equals": true}
                },
                "sorts": [
                    {"property": DATE_PROPERTY, "direction": "descending"}
                ]
            });

            if let Some(cursor) = &cursor {
                payload["start_cursor"] = json!(cursor);
            }

            info!("Querying database {}", self.database_id);

            let payload_bytes = serde_json::to_vec(&payload)?;

            let response = self
                .agent
                .post(&url)
                .header("Authorization", &self.auth_header())
                .header("Notion-Version", &self.api_version)
                .header("Content-Type", "application/json")
                .header("Accept", "application/json")
                .send(&payload_bytes[..])?;

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

            let batch: Paginated<Page> = body_reader.read_json()?;
            pages.extend(batch.results);

            if !batch.has_more {
                break;
            }
            match batch.next_cursor {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        info!("Query returned {} published pages", pages.len());
        Ok(pages)
    }
}
