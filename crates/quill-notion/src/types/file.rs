//! Notion file reference and user types.

use serde::{Deserialize, Serialize};

/// A file reference with a `type` discriminator.
///
/// Notion represents both uploaded files (`"file"`, a signed temporary URL)
/// and linked files (`"external"`) with the same two-branch shape. Covers,
/// image blocks and entries of a `files` property all use it. The
/// discriminator is kept as a plain string so unrecognized or missing
/// branches resolve to an empty URL instead of a parse failure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FileRef {
    /// Discriminator: `"file"` or `"external"`.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Display name (present on `files` property entries).
    #[serde(default)]
    pub name: Option<String>,
    /// Workspace-hosted file branch.
    #[serde(default)]
    pub file: Option<HostedFile>,
    /// External link branch.
    #[serde(default)]
    pub external: Option<ExternalFile>,
}

impl FileRef {
    /// Resolve the URL through the `type` discriminator.
    ///
    /// Returns `""` when the discriminator is unrecognized or the selected
    /// branch is missing its URL.
    #[must_use]
    pub fn url(&self) -> &str {
        match self.kind.as_str() {
            "file" => self.file.as_ref().map_or("", |f| f.url.as_str()),
            "external" => self.external.as_ref().map_or("", |f| f.url.as_str()),
            _ => "",
        }
    }
}

/// Workspace-hosted file payload.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HostedFile {
    /// Signed temporary URL.
    #[serde(default)]
    pub url: String,
    /// Signature expiry timestamp (ISO 8601).
    #[serde(default)]
    pub expiry_time: Option<String>,
}

/// External file payload.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ExternalFile {
    /// Link URL.
    #[serde(default)]
    pub url: String,
}

/// A workspace user (partial reference as embedded in properties).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct User {
    /// User ID.
    #[serde(default)]
    pub id: String,
    /// Display name (absent on partial references).
    #[serde(default)]
    pub name: Option<String>,
}
