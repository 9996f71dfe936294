//! Notion page and property value types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::file::{FileRef, User};
use super::rich_text::RichText;

/// One page record from a database query.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Page {
    /// Page ID, used to fetch child blocks.
    #[serde(default)]
    pub id: String,
    /// Property map keyed by human-readable property name.
    #[serde(default)]
    pub properties: HashMap<String, PropertyValue>,
}

impl Page {
    /// Look up a property by name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }
}

/// A kind-tagged property value.
///
/// The tag selects which payload key carries the data; kinds this service
/// does not handle deserialize as [`PropertyValue::Unknown`].
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyValue {
    /// Title property (the database's primary text column).
    Title {
        /// Text runs.
        #[serde(default)]
        title: Vec<RichText>,
    },
    /// Plain rich text property.
    RichText {
        /// Text runs.
        #[serde(default)]
        rich_text: Vec<RichText>,
    },
    /// Date property.
    Date {
        /// Date payload (`None` when the cell is empty).
        #[serde(default)]
        date: Option<DateValue>,
    },
    /// Checkbox property.
    Checkbox {
        /// Checked state.
        #[serde(default)]
        checkbox: bool,
    },
    /// URL property.
    Url {
        /// The URL (`None` when the cell is empty).
        #[serde(default)]
        url: Option<String>,
    },
    /// Number property.
    Number {
        /// The number (`None` when the cell is empty).
        #[serde(default)]
        number: Option<f64>,
    },
    /// Single select property.
    Select {
        /// Selected option.
        #[serde(default)]
        select: Option<SelectValue>,
    },
    /// Multi select property.
    MultiSelect {
        /// Selected options, in store order.
        #[serde(default)]
        multi_select: Vec<SelectValue>,
    },
    /// Status property.
    Status {
        /// Current status option.
        #[serde(default)]
        status: Option<SelectValue>,
    },
    /// People property.
    People {
        /// Assigned users, in store order.
        #[serde(default)]
        people: Vec<User>,
    },
    /// Files property.
    Files {
        /// File entries, in store order.
        #[serde(default)]
        files: Vec<FileRef>,
    },
    /// Relation property.
    Relation {
        /// Related page references, in store order.
        #[serde(default)]
        relation: Vec<RelationRef>,
    },
    /// Formula property.
    Formula {
        /// Computed result, tagged by its own type.
        #[serde(default)]
        formula: Option<FormulaValue>,
    },
    /// Rollup property.
    Rollup {
        /// Aggregated result, tagged by its own type.
        #[serde(default)]
        rollup: Option<RollupValue>,
    },
    /// Created-by property.
    CreatedBy {
        /// Creating user.
        #[serde(default)]
        created_by: Option<User>,
    },
    /// Last-edited-by property.
    LastEditedBy {
        /// Last editing user.
        #[serde(default)]
        last_edited_by: Option<User>,
    },
    /// Created-time property.
    CreatedTime {
        /// Creation timestamp (ISO 8601).
        #[serde(default)]
        created_time: String,
    },
    /// Last-edited-time property.
    LastEditedTime {
        /// Last edit timestamp (ISO 8601).
        #[serde(default)]
        last_edited_time: String,
    },
    /// Any property kind this service does not handle.
    #[serde(other)]
    Unknown,
}

/// Date property payload.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DateValue {
    /// Start date (ISO 8601).
    #[serde(default)]
    pub start: String,
    /// End date for ranges (unused by the pipeline).
    #[serde(default)]
    pub end: Option<String>,
}

/// A select/multi-select/status option.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SelectValue {
    /// Option display name.
    #[serde(default)]
    pub name: String,
}

/// A relation entry (reference to another page).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RelationRef {
    /// Related page ID.
    #[serde(default)]
    pub id: String,
}

/// A formula result, tagged by the formula's own result type.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormulaValue {
    /// String result.
    String {
        /// The string (`None` when the formula produced nothing).
        #[serde(default)]
        string: Option<String>,
    },
    /// Number result.
    Number {
        /// The number.
        #[serde(default)]
        number: Option<f64>,
    },
    /// Boolean result.
    Boolean {
        /// The boolean.
        #[serde(default)]
        boolean: Option<bool>,
    },
    /// Date result.
    Date {
        /// The date payload.
        #[serde(default)]
        date: Option<DateValue>,
    },
    /// Any other result type.
    #[serde(other)]
    Unknown,
}

/// A rollup result, tagged by the rollup's own result type.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RollupValue {
    /// Numeric aggregate.
    Number {
        /// The number.
        #[serde(default)]
        number: Option<f64>,
    },
    /// Date aggregate.
    Date {
        /// The date payload.
        #[serde(default)]
        date: Option<DateValue>,
    },
    /// Array aggregate; items are heterogeneous kind-tagged values.
    Array {
        /// Raw items, each carrying its own `type` key.
        #[serde(default)]
        array: Vec<serde_json::Value>,
    },
    /// Any other result type.
    #[serde(other)]
    Unknown,
}
