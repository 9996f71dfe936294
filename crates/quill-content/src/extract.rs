//! Property extractors.
//!
//! One extraction function per property kind, each mapping a kind-tagged
//! payload to a plain value. Extractors are pure and total: an absent
//! property, a payload of the wrong kind, or a missing sub-field all
//! resolve to the kind's zero value (`""`, `false`, `0`, empty vec,
//! `null`) and never fail.
//!
//! Text-bearing properties (title, rich text) read only the **first** run
//! of the list; a multi-run field is truncated, not composed.

use quill_notion::types::{FormulaValue, PropertyValue, RichText, RollupValue};
use serde_json::Value;

/// Literal content of the first text run, `""` when the list is empty.
fn first_run_text(runs: &[RichText]) -> String {
    runs.first().map_or_else(String::new, |r| r.content().to_owned())
}

/// Extract a title property.
#[must_use]
pub fn title(prop: Option<&PropertyValue>) -> String {
    match prop {
        Some(PropertyValue::Title { title }) => first_run_text(title),
        _ => String::new(),
    }
}

/// Extract a rich text property.
#[must_use]
pub fn rich_text(prop: Option<&PropertyValue>) -> String {
    match prop {
        Some(PropertyValue::RichText { rich_text }) => first_run_text(rich_text),
        _ => String::new(),
    }
}

/// Extract a date property (start date only; ranges lose their end).
#[must_use]
pub fn date(prop: Option<&PropertyValue>) -> String {
    match prop {
        Some(PropertyValue::Date { date: Some(d) }) => d.start.clone(),
        _ => String::new(),
    }
}

/// Extract a checkbox property.
#[must_use]
pub fn checkbox(prop: Option<&PropertyValue>) -> bool {
    match prop {
        Some(PropertyValue::Checkbox { checkbox }) => *checkbox,
        _ => false,
    }
}

/// Extract a URL property.
#[must_use]
pub fn url(prop: Option<&PropertyValue>) -> String {
    match prop {
        Some(PropertyValue::Url { url: Some(u) }) => u.clone(),
        _ => String::new(),
    }
}

/// Extract a number property.
#[must_use]
pub fn number(prop: Option<&PropertyValue>) -> f64 {
    match prop {
        Some(PropertyValue::Number { number: Some(n) }) => *n,
        _ => 0.0,
    }
}

/// Extract a select property's option name.
#[must_use]
pub fn select(prop: Option<&PropertyValue>) -> String {
    match prop {
        Some(PropertyValue::Select { select: Some(s) }) => s.name.clone(),
        _ => String::new(),
    }
}

/// Extract a status property's option name.
#[must_use]
pub fn status(prop: Option<&PropertyValue>) -> String {
    match prop {
        Some(PropertyValue::Status { status: Some(s) }) => s.name.clone(),
        _ => String::new(),
    }
}

/// Extract a multi select property's option names, order preserved.
#[must_use]
pub fn multi_select(prop: Option<&PropertyValue>) -> Vec<String> {
    match prop {
        Some(PropertyValue::MultiSelect { multi_select }) => {
            multi_select.iter().map(|s| s.name.clone()).collect()
        }
        _ => Vec::new(),
    }
}

/// Extract a people property's display names, order preserved.
///
/// Partial user references without a display name yield `""`.
#[must_use]
pub fn people(prop: Option<&PropertyValue>) -> Vec<String> {
    match prop {
        Some(PropertyValue::People { people }) => people
            .iter()
            .map(|u| u.name.clone().unwrap_or_default())
            .collect(),
        _ => Vec::new(),
    }
}

/// Extract a files property's resolved URLs, order preserved.
#[must_use]
pub fn files(prop: Option<&PropertyValue>) -> Vec<String> {
    match prop {
        Some(PropertyValue::Files { files }) => {
            files.iter().map(|f| f.url().to_owned()).collect()
        }
        _ => Vec::new(),
    }
}

/// Extract a relation property's page ids, order preserved.
#[must_use]
pub fn relation(prop: Option<&PropertyValue>) -> Vec<String> {
    match prop {
        Some(PropertyValue::Relation { relation }) => {
            relation.iter().map(|r| r.id.clone()).collect()
        }
        _ => Vec::new(),
    }
}

/// Extract a formula property, dispatching on the formula's result type.
///
/// String, number and boolean results pass through; date results extract
/// the start date; anything else yields `null`.
#[must_use]
pub fn formula(prop: Option<&PropertyValue>) -> Value {
    let Some(PropertyValue::Formula {
        formula: Some(formula),
    }) = prop
    else {
        return Value::Null;
    };

    match formula {
        FormulaValue::String { string: Some(s) } => Value::from(s.clone()),
        FormulaValue::Number { number: Some(n) } => Value::from(*n),
        FormulaValue::Boolean { boolean: Some(b) } => Value::from(*b),
        FormulaValue::Date { date: Some(d) } => Value::from(d.start.clone()),
        _ => Value::Null,
    }
}

/// Extract a rollup property, dispatching on the rollup's result type.
///
/// Number and date aggregates behave like their property counterparts.
/// Array aggregates are heterogeneous: each item is read through the
/// value under its own `type` key and passed along opaquely.
#[must_use]
pub fn rollup(prop: Option<&PropertyValue>) -> Value {
    let Some(PropertyValue::Rollup {
        rollup: Some(rollup),
    }) = prop
    else {
        return Value::Null;
    };

    match rollup {
        RollupValue::Number { number: Some(n) } => Value::from(*n),
        RollupValue::Date { date: Some(d) } => Value::from(d.start.clone()),
        RollupValue::Array { array } => Value::from(
            array
                .iter()
                .map(|item| {
                    item.get("type")
                        .and_then(Value::as_str)
                        .and_then(|kind| item.get(kind))
                        .cloned()
                        .unwrap_or(Value::Null)
                })
                .collect::<Vec<_>>(),
        ),
        _ => Value::Null,
    }
}

/// Extract a created-by property's display name.
#[must_use]
pub fn created_by(prop: Option<&PropertyValue>) -> String {
    match prop {
        Some(PropertyValue::CreatedBy {
            created_by: Some(u),
        }) => u.name.clone().unwrap_or_default(),
        _ => String::new(),
    }
}

/// Extract a last-edited-by property's display name.
#[must_use]
pub fn last_edited_by(prop: Option<&PropertyValue>) -> String {
    match prop {
        Some(PropertyValue::LastEditedBy {
            last_edited_by: Some(u),
        }) => u.name.clone().unwrap_or_default(),
        _ => String::new(),
    }
}

/// Extract a created-time property.
#[must_use]
pub fn created_time(prop: Option<&PropertyValue>) -> String {
    match prop {
        Some(PropertyValue::CreatedTime { created_time }) => created_time.clone(),
        _ => String::new(),
    }
}

/// Extract a last-edited-time property.
#[must_use]
pub fn last_edited_time(prop: Option<&PropertyValue>) -> String {
    match prop {
        Some(PropertyValue::LastEditedTime { last_edited_time }) => last_edited_time.clone(),
        _ => String::new(),
    }
}

/// Extract a cover URL from either a URL property or a files property.
///
/// A direct URL-kind payload wins; otherwise the first entry of a files
/// list is resolved through its `type` discriminator.
#[must_use]
pub fn cover(prop: Option<&PropertyValue>) -> String {
    match prop {
        Some(PropertyValue::Url { url: Some(u) }) => u.clone(),
        Some(PropertyValue::Files { files }) => files
            .first()
            .map(|f| f.url().to_owned())
            .unwrap_or_default(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn prop(value: serde_json::Value) -> PropertyValue {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_absent_properties_yield_zero_values() {
        assert_eq!(title(None), "");
        assert_eq!(rich_text(None), "");
        assert_eq!(date(None), "");
        assert!(!checkbox(None));
        assert_eq!(url(None), "");
        assert_eq!(number(None), 0.0);
        assert_eq!(select(None), "");
        assert_eq!(status(None), "");
        assert_eq!(multi_select(None), Vec::<String>::new());
        assert_eq!(people(None), Vec::<String>::new());
        assert_eq!(files(None), Vec::<String>::new());
        assert_eq!(relation(None), Vec::<String>::new());
        assert_eq!(formula(None), Value::Null);
        assert_eq!(rollup(None), Value::Null);
        assert_eq!(created_by(None), "");
        assert_eq!(last_edited_by(None), "");
        assert_eq!(created_time(None), "");
        assert_eq!(last_edited_time(None), "");
        assert_eq!(cover(None), "");
    }

    #[test]
    fn test_empty_payloads_yield_zero_values() {
        assert_eq!(title(Some(&prop(json!({"type": "title"})))), "");
        assert_eq!(date(Some(&prop(json!({"type": "date"})))), "");
        assert_eq!(number(Some(&prop(json!({"type": "number"})))), 0.0);
        assert_eq!(select(Some(&prop(json!({"type": "select"})))), "");
        assert_eq!(formula(Some(&prop(json!({"type": "formula"})))), Value::Null);
        assert_eq!(cover(Some(&prop(json!({"type": "files"})))), "");
    }

    #[test]
    fn test_mismatched_kind_reads_as_absent() {
        let checkbox_prop = prop(json!({"type": "checkbox", "checkbox": true}));

        assert_eq!(title(Some(&checkbox_prop)), "");
        assert_eq!(number(Some(&checkbox_prop)), 0.0);
        assert_eq!(multi_select(Some(&checkbox_prop)), Vec::<String>::new());
    }

    #[test]
    fn test_title_truncates_to_first_run() {
        let p = prop(json!({
            "type": "title",
            "title": [
                {"text": {"content": "First"}},
                {"text": {"content": " Second"}}
            ]
        }));

        assert_eq!(title(Some(&p)), "First");
    }

    #[test]
    fn test_date_ignores_end() {
        let p = prop(json!({
            "type": "date",
            "date": {"start": "2024-03-01", "end": "2024-03-05"}
        }));

        assert_eq!(date(Some(&p)), "2024-03-01");
    }

    #[test]
    fn test_multi_select_preserves_order_without_dedup() {
        let p = prop(json!({
            "type": "multi_select",
            "multi_select": [{"name": "rust"}, {"name": "web"}, {"name": "rust"}]
        }));

        assert_eq!(multi_select(Some(&p)), vec!["rust", "web", "rust"]);
    }

    #[test]
    fn test_people_without_names_yield_empty_strings() {
        let p = prop(json!({
            "type": "people",
            "people": [{"id": "u1", "name": "Ada"}, {"id": "u2"}]
        }));

        assert_eq!(people(Some(&p)), vec!["Ada", ""]);
    }

    #[test]
    fn test_files_resolve_through_discriminator() {
        let p = prop(json!({
            "type": "files",
            "files": [
                {"type": "file", "file": {"url": "https://files.example/a.pdf"}},
                {"type": "external", "external": {"url": "https://cdn.example/b.pdf"}}
            ]
        }));

        assert_eq!(
            files(Some(&p)),
            vec!["https://files.example/a.pdf", "https://cdn.example/b.pdf"]
        );
    }

    #[test]
    fn test_formula_dispatch() {
        let string = prop(json!({"type": "formula", "formula": {"type": "string", "string": "hi"}}));
        let num = prop(json!({"type": "formula", "formula": {"type": "number", "number": 4.5}}));
        let boolean =
            prop(json!({"type": "formula", "formula": {"type": "boolean", "boolean": true}}));
        let date_f = prop(json!({
            "type": "formula",
            "formula": {"type": "date", "date": {"start": "2024-01-02"}}
        }));

        assert_eq!(formula(Some(&string)), json!("hi"));
        assert_eq!(formula(Some(&num)), json!(4.5));
        assert_eq!(formula(Some(&boolean)), json!(true));
        assert_eq!(formula(Some(&date_f)), json!("2024-01-02"));
    }

    #[test]
    fn test_rollup_array_reads_items_through_their_type_key() {
        let p = prop(json!({
            "type": "rollup",
            "rollup": {"type": "array", "array": [
                {"type": "number", "number": 2.0},
                {"type": "rich_text", "rich_text": [{"text": {"content": "x"}}]},
                {"no_type_key": true}
            ]}
        }));

        let value = rollup(Some(&p));
        let items = value.as_array().unwrap();

        assert_eq!(items[0], json!(2.0));
        assert_eq!(items[1], json!([{"text": {"content": "x"}}]));
        assert_eq!(items[2], Value::Null);
    }

    #[test]
    fn test_cover_url_kind_wins_over_files_shape() {
        let direct = prop(json!({"type": "url", "url": "https://cdn.example/cover.png"}));
        assert_eq!(cover(Some(&direct)), "https://cdn.example/cover.png");

        let from_files = prop(json!({
            "type": "files",
            "files": [{"type": "file", "file": {"url": "https://files.example/c.png"}}]
        }));
        assert_eq!(cover(Some(&from_files)), "https://files.example/c.png");
    }
}
