//! Environment variable expansion for string config values.
//!
//! Supports two forms:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses the default

use crate::ConfigError;

/// Expand `${VAR}` / `${VAR:-default}` references in a config value.
///
/// `field` names the config field for error messages (e.g. "notion.token").
///
/// # Errors
///
/// Returns [`ConfigError::EnvVar`] for an unset variable without a default
/// or an unterminated `${` reference.
pub(crate) fn expand(value: &str, field: &str) -> Result<String, ConfigError> {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let Some(end) = after.find('}') else {
            return Err(ConfigError::EnvVar {
                field: field.to_owned(),
                message: format!("unterminated ${{ in \"{value}\""),
            });
        };

        let reference = &after[..end];
        let (name, default) = match reference.split_once(":-") {
            Some((name, default)) => (name, Some(default)),
            None => (reference, None),
        };

        match std::env::var(name) {
            Ok(resolved) => out.push_str(&resolved),
            Err(_) => match default {
                Some(default) => out.push_str(default),
                None => {
                    return Err(ConfigError::EnvVar {
                        field: field.to_owned(),
                        message: format!("${{{name}}} not set"),
                    });
                }
            },
        }

        rest = &after[end + 1..];
    }

    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // SAFETY: each test uses its own uniquely-named variable, so concurrent
    // test threads never mutate the same entry.
    fn set_var(name: &str, value: &str) {
        unsafe { std::env::set_var(name, value) };
    }

    #[test]
    fn test_plain_values_pass_through() {
        assert_eq!(expand("no refs here", "f").unwrap(), "no refs here");
        assert_eq!(expand("", "f").unwrap(), "");
    }

    #[test]
    fn test_set_variable_expands() {
        set_var("QUILL_TEST_EXPAND_SET", "secret");

        assert_eq!(
            expand("${QUILL_TEST_EXPAND_SET}", "notion.token").unwrap(),
            "secret"
        );
        assert_eq!(
            expand("pre-${QUILL_TEST_EXPAND_SET}-post", "notion.token").unwrap(),
            "pre-secret-post"
        );
    }

    #[test]
    fn test_unset_variable_without_default_errors() {
        let err = expand("${QUILL_TEST_EXPAND_UNSET}", "notion.token").unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { field, .. } if field == "notion.token"));
    }

    #[test]
    fn test_unset_variable_with_default_uses_default() {
        assert_eq!(
            expand("${QUILL_TEST_EXPAND_DEFAULTED:-fallback}", "f").unwrap(),
            "fallback"
        );
    }

    #[test]
    fn test_set_variable_with_default_prefers_value() {
        set_var("QUILL_TEST_EXPAND_PREFERRED", "real");

        assert_eq!(
            expand("${QUILL_TEST_EXPAND_PREFERRED:-fallback}", "f").unwrap(),
            "real"
        );
    }

    #[test]
    fn test_unterminated_reference_errors() {
        assert!(expand("${OOPS", "f").is_err());
    }

    #[test]
    fn test_multiple_references_expand_in_order() {
        set_var("QUILL_TEST_EXPAND_A", "1");
        set_var("QUILL_TEST_EXPAND_B", "2");

        assert_eq!(
            expand("${QUILL_TEST_EXPAND_A}:${QUILL_TEST_EXPAND_B}", "f").unwrap(),
            "1:2"
        );
    }
}
