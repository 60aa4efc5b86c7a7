//! Single-value and recursive payload sanitization.

use std::collections::BTreeSet;

use serde_json::Value;

use super::exceptions::{self, DO_NOT_SANITIZE_KEY};
use super::tags;
use crate::screen::ScreenDefinition;

/// Sanitize a single string.
///
/// With `strip_tags` every tag is removed (text content kept) and template
/// expressions are stripped. Without it only the fixed structural denylist is
/// applied; all other markup is preserved.
pub fn sanitize_string(value: &str, strip_tags: bool) -> String {
    if strip_tags {
        tags::strip_expressions(&tags::strip_all_tags(value))
    } else {
        tags::strip_denylisted_tags(value)
    }
}

/// Sanitize a single value. Non-string values pass through unchanged.
pub fn sanitize(value: &Value, strip_tags: bool) -> Value {
    match value {
        Value::String(s) => Value::String(sanitize_string(s, strip_tags)),
        other => other.clone(),
    }
}

/// Recursively sanitize a nested payload against `screen`.
///
/// Top-level fields named by the screen's rich-text controls, or declared
/// under [`DO_NOT_SANITIZE_KEY`] by an earlier pass, skip full stripping and
/// get the denylist-only treatment. Everything at depth > 0 is always fully
/// stripped, including values nested under an exempted key. The effective
/// merged exception set is written back under the reserved key so the result
/// round-trips.
pub fn sanitize_data(data: &Value, screen: Option<&ScreenDefinition>) -> Value {
    let mut except = exceptions::resolve(screen);
    exceptions::merge_declared(data, &mut except);

    let mut out = sanitize_with_exceptions(data, &except, 0);
    if let Value::Object(map) = &mut out {
        map.insert(
            DO_NOT_SANITIZE_KEY.to_string(),
            Value::String(exceptions::encode(&except)),
        );
    }
    out
}

fn sanitize_with_exceptions(value: &Value, except: &BTreeSet<String>, depth: usize) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, value)| {
                    let sanitized = if value.is_object() || value.is_array() {
                        sanitize_with_exceptions(value, except, depth + 1)
                    } else {
                        // Skipping is only allowed on top-level fields.
                        sanitize(value, depth != 0 || !except.contains(key))
                    };
                    (key.clone(), sanitized)
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|value| {
                    if value.is_object() || value.is_array() {
                        sanitize_with_exceptions(value, except, depth + 1)
                    } else {
                        sanitize(value, true)
                    }
                })
                .collect(),
        ),
        leaf => sanitize(leaf, true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn screen_with_rich_text(name: &str) -> ScreenDefinition {
        serde_json::from_value(json!({
            "pages": [{
                "items": [
                    {"component": "FormTextArea", "config": {"name": name, "richtext": true}}
                ]
            }]
        }))
        .unwrap()
    }

    #[test]
    fn test_sanitize_full_strip() {
        assert_eq!(sanitize(&json!("<b>hello</b>"), true), json!("hello"));
    }

    #[test]
    fn test_sanitize_denylist_only() {
        assert_eq!(
            sanitize(&json!("<b>hello</b>"), false),
            json!("<b>hello</b>")
        );
    }

    #[test]
    fn test_sanitize_expression_span_removed() {
        assert_eq!(sanitize(&json!("a{{name}}c"), true), json!("ac"));
    }

    #[test]
    fn test_sanitize_passes_non_strings_through() {
        assert_eq!(sanitize(&json!(42), true), json!(42));
        assert_eq!(sanitize(&json!(true), true), json!(true));
        assert_eq!(sanitize(&Value::Null, true), Value::Null);
    }

    #[test]
    fn test_sanitize_string_is_idempotent() {
        for input in ["<b>a</b>{{x}}", "<form>z</form>", "plain", "<fo<form>rm>"] {
            let once = sanitize_string(input, true);
            assert_eq!(sanitize_string(&once, true), once);
            let once = sanitize_string(input, false);
            assert_eq!(sanitize_string(&once, false), once);
        }
    }

    #[test]
    fn test_sanitize_data_honors_screen_exception() {
        let screen = screen_with_rich_text("notes");
        let out = sanitize_data(
            &json!({"notes": "<b>x</b>", "other": "<b>y</b>"}),
            Some(&screen),
        );

        assert_eq!(out["notes"], json!("<b>x</b>"));
        assert_eq!(out["other"], json!("y"));
    }

    #[test]
    fn test_sanitize_data_exceptions_ignored_below_top_level() {
        let screen = screen_with_rich_text("notes");
        let out = sanitize_data(&json!({"notes": {"child": "<form>x</form>"}}), Some(&screen));

        assert_eq!(out["notes"]["child"], json!("x"));
    }

    #[test]
    fn test_sanitize_data_denylist_applies_to_exempt_fields() {
        let screen = screen_with_rich_text("notes");
        let out = sanitize_data(&json!({"notes": "<form><b>x</b></form>"}), Some(&screen));

        assert_eq!(out["notes"], json!("<b>x</b>"));
    }

    #[test]
    fn test_sanitize_data_writes_reserved_key() {
        let screen = screen_with_rich_text("notes");
        let out = sanitize_data(&json!({"notes": "x"}), Some(&screen));

        assert_eq!(out[DO_NOT_SANITIZE_KEY], json!("[\"notes\"]"));
    }

    #[test]
    fn test_sanitize_data_merges_declared_exceptions() {
        let out = sanitize_data(
            &json!({
                "summary": "<b>keep</b>",
                DO_NOT_SANITIZE_KEY: "[\"summary\"]"
            }),
            None,
        );

        assert_eq!(out["summary"], json!("<b>keep</b>"));
        assert_eq!(out[DO_NOT_SANITIZE_KEY], json!("[\"summary\"]"));
    }

    #[test]
    fn test_sanitize_data_is_idempotent() {
        let screen = screen_with_rich_text("notes");
        let input = json!({
            "notes": "<i>rich</i>",
            "other": "<script>alert(1)</script>hey",
            "nested": {"a": ["<b>x</b>", 1, null]},
        });

        let once = sanitize_data(&input, Some(&screen));
        let twice = sanitize_data(&once, Some(&screen));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_sanitize_data_preserves_shape() {
        let out = sanitize_data(&json!({"a": [1, "x", {"b": null}], "c": true}), None);

        assert_eq!(out["a"], json!([1, "x", {"b": null}]));
        assert_eq!(out["c"], json!(true));
    }
}
