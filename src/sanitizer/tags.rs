//! Tag and template-expression stripping primitives.
//!
//! All functions here are pure and total: they never fail and hold no state
//! beyond lazily compiled patterns.

use std::sync::OnceLock;

use regex::Regex;

/// Structural/form tags that are always removed from string values, even for
/// fields exempted from full sanitization.
pub const DENYLISTED_TAGS: [&str; 10] = [
    "form", "input", "textarea", "button", "select", "option", "optgroup", "fieldset", "label",
    "output",
];

/// One pattern per denylisted tag, matching both opening and closing forms:
/// whitespace or slashes may follow `<`, and the opening form may carry
/// arbitrary attributes.
fn denylist_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        DENYLISTED_TAGS
            .iter()
            .map(|tag| Regex::new(&format!(r"(?i)<[\s/]*{}[^>]*>", tag)).unwrap())
            .collect()
    })
}

fn any_tag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"<[^>]*>").unwrap())
}

fn expression_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{\{.*?\}\}").unwrap())
}

/// Remove every denylisted tag from `value`, keeping enclosed text.
///
/// Removal can splice two fragments into a new denylisted tag, so the pass
/// repeats until the string is stable.
pub fn strip_denylisted_tags(value: &str) -> String {
    let mut out = value.to_string();
    loop {
        let mut changed = false;
        for pattern in denylist_patterns() {
            let replaced = pattern.replace_all(&out, "");
            if replaced != out {
                out = replaced.into_owned();
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
    out
}

/// Remove every `<...>` tag from `value`, keeping enclosed text.
pub fn strip_all_tags(value: &str) -> String {
    any_tag_pattern().replace_all(value, "").into_owned()
}

/// Remove client-side template expressions from `value`.
///
/// A full `{{ ... }}` span is removed including the expression text; any
/// unpaired `{{` or `}}` left over is removed as well, so the output never
/// contains a delimiter.
pub fn strip_expressions(value: &str) -> String {
    expression_pattern()
        .replace_all(value, "")
        .replace("{{", "")
        .replace("}}", "")
}
