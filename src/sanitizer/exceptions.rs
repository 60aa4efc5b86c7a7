//! Resolution of the per-pass sanitization exception set.
//!
//! The screen definition is the authoritative floor: a field is exempt from
//! full sanitization only when its screen item is a rich-text control, or when
//! the payload itself declares the field under the reserved key written by an
//! earlier pass. Exceptions only ever grow via explicit declaration.

use std::collections::BTreeSet;

use serde_json::Value;

use crate::screen::{ScreenDefinition, RICH_TEXT_COMPONENT};

/// Reserved payload key carrying the JSON-encoded exception list.
///
/// Read on input (caller-declared exceptions) and written on output (effective
/// merged exceptions), so a sanitized payload is self-describing for the next
/// pass across a store/reload round trip.
pub const DO_NOT_SANITIZE_KEY: &str = "_DO_NOT_SANITIZE";

/// Collect the names of rich-text fields declared by `screen`.
pub fn resolve(screen: Option<&ScreenDefinition>) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    if let Some(screen) = screen {
        for page in &screen.pages {
            collect_rich_text(&page.items, &mut names);
        }
    }
    names
}

fn collect_rich_text(items: &[Value], names: &mut BTreeSet<String>) {
    for item in items {
        if let Some(cells) = item.get("items").and_then(Value::as_array) {
            // Inside a table: each cell holds its own item list.
            for cell in cells {
                if let Some(cell_items) = cell.as_array() {
                    collect_rich_text(cell_items, names);
                }
            }
        } else if item.get("component").and_then(Value::as_str) == Some(RICH_TEXT_COMPONENT)
            && item.pointer("/config/richtext").and_then(Value::as_bool) == Some(true)
        {
            if let Some(name) = item.pointer("/config/name").and_then(Value::as_str) {
                names.insert(name.to_string());
            }
        }
    }
}

/// Union any exceptions declared on `data` under the reserved key into `base`.
///
/// The declaration is a JSON string holding an array of field names; a
/// malformed declaration is ignored rather than rejected.
pub fn merge_declared(data: &Value, base: &mut BTreeSet<String>) {
    if let Some(declared) = data.get(DO_NOT_SANITIZE_KEY).and_then(Value::as_str) {
        if let Ok(names) = serde_json::from_str::<Vec<String>>(declared) {
            base.extend(names);
        }
    }
}

/// Encode the merged set for the reserved key: a sorted JSON array, so round
/// trips are byte-stable.
pub fn encode(except: &BTreeSet<String>) -> String {
    serde_json::to_string(except).unwrap_or_else(|_| "[]".to_string())
}
