//! Read-side types for screen (form) definitions.
//!
//! A screen is an ordered list of pages, each holding an ordered list of
//! items. An item is either a leaf control (`component` + `config`) or a
//! container such as a table whose `items` hold per-cell item lists. Screens
//! are owned by the form design tooling; this crate only reads them to find
//! fields configured as rich text.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Component type that can be configured as a rich-text field.
pub const RICH_TEXT_COMPONENT: &str = "FormTextArea";

/// A screen definition as stored by the form designer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScreenDefinition {
    #[serde(default)]
    pub pages: Vec<ScreenPage>,
}

/// One page of a screen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScreenPage {
    /// Items are kept as raw JSON: the designer's item vocabulary is open,
    /// and this crate only inspects `component`, `config` and nested `items`.
    #[serde(default)]
    pub items: Vec<Value>,
}
