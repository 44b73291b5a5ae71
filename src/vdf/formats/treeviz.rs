//! Treeviz formatter
//!
//! One line per node, nesting drawn with box characters, 2 columns per level:
//!
//! ```text
//! └─ § AppState
//!   ├─ ◦ appid: 294100
//!   └─ § UserConfig
//!     └─ ◦ language: english
//! ```
//!
//! Icons: `§` for blocks, `◦` for string values. Values are truncated to 30 characters.

use super::registry::{FormatError, Formatter};
use crate::vdf::ast::{Object, Value};

const MAX_LABEL_CHARS: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str(doc: &Object) -> String {
    let mut result = String::new();
    append_entries(&mut result, doc, "");
    result
}

fn append_entries(result: &mut String, object: &Object, prefix: &str) {
    let count = object.len();
    for (i, (key, value)) in object.iter().enumerate() {
        append_entry(result, key, value, prefix, i == count - 1);
    }
}

fn append_entry(result: &mut String, key: &str, value: &Value, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };

    match value {
        Value::String(s) => {
            result.push_str(&format!(
                "{}{} ◦ {}: {}\n",
                prefix,
                connector,
                key,
                truncate(s, MAX_LABEL_CHARS)
            ));
        }
        Value::Object(children) => {
            result.push_str(&format!("{}{} § {}\n", prefix, connector, key));
            let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
            append_entries(result, children, &new_prefix);
        }
    }
}

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(&self, doc: &Object) -> Result<String, FormatError> {
        Ok(to_treeviz_str(doc))
    }

    fn description(&self) -> &str {
        "One line per node tree view"
    }
}
