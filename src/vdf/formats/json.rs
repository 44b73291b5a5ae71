//! JSON output

use super::registry::{FormatError, Formatter};
use crate::vdf::ast::Object;

/// Pretty-printed JSON, keys in sorted order
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, doc: &Object) -> Result<String, FormatError> {
        serde_json::to_string_pretty(doc)
            .map(|mut out| {
                out.push('\n');
                out
            })
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "Pretty-printed JSON"
    }
}
