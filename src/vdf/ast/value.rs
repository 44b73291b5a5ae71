//! The parsed value tree
//!
//! Every key maps either to a leaf string or to a nested [`Object`]. Objects are
//! ordered maps so that output built from them is deterministic.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A block of key-value pairs
pub type Object = BTreeMap<String, Value>;

/// A value in the tree: a leaf string or a nested block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Object(Object),
}

impl Value {
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            Value::Object(_) => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            Value::String(_) => None,
        }
    }

    /// Look up a direct child. Always `None` on strings.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|object| object.get(key))
    }

    /// Number of nested object levels below this value (0 for strings and empty objects)
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 0)];
        while let Some((value, level)) = pending.pop() {
            let Value::Object(object) = value else {
                continue;
            };
            for child in object.values().filter(|child| child.is_object()) {
                deepest = deepest.max(level + 1);
                pending.push((child, level + 1));
            }
        }
        deepest
    }
}

/// Dropping flattens nested objects onto a work list first, so a deep tree does
/// not drop itself recursively.
impl Drop for Value {
    fn drop(&mut self) {
        let Value::Object(object) = self else {
            return;
        };
        let mut pending = vec![std::mem::take(object)];
        while let Some(object) = pending.pop() {
            for mut child in object.into_values() {
                if let Value::Object(grandchildren) = &mut child {
                    pending.push(std::mem::take(grandchildren));
                }
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::Object(object)
    }
}
