//! Path lookups into a parsed tree
//!
//! Documents are usually read by walking a known path, e.g. `AppState` → `name`.
//! Two spellings are supported: a slice of keys ([`lookup`]) and a slash-separated
//! pointer ([`Value::pointer`]). Keys can never contain `/`, so no escaping is needed.

use super::value::{Object, Value};

/// Follow `path` from `object`. An empty path yields `None` since an object
/// is not itself a [`Value`].
pub fn lookup<'a>(object: &'a Object, path: &[&str]) -> Option<&'a Value> {
    let (first, rest) = path.split_first()?;
    rest.iter()
        .try_fold(object.get(*first)?, |value, key| value.get(key))
}

impl Value {
    /// Look up a value by a pointer such as `/AppState/name`.
    ///
    /// The empty pointer refers to the value itself. Pointers that do not start
    /// with `/` match nothing.
    pub fn pointer(&self, pointer: &str) -> Option<&Value> {
        if pointer.is_empty() {
            return Some(self);
        }
        let rest = pointer.strip_prefix('/')?;
        rest.split('/')
            .try_fold(self, |value, key| value.get(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vdf::parsing::parse;

    const MANIFEST: &str = r#"
        "AppState"
        {
            "appid"     "294100"
            "name"      "RimWorld"
            "UserConfig"
            {
                "language"  "english"
            }
        }
    "#;

    #[test]
    fn test_lookup_by_path() {
        let doc = parse(MANIFEST).unwrap();
        assert_eq!(
            lookup(&doc, &["AppState", "name"]).and_then(Value::as_str),
            Some("RimWorld")
        );
        assert_eq!(
            lookup(&doc, &["AppState", "UserConfig", "language"]).and_then(Value::as_str),
            Some("english")
        );
        assert!(lookup(&doc, &["AppState", "UserConfig"]).unwrap().is_object());
    }

    #[test]
    fn test_lookup_misses() {
        let doc = parse(MANIFEST).unwrap();
        assert_eq!(lookup(&doc, &[]), None);
        assert_eq!(lookup(&doc, &["Missing"]), None);
        // Descending through a string fails
        assert_eq!(lookup(&doc, &["AppState", "name", "x"]), None);
    }

    #[test]
    fn test_pointer() {
        let root = Value::Object(parse(MANIFEST).unwrap());
        assert_eq!(
            root.pointer("/AppState/appid").and_then(Value::as_str),
            Some("294100")
        );
        assert_eq!(root.pointer(""), Some(&root));
        assert_eq!(root.pointer("AppState"), None);
        assert_eq!(root.pointer("/AppState/nope"), None);
    }
}
