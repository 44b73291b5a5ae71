//! Property-based tests for the vdf parser
//!
//! Random trees are rendered to vdf text (with random whitespace and, optionally,
//! comments between tokens) and parsed back.

use proptest::prelude::*;
use vdf::{parse, Object, Value};

/// Generate identifier text (keys and leaf values)
fn identifier_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // Typical keys
        "[A-Za-z][A-Za-z0-9_]{0,10}",
        // Numeric ids and versions
        "[0-9]{1,12}",
        "[0-9]+\\.[0-9]+",
        // Anything allowed, including the empty identifier
        "[A-Za-z0-9_.-]{0,8}",
    ]
}

fn value_strategy() -> impl Strategy<Value = Value> {
    let leaf = identifier_strategy().prop_map(Value::String);
    leaf.prop_recursive(4, 48, 5, |inner| {
        prop::collection::btree_map(identifier_strategy(), inner, 0..5).prop_map(Value::Object)
    })
}

/// A document: one root key mapped to a block
fn document_strategy() -> impl Strategy<Value = Object> {
    (
        identifier_strategy(),
        prop::collection::btree_map(identifier_strategy(), value_strategy(), 0..6),
    )
        .prop_map(|(root, block)| {
            let mut doc = Object::new();
            doc.insert(root, Value::Object(block));
            doc
        })
}

/// Separators placed between tokens
fn separator_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(" ".to_string()),
        Just("\t".to_string()),
        Just("\n".to_string()),
        Just("\r\n".to_string()),
        Just("  \n\t".to_string()),
    ]
}

/// Comment text, including characters that would otherwise be tokens
fn comment_strategy() -> impl Strategy<Value = String> {
    "[a-z \"{}#=]{0,12}".prop_map(|text| format!("// {}\n", text))
}

/// Renders documents, drawing separators and comments from fixed pools
struct Renderer {
    separators: Vec<String>,
    comments: Vec<String>,
    next: usize,
}

impl Renderer {
    fn new(separators: Vec<String>, comments: Vec<String>) -> Self {
        Self {
            separators,
            comments,
            next: 0,
        }
    }

    fn gap(&mut self, out: &mut String) {
        let i = self.next;
        self.next += 1;
        if !self.separators.is_empty() {
            out.push_str(&self.separators[i % self.separators.len()]);
        } else {
            out.push(' ');
        }
        if !self.comments.is_empty() && i % 2 == 0 {
            out.push_str(&self.comments[i % self.comments.len()]);
        }
    }

    fn render_document(&mut self, doc: &Object) -> String {
        let mut out = String::new();
        for (key, value) in doc {
            self.render_entry(&mut out, key, value);
        }
        out
    }

    fn render_entry(&mut self, out: &mut String, key: &str, value: &Value) {
        out.push_str(&format!("\"{}\"", key));
        self.gap(out);
        match value {
            Value::String(s) => {
                out.push_str(&format!("\"{}\"", s));
                self.gap(out);
            }
            Value::Object(children) => {
                out.push('{');
                self.gap(out);
                for (k, v) in children {
                    self.render_entry(out, k, v);
                }
                out.push('}');
                self.gap(out);
            }
        }
    }
}

#[cfg(test)]
mod proptest_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_rendered_documents_parse_back(
            doc in document_strategy(),
            separators in prop::collection::vec(separator_strategy(), 1..4),
        ) {
            let source = Renderer::new(separators, vec![]).render_document(&doc);
            let parsed = parse(&source);
            prop_assert!(parsed.is_ok(), "Failed to parse: {}", source);
            prop_assert_eq!(parsed.unwrap(), doc);
        }

        #[test]
        fn test_comments_are_transparent(
            doc in document_strategy(),
            separators in prop::collection::vec(separator_strategy(), 1..4),
            comments in prop::collection::vec(comment_strategy(), 1..4),
        ) {
            let plain = Renderer::new(separators.clone(), vec![]).render_document(&doc);
            let commented = Renderer::new(separators, comments).render_document(&doc);
            prop_assert_eq!(parse(&plain).unwrap(), parse(&commented).unwrap());
        }

        #[test]
        fn test_depth_mirrors_brace_nesting(depth in 1usize..2048) {
            let source = format!("{}{}", "\"k\" { ".repeat(depth), "} ".repeat(depth));
            let parsed = Value::Object(parse(&source).unwrap());
            prop_assert_eq!(parsed.depth(), depth);
        }

        #[test]
        fn test_last_write_wins(
            pairs in prop::collection::vec((identifier_strategy(), identifier_strategy()), 0..12),
        ) {
            let body: String = pairs
                .iter()
                .map(|(k, v)| format!("\"{}\" \"{}\"\n", k, v))
                .collect();
            let source = format!("\"root\" {{\n{}}}", body);

            let mut expected = Object::new();
            for (k, v) in pairs {
                expected.insert(k, Value::String(v));
            }
            let parsed = parse(&source).unwrap();
            prop_assert_eq!(parsed.get("root"), Some(&Value::Object(expected)));
        }

        #[test]
        fn test_parsing_is_deterministic(source in "[\"{} a-z0-9/\n#]{0,40}") {
            prop_assert_eq!(parse(&source), parse(&source));
        }
    }
}
