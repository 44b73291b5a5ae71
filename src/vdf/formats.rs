//! Output format implementations for parsed documents
//!
//! - json: pretty-printed JSON
//! - yaml: YAML mapping
//! - treeviz: one line per node tree view

pub mod json;
pub mod registry;
pub mod treeviz;
pub mod yaml;

pub use json::JsonFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
pub use yaml::YamlFormatter;
