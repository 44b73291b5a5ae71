//! # vdf
//!
//! A parser for the brace-delimited key-value format used by Steam manifests and
//! Source engine configuration (`.vdf`, `.acf`):
//!
//! ```text
//! "AppState"
//! {
//!     "appid"  "294100"   // line comment
//!     "UserConfig" { "language" "english" }
//! }
//! ```
//!
//! Documents are parsed into an [`Object`] tree whose values are either strings
//! or nested objects. Parsing is a single pass: the [`Tokenizer`](vdf::lexing::Tokenizer)
//! produces tokens on demand and the [`Parser`](vdf::parsing::Parser) consumes them with
//! one token of lookahead.
//!
//! The module layout follows the pipeline:
//!
//! - [`vdf::lexing`]: tokens and the pull-based tokenizer
//! - [`vdf::parsing`]: recursive-descent parser and parse errors
//! - [`vdf::ast`]: the value tree, path lookups and source positions
//! - [`vdf::formats`]: JSON, YAML and tree view output
//! - [`vdf::processor`]: `stage-format` processing used by the `vdf` binary

pub mod vdf;

pub use vdf::ast::{lookup, Object, Value};
pub use vdf::parsing::{parse, parse_value, ParseError};
