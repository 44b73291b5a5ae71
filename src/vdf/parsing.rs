//! Parser module for the vdf format
//!
//! Turns the token stream from [`crate::vdf::lexing`] into an [`Object`](crate::vdf::ast::Object)
//! tree. See [`parser`] for the accepted grammar and its lenient corners.

pub mod error;
pub mod parser;

pub use error::{ParseError, SyntaxError};
pub use parser::{parse, parse_value, Parser};
