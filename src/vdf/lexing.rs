//! Lexer module for the vdf format
//!
//! Tokenization is split in two layers:
//!
//! - [`tokens`]: a logos-derived [`RawToken`](tokens::RawToken) that knows the character
//!   classes (braces, quoted identifier bodies, comments, whitespace).
//! - [`tokenizer`]: the pull-based [`Tokenizer`] handed to the parser. It turns raw logos
//!   matches into [`Token`]s with literals and spans, and reports malformed input as a
//!   `Malformed` token instead of stopping the process.
//!
//! The parser pulls one token at a time, so the full token sequence is never held in memory.

pub mod error;
pub mod tokenizer;
pub mod tokens;

pub use error::{LexError, LexErrorKind};
pub use tokenizer::{tokenize, Token, TokenKind, Tokenizer};
