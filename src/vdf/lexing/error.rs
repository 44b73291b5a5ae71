//! Lexical error types

use crate::vdf::ast::location::{Position, SourceLocation};
use std::fmt;

/// Why a stretch of source could not be turned into a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// A character that cannot start any token
    UnrecognizedCharacter(char),
    /// A quoted identifier still open when the input ended
    UnterminatedIdentifier,
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexErrorKind::UnrecognizedCharacter(c) => {
                write!(f, "unrecognized character: U+{:04X} {:?}", *c as u32, c)
            }
            LexErrorKind::UnterminatedIdentifier => {
                write!(f, "unterminated quoted identifier")
            }
        }
    }
}

/// A lexical error located in the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub kind: LexErrorKind,
    /// Byte offset of the offending text
    pub offset: usize,
    pub position: Position,
}

impl LexError {
    pub fn new(kind: LexErrorKind, source: &str, offset: usize) -> Self {
        Self {
            kind,
            offset,
            position: SourceLocation::new(source).byte_to_position(offset),
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.position)
    }
}

impl std::error::Error for LexError {}
