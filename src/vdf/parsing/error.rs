//! Errors that abort a parse

use crate::vdf::ast::location::{Position, SourceLocation};
use crate::vdf::lexing::{LexError, Token};
use std::fmt;

/// A token appeared where the grammar does not allow it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// Description of the offending token
    pub found: String,
    /// What the grammar allows at this point
    pub expected: &'static str,
    pub offset: usize,
    pub position: Position,
}

impl SyntaxError {
    pub fn unexpected(token: &Token<'_>, expected: &'static str, source: &str) -> Self {
        Self {
            found: token.describe(),
            expected,
            offset: token.span.start,
            position: SourceLocation::new(source).byte_to_position(token.span.start),
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unexpected {} at {}, expected {}",
            self.found, self.position, self.expected
        )
    }
}

impl std::error::Error for SyntaxError {}

/// Errors that can occur while parsing a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Lexical(LexError),
    Syntax(SyntaxError),
}

impl ParseError {
    pub fn position(&self) -> Position {
        match self {
            ParseError::Lexical(err) => err.position,
            ParseError::Syntax(err) => err.position,
        }
    }

    pub fn offset(&self) -> usize {
        match self {
            ParseError::Lexical(err) => err.offset,
            ParseError::Syntax(err) => err.offset,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Lexical(err) => write!(f, "Lexical error: {}", err),
            ParseError::Syntax(err) => write!(f, "Syntax error: {}", err),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Lexical(err) => Some(err),
            ParseError::Syntax(err) => Some(err),
        }
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::Lexical(err)
    }
}

impl From<SyntaxError> for ParseError {
    fn from(err: SyntaxError) -> Self {
        ParseError::Syntax(err)
    }
}
