//! Pull-based tokenizer for the vdf format
//!
//! Wraps the logos lexer and produces one [`Token`] per call to
//! [`Tokenizer::next_token`], advancing through the source only as far as needed.
//!
//! Two rules live here rather than in the logos definitions:
//!
//! - An identifier ends at the first character outside its allowed set. That
//!   character is consumed and dropped, whether it is the closing quote or not.
//!   If the input ends first, the identifier is malformed.
//! - After `EndOfInput` or a `Malformed` token, every further call yields
//!   `EndOfInput`.

use super::error::{LexError, LexErrorKind};
use super::tokens::RawToken;
use logos::Logos;
use std::fmt;
use std::ops::Range;
use tracing::trace;

/// The kind of a token produced by the [`Tokenizer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    LeftBrace,
    RightBrace,
    EndOfInput,
    Malformed(LexErrorKind),
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "Identifier",
            TokenKind::LeftBrace => "LeftBrace",
            TokenKind::RightBrace => "RightBrace",
            TokenKind::EndOfInput => "EndOfInput",
            TokenKind::Malformed(_) => "Malformed",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified slice of the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    /// Matched text. For identifiers, the text between the quotes.
    /// For malformed tokens, the offending source text.
    pub literal: &'src str,
    /// Byte range of the whole token, including quotes and terminator
    pub span: Range<usize>,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, literal: &'src str, span: Range<usize>) -> Self {
        Self {
            kind,
            literal,
            span,
        }
    }

    fn end_of_input(offset: usize) -> Self {
        Self::new(TokenKind::EndOfInput, "", offset..offset)
    }

    /// Human-readable description, used in error messages
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Identifier => format!("identifier \"{}\"", self.literal),
            TokenKind::LeftBrace => "'{'".to_string(),
            TokenKind::RightBrace => "'}'".to_string(),
            TokenKind::EndOfInput => "end of input".to_string(),
            TokenKind::Malformed(kind) => kind.to_string(),
        }
    }

    /// Convert a malformed token into the error it stands for
    pub fn to_lex_error(&self, source: &str) -> Option<LexError> {
        match self.kind {
            TokenKind::Malformed(kind) => Some(LexError::new(kind, source, self.span.start)),
            _ => None,
        }
    }
}

/// Produces tokens on demand from a source string
pub struct Tokenizer<'src> {
    source: &'src str,
    lexer: logos::Lexer<'src, RawToken>,
    finished: bool,
}

impl<'src> Tokenizer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            lexer: RawToken::lexer(source),
            finished: false,
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Produce the next token
    pub fn next_token(&mut self) -> Token<'src> {
        if self.finished {
            return Token::end_of_input(self.source.len());
        }

        let token = match self.lexer.next() {
            None => {
                self.finished = true;
                Token::end_of_input(self.source.len())
            }
            Some(Ok(RawToken::LeftBrace)) => {
                Token::new(TokenKind::LeftBrace, self.lexer.slice(), self.lexer.span())
            }
            Some(Ok(RawToken::RightBrace)) => {
                Token::new(TokenKind::RightBrace, self.lexer.slice(), self.lexer.span())
            }
            Some(Ok(RawToken::Identifier)) => self.finish_identifier(),
            Some(Err(())) => self.unrecognized_character(),
        };

        trace!(kind = %token.kind, literal = token.literal, span = ?token.span, "token");
        token
    }

    fn finish_identifier(&mut self) -> Token<'src> {
        let span = self.lexer.span();
        // Skip the opening quote
        let literal = &self.source[span.start + 1..span.end];

        match self.lexer.remainder().chars().next() {
            Some(terminator) => {
                self.lexer.bump(terminator.len_utf8());
                Token::new(
                    TokenKind::Identifier,
                    literal,
                    span.start..span.end + terminator.len_utf8(),
                )
            }
            None => {
                self.finished = true;
                Token::new(
                    TokenKind::Malformed(LexErrorKind::UnterminatedIdentifier),
                    &self.source[span.clone()],
                    span,
                )
            }
        }
    }

    fn unrecognized_character(&mut self) -> Token<'src> {
        self.finished = true;
        let start = self.lexer.span().start;
        let c = self.source[start..]
            .chars()
            .next()
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        let end = start + c.len_utf8();
        Token::new(
            TokenKind::Malformed(LexErrorKind::UnrecognizedCharacter(c)),
            &self.source[start..end.min(self.source.len())],
            start..end,
        )
    }
}

/// Yields every token up to, but not including, `EndOfInput`
impl<'src> Iterator for Tokenizer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        (token.kind != TokenKind::EndOfInput).then_some(token)
    }
}

/// Convenience function to tokenize a string and collect all tokens
///
/// Stops after the first malformed token, which is included.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    Tokenizer::new(source).collect()
}
