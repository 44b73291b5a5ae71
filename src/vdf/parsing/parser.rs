//! Builder for vdf documents
//!
//! Grammar, as accepted:
//!
//! ```text
//! document := IDENT block            (anything else: empty document)
//! block    := '{' entry* ( '}' | EOF )
//! entry    := IDENT block
//!           | IDENT IDENT
//!           | IDENT                  (key without a value: dropped)
//! ```
//!
//! The only ambiguity is what follows a key, and one token of lookahead settles it.
//! The parser is deliberately lenient: a missing closing brace, a dangling key or an
//! unexpected top-level shape produce a partial or empty result instead of an error.
//! Malformed characters and a `{` where a key was expected abort the parse.

use super::error::{ParseError, SyntaxError};
use crate::vdf::ast::{Object, Value};
use crate::vdf::lexing::{LexError, LexErrorKind, Token, TokenKind, Tokenizer};
use tracing::debug;

/// Pulls tokens from a [`Tokenizer`] with a single peek slot
pub struct Parser<'src> {
    tokens: Tokenizer<'src>,
    peeked: Option<Token<'src>>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            tokens: Tokenizer::new(source),
            peeked: None,
        }
    }

    /// Consume and return the next token
    fn next(&mut self) -> Token<'src> {
        match self.peeked.take() {
            Some(token) => token,
            None => self.tokens.next_token(),
        }
    }

    /// Return the next token without consuming it
    fn peek(&mut self) -> &Token<'src> {
        let tokens = &mut self.tokens;
        self.peeked.get_or_insert_with(|| tokens.next_token())
    }

    fn peek_kind(&mut self) -> TokenKind {
        self.peek().kind
    }

    /// Parse a whole document: a single root key followed by its block.
    ///
    /// Input after the root block is never read.
    pub fn parse_document(mut self) -> Result<Object, ParseError> {
        let mut document = Object::new();

        let root = self.next();
        match root.kind {
            TokenKind::Identifier => match self.peek_kind() {
                TokenKind::LeftBrace => {
                    let block = self.parse_block()?;
                    document.insert(root.literal.to_string(), Value::Object(block));
                }
                TokenKind::Malformed(kind) => {
                    let bad = self.next();
                    return Err(self.lexical_error(kind, &bad));
                }
                other => {
                    debug!(root = root.literal, next = %other, "root key is not followed by a block");
                }
            },
            TokenKind::Malformed(kind) => return Err(self.lexical_error(kind, &root)),
            other => debug!(first = %other, "document does not start with a root key"),
        }

        Ok(document)
    }

    /// Parse a `{ ... }` block. The next token must be the opening brace.
    ///
    /// Nested blocks are kept on an explicit stack, so nesting depth is bounded
    /// by memory rather than by the call stack.
    fn parse_block(&mut self) -> Result<Object, ParseError> {
        let open = self.next();
        debug_assert_eq!(open.kind, TokenKind::LeftBrace);
        debug!(offset = open.span.start, "enter block");

        // Enclosing blocks of `object`, each with the key `object` will be stored under
        let mut parents: Vec<(&'src str, Object)> = Vec::new();
        let mut object = Object::new();
        loop {
            let token = self.next();
            match token.kind {
                TokenKind::EndOfInput => {
                    debug!(unclosed = parents.len() + 1, "end of input before closing brace");
                    while let Some((key, mut parent)) = parents.pop() {
                        parent.insert(key.to_string(), Value::Object(object));
                        object = parent;
                    }
                    break;
                }
                TokenKind::Malformed(kind) => return Err(self.lexical_error(kind, &token)),
                TokenKind::RightBrace => match parents.pop() {
                    Some((key, mut parent)) => {
                        parent.insert(key.to_string(), Value::Object(object));
                        object = parent;
                    }
                    None => break,
                },
                TokenKind::Identifier => {
                    let key = token.literal;
                    match self.peek_kind() {
                        TokenKind::LeftBrace => {
                            self.next();
                            parents.push((key, std::mem::take(&mut object)));
                        }
                        TokenKind::Identifier => {
                            let value = self.next();
                            object
                                .insert(key.to_string(), Value::String(value.literal.to_string()));
                        }
                        other => debug!(key, next = %other, "dropping key without a value"),
                    }
                }
                TokenKind::LeftBrace => {
                    let err =
                        SyntaxError::unexpected(&token, "a key or '}'", self.tokens.source());
                    debug!(error = %err, "syntax error");
                    return Err(err.into());
                }
            }
        }

        debug!(entries = object.len(), "leave block");
        Ok(object)
    }

    fn lexical_error(&self, kind: LexErrorKind, token: &Token<'_>) -> ParseError {
        let err = LexError::new(kind, self.tokens.source(), token.span.start);
        debug!(error = %err, "lexical error");
        err.into()
    }
}

/// Parse a document into its root object
pub fn parse(source: &str) -> Result<Object, ParseError> {
    Parser::new(source).parse_document()
}

/// Parse a document and wrap the root object as a [`Value`]
pub fn parse_value(source: &str) -> Result<Value, ParseError> {
    parse(source).map(Value::Object)
}
