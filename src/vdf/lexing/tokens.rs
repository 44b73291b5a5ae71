//! Raw token definitions for the vdf format
//!
//! The character classes of the grammar are expressed with the logos derive macro.
//! logos only recognizes where a token *starts* and how far its body runs; the
//! [`Tokenizer`](super::Tokenizer) finishes the job (consuming identifier
//! terminators, fusing after errors, reporting malformed input).
use logos::Logos;

/// Tokens recognized by the logos state machine
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"\s+")]
// A single slash starts a comment that runs to the end of the line
#[logos(skip r"/[^\r\n]*")]
pub enum RawToken {
    #[token("{")]
    LeftBrace,

    #[token("}")]
    RightBrace,

    /// Opening quote followed by the run of identifier characters.
    /// The character that ends the run (normally the closing quote) is not part of the match.
    #[regex(r#""[\p{L}\p{Nd}_.\-]*"#)]
    Identifier,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(source: &str) -> Vec<Result<RawToken, ()>> {
        RawToken::lexer(source).collect()
    }

    #[test]
    fn test_braces() {
        assert_eq!(
            raw("{ }"),
            vec![Ok(RawToken::LeftBrace), Ok(RawToken::RightBrace)]
        );
    }

    #[test]
    fn test_identifier_stops_before_closing_quote() {
        let mut lexer = RawToken::lexer(r#""AppState""#);
        assert_eq!(lexer.next(), Some(Ok(RawToken::Identifier)));
        assert_eq!(lexer.slice(), "\"AppState");
        assert_eq!(lexer.remainder(), "\"");
    }

    #[test]
    fn test_identifier_accepts_dots_dashes_and_underscores() {
        let mut lexer = RawToken::lexer(r#""a_b.c-d""#);
        assert_eq!(lexer.next(), Some(Ok(RawToken::Identifier)));
        assert_eq!(lexer.slice(), "\"a_b.c-d");
    }

    #[test]
    fn test_identifier_accepts_unicode_letters() {
        let mut lexer = RawToken::lexer("\"héllo\"");
        assert_eq!(lexer.next(), Some(Ok(RawToken::Identifier)));
        assert_eq!(lexer.slice(), "\"héllo");
    }

    #[test]
    fn test_comments_and_whitespace_are_skipped() {
        assert_eq!(
            raw("/ comment\n{ // another\r\n}"),
            vec![Ok(RawToken::LeftBrace), Ok(RawToken::RightBrace)]
        );
    }

    #[test]
    fn test_unknown_character_is_an_error() {
        assert_eq!(raw("#"), vec![Err(())]);
    }
}
