// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! The lexer driver that produces tokens from source text.

use std::mem;

use tracing::{debug, trace};

use super::chars::{
    IDENTIFIER_START, PUNCTUATOR_START, is_decimal_digit, is_identifier_part, is_identifier_start,
};
use super::cursor::Cursor;
use super::keywords::resolve_keyword;
use super::{SourceLocation, Span, Token, TokenClass, TokenKind};
use crate::error::{ErrorKind, LexError, Result, messages};
use crate::options::LexerOptions;

/// A lexer that tokenizes ECMAScript source code.
///
/// The lexer always holds one scanned token ahead of the caller. It is
/// scanned eagerly by the constructor, handed out by [`Lexer::lex`] and
/// replaced in the same call.
pub struct Lexer<'a> {
    pub(super) cursor: Cursor<'a>,
    pub(super) strict: bool,
    pub(super) html_comments: bool,
    pub(super) lookahead: Token,
    pub(super) has_line_terminator_before_next: bool,
    prev_token: Option<Token>,
    token_index: usize,
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer with default options and scans the first token.
    pub fn new(source: &'a str) -> Result<Self> {
        Self::with_options(source, LexerOptions::default())
    }

    /// Creates a lexer with the given options and scans the first token.
    pub fn with_options(source: &'a str, options: LexerOptions) -> Result<Self> {
        let mut lexer = Self {
            cursor: Cursor::new(source),
            strict: options.strict,
            html_comments: options.tolerate_html_comments,
            lookahead: Token::new(TokenKind::Eof, Span::default(), SourceLocation::default(), ""),
            has_line_terminator_before_next: false,
            prev_token: None,
            token_index: 0,
            finished: false,
        };
        lexer.lookahead = lexer.advance()?;
        Ok(lexer)
    }

    /// Returns the pending token and scans the one after it.
    ///
    /// Once the end-of-input token has been returned, every further call
    /// returns it again without touching the cursor.
    pub fn lex(&mut self) -> Result<Token> {
        if let Some(prev) = self.prev_token.as_ref().filter(|prev| prev.is_eof()) {
            return Ok(prev.clone());
        }

        self.has_line_terminator_before_next = false;
        let next = match self.advance() {
            Ok(next) => next,
            Err(err) => {
                debug!(index = err.index, "scan failed: {}", err);
                return Err(err);
            }
        };
        let token = mem::replace(&mut self.lookahead, next);

        trace!(
            index = self.token_index,
            class = %token.class(),
            text = %token.text,
            "lexed token"
        );
        self.token_index += 1;
        self.prev_token = Some(token.clone());
        Ok(token)
    }

    /// Returns true if the pending token is the end of input.
    pub fn eof(&self) -> bool {
        self.lookahead.is_eof()
    }

    /// The pending token.
    pub fn lookahead(&self) -> &Token {
        &self.lookahead
    }

    /// Source range of the pending token.
    pub fn lookahead_span(&self) -> Span {
        self.lookahead.span
    }

    /// Sets strict mode for the tokens scanned from now on.
    pub fn set_strict(&mut self, strict: bool) {
        self.strict = strict;
    }

    /// Returns true if reserved words are resolved in strict mode.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Returns true if a line terminator separates the token last returned
    /// by [`Lexer::lex`] from the pending token.
    pub fn has_line_terminator_before_next(&self) -> bool {
        self.has_line_terminator_before_next
    }

    /// Number of tokens handed out so far.
    pub fn token_index(&self) -> usize {
        self.token_index
    }

    /// Builds an error at the cursor position.
    pub fn make_error(&self, template: &str, arg: Option<&str>) -> LexError {
        self.make_error_for_location(&self.cursor.location(), template, arg)
    }

    /// Builds an error at `location`.
    pub fn make_error_for_location(
        &self,
        location: &SourceLocation,
        template: &str,
        arg: Option<&str>,
    ) -> LexError {
        LexError::new(
            ErrorKind::IllegalLexeme,
            location.offset,
            location.line + 1,
            location.column + 1,
            template,
            arg,
        )
    }

    /// Describes `token` as an unexpected token at its own location.
    pub fn describe_unexpected(&self, token: &Token) -> LexError {
        let spelling;
        let (template, arg) = match (token.class(), &token.kind) {
            (TokenClass::Eof, _) => (messages::UNEXPECTED_EOS, None),
            (TokenClass::NumericLiteral, _) => (messages::UNEXPECTED_NUMBER, None),
            (TokenClass::StringLiteral, _) => (messages::UNEXPECTED_STRING, None),
            (TokenClass::Ident, _) => (messages::UNEXPECTED_IDENTIFIER, None),
            (_, TokenKind::Keyword(keyword)) if keyword.is_future_reserved() => {
                (messages::UNEXPECTED_RESERVED_WORD, None)
            }
            (_, TokenKind::Keyword(keyword)) if keyword.is_future_strict_reserved() => {
                (messages::STRICT_RESERVED_WORD, None)
            }
            (_, TokenKind::Keyword(keyword)) => {
                (messages::UNEXPECTED_TOKEN, Some(keyword.as_str()))
            }
            (_, TokenKind::Punctuator(p)) => (messages::UNEXPECTED_TOKEN, Some(p.as_str())),
            _ => {
                spelling = match token.value() {
                    value if value.is_empty() => token.token_type().to_string(),
                    value => value.into_owned(),
                };
                (messages::UNEXPECTED_TOKEN, Some(spelling.as_str()))
            }
        };

        let location = token.location;
        LexError::new(
            ErrorKind::UnexpectedToken,
            location.offset,
            location.line + 1,
            location.column + 1,
            template,
            arg,
        )
    }

    /// An illegal-lexeme error at the cursor.
    pub(super) fn illegal(&self) -> LexError {
        self.make_error(messages::UNEXPECTED_ILLEGAL_TOKEN, None)
    }

    /// Skips trivia and scans one token.
    fn advance(&mut self) -> Result<Token> {
        self.skip_trivia()?;

        let start = self.cursor.index();
        let location = self.cursor.location();

        let Some(ch) = self.cursor.peek() else {
            return Ok(Token::new(TokenKind::Eof, Span::new(start, start), location, ""));
        };

        let kind = match ch as u32 {
            cp @ 0..=127 if PUNCTUATOR_START[cp as usize] => self.scan_punctuator()?,
            cp @ 0..=127 if IDENTIFIER_START[cp as usize] => self.scan_identifier()?,
            _ if ch == '.' => match self.cursor.peek_second() {
                Some(next) if is_decimal_digit(next) => self.scan_numeric()?,
                _ => self.scan_punctuator()?,
            },
            _ if ch == '"' || ch == '\'' => self.scan_string()?,
            _ if is_decimal_digit(ch) => self.scan_numeric()?,
            _ if !ch.is_ascii() && is_identifier_start(ch) => self.scan_identifier()?,
            _ => return Err(self.illegal()),
        };

        Ok(self.finish_token(kind, start, location))
    }

    /// Wraps `kind` with the source slice scanned since `start`.
    pub(super) fn finish_token(
        &self,
        kind: TokenKind,
        start: usize,
        location: SourceLocation,
    ) -> Token {
        Token::new(
            kind,
            self.cursor.span_from(start),
            location,
            self.cursor.slice_from(start),
        )
    }

    fn scan_identifier(&mut self) -> Result<TokenKind> {
        let start = self.cursor.index();

        let name = if self.cursor.peek() == Some('\\') {
            self.scan_escaped_identifier()?
        } else {
            self.cursor.bump();
            self.cursor.bump_while(is_identifier_part);
            if self.cursor.peek() == Some('\\') {
                self.cursor.reset(start);
                self.scan_escaped_identifier()?
            } else {
                self.cursor.slice_from(start).to_string()
            }
        };

        if name.chars().nth(1).is_none() {
            return Ok(TokenKind::Identifier(name));
        }
        if let Some(keyword) = resolve_keyword(&name, self.strict) {
            return Ok(TokenKind::Keyword(keyword));
        }
        Ok(match name.as_str() {
            "null" => TokenKind::Null,
            "true" => TokenKind::Boolean(true),
            "false" => TokenKind::Boolean(false),
            _ => TokenKind::Identifier(name),
        })
    }

    /// Slow path: every character may be a `\uXXXX` escape.
    fn scan_escaped_identifier(&mut self) -> Result<String> {
        let mut name = String::new();

        loop {
            let first = name.is_empty();
            let ch = match self.cursor.peek() {
                Some('\\') => {
                    self.cursor.bump();
                    if self.cursor.bump_if(|c| c == 'u').is_none() {
                        return Err(self.illegal());
                    }
                    let decoded = self
                        .scan_hex_escape(4)
                        .filter(|&cp| cp != u32::from('\\'))
                        .and_then(char::from_u32);
                    let valid = match decoded {
                        Some(c) if first => is_identifier_start(c),
                        Some(c) => is_identifier_part(c),
                        None => false,
                    };
                    match decoded {
                        Some(c) if valid => c,
                        _ => return Err(self.illegal()),
                    }
                }
                Some(c) if first && is_identifier_start(c) => {
                    self.cursor.bump();
                    c
                }
                Some(c) if !first && is_identifier_part(c) => {
                    self.cursor.bump();
                    c
                }
                _ => break,
            };
            name.push(ch);
        }

        Ok(name)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token>;

    /// Yields tokens up to, but not including, the end of input. Stops after
    /// the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.lex() {
            Ok(token) if token.is_eof() => {
                self.finished = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{Keyword, Punctuator, StrictReservedWord};

    fn kinds(src: &str) -> Vec<TokenKind> {
        Lexer::new(src).unwrap().map(|t| t.unwrap().kind).collect()
    }

    #[test]
    fn test_simple_tokens() {
        assert_eq!(
            kinds("var x = 1;"),
            vec![
                TokenKind::Keyword(Keyword::Var),
                TokenKind::Identifier("x".into()),
                TokenKind::Punctuator(Punctuator::Assign),
                TokenKind::Number {
                    value: 1.0,
                    legacy_octal: false
                },
                TokenKind::Punctuator(Punctuator::Semicolon),
            ]
        );
    }

    #[test]
    fn test_identifiers() {
        assert_eq!(
            kinds("foo _bar $baz café"),
            vec![
                TokenKind::Identifier("foo".into()),
                TokenKind::Identifier("_bar".into()),
                TokenKind::Identifier("$baz".into()),
                TokenKind::Identifier("café".into()),
            ]
        );
    }

    #[test]
    fn test_literal_words() {
        assert_eq!(
            kinds("null true false"),
            vec![TokenKind::Null, TokenKind::Boolean(true), TokenKind::Boolean(false)]
        );
    }

    #[test]
    fn test_escaped_identifiers() {
        let mut lexer = Lexer::new("\\u0061bc a\\u0062c").unwrap();
        let first = lexer.lex().unwrap();
        assert_eq!(first.kind, TokenKind::Identifier("abc".into()));
        assert_eq!(first.text, "\\u0061bc");
        let second = lexer.lex().unwrap();
        assert_eq!(second.kind, TokenKind::Identifier("abc".into()));
        assert_eq!(second.span, Span::new(9, 17));
    }

    #[test]
    fn test_escaped_keyword_resolves() {
        assert_eq!(kinds("v\\u0061r"), vec![TokenKind::Keyword(Keyword::Var)]);
    }

    #[test]
    fn test_invalid_identifier_escapes() {
        for src in ["\\u005c", "\\x41", "\\u00", "\\u0031abc", "a\\u002d"] {
            let err = Lexer::new(src).err().unwrap();
            assert!(err.is_illegal(), "{src}");
        }
    }

    #[test]
    fn test_strict_mode_resolution() {
        let options = LexerOptions::strict();
        let mut lexer = Lexer::with_options("yield static", options).unwrap();
        assert!(lexer.is_strict());
        assert!(matches!(
            lexer.lex().unwrap().kind,
            TokenKind::Keyword(Keyword::FutureStrictReserved(StrictReservedWord::Yield))
        ));
        assert!(matches!(
            lexer.lex().unwrap().kind,
            TokenKind::Keyword(Keyword::FutureStrictReserved(StrictReservedWord::Static))
        ));

        assert_eq!(
            kinds("yield static"),
            vec![TokenKind::Keyword(Keyword::Yield), TokenKind::Identifier("static".into())]
        );
    }

    #[test]
    fn test_set_strict_applies_to_later_scans() {
        let mut lexer = Lexer::new("a let").unwrap();
        lexer.set_strict(true);
        lexer.lex().unwrap();
        assert!(matches!(
            lexer.lex().unwrap().kind,
            TokenKind::Keyword(Keyword::FutureStrictReserved(StrictReservedWord::Let))
        ));
    }

    #[test]
    fn test_eof_is_idempotent() {
        let mut lexer = Lexer::new("x").unwrap();
        assert!(!lexer.eof());
        lexer.lex().unwrap();
        assert!(lexer.eof());
        let first = lexer.lex().unwrap();
        assert!(first.is_eof());
        for _ in 0..3 {
            assert_eq!(lexer.lex().unwrap(), first);
        }
        assert_eq!(lexer.token_index(), 2);
        assert_eq!(first.span, Span::new(1, 1));
    }

    #[test]
    fn test_empty_source() {
        let mut lexer = Lexer::new("").unwrap();
        assert!(lexer.eof());
        assert!(lexer.lex().unwrap().is_eof());
    }

    #[test]
    fn test_locations() {
        let mut lexer = Lexer::new("a\n  bc").unwrap();
        lexer.lex().unwrap();
        assert!(lexer.has_line_terminator_before_next());
        assert_eq!(lexer.lookahead_span(), Span::new(4, 6));
        let token = lexer.lex().unwrap();
        assert_eq!(
            token.location,
            SourceLocation {
                line: 1,
                column: 2,
                offset: 4
            }
        );
        assert!(!lexer.has_line_terminator_before_next());
    }

    #[test]
    fn test_unexpected_character() {
        let mut lexer = Lexer::new("a @").unwrap();
        let err = lexer.lex().unwrap_err();
        assert!(err.is_illegal());
        assert_eq!((err.line, err.column, err.index), (1, 3, 2));
        assert_eq!(err.to_string(), "[1:3]: Unexpected token ILLEGAL");
    }

    #[test]
    fn test_iterator_fuses_after_error() {
        let mut lexer = Lexer::new("a b # c").unwrap();
        assert!(matches!(lexer.next(), Some(Ok(_))));
        assert!(matches!(lexer.next(), Some(Err(_))));
        assert!(lexer.next().is_none());
    }

    #[test]
    fn test_make_error() {
        let lexer = Lexer::new("  x").unwrap();
        let err = lexer.make_error(messages::UNEXPECTED_TOKEN, Some("x"));
        assert_eq!((err.line, err.column, err.index), (1, 4, 3));
        assert_eq!(err.description, "Unexpected token x");

        let location = SourceLocation {
            line: 2,
            column: 0,
            offset: 10,
        };
        let err = lexer.make_error_for_location(&location, messages::UNEXPECTED_EOS, None);
        assert_eq!(err.to_string(), "[3:1]: Unexpected end of input");
    }

    #[test]
    fn test_describe_unexpected() {
        let source = "x 1 'a' enum static if ( null ";
        let mut lexer = Lexer::with_options(source, LexerOptions::strict()).unwrap();
        fn describe(lexer: &mut Lexer<'_>) -> LexError {
            let token = lexer.lex().unwrap();
            lexer.describe_unexpected(&token)
        }

        let err = describe(&mut lexer);
        assert_eq!(err.kind, ErrorKind::UnexpectedToken);
        assert_eq!(err.description, "Unexpected identifier");
        assert_eq!(describe(&mut lexer).description, "Unexpected number");
        assert_eq!(describe(&mut lexer).description, "Unexpected string");
        assert_eq!(describe(&mut lexer).description, "Unexpected reserved word");
        assert_eq!(
            describe(&mut lexer).description,
            "Use of future reserved word in strict mode"
        );
        assert_eq!(describe(&mut lexer).description, "Unexpected token if");
        let err = describe(&mut lexer);
        assert_eq!(err.description, "Unexpected token (");
        assert_eq!((err.line, err.column), (1, 24));
        assert_eq!(describe(&mut lexer).description, "Unexpected token null");
        assert_eq!(describe(&mut lexer).description, "Unexpected end of input");
    }
}
