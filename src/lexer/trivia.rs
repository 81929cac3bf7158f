// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Whitespace and comment skipping.

use super::Lexer;
use super::chars::{is_line_terminator, is_whitespace};
use crate::error::{Result, messages};

impl Lexer<'_> {
    /// Skips whitespace, line terminators and comments before the next
    /// token. Crossing a line terminator sets the ASI flag.
    ///
    /// HTML-like comments are recognized when enabled: `<!--` anywhere and
    /// `-->` only as the first thing on a line.
    pub(super) fn skip_trivia(&mut self) -> Result<()> {
        let mut at_line_start = self.cursor.index() == 0;

        while let Some(ch) = self.cursor.peek() {
            if is_whitespace(ch) {
                self.cursor.bump();
            } else if is_line_terminator(ch) {
                self.cursor.bump();
                self.has_line_terminator_before_next = true;
                at_line_start = true;
            } else if self.cursor.starts_with("//") {
                self.cursor.advance_ascii(2);
                self.skip_line_comment();
                at_line_start = true;
            } else if self.cursor.starts_with("/*") {
                if self.skip_block_comment()? {
                    at_line_start = true;
                }
            } else if self.html_comments && at_line_start && self.cursor.starts_with("-->") {
                self.cursor.advance_ascii(3);
                self.skip_line_comment();
            } else if self.html_comments && self.cursor.starts_with("<!--") {
                self.cursor.advance_ascii(4);
                self.skip_line_comment();
                at_line_start = true;
            } else {
                break;
            }
        }

        Ok(())
    }

    /// Skips to and through the end of the line.
    fn skip_line_comment(&mut self) {
        self.cursor.bump_while(|c| !is_line_terminator(c));
        if self.cursor.bump().is_some() {
            self.has_line_terminator_before_next = true;
        }
    }

    /// Skips a `/* */` comment and returns whether it spanned a line break.
    /// An unterminated comment is reported at its opening `/*`.
    fn skip_block_comment(&mut self) -> Result<bool> {
        let opening = self.cursor.location();
        self.cursor.advance_ascii(2);

        let mut crossed_line = false;
        loop {
            if self.cursor.starts_with("*/") {
                self.cursor.advance_ascii(2);
                return Ok(crossed_line);
            }
            match self.cursor.bump() {
                Some(ch) if is_line_terminator(ch) => {
                    self.has_line_terminator_before_next = true;
                    crossed_line = true;
                }
                Some(_) => {}
                None => {
                    return Err(self.make_error_for_location(
                        &opening,
                        messages::UNEXPECTED_ILLEGAL_TOKEN,
                        None,
                    ));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::{Lexer, Punctuator, TokenKind};
    use crate::options::LexerOptions;

    fn kinds(src: &str) -> Vec<TokenKind> {
        Lexer::new(src).unwrap().map(|t| t.unwrap().kind).collect()
    }

    #[test]
    fn test_single_line_comments() {
        assert_eq!(
            kinds("a // comment\nb"),
            vec![TokenKind::Identifier("a".into()), TokenKind::Identifier("b".into())]
        );
    }

    #[test]
    fn test_multi_line_comments() {
        assert_eq!(
            kinds("a /* one\ntwo */ b /**/c"),
            vec![
                TokenKind::Identifier("a".into()),
                TokenKind::Identifier("b".into()),
                TokenKind::Identifier("c".into()),
            ]
        );
    }

    #[test]
    fn test_division_vs_comment() {
        assert_eq!(
            kinds("a / b"),
            vec![
                TokenKind::Identifier("a".into()),
                TokenKind::Punctuator(Punctuator::Div),
                TokenKind::Identifier("b".into()),
            ]
        );
    }

    #[test]
    fn test_unterminated_block_comment() {
        let err = Lexer::new("/* unterminated").err().unwrap();
        assert!(err.is_illegal());
        assert_eq!((err.line, err.column, err.index), (1, 1, 0));

        let mut lexer = Lexer::new("x\n  /* open\n").unwrap();
        let err = lexer.lex().unwrap_err();
        assert_eq!((err.line, err.column), (2, 3));
    }

    #[test]
    fn test_line_terminator_flag() {
        let lexer = Lexer::new("// c\nx").unwrap();
        assert!(lexer.has_line_terminator_before_next());
        assert_eq!(lexer.lookahead().location.line, 1);

        let mut lexer = Lexer::new("a /* x */ b /* \n */ c").unwrap();
        lexer.lex().unwrap();
        assert!(!lexer.has_line_terminator_before_next());
        lexer.lex().unwrap();
        assert!(lexer.has_line_terminator_before_next());
    }

    #[test]
    fn test_unicode_whitespace() {
        assert_eq!(
            kinds("\u{FEFF}a\u{00A0}\u{3000}b\u{2028}c"),
            vec![
                TokenKind::Identifier("a".into()),
                TokenKind::Identifier("b".into()),
                TokenKind::Identifier("c".into()),
            ]
        );
    }

    #[test]
    fn test_html_open_comment() {
        assert!(kinds("<!-- hidden").is_empty());
        assert_eq!(kinds("a <!-- b\nc").len(), 2);
    }

    #[test]
    fn test_html_close_comment_at_line_start() {
        assert!(kinds("--> hidden").is_empty());
        assert_eq!(
            kinds("a\n  --> hidden\nb"),
            vec![TokenKind::Identifier("a".into()), TokenKind::Identifier("b".into())]
        );
        assert_eq!(kinds("a /*\n*/ --> hidden").len(), 1);
    }

    #[test]
    fn test_html_comments_disabled() {
        let options = LexerOptions {
            tolerate_html_comments: false,
            ..LexerOptions::default()
        };
        let tokens: Vec<_> = Lexer::with_options("<!--", options)
            .unwrap()
            .map(|t| t.unwrap().kind)
            .collect();
        assert_eq!(
            tokens,
            vec![
                TokenKind::Punctuator(Punctuator::Lt),
                TokenKind::Punctuator(Punctuator::Not),
                TokenKind::Punctuator(Punctuator::Dec),
            ]
        );
    }
}
