// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Regular expression literal scanning.
//!
//! A `/` is scanned as a punctuator by default. A parser that expects an
//! expression at that point calls [`Lexer::scan_regexp_in_place_of_slash`]
//! to rescan the pending token as a regular expression literal instead.
//! The body and flags are not validated.

use tracing::debug;

use super::chars::{is_identifier_part, is_line_terminator};
use super::{Lexer, Token, TokenKind};
use crate::error::{Result, messages};

impl Lexer<'_> {
    /// Replaces a pending `/` or `/=` with the regular expression literal
    /// starting at the same position and returns it. The literal also
    /// becomes the pending token, so the next [`Lexer::lex`] hands it out.
    pub fn scan_regexp_in_place_of_slash(&mut self) -> Result<Token> {
        let is_slash = matches!(self.lookahead.kind, TokenKind::Punctuator(p) if p.is_slash());
        if !is_slash {
            return Err(self.describe_unexpected(&self.lookahead));
        }

        let start = self.lookahead.span.start;
        let location = self.lookahead.location;
        debug!(offset = start, "rescanning slash as regular expression");
        self.cursor.reset(start);

        self.scan_regexp_body()?;
        self.cursor.bump_while(|c| c == '\\' || is_identifier_part(c));

        let text = self.cursor.slice_from(start).to_string();
        let token = self.finish_token(TokenKind::RegExp(text), start, location);
        self.lookahead = token.clone();
        Ok(token)
    }

    /// Consumes `/body/`. A `/` inside a `[...]` class does not close the
    /// literal; classes do not nest.
    fn scan_regexp_body(&mut self) -> Result<()> {
        self.cursor.bump();
        let mut in_class = false;

        loop {
            let ch = match self.cursor.peek() {
                Some(ch) if !is_line_terminator(ch) => ch,
                _ => return Err(self.make_error(messages::UNTERMINATED_REG_EXP, None)),
            };
            self.cursor.bump();

            match ch {
                '\\' => {
                    if self.cursor.bump_if(|c| !is_line_terminator(c)).is_none() {
                        return Err(self.make_error(messages::UNTERMINATED_REG_EXP, None));
                    }
                }
                '[' => in_class = true,
                ']' => in_class = false,
                '/' if !in_class => return Ok(()),
                _ => {}
            }
        }
    }
}
