// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Position bookkeeping over the source text.

use super::chars::is_line_terminator;
use super::{SourceLocation, Span};

/// A forward-moving position in the source.
///
/// Every scanner consumes characters through [`Cursor::bump`], which keeps
/// the line number and line start in step with the byte index. A CR LF
/// pair is consumed as a single line terminator.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    source: &'a str,
    index: usize,
    line: usize,
    line_start: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Self {
            source,
            index: 0,
            line: 0,
            line_start: 0,
        }
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn location(&self) -> SourceLocation {
        SourceLocation {
            line: self.line,
            column: self.index - self.line_start,
            offset: self.index,
        }
    }

    /// The unconsumed remainder of the source.
    pub(crate) fn rest(&self) -> &'a str {
        &self.source[self.index..]
    }

    pub(crate) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The character after the next one.
    pub(crate) fn peek_second(&self) -> Option<char> {
        let mut chars = self.rest().chars();
        chars.next();
        chars.next()
    }

    /// The byte `offset` positions past the cursor. Only meaningful for
    /// comparisons against ASCII.
    pub(crate) fn byte_at(&self, offset: usize) -> Option<u8> {
        self.source.as_bytes().get(self.index + offset).copied()
    }

    pub(crate) fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Consumes one character, recording a new line when it is a line
    /// terminator.
    pub(crate) fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.index += ch.len_utf8();
        if is_line_terminator(ch) {
            if ch == '\r' && self.byte_at(0) == Some(b'\n') {
                self.index += 1;
            }
            self.line += 1;
            self.line_start = self.index;
        }
        Some(ch)
    }

    /// Consumes the next character if it satisfies `pred`.
    pub(crate) fn bump_if(&mut self, pred: impl FnOnce(char) -> bool) -> Option<char> {
        match self.peek() {
            Some(ch) if pred(ch) => self.bump(),
            _ => None,
        }
    }

    /// Consumes characters while `pred` holds.
    pub(crate) fn bump_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while self.bump_if(&mut pred).is_some() {}
    }

    /// Skips `n` bytes of ASCII text that contains no line terminators.
    pub(crate) fn advance_ascii(&mut self, n: usize) {
        debug_assert!(
            self.rest().as_bytes()[..n]
                .iter()
                .all(|b| b.is_ascii() && *b != b'\n' && *b != b'\r')
        );
        self.index += n;
    }

    /// Moves back to `index` on the current line.
    pub(crate) fn reset(&mut self, index: usize) {
        debug_assert!(index >= self.line_start && index <= self.source.len());
        self.index = index;
    }

    pub(crate) fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.index)
    }

    pub(crate) fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bump_tracks_columns() {
        let mut cursor = Cursor::new("ab");
        assert_eq!(cursor.bump(), Some('a'));
        assert_eq!(cursor.location(), SourceLocation { line: 0, column: 1, offset: 1 });
        assert_eq!(cursor.bump(), Some('b'));
        assert_eq!(cursor.bump(), None);
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn test_crlf_is_one_terminator() {
        let mut cursor = Cursor::new("a\r\nb");
        cursor.bump();
        assert_eq!(cursor.bump(), Some('\r'));
        assert_eq!(cursor.location(), SourceLocation { line: 1, column: 0, offset: 3 });
        assert_eq!(cursor.peek(), Some('b'));
    }

    #[test]
    fn test_unicode_line_separators() {
        let mut cursor = Cursor::new("\u{2028}\u{2029}x");
        cursor.bump();
        cursor.bump();
        assert_eq!(cursor.location().line, 2);
        assert_eq!(cursor.location().column, 0);
        assert_eq!(cursor.location().offset, 6);
    }

    #[test]
    fn test_multibyte_advances_by_utf8_width() {
        let mut cursor = Cursor::new("éx");
        cursor.bump();
        assert_eq!(cursor.index(), 2);
        assert_eq!(cursor.peek(), Some('x'));
    }

    #[test]
    fn test_bump_while_and_slices() {
        let mut cursor = Cursor::new("abc123 rest");
        cursor.bump_while(|c| c.is_ascii_alphabetic());
        assert_eq!(cursor.slice_from(0), "abc");
        cursor.bump_while(|c| c.is_ascii_digit());
        assert_eq!(cursor.span_from(3), Span::new(3, 6));
        assert_eq!(cursor.peek(), Some(' '));
        assert_eq!(cursor.peek_second(), Some('r'));
        assert!(cursor.starts_with(" rest"));
        cursor.reset(1);
        assert_eq!(cursor.peek(), Some('b'));
    }

    #[test]
    fn test_byte_at() {
        let cursor = Cursor::new(">>>=");
        assert_eq!(cursor.byte_at(3), Some(b'='));
        assert_eq!(cursor.byte_at(4), None);
    }
}
