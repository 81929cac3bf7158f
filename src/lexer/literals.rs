// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Numeric and string literal scanning.

use num_bigint::BigUint;
use num_traits::ToPrimitive;

use super::chars::{hex_digit_value, is_decimal_digit, is_line_terminator, starts_identifier};
use super::{Lexer, TokenKind};
use crate::error::Result;

impl Lexer<'_> {
    /// Reads exactly `digits` hex digits. Nothing is consumed on failure.
    pub(super) fn scan_hex_escape(&mut self, digits: usize) -> Option<u32> {
        let mut value = 0;
        for offset in 0..digits {
            let digit = hex_digit_value(char::from(self.cursor.byte_at(offset)?))?;
            value = value * 16 + digit;
        }
        self.cursor.advance_ascii(digits);
        Some(value)
    }

    /// Scans a numeric literal starting at a digit or at `.` followed by a
    /// digit.
    pub(super) fn scan_numeric(&mut self) -> Result<TokenKind> {
        let start = self.cursor.index();

        if self.cursor.peek() == Some('0') {
            match self.cursor.peek_second() {
                Some('x' | 'X') => return self.scan_hex_number(),
                Some(c) if is_decimal_digit(c) => return self.scan_octal_number(),
                _ => {}
            }
        }

        self.cursor.bump_while(is_decimal_digit);
        if self.cursor.bump_if(|c| c == '.').is_some() {
            self.cursor.bump_while(is_decimal_digit);
        }
        if self.cursor.bump_if(|c| c == 'e' || c == 'E').is_some() {
            self.cursor.bump_if(|c| c == '+' || c == '-');
            if self.cursor.bump_if(is_decimal_digit).is_none() {
                return Err(self.illegal());
            }
            self.cursor.bump_while(is_decimal_digit);
        }
        self.check_numeric_suffix()?;

        let value = self
            .cursor
            .slice_from(start)
            .parse::<f64>()
            .map_err(|_| self.illegal())?;
        Ok(TokenKind::Number {
            value,
            legacy_octal: false,
        })
    }

    fn scan_hex_number(&mut self) -> Result<TokenKind> {
        self.cursor.advance_ascii(2);
        let digits_start = self.cursor.index();
        self.cursor.bump_while(|c| c.is_ascii_hexdigit());
        if self.cursor.index() == digits_start {
            return Err(self.illegal());
        }
        self.check_numeric_suffix()?;

        Ok(TokenKind::Number {
            value: parse_radix(self.cursor.slice_from(digits_start), 16),
            legacy_octal: false,
        })
    }

    fn scan_octal_number(&mut self) -> Result<TokenKind> {
        self.cursor.bump();
        let digits_start = self.cursor.index();
        self.cursor.bump_while(|c| ('0'..='7').contains(&c));
        if self.cursor.peek().is_some_and(is_decimal_digit) {
            return Err(self.illegal());
        }
        self.check_numeric_suffix()?;

        Ok(TokenKind::Number {
            value: parse_radix(self.cursor.slice_from(digits_start), 8),
            legacy_octal: true,
        })
    }

    /// A numeric literal may not run straight into an identifier.
    fn check_numeric_suffix(&self) -> Result<()> {
        match self.cursor.peek() {
            Some(c) if starts_identifier(c) => Err(self.illegal()),
            _ => Ok(()),
        }
    }

    /// Scans a string literal, decoding its escape sequences.
    pub(super) fn scan_string(&mut self) -> Result<TokenKind> {
        let Some(quote) = self.cursor.bump() else {
            return Err(self.illegal());
        };
        let mut value = String::new();
        let mut legacy_octal = false;

        loop {
            let ch = match self.cursor.peek() {
                Some(ch) if ch == quote => {
                    self.cursor.bump();
                    break;
                }
                Some(ch) if !is_line_terminator(ch) => ch,
                _ => return Err(self.illegal()),
            };
            self.cursor.bump();
            if ch != '\\' {
                value.push(ch);
                continue;
            }

            let Some(escaped) = self.cursor.bump() else {
                return Err(self.illegal());
            };
            match escaped {
                // Line continuation; CR LF is consumed as one terminator.
                c if is_line_terminator(c) => {}
                'n' => value.push('\n'),
                'r' => value.push('\r'),
                't' => value.push('\t'),
                'b' => value.push('\u{0008}'),
                'f' => value.push('\u{000C}'),
                'v' => value.push('\u{000B}'),
                'u' => match self.scan_hex_escape(4) {
                    Some(unit) => value.push(self.combine_surrogates(unit)),
                    None => value.push('u'),
                },
                'x' => match self.scan_hex_escape(2).and_then(char::from_u32) {
                    Some(c) => value.push(c),
                    None => value.push('x'),
                },
                '0'..='7' => {
                    legacy_octal = true;
                    value.push(self.scan_octal_escape(escaped));
                }
                other => value.push(other),
            }
        }

        Ok(TokenKind::String {
            value,
            legacy_octal,
        })
    }

    /// Continues a `\0`-`\7` escape. A leading `0`-`3` allows three digits
    /// in total, `4`-`7` allows two.
    fn scan_octal_escape(&mut self, first: char) -> char {
        let max_digits = if first <= '3' { 3 } else { 2 };
        let mut code = first as u32 - '0' as u32;
        for _ in 1..max_digits {
            match self.cursor.bump_if(|c| ('0'..='7').contains(&c)) {
                Some(digit) => code = code * 8 + (digit as u32 - '0' as u32),
                None => break,
            }
        }
        // At most 0o377
        char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    /// Decodes a `\uXXXX` code unit, pairing a high surrogate with an
    /// immediately following `\uXXXX` low surrogate. Unpaired surrogates
    /// become U+FFFD.
    fn combine_surrogates(&mut self, unit: u32) -> char {
        if !(0xD800..=0xDBFF).contains(&unit) {
            return char::from_u32(unit).unwrap_or(char::REPLACEMENT_CHARACTER);
        }

        let restore = self.cursor.index();
        if self.cursor.starts_with("\\u") {
            self.cursor.advance_ascii(2);
            match self.scan_hex_escape(4) {
                Some(low @ 0xDC00..=0xDFFF) => {
                    let combined = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
                    return char::from_u32(combined).unwrap_or(char::REPLACEMENT_CHARACTER);
                }
                _ => self.cursor.reset(restore),
            }
        }
        char::REPLACEMENT_CHARACTER
    }
}

/// Parses integer digits in `radix`, rounding to the nearest `f64` when the
/// value does not fit in 64 bits.
fn parse_radix(digits: &str, radix: u32) -> f64 {
    match u64::from_str_radix(digits, radix) {
        Ok(value) => value as f64,
        Err(_) => BigUint::parse_bytes(digits.as_bytes(), radix)
            .and_then(|value| value.to_f64())
            .unwrap_or(f64::INFINITY),
    }
}
