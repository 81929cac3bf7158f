// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Character classification.
//!
//! ASCII code points are dispatched through fixed tables; everything above
//! U+007F goes through the Unicode predicates, which use the `unicode-xid`
//! tables for identifier characters.

use super::Punctuator;
use unicode_xid::UnicodeXID;

/// Punctuator spelled by a single ASCII character, if any.
pub static ONE_CHAR_PUNCTUATOR: [Option<Punctuator>; 128] = build_one_char_punctuator();

/// ASCII characters that begin a punctuator. `.` is absent: it may also
/// begin a number and is dispatched separately.
pub static PUNCTUATOR_START: [bool; 128] = build_punctuator_start();

/// ASCII characters that begin an identifier, including `\` for escapes.
pub static IDENTIFIER_START: [bool; 128] = build_identifier_start();

const fn build_one_char_punctuator() -> [Option<Punctuator>; 128] {
    let mut table = [None; 128];
    table[b'!' as usize] = Some(Punctuator::Not);
    table[b'%' as usize] = Some(Punctuator::Mod);
    table[b'&' as usize] = Some(Punctuator::BitAnd);
    table[b'(' as usize] = Some(Punctuator::LParen);
    table[b')' as usize] = Some(Punctuator::RParen);
    table[b'*' as usize] = Some(Punctuator::Mul);
    table[b'+' as usize] = Some(Punctuator::Add);
    table[b',' as usize] = Some(Punctuator::Comma);
    table[b'-' as usize] = Some(Punctuator::Sub);
    table[b'.' as usize] = Some(Punctuator::Period);
    table[b'/' as usize] = Some(Punctuator::Div);
    table[b':' as usize] = Some(Punctuator::Colon);
    table[b';' as usize] = Some(Punctuator::Semicolon);
    table[b'<' as usize] = Some(Punctuator::Lt);
    table[b'=' as usize] = Some(Punctuator::Assign);
    table[b'>' as usize] = Some(Punctuator::Gt);
    table[b'?' as usize] = Some(Punctuator::Conditional);
    table[b'[' as usize] = Some(Punctuator::LBrack);
    table[b']' as usize] = Some(Punctuator::RBrack);
    table[b'^' as usize] = Some(Punctuator::BitXor);
    table[b'{' as usize] = Some(Punctuator::LBrace);
    table[b'|' as usize] = Some(Punctuator::BitOr);
    table[b'}' as usize] = Some(Punctuator::RBrace);
    table[b'~' as usize] = Some(Punctuator::BitNot);
    table
}

const fn build_punctuator_start() -> [bool; 128] {
    let one_char = build_one_char_punctuator();
    let mut table = [false; 128];
    let mut i = 0;
    while i < 128 {
        table[i] = one_char[i].is_some();
        i += 1;
    }
    table[b'.' as usize] = false;
    table
}

const fn build_identifier_start() -> [bool; 128] {
    let mut table = [false; 128];
    let mut i = 0;
    while i < 128 {
        let b = i as u8;
        table[i] = b.is_ascii_alphabetic() || b == b'$' || b == b'_' || b == b'\\';
        i += 1;
    }
    table
}

/// Checks if a character can start an identifier.
pub fn is_identifier_start(ch: char) -> bool {
    if ch.is_ascii() {
        return ch.is_ascii_alphabetic() || ch == '$' || ch == '_';
    }
    ch.is_xid_start()
}

/// Checks if a character can continue an identifier.
pub fn is_identifier_part(ch: char) -> bool {
    if ch.is_ascii() {
        return ch.is_ascii_alphanumeric() || ch == '$' || ch == '_';
    }
    // ZWNJ and ZWJ
    ch == '\u{200C}' || ch == '\u{200D}' || ch.is_xid_continue()
}

/// Checks if a character may follow a numeric literal without separation.
/// Anything that could start an identifier (an escape included) may not.
pub fn starts_identifier(ch: char) -> bool {
    match ch as u32 {
        cp @ 0..=127 => IDENTIFIER_START[cp as usize],
        _ => is_identifier_start(ch),
    }
}

/// Checks for ECMAScript white space (excluding line terminators).
pub fn is_whitespace(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\u{000B}'
            | '\u{000C}'
            | ' '
            | '\u{00A0}'
            | '\u{FEFF}'
            | '\u{1680}'
            | '\u{180E}'
            | '\u{2000}'..='\u{200A}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

/// Checks for LF, CR, LS and PS.
pub fn is_line_terminator(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Checks for `0`-`9`.
pub fn is_decimal_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Value of a hexadecimal digit.
pub fn hex_digit_value(ch: char) -> Option<u32> {
    ch.to_digit(16)
}
