// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Error types for the tokenizer.

use thiserror::Error;

/// Result type for tokenizer operations
pub type Result<T> = std::result::Result<T, LexError>;

/// Broad category of a [`LexError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed source text: bad escapes, unterminated literals or
    /// comments, invalid numeric shapes, stray characters.
    IllegalLexeme,
    /// A well-formed token the caller did not expect. Only built through
    /// `describe_unexpected`; the tokenizer itself never raises it.
    UnexpectedToken,
}

/// A positioned diagnostic.
///
/// `line` and `column` are 1-based; `index` is the absolute byte offset into
/// the source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{line}:{column}]: {description}")]
pub struct LexError {
    /// Error category
    pub kind: ErrorKind,
    /// Byte offset of the error
    pub index: usize,
    /// 1-based line number
    pub line: usize,
    /// 1-based column (in bytes from the line start)
    pub column: usize,
    /// Rendered message without the position prefix
    pub description: String,
}

impl LexError {
    /// Creates an error, rendering `template` with `arg`.
    pub fn new(
        kind: ErrorKind,
        index: usize,
        line: usize,
        column: usize,
        template: &str,
        arg: Option<&str>,
    ) -> Self {
        Self {
            kind,
            index,
            line,
            column,
            description: render_template(template, arg),
        }
    }

    /// Returns true if this error came from malformed source text.
    pub fn is_illegal(&self) -> bool {
        self.kind == ErrorKind::IllegalLexeme
    }
}

/// Replaces every `{n}` placeholder in `template` with `arg`.
///
/// Templates only ever take a single argument, so the placeholder index is
/// not consulted. Without an argument the placeholders are removed.
pub fn render_template(template: &str, arg: Option<&str>) -> String {
    let arg = arg.unwrap_or("");
    let mut out = String::with_capacity(template.len() + arg.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        let digits = after.bytes().take_while(u8::is_ascii_digit).count();
        if digits > 0 && after.as_bytes().get(digits) == Some(&b'}') {
            out.push_str(&rest[..open]);
            out.push_str(arg);
            rest = &after[digits + 1..];
        } else {
            out.push_str(&rest[..=open]);
            rest = after;
        }
    }
    out.push_str(rest);
    out
}

/// Message templates used by the tokenizer and by `describe_unexpected`.
pub mod messages {
    /// Generic unexpected token; `{0}` is the token spelling
    pub const UNEXPECTED_TOKEN: &str = "Unexpected token {0}";
    /// Malformed lexeme
    pub const UNEXPECTED_ILLEGAL_TOKEN: &str = "Unexpected token ILLEGAL";
    /// Numeric literal where it is not allowed
    pub const UNEXPECTED_NUMBER: &str = "Unexpected number";
    /// String literal where it is not allowed
    pub const UNEXPECTED_STRING: &str = "Unexpected string";
    /// Identifier where it is not allowed
    pub const UNEXPECTED_IDENTIFIER: &str = "Unexpected identifier";
    /// Future reserved word
    pub const UNEXPECTED_RESERVED_WORD: &str = "Unexpected reserved word";
    /// End of input reached too early
    pub const UNEXPECTED_EOS: &str = "Unexpected end of input";
    /// Future reserved word that is only reserved in strict mode
    pub const STRICT_RESERVED_WORD: &str = "Use of future reserved word in strict mode";
    /// Regular expression body without a closing slash
    pub const UNTERMINATED_REG_EXP: &str = "Invalid regular expression: missing /";
}
