// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! # ecmalex
//!
//! An ECMAScript (ES5 lexical grammar) tokenizer for parsers.
//!
//! ## Overview
//!
//! The [`Lexer`] turns source text into tokens on demand, keeping one token
//! of lookahead. It reports:
//! - Exact source slices with byte spans and 0-based line/column positions
//! - Strict-mode reserved word resolution, switchable between tokens
//! - Whether a line terminator precedes the pending token, for automatic
//!   semicolon insertion
//! - Legacy octal literals and escapes, flagged but not rejected
//!
//! Whether a `/` starts a regular expression depends on the grammar, so the
//! parser decides and calls [`Lexer::scan_regexp_in_place_of_slash`].
//!
//! ## Quick Start
//!
//! ```rust
//! use ecmalex::{Lexer, Punctuator, TokenKind};
//!
//! let mut lexer = Lexer::new("x = 1").unwrap();
//! assert_eq!(lexer.lex().unwrap().kind, TokenKind::Identifier("x".into()));
//! assert!(lexer.lex().unwrap().is_punctuator(Punctuator::Assign));
//! assert_eq!(lexer.lex().unwrap().value(), "1");
//! assert!(lexer.eof());
//! ```

#![warn(clippy::all)]

pub mod error;
pub mod lexer;
pub mod options;

pub use error::{ErrorKind, LexError, Result};
pub use lexer::{
    Keyword, Lexer, Punctuator, SourceLocation, Span, Token, TokenClass, TokenKind, TokenType,
};
pub use options::LexerOptions;

/// Tokenizes `source` with default options, up to but excluding the end of
/// input.
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    Lexer::new(source)?.collect()
}
