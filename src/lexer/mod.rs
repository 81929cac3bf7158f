// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Lexical analysis (tokenization) for ECMAScript source code.
//!
//! The lexer transforms source text into a stream of tokens that can be
//! consumed by a parser, one token of lookahead at a time.
//!
//! ## Structure
//!
//! - `scanner.rs` - Main `Lexer` struct, identifiers and diagnostics
//! - `token.rs` - `Token`, `TokenKind` and the token catalogs
//! - `cursor.rs` - Byte index and line bookkeeping
//! - `chars.rs` - Character tables and Unicode predicates
//! - `keywords.rs` - Reserved word resolution
//! - `trivia.rs` - Whitespace and comments
//! - `operators.rs` - Punctuator scanning
//! - `literals.rs` - Number and string literals
//! - `regexp.rs` - Regular expression rescanning
//!
//! ## Usage
//!
//! ```rust
//! use ecmalex::lexer::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("var x = 42;").unwrap();
//!
//! loop {
//!     let token = lexer.lex().unwrap();
//!     if matches!(token.kind, TokenKind::Eof) {
//!         break;
//!     }
//!     println!("{:?}", token.kind);
//! }
//! ```

pub mod chars;
mod cursor;
mod keywords;
mod literals;
mod operators;
mod regexp;
mod scanner;
mod token;
mod trivia;

pub use keywords::resolve_keyword;
pub use scanner::Lexer;
pub use token::{
    Keyword, Punctuator, ReservedWord, SourceLocation, Span, StrictReservedWord, Token,
    TokenClass, TokenKind, TokenType, number_to_string,
};
