// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Lexer configuration.

use serde::{Deserialize, Serialize};

/// Options applied when a [`Lexer`](crate::Lexer) is constructed.
///
/// The first lookahead token is scanned during construction, so `strict`
/// has to be known up front to classify a leading `yield` or `static`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerOptions {
    /// Initial strict-mode flag
    pub strict: bool,

    /// Treat `<!--` and line-start `-->` as single-line comments
    pub tolerate_html_comments: bool,
}

impl Default for LexerOptions {
    fn default() -> Self {
        Self {
            strict: false,
            tolerate_html_comments: true,
        }
    }
}

impl LexerOptions {
    /// Options for strict-mode code.
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = LexerOptions::default();
        assert!(!options.strict);
        assert!(options.tolerate_html_comments);
    }

    #[test]
    fn test_strict_options() {
        let options = LexerOptions::strict();
        assert!(options.strict);
        assert!(options.tolerate_html_comments);
    }

    #[test]
    fn test_deserialize_partial() {
        let options: LexerOptions = serde_json::from_str(r#"{"strict": true}"#).unwrap();
        assert!(options.strict);
        assert!(options.tolerate_html_comments);
    }

    #[test]
    fn test_deserialize_empty_uses_defaults() {
        let options: LexerOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, LexerOptions::default());
    }
}
