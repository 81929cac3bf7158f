// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Reserved word resolution.
//!
//! | Words | Non-strict | Strict |
//! |-------|------------|--------|
//! | `break` ... `with`, `const`, `in`, `instanceof` | keyword | keyword |
//! | `class enum export extends import super` | future reserved | future reserved |
//! | `let`, `yield` | contextual keyword | future strict reserved |
//! | `implements interface package private protected public static` | identifier | future strict reserved |
//!
//! `null`, `true` and `false` are literals, never keywords.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use super::{Keyword, ReservedWord, StrictReservedWord};

/// How a reserved word depends on strictness.
#[derive(Debug, Clone, Copy)]
enum Reservation {
    /// Reserved in every mode
    Always(Keyword),
    /// Contextual keyword outside strict mode, reserved inside
    Contextual(Keyword, StrictReservedWord),
    /// Plain identifier outside strict mode, reserved inside
    StrictOnly(StrictReservedWord),
}

static RESERVED_WORDS: LazyLock<FxHashMap<&'static str, Reservation>> = LazyLock::new(|| {
    use Reservation::*;

    let always = [
        Keyword::Break,
        Keyword::Case,
        Keyword::Catch,
        Keyword::Const,
        Keyword::Continue,
        Keyword::Debugger,
        Keyword::Default,
        Keyword::Delete,
        Keyword::Do,
        Keyword::Else,
        Keyword::Finally,
        Keyword::For,
        Keyword::Function,
        Keyword::If,
        Keyword::In,
        Keyword::Instanceof,
        Keyword::New,
        Keyword::Return,
        Keyword::Switch,
        Keyword::This,
        Keyword::Throw,
        Keyword::Try,
        Keyword::Typeof,
        Keyword::Var,
        Keyword::Void,
        Keyword::While,
        Keyword::With,
        Keyword::FutureReserved(ReservedWord::Class),
        Keyword::FutureReserved(ReservedWord::Enum),
        Keyword::FutureReserved(ReservedWord::Export),
        Keyword::FutureReserved(ReservedWord::Extends),
        Keyword::FutureReserved(ReservedWord::Import),
        Keyword::FutureReserved(ReservedWord::Super),
    ];
    let strict_only = [
        StrictReservedWord::Implements,
        StrictReservedWord::Interface,
        StrictReservedWord::Package,
        StrictReservedWord::Private,
        StrictReservedWord::Protected,
        StrictReservedWord::Public,
        StrictReservedWord::Static,
    ];

    let mut map = FxHashMap::default();
    for keyword in always {
        map.insert(keyword.as_str(), Always(keyword));
    }
    for word in strict_only {
        map.insert(word.as_str(), StrictOnly(word));
    }
    map.insert("let", Contextual(Keyword::Let, StrictReservedWord::Let));
    map.insert("yield", Contextual(Keyword::Yield, StrictReservedWord::Yield));
    map
});

/// Resolves identifier text to a keyword, or `None` for a plain identifier.
///
/// No reserved word is a single character or longer than ten, so those
/// lengths skip the lookup.
pub fn resolve_keyword(text: &str, strict: bool) -> Option<Keyword> {
    if text.len() == 1 || text.len() > 10 {
        return None;
    }
    match RESERVED_WORDS.get(text)? {
        Reservation::Always(keyword) => Some(*keyword),
        Reservation::Contextual(_, word) if strict => Some(Keyword::FutureStrictReserved(*word)),
        Reservation::Contextual(keyword, _) => Some(*keyword),
        Reservation::StrictOnly(word) if strict => Some(Keyword::FutureStrictReserved(*word)),
        Reservation::StrictOnly(_) => None,
    }
}
