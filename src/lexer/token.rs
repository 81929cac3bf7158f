// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Token definitions for the ECMAScript lexer.

use std::borrow::Cow;
use std::fmt;

/// A span in the source code, representing a range of bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if this span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A position in the source. `line` and `column` are 0-based; `column` is
/// the byte distance from the start of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SourceLocation {
    /// 0-based line number
    pub line: usize,
    /// 0-based column
    pub column: usize,
    /// Absolute byte offset
    pub offset: usize,
}

/// Superset groups of token types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    Eof,
    Ident,
    Keyword,
    NullLiteral,
    BooleanLiteral,
    NumericLiteral,
    StringLiteral,
    RegularExpression,
    Punctuator,
    Illegal,
}

impl TokenClass {
    /// Human-readable class name.
    pub const fn name(self) -> &'static str {
        match self {
            TokenClass::Eof => "<End>",
            TokenClass::Ident => "Identifier",
            TokenClass::Keyword => "Keyword",
            TokenClass::NullLiteral => "Null",
            TokenClass::BooleanLiteral => "Boolean",
            TokenClass::NumericLiteral => "Numeric",
            TokenClass::StringLiteral => "String",
            TokenClass::RegularExpression => "RegularExpression",
            TokenClass::Punctuator => "Punctuator",
            TokenClass::Illegal => "Illegal",
        }
    }
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Operators and punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Punctuator {
    /// (
    LParen,
    /// )
    RParen,
    /// [
    LBrack,
    /// ]
    RBrack,
    /// {
    LBrace,
    /// }
    RBrace,
    /// :
    Colon,
    /// ;
    Semicolon,
    /// .
    Period,
    /// ?
    Conditional,
    /// ++
    Inc,
    /// --
    Dec,
    /// =
    Assign,
    /// |=
    AssignBitOr,
    /// ^=
    AssignBitXor,
    /// &=
    AssignBitAnd,
    /// <<=
    AssignShl,
    /// >>=
    AssignShr,
    /// >>>=
    AssignShrUnsigned,
    /// +=
    AssignAdd,
    /// -=
    AssignSub,
    /// *=
    AssignMul,
    /// /=
    AssignDiv,
    /// %=
    AssignMod,
    /// ,
    Comma,
    /// ||
    Or,
    /// &&
    And,
    /// |
    BitOr,
    /// ^
    BitXor,
    /// &
    BitAnd,
    /// <<
    Shl,
    /// >>
    Shr,
    /// >>>
    ShrUnsigned,
    /// +
    Add,
    /// -
    Sub,
    /// *
    Mul,
    /// /
    Div,
    /// %
    Mod,
    /// ==
    Eq,
    /// !=
    Ne,
    /// ===
    EqStrict,
    /// !==
    NeStrict,
    /// <
    Lt,
    /// >
    Gt,
    /// <=
    Lte,
    /// >=
    Gte,
    /// !
    Not,
    /// ~
    BitNot,
}

impl Punctuator {
    /// Every punctuator, in declaration order.
    pub const ALL: [Punctuator; 48] = [
        Punctuator::LParen,
        Punctuator::RParen,
        Punctuator::LBrack,
        Punctuator::RBrack,
        Punctuator::LBrace,
        Punctuator::RBrace,
        Punctuator::Colon,
        Punctuator::Semicolon,
        Punctuator::Period,
        Punctuator::Conditional,
        Punctuator::Inc,
        Punctuator::Dec,
        Punctuator::Assign,
        Punctuator::AssignBitOr,
        Punctuator::AssignBitXor,
        Punctuator::AssignBitAnd,
        Punctuator::AssignShl,
        Punctuator::AssignShr,
        Punctuator::AssignShrUnsigned,
        Punctuator::AssignAdd,
        Punctuator::AssignSub,
        Punctuator::AssignMul,
        Punctuator::AssignDiv,
        Punctuator::AssignMod,
        Punctuator::Comma,
        Punctuator::Or,
        Punctuator::And,
        Punctuator::BitOr,
        Punctuator::BitXor,
        Punctuator::BitAnd,
        Punctuator::Shl,
        Punctuator::Shr,
        Punctuator::ShrUnsigned,
        Punctuator::Add,
        Punctuator::Sub,
        Punctuator::Mul,
        Punctuator::Div,
        Punctuator::Mod,
        Punctuator::Eq,
        Punctuator::Ne,
        Punctuator::EqStrict,
        Punctuator::NeStrict,
        Punctuator::Lt,
        Punctuator::Gt,
        Punctuator::Lte,
        Punctuator::Gte,
        Punctuator::Not,
        Punctuator::BitNot,
    ];

    /// Canonical spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            Punctuator::LParen => "(",
            Punctuator::RParen => ")",
            Punctuator::LBrack => "[",
            Punctuator::RBrack => "]",
            Punctuator::LBrace => "{",
            Punctuator::RBrace => "}",
            Punctuator::Colon => ":",
            Punctuator::Semicolon => ";",
            Punctuator::Period => ".",
            Punctuator::Conditional => "?",
            Punctuator::Inc => "++",
            Punctuator::Dec => "--",
            Punctuator::Assign => "=",
            Punctuator::AssignBitOr => "|=",
            Punctuator::AssignBitXor => "^=",
            Punctuator::AssignBitAnd => "&=",
            Punctuator::AssignShl => "<<=",
            Punctuator::AssignShr => ">>=",
            Punctuator::AssignShrUnsigned => ">>>=",
            Punctuator::AssignAdd => "+=",
            Punctuator::AssignSub => "-=",
            Punctuator::AssignMul => "*=",
            Punctuator::AssignDiv => "/=",
            Punctuator::AssignMod => "%=",
            Punctuator::Comma => ",",
            Punctuator::Or => "||",
            Punctuator::And => "&&",
            Punctuator::BitOr => "|",
            Punctuator::BitXor => "^",
            Punctuator::BitAnd => "&",
            Punctuator::Shl => "<<",
            Punctuator::Shr => ">>",
            Punctuator::ShrUnsigned => ">>>",
            Punctuator::Add => "+",
            Punctuator::Sub => "-",
            Punctuator::Mul => "*",
            Punctuator::Div => "/",
            Punctuator::Mod => "%",
            Punctuator::Eq => "==",
            Punctuator::Ne => "!=",
            Punctuator::EqStrict => "===",
            Punctuator::NeStrict => "!==",
            Punctuator::Lt => "<",
            Punctuator::Gt => ">",
            Punctuator::Lte => "<=",
            Punctuator::Gte => ">=",
            Punctuator::Not => "!",
            Punctuator::BitNot => "~",
        }
    }

    /// Number of source bytes the punctuator occupies.
    pub const fn width(self) -> usize {
        self.as_str().len()
    }

    /// True for `/` and `/=`, the punctuators a caller may rescan as the
    /// start of a regular expression literal.
    pub const fn is_slash(self) -> bool {
        matches!(self, Punctuator::Div | Punctuator::AssignDiv)
    }
}

impl fmt::Display for Punctuator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Words reserved for future use in every mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservedWord {
    Class,
    Enum,
    Export,
    Extends,
    Import,
    Super,
}

impl ReservedWord {
    /// Source spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            ReservedWord::Class => "class",
            ReservedWord::Enum => "enum",
            ReservedWord::Export => "export",
            ReservedWord::Extends => "extends",
            ReservedWord::Import => "import",
            ReservedWord::Super => "super",
        }
    }
}

/// Words reserved only in strict mode code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrictReservedWord {
    Implements,
    Interface,
    Let,
    Package,
    Private,
    Protected,
    Public,
    Static,
    Yield,
}

impl StrictReservedWord {
    /// Source spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            StrictReservedWord::Implements => "implements",
            StrictReservedWord::Interface => "interface",
            StrictReservedWord::Let => "let",
            StrictReservedWord::Package => "package",
            StrictReservedWord::Private => "private",
            StrictReservedWord::Protected => "protected",
            StrictReservedWord::Public => "public",
            StrictReservedWord::Static => "static",
            StrictReservedWord::Yield => "yield",
        }
    }
}

/// Keyword token kinds.
///
/// `Let` and `Yield` are the contextual keywords produced outside strict
/// mode; in strict mode the same words come back as
/// `FutureStrictReserved`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Break,
    Case,
    Catch,
    Const,
    Continue,
    Debugger,
    Default,
    Delete,
    Do,
    Else,
    Finally,
    For,
    Function,
    If,
    In,
    Instanceof,
    Let,
    New,
    Return,
    Switch,
    This,
    Throw,
    Try,
    Typeof,
    Var,
    Void,
    While,
    With,
    Yield,
    /// Reserved in every mode, not yet meaningful
    FutureReserved(ReservedWord),
    /// Reserved in strict mode only
    FutureStrictReserved(StrictReservedWord),
}

impl Keyword {
    /// Source spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Break => "break",
            Keyword::Case => "case",
            Keyword::Catch => "catch",
            Keyword::Const => "const",
            Keyword::Continue => "continue",
            Keyword::Debugger => "debugger",
            Keyword::Default => "default",
            Keyword::Delete => "delete",
            Keyword::Do => "do",
            Keyword::Else => "else",
            Keyword::Finally => "finally",
            Keyword::For => "for",
            Keyword::Function => "function",
            Keyword::If => "if",
            Keyword::In => "in",
            Keyword::Instanceof => "instanceof",
            Keyword::Let => "let",
            Keyword::New => "new",
            Keyword::Return => "return",
            Keyword::Switch => "switch",
            Keyword::This => "this",
            Keyword::Throw => "throw",
            Keyword::Try => "try",
            Keyword::Typeof => "typeof",
            Keyword::Var => "var",
            Keyword::Void => "void",
            Keyword::While => "while",
            Keyword::With => "with",
            Keyword::Yield => "yield",
            Keyword::FutureReserved(word) => word.as_str(),
            Keyword::FutureStrictReserved(word) => word.as_str(),
        }
    }

    /// Returns true for words reserved for future use in any mode.
    pub const fn is_future_reserved(self) -> bool {
        matches!(self, Keyword::FutureReserved(_))
    }

    /// Returns true for words reserved for future use in strict mode.
    pub const fn is_future_strict_reserved(self) -> bool {
        matches!(self, Keyword::FutureStrictReserved(_))
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Concrete token types with their class and canonical spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    Eos,
    Punctuator(Punctuator),
    Keyword(Keyword),
    NullLiteral,
    TrueLiteral,
    FalseLiteral,
    Number,
    String,
    RegExp,
    Identifier,
    Illegal,
}

impl TokenType {
    /// The class this type belongs to.
    pub const fn class(self) -> TokenClass {
        match self {
            TokenType::Eos => TokenClass::Eof,
            TokenType::Punctuator(_) => TokenClass::Punctuator,
            TokenType::Keyword(_) => TokenClass::Keyword,
            TokenType::NullLiteral => TokenClass::NullLiteral,
            TokenType::TrueLiteral | TokenType::FalseLiteral => TokenClass::BooleanLiteral,
            TokenType::Number => TokenClass::NumericLiteral,
            TokenType::String => TokenClass::StringLiteral,
            TokenType::RegExp => TokenClass::RegularExpression,
            TokenType::Identifier => TokenClass::Ident,
            TokenType::Illegal => TokenClass::Illegal,
        }
    }

    /// Canonical spelling. Empty for types whose text varies per token.
    pub const fn name(self) -> &'static str {
        match self {
            TokenType::Eos => "EOS",
            TokenType::Punctuator(p) => p.as_str(),
            TokenType::Keyword(k) => k.as_str(),
            TokenType::NullLiteral => "null",
            TokenType::TrueLiteral => "true",
            TokenType::FalseLiteral => "false",
            TokenType::Number
            | TokenType::String
            | TokenType::RegExp
            | TokenType::Identifier
            | TokenType::Illegal => "",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            "" => f.write_str(self.class().name()),
            name => f.write_str(name),
        }
    }
}

/// The different kinds of tokens, with their decoded payloads.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// End of input
    Eof,
    /// Identifier, with `\uXXXX` escapes decoded
    Identifier(String),
    /// Reserved word
    Keyword(Keyword),
    /// null
    Null,
    /// true / false
    Boolean(bool),
    /// Numeric literal
    Number {
        /// Parsed value
        value: f64,
        /// Written as a `0`-prefixed octal integer
        legacy_octal: bool,
    },
    /// String literal
    String {
        /// Escape-decoded contents
        value: String,
        /// Contains a `\0`-`\7` octal escape
        legacy_octal: bool,
    },
    /// Regular expression literal, verbatim `/body/flags`
    RegExp(String),
    /// Operator or punctuation
    Punctuator(Punctuator),
    /// Never produced by the lexer; malformed input is an error instead
    Illegal,
}

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The span in the source code
    pub span: Span,
    /// Start position of the token
    pub location: SourceLocation,
    /// Exact source text covered by `span`
    pub text: String,
}

impl Token {
    /// Creates a new token.
    pub fn new(
        kind: TokenKind,
        span: Span,
        location: SourceLocation,
        text: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            span,
            location,
            text: text.into(),
        }
    }

    /// The concrete catalog type of this token.
    pub fn token_type(&self) -> TokenType {
        match &self.kind {
            TokenKind::Eof => TokenType::Eos,
            TokenKind::Identifier(_) => TokenType::Identifier,
            TokenKind::Keyword(k) => TokenType::Keyword(*k),
            TokenKind::Null => TokenType::NullLiteral,
            TokenKind::Boolean(true) => TokenType::TrueLiteral,
            TokenKind::Boolean(false) => TokenType::FalseLiteral,
            TokenKind::Number { .. } => TokenType::Number,
            TokenKind::String { .. } => TokenType::String,
            TokenKind::RegExp(_) => TokenType::RegExp,
            TokenKind::Punctuator(p) => TokenType::Punctuator(*p),
            TokenKind::Illegal => TokenType::Illegal,
        }
    }

    /// The class of this token.
    pub fn class(&self) -> TokenClass {
        self.token_type().class()
    }

    /// Returns true for the end-of-input token.
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns true if a numeric or string literal used a pre-ES5 octal form.
    pub fn is_legacy_octal(&self) -> bool {
        match self.kind {
            TokenKind::Number { legacy_octal, .. } | TokenKind::String { legacy_octal, .. } => {
                legacy_octal
            }
            _ => false,
        }
    }

    /// Returns true if this token is the given punctuator.
    pub fn is_punctuator(&self, punctuator: Punctuator) -> bool {
        self.kind == TokenKind::Punctuator(punctuator)
    }

    /// The decoded value of the token.
    ///
    /// Identifier-like tokens give their (escape-decoded) name, numbers their
    /// canonical ECMAScript rendering, strings their decoded contents,
    /// regular expressions their source text and punctuators their spelling.
    pub fn value(&self) -> Cow<'_, str> {
        match &self.kind {
            TokenKind::Eof | TokenKind::Illegal => Cow::Borrowed(""),
            TokenKind::Identifier(name) => Cow::Borrowed(name),
            TokenKind::Keyword(k) => Cow::Borrowed(k.as_str()),
            TokenKind::Null => Cow::Borrowed("null"),
            TokenKind::Boolean(true) => Cow::Borrowed("true"),
            TokenKind::Boolean(false) => Cow::Borrowed("false"),
            TokenKind::Number { value, .. } => Cow::Owned(number_to_string(*value)),
            TokenKind::String { value, .. } => Cow::Borrowed(value),
            TokenKind::RegExp(text) => Cow::Borrowed(text),
            TokenKind::Punctuator(p) => Cow::Borrowed(p.as_str()),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.text.is_empty() {
            write!(f, "{}", self.class())
        } else {
            write!(f, "{} `{}`", self.class(), self.text)
        }
    }
}

/// Renders a number the way ECMAScript `Number.prototype.toString` does.
pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_negative() {
            "-Infinity".to_string()
        } else {
            "Infinity".to_string()
        };
    }

    let abs = value.abs();
    if !(1e-6..1e21).contains(&abs) {
        let mut formatted = format!("{:e}", value);
        if let Some(split) = formatted.find('e') {
            let (mantissa, exp) = formatted.split_at(split);
            let exp_digits = &exp[1..];
            let (sign, digits) = match exp_digits.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp_digits),
            };
            formatted = format!("{mantissa}e{sign}{digits}");
        }
        return formatted;
    }

    value.to_string()
}
