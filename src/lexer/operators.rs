// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Punctuator scanning.
//!
//! Operators are matched by maximal munch: the longest punctuator starting
//! at the cursor always wins.
//!
//! | First | Variants |
//! |-------|----------|
//! | `=` | `=`, `==`, `===` |
//! | `!` | `!`, `!=`, `!==` |
//! | `<` | `<`, `<=`, `<<`, `<<=` |
//! | `>` | `>`, `>=`, `>>`, `>>=`, `>>>`, `>>>=` |
//! | `+` `-` | `+`, `+=`, `++` (and the `-` forms) |
//! | `&` `\|` | `&`, `&=`, `&&` (and the `\|` forms) |
//! | `*` `/` `%` `^` | the operator and its `=` form |
//!
//! `. ( ) { } [ ] : ; , ? ~` never combine with what follows.

use super::chars::ONE_CHAR_PUNCTUATOR;
use super::{Lexer, Punctuator, TokenKind};
use crate::error::Result;

impl Lexer<'_> {
    /// Scans the punctuator at the cursor.
    pub(super) fn scan_punctuator(&mut self) -> Result<TokenKind> {
        let Some(punctuator) = self.match_punctuator() else {
            return Err(self.illegal());
        };
        self.cursor.advance_ascii(punctuator.width());
        Ok(TokenKind::Punctuator(punctuator))
    }

    fn match_punctuator(&self) -> Option<Punctuator> {
        let at = |offset| self.cursor.byte_at(offset);
        let ch1 = at(0)?;
        let single = || ONE_CHAR_PUNCTUATOR.get(ch1 as usize).copied().flatten();

        if matches!(
            ch1,
            b'.' | b'(' | b')' | b';' | b',' | b'{' | b'}' | b'[' | b']' | b':' | b'?' | b'~'
        ) {
            return single();
        }

        if at(1) == Some(b'=') {
            let third_is_eq = at(2) == Some(b'=');
            let assign = match ch1 {
                b'=' if third_is_eq => Some(Punctuator::EqStrict),
                b'=' => Some(Punctuator::Eq),
                b'!' if third_is_eq => Some(Punctuator::NeStrict),
                b'!' => Some(Punctuator::Ne),
                b'|' => Some(Punctuator::AssignBitOr),
                b'+' => Some(Punctuator::AssignAdd),
                b'-' => Some(Punctuator::AssignSub),
                b'*' => Some(Punctuator::AssignMul),
                b'<' => Some(Punctuator::Lte),
                b'>' => Some(Punctuator::Gte),
                b'/' => Some(Punctuator::AssignDiv),
                b'%' => Some(Punctuator::AssignMod),
                b'^' => Some(Punctuator::AssignBitXor),
                b'&' => Some(Punctuator::AssignBitAnd),
                _ => None,
            };
            if assign.is_some() {
                return assign;
            }
        }

        if at(1) == Some(ch1) {
            match (ch1, at(2)) {
                (b'>', Some(b'>')) if at(3) == Some(b'=') => {
                    return Some(Punctuator::AssignShrUnsigned);
                }
                (b'>', Some(b'>')) => return Some(Punctuator::ShrUnsigned),
                (b'<', Some(b'=')) => return Some(Punctuator::AssignShl),
                (b'>', Some(b'=')) => return Some(Punctuator::AssignShr),
                _ => {}
            }
            let doubled = match ch1 {
                b'+' => Some(Punctuator::Inc),
                b'-' => Some(Punctuator::Dec),
                b'<' => Some(Punctuator::Shl),
                b'>' => Some(Punctuator::Shr),
                b'&' => Some(Punctuator::And),
                b'|' => Some(Punctuator::Or),
                _ => None,
            };
            if doubled.is_some() {
                return doubled;
            }
        }

        single()
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::{Lexer, Punctuator, TokenKind};

    fn scan_single(src: &str) -> TokenKind {
        let mut lexer = Lexer::new(src).unwrap();
        lexer.lex().unwrap().kind
    }

    fn scan_all(src: &str) -> Vec<Punctuator> {
        Lexer::new(src)
            .unwrap()
            .map(|token| match token.unwrap().kind {
                TokenKind::Punctuator(p) => p,
                other => panic!("expected punctuator, got {:?}", other),
            })
            .collect()
    }

    #[test]
    fn test_single_character_punctuators() {
        assert_eq!(
            scan_all(". ( ) { } [ ] : ; , ? ~"),
            vec![
                Punctuator::Period,
                Punctuator::LParen,
                Punctuator::RParen,
                Punctuator::LBrace,
                Punctuator::RBrace,
                Punctuator::LBrack,
                Punctuator::RBrack,
                Punctuator::Colon,
                Punctuator::Semicolon,
                Punctuator::Comma,
                Punctuator::Conditional,
                Punctuator::BitNot,
            ]
        );
    }

    #[test]
    fn test_single_characters_do_not_combine() {
        assert_eq!(scan_all(".."), vec![Punctuator::Period, Punctuator::Period]);
        assert_eq!(scan_all("??"), vec![Punctuator::Conditional, Punctuator::Conditional]);
        assert_eq!(scan_all("~="), vec![Punctuator::BitNot, Punctuator::Assign]);
    }

    #[test]
    fn test_equal_operators() {
        assert!(matches!(scan_single("="), TokenKind::Punctuator(Punctuator::Assign)));
        assert!(matches!(scan_single("=="), TokenKind::Punctuator(Punctuator::Eq)));
        assert!(matches!(scan_single("==="), TokenKind::Punctuator(Punctuator::EqStrict)));
        assert_eq!(scan_all("===="), vec![Punctuator::EqStrict, Punctuator::Assign]);
    }

    #[test]
    fn test_bang_operators() {
        assert!(matches!(scan_single("!"), TokenKind::Punctuator(Punctuator::Not)));
        assert!(matches!(scan_single("!="), TokenKind::Punctuator(Punctuator::Ne)));
        assert!(matches!(scan_single("!=="), TokenKind::Punctuator(Punctuator::NeStrict)));
        assert_eq!(scan_all("!!"), vec![Punctuator::Not, Punctuator::Not]);
    }

    #[test]
    fn test_assignment_operators() {
        assert_eq!(
            scan_all("|= ^= &= += -= *= /= %="),
            vec![
                Punctuator::AssignBitOr,
                Punctuator::AssignBitXor,
                Punctuator::AssignBitAnd,
                Punctuator::AssignAdd,
                Punctuator::AssignSub,
                Punctuator::AssignMul,
                Punctuator::AssignDiv,
                Punctuator::AssignMod,
            ]
        );
    }

    #[test]
    fn test_less_than_operators() {
        assert!(matches!(scan_single("<"), TokenKind::Punctuator(Punctuator::Lt)));
        assert!(matches!(scan_single("<="), TokenKind::Punctuator(Punctuator::Lte)));
        assert!(matches!(scan_single("<<"), TokenKind::Punctuator(Punctuator::Shl)));
        assert!(matches!(scan_single("<<="), TokenKind::Punctuator(Punctuator::AssignShl)));
    }

    #[test]
    fn test_greater_than_operators() {
        assert!(matches!(scan_single(">"), TokenKind::Punctuator(Punctuator::Gt)));
        assert!(matches!(scan_single(">="), TokenKind::Punctuator(Punctuator::Gte)));
        assert!(matches!(scan_single(">>"), TokenKind::Punctuator(Punctuator::Shr)));
        assert!(matches!(scan_single(">>="), TokenKind::Punctuator(Punctuator::AssignShr)));
        assert!(matches!(scan_single(">>>"), TokenKind::Punctuator(Punctuator::ShrUnsigned)));
        assert!(matches!(
            scan_single(">>>="),
            TokenKind::Punctuator(Punctuator::AssignShrUnsigned)
        ));
    }

    #[test]
    fn test_shift_assign_is_one_token() {
        assert_eq!(scan_all(">>>="), vec![Punctuator::AssignShrUnsigned]);
        assert_eq!(
            scan_all(">>>>"),
            vec![Punctuator::ShrUnsigned, Punctuator::Gt]
        );
    }

    #[test]
    fn test_doubled_operators() {
        assert_eq!(
            scan_all("++ -- && ||"),
            vec![Punctuator::Inc, Punctuator::Dec, Punctuator::And, Punctuator::Or]
        );
        assert_eq!(scan_all("+++"), vec![Punctuator::Inc, Punctuator::Add]);
        assert_eq!(scan_all("**"), vec![Punctuator::Mul, Punctuator::Mul]);
        assert_eq!(scan_all("^^"), vec![Punctuator::BitXor, Punctuator::BitXor]);
    }

    #[test]
    fn test_mid_line_html_close_is_operators() {
        let kinds: Vec<_> = Lexer::new("x-->y").unwrap().map(|t| t.unwrap().kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier("x".into()),
                TokenKind::Punctuator(Punctuator::Dec),
                TokenKind::Punctuator(Punctuator::Gt),
                TokenKind::Identifier("y".into()),
            ]
        );
    }

    #[test]
    fn test_punctuator_spans() {
        let mut lexer = Lexer::new("a >>>= b").unwrap();
        lexer.lex().unwrap();
        let token = lexer.lex().unwrap();
        assert_eq!(token.span.start, 2);
        assert_eq!(token.span.end, 6);
        assert_eq!(token.text, ">>>=");
    }
}
