//! Numeric literal scanning.
//!
//! Prefix table for a leading `0`:
//!
//! | Next byte      | Result                                   |
//! |----------------|------------------------------------------|
//! | `x` / `X`      | hex run, `0x` alone is malformed         |
//! | `b` / `B`      | binary run, `0b` alone is malformed      |
//! | digits then `.`| float                                    |
//! | `0`..=`7`      | octal run, `8`/`9` end it                |
//! | anything else  | octal `0`                                |

use super::{is_binary_digit, is_hex_digit, is_octal_digit, Scanner};
use crate::{Lexeme, LexemeKind};

impl<'a> Scanner<'a> {
    pub(super) fn number(&mut self, start: usize) -> Option<Lexeme<'a>> {
        let first = self.cursor.current();
        if !first.is_ascii_digit() {
            return None;
        }

        if first == b'0' {
            match self.cursor.peek() {
                b'x' | b'X' => {
                    return Some(self.radix_literal(start, is_hex_digit, LexemeKind::HexLiteral));
                }
                b'b' | b'B' => {
                    return Some(self.radix_literal(
                        start,
                        is_binary_digit,
                        LexemeKind::BinaryLiteral,
                    ));
                }
                _ => {}
            }
        }

        let digits = self.cursor.count_while(|b| b.is_ascii_digit());
        if self.cursor.peek_n(digits) == b'.' {
            return Some(self.float_literal(start));
        }

        if first == b'0' {
            self.cursor.advance();
            self.cursor.eat_while(is_octal_digit);
            return Some(self.emit(start, LexemeKind::OctalLiteral));
        }

        self.cursor.advance_n(digits);
        Some(self.emit(start, LexemeKind::DecimalLiteral))
    }

    /// `0x...` / `0b...`: two-byte prefix, then a maximal digit run.
    fn radix_literal(
        &mut self,
        start: usize,
        is_digit: fn(u8) -> bool,
        kind: LexemeKind,
    ) -> Lexeme<'a> {
        self.cursor.advance_n(2);
        let digits = self.cursor.eat_while(is_digit);
        self.emit_checked(start, digits > 0, kind)
    }

    /// Digits, one `.`, digits, then an optional letter suffix.
    ///
    /// The caller has already seen the `.` after the integer part.
    fn float_literal(&mut self, start: usize) -> Lexeme<'a> {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        self.cursor.advance();
        self.cursor.eat_while(|b| b.is_ascii_digit());
        self.cursor.eat_while(|b| b.is_ascii_alphabetic());

        let next = self.cursor.current();
        if next == b'.' || next.is_ascii_digit() {
            self.malformed_numeric_tail();
            return self.emit(start, LexemeKind::Malformed);
        }
        self.emit(start, LexemeKind::FloatLiteral)
    }

    /// Swallow the rest of a broken literal so scanning resumes after it.
    fn malformed_numeric_tail(&mut self) {
        self.cursor.eat_while(|b| b.is_ascii_alphanumeric() || b == b'.');
    }
}
