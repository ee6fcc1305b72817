//! Character, rune, and string literal scanning.
//!
//! Character and rune literals have fixed widths per branch, counted in
//! characters. A malformed literal still covers its branch width (cut short
//! at the end of the buffer), so `'ab'` is a malformed `'ab` followed by a
//! new literal at the trailing quote.
//!
//! String literals run to the first unescaped `"`. Bad escapes or disallowed
//! body characters mark the literal malformed without ending it early.

use super::{is_hex_digit, is_octal_digit, Scanner};
use crate::{Lexeme, LexemeKind};

impl<'a> Scanner<'a> {
    pub(super) fn char_literal(&mut self, start: usize) -> Option<Lexeme<'a>> {
        if self.cursor.current() != b'\'' {
            return None;
        }
        self.cursor.advance();
        let valid = self.scalar_body(false);
        Some(self.emit_checked(start, valid, LexemeKind::CharLiteral))
    }

    pub(super) fn rune_literal(&mut self, start: usize) -> Option<Lexeme<'a>> {
        if self.cursor.current() != b'@' || self.cursor.peek() != b'\'' {
            return None;
        }
        self.cursor.advance_n(2);
        let valid = self.scalar_body(true);
        Some(self.emit_checked(start, valid, LexemeKind::RuneLiteral))
    }

    /// Everything after the opening quote of a character or rune literal.
    ///
    /// `unicode` selects the rune escapes (`\u`, `\U`) in place of octal.
    fn scalar_body(&mut self, unicode: bool) -> bool {
        if self.cursor.is_eof() {
            return false;
        }
        if self.cursor.current() != b'\\' {
            let ascii = self.cursor.current() < 0x7F;
            self.cursor.advance_char();
            let closed = self.closing_quote();
            return ascii && closed;
        }

        self.cursor.advance();
        let digits = match self.cursor.current() {
            b'\\' | b'\'' => {
                self.cursor.advance();
                true
            }
            b'0'..=b'3' if !unicode => {
                self.cursor.advance();
                self.eat_fixed(2, is_octal_digit)
            }
            b'u' if unicode => {
                self.cursor.advance();
                self.eat_fixed(4, is_hex_digit)
            }
            b'U' if unicode => {
                self.cursor.advance();
                self.eat_fixed(8, is_hex_digit)
            }
            _ => {
                self.eat_fixed(2, |_| false);
                return false;
            }
        };
        let closed = self.closing_quote();
        digits && closed
    }

    /// Consume exactly `n` characters, or fewer at the end of the buffer.
    ///
    /// Returns `true` if all `n` were present and satisfied `pred`.
    fn eat_fixed(&mut self, n: usize, pred: impl Fn(u8) -> bool) -> bool {
        let mut valid = true;
        for _ in 0..n {
            if self.cursor.is_eof() {
                return false;
            }
            valid &= pred(self.cursor.current());
            self.cursor.advance_char();
        }
        valid
    }

    /// Consume the character where a closing `'` belongs.
    fn closing_quote(&mut self) -> bool {
        self.eat_fixed(1, |b| b == b'\'')
    }

    pub(super) fn string_literal(&mut self, start: usize) -> Option<Lexeme<'a>> {
        let (unicode, kind) = match (self.cursor.current(), self.cursor.peek()) {
            (b'"', _) => (false, LexemeKind::StringLiteral),
            (b'@', b'"') => (true, LexemeKind::UnicodeStringLiteral),
            _ => return None,
        };
        self.cursor.advance_n(if unicode { 2 } else { 1 });

        let mut valid = true;
        loop {
            let (delim, body) = self.cursor.skip_to_string_delim();
            if !unicode && body.bytes().any(|b| b >= 0x7F) {
                valid = false;
            }
            match delim {
                b'"' => {
                    self.cursor.advance();
                    return Some(self.emit_checked(start, valid, kind));
                }
                b'\\' => {
                    self.cursor.advance();
                    valid &= self.string_escape(unicode);
                }
                _ => return Some(self.emit(start, LexemeKind::Malformed)),
            }
        }
    }

    /// Validate one escape inside a string body; the `\` is already consumed.
    ///
    /// An unrecognized escape character is left in place for the body scan,
    /// so `"\q"` still closes at its final quote.
    fn string_escape(&mut self, unicode: bool) -> bool {
        match self.cursor.current() {
            b'\\' | b'"' => {
                self.cursor.advance();
                true
            }
            b'0'..=b'3' => self.escape_digits(2, is_octal_digit),
            b'u' if unicode => self.escape_digits(4, is_hex_digit),
            b'U' if unicode => self.escape_digits(8, is_hex_digit),
            _ => false,
        }
    }

    /// Skip the escape letter, then up to `n` digits. Stops early on a
    /// non-digit so a short escape cannot swallow the closing quote.
    fn escape_digits(&mut self, n: usize, is_digit: fn(u8) -> bool) -> bool {
        self.cursor.advance();
        let available = self.cursor.count_while(is_digit).min(n);
        self.cursor.advance_n(available);
        available == n
    }
}
