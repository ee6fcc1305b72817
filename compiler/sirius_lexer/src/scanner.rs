//! Hand-written scanner producing one [`Lexeme`] per step.
//!
//! # Design
//!
//! The dispatcher tries each sub-scanner in a fixed priority order:
//!
//! 1. boundary (end of buffer, NUL, `^Z`), terminal
//! 2. character literal `'...'`
//! 3. rune literal `@'...'`
//! 4. string literal `"..."` / `@"..."`
//! 5. numeric literal (on a decimal digit)
//! 6. identifier or keyword (on `[A-Za-z_]`)
//! 7. whitespace run
//! 8. line break
//! 9. operator (longest match)
//!
//! Every sub-scanner returns `None` without moving the cursor when its entry
//! condition does not hold. The first `Some` wins. If nothing matches, one
//! character becomes a [`LexemeKind::Malformed`] lexeme, so every step except
//! the terminal EOF consumes at least one character.
//!
//! Scanning is a pure function of `(source, offset)`: there is no state
//! beyond the cursor, which makes [`scan_next`] restartable from any offset
//! previously returned.

use tracing::trace;

use crate::cursor::Cursor;
use crate::{Keyword, Lexeme, LexemeKind, Operator};

mod literal;
mod number;

/// A scan session over one source buffer.
///
/// Produces one lexeme per [`next_lexeme`](Scanner::next_lexeme) call.
/// After the buffer is exhausted, every further call returns EOF again.
///
/// As an [`Iterator`], the scanner yields the EOF lexeme exactly once and
/// then `None`.
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    finished: bool,
}

impl<'a> Scanner<'a> {
    /// Start scanning at the beginning of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            finished: false,
        }
    }

    /// Start scanning at byte `offset` of `source`.
    ///
    /// Offsets past the end start at EOF. An offset inside a multi-byte
    /// character starts at that character.
    pub fn at(source: &'a str, offset: usize) -> Self {
        Self {
            cursor: Cursor::at(source, offset),
            finished: false,
        }
    }

    /// Byte offset of the next lexeme.
    #[inline]
    pub fn offset(&self) -> usize {
        self.cursor.pos()
    }

    /// Produce the next lexeme and advance past it.
    pub fn next_lexeme(&mut self) -> Lexeme<'a> {
        let start = self.cursor.pos();
        let lexeme = self
            .boundary()
            .or_else(|| self.char_literal(start))
            .or_else(|| self.rune_literal(start))
            .or_else(|| self.string_literal(start))
            .or_else(|| self.number(start))
            .or_else(|| self.identifier(start))
            .or_else(|| self.whitespace(start))
            .or_else(|| self.newline(start))
            .or_else(|| self.operator(start))
            .unwrap_or_else(|| self.unknown_char(start));
        trace!(kind = %lexeme.kind, offset = start, len = lexeme.len(), "lexeme");
        lexeme
    }

    /// Build a lexeme spanning `start` to the current position.
    #[inline]
    fn emit(&self, start: usize, kind: LexemeKind) -> Lexeme<'a> {
        Lexeme::new(kind, self.cursor.slice_from(start))
    }

    /// Emit `kind` if the literal was well-formed, `Malformed` otherwise.
    #[inline]
    fn emit_checked(&self, start: usize, valid: bool, kind: LexemeKind) -> Lexeme<'a> {
        self.emit(start, if valid { kind } else { LexemeKind::Malformed })
    }

    // ─── Boundary ─────────────────────────────────────────────────

    fn boundary(&self) -> Option<Lexeme<'a>> {
        self.cursor.at_boundary().then(Lexeme::eof)
    }

    // ─── Identifiers & Keywords ───────────────────────────────────

    fn identifier(&mut self, start: usize) -> Option<Lexeme<'a>> {
        if !is_ident_start(self.cursor.current()) {
            return None;
        }
        self.cursor.eat_while(is_ident_continue);
        let text = self.cursor.slice_from(start);
        let kind = if Keyword::lookup(text).is_some() {
            LexemeKind::Keyword
        } else {
            LexemeKind::Identifier
        };
        Some(Lexeme::new(kind, text))
    }

    // ─── Whitespace & Newlines ────────────────────────────────────

    fn whitespace(&mut self, start: usize) -> Option<Lexeme<'a>> {
        (self.cursor.eat_while(is_blank) > 0).then(|| self.emit(start, LexemeKind::Whitespace))
    }

    fn newline(&mut self, start: usize) -> Option<Lexeme<'a>> {
        match self.cursor.current() {
            b'\n' => self.cursor.advance(),
            b'\r' => {
                self.cursor.advance();
                if self.cursor.current() == b'\n' {
                    self.cursor.advance();
                }
            }
            _ => return None,
        }
        Some(self.emit(start, LexemeKind::Newline))
    }

    // ─── Operators ────────────────────────────────────────────────

    fn operator(&mut self, start: usize) -> Option<Lexeme<'a>> {
        let op = Operator::longest_prefix(self.cursor.remaining())?;
        self.cursor.advance_n(op.as_str().len());
        Some(self.emit(start, LexemeKind::Operator))
    }

    // ─── Fallback ─────────────────────────────────────────────────

    fn unknown_char(&mut self, start: usize) -> Lexeme<'a> {
        self.cursor.advance_char();
        self.emit(start, LexemeKind::Malformed)
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Lexeme<'a>;

    fn next(&mut self) -> Option<Lexeme<'a>> {
        if self.finished {
            return None;
        }
        let lexeme = self.next_lexeme();
        self.finished = lexeme.is_eof();
        Some(lexeme)
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}

/// 256-byte lookup table for identifier continuation bytes.
/// `true` for a-z, A-Z, 0-9, and underscore.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_'
        );
        i += 1;
    }
    table
};

#[inline]
fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[usize::from(b)]
}

#[inline]
fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// Space, tab, vertical tab, form feed. Line breaks are not blanks.
#[inline]
fn is_blank(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | 0x0B | 0x0C)
}

#[inline]
fn is_octal_digit(b: u8) -> bool {
    matches!(b, b'0'..=b'7')
}

#[inline]
fn is_binary_digit(b: u8) -> bool {
    matches!(b, b'0' | b'1')
}

#[inline]
fn is_hex_digit(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

/// Scan an entire buffer.
///
/// The result always ends with exactly one [`LexemeKind::Eof`] lexeme, and
/// the text of the lexemes before it concatenates to the input (up to the
/// first NUL or `^Z`, if any).
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn scan_all(source: &str) -> Vec<Lexeme<'_>> {
    let lexemes: Vec<_> = Scanner::new(source).collect();
    let malformed = lexemes.iter().filter(|l| l.is_malformed()).count();
    tracing::debug!(count = lexemes.len(), malformed, "scan complete");
    lexemes
}

/// Scan one lexeme starting at byte `offset`.
///
/// Returns the lexeme and the offset just past it
/// (`offset + lexeme.len()`). Feeding the returned offset back in walks the
/// same sequence [`scan_all`] produces, one lexeme at a time. An offset at
/// or past the end returns EOF and the offset unchanged.
pub fn scan_next(source: &str, offset: usize) -> (Lexeme<'_>, usize) {
    if offset >= source.len() {
        return (Lexeme::eof(), offset);
    }
    let mut scanner = Scanner::at(source, offset);
    let lexeme = scanner.next_lexeme();
    (lexeme, scanner.offset())
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
