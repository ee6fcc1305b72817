//! Bounds-checked cursor over a borrowed source buffer.
//!
//! The cursor advances through the buffer byte-by-byte. Reads at or past the
//! end of the buffer return `0x00`, so byte-class predicates that reject NUL
//! terminate naturally at the end of input without a separate length check.
//! A NUL *inside* the buffer also reads as `0x00`; use
//! [`is_eof()`](Cursor::is_eof) to tell the two apart.
//!
//! The position always sits on a UTF-8 character boundary as long as callers
//! only use [`advance()`](Cursor::advance) on ASCII bytes and
//! [`advance_char()`](Cursor::advance_char) otherwise.

/// NUL and the legacy end-of-file control character (`^Z`).
///
/// Either one ends a scan as if the buffer had run out.
pub(crate) fn is_sentinel(b: u8) -> bool {
    b == 0x00 || b == 0x1A
}

/// Cursor over a caller-owned source buffer.
///
/// The cursor is [`Copy`], enabling cheap state snapshots for backtracking.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Current read position (byte offset into `source`).
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Create a cursor at byte offset `pos`.
    ///
    /// Offsets past the end clamp to the end. An offset inside a multi-byte
    /// character moves back to the start of that character.
    pub fn at(source: &'a str, pos: usize) -> Self {
        let mut pos = pos.min(source.len());
        while !source.is_char_boundary(pos) {
            pos -= 1;
        }
        Self { source, pos }
    }

    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self.source.as_bytes().get(index).copied().unwrap_or(0)
    }

    /// Returns the byte at the current position, or `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Returns the byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    /// Returns the byte `n` positions ahead of current.
    #[inline]
    pub fn peek_n(&self, n: usize) -> u8 {
        self.byte_at(self.pos + n)
    }

    /// Advance the cursor by one byte. Never moves past the end.
    #[inline]
    pub fn advance(&mut self) {
        self.advance_n(1);
    }

    /// Advance the cursor by `n` bytes. Never moves past the end.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.source.len());
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else (ASCII, continuation, invalid): 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> usize {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance past one full character (code point).
    #[inline]
    pub fn advance_char(&mut self) {
        self.advance_n(Self::utf8_char_width(self.current()));
    }

    /// Returns `true` once every byte of the buffer has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Returns `true` at the end of the buffer or on a sentinel byte.
    #[inline]
    pub fn at_boundary(&self) -> bool {
        self.is_eof() || is_sentinel(self.current())
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The unconsumed rest of the source.
    pub fn remaining(&self) -> &'a str {
        self.source.get(self.pos..).unwrap_or_default()
    }

    /// Extract the source text from `start` to the current position.
    ///
    /// Returns an empty string if `start` is not a character boundary at or
    /// before the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.source.get(start..self.pos).unwrap_or_default()
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// Stops at the end of the buffer. Returns the number of bytes consumed.
    /// `pred` must only accept ASCII bytes so the cursor stays on a
    /// character boundary.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> usize {
        let start = self.pos;
        while let Some(&b) = self.source.as_bytes().get(self.pos) {
            if !pred(b) {
                break;
            }
            self.pos += 1;
        }
        self.pos - start
    }

    /// Count the bytes from the current position that satisfy `pred`,
    /// without moving.
    pub fn count_while(&self, pred: impl Fn(u8) -> bool) -> usize {
        self.remaining().bytes().take_while(|&b| pred(b)).count()
    }

    /// Advance past ordinary string content to the next `"` or `\`.
    ///
    /// Returns the delimiter found (`0` at end of input) and the text that
    /// was skipped. Uses `memchr2` for the search.
    pub fn skip_to_string_delim(&mut self) -> (u8, &'a str) {
        let start = self.pos;
        let remaining = self.remaining().as_bytes();
        if let Some(offset) = memchr::memchr2(b'"', b'\\', remaining) {
            self.pos += offset;
            (self.current(), self.slice_from(start))
        } else {
            self.pos = self.source.len();
            (0, self.slice_from(start))
        }
    }
}

#[cfg(test)]
mod tests;
