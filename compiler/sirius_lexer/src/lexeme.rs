//! The scanner's output value.

use std::fmt;

use crate::{Keyword, LexemeKind, Operator};

/// A classified, contiguous span of source text.
///
/// `text` borrows the exact bytes consumed from the source buffer. It is
/// never empty, except for the [`LexemeKind::Eof`] lexeme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Lexeme<'a> {
    pub kind: LexemeKind,
    pub text: &'a str,
}

impl<'a> Lexeme<'a> {
    pub const fn new(kind: LexemeKind, text: &'a str) -> Self {
        Self { kind, text }
    }

    /// The terminal end-of-input lexeme.
    pub const fn eof() -> Self {
        Self {
            kind: LexemeKind::Eof,
            text: "",
        }
    }

    /// Number of bytes consumed.
    #[inline]
    pub const fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == LexemeKind::Eof
    }

    #[inline]
    pub fn is_malformed(&self) -> bool {
        self.kind == LexemeKind::Malformed
    }

    /// The reserved word, if this is a keyword lexeme.
    pub fn keyword(&self) -> Option<Keyword> {
        match self.kind {
            LexemeKind::Keyword => Keyword::lookup(self.text),
            _ => None,
        }
    }

    /// The operator, if this is an operator lexeme.
    pub fn operator(&self) -> Option<Operator> {
        match self.kind {
            LexemeKind::Operator => Operator::lookup(self.text),
            _ => None,
        }
    }
}

/// Dump format: `{type:Identifier,value:"x"}`.
///
/// Line breaks, tabs, backslashes, and double quotes in the value are
/// escaped; other control characters print as `\u{..}`.
impl fmt::Display for Lexeme<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{type:{},value:\"", self.kind)?;
        for c in self.text.chars() {
            match c {
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                '\t' => f.write_str("\\t")?,
                '\\' => f.write_str("\\\\")?,
                '"' => f.write_str("\\\"")?,
                c if c.is_control() => write!(f, "\\u{{{:x}}}", u32::from(c))?,
                c => write!(f, "{c}")?,
            }
        }
        f.write_str("\"}")
    }
}
