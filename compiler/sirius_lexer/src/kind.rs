//! Lexeme classification.

use thiserror::Error;

/// Classification of a [`Lexeme`](crate::Lexeme).
///
/// Discriminants are stable and fit in a single `u8`:
///
/// | Value | Kind                   |
/// |-------|------------------------|
/// | 0     | Malformed              |
/// | 1     | Eof                    |
/// | 2-5   | Trivia, names, operators |
/// | 6-9   | Character, rune, and string literals |
/// | 10-14 | Numeric literals       |
/// | 15    | Newline                |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LexemeKind {
    /// The start of a token shape whose grammar the input violated, or a
    /// character that starts no token at all.
    Malformed = 0,
    /// End of input. Always the last lexeme; its text is empty.
    Eof = 1,
    /// A run of blanks (space, tab, vertical tab, form feed).
    Whitespace = 2,
    Identifier = 3,
    /// An identifier span that is exactly a reserved word.
    Keyword = 4,
    Operator = 5,
    /// `'a'`, `'\\'`, `'\''`, `'\012'`.
    CharLiteral = 6,
    /// `@'a'`, `@'A'`, `@'\U0001F600'`.
    RuneLiteral = 7,
    /// `"text"`.
    StringLiteral = 8,
    /// `@"text"`.
    UnicodeStringLiteral = 9,
    DecimalLiteral = 10,
    BinaryLiteral = 11,
    OctalLiteral = 12,
    HexLiteral = 13,
    FloatLiteral = 14,
    /// One line break: `\n`, `\r\n`, or a lone `\r`.
    Newline = 15,
}

/// A byte that is not the discriminant of any [`LexemeKind`].
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("unknown lexeme kind discriminant {0}")]
pub struct UnknownLexemeKind(pub u8);

impl LexemeKind {
    /// Every kind, in discriminant order.
    pub const ALL: [LexemeKind; 16] = [
        LexemeKind::Malformed,
        LexemeKind::Eof,
        LexemeKind::Whitespace,
        LexemeKind::Identifier,
        LexemeKind::Keyword,
        LexemeKind::Operator,
        LexemeKind::CharLiteral,
        LexemeKind::RuneLiteral,
        LexemeKind::StringLiteral,
        LexemeKind::UnicodeStringLiteral,
        LexemeKind::DecimalLiteral,
        LexemeKind::BinaryLiteral,
        LexemeKind::OctalLiteral,
        LexemeKind::HexLiteral,
        LexemeKind::FloatLiteral,
        LexemeKind::Newline,
    ];

    /// Stable display name.
    pub const fn name(self) -> &'static str {
        match self {
            LexemeKind::Malformed => "Malformed",
            LexemeKind::Eof => "Eof",
            LexemeKind::Whitespace => "Whitespace",
            LexemeKind::Identifier => "Identifier",
            LexemeKind::Keyword => "Keyword",
            LexemeKind::Operator => "Operator",
            LexemeKind::CharLiteral => "CharLiteral",
            LexemeKind::RuneLiteral => "RuneLiteral",
            LexemeKind::StringLiteral => "StringLiteral",
            LexemeKind::UnicodeStringLiteral => "UnicodeStringLiteral",
            LexemeKind::DecimalLiteral => "DecimalLiteral",
            LexemeKind::BinaryLiteral => "BinaryLiteral",
            LexemeKind::OctalLiteral => "OctalLiteral",
            LexemeKind::HexLiteral => "HexLiteral",
            LexemeKind::FloatLiteral => "FloatLiteral",
            LexemeKind::Newline => "Newline",
        }
    }

    /// Numeric literals of any base, including floats.
    pub const fn is_numeric_literal(self) -> bool {
        matches!(
            self,
            LexemeKind::DecimalLiteral
                | LexemeKind::BinaryLiteral
                | LexemeKind::OctalLiteral
                | LexemeKind::HexLiteral
                | LexemeKind::FloatLiteral
        )
    }

    /// Any well-formed literal: character, rune, string, or numeric.
    pub const fn is_literal(self) -> bool {
        self.is_numeric_literal()
            || matches!(
                self,
                LexemeKind::CharLiteral
                    | LexemeKind::RuneLiteral
                    | LexemeKind::StringLiteral
                    | LexemeKind::UnicodeStringLiteral
            )
    }

    /// Whitespace and newlines: spans a parser usually skips.
    pub const fn is_trivia(self) -> bool {
        matches!(self, LexemeKind::Whitespace | LexemeKind::Newline)
    }
}

impl TryFrom<u8> for LexemeKind {
    type Error = UnknownLexemeKind;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        LexemeKind::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(UnknownLexemeKind(value))
    }
}

impl std::fmt::Display for LexemeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
