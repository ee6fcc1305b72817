//! Structural check for lexeme sequences.
//!
//! Callers that buffer, filter, or forward lexemes between stages can use
//! [`verify_lexemes`] to confirm a sequence still tiles its source exactly.

use crate::cursor::is_sentinel;
use crate::Lexeme;

/// Why a lexeme sequence does not describe its source.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    /// A non-EOF lexeme consumed nothing.
    #[error("lexeme {index} is empty")]
    EmptyLexeme { index: usize },

    /// A lexeme's text is not the source text at its position.
    #[error("lexeme {index} does not match the source at byte {offset}")]
    TextMismatch { index: usize, offset: usize },

    /// The EOF lexeme carries text.
    #[error("EOF lexeme {index} is not empty")]
    EofWithText { index: usize },

    /// The sequence ends without an EOF lexeme.
    #[error("sequence ends at byte {offset} without an EOF lexeme")]
    MissingEof { offset: usize },

    /// Lexemes follow the EOF lexeme.
    #[error("lexemes follow EOF at index {index}")]
    TrailingLexemes { index: usize },

    /// EOF was reached with source text left that is not a NUL or `^Z`.
    #[error("EOF at byte {offset} before the end of the source")]
    EofBeforeEnd { offset: usize },
}

/// Check that `lexemes` covers `source` gaplessly and ends in one EOF.
///
/// The EOF lexeme may sit before the end of `source` only if the byte at
/// that position is a NUL or `^Z`.
///
/// # Errors
///
/// Returns the first [`SequenceError`] found, scanning front to back.
pub fn verify_lexemes(source: &str, lexemes: &[Lexeme<'_>]) -> Result<(), SequenceError> {
    let mut offset = 0;
    for (index, lexeme) in lexemes.iter().enumerate() {
        if lexeme.is_eof() {
            if !lexeme.is_empty() {
                return Err(SequenceError::EofWithText { index });
            }
            if index + 1 != lexemes.len() {
                return Err(SequenceError::TrailingLexemes { index: index + 1 });
            }
            return match source.as_bytes().get(offset) {
                Some(&b) if !is_sentinel(b) => Err(SequenceError::EofBeforeEnd { offset }),
                _ => Ok(()),
            };
        }
        if lexeme.is_empty() {
            return Err(SequenceError::EmptyLexeme { index });
        }
        let matches = source
            .get(offset..)
            .is_some_and(|rest| rest.starts_with(lexeme.text));
        if !matches {
            return Err(SequenceError::TextMismatch { index, offset });
        }
        offset += lexeme.len();
    }
    Err(SequenceError::MissingEof { offset })
}
