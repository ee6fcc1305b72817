//! Scanner for the Sirius C* language.
//!
//! Converts source text into an ordered, gapless sequence of [`Lexeme`]s.
//! Concatenating the text of every lexeme reproduces the scanned input, and
//! the sequence always ends with exactly one [`LexemeKind::Eof`] lexeme.
//!
//! Malformed input never aborts a scan: spans that start like a token but
//! violate its grammar come back as [`LexemeKind::Malformed`], and the caller
//! decides whether to report, skip, or stop.
//!
//! # Entry points
//!
//! - [`scan_all`] scans a whole buffer.
//! - [`scan_next`] is the stateless single step, for lazy restartable streams.
//! - [`Scanner`] is the streaming form (also an [`Iterator`]).
//!
//! ```
//! use sirius_lexer::{scan_all, LexemeKind};
//!
//! let kinds: Vec<_> = scan_all("x >>>= 0x1A;").iter().map(|l| l.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         LexemeKind::Identifier,
//!         LexemeKind::Whitespace,
//!         LexemeKind::Operator,
//!         LexemeKind::Whitespace,
//!         LexemeKind::HexLiteral,
//!         LexemeKind::Operator,
//!         LexemeKind::Eof,
//!     ]
//! );
//! ```

mod cursor;
mod keywords;
mod kind;
mod lexeme;
mod operators;
mod scanner;
mod verify;

pub use cursor::Cursor;
pub use keywords::{Keyword, KeywordClass};
pub use kind::{LexemeKind, UnknownLexemeKind};
pub use lexeme::Lexeme;
pub use operators::{Operator, OPERATORS};
pub use scanner::{scan_all, scan_next, Scanner};
pub use verify::{verify_lexemes, SequenceError};
