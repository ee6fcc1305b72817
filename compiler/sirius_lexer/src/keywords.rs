//! Reserved words.
//!
//! A reserved word is only recognized when it spans an *entire* identifier:
//! the scanner first finds the maximal identifier span and then asks
//! [`Keyword::lookup`] about the whole span, so `lawful` stays an identifier
//! instead of splitting into `law` + `ful`.
//!
//! The lookup uses the identifier's length as a first-pass filter (reserved
//! words are 2-8 bytes) before matching the words of that length.

/// Grouping of reserved words by role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeywordClass {
    /// `bit`, `void`.
    FundamentalPrimitive,
    /// `const`, `extern`, `register`, `volatile`.
    StorageModifier,
    /// `noreturn`, `pure`.
    FunctionModifier,
    /// Control flow, declarations, and operators spelled as words.
    Statement,
}

/// A reserved word of the language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    Bit,
    Break,
    Case,
    Const,
    Continue,
    Default,
    Do,
    Else,
    Enum,
    Extern,
    For,
    Goto,
    If,
    Law,
    Marshal,
    Noreturn,
    Pure,
    Register,
    Return,
    Sizeof,
    Struct,
    Switch,
    Typedef,
    Union,
    Void,
    Volatile,
    While,
}

impl Keyword {
    /// Every reserved word, in alphabetical order.
    pub const ALL: [Keyword; 27] = [
        Keyword::Bit,
        Keyword::Break,
        Keyword::Case,
        Keyword::Const,
        Keyword::Continue,
        Keyword::Default,
        Keyword::Do,
        Keyword::Else,
        Keyword::Enum,
        Keyword::Extern,
        Keyword::For,
        Keyword::Goto,
        Keyword::If,
        Keyword::Law,
        Keyword::Marshal,
        Keyword::Noreturn,
        Keyword::Pure,
        Keyword::Register,
        Keyword::Return,
        Keyword::Sizeof,
        Keyword::Struct,
        Keyword::Switch,
        Keyword::Typedef,
        Keyword::Union,
        Keyword::Void,
        Keyword::Volatile,
        Keyword::While,
    ];

    /// Look up a reserved word by its exact, case-sensitive spelling.
    ///
    /// Returns `None` for anything that is not a whole reserved word,
    /// including prefixes and extensions of one (`la`, `lawful`).
    #[inline]
    pub fn lookup(text: &str) -> Option<Keyword> {
        match text.len() {
            2 => match text {
                "do" => Some(Keyword::Do),
                "if" => Some(Keyword::If),
                _ => None,
            },
            3 => match text {
                "bit" => Some(Keyword::Bit),
                "for" => Some(Keyword::For),
                "law" => Some(Keyword::Law),
                _ => None,
            },
            4 => match text {
                "case" => Some(Keyword::Case),
                "else" => Some(Keyword::Else),
                "enum" => Some(Keyword::Enum),
                "goto" => Some(Keyword::Goto),
                "pure" => Some(Keyword::Pure),
                "void" => Some(Keyword::Void),
                _ => None,
            },
            5 => match text {
                "break" => Some(Keyword::Break),
                "const" => Some(Keyword::Const),
                "union" => Some(Keyword::Union),
                "while" => Some(Keyword::While),
                _ => None,
            },
            6 => match text {
                "extern" => Some(Keyword::Extern),
                "return" => Some(Keyword::Return),
                "sizeof" => Some(Keyword::Sizeof),
                "struct" => Some(Keyword::Struct),
                "switch" => Some(Keyword::Switch),
                _ => None,
            },
            7 => match text {
                "default" => Some(Keyword::Default),
                "marshal" => Some(Keyword::Marshal),
                "typedef" => Some(Keyword::Typedef),
                _ => None,
            },
            8 => match text {
                "continue" => Some(Keyword::Continue),
                "noreturn" => Some(Keyword::Noreturn),
                "register" => Some(Keyword::Register),
                "volatile" => Some(Keyword::Volatile),
                _ => None,
            },
            _ => None,
        }
    }

    /// The source spelling of this keyword.
    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Bit => "bit",
            Keyword::Break => "break",
            Keyword::Case => "case",
            Keyword::Const => "const",
            Keyword::Continue => "continue",
            Keyword::Default => "default",
            Keyword::Do => "do",
            Keyword::Else => "else",
            Keyword::Enum => "enum",
            Keyword::Extern => "extern",
            Keyword::For => "for",
            Keyword::Goto => "goto",
            Keyword::If => "if",
            Keyword::Law => "law",
            Keyword::Marshal => "marshal",
            Keyword::Noreturn => "noreturn",
            Keyword::Pure => "pure",
            Keyword::Register => "register",
            Keyword::Return => "return",
            Keyword::Sizeof => "sizeof",
            Keyword::Struct => "struct",
            Keyword::Switch => "switch",
            Keyword::Typedef => "typedef",
            Keyword::Union => "union",
            Keyword::Void => "void",
            Keyword::Volatile => "volatile",
            Keyword::While => "while",
        }
    }

    pub const fn class(self) -> KeywordClass {
        match self {
            Keyword::Bit | Keyword::Void => KeywordClass::FundamentalPrimitive,
            Keyword::Const | Keyword::Extern | Keyword::Register | Keyword::Volatile => {
                KeywordClass::StorageModifier
            }
            Keyword::Noreturn | Keyword::Pure => KeywordClass::FunctionModifier,
            _ => KeywordClass::Statement,
        }
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
