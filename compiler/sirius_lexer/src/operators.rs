//! Operator and punctuation table.
//!
//! [`OPERATORS`] is ordered by descending text length (4, 3, 2, 1 bytes).
//! Taking the first entry that matches at the current position is therefore
//! maximal munch: `>>>=` beats `>>=`, which beats `>>`, which beats `>`.

/// An operator or punctuation token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    // === Compound assignment ===
    /// `>>>=`
    SignedShrAssign,
    /// `<<<=`
    RotlAssign,
    /// `>>=`
    ShrAssign,
    /// `<<=`
    ShlAssign,
    /// `||=`
    OrOrAssign,
    /// `&&=`
    AndAndAssign,
    /// `^^=`
    PowAssign,
    /// `|=`
    OrAssign,
    /// `&=`
    AndAssign,
    /// `*=`
    MulAssign,
    /// `^=`
    XorAssign,
    /// `+=`
    AddAssign,
    /// `-=`
    SubAssign,
    /// `/=`
    DivAssign,
    /// `%=`
    ModAssign,
    /// `~=`
    BitNotAssign,
    /// `=`
    Assign,

    // === Comparison ===
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `!=`
    NotEqual,
    /// `==`
    EqualEqual,
    /// `<`
    Less,
    /// `>`
    Greater,

    // === Shifts, logical, bitwise, arithmetic ===
    /// `>>>`
    SignedShr,
    /// `<<<`
    Rotl,
    /// `>>`
    Shr,
    /// `<<`
    Shl,
    /// `||`
    OrOr,
    /// `&&`
    AndAnd,
    /// `^^`
    Pow,
    /// `++`
    PlusPlus,
    /// `--`
    MinusMinus,
    /// `|`
    Or,
    /// `&`
    And,
    /// `*`
    Mul,
    /// `^`
    Xor,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `~`
    BitNot,
    /// `!`
    Not,

    // === Punctuation ===
    /// `...`
    Ellipsis,
    /// `.`
    Dot,
    /// `?`
    Question,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
}

/// Every operator, longest spelling first.
pub static OPERATORS: [Operator; 54] = [
    // 4 bytes
    Operator::SignedShrAssign,
    Operator::RotlAssign,
    // 3 bytes
    Operator::ShrAssign,
    Operator::ShlAssign,
    Operator::OrOrAssign,
    Operator::AndAndAssign,
    Operator::PowAssign,
    Operator::SignedShr,
    Operator::Rotl,
    Operator::Ellipsis,
    // 2 bytes
    Operator::OrAssign,
    Operator::AndAssign,
    Operator::MulAssign,
    Operator::XorAssign,
    Operator::AddAssign,
    Operator::SubAssign,
    Operator::DivAssign,
    Operator::ModAssign,
    Operator::BitNotAssign,
    Operator::LessEqual,
    Operator::GreaterEqual,
    Operator::NotEqual,
    Operator::EqualEqual,
    Operator::Shr,
    Operator::Shl,
    Operator::OrOr,
    Operator::AndAnd,
    Operator::Pow,
    Operator::PlusPlus,
    Operator::MinusMinus,
    // 1 byte
    Operator::Assign,
    Operator::Or,
    Operator::And,
    Operator::Mul,
    Operator::Xor,
    Operator::Plus,
    Operator::Minus,
    Operator::Div,
    Operator::Mod,
    Operator::BitNot,
    Operator::Less,
    Operator::Greater,
    Operator::Not,
    Operator::Dot,
    Operator::Question,
    Operator::Comma,
    Operator::Semicolon,
    Operator::Colon,
    Operator::LeftParen,
    Operator::RightParen,
    Operator::LeftBracket,
    Operator::RightBracket,
    Operator::LeftBrace,
    Operator::RightBrace,
];

impl Operator {
    /// The source spelling of this operator.
    pub const fn as_str(self) -> &'static str {
        match self {
            Operator::SignedShrAssign => ">>>=",
            Operator::RotlAssign => "<<<=",
            Operator::ShrAssign => ">>=",
            Operator::ShlAssign => "<<=",
            Operator::OrOrAssign => "||=",
            Operator::AndAndAssign => "&&=",
            Operator::PowAssign => "^^=",
            Operator::OrAssign => "|=",
            Operator::AndAssign => "&=",
            Operator::MulAssign => "*=",
            Operator::XorAssign => "^=",
            Operator::AddAssign => "+=",
            Operator::SubAssign => "-=",
            Operator::DivAssign => "/=",
            Operator::ModAssign => "%=",
            Operator::BitNotAssign => "~=",
            Operator::Assign => "=",
            Operator::LessEqual => "<=",
            Operator::GreaterEqual => ">=",
            Operator::NotEqual => "!=",
            Operator::EqualEqual => "==",
            Operator::Less => "<",
            Operator::Greater => ">",
            Operator::SignedShr => ">>>",
            Operator::Rotl => "<<<",
            Operator::Shr => ">>",
            Operator::Shl => "<<",
            Operator::OrOr => "||",
            Operator::AndAnd => "&&",
            Operator::Pow => "^^",
            Operator::PlusPlus => "++",
            Operator::MinusMinus => "--",
            Operator::Or => "|",
            Operator::And => "&",
            Operator::Mul => "*",
            Operator::Xor => "^",
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Div => "/",
            Operator::Mod => "%",
            Operator::BitNot => "~",
            Operator::Not => "!",
            Operator::Ellipsis => "...",
            Operator::Dot => ".",
            Operator::Question => "?",
            Operator::Comma => ",",
            Operator::Semicolon => ";",
            Operator::Colon => ":",
            Operator::LeftParen => "(",
            Operator::RightParen => ")",
            Operator::LeftBracket => "[",
            Operator::RightBracket => "]",
            Operator::LeftBrace => "{",
            Operator::RightBrace => "}",
        }
    }

    /// Look up an operator by its exact spelling.
    pub fn lookup(text: &str) -> Option<Operator> {
        OPERATORS.iter().copied().find(|op| op.as_str() == text)
    }

    /// The longest operator that `text` starts with.
    ///
    /// Never looks past the end of `text`.
    pub fn longest_prefix(text: &str) -> Option<Operator> {
        OPERATORS
            .iter()
            .copied()
            .find(|op| text.starts_with(op.as_str()))
    }

    /// `true` for `=` and every `op=` form.
    pub const fn is_assignment(self) -> bool {
        matches!(
            self,
            Operator::SignedShrAssign
                | Operator::RotlAssign
                | Operator::ShrAssign
                | Operator::ShlAssign
                | Operator::OrOrAssign
                | Operator::AndAndAssign
                | Operator::PowAssign
                | Operator::OrAssign
                | Operator::AndAssign
                | Operator::MulAssign
                | Operator::XorAssign
                | Operator::AddAssign
                | Operator::SubAssign
                | Operator::DivAssign
                | Operator::ModAssign
                | Operator::BitNotAssign
                | Operator::Assign
        )
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
