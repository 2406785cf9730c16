//! Keyword tables.
//!
//! Statement keywords start a statement and select its parser; the other
//! keywords only appear inside statements (`gets`, `do`, block terminators).

/// Keywords that begin a statement.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKeyword {
    Var,
    Print,
    If,
    While,
    Repeat,
    Sub,
    Call,
    Exit,
    Break,
}

impl StmtKeyword {
    /// Every statement keyword, in declaration order.
    pub const ALL: [StmtKeyword; 9] = [
        StmtKeyword::Var,
        StmtKeyword::Print,
        StmtKeyword::If,
        StmtKeyword::While,
        StmtKeyword::Repeat,
        StmtKeyword::Sub,
        StmtKeyword::Call,
        StmtKeyword::Exit,
        StmtKeyword::Break,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            StmtKeyword::Var => "var",
            StmtKeyword::Print => "print",
            StmtKeyword::If => "if",
            StmtKeyword::While => "while",
            StmtKeyword::Repeat => "repeat",
            StmtKeyword::Sub => "sub",
            StmtKeyword::Call => "call",
            StmtKeyword::Exit => "exit",
            StmtKeyword::Break => "break",
        }
    }

    pub fn from_text(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kw| kw.as_str() == text)
    }

    /// Position in [`StmtKeyword::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Keywords that appear inside statements.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Keyword {
    Gets,
    Then,
    Elseif,
    Else,
    Endif,
    Do,
    Endwhile,
    Times,
    Endrepeat,
    Endsub,
}

impl Keyword {
    pub const ALL: [Keyword; 10] = [
        Keyword::Gets,
        Keyword::Then,
        Keyword::Elseif,
        Keyword::Else,
        Keyword::Endif,
        Keyword::Do,
        Keyword::Endwhile,
        Keyword::Times,
        Keyword::Endrepeat,
        Keyword::Endsub,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Gets => "gets",
            Keyword::Then => "then",
            Keyword::Elseif => "elseif",
            Keyword::Else => "else",
            Keyword::Endif => "endif",
            Keyword::Do => "do",
            Keyword::Endwhile => "endwhile",
            Keyword::Times => "times",
            Keyword::Endrepeat => "endrepeat",
            Keyword::Endsub => "endsub",
        }
    }

    pub fn from_text(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kw| kw.as_str() == text)
    }
}
