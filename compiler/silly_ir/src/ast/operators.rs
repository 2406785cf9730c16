//! Unary and binary operators.

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Logical
    And,
    Or,

    // Arithmetic
    Add,
    Mul,
    Div,
    Mod,
    Pow,

    // Indexing
    Index,

    // Comparison
    Eq,
    NotEq,
    Gt,
    Lt,
}

impl BinaryOp {
    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::And => "&",
            Self::Or => "|",
            Self::Add => "+",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
            Self::Index => "@",
            Self::Eq => "=",
            Self::NotEq => "\\",
            Self::Gt => ">",
            Self::Lt => "<",
        }
    }

    pub fn from_symbol(text: &str) -> Option<Self> {
        let op = match text {
            "&" => Self::And,
            "|" => Self::Or,
            "+" => Self::Add,
            "*" => Self::Mul,
            "/" => Self::Div,
            "%" => Self::Mod,
            "^" => Self::Pow,
            "@" => Self::Index,
            "=" => Self::Eq,
            "\\" => Self::NotEq,
            ">" => Self::Gt,
            "<" => Self::Lt,
            _ => return None,
        };
        Some(op)
    }

    /// True for `=`, `\`, `>`, `<`.
    pub const fn is_comparison(self) -> bool {
        matches!(self, Self::Eq | Self::NotEq | Self::Gt | Self::Lt)
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// `!` - logical not.
    Not,
    /// `#` - length of a string or list.
    Len,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Not => "!",
            Self::Len => "#",
        }
    }

    pub fn from_symbol(text: &str) -> Option<Self> {
        match text {
            "!" => Some(Self::Not),
            "#" => Some(Self::Len),
            _ => None,
        }
    }
}
