//! Binary and Unary Operators
//!
//! All operator codes used in MiniC expressions.

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,

    // Comparison
    Lt,
    Gt,
    LtEq,
    GtEq,
    Eq,
    NotEq,

    // Logical
    And,
    Or,
}

impl BinaryOp {
    /// Binding strength used by the parser's precedence climbing.
    ///
    /// Higher number = binds more tightly.
    /// - 6: `*` `/` `%`
    /// - 5: `+` `-`
    /// - 4: `<` `>` `<=` `>=`
    /// - 3: `==` `!=`
    /// - 2: `&&`
    /// - 1: `||`
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Mul | Self::Div | Self::Mod => 6,
            Self::Add | Self::Sub => 5,
            Self::Lt | Self::Gt | Self::LtEq | Self::GtEq => 4,
            Self::Eq | Self::NotEq => 3,
            Self::And => 2,
            Self::Or => 1,
        }
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// `+x`, identity.
    Plus,
    /// `-x`
    Neg,
    /// `!x`, logical negation of truthiness.
    Not,
}
