//! Stable diagnostic codes.
//!
//! The first digit names the phase that reports the code:
//! - E0xxx: lexer
//! - E1xxx: parser
//! - W2xxx: evaluator warnings

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Character that starts no token
    E0001,
    /// Integer literal outside the `i64` range
    E0002,
    /// `/*` with no closing `*/`
    E0003,
    /// Token that does not fit the grammar at this point
    E1001,
    /// Input ended in the middle of a construct
    E1002,
    /// Read of a name with no binding in any enclosing scope
    W2001,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 6] = [
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::W2001,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::W2001 => "W2001",
        }
    }

    /// One-line summary, also the default diagnostic message.
    pub const fn summary(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "invalid character",
            ErrorCode::E0002 => "integer literal out of range",
            ErrorCode::E0003 => "unterminated block comment",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "unexpected end of input",
            ErrorCode::W2001 => "read of unbound variable",
        }
    }

    pub const fn is_warning(self) -> bool {
        matches!(self, ErrorCode::W2001)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
