//! Parse errors.
//!
//! Parsing stops at the first error, so a [`ParseError`] always describes a
//! single problem: either a lexical one or a token the grammar cannot accept.

use minic_diagnostic::{Diagnostic, ErrorCode};
use minic_ir::Position;
use minic_lexer::{LexError, Token, TokenKind};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("expected {expected}, found {found} at {pos}")]
    UnexpectedToken {
        expected: String,
        found: TokenKind,
        pos: Position,
    },

    #[error("expected {expected}, found end of input at {pos}")]
    UnexpectedEof { expected: String, pos: Position },
}

impl ParseError {
    /// Error for `found` appearing where `expected` was required.
    pub(crate) fn unexpected(found: &Token, expected: impl Into<String>) -> Self {
        let expected = expected.into();
        if found.kind == TokenKind::Eof {
            ParseError::UnexpectedEof {
                expected,
                pos: found.pos,
            }
        } else {
            ParseError::UnexpectedToken {
                expected,
                found: found.kind.clone(),
                pos: found.pos,
            }
        }
    }

    pub fn position(&self) -> Position {
        match self {
            ParseError::Lex(err) => err.pos,
            ParseError::UnexpectedToken { pos, .. } | ParseError::UnexpectedEof { pos, .. } => {
                *pos
            }
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::Lex(err) => err.code(),
            ParseError::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseError::UnexpectedEof { .. } => ErrorCode::E1002,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ParseError::Lex(err) => err.to_diagnostic(),
            ParseError::UnexpectedToken {
                expected,
                found,
                pos,
            } => Diagnostic::error(ErrorCode::E1001)
                .with_message(format!("unexpected {found}"))
                .at(*pos)
                .with_note(format!("expected {expected}")),
            ParseError::UnexpectedEof { expected, pos } => Diagnostic::error(ErrorCode::E1002)
                .at(*pos)
                .with_note(format!("expected {expected}")),
        }
    }
}
