//! Lexer errors.

use minic_diagnostic::{Diagnostic, ErrorCode};
use minic_ir::{Position, Span};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    #[error("invalid character `{0}`")]
    InvalidCharacter(char),
    #[error("integer literal `{0}` does not fit in a 64-bit signed integer")]
    IntegerOutOfRange(String),
    #[error("unterminated block comment")]
    UnterminatedComment,
    #[error("source is {0} bytes; at most 4 GiB is supported")]
    SourceTooLarge(usize),
}

/// The first lexical error in a source text. Lexing stops there.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind} at {pos}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
    pub pos: Position,
}

impl LexError {
    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::IntegerOutOfRange(_) => ErrorCode::E0002,
            LexErrorKind::UnterminatedComment => ErrorCode::E0003,
            LexErrorKind::InvalidCharacter(_) | LexErrorKind::SourceTooLarge(_) => {
                ErrorCode::E0001
            }
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .at(self.pos);
        match self.kind {
            LexErrorKind::IntegerOutOfRange(_) => {
                diag.with_note(format!("the largest integer literal is {}", i64::MAX))
            }
            LexErrorKind::UnterminatedComment => diag.with_note("add `*/` to close the comment"),
            _ => diag,
        }
    }
}
