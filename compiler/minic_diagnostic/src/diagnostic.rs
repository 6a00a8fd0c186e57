//! The [`Diagnostic`] record and its builder methods.

use std::fmt;

use minic_ir::Position;

use crate::ErrorCode;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A single reported problem.
///
/// Built with [`Diagnostic::error`] or [`Diagnostic::warning`] and the
/// `with_*` methods:
///
/// ```
/// use minic_diagnostic::{Diagnostic, ErrorCode};
/// use minic_ir::Position;
///
/// let diag = Diagnostic::error(ErrorCode::E1001)
///     .with_message("unexpected `}`")
///     .at(Position::new(3, 1))
///     .with_note("expected an expression");
/// assert!(diag.is_error());
/// ```
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    /// Where the problem was found; [`Position::DUMMY`] when unknown.
    pub pos: Position,
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn error(code: ErrorCode) -> Self {
        Self::with_severity(code, Severity::Error)
    }

    pub fn warning(code: ErrorCode) -> Self {
        Self::with_severity(code, Severity::Warning)
    }

    fn with_severity(code: ErrorCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            message: code.summary().to_string(),
            pos: Position::DUMMY,
            notes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    #[must_use]
    pub fn at(mut self, pos: Position) -> Self {
        self.pos = pos;
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)?;
        if !self.pos.is_dummy() {
            write!(f, " at {}", self.pos)?;
        }
        Ok(())
    }
}
