//! Diagnostic emitters.
//!
//! An emitter owns an output sink and turns [`Diagnostic`]s into text.
//! [`TerminalEmitter`] is the only format the CLI uses.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic);

    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    fn flush(&mut self);
}
