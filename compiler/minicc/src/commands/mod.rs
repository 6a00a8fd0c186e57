//! Command handlers for the `minic` CLI.
//!
//! Each submodule implements one command. Handlers print their results on
//! stdout, render diagnostics on stderr and hand failures back as a
//! [`CommandError`]; the binary maps those to exit codes. Shared helpers
//! (`read_file`, `report`) live here in the module root.

mod debug;
mod diagram;
mod run;

use std::io::IsTerminal;
use std::path::PathBuf;

use minic_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use minic_diagnostic::Diagnostic;
use minic_parse::ParseError;
use thiserror::Error;

pub use debug::{lex_file, parse_file};
pub use diagram::{dot_file, png_file, DotOptions, PngOptions};
pub use run::run_file;

/// Why a command failed.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The input file could not be read.
    #[error("{message}")]
    Read { path: String, message: String },

    /// The input did not lex or parse. Already rendered on stderr.
    #[error("could not parse '{path}'")]
    Parse {
        path: String,
        #[source]
        source: ParseError,
    },

    /// The diagram file could not be created or written.
    #[error("cannot write '{}': {source}", .path.display())]
    WriteDiagram {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Graphviz is missing or exited unsuccessfully.
    #[error("graphviz `{program}` failed: {detail}")]
    Graphviz { program: String, detail: String },
}

impl CommandError {
    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            CommandError::Read { .. } => 1,
            CommandError::Parse { .. } => 2,
            CommandError::WriteDiagram { .. } => 3,
            CommandError::Graphviz { .. } => 4,
        }
    }

    /// Whether the failure was already shown to the user as a diagnostic.
    pub fn is_reported(&self) -> bool {
        matches!(self, CommandError::Parse { .. })
    }

    /// Follow-up advice printed after the error message.
    pub fn hint(&self) -> Option<String> {
        match self {
            CommandError::Graphviz { .. } => Some(
                "install Graphviz or point MINIC_DOT at its `dot` executable; \
                 the .dot file can also be rendered manually"
                    .to_string(),
            ),
            _ => None,
        }
    }
}

/// Read a source file, turning I/O failures into a readable message.
pub(crate) fn read_file(path: &str) -> Result<String, CommandError> {
    std::fs::read_to_string(path).map_err(|e| {
        let message = match e.kind() {
            std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
            std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
            std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
            _ => format!("error reading '{path}': {e}"),
        };
        CommandError::Read {
            path: path.to_string(),
            message,
        }
    })
}

/// Render diagnostics for `path` on stderr with source snippets.
pub(crate) fn report(path: &str, source: &str, diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        return;
    }
    let is_tty = std::io::stderr().is_terminal();
    let mut emitter = TerminalEmitter::stderr(ColorMode::from_env(), is_tty)
        .with_source(source)
        .with_file_path(path);
    emitter.emit_all(diagnostics);
    emitter.flush();
}

/// Parse `source`, reporting a failure before handing it back.
pub(crate) fn parse_reported(path: &str, source: &str) -> Result<minic_ir::Node, CommandError> {
    minic_parse::parse(source).map_err(|err| {
        report(path, source, &[err.to_diagnostic()]);
        CommandError::Parse {
            path: path.to_string(),
            source: err,
        }
    })
}
