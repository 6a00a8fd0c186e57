//! Human-readable rendering with optional ANSI color.
//!
//! ```text
//! error[E1001]: unexpected `}`
//!  --> loop.mc:3:5
//!   |
//! 3 |     }
//!   |     ^
//!   = note: expected an expression
//! ```
//!
//! The location line is omitted for diagnostics without a position, and the
//! snippet is omitted when no source text was attached.

use std::io::{self, Write};

use minic_ir::LineIndex;

use crate::{Diagnostic, Severity};

use super::DiagnosticEmitter;

mod colors {
    pub const ERROR: &str = "\x1b[1;31m";
    pub const WARNING: &str = "\x1b[1;33m";
    pub const BOLD: &str = "\x1b[1m";
    pub const GUTTER: &str = "\x1b[1;34m";
    pub const RESET: &str = "\x1b[0m";
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color only when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// `is_tty` only matters for [`ColorMode::Auto`].
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// `Never` when `NO_COLOR` is set to a non-empty value, `Auto` otherwise.
    pub fn from_env() -> Self {
        match std::env::var_os("NO_COLOR") {
            Some(v) if !v.is_empty() => ColorMode::Never,
            _ => ColorMode::Auto,
        }
    }
}

struct Source<'src> {
    text: &'src str,
    lines: LineIndex,
}

pub struct TerminalEmitter<'src, W: Write> {
    writer: W,
    colors: bool,
    source: Option<Source<'src>>,
    file_path: Option<String>,
}

impl<'src, W: Write> TerminalEmitter<'src, W> {
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
            file_path: None,
        }
    }

    /// Attach the source text so diagnostics show the offending line.
    #[must_use]
    pub fn with_source(mut self, text: &'src str) -> Self {
        self.source = Some(Source {
            text,
            lines: LineIndex::build(text),
        });
        self
    }

    #[must_use]
    pub fn with_file_path(mut self, path: impl Into<String>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn paint(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_header(&mut self, diagnostic: &Diagnostic) {
        let color = match diagnostic.severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
        };
        let severity = diagnostic.severity.to_string();
        self.paint(&severity, color);
        let code = format!("[{}]", diagnostic.code);
        self.paint(&code, colors::BOLD);
        let _ = writeln!(self.writer, ": {}", diagnostic.message);
    }

    fn write_snippet(&mut self, diagnostic: &Diagnostic) {
        let pos = diagnostic.pos;
        let Some(src) = &self.source else {
            return;
        };
        let Some(line) = src.lines.line_text(src.text, pos.line) else {
            return;
        };
        // Keep tabs so the caret lines up with the rendered source line.
        let pad: String = line
            .chars()
            .take(pos.col.saturating_sub(1) as usize)
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();
        let line = line.to_string();
        let number = pos.line.to_string();
        let blank = " ".repeat(number.len());

        let gutter = format!("{blank} |");
        self.paint(&gutter, colors::GUTTER);
        let _ = writeln!(self.writer);
        let gutter = format!("{number} |");
        self.paint(&gutter, colors::GUTTER);
        let _ = writeln!(self.writer, " {line}");
        let gutter = format!("{blank} |");
        self.paint(&gutter, colors::GUTTER);
        let _ = write!(self.writer, " {pad}");
        let caret_color = match diagnostic.severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
        };
        self.paint("^", caret_color);
        let _ = writeln!(self.writer);
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.write_header(diagnostic);

        if !diagnostic.pos.is_dummy() {
            let location = match &self.file_path {
                Some(path) => format!("{path}:{}", diagnostic.pos),
                None => diagnostic.pos.to_string(),
            };
            let _ = writeln!(self.writer, " --> {location}");
            self.write_snippet(diagnostic);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.paint("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

impl TerminalEmitter<'_, io::Stderr> {
    /// Emitter for the process's stderr.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

#[cfg(test)]
mod tests;
