//! MiniC driver.
//!
//! Glues the pipeline together: source text goes through
//! [`minic_parse::parse`], then either [`minic_eval::eval_program`] or
//! [`minic_dot::write_dot`]. [`run_source`] and [`render_source`] are the
//! in-memory entry points; the [`commands`] module wraps them with file I/O
//! and terminal reporting for the `minic` binary.

pub mod commands;

use std::sync::Once;

use minic_diagnostic::Diagnostic;
use minic_parse::ParseError;

/// Outcome of running a program.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOutput {
    /// Value returned by `main`, or 0 when there is none.
    pub value: i64,
    /// Recovered problems (unbound reads), in evaluation order.
    pub diagnostics: Vec<Diagnostic>,
}

impl From<minic_eval::Evaluation> for RunOutput {
    fn from(evaluation: minic_eval::Evaluation) -> Self {
        RunOutput {
            value: evaluation.value,
            diagnostics: evaluation.diagnostics,
        }
    }
}

/// Parse and execute `source`.
pub fn run_source(source: &str) -> Result<RunOutput, ParseError> {
    let program = minic_parse::parse(source)?;
    Ok(minic_eval::eval_program(Some(&program)).into())
}

/// Parse `source` and render its syntax tree as Graphviz text.
pub fn render_source(source: &str) -> Result<String, ParseError> {
    let program = minic_parse::parse(source)?;
    Ok(minic_dot::to_dot_string(Some(&program)))
}

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber.
///
/// The filter comes from `MINIC_LOG`, falling back to `RUST_LOG`; when
/// neither is set nothing is installed. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        let Ok(directives) = std::env::var("MINIC_LOG").or_else(|_| std::env::var("RUST_LOG"))
        else {
            return;
        };
        let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new("warn"));
        let layer = tracing_tree::HierarchicalLayer::new(2)
            .with_writer(std::io::stderr)
            .with_targets(true);

        // Another subscriber may already be global (e.g. under a test harness).
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init();
    });
}
