//! Tree-walking evaluator for MiniC.
//!
//! [`eval_program`] is the entry point: it creates a global scope, runs
//! `main`, tears the scope chain down and returns the result together with
//! any recovered diagnostics. The pieces are public for callers that want
//! to drive evaluation themselves:
//!
//! - [`Environment`]: arena of scopes with parent links
//! - [`Interpreter`]: statement/expression evaluation over one environment
//! - [`evaluate_binary`] / [`evaluate_unary`]: operator semantics

mod environment;
mod interpreter;
mod operators;
mod unary_operators;

use minic_diagnostic::Diagnostic;
use minic_ir::Node;

pub use environment::{Environment, ScopeId};
pub use interpreter::{Flow, Interpreter, ScopedInterpreter};
pub use operators::{evaluate_binary, is_truthy};
pub use unary_operators::evaluate_unary;

/// Result of running a program.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evaluation {
    /// Value returned by `main`, or 0.
    pub value: i64,
    /// Recovered problems, in the order they occurred.
    pub diagnostics: Vec<Diagnostic>,
}

/// Evaluate a parsed program. `None` stands for an empty program.
#[tracing::instrument(level = "debug", skip_all)]
pub fn eval_program(root: Option<&Node>) -> Evaluation {
    let mut interp = Interpreter::new();
    let value = interp.run_program(root);
    interp.teardown();
    tracing::debug!(value, "program finished");
    Evaluation {
        value,
        diagnostics: interp.take_diagnostics(),
    }
}
