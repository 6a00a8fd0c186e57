//! Tree-walking interpreter.
//!
//! Statements run through [`Interpreter::exec_statement`], which reports
//! whether a `return` fired; expressions through
//! [`Interpreter::eval_expression`], which always yields an `i64`. Neither
//! fails: reading an unbound name records a [`Diagnostic`] and reads 0.

mod scope_guard;

use minic_diagnostic::{Diagnostic, ErrorCode};
use minic_ir::{Node, NodeKind};
use minic_stack::ensure_sufficient_stack;

use crate::environment::{Environment, ScopeId};
use crate::operators::{evaluate_binary, is_truthy};
use crate::unary_operators::evaluate_unary;

pub use scope_guard::ScopedInterpreter;

/// Completion of a statement.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Normal,
    /// A `return` fired; enclosing blocks and loops stop immediately.
    Return(i64),
}

/// Evaluator state for one program execution.
pub struct Interpreter {
    env: Environment,
    /// Innermost active scope.
    current: ScopeId,
    diagnostics: Vec<Diagnostic>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Interpreter with a single, empty global scope.
    pub fn new() -> Self {
        let mut env = Environment::new();
        let current = env.push(None);
        Interpreter {
            env,
            current,
            diagnostics: Vec::new(),
        }
    }

    pub fn current_scope(&self) -> ScopeId {
        self.current
    }

    /// Resolve `name` from the current scope outward.
    pub fn lookup(&self, name: &str) -> Option<i64> {
        self.env.get(self.current, name)
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    pub fn exec_statement(&mut self, stmt: &Node) -> Flow {
        ensure_sufficient_stack(|| self.exec_statement_inner(stmt))
    }

    fn exec_statement_inner(&mut self, stmt: &Node) -> Flow {
        match &stmt.kind {
            NodeKind::ExprStmt(expr) => {
                self.eval_expression(expr);
                Flow::Normal
            }
            NodeKind::VarDecl { name, init } => {
                let value = init.as_deref().map_or(0, |e| self.eval_expression(e));
                self.env.define(self.current, name, value);
                Flow::Normal
            }
            NodeKind::Compound(stmts) => self.with_env_scope(|scoped| {
                for stmt in stmts {
                    if let Flow::Return(value) = scoped.exec_statement(stmt) {
                        return Flow::Return(value);
                    }
                }
                Flow::Normal
            }),
            NodeKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                if is_truthy(self.eval_expression(cond)) {
                    self.exec_statement(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.exec_statement(else_branch)
                } else {
                    Flow::Normal
                }
            }
            NodeKind::While { cond, body } => {
                while is_truthy(self.eval_expression(cond)) {
                    if let flow @ Flow::Return(_) = self.exec_statement(body) {
                        return flow;
                    }
                }
                Flow::Normal
            }
            NodeKind::Return(expr) => Flow::Return(self.eval_expression(expr)),
            // Expressions, nested functions and containers are inert here.
            NodeKind::Program(_)
            | NodeKind::List(_)
            | NodeKind::FuncDef { .. }
            | NodeKind::Binary { .. }
            | NodeKind::Unary { .. }
            | NodeKind::Number(_)
            | NodeKind::Ident(_)
            | NodeKind::Assign { .. } => {
                tracing::trace!(kind = stmt.kind_name(), pos = %stmt.pos, "inert statement");
                Flow::Normal
            }
        }
    }

    pub fn eval_expression(&mut self, expr: &Node) -> i64 {
        ensure_sufficient_stack(|| self.eval_expression_inner(expr))
    }

    fn eval_expression_inner(&mut self, expr: &Node) -> i64 {
        match &expr.kind {
            NodeKind::Number(value) => *value,
            NodeKind::Ident(name) => {
                if let Some(value) = self.lookup(name) {
                    value
                } else {
                    tracing::warn!(%name, pos = %expr.pos, "undefined variable");
                    self.diagnostics.push(
                        Diagnostic::warning(ErrorCode::W2001)
                            .with_message(format!("undefined variable `{name}`"))
                            .at(expr.pos)
                            .with_note("the read evaluates to 0"),
                    );
                    0
                }
            }
            NodeKind::Assign { name, value } => {
                let value = self.eval_expression(value);
                // Unknown names are declared in the innermost scope.
                if !self.env.set(self.current, name, value) {
                    self.env.define(self.current, name, value);
                }
                value
            }
            NodeKind::Unary { op, operand } => {
                let operand = self.eval_expression(operand);
                evaluate_unary(*op, operand)
            }
            NodeKind::Binary { op, left, right } => {
                let left = self.eval_expression(left);
                let right = self.eval_expression(right);
                evaluate_binary(*op, left, right)
            }
            NodeKind::Program(_)
            | NodeKind::Compound(_)
            | NodeKind::List(_)
            | NodeKind::VarDecl { .. }
            | NodeKind::FuncDef { .. }
            | NodeKind::ExprStmt(_)
            | NodeKind::If { .. }
            | NodeKind::While { .. }
            | NodeKind::Return(_) => {
                tracing::trace!(kind = expr.kind_name(), pos = %expr.pos, "statement read as 0");
                0
            }
        }
    }

    /// Run the program's `main` against the global scope.
    ///
    /// Top-level declarations are visited in order: variable declarations
    /// are bound globally until the first function named `main` is found,
    /// its body runs, and the scan stops. Anything after `main` is never
    /// evaluated. Without `main` the result is 0. A non-`Program` root is
    /// treated as an empty program.
    pub fn run_program(&mut self, root: Option<&Node>) -> i64 {
        let Some(NodeKind::Program(decls)) = root.map(|r| &r.kind) else {
            return 0;
        };
        for decl in decls {
            match &decl.kind {
                NodeKind::FuncDef { name, body, .. } if name == "main" => {
                    tracing::debug!(pos = %decl.pos, "found main");
                    return match self.exec_statement(body) {
                        Flow::Return(value) => value,
                        Flow::Normal => 0,
                    };
                }
                NodeKind::VarDecl { .. } => {
                    self.exec_statement(decl);
                }
                _ => {}
            }
        }
        tracing::debug!("no main function");
        0
    }

    /// Release every live scope. The interpreter is spent afterwards.
    pub fn teardown(&mut self) {
        self.env.free_all(self.current);
    }
}
