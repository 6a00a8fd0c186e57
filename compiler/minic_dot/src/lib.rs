//! Graphviz DOT rendering of syntax trees.
//!
//! Nodes are numbered in pre-order starting at `n0`. Each parent-child link
//! is written as an edge just before the child's own statements, and child
//! slots follow [`Node::children`] order. An absent child still gets a
//! number and a `(null)` node, so every node of a kind has the same fan-out.
//!
//! ```text
//! digraph AST {
//!   n0 [shape=box,label="PROGRAM"]
//!   n0 -> n1
//!   n1 [shape=box,label="FUNC_DEF"]
//!   ...
//! }
//! ```

use std::fmt;
use std::io;

use minic_ir::{Node, NodeKind};
use minic_stack::ensure_sufficient_stack;

/// Graph label for a node.
pub fn label(node: &Node) -> String {
    match &node.kind {
        NodeKind::Program(_) => "PROGRAM".to_string(),
        NodeKind::Compound(_) => "COMPOUND".to_string(),
        NodeKind::List(_) => "LIST".to_string(),
        NodeKind::ExprStmt(_) => "EXPRSTMT".to_string(),
        NodeKind::VarDecl { .. } => "VAR_DECL".to_string(),
        NodeKind::FuncDef { .. } => "FUNC_DEF".to_string(),
        NodeKind::If { .. } => "IF".to_string(),
        NodeKind::While { .. } => "WHILE".to_string(),
        NodeKind::Return(_) => "RETURN".to_string(),
        NodeKind::Binary { .. } => "BIN".to_string(),
        NodeKind::Unary { .. } => "UN".to_string(),
        NodeKind::Assign { .. } => "ASSIGN".to_string(),
        NodeKind::Number(value) => format!("NUM {value}"),
        NodeKind::Ident(name) => name.clone(),
    }
}

/// Quote-safe label text.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
    out
}

struct DotEmitter<'w, W: fmt::Write> {
    out: &'w mut W,
    next_id: u32,
}

impl<W: fmt::Write> DotEmitter<'_, W> {
    fn fresh_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn emit(&mut self, node: Option<&Node>) -> fmt::Result {
        ensure_sufficient_stack(|| {
            let id = self.fresh_id();
            let Some(node) = node else {
                return writeln!(self.out, "  n{id} [label=\"(null)\"]");
            };
            writeln!(self.out, "  n{id} [shape=box,label=\"{}\"]", escape(&label(node)))?;
            for child in node.children() {
                writeln!(self.out, "  n{id} -> n{}", self.next_id)?;
                self.emit(child)?;
            }
            Ok(())
        })
    }
}

/// Write the DOT graph for `root` into `out`. `None` renders a lone
/// `(null)` node.
pub fn write_dot(root: Option<&Node>, out: &mut impl fmt::Write) -> fmt::Result {
    out.write_str("digraph AST {\n")?;
    let mut emitter = DotEmitter {
        out: &mut *out,
        next_id: 0,
    };
    emitter.emit(root)?;
    let nodes = emitter.next_id;
    out.write_str("}\n")?;
    tracing::debug!(nodes, "rendered dot graph");
    Ok(())
}

/// DOT graph for `root` as a string.
pub fn to_dot_string(root: Option<&Node>) -> String {
    let mut text = String::new();
    // Writing into a String cannot fail.
    let _ = write_dot(root, &mut text);
    text
}

/// Forwards formatted text to an I/O sink, keeping the first I/O error
/// that `fmt::Error` cannot carry.
struct IoAdapter<'w, W: io::Write> {
    inner: &'w mut W,
    error: Option<io::Error>,
}

impl<W: io::Write> fmt::Write for IoAdapter<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.inner.write_all(s.as_bytes()).map_err(|err| {
            self.error = Some(err);
            fmt::Error
        })
    }
}

/// Stream the DOT graph for `root` into an I/O sink, one statement at a time.
pub fn emit_dot(root: Option<&Node>, out: &mut impl io::Write) -> io::Result<()> {
    let mut adapter = IoAdapter {
        inner: &mut *out,
        error: None,
    };
    if write_dot(root, &mut adapter).is_err() {
        return Err(adapter
            .error
            .unwrap_or_else(|| io::Error::other("dot rendering failed")));
    }
    out.flush()
}
