//! AST node model.
//!
//! Every MiniC construct is a [`Node`]: a [`NodeKind`] payload plus the
//! position of the construct in the source. The kind set is closed, so
//! consumers match on it exhaustively instead of dispatching through traits.
//!
//! # Child order
//!
//! Sequence kinds (`Program`, `Compound`, `List`) keep their items in
//! insertion order; that order is declaration and statement order. For the
//! other kinds, [`Node::children`] yields child slots in a fixed field order
//! (e.g. `If`: condition, then, else), with `None` for an absent optional
//! child.

mod builder;
mod operators;

use smallvec::SmallVec;

use crate::Position;

pub use operators::{BinaryOp, UnaryOp};

/// Child slots of a node, in field order. `None` marks an absent child.
pub type ChildSlots<'a> = SmallVec<[Option<&'a Node>; 3]>;

/// A single AST node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub kind: NodeKind,
    pub pos: Position,
}

/// Node kinds and their payloads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// Top-level declarations, in source order.
    Program(Vec<Node>),
    /// Block body; entering it opens a new scope.
    Compound(Vec<Node>),
    /// Generic ordered container (parameter lists, declaration lists).
    List(Vec<Node>),
    /// `int name = init;`
    VarDecl {
        name: String,
        init: Option<Box<Node>>,
    },
    /// `int name(params) body`
    FuncDef {
        name: String,
        params: Option<Box<Node>>,
        body: Box<Node>,
    },
    /// Expression evaluated for its side effect only.
    ExprStmt(Box<Node>),
    If {
        cond: Box<Node>,
        then_branch: Box<Node>,
        else_branch: Option<Box<Node>>,
    },
    While {
        cond: Box<Node>,
        body: Box<Node>,
    },
    Return(Box<Node>),
    Binary {
        op: BinaryOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Node>,
    },
    Number(i64),
    /// Variable reference, resolved against the scope chain at run time.
    Ident(String),
    /// `name = value`
    Assign {
        name: String,
        value: Box<Node>,
    },
}

impl Node {
    /// Items of a sequence node (`Program`, `Compound`, `List`).
    pub fn items(&self) -> Option<&[Node]> {
        match &self.kind {
            NodeKind::Program(items) | NodeKind::Compound(items) | NodeKind::List(items) => {
                Some(items)
            }
            _ => None,
        }
    }

    /// Child slots in field order.
    ///
    /// Sequence nodes yield one `Some` slot per item. Optional children
    /// (`VarDecl` initializer, `FuncDef` parameters, `If` else-branch) yield
    /// `None` when absent so traversals stay structurally regular.
    pub fn children(&self) -> ChildSlots<'_> {
        let mut slots = ChildSlots::new();
        match &self.kind {
            NodeKind::Program(items) | NodeKind::Compound(items) | NodeKind::List(items) => {
                slots.extend(items.iter().map(Some));
            }
            NodeKind::VarDecl { init, .. } => slots.push(init.as_deref()),
            NodeKind::FuncDef { params, body, .. } => {
                slots.push(params.as_deref());
                slots.push(Some(&**body));
            }
            NodeKind::If {
                cond,
                then_branch,
                else_branch,
            } => {
                slots.push(Some(&**cond));
                slots.push(Some(&**then_branch));
                slots.push(else_branch.as_deref());
            }
            NodeKind::While { cond, body } => {
                slots.push(Some(&**cond));
                slots.push(Some(&**body));
            }
            NodeKind::ExprStmt(expr) | NodeKind::Return(expr) => slots.push(Some(&**expr)),
            NodeKind::Binary { left, right, .. } => {
                slots.push(Some(&**left));
                slots.push(Some(&**right));
            }
            NodeKind::Unary { operand, .. } => slots.push(Some(&**operand)),
            NodeKind::Assign { value, .. } => slots.push(Some(&**value)),
            NodeKind::Number(_) | NodeKind::Ident(_) => {}
        }
        slots
    }

    /// Short kind name, used in evaluator trace events.
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            NodeKind::Program(_) => "program",
            NodeKind::Compound(_) => "block",
            NodeKind::List(_) => "list",
            NodeKind::VarDecl { .. } => "variable declaration",
            NodeKind::FuncDef { .. } => "function definition",
            NodeKind::ExprStmt(_) => "expression statement",
            NodeKind::If { .. } => "if statement",
            NodeKind::While { .. } => "while loop",
            NodeKind::Return(_) => "return statement",
            NodeKind::Binary { .. } => "binary expression",
            NodeKind::Unary { .. } => "unary expression",
            NodeKind::Number(_) => "number",
            NodeKind::Ident(_) => "identifier",
            NodeKind::Assign { .. } => "assignment",
        }
    }
}
