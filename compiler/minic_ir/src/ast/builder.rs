//! Node factories.
//!
//! The construction surface handed to the parser: one constructor per node
//! kind, each taking already-built children and a position. Names are copied
//! into owned strings, so a tree never borrows from the parser's buffers.

use super::{BinaryOp, Node, NodeKind, UnaryOp};
use crate::Position;

impl Node {
    #[inline]
    pub fn new(kind: NodeKind, pos: Position) -> Self {
        Node { kind, pos }
    }

    /// An empty `List` container.
    pub fn empty_list() -> Self {
        Node::new(NodeKind::List(Vec::new()), Position::DUMMY)
    }

    /// Append `item` to a running list, allocating the list on first use.
    ///
    /// A `Some` node that is not a `List` is promoted into a fresh list as
    /// its first element before `item` is appended.
    pub fn list_append(list: Option<Node>, item: Node) -> Node {
        let mut list = match list {
            None => Node::empty_list(),
            Some(node) if matches!(node.kind, NodeKind::List(_)) => node,
            Some(node) => Node::new(NodeKind::List(vec![node]), Position::DUMMY),
        };
        if let NodeKind::List(items) = &mut list.kind {
            items.push(item);
        }
        list
    }

    /// Wrap top-level declarations in a `Program`.
    ///
    /// A `List` contributes its items; any other single node becomes a
    /// one-element program; `None` yields an empty program.
    pub fn program(decls: Option<Node>) -> Node {
        let items = match decls {
            None => Vec::new(),
            Some(Node {
                kind: NodeKind::List(items),
                ..
            }) => items,
            Some(single) => vec![single],
        };
        Node::new(NodeKind::Program(items), Position::DUMMY)
    }

    /// A block body. Takes the statement list built with [`Node::list_append`].
    pub fn compound(stmts: Option<Node>, pos: Position) -> Node {
        let items = match stmts {
            None => Vec::new(),
            Some(Node {
                kind: NodeKind::List(items),
                ..
            }) => items,
            Some(single) => vec![single],
        };
        Node::new(NodeKind::Compound(items), pos)
    }

    pub fn var_decl(name: &str, init: Option<Node>, pos: Position) -> Node {
        Node::new(
            NodeKind::VarDecl {
                name: name.to_owned(),
                init: init.map(Box::new),
            },
            pos,
        )
    }

    pub fn func_def(name: &str, params: Option<Node>, body: Node, pos: Position) -> Node {
        Node::new(
            NodeKind::FuncDef {
                name: name.to_owned(),
                params: params.map(Box::new),
                body: Box::new(body),
            },
            pos,
        )
    }

    pub fn expr_stmt(expr: Node, pos: Position) -> Node {
        Node::new(NodeKind::ExprStmt(Box::new(expr)), pos)
    }

    pub fn if_else(cond: Node, then_branch: Node, else_branch: Option<Node>, pos: Position) -> Node {
        Node::new(
            NodeKind::If {
                cond: Box::new(cond),
                then_branch: Box::new(then_branch),
                else_branch: else_branch.map(Box::new),
            },
            pos,
        )
    }

    pub fn while_loop(cond: Node, body: Node, pos: Position) -> Node {
        Node::new(
            NodeKind::While {
                cond: Box::new(cond),
                body: Box::new(body),
            },
            pos,
        )
    }

    pub fn return_stmt(expr: Node, pos: Position) -> Node {
        Node::new(NodeKind::Return(Box::new(expr)), pos)
    }

    pub fn binary(op: BinaryOp, left: Node, right: Node, pos: Position) -> Node {
        Node::new(
            NodeKind::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            pos,
        )
    }

    pub fn unary(op: UnaryOp, operand: Node, pos: Position) -> Node {
        Node::new(
            NodeKind::Unary {
                op,
                operand: Box::new(operand),
            },
            pos,
        )
    }

    pub fn number(value: i64, pos: Position) -> Node {
        Node::new(NodeKind::Number(value), pos)
    }

    pub fn ident(name: &str, pos: Position) -> Node {
        Node::new(NodeKind::Ident(name.to_owned()), pos)
    }

    pub fn assign(name: &str, value: Node, pos: Position) -> Node {
        Node::new(
            NodeKind::Assign {
                name: name.to_owned(),
                value: Box::new(value),
            },
            pos,
        )
    }
}
