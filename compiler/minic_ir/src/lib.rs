//! MiniC IR - AST and source position types.
//!
//! This crate contains the data structures shared by every MiniC phase:
//! - Spans and line/column positions for source locations
//! - The AST node model (one closed enum of node kinds)
//! - Factory constructors the parser uses to build nodes
//! - Operator enums
//!
//! The AST is immutable once built. Consumers (the evaluator and the
//! diagram emitter) only ever borrow it, so one tree can be read by any
//! number of traversals.

pub mod ast;
mod position;

pub use ast::{BinaryOp, Node, NodeKind, UnaryOp};
pub use position::{LineIndex, Position, Span, SpanError};
