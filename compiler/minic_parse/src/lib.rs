//! Parser for MiniC.
//!
//! Recursive descent over the token vector from [`minic_lexer::lex`]. Every
//! node is built through the `minic_ir` factories: declaration, statement
//! and parameter lists grow with [`Node::list_append`] and the declaration
//! list is wrapped by [`Node::program`]. Parsing stops at the first error.

mod cursor;
mod error;
mod grammar;

use minic_ir::Node;
use minic_lexer::Token;

use cursor::Cursor;

pub use error::ParseError;

pub struct Parser {
    cursor: Cursor,
}

impl Parser {
    /// Parser over already-lexed tokens. A missing trailing `Eof` is added.
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }
}

/// Lex and parse `source` into a `Program` node.
///
/// Empty (or comment-only) input yields an empty `Program`.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn parse(source: &str) -> Result<Node, ParseError> {
    let tokens = minic_lexer::lex(source)?;
    Parser::new(tokens).parse_program()
}
