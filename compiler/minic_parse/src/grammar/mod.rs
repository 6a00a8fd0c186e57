//! Grammar productions.
//!
//! - `mod.rs`: top-level declarations and parameter lists
//! - `stmt.rs`: blocks and statements
//! - `expr.rs`: assignment, binary precedence climbing, unary, primary

mod expr;
mod stmt;

use minic_ir::{Node, Position};
use minic_lexer::TokenKind;

use crate::{ParseError, Parser};

impl Parser {
    /// `program := decl*`
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse_program(&mut self) -> Result<Node, ParseError> {
        let mut decls = None;
        let mut count = 0usize;
        while !self.cursor.at_eof() {
            let decl = self.parse_decl()?;
            decls = Some(Node::list_append(decls, decl));
            count += 1;
        }
        tracing::debug!(declarations = count, "parsed program");
        Ok(Node::program(decls))
    }

    /// `decl := type IDENT '(' params? ')' block | type IDENT ('=' expr)? ';'`
    fn parse_decl(&mut self) -> Result<Node, ParseError> {
        let ty = self.cursor.expect_type()?;
        let (name, _) = self.cursor.expect_ident("a declaration name")?;
        if self.cursor.eat(&TokenKind::LParen) {
            let params = self.parse_params()?;
            self.cursor.expect(&TokenKind::RParen)?;
            let body = self.parse_block()?;
            Ok(Node::func_def(&name, Some(params), body, ty.pos))
        } else {
            self.parse_var_decl_rest(&name, ty.pos)
        }
    }

    /// `('=' expr)? ';'` after `type IDENT`.
    fn parse_var_decl_rest(&mut self, name: &str, pos: Position) -> Result<Node, ParseError> {
        let init = if self.cursor.eat(&TokenKind::Eq) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        self.cursor.expect(&TokenKind::Semicolon)?;
        Ok(Node::var_decl(name, init, pos))
    }

    /// `params := 'void' | param (',' param)*`
    ///
    /// Always a `List`; `()` and `(void)` give an empty one.
    fn parse_params(&mut self) -> Result<Node, ParseError> {
        if self.cursor.check(&TokenKind::RParen) {
            return Ok(Node::empty_list());
        }
        if self.cursor.check(&TokenKind::Void) && self.cursor.peek_kind(1) == &TokenKind::RParen {
            self.cursor.advance();
            return Ok(Node::empty_list());
        }

        let mut params = None;
        loop {
            let ty = self.cursor.expect_type()?;
            let (name, _) = self.cursor.expect_ident("a parameter name")?;
            params = Some(Node::list_append(params, Node::var_decl(&name, None, ty.pos)));
            if !self.cursor.eat(&TokenKind::Comma) {
                break;
            }
        }
        Ok(params.unwrap_or_else(Node::empty_list))
    }
}
