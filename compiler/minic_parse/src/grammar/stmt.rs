//! Blocks and statements.

use minic_ir::Node;
use minic_lexer::TokenKind;
use minic_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser {
    /// `block := '{' stmt* '}'`
    pub(crate) fn parse_block(&mut self) -> Result<Node, ParseError> {
        let open = self.cursor.expect(&TokenKind::LBrace)?;
        let mut stmts = None;
        while !self.cursor.check(&TokenKind::RBrace) && !self.cursor.at_eof() {
            let stmt = self.parse_stmt()?;
            stmts = Some(Node::list_append(stmts, stmt));
        }
        self.cursor.expect(&TokenKind::RBrace)?;
        Ok(Node::compound(stmts, open.pos))
    }

    pub(crate) fn parse_stmt(&mut self) -> Result<Node, ParseError> {
        ensure_sufficient_stack(|| self.parse_stmt_inner())
    }

    fn parse_stmt_inner(&mut self) -> Result<Node, ParseError> {
        let kind = self.cursor.current_kind().clone();
        match kind {
            TokenKind::LBrace => self.parse_block(),
            TokenKind::If => {
                let start = self.cursor.advance();
                self.cursor.expect(&TokenKind::LParen)?;
                let cond = self.parse_expr()?;
                self.cursor.expect(&TokenKind::RParen)?;
                let then_branch = self.parse_stmt()?;
                // A dangling `else` binds to the nearest `if`.
                let else_branch = if self.cursor.eat(&TokenKind::Else) {
                    Some(self.parse_stmt()?)
                } else {
                    None
                };
                Ok(Node::if_else(cond, then_branch, else_branch, start.pos))
            }
            TokenKind::While => {
                let start = self.cursor.advance();
                self.cursor.expect(&TokenKind::LParen)?;
                let cond = self.parse_expr()?;
                self.cursor.expect(&TokenKind::RParen)?;
                let body = self.parse_stmt()?;
                Ok(Node::while_loop(cond, body, start.pos))
            }
            TokenKind::Return => {
                let start = self.cursor.advance();
                let value = self.parse_expr()?;
                self.cursor.expect(&TokenKind::Semicolon)?;
                Ok(Node::return_stmt(value, start.pos))
            }
            TokenKind::Int | TokenKind::Void => {
                let ty = self.cursor.advance();
                let (name, _) = self.cursor.expect_ident("a variable name")?;
                self.parse_var_decl_rest(&name, ty.pos)
            }
            _ => {
                let pos = self.cursor.current().pos;
                let expr = self.parse_expr()?;
                self.cursor.expect(&TokenKind::Semicolon)?;
                Ok(Node::expr_stmt(expr, pos))
            }
        }
    }
}
