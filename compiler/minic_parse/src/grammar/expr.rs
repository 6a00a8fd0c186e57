//! Expressions.
//!
//! Precedence, lowest first: assignment (right associative), `||`, `&&`,
//! `== !=`, `< > <= >=`, `+ -`, `* / %`, unary `+ - !`, primary. All binary
//! levels are left associative and share one precedence-climbing loop driven
//! by [`BinaryOp::precedence`].

use minic_ir::{BinaryOp, Node, UnaryOp};
use minic_lexer::TokenKind;
use minic_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

fn binary_op(kind: &TokenKind) -> Option<BinaryOp> {
    let op = match kind {
        TokenKind::PipePipe => BinaryOp::Or,
        TokenKind::AmpAmp => BinaryOp::And,
        TokenKind::EqEq => BinaryOp::Eq,
        TokenKind::NotEq => BinaryOp::NotEq,
        TokenKind::Lt => BinaryOp::Lt,
        TokenKind::Gt => BinaryOp::Gt,
        TokenKind::LtEq => BinaryOp::LtEq,
        TokenKind::GtEq => BinaryOp::GtEq,
        TokenKind::Plus => BinaryOp::Add,
        TokenKind::Minus => BinaryOp::Sub,
        TokenKind::Star => BinaryOp::Mul,
        TokenKind::Slash => BinaryOp::Div,
        TokenKind::Percent => BinaryOp::Mod,
        _ => return None,
    };
    Some(op)
}

fn unary_op(kind: &TokenKind) -> Option<UnaryOp> {
    match kind {
        TokenKind::Plus => Some(UnaryOp::Plus),
        TokenKind::Minus => Some(UnaryOp::Neg),
        TokenKind::Bang => Some(UnaryOp::Not),
        _ => None,
    }
}

impl Parser {
    /// `expr := IDENT '=' expr | or_expr`
    pub(crate) fn parse_expr(&mut self) -> Result<Node, ParseError> {
        ensure_sufficient_stack(|| self.parse_expr_inner())
    }

    fn parse_expr_inner(&mut self) -> Result<Node, ParseError> {
        let is_assign = matches!(self.cursor.current_kind(), TokenKind::Ident(_))
            && self.cursor.peek_kind(1) == &TokenKind::Eq;
        if is_assign {
            let (name, pos) = self.cursor.expect_ident("an assignment target")?;
            self.cursor.advance();
            let value = self.parse_expr()?;
            return Ok(Node::assign(&name, value, pos));
        }
        self.parse_binary(1)
    }

    fn parse_binary(&mut self, min_prec: u8) -> Result<Node, ParseError> {
        let mut left = self.parse_unary()?;
        while let Some(op) = binary_op(self.cursor.current_kind()) {
            let prec = op.precedence();
            if prec < min_prec {
                break;
            }
            self.cursor.advance();
            let right = self.parse_binary(prec + 1)?;
            let pos = left.pos;
            left = Node::binary(op, left, right, pos);
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Node, ParseError> {
        ensure_sufficient_stack(|| {
            if let Some(op) = unary_op(self.cursor.current_kind()) {
                let start = self.cursor.advance();
                let operand = self.parse_unary()?;
                return Ok(Node::unary(op, operand, start.pos));
            }
            self.parse_primary()
        })
    }

    /// `primary := INT | IDENT | '(' expr ')'`
    fn parse_primary(&mut self) -> Result<Node, ParseError> {
        let token = self.cursor.current().clone();
        match token.kind {
            TokenKind::Number(value) => {
                self.cursor.advance();
                Ok(Node::number(value, token.pos))
            }
            TokenKind::Ident(name) => {
                self.cursor.advance();
                Ok(Node::ident(&name, token.pos))
            }
            TokenKind::LParen => {
                self.cursor.advance();
                let inner = self.parse_expr()?;
                self.cursor.expect(&TokenKind::RParen)?;
                Ok(inner)
            }
            _ => Err(ParseError::unexpected(&token, "an expression")),
        }
    }
}
