//! Token cursor.

use minic_ir::{Position, Span};
use minic_lexer::{Token, TokenKind};

use crate::ParseError;

/// Forward-only view over a lexed token vector.
///
/// Invariant: the vector is non-empty and ends with `Eof`, and the cursor
/// never moves past that final token.
pub(crate) struct Cursor {
    tokens: Vec<Token>,
    pos: usize,
}

impl Cursor {
    pub(crate) fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map_or(true, |t| t.kind != TokenKind::Eof) {
            let (span, pos) = tokens
                .last()
                .map_or((Span::default(), Position::new(1, 1)), |t| (Span::point(t.span.end), t.pos));
            tokens.push(Token::new(TokenKind::Eof, span, pos));
        }
        Cursor { tokens, pos: 0 }
    }

    #[inline]
    pub(crate) fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    #[inline]
    pub(crate) fn current_kind(&self) -> &TokenKind {
        &self.current().kind
    }

    /// Kind of the token `n` places ahead, clamped to `Eof`.
    pub(crate) fn peek_kind(&self, n: usize) -> &TokenKind {
        let idx = (self.pos + n).min(self.tokens.len() - 1);
        &self.tokens[idx].kind
    }

    #[inline]
    pub(crate) fn check(&self, kind: &TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub(crate) fn at_eof(&self) -> bool {
        self.check(&TokenKind::Eof)
    }

    /// Consume the current token. Stays put on `Eof`.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it is `kind`.
    pub(crate) fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect(&mut self, kind: &TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::unexpected(self.current(), kind.to_string()))
        }
    }

    pub(crate) fn expect_ident(&mut self, what: &str) -> Result<(String, Position), ParseError> {
        match self.current_kind() {
            TokenKind::Ident(name) => {
                let name = name.clone();
                let pos = self.advance().pos;
                Ok((name, pos))
            }
            _ => Err(ParseError::unexpected(self.current(), what)),
        }
    }

    /// `int` or `void`.
    pub(crate) fn expect_type(&mut self) -> Result<Token, ParseError> {
        if self.current_kind().is_type_keyword() {
            Ok(self.advance())
        } else {
            Err(ParseError::unexpected(self.current(), "a type (`int` or `void`)"))
        }
    }
}
