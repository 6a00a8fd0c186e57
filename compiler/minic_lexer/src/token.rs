//! Positioned tokens.

use std::fmt;

use minic_ir::{Position, Span};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords
    Int,
    Void,
    If,
    Else,
    While,
    Return,

    Ident(String),
    Number(i64),

    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    Semicolon,
    Comma,
    Eq,

    // Operators
    EqEq,
    NotEq,
    Bang,
    Lt,
    Gt,
    LtEq,
    GtEq,
    AmpAmp,
    PipePipe,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    Eof,
}

impl TokenKind {
    /// Stable upper-case tag, as printed by `minic lex`.
    pub fn tag(&self) -> &'static str {
        match self {
            TokenKind::Int => "INT",
            TokenKind::Void => "VOID",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::While => "WHILE",
            TokenKind::Return => "RETURN",
            TokenKind::Ident(_) => "IDENT",
            TokenKind::Number(_) => "NUMBER",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::Semicolon => "SEMI",
            TokenKind::Comma => "COMMA",
            TokenKind::Eq => "ASSIGN",
            TokenKind::EqEq => "EQ",
            TokenKind::NotEq => "NE",
            TokenKind::Bang => "NOT",
            TokenKind::Lt => "LT",
            TokenKind::Gt => "GT",
            TokenKind::LtEq => "LE",
            TokenKind::GtEq => "GE",
            TokenKind::AmpAmp => "AND",
            TokenKind::PipePipe => "OR",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::Percent => "PERCENT",
            TokenKind::Eof => "EOF",
        }
    }

    /// Source text of fixed-spelling tokens.
    pub fn spelling(&self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Int => "int",
            TokenKind::Void => "void",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::Return => "return",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::Eq => "=",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Bang => "!",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::LtEq => "<=",
            TokenKind::GtEq => ">=",
            TokenKind::AmpAmp => "&&",
            TokenKind::PipePipe => "||",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Ident(_) | TokenKind::Number(_) | TokenKind::Eof => return None,
        };
        Some(text)
    }

    pub fn is_type_keyword(&self) -> bool {
        matches!(self, TokenKind::Int | TokenKind::Void)
    }
}

/// Human-facing description used in parser messages.
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Ident(name) => write!(f, "identifier `{name}`"),
            TokenKind::Number(value) => write!(f, "integer `{value}`"),
            TokenKind::Eof => write!(f, "end of input"),
            other => match other.spelling() {
                Some(text) => write!(f, "`{text}`"),
                None => write!(f, "{}", other.tag()),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub pos: Position,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span, pos: Position) -> Self {
        Token { kind, span, pos }
    }
}

/// `line:col TAG`, plus the payload for identifiers and numbers.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.pos, self.kind.tag())?;
        match &self.kind {
            TokenKind::Ident(name) => write!(f, " {name}"),
            TokenKind::Number(value) => write!(f, " {value}"),
            _ => Ok(()),
        }
    }
}
