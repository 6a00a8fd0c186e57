//! The logos-derived tokenizer.
//!
//! `RawToken` carries no positions and no owned text; [`crate::lex`] pairs
//! each one with its span and converts it into a [`crate::TokenKind`].

use logos::{Lexer, Logos};

/// Failure reported by the logos state machine.
///
/// `Unrecognized` is what logos produces for input no pattern matches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum RawError {
    #[default]
    Unrecognized,
    IntOverflow,
    UnterminatedComment,
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(error = RawError)]
#[logos(skip r"[ \t\r\n\f]+")]
pub(crate) enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment,

    #[token("int")]
    Int,
    #[token("void")]
    Void,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("while")]
    While,
    #[token("return")]
    Return,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,

    #[token("==")]
    EqEq,
    #[token("=")]
    Eq,
    #[token("!=")]
    NotEq,
    #[token("!")]
    Bang,
    #[token("<=")]
    LtEq,
    #[token("<")]
    Lt,
    #[token(">=")]
    GtEq,
    #[token(">")]
    Gt,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,

    // Sign is never part of the literal; `-5` is unary minus applied to 5.
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<i64>().map_err(|_| RawError::IntOverflow))]
    Number(i64),

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
}

/// Skip to the matching `*/`. Block comments do not nest.
fn block_comment(lex: &mut Lexer<'_, RawToken>) -> Result<(), RawError> {
    if let Some(end) = lex.remainder().find("*/") {
        lex.bump(end + 2);
        Ok(())
    } else {
        lex.bump(lex.remainder().len());
        Err(RawError::UnterminatedComment)
    }
}
