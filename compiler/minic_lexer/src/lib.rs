//! Tokenizer for MiniC.
//!
//! [`lex`] turns source text into a flat token vector terminated by a single
//! [`TokenKind::Eof`]. Whitespace and comments never reach the parser. The
//! first invalid input aborts lexing with a [`LexError`].

mod lex_error;
mod raw_token;
mod token;

use logos::Logos;
use minic_ir::{LineIndex, Span};

pub use lex_error::{LexError, LexErrorKind};
pub use token::{Token, TokenKind};

use raw_token::{RawError, RawToken};

/// Lex `source` into tokens, ending with `Eof`.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let lines = LineIndex::build(source);
    let Ok(eof_offset) = u32::try_from(source.len()) else {
        return Err(LexError {
            kind: LexErrorKind::SourceTooLarge(source.len()),
            span: Span::default(),
            pos: lines.position(source, 0),
        });
    };

    let mut tokens = Vec::new();
    let mut logos = RawToken::lexer(source);

    while let Some(result) = logos.next() {
        // The whole source fits in u32, so every sub-range does too.
        let span = Span::try_from_range(logos.span()).unwrap_or_default();
        let pos = lines.position(source, span.start);
        let slice = logos.slice();

        let raw = match result {
            Ok(raw) => raw,
            Err(err) => {
                let kind = match err {
                    RawError::IntOverflow => LexErrorKind::IntegerOutOfRange(slice.to_string()),
                    RawError::UnterminatedComment => LexErrorKind::UnterminatedComment,
                    RawError::Unrecognized => {
                        LexErrorKind::InvalidCharacter(slice.chars().next().unwrap_or('\0'))
                    }
                };
                return Err(LexError { kind, span, pos });
            }
        };

        let kind = match raw {
            RawToken::LineComment | RawToken::BlockComment => continue,
            RawToken::Int => TokenKind::Int,
            RawToken::Void => TokenKind::Void,
            RawToken::If => TokenKind::If,
            RawToken::Else => TokenKind::Else,
            RawToken::While => TokenKind::While,
            RawToken::Return => TokenKind::Return,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::LBrace => TokenKind::LBrace,
            RawToken::RBrace => TokenKind::RBrace,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::Comma => TokenKind::Comma,
            RawToken::EqEq => TokenKind::EqEq,
            RawToken::Eq => TokenKind::Eq,
            RawToken::NotEq => TokenKind::NotEq,
            RawToken::Bang => TokenKind::Bang,
            RawToken::LtEq => TokenKind::LtEq,
            RawToken::Lt => TokenKind::Lt,
            RawToken::GtEq => TokenKind::GtEq,
            RawToken::Gt => TokenKind::Gt,
            RawToken::AmpAmp => TokenKind::AmpAmp,
            RawToken::PipePipe => TokenKind::PipePipe,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Star => TokenKind::Star,
            RawToken::Slash => TokenKind::Slash,
            RawToken::Percent => TokenKind::Percent,
            RawToken::Number(value) => TokenKind::Number(value),
            RawToken::Ident => TokenKind::Ident(slice.to_string()),
        };
        tokens.push(Token::new(kind, span, pos));
    }

    tokens.push(Token::new(
        TokenKind::Eof,
        Span::point(eof_offset),
        lines.position(source, eof_offset),
    ));
    tracing::trace!(count = tokens.len(), "lexed");
    Ok(tokens)
}

#[cfg(test)]
mod tests;
