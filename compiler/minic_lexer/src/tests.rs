use minic_diagnostic::ErrorCode;
use minic_ir::Position;
use pretty_assertions::assert_eq;

use super::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    match lex(source) {
        Ok(tokens) => tokens.into_iter().map(|t| t.kind).collect(),
        Err(err) => panic!("lexing {source:?} failed: {err}"),
    }
}

fn lex_err(source: &str) -> LexError {
    match lex(source) {
        Ok(tokens) => panic!("expected a lex error, got {tokens:?}"),
        Err(err) => err,
    }
}

#[test]
fn test_empty_source_is_just_eof() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
    assert_eq!(kinds("  \n\t "), vec![TokenKind::Eof]);
}

#[test]
fn test_function_header() {
    assert_eq!(
        kinds("int main(void) {"),
        vec![
            TokenKind::Int,
            TokenKind::Ident("main".into()),
            TokenKind::LParen,
            TokenKind::Void,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_keywords_are_whole_words() {
    assert_eq!(
        kinds("integer iffy while_ return"),
        vec![
            TokenKind::Ident("integer".into()),
            TokenKind::Ident("iffy".into()),
            TokenKind::Ident("while_".into()),
            TokenKind::Return,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_two_char_operators_win() {
    assert_eq!(
        kinds("a<=b>=c==d!=e&&f||!g=h<i>j"),
        vec![
            TokenKind::Ident("a".into()),
            TokenKind::LtEq,
            TokenKind::Ident("b".into()),
            TokenKind::GtEq,
            TokenKind::Ident("c".into()),
            TokenKind::EqEq,
            TokenKind::Ident("d".into()),
            TokenKind::NotEq,
            TokenKind::Ident("e".into()),
            TokenKind::AmpAmp,
            TokenKind::Ident("f".into()),
            TokenKind::PipePipe,
            TokenKind::Bang,
            TokenKind::Ident("g".into()),
            TokenKind::Eq,
            TokenKind::Ident("h".into()),
            TokenKind::Lt,
            TokenKind::Ident("i".into()),
            TokenKind::Gt,
            TokenKind::Ident("j".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_arithmetic_and_numbers() {
    assert_eq!(
        kinds("-7 + 10 * 3 / 2 % 4"),
        vec![
            TokenKind::Minus,
            TokenKind::Number(7),
            TokenKind::Plus,
            TokenKind::Number(10),
            TokenKind::Star,
            TokenKind::Number(3),
            TokenKind::Slash,
            TokenKind::Number(2),
            TokenKind::Percent,
            TokenKind::Number(4),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_comments_are_skipped() {
    let source = "int x; // trailing\n/* block\n spanning */ int y;";
    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Int,
            TokenKind::Ident("x".into()),
            TokenKind::Semicolon,
            TokenKind::Int,
            TokenKind::Ident("y".into()),
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_positions_are_one_based() {
    let tokens = lex("int x;\n  x = 1;").unwrap_or_default();
    let positions: Vec<Position> = tokens.iter().map(|t| t.pos).collect();
    assert_eq!(
        positions,
        vec![
            Position::new(1, 1),
            Position::new(1, 5),
            Position::new(1, 6),
            Position::new(2, 3),
            Position::new(2, 5),
            Position::new(2, 7),
            Position::new(2, 8),
            // Eof sits just past the last character
            Position::new(2, 9),
        ]
    );
    assert_eq!(tokens[1].span, Span::new(4, 5));
}

#[test]
fn test_invalid_character() {
    let err = lex_err("int x = 3 @ 4;");
    assert_eq!(err.kind, LexErrorKind::InvalidCharacter('@'));
    assert_eq!(err.pos, Position::new(1, 11));
    assert_eq!(err.code(), ErrorCode::E0001);
    assert_eq!(err.to_string(), "invalid character `@` at 1:11");
}

#[test]
fn test_integer_out_of_range() {
    assert_eq!(
        kinds("9223372036854775807"),
        vec![TokenKind::Number(i64::MAX), TokenKind::Eof]
    );
    let err = lex_err("return 9223372036854775808;");
    assert_eq!(
        err.kind,
        LexErrorKind::IntegerOutOfRange("9223372036854775808".into())
    );
    assert_eq!(err.code(), ErrorCode::E0002);
    let diag = err.to_diagnostic();
    assert_eq!(diag.pos, Position::new(1, 8));
    assert_eq!(diag.notes.len(), 1);
}

#[test]
fn test_unterminated_block_comment() {
    let err = lex_err("int x; /* never closed");
    assert_eq!(err.kind, LexErrorKind::UnterminatedComment);
    assert_eq!(err.pos, Position::new(1, 8));
    assert_eq!(err.code(), ErrorCode::E0003);
}

#[test]
fn test_token_display_for_lex_listing() {
    let tokens = lex("int answer = 42;").unwrap_or_default();
    let lines: Vec<String> = tokens.iter().map(ToString::to_string).collect();
    assert_eq!(
        lines,
        vec![
            "1:1 INT",
            "1:5 IDENT answer",
            "1:12 ASSIGN",
            "1:14 NUMBER 42",
            "1:16 SEMI",
            "1:17 EOF",
        ]
    );
}

#[test]
fn test_kind_display_for_messages() {
    assert_eq!(TokenKind::RBrace.to_string(), "`}`");
    assert_eq!(TokenKind::Ident("y".into()).to_string(), "identifier `y`");
    assert_eq!(TokenKind::Number(5).to_string(), "integer `5`");
    assert_eq!(TokenKind::Eof.to_string(), "end of input");
    assert!(TokenKind::Void.is_type_keyword());
    assert!(!TokenKind::Return.is_type_keyword());
}
