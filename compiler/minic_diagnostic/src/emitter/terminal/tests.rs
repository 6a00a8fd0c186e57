#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use minic_ir::Position;
use pretty_assertions::assert_eq;

use super::*;
use crate::ErrorCode;

fn render(
    setup: impl FnOnce(Vec<u8>) -> TerminalEmitter<'static, Vec<u8>>,
    diag: &Diagnostic,
) -> String {
    let mut emitter = setup(Vec::new());
    emitter.emit(diag);
    emitter.flush();
    String::from_utf8(emitter.into_inner()).unwrap()
}

const SOURCE: &str = "int main() {\n  return 1 +;\n}\n";

#[test]
fn test_full_rendering_without_color() {
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message("unexpected `;`")
        .at(Position::new(2, 13))
        .with_note("expected an expression");
    let text = render(
        |w| {
            TerminalEmitter::with_color_mode(w, ColorMode::Never, true)
                .with_source(SOURCE)
                .with_file_path("bad.mc")
        },
        &diag,
    );
    assert_eq!(
        text,
        "error[E1001]: unexpected `;`\n \
         --> bad.mc:2:13\n  \
         |\n\
         2 |   return 1 +;\n  \
         |             ^\n  \
         = note: expected an expression\n"
    );
}

#[test]
fn test_without_source_or_path() {
    let diag = Diagnostic::warning(ErrorCode::W2001)
        .with_message("`y` is not bound")
        .at(Position::new(4, 2));
    let text = render(
        |w| TerminalEmitter::with_color_mode(w, ColorMode::Never, false),
        &diag,
    );
    assert_eq!(text, "warning[W2001]: `y` is not bound\n --> 4:2\n");
}

#[test]
fn test_dummy_position_has_no_location() {
    let diag = Diagnostic::error(ErrorCode::E1002);
    let text = render(
        |w| TerminalEmitter::with_color_mode(w, ColorMode::Never, false).with_source(SOURCE),
        &diag,
    );
    assert_eq!(text, "error[E1002]: unexpected end of input\n");
}

#[test]
fn test_caret_follows_tabs() {
    let diag = Diagnostic::error(ErrorCode::E0001).at(Position::new(1, 3));
    let text = render(
        |w| TerminalEmitter::with_color_mode(w, ColorMode::Never, false).with_source("\t\t@"),
        &diag,
    );
    assert!(text.ends_with("  | \t\t^\n"), "{text:?}");
}

#[test]
fn test_colors_emit_escape_codes() {
    let diag = Diagnostic::error(ErrorCode::E1001).at(Position::new(1, 1));
    let text = render(
        |w| TerminalEmitter::with_color_mode(w, ColorMode::Auto, true),
        &diag,
    );
    assert!(text.contains("\x1b[1;31merror\x1b[0m"));
    assert!(text.contains("E1001"));
}

#[test]
fn test_color_mode_resolution() {
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
}

#[test]
fn test_emit_all_keeps_order() {
    let diags = [
        Diagnostic::warning(ErrorCode::W2001).with_message("first"),
        Diagnostic::warning(ErrorCode::W2001).with_message("second"),
    ];
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.emit_all(&diags);
    let text = String::from_utf8(emitter.into_inner()).unwrap();
    assert_eq!(text, "warning[W2001]: first\nwarning[W2001]: second\n");
}
