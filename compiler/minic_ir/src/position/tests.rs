use super::*;

#[test]
fn test_span_from_range_and_point() {
    assert_eq!(Span::try_from_range(10..20), Ok(Span::new(10, 20)));
    assert_eq!(Span::point(7), Span::new(7, 7));
    assert_eq!(format!("{:?}", Span::new(3, 9)), "3..9");
}

#[test]
fn test_span_try_from_range_too_large() {
    let large = u32::MAX as usize + 1;
    assert!(matches!(
        Span::try_from_range(large..large + 1),
        Err(SpanError::StartTooLarge(_))
    ));
    assert!(matches!(
        Span::try_from_range(0..large),
        Err(SpanError::EndTooLarge(_))
    ));
}

#[test]
fn test_position_display() {
    assert_eq!(Position::new(3, 14).to_string(), "3:14");
    assert!(Position::DUMMY.is_dummy());
    assert!(!Position::new(1, 1).is_dummy());
}

#[test]
fn test_line_index_positions() {
    let source = "int x;\nint main() {\n  return x;\n}";
    let index = LineIndex::build(source);

    assert_eq!(index.position(source, 0), Position::new(1, 1));
    assert_eq!(index.position(source, 4), Position::new(1, 5));
    // start of line 2 sits right after the first newline
    assert_eq!(index.position(source, 7), Position::new(2, 1));
    assert_eq!(index.position(source, 22), Position::new(3, 3));
}

#[test]
fn test_line_index_counts_chars_not_bytes() {
    let source = "/* é */ x";
    let index = LineIndex::build(source);
    let offset = u32::try_from(source.find('x').unwrap_or(0)).unwrap_or(0);
    assert_eq!(index.position(source, offset), Position::new(1, 9));
}

#[test]
fn test_line_text() {
    let source = "first\r\nsecond\nthird";
    let index = LineIndex::build(source);
    assert_eq!(index.line_text(source, 1), Some("first"));
    assert_eq!(index.line_text(source, 2), Some("second"));
    assert_eq!(index.line_text(source, 3), Some("third"));
    assert_eq!(index.line_text(source, 0), None);
    assert_eq!(index.line_text(source, 4), None);
}
