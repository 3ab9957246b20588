use crate::span::{Span, TextRange};

#[test]
fn test_span_len_and_empty() {
    let span = Span::new(2, 5);
    assert_eq!(span.len(), 3);
    assert!(!span.is_empty());
    assert!(Span::at(7).is_empty());
    assert_eq!(Span::at(7).len(), 0);
}

#[test]
fn test_span_containment() {
    let outer = Span::new(1, 19);
    assert!(outer.contains_span(Span::new(2, 5)));
    assert!(outer.contains_span(outer));
    assert!(!outer.contains_span(Span::new(0, 5)));
    assert!(outer.contains(1));
    assert!(!outer.contains(19));
}

#[test]
fn test_span_text() {
    let source = "{a.<number>}";
    let args = Span::new(4, 10);
    assert_eq!(args.text(source), "number");
    assert_eq!(Span::new(10, 40).text(source), "");
}

#[test]
fn test_span_text_range() {
    let span = Span::new(3, 9);
    assert_eq!(span.pos(), 3);
    assert_eq!(span.end(), 9);
    assert_eq!(TextRange::span(&span), span);
}
