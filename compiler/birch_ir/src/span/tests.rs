use super::*;

#[test]
fn test_span_basics() {
    let span = Span::new(10, 20);
    assert_eq!(span.len(), 10);
    assert!(!span.is_empty());
    assert!(span.contains(10));
    assert!(span.contains(19));
    assert!(!span.contains(20));
}

#[test]
fn test_span_point_is_empty() {
    let span = Span::point(7);
    assert!(span.is_empty());
    assert!(!span.contains(7));
}

#[test]
fn test_span_merge() {
    let a = Span::new(10, 20);
    let b = Span::new(15, 30);
    assert_eq!(a.merge(b), Span::new(10, 30));
    assert_eq!(b.merge(a), Span::new(10, 30));
}

#[test]
fn test_span_range_conversions() {
    let span = Span::from_range(3..9);
    assert_eq!(span, Span::new(3, 9));
    assert_eq!(span.to_range(), 3..9);
    assert_eq!(Span::from(4..6), Span::new(4, 6));
}

#[test]
fn test_span_display() {
    assert_eq!(format!("{}", Span::new(1, 4)), "1..4");
    assert_eq!(format!("{:?}", Span::new(1, 4)), "1..4");
}

#[test]
fn test_position_start() {
    let pos = Position::default();
    assert_eq!(pos, Position::START);
    assert!(pos.is_line_start());
    assert_eq!(pos.to_string(), "1:1");
}

#[test]
fn test_position_display_and_line_start() {
    let pos = Position::new(3, 5, 40);
    assert!(!pos.is_line_start());
    assert_eq!(pos.to_string(), "3:5");
}
