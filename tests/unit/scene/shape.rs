use super::*;

#[test]
fn shape_words_accept_documented_plurals() {
    assert_eq!(ShapeKind::from_word("Circles"), Some(ShapeKind::Circle));
    assert_eq!(ShapeKind::from_word("OVALS"), Some(ShapeKind::Oval));
    assert_eq!(ShapeKind::from_word("lines"), Some(ShapeKind::Line));
    assert_eq!(ShapeKind::from_word("rectangles"), None);
    assert_eq!(ShapeKind::from_word("triangles"), None);
    assert_eq!(ShapeKind::from_word("square"), None);
}

#[test]
fn pen_targets_follow_stroke_order() {
    let tri = ShapeDescriptor::Triangle {
        vertices: [Coord::new(1, 2), Coord::new(3, 4), Coord::new(5, 6)],
    };
    assert_eq!(
        tri.pen_targets(),
        vec![Coord::new(1, 2), Coord::new(3, 4), Coord::new(5, 6)]
    );

    let vertical = ShapeDescriptor::Line {
        anchor: Coord::new(10, 20),
        span: LineSpan::Vertical { height: 30 },
    };
    assert_eq!(
        vertical.pen_targets(),
        vec![Coord::new(10, 20), Coord::new(10, 50)]
    );

    let circle = ShapeDescriptor::Circle {
        anchor: Coord::new(7, 8),
        radius: 5,
    };
    assert_eq!(circle.pen_targets(), vec![Coord::new(7, 8)]);
    assert_eq!(circle.kind(), ShapeKind::Circle);
}

#[test]
fn translation_applies_offset_to_both_axes() {
    let p = Coord::new(150, 150).translated(Vec2::new(-10.5, 25.0));
    assert_eq!(p, Point::new(139.5, 175.0));
}
