use super::*;

fn extract(text: &str) -> Option<ShapeDescriptor> {
    ShapeGrammar::default().extract_str(text)
}

#[test]
fn rectangle_with_full_size_clause() {
    assert_eq!(
        extract("Draw a rectangle at (150, 150) with width 100 and height 100"),
        Some(ShapeDescriptor::Rectangle {
            anchor: Coord::new(150, 150),
            width: 100,
            height: 100,
        })
    );
}

#[test]
fn triangle_with_listed_vertices() {
    assert_eq!(
        extract("Draw a triangle with vertices at (170, 100), (200, 70), (230, 100)"),
        Some(ShapeDescriptor::Triangle {
            vertices: [Coord::new(170, 100), Coord::new(200, 70), Coord::new(230, 100)],
        })
    );
}

#[test]
fn triangle_with_chained_vertices() {
    assert_eq!(
        extract("Draw a triangle from (170, 100) to (200, 70) to (230, 100)"),
        Some(ShapeDescriptor::Triangle {
            vertices: [Coord::new(170, 100), Coord::new(200, 70), Coord::new(230, 100)],
        })
    );
}

#[test]
fn triangle_missing_a_vertex_is_dropped() {
    assert_eq!(
        extract("Draw a triangle with vertices at (170, 100), (200, 70)"),
        None
    );
    assert_eq!(extract("Draw a triangle from (1, 2) to (3, 4)"), None);
    // The single-anchor rule never produces triangles.
    assert_eq!(extract("Draw a small triangle at (10, 10) with width 5"), None);
}

#[test]
fn unknown_shape_word_is_a_miss() {
    assert_eq!(extract("Draw something abstract"), None);
    assert_eq!(extract("Draw a square at (10, 10)"), None);
    assert_eq!(extract("Draw a heart at (10, 10) with radius 4"), None);
}

#[test]
fn defaults_fill_missing_size_clauses() {
    assert_eq!(
        extract("Draw a rectangle at (5, 6)"),
        Some(ShapeDescriptor::Rectangle {
            anchor: Coord::new(5, 6),
            width: 10,
            height: 10,
        })
    );
    assert_eq!(
        extract("Draw a small circle at (180, 140)"),
        Some(ShapeDescriptor::Circle {
            anchor: Coord::new(180, 140),
            radius: 5,
        })
    );
    assert_eq!(
        extract("Draw an oval at (200, 150)"),
        Some(ShapeDescriptor::Oval {
            anchor: Coord::new(200, 150),
            width: 20,
            height: 40,
        })
    );
    assert_eq!(
        extract("Draw a rectangle at (1, 1) with width 30"),
        Some(ShapeDescriptor::Rectangle {
            anchor: Coord::new(1, 1),
            width: 30,
            height: 10,
        })
    );
}

#[test]
fn custom_defaults_table_is_honored() {
    let grammar = ShapeGrammar::new(ShapeDefaults {
        circle_radius: 42,
        ..ShapeDefaults::default()
    });
    assert_eq!(
        grammar.extract_str("Draw a circle at (1, 2)"),
        Some(ShapeDescriptor::Circle {
            anchor: Coord::new(1, 2),
            radius: 42,
        })
    );
}

#[test]
fn plural_words_articles_and_adjectives() {
    assert_eq!(
        extract("draw two brown circles at (30, 40) with radius 7"),
        Some(ShapeDescriptor::Circle {
            anchor: Coord::new(30, 40),
            radius: 7,
        })
    );
    assert_eq!(
        extract("DRAW AN UPSIDE-DOWN OVAL AT (9, 9) WITH WIDTH 60 AND HEIGHT 40"),
        Some(ShapeDescriptor::Oval {
            anchor: Coord::new(9, 9),
            width: 60,
            height: 40,
        })
    );
}

#[test]
fn line_endpoint_forms() {
    let segment = Some(ShapeDescriptor::Line {
        anchor: Coord::new(140, 140),
        span: LineSpan::Segment {
            end: Coord::new(140, 180),
        },
    });
    assert_eq!(extract("Draw a line from (140, 140) to (140, 180)"), segment);
    assert_eq!(extract("Draw a line at (140, 140) end at (140, 180)"), segment);
}

#[test]
fn line_with_height_is_vertical_and_endpoint_wins() {
    assert_eq!(
        extract("Draw a line at (200, 110) with height 20"),
        Some(ShapeDescriptor::Line {
            anchor: Coord::new(200, 110),
            span: LineSpan::Vertical { height: 20 },
        })
    );
    assert_eq!(
        extract("Draw a line at (0, 0) with height 20 to (5, 5)"),
        Some(ShapeDescriptor::Line {
            anchor: Coord::new(0, 0),
            span: LineSpan::Segment {
                end: Coord::new(5, 5),
            },
        })
    );
}

#[test]
fn line_without_extent_is_dropped() {
    assert_eq!(extract("Draw a line at (10, 10)"), None);
    assert_eq!(extract("Draw a line at (10, 10) with radius 3"), None);
}

#[test]
fn anchor_may_omit_closing_paren_and_preposition() {
    assert_eq!(
        extract("Draw a circle (12, 34 with radius 3"),
        Some(ShapeDescriptor::Circle {
            anchor: Coord::new(12, 34),
            radius: 3,
        })
    );
}

#[test]
fn negative_and_fractional_coordinates_do_not_match() {
    assert_eq!(extract("Draw a circle at (-5, 10) with radius 3"), None);
    assert_eq!(extract("Draw a circle at (5.5, 10) with radius 3"), None);
}

#[test]
fn later_draw_word_can_anchor_the_match() {
    assert_eq!(
        extract("First, draw nothing; then draw a circle at (1, 2) with radius 3"),
        Some(ShapeDescriptor::Circle {
            anchor: Coord::new(1, 2),
            radius: 3,
        })
    );
}

#[test]
fn grammar_is_total_over_odd_input() {
    for text in [
        "",
        "draw",
        "draw a",
        "draw a circle",
        "draw a circle at (",
        "draw a circle at (1,",
        "draw a circle at (1, 2) with",
        "draw a line at (1, 2) to (",
        "((((,,,))))",
        "draw 🎨 at (1, 2)",
    ] {
        let _ = extract(text);
    }
    assert_eq!(RULES[0].name, "triangle_vertices");
    assert_eq!(RULES[1].name, "single_anchor");
}
