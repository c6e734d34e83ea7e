use super::*;

#[test]
fn keeps_only_non_blank_draw_lines_in_order() {
    let raw = [
        "Here is your sketch:",
        "",
        "   ",
        "DRAW a circle at (1, 2)",
        "Then draw a line from (1, 1) to (2, 2)",
        "withdrawn lines still count",
        "Sketch a circle",
    ];
    let out = parse_instructions(&raw);
    let texts: Vec<&str> = out.iter().map(CleanedInstruction::as_str).collect();
    assert_eq!(
        texts,
        vec![
            "DRAW a circle at (1, 2)",
            "Then draw a line from (1, 1) to (2, 2)",
            "withdrawn lines still count",
        ]
    );
}

#[test]
fn strips_enumeration_prefix_and_trailing_period() {
    assert_eq!(
        clean_line("2. - Draw a triangle with vertices at (170, 100), (200, 70), (230, 100)"),
        "Draw a triangle with vertices at (170, 100), (200, 70), (230, 100)"
    );
    assert_eq!(
        clean_line("Draw a rectangle at (150, 150) with width 100 and height 100."),
        "Draw a rectangle at (150, 150) with width 100 and height 100"
    );
    assert_eq!(clean_line("  .- Draw a line .  "), "Draw a line");
    assert_eq!(clean_line("10.-Draw a circle"), "Draw a circle");
}

#[test]
fn partial_markers_are_left_alone() {
    // No dash after the dot: not an enumeration marker in this grammar.
    assert_eq!(clean_line("1. Draw a circle"), "1. Draw a circle");
    assert_eq!(clean_line("- Draw a circle"), "- Draw a circle");
    // Only one trailing period is removed.
    assert_eq!(clean_line("Draw a circle.."), "Draw a circle.");
}

#[test]
fn empty_input_yields_empty_output() {
    let raw: [&str; 0] = [];
    assert!(parse_instructions(&raw).is_empty());
    assert!(parse_instructions(&["nothing to see", ""]).is_empty());
}
