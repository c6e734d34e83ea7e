use crate::foundation::error::CharadeResult;
use crate::source::InstructionSource;

const GENERIC: &[&str] = &["Draw a circle at (200, 150) with radius 30"];

/// Offline instruction table covering every known category.
///
/// Unknown categories get a single generic circle.
#[derive(Clone, Copy, Debug, Default)]
pub struct FallbackSource;

impl FallbackSource {
    /// Instruction lines for `category` (case-insensitive).
    pub fn lines_for(category: &str) -> &'static [&'static str] {
        match category.trim().to_ascii_lowercase().as_str() {
            "cat" => &[
                "Draw a circle at (200, 150) with radius 50",
                "Draw a triangle from (170, 100) to (200, 70) to (230, 100)",
                "Draw a small circle at (180, 140) with radius 10",
                "Draw a small circle at (210, 140) with radius 10",
            ],
            "dog" => &[
                "Draw an oval at (200, 150) with width 60 and height 40",
                "Draw a line from (140, 140) to (140, 180)",
                "Draw a line from (260, 140) to (260, 180)",
            ],
            "house" => &[
                "Draw a rectangle at (150, 150) with width 100 and height 100",
                "Draw a triangle from (150, 150) to (200, 100) to (250, 150)",
            ],
            "tree" => &[
                "Draw a triangle from (200, 100) to (150, 200) to (250, 200)",
                "Draw a rectangle at (190, 200) with width 20 and height 50",
            ],
            "car" => &[
                "Draw a rectangle at (150, 150) with width 100 and height 50",
                "Draw a circle at (170, 200) with radius 20",
                "Draw a circle at (230, 200) with radius 20",
            ],
            "bird" => &[
                "Draw an oval at (200, 150) with width 50 and height 30",
                "Draw a triangle from (230, 140) to (250, 130) to (250, 150)",
            ],
            "fish" => &[
                "Draw an oval at (200, 150) with width 50 and height 30",
                "Draw a triangle from (250, 150) to (280, 130) to (280, 170)",
            ],
            "chair" => &[
                "Draw a rectangle at (170, 150) with width 60 and height 20",
                "Draw a line from (170, 150) to (170, 100)",
                "Draw a line from (230, 150) to (230, 100)",
                "Draw a line from (170, 170) to (170, 200)",
                "Draw a line from (230, 170) to (230, 200)",
            ],
            "apple" => &[
                "Draw a circle at (200, 150) with radius 40",
                "Draw a line from (200, 110) to (200, 130)",
            ],
            "boat" => &[
                "Draw a rectangle at (150, 200) with width 100 and height 50",
                "Draw a triangle from (200, 150) to (200, 100) to (220, 150)",
            ],
            _ => GENERIC,
        }
    }
}

impl InstructionSource for FallbackSource {
    fn fetch(&self, category: &str) -> CharadeResult<Vec<String>> {
        Ok(Self::lines_for(category)
            .iter()
            .map(|s| (*s).to_owned())
            .collect())
    }
}
