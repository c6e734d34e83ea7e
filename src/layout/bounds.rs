use crate::foundation::core::{Canvas, Vec2};
use crate::instructions::lexer::{Token, lex};
use crate::instructions::parse::CleanedInstruction;
use crate::scene::shape::Coord;

/// Integer bounding box over instruction coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoordBounds {
    /// Smallest x seen.
    pub min_x: u32,
    /// Largest x seen.
    pub max_x: u32,
    /// Smallest y seen.
    pub min_y: u32,
    /// Largest y seen.
    pub max_y: u32,
}

impl CoordBounds {
    fn from_coord(c: Coord) -> Self {
        Self {
            min_x: c.x,
            max_x: c.x,
            min_y: c.y,
            max_y: c.y,
        }
    }

    fn include(&mut self, c: Coord) {
        self.min_x = self.min_x.min(c.x);
        self.max_x = self.max_x.max(c.x);
        self.min_y = self.min_y.min(c.y);
        self.max_y = self.max_y.max(c.y);
    }

    /// Center of the box.
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (f64::from(self.min_x) + f64::from(self.max_x)) / 2.0,
            (f64::from(self.min_y) + f64::from(self.max_y)) / 2.0,
        )
    }
}

/// Every `(x, y)` pair written in `text`, in order.
pub fn coordinate_pairs(text: &str) -> Vec<Coord> {
    lex(text)
        .windows(5)
        .filter_map(|w| match w {
            [
                Token::LParen,
                Token::Int(x),
                Token::Comma,
                Token::Int(y),
                Token::RParen,
            ] => Some(Coord::new(*x, *y)),
            _ => None,
        })
        .collect()
}

/// Bounding box of every coordinate pair across all instructions, or `None` if there are none.
pub fn instruction_bounds(instructions: &[CleanedInstruction]) -> Option<CoordBounds> {
    let mut coords = instructions
        .iter()
        .flat_map(|i| coordinate_pairs(i.as_str()));
    let first = coords.next()?;
    let mut bounds = CoordBounds::from_coord(first);
    for c in coords {
        bounds.include(c);
    }
    Some(bounds)
}

/// Global translation that centers the drawing on the canvas.
///
/// Anchors and secondary points all count, so the offset is computed from text rather than
/// from extracted shapes. Without any coordinates the box collapses to the origin.
pub fn centering_offset(instructions: &[CleanedInstruction], canvas: Canvas) -> Vec2 {
    let box_center = instruction_bounds(instructions).map_or(Vec2::ZERO, |b| b.center());
    canvas.center().to_vec2() - box_center
}

#[cfg(test)]
#[path = "../../tests/unit/layout/bounds.rs"]
mod tests;
