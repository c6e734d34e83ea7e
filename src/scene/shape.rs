use crate::foundation::core::{Point, Vec2};

/// Unsigned integer coordinate pair as written in an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Coord {
    /// Horizontal position.
    pub x: u32,
    /// Vertical position (grows downward).
    pub y: u32,
}

impl Coord {
    /// Build a coordinate pair.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Canvas point after applying a global translation.
    pub fn translated(self, offset: Vec2) -> Point {
        Point::new(f64::from(self.x) + offset.x, f64::from(self.y) + offset.y)
    }
}

/// How a line is specified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LineSpan {
    /// Explicit segment from the anchor to `end`.
    Segment {
        /// Segment endpoint.
        end: Coord,
    },
    /// Vertical segment from the anchor, `height` units downward.
    Vertical {
        /// Segment length.
        height: u32,
    },
}

/// One drawable primitive extracted from an instruction line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case", tag = "shape")]
pub enum ShapeDescriptor {
    /// Axis-aligned rectangle whose top-left corner is `anchor`.
    Rectangle {
        /// Top-left corner.
        anchor: Coord,
        /// Horizontal extent.
        width: u32,
        /// Vertical extent.
        height: u32,
    },
    /// Circle centered on `anchor`.
    Circle {
        /// Center.
        anchor: Coord,
        /// Radius.
        radius: u32,
    },
    /// Axis-aligned ellipse centered on `anchor`; radii are half of `width`/`height`.
    Oval {
        /// Center.
        anchor: Coord,
        /// Full horizontal extent.
        width: u32,
        /// Full vertical extent.
        height: u32,
    },
    /// Closed triangle through three vertices.
    Triangle {
        /// Vertices in stroke order.
        vertices: [Coord; 3],
    },
    /// Straight segment starting at `anchor`.
    Line {
        /// Segment start.
        anchor: Coord,
        /// Segment extent.
        span: LineSpan,
    },
}

/// Shape kind without geometry, used for logging and recorded strokes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// See [`ShapeDescriptor::Rectangle`].
    Rectangle,
    /// See [`ShapeDescriptor::Circle`].
    Circle,
    /// See [`ShapeDescriptor::Oval`].
    Oval,
    /// See [`ShapeDescriptor::Triangle`].
    Triangle,
    /// See [`ShapeDescriptor::Line`].
    Line,
}

impl ShapeKind {
    /// Map an instruction word (singular or accepted plural) to a kind.
    pub fn from_word(word: &str) -> Option<Self> {
        match word.to_ascii_lowercase().as_str() {
            "rectangle" => Some(Self::Rectangle),
            "circle" | "circles" => Some(Self::Circle),
            "oval" | "ovals" => Some(Self::Oval),
            "triangle" => Some(Self::Triangle),
            "line" | "lines" => Some(Self::Line),
            _ => None,
        }
    }
}

impl ShapeDescriptor {
    /// Kind tag.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Rectangle { .. } => ShapeKind::Rectangle,
            Self::Circle { .. } => ShapeKind::Circle,
            Self::Oval { .. } => ShapeKind::Oval,
            Self::Triangle { .. } => ShapeKind::Triangle,
            Self::Line { .. } => ShapeKind::Line,
        }
    }

    /// Points the pen visits, in order, while stroking this shape (before translation).
    ///
    /// Rectangles, circles and ovals only need the pen at their anchor.
    pub fn pen_targets(&self) -> Vec<Coord> {
        match *self {
            Self::Rectangle { anchor, .. }
            | Self::Circle { anchor, .. }
            | Self::Oval { anchor, .. } => vec![anchor],
            Self::Triangle { vertices } => vertices.to_vec(),
            Self::Line { anchor, span } => vec![anchor, span.end_from(anchor)],
        }
    }
}

impl LineSpan {
    /// Endpoint of the segment starting at `anchor`.
    pub fn end_from(self, anchor: Coord) -> Coord {
        match self {
            Self::Segment { end } => end,
            Self::Vertical { height } => Coord::new(anchor.x, anchor.y.saturating_add(height)),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/shape.rs"]
mod tests;
