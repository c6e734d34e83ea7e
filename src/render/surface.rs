use crate::foundation::core::{BezPath, Canvas, Rgba8};
use crate::scene::shape::ShapeKind;

/// Stroke appearance for AI-rendered sketches.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StrokeStyle {
    /// Stroke color.
    pub color: Rgba8,
    /// Stroke width in logical units.
    pub width: f64,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Rgba8::BLACK,
            width: 2.0,
        }
    }
}

/// Persistent drawing target for the animated renderer.
///
/// Strokes are committed in render order and never removed until the next `clear`.
pub trait DrawSurface {
    /// Logical canvas size.
    fn canvas(&self) -> Canvas;
    /// Erase everything and set the stroke style for subsequent strokes.
    fn clear(&mut self, style: StrokeStyle);
    /// Commit one finished shape outline.
    fn stroke(&mut self, kind: ShapeKind, path: &BezPath);
}

/// One committed stroke as seen by a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedStroke {
    /// Shape that produced the stroke.
    pub kind: ShapeKind,
    /// Outline in canvas coordinates.
    pub path: BezPath,
    /// Style in effect when the stroke was committed.
    pub style: StrokeStyle,
}

/// Surface that records strokes instead of rasterizing them.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    canvas: Canvas,
    style: StrokeStyle,
    clears: usize,
    strokes: Vec<RecordedStroke>,
}

impl RecordingSurface {
    /// Create an empty recording surface.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            ..Self::default()
        }
    }

    /// Committed strokes in order.
    pub fn strokes(&self) -> &[RecordedStroke] {
        &self.strokes
    }

    /// Number of times the surface was cleared.
    pub fn clear_count(&self) -> usize {
        self.clears
    }
}

impl DrawSurface for RecordingSurface {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn clear(&mut self, style: StrokeStyle) {
        self.style = style;
        self.clears += 1;
        self.strokes.clear();
    }

    fn stroke(&mut self, kind: ShapeKind, path: &BezPath) {
        self.strokes.push(RecordedStroke {
            kind,
            path: path.clone(),
            style: self.style,
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
