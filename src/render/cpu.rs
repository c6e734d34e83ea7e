use vello_cpu::kurbo::Shape as _;

use crate::foundation::core::{BezPath, Canvas, Point, Rgba8};
use crate::foundation::error::{CharadeError, CharadeResult};
use crate::render::frame::FrameRGBA;
use crate::render::surface::{DrawSurface, StrokeStyle};
use crate::scene::shape::ShapeKind;

/// Appearance of the pen cursor indicator in rendered frames.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CursorStyle {
    /// Dot color.
    pub color: Rgba8,
    /// Dot radius in logical units.
    pub radius: f64,
}

impl Default for CursorStyle {
    fn default() -> Self {
        Self {
            color: Rgba8::opaque(220, 40, 40),
            radius: 4.0,
        }
    }
}

/// CPU raster surface powered by `vello_cpu`.
///
/// Strokes are kept as vector outlines and rasterized on demand, so a frame can be produced at
/// any point of the animation with or without the pen cursor on top.
#[derive(Clone, Debug)]
pub struct CpuSurface {
    canvas: Canvas,
    width: u16,
    height: u16,
    background: Rgba8,
    cursor: CursorStyle,
    style: StrokeStyle,
    strokes: Vec<(BezPath, StrokeStyle)>,
}

impl CpuSurface {
    /// Create an empty surface filled with `background`.
    pub fn new(canvas: Canvas, background: Rgba8, cursor: CursorStyle) -> CharadeResult<Self> {
        canvas.validate()?;
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| CharadeError::render("surface width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| CharadeError::render("surface height exceeds u16"))?;
        Ok(Self {
            canvas,
            width,
            height,
            background,
            cursor,
            style: StrokeStyle::default(),
            strokes: Vec::new(),
        })
    }

    /// Number of committed strokes.
    pub fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    /// Rasterize committed strokes, drawing the cursor dot at `cursor` when given.
    pub fn render(&self, cursor: Option<Point>) -> CharadeResult<FrameRGBA> {
        let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

        ctx.set_paint(color_to_cpu(self.background));
        let bg = vello_cpu::kurbo::Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height));
        ctx.fill_path(&bg.to_path(0.1));

        for (path, style) in &self.strokes {
            ctx.set_paint(color_to_cpu(style.color));
            ctx.set_stroke(vello_cpu::kurbo::Stroke::new(style.width));
            ctx.stroke_path(&bezpath_to_cpu(path));
        }

        if let Some(p) = cursor {
            ctx.set_paint(color_to_cpu(self.cursor.color));
            let dot = vello_cpu::kurbo::Circle::new(point_to_cpu(p), self.cursor.radius);
            ctx.fill_path(&dot.to_path(0.1));
        }

        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        ctx.render_to_pixmap(&mut pixmap);

        Ok(FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

impl DrawSurface for CpuSurface {
    fn canvas(&self) -> Canvas {
        self.canvas
    }

    fn clear(&mut self, style: StrokeStyle) {
        self.style = style;
        self.strokes.clear();
    }

    fn stroke(&mut self, kind: ShapeKind, path: &BezPath) {
        tracing::trace!(?kind, elements = path.elements().len(), "stroke committed");
        self.strokes.push((path.clone(), self.style));
    }
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
