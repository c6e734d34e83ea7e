use std::path::Path;

use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::error::{CharadeError, CharadeResult};
use crate::instructions::defaults::ShapeDefaults;
use crate::render::animator::AnimatorOpts;
use crate::render::cpu::CursorStyle;

/// Options shared by every sketch session.
///
/// Every field has a default, so a JSON file only needs the keys it overrides:
///
/// ```json
/// { "animator": { "step_delay": 100, "leg_duration": 250 } }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SketchOpts {
    /// Logical canvas size.
    pub canvas: Canvas,
    /// Background color of raster output.
    pub background: Rgba8,
    /// Pen cursor indicator in raster output.
    pub cursor: CursorStyle,
    /// Pen timing, easing and stroke style.
    pub animator: AnimatorOpts,
    /// Sizes used when an instruction omits them.
    pub shape_defaults: ShapeDefaults,
}

impl Default for SketchOpts {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            background: Rgba8::WHITE,
            cursor: CursorStyle::default(),
            animator: AnimatorOpts::default(),
            shape_defaults: ShapeDefaults::default(),
        }
    }
}

impl SketchOpts {
    /// Parse and validate options from JSON text.
    pub fn from_json_str(s: &str) -> CharadeResult<Self> {
        let opts: Self = serde_json::from_str(s)
            .map_err(|e| CharadeError::config(format!("invalid options json: {e}")))?;
        opts.validate()?;
        Ok(opts)
    }

    /// Read, parse and validate options from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> CharadeResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            CharadeError::config(format!("failed to read '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&text)
    }

    /// Reject option values no surface can honor.
    pub fn validate(&self) -> CharadeResult<()> {
        self.canvas.validate()?;
        let width = self.animator.stroke.width;
        if !width.is_finite() || width <= 0.0 {
            return Err(CharadeError::validation("stroke width must be finite and > 0"));
        }
        if !self.cursor.radius.is_finite() || self.cursor.radius < 0.0 {
            return Err(CharadeError::validation(
                "cursor radius must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/opts.rs"]
mod tests;
