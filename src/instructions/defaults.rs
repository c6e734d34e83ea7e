/// Parameters used when an instruction omits a shape's size clause.
///
/// Ovals store full width/height; the renderer halves them into radii.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ShapeDefaults {
    /// Rectangle width when absent.
    pub rect_width: u32,
    /// Rectangle height when absent.
    pub rect_height: u32,
    /// Circle radius when absent.
    pub circle_radius: u32,
    /// Oval width when absent (radius 10).
    pub oval_width: u32,
    /// Oval height when absent (radius 20).
    pub oval_height: u32,
}

impl Default for ShapeDefaults {
    fn default() -> Self {
        Self {
            rect_width: 10,
            rect_height: 10,
            circle_radius: 5,
            oval_width: 20,
            oval_height: 40,
        }
    }
}
