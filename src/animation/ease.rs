/// Progress curve for pen legs.
///
/// The pen uses [`Ease::OutQuad`] by default, i.e. `p * (2 - p)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Constant pen speed.
    Linear,
    /// Pen decelerates into its target (`p * (2 - p)`).
    #[default]
    OutQuad,
}

impl Ease {
    /// Map normalized progress `t` (clamped into `[0, 1]`, NaN as 0) through the curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::OutQuad => t * (2.0 - t),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
