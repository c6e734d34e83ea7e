/// Pen progress curves.
pub mod ease;
/// Pen position and eased motion legs.
pub mod pen;
