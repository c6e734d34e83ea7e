/// Stroke-by-stroke pen animation.
pub mod animator;
/// `vello_cpu` raster surface.
pub mod cpu;
/// Rendered RGBA frames.
pub mod frame;
/// Drawing surface trait and a recording implementation.
pub mod surface;
