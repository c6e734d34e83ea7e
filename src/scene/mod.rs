/// The five drawable primitives.
pub mod shape;
