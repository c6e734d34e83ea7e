/// Coordinate bounding box and centering offset.
pub mod bounds;
